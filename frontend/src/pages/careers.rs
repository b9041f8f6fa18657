use yew::prelude::*;

use crate::components::reveal::{stagger_delay, Reveal, RevealFrom};
use crate::config;
use crate::content::careers::{application_mailto, INTERNSHIPS, PERKS};

#[function_component(Careers)]
pub fn careers() -> Html {
    html! {
        <div class="page careers-page">
            <div class="container">
                <Reveal class={classes!("page-header")} from={RevealFrom::Down} on_mount={true}>
                    <h1>{"Career "}<span class="accent">{"Opportunities"}</span></h1>
                    <p>
                        {format!(
                            "Join {} and kickstart your career in technology. We offer exciting internship \
                             opportunities for passionate individuals ready to make an impact.",
                            config::COMPANY_NAME
                        )}
                    </p>
                </Reveal>

                <Reveal tag="section" class={classes!("careers-section")}>
                    <div class="card perks-panel">
                        <h2 class="section-title">{"Why "}<span class="accent">{"Intern With Us?"}</span></h2>
                        <div class="perks-grid">
                            { for PERKS.iter().map(|perk| html! {
                                <div class="perk">
                                    <h3>{ perk.title }</h3>
                                    <p>{ perk.description }</p>
                                </div>
                            }) }
                        </div>
                    </div>
                </Reveal>

                <section class="careers-section">
                    <h2 class="section-title">{"Open "}<span class="accent">{"Positions"}</span></h2>
                    <div class="listing-grid">
                        { for INTERNSHIPS.iter().enumerate().map(|(index, internship)| html! {
                            <Reveal key={internship.id} class={classes!("card", "listing")} delay_ms={stagger_delay(index, 50, 0)}>
                                <div class="listing-header">
                                    <div class="icon-badge">{ internship.icon }</div>
                                    <div class="listing-title">
                                        <h3>{ internship.title }</h3>
                                        <p class="accent">{ internship.department }</p>
                                    </div>
                                    <span class="listing-kind">{ internship.kind }</span>
                                </div>
                                <div class="listing-meta">
                                    <span>{"⏱ "}{ internship.duration }</span>
                                    <span>{"📍 "}{ internship.location }</span>
                                </div>
                                <p class="listing-description">{ internship.description }</p>
                                <h4>{"Requirements:"}</h4>
                                <ul>
                                    { for internship.requirements.iter().map(|req| html! { <li>{ *req }</li> }) }
                                </ul>
                                <div class="listing-footer">
                                    <span><strong class="accent">{"Stipend:"}</strong>{" "}{ internship.stipend }</span>
                                    <a class="apply-link" href={application_mailto(Some(internship.title))}>{"Apply →"}</a>
                                </div>
                            </Reveal>
                        }) }
                    </div>
                </section>

                <Reveal tag="section" class={classes!("cta-panel", "apply-panel")}>
                    <div class="apply-icon">{"✉"}</div>
                    <h2>{"Interested in Joining Us?"}</h2>
                    <p>{"Send your resume along with a cover letter mentioning the position you're interested in."}</p>
                    <a class="btn-primary" href={application_mailto(None)}>
                        {"Send Resume to "}{ config::CAREERS_EMAIL }
                    </a>
                    <p class="apply-note">{"We typically respond within 3-5 business days"}</p>
                </Reveal>
            </div>
            <style>
                {r#"
                    .careers-page {
                        position: relative;
                        z-index: 1;
                    }
                    .careers-section {
                        margin-bottom: 4rem;
                    }
                    .perks-panel {
                        padding: 3rem;
                    }
                    .perks-grid {
                        display: grid;
                        grid-template-columns: repeat(3, 1fr);
                        gap: 1.5rem;
                    }
                    .perk {
                        text-align: center;
                        padding: 1rem;
                    }
                    .perk h3 {
                        color: var(--primary);
                        font-size: 1.25rem;
                        margin: 0 0 0.5rem;
                    }
                    .perk p {
                        color: var(--text-tertiary);
                        margin: 0;
                    }
                    .listing-grid {
                        display: grid;
                        grid-template-columns: repeat(2, 1fr);
                        gap: 2rem;
                    }
                    .listing {
                        padding: 1.5rem;
                    }
                    .listing-header {
                        display: flex;
                        align-items: flex-start;
                        gap: 1rem;
                        margin-bottom: 1rem;
                    }
                    .listing-title {
                        flex: 1;
                        min-width: 0;
                    }
                    .listing-title h3 {
                        font-size: 1.25rem;
                        margin: 0;
                    }
                    .listing-title p {
                        margin: 0.25rem 0 0;
                    }
                    .listing-kind {
                        padding: 0.25rem 0.75rem;
                        background: rgba(0, 152, 172, 0.2);
                        color: var(--primary);
                        border-radius: 9999px;
                        font-size: 0.875rem;
                    }
                    .listing-meta {
                        display: flex;
                        flex-wrap: wrap;
                        gap: 1rem;
                        color: var(--text-tertiary);
                        font-size: 0.875rem;
                        margin-bottom: 1rem;
                    }
                    .listing-description {
                        color: var(--text-secondary);
                        line-height: 1.7;
                    }
                    .listing h4 {
                        font-size: 0.875rem;
                        margin: 0 0 0.5rem;
                    }
                    .listing ul {
                        color: var(--text-tertiary);
                        font-size: 0.875rem;
                        padding-left: 1.25rem;
                        margin: 0 0 1rem;
                    }
                    .listing-footer {
                        display: flex;
                        align-items: center;
                        justify-content: space-between;
                        padding-top: 1rem;
                        border-top: 1px solid var(--border-color);
                        color: var(--text-secondary);
                    }
                    .apply-link {
                        color: var(--primary);
                        font-weight: 600;
                    }
                    .apply-link:hover {
                        color: var(--primary-light);
                    }
                    .apply-icon {
                        width: 5rem;
                        height: 5rem;
                        margin: 0 auto 1.5rem;
                        border-radius: 50%;
                        background: var(--primary);
                        color: #fff;
                        font-size: 2rem;
                        display: flex;
                        align-items: center;
                        justify-content: center;
                    }
                    .apply-note {
                        color: var(--text-tertiary);
                        font-size: 0.875rem;
                        margin: 1.5rem 0 0;
                    }
                    @media (max-width: 1024px) {
                        .listing-grid {
                            grid-template-columns: 1fr;
                        }
                    }
                    @media (max-width: 768px) {
                        .perks-grid {
                            grid-template-columns: repeat(2, 1fr);
                        }
                    }
                "#}
            </style>
        </div>
    }
}

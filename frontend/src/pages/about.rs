use yew::prelude::*;
use yew_router::prelude::*;

use crate::components::animated_counter::AnimatedCounter;
use crate::components::reveal::{stagger_delay, Reveal, RevealFrom};
use crate::config;
use crate::content::company::{OFFICE_IMAGE, STATS, TEAM, VALUES};
use crate::Route;

#[function_component(About)]
pub fn about() -> Html {
    html! {
        <div class="page about-page">
            <div class="container">
                <Reveal class={classes!("page-header")} from={RevealFrom::Down} on_mount={true}>
                    <h1>{"About "}<span class="accent">{ config::COMPANY_NAME }</span></h1>
                    <p>{"Empowering businesses worldwide with innovative IT solutions since 2014."}</p>
                </Reveal>

                <Reveal tag="section" class={classes!("about-section")}>
                    <div class="card mission-panel">
                        <h2 class="section-title">{"Our "}<span class="accent">{"Mission"}</span></h2>
                        <p>
                            {format!(
                                "At {}, our mission is to transform businesses through innovative \
                                 technology solutions. We strive to be the trusted partner that empowers \
                                 organizations to achieve their digital transformation goals, driving growth, \
                                 efficiency, and competitive advantage in an ever-evolving technological landscape.",
                                config::COMPANY_NAME
                            )}
                        </p>
                    </div>
                </Reveal>

                <section class="about-section about-stats">
                    { for STATS.iter().enumerate().map(|(index, stat)| html! {
                        <Reveal class={classes!("about-stat")} from={RevealFrom::Zoom} delay_ms={stagger_delay(index, 100, 0)}>
                            <h3><AnimatedCounter end={stat.value} suffix={stat.suffix} /></h3>
                            <p>{ stat.label }</p>
                        </Reveal>
                    }) }
                </section>

                <section class="about-section">
                    <h2 class="section-title">{"Meet Our "}<span class="accent">{"Team"}</span></h2>
                    <div class="team-grid">
                        { for TEAM.iter().enumerate().map(|(index, member)| html! {
                            <Reveal class={classes!("team-member")} delay_ms={stagger_delay(index, 100, 0)}>
                                <div class="team-photo">
                                    <img src={member.image} alt={member.name} />
                                </div>
                                <h3>{ member.name }</h3>
                                <p class="accent">{ member.role }</p>
                            </Reveal>
                        }) }
                    </div>
                </section>

                <section class="about-section">
                    <h2 class="section-title">{"Our "}<span class="accent">{"Values"}</span></h2>
                    <div class="values-grid">
                        { for VALUES.iter().enumerate().map(|(index, value)| html! {
                            <Reveal
                                class={classes!("card", "value-card")}
                                from={RevealFrom::alternate(index)}
                                delay_ms={stagger_delay(index, 100, 0)}
                            >
                                <div class="icon-badge">{ value.icon }</div>
                                <div>
                                    <h3>{ value.title }</h3>
                                    <p>{ value.description }</p>
                                </div>
                            </Reveal>
                        }) }
                    </div>
                </section>

                <Reveal tag="section" class={classes!("join-banner")}>
                    <img src={OFFICE_IMAGE} alt={format!("{} Office", config::COMPANY_NAME)} />
                    <div class="join-overlay">
                        <h2>{"Join Our Team"}</h2>
                        <p>{"Be part of something extraordinary"}</p>
                        <Link<Route> to={Route::Careers} classes="btn-primary">{"View Careers"}</Link<Route>>
                    </div>
                </Reveal>
            </div>
            <style>
                {r#"
                    .about-page {
                        position: relative;
                        z-index: 1;
                    }
                    .about-section {
                        margin-bottom: 5rem;
                    }
                    .mission-panel {
                        padding: 3rem;
                    }
                    .mission-panel .section-title {
                        margin-bottom: 1.5rem;
                    }
                    .mission-panel p {
                        font-size: 1.25rem;
                        color: var(--text-secondary);
                        line-height: 1.7;
                        text-align: center;
                        max-width: 56rem;
                        margin: 0 auto;
                    }
                    .about-stats {
                        display: grid;
                        grid-template-columns: repeat(4, 1fr);
                        gap: 1.5rem;
                    }
                    .about-stat {
                        text-align: center;
                        padding: 2rem;
                        background: linear-gradient(135deg, rgba(0, 152, 172, 0.1), rgba(0, 152, 172, 0.2));
                        border: 1px solid rgba(0, 152, 172, 0.3);
                        border-radius: 0.75rem;
                    }
                    .about-stat h3 {
                        font-size: 3rem;
                        color: var(--primary);
                        margin: 0 0 0.75rem;
                    }
                    .about-stat p {
                        color: var(--text-tertiary);
                        font-size: 1.125rem;
                        margin: 0;
                    }
                    .team-grid {
                        display: grid;
                        grid-template-columns: repeat(4, 1fr);
                        gap: 2rem;
                    }
                    .team-member {
                        transition: transform 0.3s ease;
                    }
                    .team-member:hover {
                        transform: translateY(-10px);
                    }
                    .team-photo {
                        overflow: hidden;
                        border-radius: 0.75rem;
                        margin-bottom: 1rem;
                    }
                    .team-photo img {
                        width: 100%;
                        height: 20rem;
                        object-fit: cover;
                        transition: transform 0.5s ease;
                    }
                    .team-member:hover .team-photo img {
                        transform: scale(1.1);
                    }
                    .team-member h3 {
                        font-size: 1.25rem;
                        margin: 0 0 0.5rem;
                    }
                    .team-member p {
                        margin: 0;
                    }
                    .values-grid {
                        display: grid;
                        grid-template-columns: repeat(2, 1fr);
                        gap: 2rem;
                    }
                    .value-card {
                        display: flex;
                        align-items: flex-start;
                        gap: 1rem;
                        padding: 1.5rem;
                    }
                    .value-card h3 {
                        font-size: 1.5rem;
                        margin: 0 0 0.75rem;
                    }
                    .value-card p {
                        color: var(--text-tertiary);
                        line-height: 1.7;
                        margin: 0;
                    }
                    .join-banner {
                        position: relative;
                        height: 24rem;
                        border-radius: 1rem;
                        overflow: hidden;
                    }
                    .join-banner img {
                        width: 100%;
                        height: 100%;
                        object-fit: cover;
                    }
                    .join-overlay {
                        position: absolute;
                        inset: 0;
                        display: flex;
                        flex-direction: column;
                        align-items: center;
                        justify-content: center;
                        text-align: center;
                        background: linear-gradient(90deg, rgba(10, 10, 10, 0.8), rgba(0, 152, 172, 0.2));
                    }
                    .join-overlay h2 {
                        font-size: clamp(2.25rem, 5vw, 3rem);
                        margin: 0 0 1rem;
                    }
                    .join-overlay p {
                        font-size: 1.25rem;
                        color: var(--text-secondary);
                        margin: 0 0 1.5rem;
                    }
                    @media (max-width: 1024px) {
                        .team-grid {
                            grid-template-columns: repeat(2, 1fr);
                        }
                    }
                    @media (max-width: 768px) {
                        .about-stats {
                            grid-template-columns: repeat(2, 1fr);
                        }
                        .team-grid,
                        .values-grid {
                            grid-template-columns: 1fr;
                        }
                    }
                "#}
            </style>
        </div>
    }
}

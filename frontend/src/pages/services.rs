use yew::prelude::*;
use yew_router::prelude::*;

use crate::components::reveal::{stagger_delay, Reveal, RevealFrom};
use crate::content::services::SERVICES;
use crate::Route;

#[function_component(Services)]
pub fn services() -> Html {
    html! {
        <div class="page services-page">
            <div class="container">
                <Reveal class={classes!("page-header")} from={RevealFrom::Down} on_mount={true}>
                    <h1>{"Our "}<span class="accent">{"Services"}</span></h1>
                    <p>
                        {"We offer comprehensive IT solutions tailored to meet your business needs. \
                          From concept to deployment, we're with you every step of the way."}
                    </p>
                </Reveal>

                <div class="service-grid">
                    { for SERVICES.iter().enumerate().map(|(index, service)| html! {
                        <Reveal class={classes!("card", "service-card")} delay_ms={stagger_delay(index, 100, 0)}>
                            <div class="icon-badge service-icon">{ service.icon }</div>
                            <h3>{ service.title }</h3>
                            <p class="service-description">{ service.description }</p>
                            <ul class="service-highlights">
                                { for service.highlights.iter().map(|item| html! { <li>{ *item }</li> }) }
                            </ul>
                            <Link<Route>
                                to={Route::ServiceDetail { service_id: service.slug.to_string() }}
                                classes="learn-more"
                            >
                                {"Learn More"}
                                <span class="learn-more-arrow">{"→"}</span>
                            </Link<Route>>
                        </Reveal>
                    }) }
                </div>

                <Reveal class={classes!("cta-panel", "services-cta")}>
                    <h2>{"Ready to Transform Your Business?"}</h2>
                    <p>
                        {"Let's discuss how our services can help you achieve your goals. \
                          Get in touch with our team today."}
                    </p>
                    <Link<Route> to={Route::Contact} classes="btn-primary">{"Request a Quote"}</Link<Route>>
                </Reveal>
            </div>
            <style>
                {r#"
                    .services-page {
                        position: relative;
                        z-index: 1;
                    }
                    .service-grid {
                        display: grid;
                        grid-template-columns: repeat(3, 1fr);
                        gap: 2rem;
                    }
                    .service-card {
                        padding: 2rem;
                        display: flex;
                        flex-direction: column;
                    }
                    .service-card:hover {
                        transform: scale(1.03);
                        box-shadow: 0 10px 30px rgba(0, 152, 172, 0.3);
                    }
                    .service-icon {
                        width: 4rem;
                        height: 4rem;
                        margin-bottom: 1.5rem;
                    }
                    .service-card h3 {
                        font-size: 1.5rem;
                        margin: 0 0 1rem;
                    }
                    .service-description {
                        color: var(--text-tertiary);
                        line-height: 1.7;
                        margin: 0 0 1.5rem;
                    }
                    .service-highlights {
                        list-style: none;
                        padding: 0;
                        margin: 0 0 1.5rem;
                        flex: 1;
                    }
                    .service-highlights li {
                        display: flex;
                        align-items: center;
                        color: var(--text-secondary);
                        margin-bottom: 0.5rem;
                    }
                    .service-highlights li::before {
                        content: '';
                        width: 0.5rem;
                        height: 0.5rem;
                        border-radius: 50%;
                        background: var(--primary);
                        margin-right: 0.75rem;
                    }
                    .learn-more {
                        color: var(--primary);
                        font-weight: 600;
                        display: inline-flex;
                        align-items: center;
                        gap: 0.5rem;
                        transition: color 0.3s ease;
                    }
                    .learn-more:hover {
                        color: var(--primary-light);
                    }
                    .learn-more-arrow {
                        transition: transform 0.3s ease;
                    }
                    .learn-more:hover .learn-more-arrow {
                        transform: translateX(0.5rem);
                    }
                    .services-cta {
                        margin-top: 5rem;
                    }
                    @media (max-width: 1024px) {
                        .service-grid {
                            grid-template-columns: repeat(2, 1fr);
                        }
                    }
                    @media (max-width: 768px) {
                        .service-grid {
                            grid-template-columns: 1fr;
                        }
                    }
                "#}
            </style>
        </div>
    }
}

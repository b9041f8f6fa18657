use yew::prelude::*;
use yew_router::prelude::*;

use crate::components::reveal::{stagger_delay, Reveal, RevealFrom};
use crate::content::services::{find_service, ServiceDetail as Detail};
use crate::Route;

fn cta_blurb(title: &str) -> String {
    format!(
        "Let's discuss how our {} services can help transform your business.",
        title.to_lowercase()
    )
}

#[derive(Properties, PartialEq)]
pub struct ServiceDetailProps {
    pub service_id: AttrValue,
}

#[function_component(ServiceDetail)]
pub fn service_detail(props: &ServiceDetailProps) -> Html {
    let Some(service) = find_service(&props.service_id) else {
        log::warn!("unknown service '{}', redirecting to the catalogue", props.service_id);
        return html! { <Redirect<Route> to={Route::Services} /> };
    };

    html! {
        <div class="page service-detail-page">
            <div class="container">
                <Link<Route> to={Route::Services} classes="back-link">
                    <span class="back-arrow">{"←"}</span>{" Back to Services"}
                </Link<Route>>

                <Reveal class={classes!("detail-hero")} on_mount={true}>
                    <div class="detail-title">
                        <div class="icon-badge detail-icon">{ service.icon }</div>
                        <h1>{ service.title }</h1>
                    </div>
                    <p class="detail-tagline">{ service.tagline }</p>
                    <p class="detail-description">{ service.description }</p>
                </Reveal>

                <Reveal class={classes!("detail-image")} from={RevealFrom::Zoom} on_mount={true} delay_ms={200}>
                    <img src={service.hero_image} alt={format!("{} showcase", service.title)} />
                </Reveal>

                { features(service) }
                { technologies(service) }

                <Reveal class={classes!("detail-image")} from={RevealFrom::Zoom} on_mount={true} delay_ms={700}>
                    <img src={service.showcase_image} alt={format!("{} in action", service.title)} />
                </Reveal>

                <Reveal class={classes!("card", "detail-benefits")} on_mount={true} delay_ms={800}>
                    <h2>{"Benefits"}</h2>
                    <ul>
                        { for service.benefits.iter().map(|benefit| html! {
                            <li><span class="check">{"✓"}</span><span>{ *benefit }</span></li>
                        }) }
                    </ul>
                </Reveal>

                <section class="detail-section">
                    <h2>{"Our Process"}</h2>
                    <div class="process-grid">
                        { for service.process.iter().enumerate().map(|(index, step)| html! {
                            <Reveal class={classes!("card", "process-step")} on_mount={true} delay_ms={stagger_delay(index, 100, 1100)}>
                                <div class="step-number">{ (index + 1).to_string() }</div>
                                <h3>{ step.step }</h3>
                                <p>{ step.description }</p>
                            </Reveal>
                        }) }
                    </div>
                </section>

                <Reveal class={classes!("cta-panel")} on_mount={true} delay_ms={1200}>
                    <h2>{"Ready to Get Started?"}</h2>
                    <p>{ cta_blurb(service.title) }</p>
                    <Link<Route> to={Route::Contact} classes="btn-primary">{"Contact Us Today"}</Link<Route>>
                </Reveal>
            </div>
            <style>
                {r#"
                    .service-detail-page {
                        position: relative;
                        z-index: 1;
                        padding-top: 6rem;
                    }
                    .back-link {
                        display: inline-flex;
                        align-items: center;
                        gap: 0.25rem;
                        color: var(--primary);
                        margin-bottom: 2rem;
                        transition: color 0.3s ease;
                    }
                    .back-link:hover {
                        color: var(--primary-light);
                    }
                    .back-arrow {
                        transition: transform 0.3s ease;
                    }
                    .back-link:hover .back-arrow {
                        transform: translateX(-0.25rem);
                    }
                    .detail-hero {
                        margin-bottom: 4rem;
                    }
                    .detail-title {
                        display: flex;
                        align-items: center;
                        gap: 1rem;
                        margin-bottom: 1.5rem;
                    }
                    .detail-icon {
                        width: 5rem;
                        height: 5rem;
                        font-size: 2.5rem;
                        border-radius: 0.75rem;
                    }
                    .detail-title h1 {
                        font-size: clamp(2.5rem, 6vw, 3.75rem);
                        margin: 0;
                    }
                    .detail-tagline {
                        font-size: clamp(1.5rem, 3vw, 1.875rem);
                        color: var(--primary);
                        font-weight: 600;
                        margin: 0 0 1.5rem;
                    }
                    .detail-description {
                        font-size: 1.25rem;
                        color: var(--text-tertiary);
                        line-height: 1.7;
                        max-width: 56rem;
                    }
                    .detail-image {
                        position: relative;
                        height: 500px;
                        border-radius: 1rem;
                        overflow: hidden;
                        margin-bottom: 4rem;
                        box-shadow: 0 25px 50px rgba(0, 0, 0, 0.5);
                    }
                    .detail-image img {
                        width: 100%;
                        height: 100%;
                        object-fit: cover;
                    }
                    .detail-image::after {
                        content: '';
                        position: absolute;
                        inset: 0;
                        background: linear-gradient(to top, rgba(10, 10, 10, 0.8), transparent);
                    }
                    .detail-section {
                        margin-bottom: 4rem;
                    }
                    .detail-section h2,
                    .detail-benefits h2 {
                        font-size: clamp(1.875rem, 4vw, 2.25rem);
                        margin: 0 0 2rem;
                    }
                    .feature-grid,
                    .process-grid {
                        display: grid;
                        grid-template-columns: repeat(3, 1fr);
                        gap: 1.5rem;
                    }
                    .feature-item {
                        display: flex;
                        align-items: flex-start;
                        gap: 0.75rem;
                        padding: 1.5rem;
                        font-size: 1.125rem;
                        color: var(--text-secondary);
                    }
                    .check {
                        color: var(--primary);
                        font-weight: 700;
                        flex-shrink: 0;
                    }
                    .tech-list {
                        display: flex;
                        flex-wrap: wrap;
                        gap: 1rem;
                    }
                    .tech-pill {
                        padding: 0.75rem 1.5rem;
                        background: rgba(0, 152, 172, 0.1);
                        color: var(--primary);
                        border: 1px solid rgba(0, 152, 172, 0.3);
                        border-radius: 9999px;
                        font-size: 1.125rem;
                        font-weight: 600;
                    }
                    .detail-benefits {
                        padding: 3rem;
                        margin-bottom: 4rem;
                    }
                    .detail-benefits ul {
                        list-style: none;
                        padding: 0;
                        margin: 0;
                    }
                    .detail-benefits li {
                        display: flex;
                        gap: 1rem;
                        font-size: 1.125rem;
                        color: var(--text-secondary);
                        margin-bottom: 1rem;
                    }
                    .process-step {
                        position: relative;
                        padding: 1.5rem;
                    }
                    .step-number {
                        position: absolute;
                        top: -1rem;
                        left: -1rem;
                        width: 3rem;
                        height: 3rem;
                        border-radius: 50%;
                        background: var(--primary);
                        color: #fff;
                        font-weight: 700;
                        font-size: 1.25rem;
                        display: flex;
                        align-items: center;
                        justify-content: center;
                    }
                    .process-step h3 {
                        color: var(--primary);
                        margin: 0.5rem 0 0.75rem;
                    }
                    .process-step p {
                        color: var(--text-tertiary);
                        margin: 0;
                    }
                    @media (max-width: 1024px) {
                        .feature-grid,
                        .process-grid {
                            grid-template-columns: repeat(2, 1fr);
                        }
                    }
                    @media (max-width: 768px) {
                        .feature-grid,
                        .process-grid {
                            grid-template-columns: 1fr;
                        }
                        .detail-image {
                            height: 400px;
                        }
                    }
                "#}
            </style>
        </div>
    }
}

fn features(service: &Detail) -> Html {
    html! {
        <section class="detail-section">
            <h2>{"Key Features"}</h2>
            <div class="feature-grid">
                { for service.features.iter().enumerate().map(|(index, feature)| html! {
                    <Reveal class={classes!("card", "feature-item")} on_mount={true} delay_ms={stagger_delay(index, 100, 400)}>
                        <span class="check">{"✓"}</span>
                        <span>{ *feature }</span>
                    </Reveal>
                }) }
            </div>
        </section>
    }
}

fn technologies(service: &Detail) -> Html {
    html! {
        <section class="detail-section">
            <h2>{"Technologies We Use"}</h2>
            <div class="tech-list">
                { for service.technologies.iter().enumerate().map(|(index, tech)| html! {
                    <Reveal tag="span" class={classes!("tech-pill")} from={RevealFrom::Zoom} on_mount={true} delay_ms={stagger_delay(index, 50, 600)}>
                        { *tech }
                    </Reveal>
                }) }
            </div>
        </section>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cta_mentions_the_service_in_lower_case() {
        assert_eq!(
            cta_blurb("Cloud Solutions"),
            "Let's discuss how our cloud solutions services can help transform your business."
        );
    }
}

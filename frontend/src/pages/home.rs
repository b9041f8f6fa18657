use yew::prelude::*;
use yew_router::prelude::*;

use crate::components::animated_counter::AnimatedCounter;
use crate::components::earth_globe::EarthGlobe;
use crate::components::reveal::{stagger_delay, Reveal, RevealFrom};
use crate::config;
use crate::content::company::{HIGHLIGHTS, STATS};
use crate::motion::hooks::use_hero_transforms;
use crate::motion::scroll::HeroElement;
use crate::Route;

#[function_component(Home)]
pub fn home() -> Html {
    let hero_ref = use_node_ref();
    let hero = use_hero_transforms(hero_ref.clone());

    html! {
        <div class="home-page">
            <section ref={hero_ref} class="hero">
                <div class="container hero-grid">
                    <div class="hero-copy">
                        <h1 style={hero.get(HeroElement::Heading).style()}>
                            {"Empowering Innovation with "}
                            <span class="accent">{"IT Solutions"}</span>
                        </h1>
                        <p class="hero-subtext" style={hero.get(HeroElement::Subtext).style()}>
                            {"Driving businesses forward with technology, creativity, and expertise."}
                        </p>
                        <div style={hero.get(HeroElement::Button).style()}>
                            <Link<Route> to={Route::Services} classes="btn-primary">
                                {"Explore Our Services"}
                            </Link<Route>>
                        </div>
                    </div>
                    <div class="hero-globe" style={hero.get(HeroElement::Globe).style()}>
                        <EarthGlobe />
                    </div>
                </div>
            </section>

            <section class="overview">
                <div class="container">
                    <Reveal class={classes!("page-header")}>
                        <h2 class="section-title">
                            {"About "}<span class="accent">{ config::COMPANY_NAME }</span>
                        </h2>
                        <p>
                            {"We are a leading IT solutions provider specializing in web development, \
                              mobile applications, cloud infrastructure, and AI integration. Our mission \
                              is to transform your digital vision into reality with cutting-edge \
                              technology and innovative solutions."}
                        </p>
                    </Reveal>
                    <div class="highlight-grid">
                        { for HIGHLIGHTS.iter().enumerate().map(|(index, item)| html! {
                            <Reveal class={classes!("highlight-card")} delay_ms={stagger_delay(index, 200, 0)}>
                                <img src={item.image} alt={item.title} />
                                <div class="highlight-overlay">
                                    <h3>{ item.title }</h3>
                                    <p>{ item.description }</p>
                                </div>
                            </Reveal>
                        }) }
                    </div>
                </div>
            </section>

            <section class="stats">
                <div class="container stats-grid">
                    { for STATS.iter().enumerate().map(|(index, stat)| html! {
                        <Reveal class={classes!("stat-card")} from={RevealFrom::Zoom} delay_ms={stagger_delay(index, 100, 0)}>
                            <h3><AnimatedCounter end={stat.value} suffix={stat.suffix} /></h3>
                            <p>{ stat.label }</p>
                        </Reveal>
                    }) }
                </div>
            </section>

            <style>
                {r#"
                    .hero {
                        min-height: 100vh;
                        display: flex;
                        align-items: center;
                        padding: 6rem 1rem 2rem;
                        position: relative;
                        z-index: 1;
                    }
                    .hero-grid {
                        display: grid;
                        grid-template-columns: 1fr 1fr;
                        gap: 3rem;
                        align-items: center;
                        width: 100%;
                    }
                    .hero-copy h1 {
                        font-size: clamp(3rem, 6vw, 4.5rem);
                        font-weight: 700;
                        line-height: 1.1;
                        margin: 0 0 1.5rem;
                    }
                    .hero-subtext {
                        font-size: clamp(1.25rem, 2.5vw, 1.5rem);
                        color: var(--text-tertiary);
                        line-height: 1.6;
                        margin: 0 0 2rem;
                    }
                    .hero-globe {
                        height: 600px;
                    }
                    .overview,
                    .stats {
                        position: relative;
                        z-index: 1;
                        padding: 5rem 1rem;
                    }
                    .highlight-grid {
                        display: grid;
                        grid-template-columns: repeat(3, 1fr);
                        gap: 2rem;
                    }
                    .highlight-card {
                        position: relative;
                        overflow: hidden;
                        border-radius: 0.75rem;
                        border: 1px solid var(--border-color);
                    }
                    .highlight-card img {
                        width: 100%;
                        height: 16rem;
                        object-fit: cover;
                        transition: transform 0.5s ease;
                    }
                    .highlight-card:hover img {
                        transform: scale(1.1);
                    }
                    .highlight-overlay {
                        position: absolute;
                        inset: 0;
                        display: flex;
                        flex-direction: column;
                        justify-content: flex-end;
                        padding: 1.5rem;
                        background: linear-gradient(to top, var(--bg-primary), rgba(10, 10, 10, 0.8) 40%, transparent);
                    }
                    .highlight-overlay h3 {
                        font-size: 1.5rem;
                        margin: 0 0 0.5rem;
                    }
                    .highlight-overlay p {
                        color: var(--text-secondary);
                        margin: 0;
                    }
                    .stats {
                        background: linear-gradient(to bottom, transparent, rgba(20, 20, 20, 0.5));
                    }
                    .stats-grid {
                        display: grid;
                        grid-template-columns: repeat(4, 1fr);
                        gap: 2rem;
                    }
                    .stat-card {
                        text-align: center;
                        padding: 2rem;
                        background: rgba(20, 20, 20, 0.5);
                        backdrop-filter: blur(4px);
                        border: 1px solid rgba(0, 152, 172, 0.2);
                        border-radius: 0.75rem;
                    }
                    .stat-card h3 {
                        font-size: 3rem;
                        color: var(--primary);
                        margin: 0 0 0.75rem;
                    }
                    .stat-card p {
                        color: var(--text-tertiary);
                        font-size: 1.125rem;
                        margin: 0;
                    }
                    @media (max-width: 1024px) {
                        .hero-grid {
                            grid-template-columns: 1fr;
                        }
                        .hero-globe {
                            height: 500px;
                        }
                    }
                    @media (max-width: 768px) {
                        .highlight-grid,
                        .stats-grid {
                            grid-template-columns: 1fr;
                        }
                    }
                "#}
            </style>
        </div>
    }
}

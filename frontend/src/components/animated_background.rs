use yew::prelude::*;

const ORBS: usize = 6;

#[function_component(AnimatedBackground)]
pub fn animated_background() -> Html {
    html! {
        <div class="animated-bg-container" aria-hidden="true">
            { for (1..=ORBS).map(|n| html! { <div class={classes!("glow-orb", format!("orb-{n}"))}></div> }) }
            <style>
                {r#"
                    .animated-bg-container {
                        position: fixed;
                        inset: 0;
                        overflow: hidden;
                        pointer-events: none;
                        z-index: 0;
                    }
                    .glow-orb {
                        position: absolute;
                        border-radius: 50%;
                        filter: blur(80px);
                        opacity: 0.35;
                        animation: orb-drift 22s ease-in-out infinite alternate;
                    }
                    .orb-1 { width: 420px; height: 420px; top: -120px; left: -80px; background: rgba(0, 152, 172, 0.45); }
                    .orb-2 { width: 320px; height: 320px; top: 30%; right: -100px; background: rgba(0, 184, 206, 0.35); animation-duration: 26s; }
                    .orb-3 { width: 260px; height: 260px; bottom: 10%; left: 20%; background: rgba(0, 122, 140, 0.4); animation-duration: 30s; }
                    .orb-4 { width: 200px; height: 200px; top: 55%; left: -60px; background: rgba(0, 212, 234, 0.25); animation-duration: 18s; }
                    .orb-5 { width: 360px; height: 360px; bottom: -140px; right: 15%; background: rgba(0, 152, 172, 0.3); animation-duration: 34s; }
                    .orb-6 { width: 180px; height: 180px; top: 12%; left: 55%; background: rgba(0, 184, 206, 0.3); animation-duration: 24s; }
                    @keyframes orb-drift {
                        0% { transform: translate(0, 0) scale(1); }
                        50% { transform: translate(40px, -30px) scale(1.1); }
                        100% { transform: translate(-30px, 40px) scale(0.95); }
                    }
                    @media (prefers-reduced-motion: reduce) {
                        .glow-orb { animation: none; }
                    }
                "#}
            </style>
        </div>
    }
}

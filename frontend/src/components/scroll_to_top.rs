use web_sys::{ScrollBehavior, ScrollToOptions};
use yew::prelude::*;
use yew_hooks::use_window_scroll;
use yew_router::prelude::*;

use crate::config;
use crate::Route;

/// Resets the scroll position on every navigation and offers a floating
/// "back to top" button further down long pages.
#[function_component(ScrollToTop)]
pub fn scroll_to_top() -> Html {
    let route = use_route::<Route>();
    let (_, scroll_y) = use_window_scroll();

    use_effect_with_deps(
        move |_| {
            if let Some(window) = web_sys::window() {
                window.scroll_to_with_x_and_y(0.0, 0.0);
            }
            || ()
        },
        route,
    );

    let onclick = Callback::from(|_: MouseEvent| {
        if let Some(window) = web_sys::window() {
            let options = ScrollToOptions::new();
            options.set_top(0.0);
            options.set_behavior(ScrollBehavior::Smooth);
            window.scroll_to_with_scroll_to_options(&options);
        }
    });

    let visible = scroll_y > config::SCROLL_TOP_VISIBLE_AFTER_PX;

    html! {
        <>
            <button
                class={classes!("scroll-to-top", visible.then_some("visible"))}
                aria-label="Scroll to top"
                onclick={onclick}
            >
                {"↑"}
            </button>
            <style>
                {r#"
                    .scroll-to-top {
                        position: fixed;
                        right: 2rem;
                        bottom: 2rem;
                        z-index: 90;
                        width: 48px;
                        height: 48px;
                        border: none;
                        border-radius: 50%;
                        background: var(--primary);
                        color: #fff;
                        font-size: 1.4rem;
                        cursor: pointer;
                        opacity: 0;
                        pointer-events: none;
                        transform: translateY(20px);
                        transition: opacity 0.3s ease, transform 0.3s ease, background 0.2s ease;
                    }
                    .scroll-to-top.visible {
                        opacity: 1;
                        pointer-events: auto;
                        transform: translateY(0);
                    }
                    .scroll-to-top:hover {
                        background: var(--primary-hover);
                    }
                "#}
            </style>
        </>
    }
}

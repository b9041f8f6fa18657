use yew::prelude::*;
use yew_hooks::use_window_scroll;
use yew_router::prelude::*;

use crate::config;
use crate::Route;

fn nav_links() -> [(&'static str, Route); 4] {
    [
        ("Home", Route::Home),
        ("Services", Route::Services),
        ("About", Route::About),
        ("Contact", Route::Contact),
    ]
}

/// Detail pages keep their section's link highlighted.
pub fn is_active(current: Option<&Route>, link: &Route) -> bool {
    match (current, link) {
        (Some(Route::ServiceDetail { .. }), Route::Services) => true,
        (Some(current), link) => current == link,
        (None, _) => false,
    }
}

#[function_component(Navbar)]
pub fn navbar() -> Html {
    let (_, scroll_y) = use_window_scroll();
    let route = use_route::<Route>();
    let menu_open = use_state_eq(|| false);
    let logo_failed = use_state_eq(|| false);

    {
        // Navigating always collapses the mobile menu.
        let menu_open = menu_open.clone();
        use_effect_with_deps(
            move |_| {
                menu_open.set(false);
                || ()
            },
            route.clone(),
        );
    }

    let toggle_menu = {
        let menu_open = menu_open.clone();
        Callback::from(move |_: MouseEvent| menu_open.set(!*menu_open))
    };
    let close_menu = {
        let menu_open = menu_open.clone();
        Callback::from(move |_: MouseEvent| menu_open.set(false))
    };
    let on_logo_error = {
        let logo_failed = logo_failed.clone();
        Callback::from(move |_: Event| {
            log::warn!("logo failed to load, showing {} mark", config::COMPANY_MARK);
            logo_failed.set(true);
        })
    };

    let solid = scroll_y > config::NAV_SOLID_AFTER_PX;

    html! {
        <nav class={classes!("navbar", solid.then_some("scrolled"))}>
            <div class="navbar-inner container">
                <Link<Route> to={Route::Home} classes="navbar-logo">
                    if *logo_failed {
                        <span class="logo-mark">{ config::COMPANY_MARK }</span>
                    } else {
                        <img src={config::LOGO_PATH} alt={config::COMPANY_NAME} onerror={on_logo_error} />
                    }
                    <span class="logo-name">{ config::COMPANY_NAME }</span>
                </Link<Route>>

                <button
                    class={classes!("burger-menu", menu_open.then_some("open"))}
                    aria-label="Toggle navigation"
                    onclick={toggle_menu}
                >
                    <span></span><span></span><span></span>
                </button>

                <div class={classes!("navbar-links", menu_open.then_some("mobile-menu-open"))}>
                    { for nav_links().into_iter().map(|(label, target)| {
                        let active = is_active(route.as_ref(), &target);
                        html! {
                            <div onclick={close_menu.clone()}>
                                <Link<Route> to={target} classes={classes!("nav-link", active.then_some("active"))}>
                                    { label }
                                </Link<Route>>
                            </div>
                        }
                    }) }
                </div>
            </div>
            <style>
                {r#"
                    .navbar {
                        position: fixed;
                        top: 0;
                        left: 0;
                        right: 0;
                        z-index: 100;
                        padding: 1.25rem 0;
                        background: transparent;
                        transition: background 0.3s ease, padding 0.3s ease, box-shadow 0.3s ease;
                    }
                    .navbar.scrolled {
                        padding: 0.75rem 0;
                        background: rgba(10, 10, 10, 0.92);
                        backdrop-filter: blur(12px);
                        box-shadow: 0 2px 20px rgba(0, 0, 0, 0.4);
                    }
                    .navbar-inner {
                        display: flex;
                        align-items: center;
                        justify-content: space-between;
                    }
                    .navbar-logo {
                        display: flex;
                        align-items: center;
                        gap: 0.6rem;
                        text-decoration: none;
                        color: var(--text-primary);
                        font-weight: 700;
                        font-size: 1.25rem;
                    }
                    .navbar-logo img {
                        height: 40px;
                    }
                    .logo-mark {
                        display: inline-flex;
                        align-items: center;
                        justify-content: center;
                        width: 40px;
                        height: 40px;
                        border-radius: 10px;
                        background: linear-gradient(135deg, var(--primary), var(--primary-light));
                        color: #fff;
                        font-size: 1rem;
                    }
                    .navbar-links {
                        display: flex;
                        gap: 2rem;
                    }
                    .nav-link {
                        color: var(--text-secondary);
                        text-decoration: none;
                        font-weight: 500;
                        position: relative;
                        transition: color 0.2s ease;
                    }
                    .nav-link:hover,
                    .nav-link.active {
                        color: var(--primary-light);
                    }
                    .nav-link.active::after {
                        content: '';
                        position: absolute;
                        left: 0;
                        right: 0;
                        bottom: -6px;
                        height: 2px;
                        background: var(--primary);
                    }
                    .burger-menu {
                        display: none;
                        flex-direction: column;
                        gap: 5px;
                        background: none;
                        border: none;
                        cursor: pointer;
                        padding: 0.5rem;
                    }
                    .burger-menu span {
                        width: 24px;
                        height: 2px;
                        background: var(--text-primary);
                        transition: transform 0.3s ease, opacity 0.3s ease;
                    }
                    .burger-menu.open span:nth-child(1) { transform: translateY(7px) rotate(45deg); }
                    .burger-menu.open span:nth-child(2) { opacity: 0; }
                    .burger-menu.open span:nth-child(3) { transform: translateY(-7px) rotate(-45deg); }
                    @media (max-width: 768px) {
                        .burger-menu {
                            display: flex;
                        }
                        .navbar-links {
                            position: fixed;
                            top: 70px;
                            left: 0;
                            right: 0;
                            flex-direction: column;
                            gap: 1.25rem;
                            padding: 1.5rem 2rem;
                            background: rgba(10, 10, 10, 0.97);
                            transform: translateY(-150%);
                            transition: transform 0.3s ease;
                        }
                        .navbar-links.mobile-menu-open {
                            transform: translateY(0);
                        }
                    }
                "#}
            </style>
        </nav>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn exact_route_is_active() {
        assert!(is_active(Some(&Route::About), &Route::About));
        assert!(!is_active(Some(&Route::About), &Route::Home));
        assert!(!is_active(None, &Route::Home));
    }

    #[test]
    fn service_detail_highlights_services() {
        let detail = Route::ServiceDetail { service_id: "web-development".into() };
        assert!(is_active(Some(&detail), &Route::Services));
        assert!(!is_active(Some(&detail), &Route::Home));
    }

    #[test]
    fn careers_has_no_nav_entry() {
        assert!(nav_links().iter().all(|(_, route)| *route != Route::Careers));
    }
}

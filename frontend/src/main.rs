use yew::prelude::*;
use yew_router::prelude::*;
use log::info;

mod config;
mod contact;
mod content;
mod motion;
mod theme;
mod components {
    pub mod animated_background;
    pub mod animated_counter;
    pub mod earth_globe;
    pub mod footer;
    pub mod navbar;
    pub mod reveal;
    pub mod scroll_to_top;
}
mod pages {
    pub mod about;
    pub mod careers;
    pub mod contact;
    pub mod home;
    pub mod not_found;
    pub mod service_detail;
    pub mod services;
}

use components::{
    animated_background::AnimatedBackground,
    footer::Footer,
    navbar::Navbar,
    scroll_to_top::ScrollToTop,
};
use pages::{
    about::About,
    careers::Careers,
    contact::Contact,
    home::Home,
    not_found::NotFound,
    service_detail::ServiceDetail,
    services::Services,
};

#[derive(Clone, Debug, Routable, PartialEq)]
pub enum Route {
    #[at("/")]
    Home,
    #[at("/services")]
    Services,
    #[at("/services/:service_id")]
    ServiceDetail { service_id: String },
    #[at("/about")]
    About,
    #[at("/contact")]
    Contact,
    #[at("/careers")]
    Careers,
    #[not_found]
    #[at("/404")]
    NotFound,
}

fn switch(routes: Route) -> Html {
    match routes {
        Route::Home => {
            info!("Rendering Home page");
            html! { <Home /> }
        }
        Route::Services => {
            info!("Rendering Services page");
            html! { <Services /> }
        }
        Route::ServiceDetail { service_id } => {
            info!("Rendering ServiceDetail page for {service_id}");
            html! { <ServiceDetail service_id={service_id} /> }
        }
        Route::About => {
            info!("Rendering About page");
            html! { <About /> }
        }
        Route::Contact => {
            info!("Rendering Contact page");
            html! { <Contact /> }
        }
        Route::Careers => {
            info!("Rendering Careers page");
            html! { <Careers /> }
        }
        Route::NotFound => {
            info!("Rendering NotFound page");
            html! { <NotFound /> }
        }
    }
}

#[function_component]
fn App() -> Html {
    theme::use_global_theme();

    html! {
        <BrowserRouter>
            <AnimatedBackground />
            <Navbar />
            <ScrollToTop />
            <main class="site-main">
                <Switch<Route> render={switch} />
            </main>
            <Footer />
        </BrowserRouter>
    }
}

fn main() {
    // Initialize console error panic hook for better error messages
    console_error_panic_hook::set_once();

    console_log::init_with_level(config::log_level()).expect("error initializing log");

    info!("Starting {}", config::COMPANY_NAME);
    yew::Renderer::<App>::new().render();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn routes_parse_from_paths() {
        assert_eq!(Route::recognize("/"), Some(Route::Home));
        assert_eq!(Route::recognize("/services"), Some(Route::Services));
        assert_eq!(
            Route::recognize("/services/cloud-solutions"),
            Some(Route::ServiceDetail { service_id: "cloud-solutions".into() })
        );
        assert_eq!(Route::recognize("/careers"), Some(Route::Careers));
    }

    #[test]
    fn not_found_route_is_declared() {
        assert_eq!(Route::not_found_route(), Some(Route::NotFound));
    }

    #[test]
    fn detail_route_builds_its_path() {
        let route = Route::ServiceDetail { service_id: "web-development".into() };
        assert_eq!(route.to_path(), "/services/web-development");
    }
}

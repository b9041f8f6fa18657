use yew::prelude::*;
use yew_router::prelude::*;

use crate::Route;

#[function_component(NotFound)]
pub fn not_found() -> Html {
    html! {
        <div class="page not-found-page">
            <div class="container page-header">
                <h1><span class="accent">{"404"}</span></h1>
                <p>{"The page you are looking for does not exist or has moved."}</p>
                <Link<Route> to={Route::Home} classes="btn-primary">{"Back to Home"}</Link<Route>>
            </div>
            <style>
                {r#"
                    .not-found-page {
                        position: relative;
                        z-index: 1;
                        display: flex;
                        align-items: center;
                    }
                    .not-found-page h1 {
                        font-size: 6rem;
                    }
                    .not-found-page p {
                        margin-bottom: 2rem;
                    }
                "#}
            </style>
        </div>
    }
}

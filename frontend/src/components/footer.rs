use chrono::Datelike;
use yew::prelude::*;
use yew_router::prelude::*;

use crate::config;
use crate::content::company::SOCIAL_LINKS;
use crate::Route;

pub fn copyright_line(year: i32) -> String {
    format!("© {year} {}. All rights reserved.", config::COMPANY_NAME)
}

#[function_component(Footer)]
pub fn footer() -> Html {
    let year = chrono::Local::now().year();

    html! {
        <footer class="site-footer">
            <div class="container footer-grid">
                <div class="footer-brand">
                    <h3>{ config::COMPANY_NAME }</h3>
                    <p>
                        {"We design, build and scale digital products for ambitious teams. \
                          From web platforms to cloud infrastructure, we turn ideas into reliable software."}
                    </p>
                </div>
                <div class="footer-column">
                    <h4>{"Quick Links"}</h4>
                    <Link<Route> to={Route::Home}>{"Home"}</Link<Route>>
                    <Link<Route> to={Route::Services}>{"Services"}</Link<Route>>
                    <Link<Route> to={Route::About}>{"About"}</Link<Route>>
                    <Link<Route> to={Route::Careers}>{"Careers"}</Link<Route>>
                    <Link<Route> to={Route::Contact}>{"Contact"}</Link<Route>>
                </div>
                <div class="footer-column">
                    <h4>{"Follow Us"}</h4>
                    <div class="footer-socials">
                        { for SOCIAL_LINKS.iter().map(|social| html! {
                            <a href={social.url} target="_blank" rel="noopener noreferrer" aria-label={social.name}>
                                { social.icon }
                            </a>
                        }) }
                    </div>
                </div>
                <div class="footer-column">
                    <h4>{"Get in Touch"}</h4>
                    <a href={config::CONTACT_EMAIL_LINK}>{ config::CONTACT_EMAIL }</a>
                    <a href={config::CONTACT_PHONE_LINK}>{ config::CONTACT_PHONE }</a>
                </div>
            </div>
            <div class="footer-bottom">
                <p>{ copyright_line(year) }</p>
            </div>
            <style>
                {r#"
                    .site-footer {
                        position: relative;
                        z-index: 1;
                        margin-top: 4rem;
                        padding: 4rem 0 1.5rem;
                        background: var(--bg-secondary);
                        border-top: 1px solid rgba(0, 152, 172, 0.2);
                    }
                    .footer-grid {
                        display: grid;
                        grid-template-columns: 2fr 1fr 1fr 1fr;
                        gap: 2.5rem;
                    }
                    .footer-brand h3 {
                        color: var(--primary-light);
                        margin-bottom: 1rem;
                    }
                    .footer-brand p {
                        color: var(--text-secondary);
                        line-height: 1.7;
                    }
                    .footer-column {
                        display: flex;
                        flex-direction: column;
                        gap: 0.6rem;
                    }
                    .footer-column h4 {
                        margin-bottom: 0.4rem;
                    }
                    .footer-column a {
                        color: var(--text-secondary);
                        text-decoration: none;
                        transition: color 0.2s ease;
                    }
                    .footer-column a:hover {
                        color: var(--primary-light);
                    }
                    .footer-socials {
                        display: flex;
                        gap: 0.75rem;
                    }
                    .footer-socials a {
                        display: inline-flex;
                        align-items: center;
                        justify-content: center;
                        width: 38px;
                        height: 38px;
                        border-radius: 50%;
                        border: 1px solid rgba(0, 152, 172, 0.4);
                    }
                    .footer-bottom {
                        margin-top: 3rem;
                        padding-top: 1.5rem;
                        text-align: center;
                        color: var(--text-secondary);
                        border-top: 1px solid rgba(255, 255, 255, 0.06);
                        font-size: 0.9rem;
                    }
                    @media (max-width: 768px) {
                        .footer-grid {
                            grid-template-columns: 1fr;
                        }
                    }
                "#}
            </style>
        </footer>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn copyright_names_year_and_company() {
        assert_eq!(copyright_line(2031), "© 2031 Zenith Pact. All rights reserved.");
    }
}

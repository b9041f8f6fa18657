use log::Level;

#[cfg(debug_assertions)]
pub fn log_level() -> Level {
    Level::Debug // Verbose animation lifecycle logs when running locally
}

#[cfg(not(debug_assertions))]
pub fn log_level() -> Level {
    Level::Info
}

pub const COMPANY_NAME: &str = "Zenith Pact";
pub const COMPANY_MARK: &str = "ZP";
pub const LOGO_PATH: &str = "/assets/logo.svg";

pub const CONTACT_EMAIL: &str = "contact@zenithpact.com";
pub const CONTACT_EMAIL_LINK: &str = "mailto:contact@zenithpact.com";
pub const CONTACT_PHONE: &str = "+91 98765 43210";
pub const CONTACT_PHONE_LINK: &str = "tel:+919876543210";
pub const CONTACT_ADDRESS: &str = "Zenith Pact Pvt. Ltd., Bengaluru, India";
pub const CAREERS_EMAIL: &str = "careers@zenithpact.com";

/// Navbar switches from transparent to solid past this offset.
pub const NAV_SOLID_AFTER_PX: f64 = 50.0;
/// The floating scroll-to-top button shows past this offset.
pub const SCROLL_TOP_VISIBLE_AFTER_PX: f64 = 300.0;
/// Pixels at the viewport edges that do not count for reveal-on-scroll.
pub const REVEAL_VIEWPORT_MARGIN_PX: f64 = 40.0;

pub const COUNTER_DEFAULT_SECONDS: f64 = 2.0;
pub const CONTACT_RESET_MS: u32 = 3_000;


#[cfg(debug_assertions)]
pub fn get_form_endpoint() -> &'static str {
    "http://localhost:8888/"  // netlify dev serves the form handler here
}

#[cfg(not(debug_assertions))]
pub fn get_form_endpoint() -> &'static str {
    "/"  // Production URL
}

#[cfg(debug_assertions)]
pub fn log_level() -> log::Level {
    log::Level::Debug
}

#[cfg(not(debug_assertions))]
pub fn log_level() -> log::Level {
    log::Level::Info
}

// Hidden field the form backend uses to pick the form template
pub const FORM_NAME_FIELD: &str = "form-name";
pub const CONTACT_FORM_NAME: &str = "contact";
pub const PRICING_FORM_NAME: &str = "pricing";

pub const CONTACT_RESET_DELAY_MS: u32 = 5_000;
pub const PRICING_RESET_DELAY_MS: u32 = 2_000;

pub const TOAST_LIMIT: usize = 1;
pub const TOAST_DURATION_MS: u32 = 5_000;

pub const AGENCY_NAME: &str = "Kopano Digital";
pub const AGENCY_EMAIL: &str = "hello@kopanodigital.co.za";
pub const AGENCY_PHONE: &str = "+27 82 555 0142";
pub const WHATSAPP_GREETING: &str = "Hi Kopano Digital, I'd like to chat about a website.";

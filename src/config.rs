use log::Level;

/// wa.me recipient: country code plus number, no `+`.
/// Override at build time with `IMPACT_TRIBE_WHATSAPP`.
pub const ORG_WHATSAPP: &str = match option_env!("IMPACT_TRIBE_WHATSAPP") {
    Some(number) => number,
    None => "919876543210",
};

pub const WHATSAPP_BASE_URL: &str = "https://wa.me";

/// Scroll offset (px) after which the nav bar switches to its solid style.
pub const NAV_SCROLL_THRESHOLD: f64 = 24.0;

#[cfg(debug_assertions)]
pub fn log_level() -> Level {
    Level::Debug // Verbose when running locally with `trunk serve`
}

#[cfg(not(debug_assertions))]
pub fn log_level() -> Level {
    Level::Info
}

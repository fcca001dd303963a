//! WhatsApp click-to-chat links.

#[cfg(test)]
#[path = "whatsapp_test.rs"]
mod whatsapp_test;

/// Business number in international format, digits only.
pub const WHATSAPP_NUMBER: &str = "919036333005";

/// Prefilled text of the floating chat button.
pub const GREETING: &str = "Hello RKS Creations, I would like to know more about your products.";
/// Prefilled text of the journey call to action.
pub const JOURNEY_GREETING: &str = "Hello RKS Creations, I would like to start my branding journey.";
/// Prefilled text of the about section call to action.
pub const BRANDING_GREETING: &str =
    "Hello RKS Creations, I would like to discuss my branding and packaging requirement.";

/// `https://wa.me/<number>?text=<percent-encoded text>`.
///
/// Non-digit characters in `number` are dropped, so display formats such as
/// `+91 90363 33005` work as input.
#[must_use]
pub fn chat_link(number: &str, text: &str) -> String {
    let digits: String = number.chars().filter(char::is_ascii_digit).collect();
    if text.is_empty() {
        return format!("https://wa.me/{digits}");
    }
    format!("https://wa.me/{digits}?text={}", urlencoding::encode(text))
}

/// Link used by the site's chat buttons.
#[must_use]
pub fn site_link(text: &str) -> String {
    chat_link(WHATSAPP_NUMBER, text)
}

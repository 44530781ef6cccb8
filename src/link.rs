use crate::config;

/// `https://wa.me/<destination>?text=<message>`, with only the message
/// percent-encoded.
pub fn build_whatsapp_link(destination: &str, message: &str) -> String {
    format!(
        "{}/{}?text={}",
        config::WHATSAPP_BASE_URL,
        destination,
        urlencoding::encode(message)
    )
}

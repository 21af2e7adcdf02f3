//! WhatsApp deep links (`https://wa.me/<number>`) for customer phone numbers.

use url::Url;

use crate::errors::AppError;
use crate::normalizer::{digits_only, validate_phone, LANDLINE_LEN, MOBILE_LEN};

pub const WHATSAPP_BASE_URL: &str = "https://wa.me/";
pub const BRAZIL_COUNTRY_CODE: &str = "55";

/// Number in the form WhatsApp expects.
///
/// Domestic numbers (10 or 11 digits) get the Brazil country code; anything
/// else is passed through as bare digits.
pub fn whatsapp_number(raw: &str) -> String {
    let digits = digits_only(raw);

    if digits.len() == LANDLINE_LEN || digits.len() == MOBILE_LEN {
        format!("{}{}", BRAZIL_COUNTRY_CODE, digits)
    } else {
        digits
    }
}

/// Builds the deep link that opens a chat with `raw`, optionally pre-filling `message`.
pub fn whatsapp_link(raw: &str, message: Option<&str>) -> Result<Url, AppError> {
    if raw.trim().is_empty() {
        return Err(AppError::BadRequest("Phone number is required".to_string()));
    }

    if !validate_phone(raw) {
        return Err(AppError::BadRequest(format!(
            "Invalid phone number '{}': expected DDD + number",
            raw.trim()
        )));
    }

    let mut url = Url::parse(WHATSAPP_BASE_URL)?.join(&whatsapp_number(raw))?;

    if let Some(text) = message.map(str::trim).filter(|t| !t.is_empty()) {
        url.query_pairs_mut().append_pair("text", text);
    }

    tracing::debug!("WhatsApp link built for {}", raw);
    Ok(url)
}

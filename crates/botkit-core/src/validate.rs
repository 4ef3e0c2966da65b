// Rust guideline compliant 2026-10-18

//! Validation and normalization of untrusted user input.
//!
//! Nothing here returns an error: malformed input is reported as `false` or
//! `None` so handlers can branch on it directly.

use crate::models::{Citizenship, Language};
use once_cell::sync::Lazy;
use phonenumber::{country, Mode, PhoneNumber};
use regex::Regex;

/// Marker appended by [`sanitize_text`] when it shortens text.
const ELLIPSIS: &str = "...";

static URL_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(concat!(
        r"(?i)^https?://",
        r"(?:(?:[A-Z0-9](?:[A-Z0-9-]{0,61}[A-Z0-9])?\.)+[A-Z]{2,6}\.?",
        r"|localhost",
        r"|[0-9]{1,3}\.[0-9]{1,3}\.[0-9]{1,3}\.[0-9]{1,3})",
        r"(?::[0-9]+)?",
        r"(?:/?|[/?]\S+)$",
    ))
    .expect("url regex compiles")
});

/// Checks whether `url` is an absolute `http` or `https` URL.
///
/// The host must be a domain name, `localhost`, or a dotted-quad address,
/// optionally followed by a port and a path or query. Matching is
/// case-insensitive and covers the whole string.
#[must_use]
pub fn validate_url(url: &str) -> bool {
    URL_RE.is_match(url)
}

fn parse_phone(phone: &str, region: Option<&str>) -> Option<PhoneNumber> {
    let region = region.and_then(|code| match code.parse::<country::Id>() {
        Ok(id) => Some(id),
        Err(_) => {
            tracing::debug!(region = code, "unknown phone region hint ignored");
            None
        }
    });

    match phonenumber::parse(region, phone) {
        Ok(number) => Some(number),
        Err(err) => {
            tracing::debug!(error = %err, "phone number rejected");
            None
        }
    }
}

/// Checks whether `phone` is a valid number under its numbering plan.
///
/// # Arguments
///
/// * `phone` - Phone number as typed by the user
/// * `region` - ISO country code used when the number has no `+` prefix
///
/// # Returns
///
/// `true` if the number parses and is valid, `false` otherwise.
#[must_use]
pub fn validate_phone(phone: &str, region: Option<&str>) -> bool {
    parse_phone(phone, region).is_some_and(|number| phonenumber::is_valid(&number))
}

/// Formats `phone` in international notation, e.g. `+998 90 123 45 67`.
///
/// Numbers that parse but are not valid for their plan are still formatted;
/// use [`validate_phone`] to reject them.
///
/// # Arguments
///
/// * `phone` - Phone number as typed by the user
/// * `region` - ISO country code used when the number has no `+` prefix
///
/// # Returns
///
/// The formatted number, or `None` if it cannot be parsed.
#[must_use]
pub fn format_phone(phone: &str, region: Option<&str>) -> Option<String> {
    parse_phone(phone, region).map(|number| number.format().mode(Mode::International).to_string())
}

/// Checks whether `telegram_id` can be a Telegram user ID.
#[must_use]
pub fn validate_telegram_id(telegram_id: i64) -> bool {
    telegram_id > 0
}

/// Parses a Telegram user ID from text, accepting only positive integers.
#[must_use]
pub fn parse_telegram_id(text: &str) -> Option<i64> {
    text.trim()
        .parse::<i64>()
        .ok()
        .filter(|id| validate_telegram_id(*id))
}

/// Prepares free text for a Telegram message.
///
/// Surrounding whitespace is trimmed. Text longer than `max_length` characters
/// is cut to `max_length - 3` characters and suffixed with `...`.
///
/// # Arguments
///
/// * `text` - Raw user text
/// * `max_length` - Maximum length in characters, 4096 for Telegram messages
///
/// # Returns
///
/// The sanitized text, empty for empty input.
#[must_use]
pub fn sanitize_text(text: &str, max_length: usize) -> String {
    if text.is_empty() {
        return String::new();
    }

    let text = text.trim();
    if text.chars().count() <= max_length {
        return text.to_string();
    }

    let keep = max_length.saturating_sub(ELLIPSIS.chars().count());
    let mut sanitized: String = text.chars().take(keep).collect();
    sanitized.push_str(ELLIPSIS);
    sanitized
}

/// Checks whether `code` is a supported citizenship code.
#[must_use]
pub fn validate_citizenship(code: &str) -> bool {
    code.parse::<Citizenship>().is_ok()
}

/// Checks whether `code` is a supported language code.
#[must_use]
pub fn validate_language(code: &str) -> bool {
    code.parse::<Language>().is_ok()
}

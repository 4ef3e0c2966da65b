// Rust guideline compliant 2026-10-18

//! Contact and link extraction from free-form message text.

use once_cell::sync::Lazy;
use regex::Regex;
use serde::Serialize;

static URL_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"https?://[^\s]+").expect("url regex compiles"));

static PHONE_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\+?[0-9]{10,15}").expect("phone regex compiles"));

static EMAIL_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"[a-zA-Z0-9._%+-]+@[a-zA-Z0-9.-]+\.[a-zA-Z]{2,}").expect("email regex compiles")
});

/// Contact details found in a message.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
pub struct Contacts {
    /// Phone-like digit runs, in order of appearance.
    pub phones: Vec<String>,
    /// E-mail addresses, in order of appearance.
    pub emails: Vec<String>,
}

/// Collects every `http`/`https` link in `text`.
///
/// # Returns
///
/// Unique links in order of first appearance.
#[must_use]
pub fn extract_urls(text: &str) -> Vec<String> {
    let mut urls: Vec<String> = Vec::new();
    for found in URL_RE.find_iter(text) {
        let url = found.as_str();
        if !urls.iter().any(|seen| seen == url) {
            urls.push(url.to_string());
        }
    }
    urls
}

/// Finds phone numbers and e-mail addresses in `text`.
///
/// Phone matching is loose (an optional `+` and 10 to 15 digits);
/// pass the results through [`crate::validate_phone`] before trusting them.
///
/// # Returns
///
/// The contacts found, or `None` if there are none.
#[must_use]
pub fn extract_contacts(text: &str) -> Option<Contacts> {
    let contacts = Contacts {
        phones: PHONE_RE
            .find_iter(text)
            .map(|m| m.as_str().to_string())
            .collect(),
        emails: EMAIL_RE
            .find_iter(text)
            .map(|m| m.as_str().to_string())
            .collect(),
    };

    if contacts.phones.is_empty() && contacts.emails.is_empty() {
        None
    } else {
        Some(contacts)
    }
}

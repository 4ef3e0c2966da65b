// Rust guideline compliant 2026-10-18

//! Display formatting for bot messages.
//!
//! All helpers are pure: they take raw values and return display-ready,
//! localized strings.

use crate::models::{Citizenship, Language};
use chrono::{DateTime, Duration, Utc};

/// Marker returned by [`get_citizenship_flag`] for unsupported codes.
pub const UNKNOWN_FLAG: &str = "🌍";

const DATETIME_FORMAT: &str = "%d.%m.%Y %H:%M";

/// Characters with special meaning in Telegram MarkdownV2.
const MARKDOWN_SPECIAL: [char; 18] = [
    '_', '*', '[', ']', '(', ')', '~', '`', '>', '#', '+', '-', '=', '|', '{', '}', '.', '!',
];

/// Formats a timestamp as `DD.MM.YYYY HH:MM`.
///
/// The layout is the same for every language.
///
/// # Arguments
///
/// * `dt` - UTC timestamp
/// * `_language` - Display language
///
/// # Returns
///
/// The formatted timestamp.
#[must_use]
pub fn format_datetime(dt: DateTime<Utc>, _language: Language) -> String {
    dt.format(DATETIME_FORMAT).to_string()
}

/// Describes how long ago `dt` was, relative to the current UTC time.
///
/// # Arguments
///
/// * `dt` - UTC timestamp in the past
/// * `language` - Display language
///
/// # Returns
///
/// A phrase such as `5 мин. назад`, or the formatted date for anything older
/// than a week.
#[must_use]
pub fn time_ago(dt: DateTime<Utc>, language: Language) -> String {
    time_ago_at(dt, Utc::now(), language)
}

/// Describes how long before `now` the timestamp `dt` was.
///
/// Thresholds are checked in order and the first match wins: under a minute,
/// under an hour, under a day, under a week. Counts truncate toward zero.
/// Timestamps after `now` are reported as "just now".
///
/// # Arguments
///
/// * `dt` - UTC timestamp being described
/// * `now` - Reference instant
/// * `language` - Display language
///
/// # Returns
///
/// The localized relative-time phrase.
#[must_use]
pub fn time_ago_at(dt: DateTime<Utc>, now: DateTime<Utc>, language: Language) -> String {
    let diff = now - dt;

    if diff < Duration::minutes(1) {
        return match language {
            Language::Ru => "только что".to_string(),
            Language::Uz => "hozirgina".to_string(),
        };
    }

    if diff < Duration::hours(1) {
        let minutes = diff.num_minutes();
        return match language {
            Language::Ru => format!("{minutes} мин. назад"),
            Language::Uz => format!("{minutes} daqiqa oldin"),
        };
    }

    if diff < Duration::days(1) {
        let hours = diff.num_hours();
        return match language {
            Language::Ru => format!("{hours} ч. назад"),
            Language::Uz => format!("{hours} soat oldin"),
        };
    }

    if diff < Duration::days(7) {
        let days = diff.num_days();
        return match language {
            Language::Ru => format!("{days} дн. назад"),
            Language::Uz => format!("{days} kun oldin"),
        };
    }

    format_datetime(dt, language)
}

/// Shortens `text` to at most `max_length` characters, ending with `suffix`.
///
/// Lengths count Unicode scalar values. When `max_length` is shorter than the
/// suffix itself, no text is kept and the bare suffix is returned.
///
/// # Arguments
///
/// * `text` - Text to shorten
/// * `max_length` - Maximum length of the result
/// * `suffix` - Marker appended to shortened text, usually `...`
///
/// # Returns
///
/// The original text if it fits, otherwise the shortened text.
#[must_use]
pub fn truncate_text(text: &str, max_length: usize, suffix: &str) -> String {
    if text.chars().count() <= max_length {
        return text.to_string();
    }

    let keep = max_length.saturating_sub(suffix.chars().count());
    let mut result: String = text.chars().take(keep).collect();
    result.push_str(suffix);
    result
}

/// Returns the flag emoji for a citizenship code, or [`UNKNOWN_FLAG`].
#[must_use]
pub fn get_citizenship_flag(code: &str) -> &'static str {
    code.parse::<Citizenship>()
        .map(|citizenship| citizenship.flag())
        .unwrap_or(UNKNOWN_FLAG)
}

/// Returns the localized country name for a citizenship code.
///
/// # Arguments
///
/// * `code` - Citizenship code such as `UZ`
/// * `language` - Display language
///
/// # Returns
///
/// The country name, or `code` unchanged when it is not a supported
/// citizenship.
#[must_use]
pub fn get_citizenship_name(code: &str, language: Language) -> String {
    match code.parse::<Citizenship>() {
        Ok(citizenship) => citizenship.name(language).to_string(),
        Err(_) => {
            tracing::debug!(code, "unknown citizenship code, returning it unchanged");
            code.to_string()
        }
    }
}

/// Escapes Telegram MarkdownV2 special characters with a backslash.
///
/// Works in a single left-to-right pass, so backslashes inserted for one
/// character are never escaped again. Applying it twice double-escapes.
#[must_use]
pub fn escape_markdown(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len() + text.len() / 4);
    for c in text.chars() {
        if MARKDOWN_SPECIAL.contains(&c) {
            escaped.push('\\');
        }
        escaped.push(c);
    }
    escaped
}

// Rust guideline compliant 2026-10-18

//! Formatting and validation helpers bound to the bot configuration.

use crate::error::Result;
use botkit_core::{
    format_datetime, format_phone, get_citizenship_flag, get_citizenship_name, paginate_list,
    sanitize_text, time_ago, truncate_text, validate_phone, Config, Language, Page,
};
use chrono::{DateTime, Utc};
use std::path::Path;

/// Config-aware entry point used by message handlers.
///
/// Each method forwards to the matching `botkit-core` function, filling in
/// the defaults from [`Config`]. Handlers pass the user's language when they
/// know it, or `None` to use the configured default.
#[derive(Debug, Clone, Default)]
pub struct Toolkit {
    config: Config,
}

impl Toolkit {
    /// Creates a toolkit from an already loaded configuration.
    #[must_use]
    pub fn new(config: Config) -> Self {
        Self { config }
    }

    /// Loads the configuration from `dir` and creates a toolkit.
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration cannot be loaded or is invalid.
    pub fn load(dir: &Path) -> Result<Self> {
        Ok(Self::new(Config::load(dir)?))
    }

    /// Returns the bound configuration.
    #[must_use]
    pub fn config(&self) -> &Config {
        &self.config
    }

    fn language(&self, language: Option<Language>) -> Language {
        language.unwrap_or(self.config.default_language)
    }

    /// Formats a timestamp as `DD.MM.YYYY HH:MM`.
    #[must_use]
    pub fn format_datetime(&self, dt: DateTime<Utc>, language: Option<Language>) -> String {
        format_datetime(dt, self.language(language))
    }

    /// Describes how long ago `dt` was.
    #[must_use]
    pub fn time_ago(&self, dt: DateTime<Utc>, language: Option<Language>) -> String {
        time_ago(dt, self.language(language))
    }

    /// Truncates a preview to the configured length and suffix.
    #[must_use]
    pub fn truncate(&self, text: &str) -> String {
        truncate_text(text, self.config.truncate_length, &self.config.truncate_suffix)
    }

    /// Returns `"{flag} {name}"` for a citizenship code.
    ///
    /// Unknown codes render as the globe marker followed by the raw code.
    #[must_use]
    pub fn citizenship_label(&self, code: &str, language: Option<Language>) -> String {
        format!(
            "{} {}",
            get_citizenship_flag(code),
            get_citizenship_name(code, self.language(language))
        )
    }

    /// Returns the requested page using the configured page size.
    #[must_use]
    pub fn paginate<T: Clone>(&self, items: &[T], page: usize) -> Page<T> {
        paginate_list(items, page, self.config.page_size)
    }

    /// Sanitizes user text against the configured message limit.
    #[must_use]
    pub fn sanitize(&self, text: &str) -> String {
        sanitize_text(text, self.config.message_max_length)
    }

    /// Validates a phone number, assuming the configured region.
    #[must_use]
    pub fn validate_phone(&self, phone: &str) -> bool {
        validate_phone(phone, self.config.default_region.as_deref())
    }

    /// Formats a phone number internationally, assuming the configured region.
    #[must_use]
    pub fn format_phone(&self, phone: &str) -> Option<String> {
        format_phone(phone, self.config.default_region.as_deref())
    }
}

// Rust guideline compliant 2026-10-18

//! Botkit Core Library
//!
//! Pure display and input helpers shared by the bot's message handlers:
//! - Domain codes (Language, Citizenship) with strict and lossy parsing
//! - Formatting (dates, relative time, truncation, citizenship labels, markdown)
//! - Pagination of arbitrary item lists
//! - Validation (URLs, phone numbers, Telegram IDs, free text)
//! - Contact extraction from free text
//! - Configuration defaults and error types

pub mod config;
pub mod error;
pub mod extract;
pub mod format;
pub mod models;
pub mod paginate;
pub mod validate;

pub use config::Config;
pub use error::{Error, Result};
pub use extract::{extract_contacts, extract_urls, Contacts};
pub use format::{
    escape_markdown, format_datetime, get_citizenship_flag, get_citizenship_name, time_ago,
    time_ago_at, truncate_text,
};
pub use models::{Citizenship, Language};
pub use paginate::{paginate_list, Page};
pub use validate::{
    format_phone, parse_telegram_id, sanitize_text, validate_citizenship, validate_language,
    validate_phone, validate_telegram_id, validate_url,
};

// Rust guideline compliant 2026-10-18

//! Admin list parsing.

use crate::error::{AppError, Result};
use botkit_core::parse_telegram_id;

/// Parses a comma-separated list of admin Telegram IDs.
///
/// Entries are trimmed and blank entries are skipped, so an empty list yields
/// no admins.
///
/// # Arguments
///
/// * `list` - Comma-separated IDs, e.g. `"123, 456"`
///
/// # Returns
///
/// The parsed IDs in input order.
///
/// # Errors
///
/// Returns an error if an entry is not a positive integer.
pub fn parse_admin_ids(list: &str) -> Result<Vec<i64>> {
    list.split(',')
        .map(str::trim)
        .filter(|entry| !entry.is_empty())
        .map(|entry| {
            parse_telegram_id(entry)
                .ok_or_else(|| AppError::InvalidInput(format!("Invalid admin id: {}", entry)))
        })
        .collect()
}

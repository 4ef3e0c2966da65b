// Rust guideline compliant 2026-10-18

//! Application services for Botkit.
//!
//! This crate binds the pure helpers from `botkit-core` to a loaded
//! configuration, parses operator settings such as the admin list, and sets
//! up tracing for the bot process.

pub mod admins;
pub mod error;
pub mod logging;
pub mod toolkit;

pub use admins::parse_admin_ids;
pub use error::{AppError, Result};
pub use logging::init_tracing;
pub use toolkit::Toolkit;

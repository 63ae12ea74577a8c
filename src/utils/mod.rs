//! Utility modules for web, DOM, and persistence operations.
//!
//! Provides:
//! - [`fetch_text`] - Network fetching with timeout
//! - [`markdown_to_html`] - Markdown rendering with XSS sanitization
//! - [`copy_text`] - Clipboard writes
//! - [`storage`] - JSON values in localStorage
//! - [`unique_id`] - Element ids for ARIA wiring

mod clipboard;
pub mod dom;
mod fetch;
mod id;
mod markdown;
pub mod storage;

pub use clipboard::copy_text;
pub use fetch::fetch_text;
pub use id::{sanitize, unique_id};
pub use markdown::markdown_to_html;

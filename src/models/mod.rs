//! Data models and types for the showcase.
//!
//! Contains domain types for:
//! - [`AppRoute`], [`ComponentPage`] - Hash-based navigation
//! - [`Theme`] - Color scheme
//! - [`Toast`], [`ToastKind`], [`ToastQueue`] - Notifications
//! - [`DocsManifest`], [`DocEntry`] - Documentation index

mod docs;
mod route;
mod theme;
mod toast;

pub use docs::{DocEntry, DocsManifest};
pub use route::{AppRoute, ComponentPage};
pub use theme::Theme;
pub use toast::{Toast, ToastKind, ToastQueue};

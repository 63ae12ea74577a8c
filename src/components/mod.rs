//! UI components built with Leptos.
//!
//! - [`router`] - Application routing (main entry point)
//! - [`button`], [`avatar`], [`tabs`] - Basic building blocks
//! - [`tree_view`] - Hierarchical list with check cascade and search
//! - [`transfer`] - Dual list for moving items between sets
//! - [`toast`] - Notification viewport
//! - [`icons`] - Centralized icon definitions (change theme here)
//! - [`controlled`] - Controlled/uncontrolled prop state

pub mod avatar;
pub mod button;
pub mod code_block;
pub mod controlled;
pub mod icons;
pub mod layout;
pub mod markdown;
pub mod router;
pub mod tabs;
pub mod theme_toggle;
pub mod toast;
pub mod transfer;
pub mod tree_view;

pub use router::AppRouter;

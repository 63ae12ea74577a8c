//! Application configuration.
//!
//! Centralizes all configuration constants used throughout the showcase.
//! Bundled assets are loaded at compile time using `include_str!`.

// =============================================================================
// Bundled Assets (loaded at compile time)
// =============================================================================

/// Documentation index (slugs, titles and markdown paths).
pub const DOCS_MANIFEST: &str = include_str!("../assets/docs/manifest.toml");

/// Sample forest used by the TreeView demo.
pub const DEMO_TREE_JSON: &str = include_str!("../assets/data/tree.json");

// =============================================================================
// Application Metadata
// =============================================================================

/// Library name shown in the header and page titles.
pub const APP_NAME: &str = "Nebula";

/// Library version.
pub const APP_VERSION: &str = "0.1.0";

/// Tagline displayed on the home page.
pub const APP_TAGLINE: &str = "Accessible Leptos components with predictable state.";

// =============================================================================
// Network Configuration
// =============================================================================

/// Base URL for markdown documents listed in the docs manifest.
pub const DOCS_BASE_URL: &str = "docs";

/// Fetch request timeout in milliseconds.
pub const FETCH_TIMEOUT_MS: i32 = 10000;

// =============================================================================
// Persistence
// =============================================================================

/// localStorage key for the selected color theme.
pub const THEME_STORAGE_KEY: &str = "nebula.theme";

/// Media query used when no theme has been stored yet.
pub const PREFERS_DARK_QUERY: &str = "(prefers-color-scheme: dark)";

// =============================================================================
// Feedback
// =============================================================================

/// Toast configuration.
pub mod toast {
    /// Time before a toast dismisses itself.
    pub const DURATION_MS: u32 = 4000;
    /// Maximum toasts on screen; the oldest is dropped first.
    pub const MAX_VISIBLE: usize = 4;
}

/// How long the "Copied" label stays on a code block.
pub const COPY_FEEDBACK_MS: u32 = 1500;

// =============================================================================
// UI Configuration
// =============================================================================

/// Icon theme selection.
///
/// Available themes:
/// - `Lucide` - Minimal, thin strokes (default)
/// - `Bootstrap` - Familiar, slightly bolder
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[allow(dead_code)]
pub enum IconTheme {
    #[default]
    Lucide,
    Bootstrap,
}

/// Current icon theme used throughout the library.
/// Change this value to switch icon styles globally.
pub const ICON_THEME: IconTheme = IconTheme::Lucide;

//! Error types for the application.
//!
//! - [`ContextError`] - compound components rendered outside their provider
//! - [`FetchError`] - network errors while loading documentation
//! - [`ClipboardError`] - copy-to-clipboard failures
//! - [`StorageError`] - localStorage persistence failures
//! - [`ManifestError`] - malformed docs manifest

use thiserror::Error;

/// A component that needs an ancestor provider was rendered without one.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ContextError {
    #[error("<{component}> must be used inside <{provider}>")]
    Missing {
        component: &'static str,
        provider: &'static str,
    },
}

/// Network/fetch-related errors for HTTP requests.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FetchError {
    #[error("Browser window not available")]
    NoWindow,
    #[error("Failed to create request")]
    RequestCreationFailed,
    #[error("Network error: {0}")]
    NetworkError(String),
    #[error("HTTP error: {0}")]
    HttpError(u16),
    #[error("Failed to read response")]
    ResponseReadFailed,
    #[error("Invalid response content")]
    InvalidContent,
    #[error("Request timed out")]
    Timeout,
}

/// Clipboard write failures.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ClipboardError {
    #[error("Clipboard is not available in this browser")]
    Unavailable,
    #[error("Copy failed: {0}")]
    WriteFailed(String),
}

/// localStorage failures.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StorageError {
    #[error("localStorage not available")]
    Unavailable,
    #[error("failed to serialize value")]
    SerializationFailed,
    #[error("failed to write to localStorage")]
    WriteFailed,
}

/// The bundled docs manifest could not be parsed.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ManifestError {
    #[error("invalid docs manifest: {0}")]
    Parse(String),
    #[error("duplicate doc slug: {0}")]
    DuplicateSlug(String),
}

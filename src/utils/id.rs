//! Unique DOM id generation.

use std::sync::atomic::{AtomicUsize, Ordering};

static NEXT_ID: AtomicUsize = AtomicUsize::new(1);

/// Returns a page-unique id such as `nebula-tabs-3`.
///
/// Used to wire `aria-controls`/`aria-labelledby` between elements that
/// render in different components.
pub fn unique_id(prefix: &str) -> String {
    let n = NEXT_ID.fetch_add(1, Ordering::Relaxed);
    format!("nebula-{}-{}", prefix, n)
}

/// Turns an arbitrary key into a string safe to embed in an id.
pub fn sanitize(key: &str) -> String {
    key.chars()
        .map(|c| if c.is_ascii_alphanumeric() || c == '-' || c == '_' { c } else { '_' })
        .collect()
}

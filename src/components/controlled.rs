//! Controlled/uncontrolled component state.
//!
//! A prop such as `selected_keys` may be supplied by the caller, in which
//! case it is authoritative and the component only reports changes through
//! its callback. Otherwise the component keeps the value itself, seeded from
//! a default. [`Controlled`] hides that split behind one read/write API.

use leptos::prelude::*;

/// A value that is either owned by the caller or by the component.
pub struct Controlled<T: Send + Sync + 'static> {
    external: Option<Signal<T>>,
    internal: RwSignal<T>,
}

impl<T: Send + Sync + 'static> Clone for Controlled<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T: Send + Sync + 'static> Copy for Controlled<T> {}

impl<T: Clone + Send + Sync + 'static> Controlled<T> {
    /// `external` wins when present; `default` seeds the internal value.
    pub fn new(external: Option<Signal<T>>, default: T) -> Self {
        Self {
            external,
            internal: RwSignal::new(default),
        }
    }

    pub fn is_controlled(&self) -> bool {
        self.external.is_some()
    }

    /// The resolved value (tracked).
    pub fn get(&self) -> T {
        match self.external {
            Some(signal) => signal.get(),
            None => self.internal.get(),
        }
    }

    /// The resolved value without subscribing.
    pub fn get_untracked(&self) -> T {
        match self.external {
            Some(signal) => signal.get_untracked(),
            None => self.internal.get_untracked(),
        }
    }

    pub fn with<R>(&self, f: impl FnOnce(&T) -> R) -> R {
        match self.external {
            Some(signal) => signal.with(f),
            None => self.internal.with(f),
        }
    }

    /// Stores a new value when uncontrolled. Controlled values are left to
    /// the caller, who learns about the change through the callback.
    pub fn set(&self, value: T) {
        if self.external.is_none() {
            self.internal.set(value);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_uncontrolled_stores_writes() {
        let value = Controlled::new(None, 1);
        assert!(!value.is_controlled());

        value.set(5);
        assert_eq!(value.get_untracked(), 5);
    }

    #[test]
    fn test_controlled_ignores_writes() {
        let source = RwSignal::new(10);
        let value = Controlled::new(Some(source.into()), 1);
        assert!(value.is_controlled());

        value.set(5);
        assert_eq!(value.get_untracked(), 10);

        source.set(20);
        assert_eq!(value.get_untracked(), 20);
    }
}

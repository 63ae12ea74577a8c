//! Root application module.
//!
//! Contains the main App component, the [`AppContext`] definition and the
//! theme/toast stores it carries.

use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use leptos_use::use_media_query;
use wasm_bindgen_futures::spawn_local;

use crate::components::AppRouter;
use crate::config::{PREFERS_DARK_QUERY, THEME_STORAGE_KEY, toast};
use crate::models::{Theme, Toast, ToastKind, ToastQueue};
use crate::utils::{dom, storage};

// ============================================================================
// ThemeStore
// ============================================================================

/// Signal-backed color theme.
///
/// Consumers read through [`ThemeStore::get`] (tracked, so views re-render on
/// change) and write through [`ThemeStore::toggle`].
/// Persistence and the `data-theme` attribute are handled by an effect in
/// [`App`].
#[derive(Clone, Copy)]
pub struct ThemeStore {
    theme: RwSignal<Theme>,
}

impl ThemeStore {
    pub fn new(initial: Theme) -> Self {
        Self {
            theme: RwSignal::new(initial),
        }
    }

    pub fn get(&self) -> Theme {
        self.theme.get()
    }

    pub fn toggle(&self) {
        self.theme.update(|t| *t = t.toggled());
    }
}

// ============================================================================
// ToastStore
// ============================================================================

/// Signal-backed toast queue.
///
/// Every pushed toast schedules its own dismissal after
/// `toast::DURATION_MS`; dismissing early is harmless.
#[derive(Clone, Copy)]
pub struct ToastStore {
    queue: RwSignal<ToastQueue>,
}

impl ToastStore {
    pub fn new() -> Self {
        Self {
            queue: RwSignal::new(ToastQueue::new(toast::MAX_VISIBLE)),
        }
    }

    /// Current toasts, oldest first (tracked).
    pub fn items(&self) -> Vec<Toast> {
        self.queue.with(|q| q.items().to_vec())
    }

    pub fn push(&self, kind: ToastKind, message: impl Into<String>) -> u64 {
        let message = message.into();
        let mut id = 0;
        self.queue.update(|q| id = q.push(kind, message));

        let store = *self;
        spawn_local(async move {
            TimeoutFuture::new(toast::DURATION_MS).await;
            store.dismiss(id);
        });
        id
    }

    pub fn info(&self, message: impl Into<String>) -> u64 {
        self.push(ToastKind::Info, message)
    }

    pub fn success(&self, message: impl Into<String>) -> u64 {
        self.push(ToastKind::Success, message)
    }

    pub fn warning(&self, message: impl Into<String>) -> u64 {
        self.push(ToastKind::Warning, message)
    }

    pub fn error(&self, message: impl Into<String>) -> u64 {
        self.push(ToastKind::Error, message)
    }

    pub fn dismiss(&self, id: u64) {
        // try_update: the timer may outlive the owning reactive scope
        let _ = self.queue.try_update(|q| q.dismiss(id));
    }

    pub fn clear(&self) {
        self.queue.update(|q| q.clear());
    }
}

impl Default for ToastStore {
    fn default() -> Self {
        Self::new()
    }
}

// ============================================================================
// AppContext
// ============================================================================

/// Application-wide state.
///
/// Created once in [`App`] and passed explicitly as a prop to the components
/// that need it, so every consumer's dependencies are visible in its
/// signature.
///
/// # Note
///
/// This struct is `Copy` because all fields are Leptos signals, which are
/// cheap to copy (they're just pointers to the underlying reactive state).
#[derive(Clone, Copy)]
pub struct AppContext {
    /// Color theme.
    pub theme: ThemeStore,
    /// Transient notifications.
    pub toasts: ToastStore,
}

impl AppContext {
    pub fn new(initial_theme: Theme) -> Self {
        Self {
            theme: ThemeStore::new(initial_theme),
            toasts: ToastStore::new(),
        }
    }
}

/// Theme from localStorage, falling back to the system preference.
fn initial_theme() -> Theme {
    storage::load::<Theme>(THEME_STORAGE_KEY).unwrap_or_else(|| {
        let prefers_dark = use_media_query(PREFERS_DARK_QUERY);
        Theme::from_prefers_dark(prefers_dark.get_untracked())
    })
}

/// Root application component with error boundary.
///
/// This component:
/// - Creates the AppContext and hands it to the router
/// - Applies and persists the theme whenever it changes
/// - Wraps the app in an ErrorBoundary for graceful error handling
#[component]
pub fn App() -> impl IntoView {
    let ctx = AppContext::new(initial_theme());

    Effect::new(move |_| {
        let theme = ctx.theme.get();
        dom::set_root_attribute("data-theme", theme.as_str());
        if let Err(e) = storage::save(THEME_STORAGE_KEY, &theme) {
            dom::warn(&format!("theme not persisted: {}", e));
        }
    });

    view! {
        <ErrorBoundary
            fallback=|errors| view! {
                <div class="nebula-fatal" role="alert">
                    <h1>"Something went wrong"</h1>
                    <p>"A component failed to render. Please try reloading the page."</p>
                    <details>
                        <summary>"Error details"</summary>
                        <ul>
                            {move || errors.get()
                                .into_iter()
                                .map(|(_, e)| view! { <li>{e.to_string()}</li> })
                                .collect::<Vec<_>>()
                            }
                        </ul>
                    </details>
                    <button
                        on:click=move |_| {
                            if let Some(window) = web_sys::window() {
                                let _ = window.location().reload();
                            }
                        }
                    >
                        "Reload Page"
                    </button>
                </div>
            }
        >
            <AppRouter ctx=ctx />
        </ErrorBoundary>
    }
}

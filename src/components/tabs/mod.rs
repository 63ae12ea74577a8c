//! Tabs compound component.
//!
//! ```ignore
//! view! {
//!     <Tabs default_value="overview">
//!         <TabList aria_label="Sections">
//!             <Tab value="overview">"Overview"</Tab>
//!             <Tab value="api">"API"</Tab>
//!         </TabList>
//!         <TabPanel value="overview">"..."</TabPanel>
//!         <TabPanel value="api">"..."</TabPanel>
//!     </Tabs>
//! }
//! ```
//!
//! [`TabList`], [`Tab`] and [`TabPanel`] read the [`Tabs`] context and render
//! a [`ContextError`] when used outside it.

use leptos::{ev, prelude::*};

use crate::components::controlled::Controlled;
use crate::error::ContextError;
use crate::utils::{dom, sanitize, unique_id};

stylance::import_crate_style!(css, "src/components/tabs/tabs.module.css");

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Orientation {
    #[default]
    Horizontal,
    Vertical,
}

impl Orientation {
    fn as_str(self) -> &'static str {
        match self {
            Self::Horizontal => "horizontal",
            Self::Vertical => "vertical",
        }
    }
}

/// A registered tab, in render order.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TabEntry {
    pub value: String,
    pub disabled: bool,
}

/// Movement requested from the keyboard.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TabMove {
    Next,
    Prev,
    First,
    Last,
}

impl TabMove {
    /// Maps a `KeyboardEvent.key` for the given orientation.
    pub fn from_key(key: &str, orientation: Orientation) -> Option<Self> {
        match (key, orientation) {
            ("ArrowRight", Orientation::Horizontal) | ("ArrowDown", Orientation::Vertical) => {
                Some(Self::Next)
            }
            ("ArrowLeft", Orientation::Horizontal) | ("ArrowUp", Orientation::Vertical) => {
                Some(Self::Prev)
            }
            ("Home", _) => Some(Self::First),
            ("End", _) => Some(Self::Last),
            _ => None,
        }
    }
}

/// Resolves the tab that receives focus, skipping disabled tabs and
/// wrapping at either end.
pub fn next_tab(tabs: &[TabEntry], current: &str, movement: TabMove) -> Option<String> {
    let enabled: Vec<&TabEntry> = tabs.iter().filter(|t| !t.disabled).collect();
    if enabled.is_empty() {
        return None;
    }
    let len = enabled.len();
    let position = enabled.iter().position(|t| t.value == current);

    let index = match (movement, position) {
        (TabMove::First, _) | (TabMove::Next, None) => 0,
        (TabMove::Last, _) | (TabMove::Prev, None) => len - 1,
        (TabMove::Next, Some(i)) => (i + 1) % len,
        (TabMove::Prev, Some(i)) => (i + len - 1) % len,
    };
    Some(enabled[index].value.clone())
}

/// State shared by a [`Tabs`] root and its parts.
#[derive(Clone, Copy)]
pub struct TabsContext {
    base_id: StoredValue<String>,
    active: Controlled<String>,
    on_change: Option<Callback<String>>,
    orientation: Orientation,
    tabs: RwSignal<Vec<TabEntry>>,
}

impl TabsContext {
    fn tab_id(&self, value: &str) -> String {
        format!("{}-tab-{}", self.base_id.get_value(), sanitize(value))
    }

    fn panel_id(&self, value: &str) -> String {
        format!("{}-panel-{}", self.base_id.get_value(), sanitize(value))
    }

    fn is_active(&self, value: &str) -> bool {
        self.active.with(|a| a == value)
    }

    fn select(&self, value: &str) {
        let disabled = self
            .tabs
            .with_untracked(|tabs| tabs.iter().any(|t| t.value == value && t.disabled));
        if disabled || self.active.get_untracked() == value {
            return;
        }
        self.active.set(value.to_string());
        if let Some(cb) = self.on_change {
            cb.run(value.to_string());
        }
    }

    fn register(&self, entry: TabEntry) {
        let auto_select =
            !entry.disabled && !self.active.is_controlled() && self.active.get_untracked().is_empty();
        let value = entry.value.clone();
        self.tabs.update(|tabs| {
            tabs.retain(|t| t.value != entry.value);
            tabs.push(entry);
        });
        if auto_select {
            self.active.set(value);
        }
    }

    fn unregister(&self, value: &str) {
        let _ = self.tabs.try_update(|tabs| tabs.retain(|t| t.value != value));
    }
}

fn use_tabs(component: &'static str) -> Result<TabsContext, ContextError> {
    use_context::<TabsContext>().ok_or(ContextError::Missing {
        component,
        provider: "Tabs",
    })
}

/// Root of a tab set.
///
/// Pass `value` to control the active tab; otherwise `default_value` (or the
/// first enabled tab) is used and the component tracks it internally.
#[component]
pub fn Tabs(
    #[prop(optional, into)] value: Option<Signal<String>>,
    #[prop(optional, into)] default_value: String,
    #[prop(optional, into)] on_change: Option<Callback<String>>,
    #[prop(optional)] orientation: Orientation,
    children: Children,
) -> impl IntoView {
    let ctx = TabsContext {
        base_id: StoredValue::new(unique_id("tabs")),
        active: Controlled::new(value, default_value),
        on_change,
        orientation,
        tabs: RwSignal::new(Vec::new()),
    };
    provide_context(ctx);

    let class = match orientation {
        Orientation::Horizontal => css::tabs.to_string(),
        Orientation::Vertical => format!("{} {}", css::tabs, css::vertical),
    };

    view! { <div class=class>{children()}</div> }
}

/// Container for [`Tab`] buttons. Handles arrow-key navigation.
#[component]
pub fn TabList(
    #[prop(optional, into)] aria_label: Option<String>,
    children: Children,
) -> impl IntoView {
    use_tabs("TabList").map(|ctx| {
        let on_keydown = move |e: ev::KeyboardEvent| {
            let Some(movement) = TabMove::from_key(&e.key(), ctx.orientation) else {
                return;
            };
            e.prevent_default();
            let current = ctx.active.get_untracked();
            let target = ctx.tabs.with_untracked(|tabs| next_tab(tabs, &current, movement));
            if let Some(value) = target {
                ctx.select(&value);
                dom::focus_by_id(&ctx.tab_id(&value));
            }
        };

        view! {
            <div
                class=css::list
                role="tablist"
                aria-label=aria_label
                aria-orientation=ctx.orientation.as_str()
                on:keydown=on_keydown
            >
                {children()}
            </div>
        }
    })
}

/// A single tab button.
#[component]
pub fn Tab(
    #[prop(into)] value: String,
    #[prop(optional)] disabled: bool,
    children: Children,
) -> impl IntoView {
    use_tabs("Tab").map(|ctx| {
        ctx.register(TabEntry {
            value: value.clone(),
            disabled,
        });
        let cleanup_value = value.clone();
        on_cleanup(move || ctx.unregister(&cleanup_value));

        let tab_id = ctx.tab_id(&value);
        let panel_id = ctx.panel_id(&value);
        let value = StoredValue::new(value);
        let is_active = move || value.with_value(|v| ctx.is_active(v));

        view! {
            <button
                type="button"
                role="tab"
                id=tab_id
                class=move || if is_active() {
                    format!("{} {}", css::tab, css::active)
                } else {
                    css::tab.to_string()
                }
                aria-selected=move || if is_active() { "true" } else { "false" }
                aria-controls=panel_id
                aria-disabled=if disabled { "true" } else { "false" }
                tabindex=move || if is_active() { "0" } else { "-1" }
                disabled=disabled
                on:click=move |_| value.with_value(|v| ctx.select(v))
            >
                {children()}
            </button>
        }
    })
}

/// Content shown while its tab is active.
#[component]
pub fn TabPanel(#[prop(into)] value: String, children: ChildrenFn) -> impl IntoView {
    use_tabs("TabPanel").map(|ctx| {
        let panel_id = ctx.panel_id(&value);
        let tab_id = ctx.tab_id(&value);
        let value = StoredValue::new(value);
        let is_active = move || value.with_value(|v| ctx.is_active(v));

        view! {
            <div
                role="tabpanel"
                id=panel_id
                class=css::panel
                aria-labelledby=tab_id
                tabindex="0"
                hidden=move || !is_active()
            >
                <Show when=is_active>{children()}</Show>
            </div>
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entries(list: &[(&str, bool)]) -> Vec<TabEntry> {
        list.iter()
            .map(|(v, d)| TabEntry {
                value: v.to_string(),
                disabled: *d,
            })
            .collect()
    }

    #[test]
    fn test_next_wraps_and_skips_disabled() {
        let tabs = entries(&[("a", false), ("b", true), ("c", false)]);

        assert_eq!(next_tab(&tabs, "a", TabMove::Next).as_deref(), Some("c"));
        assert_eq!(next_tab(&tabs, "c", TabMove::Next).as_deref(), Some("a"));
        assert_eq!(next_tab(&tabs, "a", TabMove::Prev).as_deref(), Some("c"));
    }

    #[test]
    fn test_home_end() {
        let tabs = entries(&[("a", true), ("b", false), ("c", false), ("d", true)]);

        assert_eq!(next_tab(&tabs, "c", TabMove::First).as_deref(), Some("b"));
        assert_eq!(next_tab(&tabs, "b", TabMove::Last).as_deref(), Some("c"));
    }

    #[test]
    fn test_unknown_current_and_all_disabled() {
        let tabs = entries(&[("a", false), ("b", false)]);
        assert_eq!(next_tab(&tabs, "zzz", TabMove::Next).as_deref(), Some("a"));
        assert_eq!(next_tab(&tabs, "zzz", TabMove::Prev).as_deref(), Some("b"));

        let disabled = entries(&[("a", true)]);
        assert_eq!(next_tab(&disabled, "a", TabMove::Next), None);
    }

    #[test]
    fn test_keys_follow_orientation() {
        use Orientation::*;
        assert_eq!(TabMove::from_key("ArrowRight", Horizontal), Some(TabMove::Next));
        assert_eq!(TabMove::from_key("ArrowRight", Vertical), None);
        assert_eq!(TabMove::from_key("ArrowUp", Vertical), Some(TabMove::Prev));
        assert_eq!(TabMove::from_key("End", Vertical), Some(TabMove::Last));
    }

    #[test]
    fn test_missing_provider_message() {
        let err = ContextError::Missing {
            component: "Tab",
            provider: "Tabs",
        };
        assert_eq!(err.to_string(), "<Tab> must be used inside <Tabs>");
    }
}

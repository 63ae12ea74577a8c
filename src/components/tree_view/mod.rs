//! TreeView component.
//!
//! Renders a forest of [`TreeNode`]s as a flat list of `treeitem` rows with
//! `aria-level`/`aria-posinset`/`aria-setsize`, so expansion, search and
//! keyboard focus all work from one ordered row list.
//!
//! Selection, expansion and check state can each be controlled by the
//! caller or left to the component; see [`Controlled`].

use leptos::{ev, prelude::*};
use leptos_icons::Icon;
use nebula_core::tree::{
    self, CheckMode, KeySet, NavKey, NavOutcome, SearchResult, SelectionMode, TreeIndex,
    TreeNode, TreeRow,
};

use crate::components::controlled::Controlled;
use crate::components::icons as ic;
use crate::utils::{dom, sanitize, unique_id};

stylance::import_crate_style!(css, "src/components/tree_view/tree_view.module.css");

/// Horizontal offset per nesting level, in rem.
const INDENT_REM: f32 = 1.25;

/// Payload of `on_select`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SelectEvent {
    pub selected_keys: KeySet,
    pub node: String,
    pub selected: bool,
}

/// Payload of `on_expand`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ExpandEvent {
    pub expanded_keys: KeySet,
    pub node: String,
    pub expanded: bool,
}

/// Payload of `on_check`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CheckEvent {
    pub checked_keys: KeySet,
    pub half_checked_keys: KeySet,
    pub node: String,
    pub checked: bool,
}

/// Splits `title` around the first case-insensitive occurrence of `query`.
///
/// Returns `None` when the query is blank or absent from the title.
pub fn highlight_parts(title: &str, query: &str) -> Option<(String, String, String)> {
    let query = query.trim();
    if query.is_empty() {
        return None;
    }
    let lower_title = title.to_lowercase();
    let lower_query = query.to_lowercase();
    // Lowercasing can change byte lengths outside ASCII; only slice when safe.
    if lower_title.len() != title.len() {
        return None;
    }
    let start = lower_title.find(&lower_query)?;
    let end = start + lower_query.len();
    if !title.is_char_boundary(start) || !title.is_char_boundary(end) {
        return None;
    }
    Some((
        title[..start].to_string(),
        title[start..end].to_string(),
        title[end..].to_string(),
    ))
}

/// Value of `aria-checked` for a row.
fn aria_checked(checked: bool, half: bool) -> &'static str {
    match (checked, half) {
        (true, _) => "true",
        (false, true) => "mixed",
        (false, false) => "false",
    }
}

/// Identity of a rendered row.
///
/// Everything a row renders once lives here; expansion is left out and read
/// reactively so focus survives expand and collapse.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
struct RowKey {
    key: String,
    title: String,
    depth: usize,
    pos_in_set: usize,
    set_size: usize,
    has_children: bool,
    disabled: bool,
    selectable: bool,
}

impl From<&TreeRow> for RowKey {
    fn from(row: &TreeRow) -> Self {
        Self {
            key: row.key.clone(),
            title: row.title.clone(),
            depth: row.depth,
            pos_in_set: row.pos_in_set,
            set_size: row.set_size,
            has_children: row.has_children,
            disabled: row.disabled,
            selectable: row.selectable,
        }
    }
}

/// Reactive state shared by the tree and its rows.
#[derive(Clone, Copy)]
struct TreeState {
    base_id: StoredValue<String>,
    index: Memo<TreeIndex>,
    selected: Controlled<KeySet>,
    expanded: Controlled<KeySet>,
    checked: Controlled<KeySet>,
    half_checked: Memo<KeySet>,
    focused: RwSignal<Option<String>>,
    query: RwSignal<String>,
    selection_mode: SelectionMode,
    check_mode: CheckMode,
    selectable: bool,
    checkable: bool,
    on_select: Option<Callback<SelectEvent>>,
    on_expand: Option<Callback<ExpandEvent>>,
    on_check: Option<Callback<CheckEvent>>,
}

impl TreeState {
    fn row_id(&self, key: &str) -> String {
        format!("{}-node-{}", self.base_id.get_value(), sanitize(key))
    }

    fn toggle_select(&self, key: &str) {
        if !self.selectable {
            return;
        }
        let current = self.selected.get_untracked();
        let next = self
            .index
            .with_untracked(|index| tree::toggle_select(index, &current, key, self.selection_mode));
        if next == current {
            return;
        }
        let selected = next.contains(key);
        self.selected.set(next.clone());
        if let Some(cb) = self.on_select {
            cb.run(SelectEvent {
                selected_keys: next,
                node: key.to_string(),
                selected,
            });
        }
    }

    fn set_expanded(&self, next: KeySet, node: &str) {
        let expanded = next.contains(node);
        self.expanded.set(next.clone());
        if let Some(cb) = self.on_expand {
            cb.run(ExpandEvent {
                expanded_keys: next,
                node: node.to_string(),
                expanded,
            });
        }
    }

    fn toggle_expand(&self, key: &str) {
        let current = self.expanded.get_untracked();
        let next = self
            .index
            .with_untracked(|index| tree::toggle_expand(index, &current, key));
        if next != current {
            self.set_expanded(next, key);
        }
    }

    fn toggle_check(&self, key: &str) {
        if !self.checkable {
            return;
        }
        let current = self.checked.get_untracked();
        let check = !current.contains(key);
        let (next, half) = self.index.with_untracked(|index| {
            let next = tree::toggle_check(index, &current, key, check, self.check_mode);
            let half = match self.check_mode {
                CheckMode::Cascade => tree::half_checked(index, &next),
                CheckMode::Strict => KeySet::new(),
            };
            (next, half)
        });
        if next == current {
            return;
        }
        self.checked.set(next.clone());
        if let Some(cb) = self.on_check {
            cb.run(CheckEvent {
                checked_keys: next,
                half_checked_keys: half,
                node: key.to_string(),
                checked: check,
            });
        }
    }

    fn focus(&self, key: String) {
        let id = self.row_id(&key);
        self.focused.set(Some(key));
        dom::focus_by_id(&id);
    }

    fn activate(&self, key: &str) {
        if self.checkable {
            self.toggle_check(key);
        } else {
            self.toggle_select(key);
        }
    }
}

/// Hierarchical list with selection, expansion, check cascade and search.
#[component]
pub fn TreeView(
    #[prop(into)] data: Signal<Vec<TreeNode>>,
    /// Allow more than one selected node.
    #[prop(optional)]
    multiple: bool,
    /// Render a checkbox per node.
    #[prop(optional)]
    checkable: bool,
    /// Check nodes independently instead of cascading.
    #[prop(optional)]
    check_strictly: bool,
    #[prop(default = true)] selectable: bool,
    /// Show a filter box above the tree.
    #[prop(optional)]
    show_search: bool,
    /// Expand ancestors of search matches as the query changes.
    #[prop(default = true)]
    auto_expand_parent: bool,
    #[prop(optional)] default_expand_all: bool,
    #[prop(optional, into)] selected_keys: Option<Signal<KeySet>>,
    #[prop(optional)] default_selected_keys: KeySet,
    #[prop(optional, into)] expanded_keys: Option<Signal<KeySet>>,
    #[prop(optional)] default_expanded_keys: KeySet,
    #[prop(optional, into)] checked_keys: Option<Signal<KeySet>>,
    #[prop(optional)] default_checked_keys: KeySet,
    #[prop(optional, into)] on_select: Option<Callback<SelectEvent>>,
    #[prop(optional, into)] on_expand: Option<Callback<ExpandEvent>>,
    #[prop(optional, into)] on_check: Option<Callback<CheckEvent>>,
    #[prop(optional, into)] aria_label: Option<String>,
) -> impl IntoView {
    let index = Memo::new(move |_| {
        data.with(|nodes| {
            TreeIndex::try_new(nodes).unwrap_or_else(|e| {
                dom::warn(&format!("TreeView: {}; keeping first occurrence", e));
                TreeIndex::new(nodes)
            })
        })
    });

    let check_mode = if check_strictly {
        CheckMode::Strict
    } else {
        CheckMode::Cascade
    };

    let (initial_expanded, initial_checked) = index.with_untracked(|idx| {
        let expanded = if default_expand_all {
            tree::expand_all(idx)
        } else {
            default_expanded_keys
        };
        let checked = match check_mode {
            CheckMode::Cascade => tree::conduct_checked(idx, &default_checked_keys),
            CheckMode::Strict => default_checked_keys,
        };
        (expanded, checked)
    });

    let checked = Controlled::new(checked_keys, initial_checked);
    let half_checked = Memo::new(move |_| match check_mode {
        CheckMode::Cascade => checked.with(|c| index.with(|idx| tree::half_checked(idx, c))),
        CheckMode::Strict => KeySet::new(),
    });

    let state = TreeState {
        base_id: StoredValue::new(unique_id("tree")),
        index,
        selected: Controlled::new(selected_keys, default_selected_keys),
        expanded: Controlled::new(expanded_keys, initial_expanded),
        checked,
        half_checked,
        focused: RwSignal::new(None),
        query: RwSignal::new(String::new()),
        selection_mode: SelectionMode::from_multiple(multiple),
        check_mode,
        selectable,
        checkable,
        on_select,
        on_expand,
        on_check,
    };

    let search_result: Memo<SearchResult> =
        Memo::new(move |_| state.query.with(|q| data.with(|nodes| tree::search(nodes, q))));

    // Reveal matches when the query changes.
    Effect::new(move |prev: Option<String>| {
        let query = state.query.get();
        if auto_expand_parent && prev.as_ref() != Some(&query) && !query.trim().is_empty() {
            let reveal = search_result.with_untracked(|r| r.expanded.clone());
            let current = state.expanded.get_untracked();
            if !reveal.is_subset(&current) {
                let next: KeySet = current.union(&reveal).cloned().collect();
                let first = reveal.iter().next().cloned().unwrap_or_default();
                state.set_expanded(next, &first);
            }
        }
        query
    });

    let rows = Memo::new(move |_| {
        search_result.with(|result| state.expanded.with(|exp| tree::visible_rows(&result.nodes, exp)))
    });

    let on_keydown = move |e: ev::KeyboardEvent| {
        let Some(key) = NavKey::from_key(&e.key()) else {
            return;
        };
        e.prevent_default();
        let focused = state.focused.get_untracked();
        let outcome = rows.with_untracked(|rows| tree::navigate(rows, focused.as_deref(), key));
        match outcome {
            NavOutcome::Focus(k) => state.focus(k),
            NavOutcome::Expand(k) | NavOutcome::Collapse(k) => state.toggle_expand(&k),
            NavOutcome::Activate(k) => state.activate(&k),
            NavOutcome::None => {}
        }
    };

    let is_empty = move || rows.with(|r| r.is_empty());
    let multiselectable = if multiple { "true" } else { "false" };

    view! {
        <div class=css::treeView>
            {show_search.then(|| view! {
                <label class=css::search>
                    <span class=css::searchIcon aria-hidden="true"><Icon icon=ic::SEARCH /></span>
                    <input
                        type="search"
                        placeholder="Search"
                        aria-label="Filter tree"
                        prop:value=move || state.query.get()
                        on:input=move |e| state.query.set(event_target_value(&e))
                    />
                </label>
            })}
            <div
                class=css::tree
                role="tree"
                aria-label=aria_label
                aria-multiselectable=multiselectable
                on:keydown=on_keydown
            >
                <For
                    each=move || rows.get()
                    key=|row| RowKey::from(row)
                    children=move |row| view! { <TreeItemRow row=row state=state /> }
                />
                <Show when=is_empty>
                    <div class=css::empty>"No matching nodes"</div>
                </Show>
            </div>
        </div>
    }
}

#[component]
fn TreeItemRow(row: TreeRow, state: TreeState) -> impl IntoView {
    let key = StoredValue::new(row.key.clone());
    let row_id = state.row_id(&row.key);
    let disabled = row.disabled;
    let has_children = row.has_children;
    let is_expanded = move || key.with_value(|k| state.expanded.with(|e| e.contains(k)));
    let is_first_root = row.depth == 0 && row.pos_in_set == 1;
    let can_select = state.selectable && row.selectable && !disabled;

    let is_selected = move || key.with_value(|k| state.selected.with(|s| s.contains(k)));
    let is_checked = move || key.with_value(|k| state.checked.with(|c| c.contains(k)));
    let is_half = move || key.with_value(|k| state.half_checked.with(|h| h.contains(k)));

    // First row takes the tab stop until something is focused.
    let is_tab_stop = move || {
        let focused = state.focused.get();
        key.with_value(|k| match focused {
            Some(f) => &f == k,
            None => is_first_root,
        })
    };

    let row_class = move || {
        let mut classes = vec![css::row];
        if is_selected() {
            classes.push(css::selected);
        }
        if disabled {
            classes.push(css::disabled);
        }
        classes.join(" ")
    };

    let icon = move || match (has_children, is_expanded()) {
        (true, true) => ic::FOLDER_OPEN,
        (true, false) => ic::FOLDER,
        (false, _) => ic::FILE,
    };

    let title = row.title.clone();
    let title_view = move || match highlight_parts(&title, &state.query.get()) {
        Some((before, hit, after)) => view! {
            <span>{before}<mark class=css::highlight>{hit}</mark>{after}</span>
        }
        .into_any(),
        None => view! { <span>{title.clone()}</span> }.into_any(),
    };

    view! {
        <div
            id=row_id
            class=row_class
            role="treeitem"
            attr:aria-level=row.depth + 1
            aria-posinset=row.pos_in_set
            aria-setsize=row.set_size
            aria-expanded=move || has_children.then(|| if is_expanded() { "true" } else { "false" })
            aria-selected=move || if is_selected() { "true" } else { "false" }
            aria-checked=move || state.checkable.then(|| aria_checked(is_checked(), is_half()))
            aria-disabled=if disabled { "true" } else { "false" }
            tabindex=move || if is_tab_stop() { "0" } else { "-1" }
            style=format!("padding-left: {}rem", row.depth as f32 * INDENT_REM)
            on:focus=move |_| state.focused.set(Some(key.get_value()))
        >
            <span
                class=move || if is_expanded() {
                    format!("{} {}", css::switcher, css::open)
                } else {
                    css::switcher.to_string()
                }
                aria-hidden="true"
                on:click=move |e: ev::MouseEvent| {
                    e.stop_propagation();
                    if has_children {
                        key.with_value(|k| state.toggle_expand(k));
                    }
                }
            >
                {has_children.then(|| view! { <Icon icon=ic::CHEVRON_RIGHT /> })}
            </span>
            {state.checkable.then(|| view! {
                <input
                    type="checkbox"
                    class=css::checkbox
                    tabindex="-1"
                    aria-hidden="true"
                    disabled=disabled
                    prop:checked=is_checked
                    prop:indeterminate=is_half
                    on:click=move |e: ev::MouseEvent| e.stop_propagation()
                    on:change=move |_| key.with_value(|k| state.toggle_check(k))
                />
            })}
            <span
                class=if can_select { format!("{} {}", css::title, css::clickable) } else { css::title.to_string() }
                on:click=move |_| key.with_value(|k| state.toggle_select(k))
            >
                <span class=css::icon aria-hidden="true">{move || view! { <Icon icon=icon() /> }}</span>
                {title_view}
            </span>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_highlight_parts() {
        assert_eq!(
            highlight_parts("Button.rs", "TON"),
            Some(("But".to_string(), "ton".to_string(), ".rs".to_string()))
        );
        assert_eq!(highlight_parts("Button.rs", "  "), None);
        assert_eq!(highlight_parts("Button.rs", "zzz"), None);
    }

    #[test]
    fn test_highlight_non_ascii_falls_back() {
        // 'İ' lowercases to two chars, so byte offsets would not line up.
        assert_eq!(highlight_parts("İstanbul", "stan"), None);
        assert_eq!(
            highlight_parts("café menu", "MENU"),
            Some(("café ".to_string(), "menu".to_string(), String::new()))
        );
    }

    fn row(key: &str, title: &str) -> TreeRow {
        TreeRow {
            key: key.to_string(),
            title: title.to_string(),
            depth: 0,
            pos_in_set: 1,
            set_size: 1,
            parent: None,
            has_children: true,
            is_leaf: false,
            expanded: false,
            disabled: false,
            selectable: true,
        }
    }

    #[test]
    fn test_row_key_tracks_rendered_fields() {
        let base = row("docs", "Docs");
        let expanded = TreeRow { expanded: true, ..base.clone() };
        assert_eq!(RowKey::from(&base), RowKey::from(&expanded));

        let renamed = row("docs", "Guides");
        assert_ne!(RowKey::from(&base), RowKey::from(&renamed));

        let locked = TreeRow { disabled: true, ..base.clone() };
        assert_ne!(RowKey::from(&base), RowKey::from(&locked));

        let plain = TreeRow { selectable: false, ..base.clone() };
        assert_ne!(RowKey::from(&base), RowKey::from(&plain));
    }

    #[test]
    fn test_aria_checked() {
        assert_eq!(aria_checked(true, false), "true");
        assert_eq!(aria_checked(false, true), "mixed");
        assert_eq!(aria_checked(false, false), "false");
    }
}

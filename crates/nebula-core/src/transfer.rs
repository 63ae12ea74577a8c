//! Transfer list state.
//!
//! A flat item collection is split into a source list and a target list by
//! membership in `target_keys`. Both lists keep data order. Selection spans
//! both lists; moving items clears their selection.

use serde::{Deserialize, Serialize};

/// An entry in a transfer list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TransferItem {
    pub key: String,
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default)]
    pub disabled: bool,
}

impl TransferItem {
    pub fn new(key: impl Into<String>, title: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            title: title.into(),
            description: None,
            disabled: false,
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn disabled(mut self) -> Self {
        self.disabled = true;
        self
    }
}

/// One of the two lists.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ListSide {
    Source,
    Target,
}

/// Direction of a move.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    /// Source to target ("right").
    ToTarget,
    /// Target to source ("left").
    ToSource,
}

impl Direction {
    /// The list items are taken from.
    pub fn origin(self) -> ListSide {
        match self {
            Self::ToTarget => ListSide::Source,
            Self::ToSource => ListSide::Target,
        }
    }
}

/// Tri-state of a list's "select all" checkbox.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CheckAll {
    None,
    Partial,
    All,
}

/// Membership and selection for a transfer list.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TransferState {
    /// Keys in the target list, in the order they were moved.
    pub target_keys: Vec<String>,
    /// Selected keys on either side.
    pub selected_keys: Vec<String>,
}

/// Result of [`move_selected`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MoveOutcome {
    pub state: TransferState,
    /// Keys that changed lists, in data order.
    pub moved: Vec<String>,
}

impl TransferState {
    pub fn new(target_keys: Vec<String>, selected_keys: Vec<String>) -> Self {
        Self {
            target_keys,
            selected_keys,
        }
    }

    pub fn side_of(&self, key: &str) -> ListSide {
        if self.target_keys.iter().any(|k| k == key) {
            ListSide::Target
        } else {
            ListSide::Source
        }
    }

    pub fn is_selected(&self, key: &str) -> bool {
        self.selected_keys.iter().any(|k| k == key)
    }
}

/// Items on one side, in data order.
pub fn side_items<'a>(
    items: &'a [TransferItem],
    state: &TransferState,
    side: ListSide,
) -> Vec<&'a TransferItem> {
    items
        .iter()
        .filter(|item| state.side_of(&item.key) == side)
        .collect()
}

/// Selected keys on one side, in data order.
pub fn side_selection(items: &[TransferItem], state: &TransferState, side: ListSide) -> Vec<String> {
    side_items(items, state, side)
        .into_iter()
        .filter(|item| state.is_selected(&item.key))
        .map(|item| item.key.clone())
        .collect()
}

/// Whether a move in `direction` would change anything.
pub fn can_move(items: &[TransferItem], state: &TransferState, direction: Direction) -> bool {
    side_items(items, state, direction.origin())
        .iter()
        .any(|item| !item.disabled && state.is_selected(&item.key))
}

/// Moves the selected, enabled items of the origin list to the other list.
///
/// Moving to the target appends keys to `target_keys`; moving back removes
/// them. Moved keys leave `selected_keys`; selections on the other side stay.
pub fn move_selected(
    items: &[TransferItem],
    state: &TransferState,
    direction: Direction,
) -> MoveOutcome {
    let moved: Vec<String> = side_items(items, state, direction.origin())
        .into_iter()
        .filter(|item| !item.disabled && state.is_selected(&item.key))
        .map(|item| item.key.clone())
        .collect();

    let mut target_keys = state.target_keys.clone();
    match direction {
        Direction::ToTarget => target_keys.extend(moved.iter().cloned()),
        Direction::ToSource => target_keys.retain(|k| !moved.contains(k)),
    }
    let selected_keys = state
        .selected_keys
        .iter()
        .filter(|k| !moved.contains(k))
        .cloned()
        .collect();

    MoveOutcome {
        state: TransferState {
            target_keys,
            selected_keys,
        },
        moved,
    }
}

/// Toggles selection of a single item. Disabled or unknown items are no-ops.
pub fn toggle_item(items: &[TransferItem], state: &TransferState, key: &str) -> Vec<String> {
    let enabled = items.iter().any(|item| item.key == key && !item.disabled);
    if !enabled {
        return state.selected_keys.clone();
    }

    if state.is_selected(key) {
        state
            .selected_keys
            .iter()
            .filter(|k| *k != key)
            .cloned()
            .collect()
    } else {
        let mut next = state.selected_keys.clone();
        next.push(key.to_string());
        next
    }
}

/// Selects or clears every enabled item on one side.
///
/// When `visible` is given only those keys are affected, which lets a
/// filtered list select just what it shows. The other side is untouched.
pub fn select_all(
    items: &[TransferItem],
    state: &TransferState,
    side: ListSide,
    select: bool,
    visible: Option<&[String]>,
) -> Vec<String> {
    let affected: Vec<&str> = side_items(items, state, side)
        .into_iter()
        .filter(|item| !item.disabled)
        .filter(|item| visible.is_none_or(|v| v.contains(&item.key)))
        .map(|item| item.key.as_str())
        .collect();

    let mut next: Vec<String> = state
        .selected_keys
        .iter()
        .filter(|k| !affected.contains(&k.as_str()))
        .cloned()
        .collect();
    if select {
        next.extend(affected.into_iter().map(String::from));
    }
    next
}

/// State of the "select all" checkbox for one side.
///
/// With `visible` only those keys are counted, matching what
/// [`select_all`] would touch for the same scope.
pub fn side_check_state(
    items: &[TransferItem],
    state: &TransferState,
    side: ListSide,
    visible: Option<&[String]>,
) -> CheckAll {
    let enabled: Vec<_> = side_items(items, state, side)
        .into_iter()
        .filter(|item| !item.disabled)
        .filter(|item| visible.is_none_or(|v| v.contains(&item.key)))
        .collect();
    let selected = enabled
        .iter()
        .filter(|item| state.is_selected(&item.key))
        .count();

    match selected {
        0 => CheckAll::None,
        n if n == enabled.len() => CheckAll::All,
        _ => CheckAll::Partial,
    }
}

/// Case-insensitive substring search over title and description.
pub fn filter_items<'a>(items: &[&'a TransferItem], query: &str) -> Vec<&'a TransferItem> {
    let needle = query.trim().to_lowercase();
    if needle.is_empty() {
        return items.to_vec();
    }
    items
        .iter()
        .copied()
        .filter(|item| {
            item.title.to_lowercase().contains(&needle)
                || item
                    .description
                    .as_deref()
                    .is_some_and(|d| d.to_lowercase().contains(&needle))
        })
        .collect()
}

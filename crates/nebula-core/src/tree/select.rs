//! Node selection.

use super::{KeySet, TreeIndex};

/// Whether a tree allows one or many selected nodes.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SelectionMode {
    #[default]
    Single,
    Multiple,
}

impl SelectionMode {
    pub fn from_multiple(multiple: bool) -> Self {
        if multiple { Self::Multiple } else { Self::Single }
    }
}

/// Toggles `key` in the selected set.
///
/// Single mode replaces the set with `{key}`, or clears it when `key` is
/// already the only selection. Multiple mode inserts or removes `key`. Keys that are
/// disabled, not selectable or unknown leave the set unchanged.
pub fn toggle_select(
    index: &TreeIndex,
    selected: &KeySet,
    key: &str,
    mode: SelectionMode,
) -> KeySet {
    if !index.is_selectable(key) {
        return selected.clone();
    }

    let was_selected = selected.contains(key);
    match mode {
        SelectionMode::Single if was_selected && selected.len() == 1 => KeySet::new(),
        SelectionMode::Single => KeySet::from([key.to_string()]),
        SelectionMode::Multiple => {
            let mut next = selected.clone();
            if was_selected {
                next.remove(key);
            } else {
                next.insert(key.to_string());
            }
            next
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tree::{TreeNode, fixtures};

    #[test]
    fn test_single_replaces_and_toggles_off() {
        let index = TreeIndex::new(&fixtures::abc());

        let selected = toggle_select(&index, &KeySet::new(), "B", SelectionMode::Single);
        assert_eq!(selected, KeySet::from(["B".to_string()]));

        let selected = toggle_select(&index, &selected, "C", SelectionMode::Single);
        assert_eq!(selected, KeySet::from(["C".to_string()]));

        let selected = toggle_select(&index, &selected, "C", SelectionMode::Single);
        assert!(selected.is_empty());
    }

    #[test]
    fn test_single_collapses_a_larger_set_to_key() {
        let index = TreeIndex::new(&fixtures::abc());
        let start = KeySet::from(["B".to_string(), "C".to_string()]);

        let selected = toggle_select(&index, &start, "B", SelectionMode::Single);
        assert_eq!(selected, KeySet::from(["B".to_string()]));
    }

    #[test]
    fn test_multiple_appends_and_removes() {
        let index = TreeIndex::new(&fixtures::abc());
        let mode = SelectionMode::Multiple;

        let selected = toggle_select(&index, &KeySet::new(), "A", mode);
        let selected = toggle_select(&index, &selected, "C", mode);
        assert_eq!(selected.len(), 2);

        let selected = toggle_select(&index, &selected, "A", mode);
        assert_eq!(selected, KeySet::from(["C".to_string()]));
    }

    #[test]
    fn test_disabled_and_unselectable_are_noops() {
        let nodes = vec![
            TreeNode::new("off", "off").disabled(),
            TreeNode::new("static", "static").unselectable(),
            TreeNode::new("on", "on"),
        ];
        let index = TreeIndex::new(&nodes);
        let start = KeySet::from(["on".to_string()]);

        for key in ["off", "static", "missing"] {
            assert_eq!(
                toggle_select(&index, &start, key, SelectionMode::Single),
                start
            );
            assert_eq!(
                toggle_select(&index, &start, key, SelectionMode::Multiple),
                start
            );
        }
    }
}

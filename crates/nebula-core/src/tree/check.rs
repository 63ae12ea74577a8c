//! Check-mark cascade.

use super::{KeySet, TreeIndex};

/// How a check toggle propagates through the tree.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum CheckMode {
    /// Descendants follow the toggled node; ancestors are re-derived.
    #[default]
    Cascade,
    /// Only the toggled node changes.
    Strict,
}

/// Toggles the check state of `key` and returns the new checked set.
///
/// In [`CheckMode::Cascade`] the node and its enabled descendants take the new
/// state, then ancestors are re-evaluated bottom-up: each is checked iff all
/// of its enabled children are checked. Disabled nodes never change and
/// count as satisfied when their parent is evaluated. The upward walk stops
/// at the first disabled ancestor, so nothing above it is derived through it.
///
/// Toggling a disabled or unknown key returns `checked` unchanged.
pub fn toggle_check(
    index: &TreeIndex,
    checked: &KeySet,
    key: &str,
    check: bool,
    mode: CheckMode,
) -> KeySet {
    let mut next = checked.clone();
    if !index.contains(key) || index.is_disabled(key) {
        return next;
    }

    set(&mut next, key, check);
    if mode == CheckMode::Strict {
        return next;
    }

    index.walk(key, &mut |k| {
        if index.is_disabled(k) {
            return false;
        }
        set(&mut next, k, check);
        true
    });

    for ancestor in index.ancestors(key) {
        if index.is_disabled(ancestor) {
            break;
        }
        let all = all_children_checked(index, &next, ancestor);
        set(&mut next, ancestor, all);
    }

    next
}

/// Normalizes an externally supplied checked set.
///
/// Every checked node pushes its state down to enabled descendants, then
/// parents are derived bottom-up from their children. A parent whose
/// children are all disabled is left as given, so checks below a disabled
/// node never reach past it. Unknown keys are kept.
pub fn conduct_checked(index: &TreeIndex, keys: &KeySet) -> KeySet {
    let mut next = keys.clone();

    for key in keys.iter().filter(|k| index.contains(k)) {
        if index.is_disabled(key) {
            continue;
        }
        index.walk(key, &mut |k| {
            if index.is_disabled(k) {
                return false;
            }
            next.insert(k.to_string());
            true
        });
    }

    // Deepest nodes first so parents see settled children.
    let mut parents: Vec<&str> = index
        .keys()
        .filter(|k| index.has_children(k) && !index.is_disabled(k))
        .collect();
    parents.sort_by_key(|k| std::cmp::Reverse(index.depth(k).unwrap_or(0)));
    for parent in parents {
        if has_enabled_child(index, parent) {
            let all = all_children_checked(index, &next, parent);
            set(&mut next, parent, all);
        }
    }

    next
}

/// Keys whose checkbox renders indeterminate.
///
/// A node is half checked when it is not checked itself but at least one of
/// its descendants is.
pub fn half_checked(index: &TreeIndex, checked: &KeySet) -> KeySet {
    index
        .keys()
        .filter(|k| !checked.contains(*k))
        .filter(|k| index.descendants(k).iter().any(|d| checked.contains(*d)))
        .map(String::from)
        .collect()
}

fn all_children_checked(index: &TreeIndex, checked: &KeySet, key: &str) -> bool {
    index
        .children(key)
        .iter()
        .all(|c| index.is_disabled(c) || checked.contains(c))
}

fn has_enabled_child(index: &TreeIndex, key: &str) -> bool {
    index.children(key).iter().any(|c| !index.is_disabled(c))
}

fn set(keys: &mut KeySet, key: &str, on: bool) {
    if on {
        keys.insert(key.to_string());
    } else {
        keys.remove(key);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tree::{TreeNode, fixtures};

    fn keys(items: &[&str]) -> KeySet {
        items.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_parent_follows_children() {
        let index = TreeIndex::new(&fixtures::abc());
        let mode = CheckMode::Cascade;

        let step1 = toggle_check(&index, &KeySet::new(), "B", true, mode);
        assert_eq!(step1, keys(&["B"]));

        let step2 = toggle_check(&index, &step1, "C", true, mode);
        assert_eq!(step2, keys(&["A", "B", "C"]));

        let step3 = toggle_check(&index, &step2, "B", false, mode);
        assert_eq!(step3, keys(&["C"]));
    }

    #[test]
    fn test_leaf_round_trip_restores_set() {
        let index = TreeIndex::new(&fixtures::project());
        let mode = CheckMode::Cascade;
        let starts = [keys(&[]), keys(&["main"]), keys(&["docs", "intro"])];

        for start in starts {
            for leaf in ["button", "tree", "main", "intro"] {
                if start.contains(leaf) {
                    continue;
                }
                let on = toggle_check(&index, &start, leaf, true, mode);
                let off = toggle_check(&index, &on, leaf, false, mode);
                assert_eq!(off, start, "leaf {leaf}");
            }
        }
    }

    #[test]
    fn test_check_parent_cascades_down_skipping_disabled() {
        let index = TreeIndex::new(&fixtures::project());
        let checked = toggle_check(&index, &KeySet::new(), "src", true, CheckMode::Cascade);

        assert_eq!(
            checked,
            keys(&["src", "components", "button", "tree", "main"])
        );
        assert!(!checked.contains("legacy"));
    }

    #[test]
    fn test_disabled_child_counts_as_satisfied() {
        let index = TreeIndex::new(&fixtures::project());
        let mode = CheckMode::Cascade;

        let checked = toggle_check(&index, &KeySet::new(), "button", true, mode);
        assert!(!checked.contains("components"));

        let checked = toggle_check(&index, &checked, "tree", true, mode);
        assert!(checked.contains("components"));
        assert!(!checked.contains("src"));

        let checked = toggle_check(&index, &checked, "main", true, mode);
        assert!(checked.contains("src"));
        assert!(!checked.contains("docs"));
    }

    #[test]
    fn test_uncheck_any_child_removes_ancestors() {
        let index = TreeIndex::new(&fixtures::project());
        let mode = CheckMode::Cascade;
        let all = toggle_check(&index, &KeySet::new(), "src", true, mode);

        let checked = toggle_check(&index, &all, "tree", false, mode);
        assert!(!checked.contains("components"));
        assert!(!checked.contains("src"));
        assert!(checked.contains("button"));
        assert!(checked.contains("main"));
    }

    #[test]
    fn test_disabled_and_unknown_are_noops() {
        let index = TreeIndex::new(&fixtures::project());
        let start = keys(&["main"]);

        assert_eq!(
            toggle_check(&index, &start, "legacy", true, CheckMode::Cascade),
            start
        );
        assert_eq!(
            toggle_check(&index, &start, "nope", true, CheckMode::Cascade),
            start
        );
    }

    #[test]
    fn test_disabled_subtree_is_not_entered() {
        let nodes = vec![TreeNode::new("root", "root").with_children(vec![
            TreeNode::new("locked", "locked")
                .disabled()
                .with_children(vec![TreeNode::new("inner", "inner")]),
            TreeNode::new("open", "open"),
        ])];
        let index = TreeIndex::new(&nodes);

        let checked = toggle_check(&index, &KeySet::new(), "root", true, CheckMode::Cascade);
        assert_eq!(checked, keys(&["root", "open"]));
    }

    #[test]
    fn test_disabled_ancestor_stops_upward_walk() {
        let nodes = vec![TreeNode::new("top", "top").with_children(vec![
            TreeNode::new("mid", "mid")
                .disabled()
                .with_children(vec![TreeNode::new("leaf", "leaf")]),
        ])];
        let index = TreeIndex::new(&nodes);
        let mode = CheckMode::Cascade;
        let start = KeySet::new();

        let on = toggle_check(&index, &start, "leaf", true, mode);
        assert_eq!(on, keys(&["leaf"]));

        let off = toggle_check(&index, &on, "leaf", false, mode);
        assert_eq!(off, start);
    }

    #[test]
    fn test_disabled_ancestor_with_enabled_sibling_round_trip() {
        let nodes = vec![TreeNode::new("top", "top").with_children(vec![
            TreeNode::new("mid", "mid")
                .disabled()
                .with_children(vec![TreeNode::new("leaf", "leaf")]),
            TreeNode::new("side", "side"),
        ])];
        let index = TreeIndex::new(&nodes);
        let mode = CheckMode::Cascade;

        for start in [keys(&[]), keys(&["side", "top"])] {
            let on = toggle_check(&index, &start, "leaf", true, mode);
            assert!(!on.contains("mid"));
            let off = toggle_check(&index, &on, "leaf", false, mode);
            assert_eq!(off, start);
        }

        let on = toggle_check(&index, &KeySet::new(), "side", true, mode);
        assert_eq!(on, keys(&["side", "top"]));
        let off = toggle_check(&index, &on, "side", false, mode);
        assert!(off.is_empty());
    }

    #[test]
    fn test_conduct_stops_at_disabled_parent() {
        let nodes = vec![TreeNode::new("top", "top").with_children(vec![
            TreeNode::new("mid", "mid")
                .disabled()
                .with_children(vec![TreeNode::new("leaf", "leaf")]),
        ])];
        let index = TreeIndex::new(&nodes);

        assert_eq!(conduct_checked(&index, &keys(&["leaf"])), keys(&["leaf"]));
        assert!(conduct_checked(&index, &KeySet::new()).is_empty());
    }

    #[test]
    fn test_strict_mode_does_not_cascade() {
        let index = TreeIndex::new(&fixtures::abc());
        let checked = toggle_check(&index, &KeySet::new(), "A", true, CheckMode::Strict);
        assert_eq!(checked, keys(&["A"]));

        let checked = toggle_check(&index, &keys(&["B"]), "C", true, CheckMode::Strict);
        assert_eq!(checked, keys(&["B", "C"]));
    }

    #[test]
    fn test_conduct_checked() {
        let index = TreeIndex::new(&fixtures::project());

        let conducted = conduct_checked(&index, &keys(&["components"]));
        assert_eq!(conducted, keys(&["components", "button", "tree"]));

        let conducted = conduct_checked(&index, &keys(&["intro"]));
        assert_eq!(conducted, keys(&["docs", "intro"]));

        // A checked parent with an unchecked child is corrected.
        let conducted = conduct_checked(&index, &keys(&["src", "main"]));
        assert!(conducted.contains("src"));
        assert!(conducted.contains("button"));

        let conducted = conduct_checked(&index, &keys(&["ghost"]));
        assert_eq!(conducted, keys(&["ghost"]));
    }

    #[test]
    fn test_half_checked() {
        let index = TreeIndex::new(&fixtures::project());
        let checked = toggle_check(&index, &KeySet::new(), "button", true, CheckMode::Cascade);

        assert_eq!(half_checked(&index, &checked), keys(&["src", "components"]));

        let checked = toggle_check(&index, &checked, "tree", true, CheckMode::Cascade);
        assert_eq!(half_checked(&index, &checked), keys(&["src"]));
        assert!(half_checked(&index, &KeySet::new()).is_empty());
    }
}

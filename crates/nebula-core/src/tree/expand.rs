//! Expansion state and visible-row flattening.

use super::{KeySet, TreeIndex, TreeNode};

/// A row currently visible in a rendered tree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TreeRow {
    pub key: String,
    pub title: String,
    /// Zero-based nesting level.
    pub depth: usize,
    /// One-based position among siblings.
    pub pos_in_set: usize,
    pub set_size: usize,
    pub parent: Option<String>,
    pub has_children: bool,
    pub is_leaf: bool,
    pub expanded: bool,
    pub disabled: bool,
    pub selectable: bool,
}

/// Toggles `key` in the expanded set. Nodes without children never expand.
pub fn toggle_expand(index: &TreeIndex, expanded: &KeySet, key: &str) -> KeySet {
    let mut next = expanded.clone();
    if next.remove(key) {
        return next;
    }
    if index.has_children(key) {
        next.insert(key.to_string());
    }
    next
}

/// Every key that has children.
pub fn expand_all(index: &TreeIndex) -> KeySet {
    index
        .keys()
        .filter(|k| index.has_children(k))
        .map(String::from)
        .collect()
}

/// Ancestors of every key in `keys`, so that all of them become visible.
pub fn expand_to<'a>(index: &TreeIndex, keys: impl IntoIterator<Item = &'a str>) -> KeySet {
    keys.into_iter()
        .flat_map(|k| index.ancestors(k))
        .map(String::from)
        .collect()
}

/// Flattens the forest into the rows visible under `expanded`, in preorder.
pub fn visible_rows(nodes: &[TreeNode], expanded: &KeySet) -> Vec<TreeRow> {
    let mut rows = Vec::new();
    push_rows(nodes, None, 0, expanded, &mut rows);
    rows
}

fn push_rows(
    nodes: &[TreeNode],
    parent: Option<&str>,
    depth: usize,
    expanded: &KeySet,
    rows: &mut Vec<TreeRow>,
) {
    let set_size = nodes.len();
    for (i, node) in nodes.iter().enumerate() {
        let is_expanded = node.has_children() && expanded.contains(&node.key);
        rows.push(TreeRow {
            key: node.key.clone(),
            title: node.title.clone(),
            depth,
            pos_in_set: i + 1,
            set_size,
            parent: parent.map(String::from),
            has_children: node.has_children(),
            is_leaf: node.is_leaf(),
            expanded: is_expanded,
            disabled: node.disabled,
            selectable: node.selectable,
        });
        if is_expanded {
            push_rows(&node.children, Some(node.key.as_str()), depth + 1, expanded, rows);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tree::fixtures;

    #[test]
    fn test_toggle_expand() {
        let index = TreeIndex::new(&fixtures::project());

        let expanded = toggle_expand(&index, &KeySet::new(), "src");
        assert!(expanded.contains("src"));

        let expanded = toggle_expand(&index, &expanded, "src");
        assert!(expanded.is_empty());

        let expanded = toggle_expand(&index, &KeySet::new(), "main");
        assert!(expanded.is_empty());
    }

    #[test]
    fn test_expand_all_and_expand_to() {
        let index = TreeIndex::new(&fixtures::project());

        let all = expand_all(&index);
        assert_eq!(all.len(), 3);
        assert!(all.contains("components"));

        let path = expand_to(&index, ["tree", "intro"]);
        let expected: KeySet = ["components", "src", "docs"]
            .iter()
            .map(|s| s.to_string())
            .collect();
        assert_eq!(path, expected);
    }

    #[test]
    fn test_visible_rows_collapsed() {
        let rows = visible_rows(&fixtures::project(), &KeySet::new());
        let keys: Vec<_> = rows.iter().map(|r| r.key.as_str()).collect();

        assert_eq!(keys, vec!["src", "docs"]);
        assert_eq!(rows[0].pos_in_set, 1);
        assert_eq!(rows[1].set_size, 2);
        assert!(!rows[0].expanded);
        assert!(rows[0].has_children);
    }

    #[test]
    fn test_visible_rows_expanded() {
        let nodes = fixtures::project();
        let expanded = expand_all(&TreeIndex::new(&nodes));
        let rows = visible_rows(&nodes, &expanded);

        assert_eq!(rows.len(), 8);
        let legacy = rows.iter().find(|r| r.key == "legacy").unwrap();
        assert_eq!(legacy.depth, 2);
        assert_eq!(legacy.pos_in_set, 3);
        assert_eq!(legacy.set_size, 3);
        assert_eq!(legacy.parent.as_deref(), Some("components"));
        assert!(legacy.disabled);
        assert!(legacy.is_leaf);
    }
}

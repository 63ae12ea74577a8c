//! Tree node model.

use serde::{Deserialize, Serialize};

fn default_true() -> bool {
    true
}

/// A node in a tree forest.
///
/// Children are owned by their parent. Keys are expected to be unique across
/// the whole forest; see [`TreeIndex::try_new`](super::TreeIndex::try_new).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TreeNode {
    /// Unique identifier.
    pub key: String,
    /// Display text.
    pub title: String,
    /// Ordered child nodes.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub children: Vec<TreeNode>,
    /// Disabled nodes cannot be selected, checked or toggled by cascade.
    #[serde(default)]
    pub disabled: bool,
    /// Whether the node responds to selection.
    #[serde(default = "default_true")]
    pub selectable: bool,
    /// Explicit leaf marker. When absent, a node without children is a leaf.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_leaf: Option<bool>,
}

impl TreeNode {
    pub fn new(key: impl Into<String>, title: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            title: title.into(),
            children: Vec::new(),
            disabled: false,
            selectable: true,
            is_leaf: None,
        }
    }

    pub fn with_children(mut self, children: Vec<TreeNode>) -> Self {
        self.children = children;
        self
    }

    pub fn disabled(mut self) -> Self {
        self.disabled = true;
        self
    }

    pub fn unselectable(mut self) -> Self {
        self.selectable = false;
        self
    }

    /// Whether the node is rendered without an expand affordance.
    pub fn is_leaf(&self) -> bool {
        self.is_leaf.unwrap_or(self.children.is_empty())
    }

    pub fn has_children(&self) -> bool {
        !self.children.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_defaults() {
        let json = r#"[{"key": "a", "title": "A", "children": [{"key": "b", "title": "B"}]}]"#;
        let nodes: Vec<TreeNode> = serde_json::from_str(json).unwrap();

        assert_eq!(nodes.len(), 1);
        assert!(nodes[0].selectable);
        assert!(!nodes[0].disabled);
        assert!(!nodes[0].is_leaf());
        assert!(nodes[0].children[0].is_leaf());
    }

    #[test]
    fn test_deserialize_camel_case_flags() {
        let json = r#"{"key": "x", "title": "X", "isLeaf": false, "selectable": false, "disabled": true}"#;
        let node: TreeNode = serde_json::from_str(json).unwrap();

        assert!(!node.is_leaf());
        assert!(!node.selectable);
        assert!(node.disabled);
        assert!(!node.has_children());
    }
}

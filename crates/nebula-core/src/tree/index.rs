//! Precomputed key lookups over a tree forest.

use std::collections::HashMap;

use super::TreeNode;
use crate::error::TreeError;

#[derive(Debug, Clone, PartialEq, Eq)]
struct Entry {
    parent: Option<String>,
    children: Vec<String>,
    depth: usize,
    disabled: bool,
    selectable: bool,
}

/// Parent, children and flag lookups keyed by node key.
///
/// Built once whenever tree data changes so that cascades and ancestor walks
/// do not re-traverse the forest on every toggle.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TreeIndex {
    entries: HashMap<String, Entry>,
    roots: Vec<String>,
    preorder: Vec<String>,
}

impl TreeIndex {
    /// Indexes the forest, keeping the first occurrence of a duplicated key.
    pub fn new(nodes: &[TreeNode]) -> Self {
        let mut index = Self::default();
        let _ = index.insert_all(nodes, None, 0);
        index
    }

    /// Indexes the forest, failing on the first duplicated key.
    pub fn try_new(nodes: &[TreeNode]) -> Result<Self, TreeError> {
        let mut index = Self::default();
        match index.insert_all(nodes, None, 0) {
            Some(key) => Err(TreeError::DuplicateKey(key)),
            None => Ok(index),
        }
    }

    /// Inserts nodes recursively. Returns the first duplicated key seen.
    fn insert_all(
        &mut self,
        nodes: &[TreeNode],
        parent: Option<&str>,
        depth: usize,
    ) -> Option<String> {
        let mut duplicate = None;
        for node in nodes {
            if self.entries.contains_key(&node.key) {
                duplicate.get_or_insert_with(|| node.key.clone());
                continue;
            }

            self.entries.insert(
                node.key.clone(),
                Entry {
                    parent: parent.map(String::from),
                    children: Vec::new(),
                    depth,
                    disabled: node.disabled,
                    selectable: node.selectable,
                },
            );
            self.preorder.push(node.key.clone());
            match parent {
                Some(p) => {
                    if let Some(entry) = self.entries.get_mut(p) {
                        entry.children.push(node.key.clone());
                    }
                }
                None => self.roots.push(node.key.clone()),
            }

            if let Some(dup) = self.insert_all(&node.children, Some(node.key.as_str()), depth + 1) {
                duplicate.get_or_insert(dup);
            }
        }
        duplicate
    }

    pub fn contains(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    pub fn len(&self) -> usize {
        self.preorder.len()
    }

    pub fn is_empty(&self) -> bool {
        self.preorder.is_empty()
    }

    /// All keys in depth-first preorder.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.preorder.iter().map(String::as_str)
    }

    pub fn roots(&self) -> &[String] {
        &self.roots
    }

    pub fn parent(&self, key: &str) -> Option<&str> {
        self.entries.get(key)?.parent.as_deref()
    }

    /// Direct children in data order. Empty for leaves and unknown keys.
    pub fn children(&self, key: &str) -> &[String] {
        self.entries
            .get(key)
            .map(|e| e.children.as_slice())
            .unwrap_or(&[])
    }

    pub fn has_children(&self, key: &str) -> bool {
        !self.children(key).is_empty()
    }

    pub fn depth(&self, key: &str) -> Option<usize> {
        self.entries.get(key).map(|e| e.depth)
    }

    pub fn is_disabled(&self, key: &str) -> bool {
        self.entries.get(key).is_some_and(|e| e.disabled)
    }

    /// Whether a node can be selected: known, enabled and selectable.
    pub fn is_selectable(&self, key: &str) -> bool {
        self.entries
            .get(key)
            .is_some_and(|e| e.selectable && !e.disabled)
    }

    /// Ancestors from the nearest parent up to the root.
    pub fn ancestors(&self, key: &str) -> Vec<&str> {
        let mut out = Vec::new();
        let mut current = self.parent(key);
        while let Some(k) = current {
            out.push(k);
            current = self.parent(k);
        }
        out
    }

    /// All descendants in preorder, excluding `key` itself.
    pub fn descendants(&self, key: &str) -> Vec<&str> {
        let mut out = Vec::new();
        self.walk(key, &mut |k| {
            out.push(k);
            true
        });
        out
    }

    /// Visits descendants in preorder. When `visit` returns `false` the
    /// subtree below that key is skipped.
    pub(crate) fn walk<'a>(&'a self, key: &str, visit: &mut impl FnMut(&'a str) -> bool) {
        for child in self.children(key) {
            if visit(child) {
                self.walk(child, visit);
            }
        }
    }
}

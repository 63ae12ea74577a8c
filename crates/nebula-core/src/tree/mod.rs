//! TreeView state.
//!
//! A tree is a forest of [`TreeNode`]s. Lookups by key go through a
//! [`TreeIndex`] built once per data change; the reducers take the current
//! key set and return a new one.
//!
//! - [`toggle_check`], [`conduct_checked`], [`half_checked`] - check cascade
//! - [`toggle_select`] - single/multiple selection
//! - [`toggle_expand`], [`expand_all`], [`expand_to`], [`visible_rows`] - expansion
//! - [`search`], [`filter_tree_by`] - filtering
//! - [`navigate`] - keyboard focus movement over visible rows

mod check;
mod expand;
mod index;
mod nav;
mod node;
mod search;
mod select;

use std::collections::BTreeSet;

pub use check::{CheckMode, conduct_checked, half_checked, toggle_check};
pub use expand::{TreeRow, expand_all, expand_to, toggle_expand, visible_rows};
pub use index::TreeIndex;
pub use nav::{NavKey, NavOutcome, navigate};
pub use node::TreeNode;
pub use search::{SearchResult, filter_tree_by, search, title_matches};
pub use select::{SelectionMode, toggle_select};

/// Set of node keys (selected, expanded or checked).
pub type KeySet = BTreeSet<String>;

/// Builds a [`KeySet`] from anything string-like.
pub fn key_set<I, S>(keys: I) -> KeySet
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    keys.into_iter().map(Into::into).collect()
}

#[cfg(test)]
pub(crate) mod fixtures {
    use super::TreeNode;

    /// `A > [B, C]`
    pub fn abc() -> Vec<TreeNode> {
        vec![TreeNode::new("A", "Alpha").with_children(vec![
            TreeNode::new("B", "Bravo"),
            TreeNode::new("C", "Charlie"),
        ])]
    }

    /// Two roots, three levels, one disabled leaf.
    ///
    /// ```text
    /// src
    /// ├── components
    /// │   ├── button.rs
    /// │   ├── tree.rs
    /// │   └── legacy.rs (disabled)
    /// └── main.rs
    /// docs
    /// └── intro.md
    /// ```
    pub fn project() -> Vec<TreeNode> {
        vec![
            TreeNode::new("src", "src").with_children(vec![
                TreeNode::new("components", "components").with_children(vec![
                    TreeNode::new("button", "button.rs"),
                    TreeNode::new("tree", "tree.rs"),
                    TreeNode::new("legacy", "legacy.rs").disabled(),
                ]),
                TreeNode::new("main", "main.rs"),
            ]),
            TreeNode::new("docs", "docs")
                .with_children(vec![TreeNode::new("intro", "intro.md")]),
        ]
    }
}

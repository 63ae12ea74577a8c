//! Tree filtering.

use super::{KeySet, TreeNode};

/// Output of [`search`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchResult {
    /// The pruned forest.
    pub nodes: Vec<TreeNode>,
    /// Keys whose node matched the predicate directly.
    pub matched: KeySet,
    /// Keys of kept nodes that have a matching descendant.
    pub expanded: KeySet,
}

/// Case-insensitive substring match on the node title.
pub fn title_matches(node: &TreeNode, query: &str) -> bool {
    title_predicate(query)(node)
}

/// Builds the title predicate once for a query, lowercasing the needle up front.
fn title_predicate(query: &str) -> impl Fn(&TreeNode) -> bool + use<> {
    let needle = query.to_lowercase();
    move |node: &TreeNode| node.title.to_lowercase().contains(&needle)
}

/// Filters the forest with the default title predicate.
///
/// A blank query returns the forest unchanged with nothing matched.
pub fn search(nodes: &[TreeNode], query: &str) -> SearchResult {
    let query = query.trim();
    if query.is_empty() {
        return SearchResult {
            nodes: nodes.to_vec(),
            ..Default::default()
        };
    }
    filter_tree_by(nodes, title_predicate(query))
}

/// Filters the forest, keeping nodes that match or lead to a match.
///
/// Children of a kept node are pruned to those that match or lead to a match.
/// When a node matches but none of its children do, its original children
/// are kept so the whole matched subtree stays browsable.
pub fn filter_tree_by<F>(nodes: &[TreeNode], predicate: F) -> SearchResult
where
    F: Fn(&TreeNode) -> bool,
{
    let mut result = SearchResult::default();
    result.nodes = filter_level(nodes, &predicate, &mut result.matched, &mut result.expanded);
    result
}

fn filter_level<F>(
    nodes: &[TreeNode],
    predicate: &F,
    matched: &mut KeySet,
    expanded: &mut KeySet,
) -> Vec<TreeNode>
where
    F: Fn(&TreeNode) -> bool,
{
    let mut kept = Vec::new();
    for node in nodes {
        let is_match = predicate(node);
        let children = filter_level(&node.children, predicate, matched, expanded);

        if is_match {
            matched.insert(node.key.clone());
        }
        if !children.is_empty() {
            expanded.insert(node.key.clone());
        }

        match (is_match, children.is_empty()) {
            (false, true) => {}
            (true, true) => kept.push(node.clone()),
            (_, false) => kept.push(TreeNode {
                children,
                ..node.clone()
            }),
        }
    }
    kept
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tree::fixtures;

    fn keys_of(nodes: &[TreeNode]) -> Vec<String> {
        let mut out = Vec::new();
        for node in nodes {
            out.push(node.key.clone());
            out.extend(keys_of(&node.children));
        }
        out
    }

    #[test]
    fn test_leaf_match_keeps_ancestors() {
        let result = search(&fixtures::project(), "TREE.rs");

        assert_eq!(keys_of(&result.nodes), vec!["src", "components", "tree"]);
        assert_eq!(result.matched, KeySet::from(["tree".to_string()]));
        assert_eq!(
            result.expanded,
            KeySet::from(["src".to_string(), "components".to_string()])
        );
    }

    #[test]
    fn test_multiple_matches_across_roots() {
        let result = search(&fixtures::project(), ".md");
        assert_eq!(keys_of(&result.nodes), vec!["docs", "intro"]);

        let result = search(&fixtures::project(), "n");
        // "button.rs", "main.rs", "intro.md" and "components" contain "n".
        assert_eq!(
            keys_of(&result.nodes),
            vec!["src", "components", "button", "main", "docs", "intro"]
        );
    }

    #[test]
    fn test_matching_parent_without_matching_children_keeps_subtree() {
        let result = search(&fixtures::project(), "components");
        assert_eq!(
            keys_of(&result.nodes),
            vec!["src", "components", "button", "tree", "legacy"]
        );
        assert!(!result.expanded.contains("components"));
    }

    #[test]
    fn test_blank_query_returns_forest() {
        let nodes = fixtures::project();
        let result = search(&nodes, "   ");
        assert_eq!(result.nodes, nodes);
        assert!(result.matched.is_empty());
    }

    #[test]
    fn test_no_match() {
        let result = search(&fixtures::project(), "zzz");
        assert!(result.nodes.is_empty());
        assert!(result.expanded.is_empty());
    }

    #[test]
    fn test_custom_predicate() {
        let result = filter_tree_by(&fixtures::project(), |n| n.disabled);
        assert_eq!(keys_of(&result.nodes), vec!["src", "components", "legacy"]);
    }

    #[test]
    fn test_title_matches_ignores_case() {
        let node = TreeNode::new("k", "Hello World");
        assert!(title_matches(&node, "WORLD"));
        assert!(!title_matches(&node, "planet"));
    }

    #[test]
    fn test_search_agrees_with_title_matches() {
        fn flatten<'a>(nodes: &'a [TreeNode], out: &mut Vec<&'a TreeNode>) {
            for node in nodes {
                out.push(node);
                flatten(&node.children, out);
            }
        }
        let nodes = fixtures::project();
        let mut all = Vec::new();
        flatten(&nodes, &mut all);

        for query in ["BUT", "Docs", "ma"] {
            let result = search(&nodes, query);
            for node in &all {
                assert_eq!(
                    result.matched.contains(&node.key),
                    title_matches(node, query),
                    "{} / {}",
                    node.key,
                    query
                );
            }
        }
    }
}

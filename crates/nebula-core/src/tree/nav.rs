//! Keyboard navigation over visible tree rows.

use super::TreeRow;

/// Keys the tree handles while it has focus.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavKey {
    Up,
    Down,
    Left,
    Right,
    Home,
    End,
    Activate,
}

impl NavKey {
    /// Maps a `KeyboardEvent.key` value.
    pub fn from_key(key: &str) -> Option<Self> {
        match key {
            "ArrowUp" => Some(Self::Up),
            "ArrowDown" => Some(Self::Down),
            "ArrowLeft" => Some(Self::Left),
            "ArrowRight" => Some(Self::Right),
            "Home" => Some(Self::Home),
            "End" => Some(Self::End),
            "Enter" | " " => Some(Self::Activate),
            _ => None,
        }
    }
}

/// What the component should do in response to a key.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NavOutcome {
    /// Move focus to the row with this key.
    Focus(String),
    /// Expand the focused row.
    Expand(String),
    /// Collapse the focused row.
    Collapse(String),
    /// Select (or check) the focused row.
    Activate(String),
    /// Nothing to do.
    None,
}

/// Resolves a navigation key against the visible rows.
///
/// With no focused row, any movement focuses the first row.
pub fn navigate(rows: &[TreeRow], focused: Option<&str>, key: NavKey) -> NavOutcome {
    let Some(first) = rows.first() else {
        return NavOutcome::None;
    };
    let position = focused.and_then(|f| rows.iter().position(|r| r.key == f));
    let Some(pos) = position else {
        return NavOutcome::Focus(first.key.clone());
    };
    let row = &rows[pos];

    match key {
        NavKey::Down => rows
            .get(pos + 1)
            .map_or(NavOutcome::None, |r| NavOutcome::Focus(r.key.clone())),
        NavKey::Up => pos
            .checked_sub(1)
            .map_or(NavOutcome::None, |p| NavOutcome::Focus(rows[p].key.clone())),
        NavKey::Home => NavOutcome::Focus(first.key.clone()),
        NavKey::End => rows
            .last()
            .map_or(NavOutcome::None, |r| NavOutcome::Focus(r.key.clone())),
        NavKey::Right if row.has_children && !row.expanded => NavOutcome::Expand(row.key.clone()),
        NavKey::Right if row.expanded => rows
            .get(pos + 1)
            .map_or(NavOutcome::None, |r| NavOutcome::Focus(r.key.clone())),
        NavKey::Right => NavOutcome::None,
        NavKey::Left if row.expanded => NavOutcome::Collapse(row.key.clone()),
        NavKey::Left => row
            .parent
            .clone()
            .map_or(NavOutcome::None, NavOutcome::Focus),
        NavKey::Activate if row.disabled => NavOutcome::None,
        NavKey::Activate => NavOutcome::Activate(row.key.clone()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tree::{KeySet, fixtures, visible_rows};

    fn rows(expanded: &[&str]) -> Vec<TreeRow> {
        let expanded: KeySet = expanded.iter().map(|s| s.to_string()).collect();
        visible_rows(&fixtures::project(), &expanded)
    }

    #[test]
    fn test_first_key_focuses_first_row() {
        let rows = rows(&[]);
        assert_eq!(
            navigate(&rows, None, NavKey::Down),
            NavOutcome::Focus("src".to_string())
        );
        assert_eq!(navigate(&[], None, NavKey::Down), NavOutcome::None);
    }

    #[test]
    fn test_up_down_bounds() {
        let rows = rows(&["src"]);
        assert_eq!(
            navigate(&rows, Some("src"), NavKey::Down),
            NavOutcome::Focus("components".to_string())
        );
        assert_eq!(navigate(&rows, Some("src"), NavKey::Up), NavOutcome::None);
        assert_eq!(navigate(&rows, Some("docs"), NavKey::Down), NavOutcome::None);
        assert_eq!(
            navigate(&rows, Some("main"), NavKey::End),
            NavOutcome::Focus("docs".to_string())
        );
        assert_eq!(
            navigate(&rows, Some("main"), NavKey::Home),
            NavOutcome::Focus("src".to_string())
        );
    }

    #[test]
    fn test_right_expands_then_enters() {
        let collapsed = rows(&[]);
        assert_eq!(
            navigate(&collapsed, Some("src"), NavKey::Right),
            NavOutcome::Expand("src".to_string())
        );

        let open = rows(&["src"]);
        assert_eq!(
            navigate(&open, Some("src"), NavKey::Right),
            NavOutcome::Focus("components".to_string())
        );
        assert_eq!(navigate(&open, Some("main"), NavKey::Right), NavOutcome::None);
    }

    #[test]
    fn test_left_collapses_then_climbs() {
        let open = rows(&["src", "components"]);
        assert_eq!(
            navigate(&open, Some("components"), NavKey::Left),
            NavOutcome::Collapse("components".to_string())
        );
        assert_eq!(
            navigate(&open, Some("tree"), NavKey::Left),
            NavOutcome::Focus("components".to_string())
        );
        assert_eq!(navigate(&open, Some("docs"), NavKey::Left), NavOutcome::None);
    }

    #[test]
    fn test_activate_skips_disabled() {
        let open = rows(&["src", "components"]);
        assert_eq!(
            navigate(&open, Some("button"), NavKey::Activate),
            NavOutcome::Activate("button".to_string())
        );
        assert_eq!(
            navigate(&open, Some("legacy"), NavKey::Activate),
            NavOutcome::None
        );
    }

    #[test]
    fn test_from_key() {
        assert_eq!(NavKey::from_key("ArrowLeft"), Some(NavKey::Left));
        assert_eq!(NavKey::from_key(" "), Some(NavKey::Activate));
        assert_eq!(NavKey::from_key("a"), None);
    }
}

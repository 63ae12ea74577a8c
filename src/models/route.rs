//! Hash-based routing for the showcase.
//!
//! URL format:
//! - `#/` - home
//! - `#/components/<slug>` - component demo page
//! - `#/docs/<slug>` - markdown document

use crate::utils::dom;

/// Component demo pages, in sidebar order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ComponentPage {
    Button,
    Avatar,
    Tabs,
    TreeView,
    Transfer,
    Toast,
}

impl ComponentPage {
    pub const ALL: [ComponentPage; 6] = [
        Self::Button,
        Self::Avatar,
        Self::Tabs,
        Self::TreeView,
        Self::Transfer,
        Self::Toast,
    ];

    pub fn slug(self) -> &'static str {
        match self {
            Self::Button => "button",
            Self::Avatar => "avatar",
            Self::Tabs => "tabs",
            Self::TreeView => "tree-view",
            Self::Transfer => "transfer",
            Self::Toast => "toast",
        }
    }

    pub fn title(self) -> &'static str {
        match self {
            Self::Button => "Button",
            Self::Avatar => "Avatar",
            Self::Tabs => "Tabs",
            Self::TreeView => "TreeView",
            Self::Transfer => "Transfer",
            Self::Toast => "Toast",
        }
    }

    pub fn from_slug(slug: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|p| p.slug() == slug)
    }
}

/// Application routes.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum AppRoute {
    /// `#/` or empty hash.
    Home,
    /// `#/components/<slug>`
    Component(ComponentPage),
    /// `#/docs/<slug>`; the slug is resolved against the manifest later.
    Doc(String),
    /// Anything else, with the unmatched path.
    NotFound(String),
}

impl AppRoute {
    /// Parse a URL hash into a route.
    pub fn from_hash(hash: &str) -> Self {
        let path = hash
            .trim_start_matches('#')
            .trim_start_matches('/')
            .trim_end_matches('/');

        if path.is_empty() {
            return Self::Home;
        }

        match path.split_once('/') {
            Some(("components", slug)) => ComponentPage::from_slug(slug)
                .map(Self::Component)
                .unwrap_or_else(|| Self::NotFound(path.to_string())),
            Some(("docs", slug)) if !slug.is_empty() && !slug.contains('/') => {
                Self::Doc(slug.to_string())
            }
            _ => Self::NotFound(path.to_string()),
        }
    }

    /// Convert the route to a URL hash.
    pub fn to_hash(&self) -> String {
        match self {
            Self::Home => "#/".to_string(),
            Self::Component(page) => format!("#/components/{}", page.slug()),
            Self::Doc(slug) => format!("#/docs/{}", slug),
            Self::NotFound(path) => format!("#/{}", path),
        }
    }

    /// Get the current route from the browser URL.
    pub fn current() -> Self {
        Self::from_hash(&dom::get_hash())
    }

    /// Navigate to this route (adds a history entry and fires `hashchange`).
    pub fn push(&self) {
        dom::set_hash(&self.to_hash());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_route_parsing() {
        assert_eq!(AppRoute::from_hash(""), AppRoute::Home);
        assert_eq!(AppRoute::from_hash("#"), AppRoute::Home);
        assert_eq!(AppRoute::from_hash("#/"), AppRoute::Home);
        assert_eq!(
            AppRoute::from_hash("#/components/tree-view"),
            AppRoute::Component(ComponentPage::TreeView)
        );
        assert_eq!(
            AppRoute::from_hash("#/components/transfer/"),
            AppRoute::Component(ComponentPage::Transfer)
        );
        assert_eq!(
            AppRoute::from_hash("#/docs/getting-started"),
            AppRoute::Doc("getting-started".to_string())
        );
    }

    #[test]
    fn test_unknown_routes() {
        assert_eq!(
            AppRoute::from_hash("#/components/slider"),
            AppRoute::NotFound("components/slider".to_string())
        );
        assert_eq!(
            AppRoute::from_hash("#/docs/a/b"),
            AppRoute::NotFound("docs/a/b".to_string())
        );
        assert_eq!(
            AppRoute::from_hash("#/pricing"),
            AppRoute::NotFound("pricing".to_string())
        );
    }

    #[test]
    fn test_route_to_hash() {
        assert_eq!(AppRoute::Home.to_hash(), "#/");
        for page in ComponentPage::ALL {
            let route = AppRoute::Component(page);
            assert_eq!(AppRoute::from_hash(&route.to_hash()), route);
        }
        assert_eq!(
            AppRoute::Doc("theming".to_string()).to_hash(),
            "#/docs/theming"
        );
    }
}

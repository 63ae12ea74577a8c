//! Documentation manifest.
//!
//! The manifest is a TOML file bundled at compile time:
//!
//! ```toml
//! [[docs]]
//! slug = "getting-started"
//! title = "Getting started"
//! path = "getting-started.md"
//! ```

use serde::Deserialize;

use crate::error::ManifestError;

/// A single markdown document.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct DocEntry {
    pub slug: String,
    pub title: String,
    /// Path relative to the docs base URL.
    pub path: String,
    #[serde(default)]
    pub summary: Option<String>,
}

/// Ordered list of documents.
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
pub struct DocsManifest {
    #[serde(default)]
    pub docs: Vec<DocEntry>,
}

impl DocsManifest {
    pub fn parse(source: &str) -> Result<Self, ManifestError> {
        let manifest: Self =
            toml::from_str(source).map_err(|e| ManifestError::Parse(e.to_string()))?;

        let mut seen = std::collections::HashSet::new();
        for doc in &manifest.docs {
            if !seen.insert(doc.slug.as_str()) {
                return Err(ManifestError::DuplicateSlug(doc.slug.clone()));
            }
        }
        Ok(manifest)
    }

    pub fn find(&self, slug: &str) -> Option<&DocEntry> {
        self.docs.iter().find(|d| d.slug == slug)
    }

    /// Full URL of a document under `base_url`.
    pub fn url_for(entry: &DocEntry, base_url: &str) -> String {
        format!(
            "{}/{}",
            base_url.trim_end_matches('/'),
            entry.path.trim_start_matches('/')
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = r#"
        [[docs]]
        slug = "intro"
        title = "Introduction"
        path = "intro.md"
        summary = "Start here"

        [[docs]]
        slug = "theming"
        title = "Theming"
        path = "/guides/theming.md"
    "#;

    #[test]
    fn test_parse_and_find() {
        let manifest = DocsManifest::parse(SAMPLE).unwrap();

        assert_eq!(manifest.docs.len(), 2);
        assert_eq!(manifest.find("intro").unwrap().title, "Introduction");
        assert_eq!(manifest.find("theming").unwrap().summary, None);
        assert!(manifest.find("missing").is_none());
    }

    #[test]
    fn test_url_for() {
        let manifest = DocsManifest::parse(SAMPLE).unwrap();
        let theming = manifest.find("theming").unwrap();

        assert_eq!(
            DocsManifest::url_for(theming, "docs/"),
            "docs/guides/theming.md"
        );
    }

    #[test]
    fn test_duplicate_slug() {
        let source = r#"
            [[docs]]
            slug = "a"
            title = "A"
            path = "a.md"

            [[docs]]
            slug = "a"
            title = "Again"
            path = "b.md"
        "#;
        assert_eq!(
            DocsManifest::parse(source),
            Err(ManifestError::DuplicateSlug("a".to_string()))
        );
    }

    #[test]
    fn test_invalid_toml() {
        assert!(matches!(
            DocsManifest::parse("docs = 3"),
            Err(ManifestError::Parse(_))
        ));
    }

    #[test]
    fn test_bundled_manifest_parses() {
        let manifest = DocsManifest::parse(crate::config::DOCS_MANIFEST).unwrap();
        assert!(!manifest.docs.is_empty());
    }
}

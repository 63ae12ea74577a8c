use leptos::prelude::*;

use super::PageHeader;
use crate::components::markdown::MarkdownView;
use crate::config::DOCS_BASE_URL;
use crate::models::{DocEntry, DocsManifest};

/// A markdown guide listed in the docs manifest.
#[component]
pub fn DocPage(entry: DocEntry) -> impl IntoView {
    let url = DocsManifest::url_for(&entry, DOCS_BASE_URL);

    view! {
        <PageHeader title=entry.title lead=entry.summary.unwrap_or_default() />
        <MarkdownView url=url />
    }
}

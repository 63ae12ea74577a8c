//! Application router component.
//!
//! Handles hash routing with native `hashchange` events, so the showcase can
//! be served from any static host without server rewrites.
//!
//! # Architecture
//!
//! - **URL hash is the source of truth**: the route is derived from `#/path`
//! - **Layout never re-renders on navigation**: only the content slot swaps
//! - **hashchange events**: browser back/forward buttons work automatically

use leptos::prelude::*;
#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::Closure;

use crate::app::AppContext;
use crate::components::layout::Layout;
use crate::components::toast::ToastViewport;
use crate::config::{APP_NAME, DOCS_MANIFEST};
use crate::models::{AppRoute, ComponentPage, DocsManifest};
use crate::pages::{
    AvatarPage, ButtonPage, DocPage, HomePage, NotFoundPage, TabsPage, ToastPage, TransferPage,
    TreePage,
};
use crate::utils::dom;

/// Parses the bundled docs manifest. A broken manifest only hides the guides.
fn load_manifest() -> DocsManifest {
    DocsManifest::parse(DOCS_MANIFEST).unwrap_or_else(|e| {
        dom::error(&format!("docs manifest ignored: {}", e));
        DocsManifest::default()
    })
}

/// Document title for a route.
fn page_title(route: &AppRoute, manifest: &DocsManifest) -> String {
    let page = match route {
        AppRoute::Home => return APP_NAME.to_string(),
        AppRoute::Component(page) => page.title().to_string(),
        AppRoute::Doc(slug) => manifest
            .find(slug)
            .map(|d| d.title.clone())
            .unwrap_or_else(|| "Not found".to_string()),
        AppRoute::NotFound(_) => "Not found".to_string(),
    };
    format!("{} | {}", page, APP_NAME)
}

/// Main application router.
///
/// - `#/` → home
/// - `#/components/<slug>` → component demo
/// - `#/docs/<slug>` → markdown guide
/// - anything else → not found
#[component]
pub fn AppRouter(ctx: AppContext) -> impl IntoView {
    let route = RwSignal::new(AppRoute::current());

    // Set up hashchange event listener (runs once on mount)
    #[cfg(target_arch = "wasm32")]
    {
        use wasm_bindgen::JsCast;
        let closure = Closure::wrap(Box::new(move || {
            route.set(AppRoute::current());
        }) as Box<dyn Fn()>);

        if let Some(window) = web_sys::window() {
            let _ = window
                .add_event_listener_with_callback("hashchange", closure.as_ref().unchecked_ref());
        }

        // Keep the closure alive for the lifetime of the app
        closure.forget();
    }

    let manifest = StoredValue::new(load_manifest());
    let route_memo = Memo::new(move |_| route.get());

    Effect::new(move |_| {
        let title = route_memo.with(|r| manifest.with_value(|m| page_title(r, m)));
        dom::set_title(&title);
    });

    let content = move || match route_memo.get() {
        AppRoute::Home => view! { <HomePage /> }.into_any(),
        AppRoute::Component(page) => match page {
            ComponentPage::Button => view! { <ButtonPage ctx=ctx /> }.into_any(),
            ComponentPage::Avatar => view! { <AvatarPage /> }.into_any(),
            ComponentPage::Tabs => view! { <TabsPage ctx=ctx /> }.into_any(),
            ComponentPage::TreeView => view! { <TreePage ctx=ctx /> }.into_any(),
            ComponentPage::Transfer => view! { <TransferPage ctx=ctx /> }.into_any(),
            ComponentPage::Toast => view! { <ToastPage ctx=ctx /> }.into_any(),
        },
        AppRoute::Doc(slug) => match manifest.with_value(|m| m.find(&slug).cloned()) {
            Some(entry) => view! { <DocPage entry=entry /> }.into_any(),
            None => view! { <NotFoundPage path=format!("docs/{}", slug) /> }.into_any(),
        },
        AppRoute::NotFound(path) => view! { <NotFoundPage path=path /> }.into_any(),
    };

    view! {
        <Layout ctx=ctx route=route_memo docs=manifest.get_value().docs>
            {content}
        </Layout>
        <ToastViewport ctx=ctx />
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::DocEntry;

    fn manifest() -> DocsManifest {
        DocsManifest {
            docs: vec![DocEntry {
                slug: "theming".to_string(),
                title: "Theming".to_string(),
                path: "theming.md".to_string(),
                summary: None,
            }],
        }
    }

    #[test]
    fn test_page_titles() {
        let m = manifest();
        assert_eq!(page_title(&AppRoute::Home, &m), "Nebula");
        assert_eq!(
            page_title(&AppRoute::Component(ComponentPage::TreeView), &m),
            "TreeView | Nebula"
        );
        assert_eq!(page_title(&AppRoute::Doc("theming".into()), &m), "Theming | Nebula");
        assert_eq!(page_title(&AppRoute::Doc("nope".into()), &m), "Not found | Nebula");
    }
}

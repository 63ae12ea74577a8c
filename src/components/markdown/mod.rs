//! Markdown document viewer.
//!
//! Fetches a document, renders it with comrak and sanitizes it with ammonia
//! before injecting it. Fetch failures render inline.

use leptos::prelude::*;
use wasm_bindgen_futures::spawn_local;

use crate::utils::{dom, fetch_text, markdown_to_html};

stylance::import_crate_style!(css, "src/components/markdown/markdown.module.css");

#[derive(Clone, Debug, PartialEq, Eq)]
enum DocState {
    Loading,
    Ready(String),
    Failed(String),
}

/// Renders the markdown document at `url`, refetching whenever it changes.
#[component]
pub fn MarkdownView(#[prop(into)] url: Signal<String>) -> impl IntoView {
    let state = RwSignal::new(DocState::Loading);

    Effect::new(move |_| {
        let url = url.get();
        state.set(DocState::Loading);
        spawn_local(async move {
            let next = match fetch_text(&url).await {
                Ok(md) => DocState::Ready(markdown_to_html(&md)),
                Err(e) => {
                    dom::warn(&format!("failed to load {}: {}", url, e));
                    DocState::Failed(e.to_string())
                }
            };
            // The view may be gone by the time the fetch settles.
            let _ = state.try_set(next);
        });
    });

    view! {
        <div class=css::markdownView aria-busy=move || (state.get() == DocState::Loading).to_string()>
            {move || match state.get() {
                DocState::Loading => view! {
                    <p class=css::loading>"Loading..."</p>
                }.into_any(),
                DocState::Ready(html) => view! {
                    <article class=css::markdown inner_html=html />
                }.into_any(),
                DocState::Failed(err) => view! {
                    <div class=css::error role="alert">
                        <p class=css::errorTitle>"Error loading content:"</p>
                        <p>{err}</p>
                    </div>
                }.into_any(),
            }}
        </div>
    }
}

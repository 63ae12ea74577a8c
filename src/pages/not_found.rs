use leptos::prelude::*;

use super::css;
use crate::models::AppRoute;

#[component]
pub fn NotFoundPage(#[prop(into)] path: String) -> impl IntoView {
    view! {
        <div class=css::notFound>
            <h1>"Page not found"</h1>
            <p>"Nothing lives at " <code>{format!("/{}", path)}</code> "."</p>
            <a href=AppRoute::Home.to_hash()>"Back to the overview"</a>
        </div>
    }
}

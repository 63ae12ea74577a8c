//! Showcase pages, one per route.
//!
//! Pages compose library components into demos; none of them hold state
//! beyond what the demo itself needs.

mod avatar;
mod button;
mod docs;
mod home;
mod not_found;
mod tabs;
mod toast;
mod transfer;
mod tree;

use leptos::prelude::*;

pub use avatar::AvatarPage;
pub use button::ButtonPage;
pub use docs::DocPage;
pub use home::HomePage;
pub use not_found::NotFoundPage;
pub use tabs::TabsPage;
pub use toast::ToastPage;
pub use transfer::TransferPage;
pub use tree::TreePage;

stylance::import_crate_style!(css, "src/pages/pages.module.css");

/// Title and lead paragraph at the top of a page.
#[component]
fn PageHeader(#[prop(into)] title: String, #[prop(into)] lead: String) -> impl IntoView {
    view! {
        <header class=css::pageHeader>
            <h1>{title}</h1>
            <p class=css::lead>{lead}</p>
        </header>
    }
}

/// A titled demo with an optional caption.
#[component]
fn Demo(
    #[prop(into)] title: String,
    #[prop(optional, into)] caption: Option<String>,
    children: Children,
) -> impl IntoView {
    view! {
        <section class=css::demo>
            <h2>{title}</h2>
            {caption.map(|c| view! { <p class=css::caption>{c}</p> })}
            <div class=css::stage>{children()}</div>
        </section>
    }
}

/// Read-only readout of demo state, e.g. the current checked keys.
#[component]
fn Readout(#[prop(into)] label: String, #[prop(into)] value: Signal<String>) -> impl IntoView {
    view! {
        <p class=css::readout>
            <span class=css::readoutLabel>{label}</span>
            <code>{value}</code>
        </p>
    }
}

/// Formats keys as `[a, b]` for [`Readout`].
fn format_keys<'a>(keys: impl IntoIterator<Item = &'a String>) -> String {
    let joined = keys
        .into_iter()
        .map(String::as_str)
        .collect::<Vec<_>>()
        .join(", ");
    format!("[{}]", joined)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_keys() {
        let keys = vec!["a".to_string(), "b".to_string()];
        assert_eq!(format_keys(&keys), "[a, b]");
        assert_eq!(format_keys(&Vec::<String>::new()), "[]");
    }
}

//! Page chrome: header with theme toggle, sidebar navigation and content
//! area.

use leptos::prelude::*;

use crate::app::AppContext;
use crate::components::theme_toggle::ThemeToggle;
use crate::config::{APP_NAME, APP_VERSION};
use crate::models::{AppRoute, ComponentPage, DocEntry};

stylance::import_crate_style!(css, "src/components/layout/layout.module.css");

#[component]
pub fn Layout(
    ctx: AppContext,
    route: Memo<AppRoute>,
    docs: Vec<DocEntry>,
    children: Children,
) -> impl IntoView {
    view! {
        <div class=css::layout>
            <header class=css::header>
                <a class=css::brand href=AppRoute::Home.to_hash()>
                    <span class=css::logo aria-hidden="true">"◐"</span>
                    <span>{APP_NAME}</span>
                    <span class=css::version>{format!("v{}", APP_VERSION)}</span>
                </a>
                <ThemeToggle ctx=ctx />
            </header>
            <Sidebar route=route docs=docs />
            <main class=css::content id="main">
                {children()}
            </main>
        </div>
    }
}

#[component]
fn Sidebar(route: Memo<AppRoute>, docs: Vec<DocEntry>) -> impl IntoView {
    let components = ComponentPage::ALL
        .into_iter()
        .map(|page| {
            let target = AppRoute::Component(page);
            view! { <NavLink route=route target=target label=page.title().to_string() /> }
        })
        .collect_view();

    let has_docs = !docs.is_empty();
    let docs = docs
        .into_iter()
        .map(|doc| {
            let target = AppRoute::Doc(doc.slug);
            view! { <NavLink route=route target=target label=doc.title /> }
        })
        .collect_view();

    view! {
        <nav class=css::sidebar aria-label="Library">
            <p class=css::section>"Components"</p>
            <ul class=css::links>{components}</ul>
            {has_docs.then(|| view! {
                <p class=css::section>"Guides"</p>
                <ul class=css::links>{docs}</ul>
            })}
        </nav>
    }
}

#[component]
fn NavLink(route: Memo<AppRoute>, target: AppRoute, label: String) -> impl IntoView {
    let href = target.to_hash();
    let target = StoredValue::new(target);
    let is_current = move || target.with_value(|t| route.with(|r| r == t));

    view! {
        <li>
            <a
                href=href
                class=move || if is_current() {
                    format!("{} {}", css::link, css::current)
                } else {
                    css::link.to_string()
                }
                aria-current=move || is_current().then_some("page")
            >
                {label}
            </a>
        </li>
    }
}

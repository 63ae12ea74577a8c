use leptos::{ev, prelude::*};

use super::{PageHeader, css};
use crate::components::button::{Button, ButtonVariant};
use crate::config::{APP_NAME, APP_TAGLINE};
use crate::models::{AppRoute, ComponentPage};

fn blurb(page: ComponentPage) -> &'static str {
    match page {
        ComponentPage::Button => "Variants, sizes and a loading state.",
        ComponentPage::Avatar => "Images with an initials fallback.",
        ComponentPage::Tabs => "Compound tabs with arrow-key navigation.",
        ComponentPage::TreeView => "Check cascade, selection and search over nested data.",
        ComponentPage::Transfer => "Move items between two lists.",
        ComponentPage::Toast => "Transient notifications with live regions.",
    }
}

#[component]
pub fn HomePage() -> impl IntoView {
    view! {
        <PageHeader title=APP_NAME lead=APP_TAGLINE />
        <div class=css::row>
            <Button on_click=move |_: ev::MouseEvent| AppRoute::Doc("getting-started".to_string()).push()>
                "Get started"
            </Button>
            <Button
                variant=ButtonVariant::Outline
                on_click=move |_: ev::MouseEvent| AppRoute::Component(ComponentPage::TreeView).push()
            >
                "See the TreeView"
            </Button>
        </div>
        <h2>"Components"</h2>
        <div class=css::cards>
            {ComponentPage::ALL
                .into_iter()
                .map(|page| view! {
                    <a class=css::card href=AppRoute::Component(page).to_hash()>
                        <h3>{page.title()}</h3>
                        <p>{blurb(page)}</p>
                    </a>
                })
                .collect_view()}
        </div>
    }
}

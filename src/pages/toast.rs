use leptos::{ev, prelude::*};

use super::{Demo, PageHeader, css};
use crate::app::AppContext;
use crate::components::button::{Button, ButtonVariant};
use crate::config::toast;

#[component]
pub fn ToastPage(ctx: AppContext) -> impl IntoView {
    let toasts = ctx.toasts;

    view! {
        <PageHeader
            title="Toast"
            lead=format!(
                "Short notices that dismiss themselves after {} seconds. At most {} are shown; the oldest goes first.",
                toast::DURATION_MS / 1000,
                toast::MAX_VISIBLE,
            )
        />
        <Demo title="Kinds" caption="Errors are announced assertively, the rest politely.">
            <div class=css::row>
                <Button variant=ButtonVariant::Secondary on_click=move |_: ev::MouseEvent| { toasts.info("Sync started"); }>
                    "Info"
                </Button>
                <Button variant=ButtonVariant::Secondary on_click=move |_: ev::MouseEvent| { toasts.success("Changes saved"); }>
                    "Success"
                </Button>
                <Button variant=ButtonVariant::Secondary on_click=move |_: ev::MouseEvent| { toasts.warning("Storage almost full"); }>
                    "Warning"
                </Button>
                <Button variant=ButtonVariant::Danger on_click=move |_: ev::MouseEvent| { toasts.error("Upload failed"); }>
                    "Error"
                </Button>
                <Button variant=ButtonVariant::Ghost on_click=move |_: ev::MouseEvent| toasts.clear()>
                    "Clear all"
                </Button>
            </div>
        </Demo>
    }
}

//! Toast viewport.
//!
//! Renders the [`ToastStore`](crate::app::ToastStore) queue in a fixed
//! corner. Each toast carries its own live-region role so errors interrupt
//! screen readers and everything else is announced politely.

use leptos::prelude::*;
use leptos_icons::Icon;

use crate::app::AppContext;
use crate::components::icons as ic;
use crate::models::{Toast, ToastKind};

stylance::import_crate_style!(css, "src/components/toast/toast.module.css");

fn kind_class(kind: ToastKind) -> &'static str {
    match kind {
        ToastKind::Info => css::info,
        ToastKind::Success => css::success,
        ToastKind::Warning => css::warning,
        ToastKind::Error => css::error,
    }
}

fn kind_icon(kind: ToastKind) -> icondata::Icon {
    match kind {
        ToastKind::Info => ic::INFO,
        ToastKind::Success => ic::SUCCESS,
        ToastKind::Warning => ic::WARNING,
        ToastKind::Error => ic::ERROR,
    }
}

/// Fixed-position stack of active toasts, newest last.
#[component]
pub fn ToastViewport(ctx: AppContext) -> impl IntoView {
    view! {
        <div class=css::viewport aria-label="Notifications">
            <For
                each=move || ctx.toasts.items()
                key=|toast| toast.id
                children=move |toast| view! { <ToastCard ctx=ctx toast=toast /> }
            />
        </div>
    }
}

#[component]
fn ToastCard(ctx: AppContext, toast: Toast) -> impl IntoView {
    let id = toast.id;

    view! {
        <div
            class=format!("{} {}", css::toast, kind_class(toast.kind))
            role=toast.kind.role()
            aria-live=toast.kind.aria_live()
            aria-atomic="true"
        >
            <span class=css::icon aria-hidden="true"><Icon icon=kind_icon(toast.kind) /></span>
            <p class=css::message>{toast.message}</p>
            <button
                type="button"
                class=css::close
                aria-label="Dismiss notification"
                on:click=move |_| ctx.toasts.dismiss(id)
            >
                <Icon icon=ic::CLOSE />
            </button>
        </div>
    }
}

//! Light/dark theme switch.

use leptos::prelude::*;
use leptos_icons::Icon;

use crate::app::AppContext;
use crate::components::icons as ic;
use crate::models::Theme;

stylance::import_crate_style!(css, "src/components/theme_toggle/theme_toggle.module.css");

#[component]
pub fn ThemeToggle(ctx: AppContext) -> impl IntoView {
    let is_dark = move || ctx.theme.get() == Theme::Dark;
    let label = move || {
        if is_dark() {
            "Switch to light theme"
        } else {
            "Switch to dark theme"
        }
    };

    view! {
        <button
            type="button"
            class=css::toggle
            aria-label=label
            title=label
            aria-pressed=move || if is_dark() { "true" } else { "false" }
            on:click=move |_| ctx.theme.toggle()
        >
            {move || if is_dark() {
                view! { <Icon icon=ic::SUN /> }
            } else {
                view! { <Icon icon=ic::MOON /> }
            }}
        </button>
    }
}

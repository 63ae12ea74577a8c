use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use wasm_bindgen_futures::spawn_local;

use super::{Demo, PageHeader, css};
use crate::app::AppContext;
use crate::components::button::{Button, ButtonSize, ButtonVariant};
use crate::components::code_block::CodeBlock;

const USAGE: &str = r#"view! {
    <Button variant=ButtonVariant::Outline size=ButtonSize::Sm on_click=move |_| save()>
        "Save"
    </Button>
}"#;

#[component]
pub fn ButtonPage(ctx: AppContext) -> impl IntoView {
    let loading = RwSignal::new(false);

    let simulate_save = move |_: leptos::ev::MouseEvent| {
        loading.set(true);
        spawn_local(async move {
            TimeoutFuture::new(1200).await;
            let _ = loading.try_set(false);
            ctx.toasts.success("Saved");
        });
    };

    view! {
        <PageHeader
            title="Button"
            lead="Triggers an action. Loading buttons ignore clicks and announce themselves as busy."
        />
        <Demo title="Variants">
            <div class=css::row>
                {ButtonVariant::ALL
                    .into_iter()
                    .map(|variant| view! { <Button variant=variant>{variant.label()}</Button> })
                    .collect_view()}
            </div>
        </Demo>
        <Demo title="Sizes">
            <div class=css::row>
                {ButtonSize::ALL
                    .into_iter()
                    .map(|size| view! { <Button size=size>{size.label()}</Button> })
                    .collect_view()}
            </div>
        </Demo>
        <Demo title="States" caption="Click save to see the loading state.">
            <div class=css::row>
                <Button loading=loading on_click=simulate_save>
                    {move || if loading.get() { "Saving..." } else { "Save" }}
                </Button>
                <Button variant=ButtonVariant::Secondary disabled=true>"Disabled"</Button>
                <Button variant=ButtonVariant::Danger>"Delete"</Button>
            </div>
            <Button block=true variant=ButtonVariant::Outline>"Block"</Button>
        </Demo>
        <Demo title="Usage">
            <CodeBlock ctx=ctx code=USAGE language="rust" />
        </Demo>
    }
}

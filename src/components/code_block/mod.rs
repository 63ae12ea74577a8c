//! Code sample with a copy button.

use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use leptos_icons::Icon;
use wasm_bindgen_futures::spawn_local;

use crate::app::AppContext;
use crate::components::icons as ic;
use crate::config::COPY_FEEDBACK_MS;
use crate::utils::{copy_text, dom};

stylance::import_crate_style!(css, "src/components/code_block/code_block.module.css");

/// Preformatted code. The copy button shows "Copied" briefly on success;
/// failures surface as an error toast.
#[component]
pub fn CodeBlock(
    ctx: AppContext,
    #[prop(into)] code: String,
    /// Shown in the header, e.g. `rust`.
    #[prop(optional, into)]
    language: Option<String>,
) -> impl IntoView {
    let copied = RwSignal::new(false);
    let code = StoredValue::new(code);

    let on_copy = move |_| {
        let text = code.get_value();
        spawn_local(async move {
            match copy_text(&text).await {
                Ok(()) => {
                    copied.set(true);
                    TimeoutFuture::new(COPY_FEEDBACK_MS).await;
                    let _ = copied.try_set(false);
                }
                Err(e) => {
                    dom::warn(&format!("copy failed: {}", e));
                    ctx.toasts.error(e.to_string());
                }
            }
        });
    };

    view! {
        <figure class=css::codeBlock>
            <figcaption class=css::header>
                <span class=css::language>{language.unwrap_or_default()}</span>
                <button
                    type="button"
                    class=css::copy
                    aria-label="Copy code"
                    on:click=on_copy
                >
                    {move || if copied.get() {
                        view! { <Icon icon=ic::CHECK /> <span>"Copied"</span> }.into_any()
                    } else {
                        view! { <Icon icon=ic::COPY /> <span>"Copy"</span> }.into_any()
                    }}
                </button>
            </figcaption>
            <pre class=css::pre><code>{code.get_value()}</code></pre>
        </figure>
    }
}

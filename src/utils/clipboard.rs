//! Clipboard access through `navigator.clipboard.writeText`.

use js_sys::{Function, Promise, Reflect};
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;

use super::dom;
use crate::error::ClipboardError;

/// Copy `text` to the system clipboard.
///
/// The async Clipboard API only exists in secure contexts; elsewhere this
/// returns [`ClipboardError::Unavailable`].
pub async fn copy_text(text: &str) -> Result<(), ClipboardError> {
    let navigator = dom::window()
        .ok_or(ClipboardError::Unavailable)?
        .navigator();

    let clipboard = Reflect::get(&navigator, &JsValue::from_str("clipboard"))
        .ok()
        .filter(|v| !v.is_undefined() && !v.is_null())
        .ok_or(ClipboardError::Unavailable)?;

    let write_text: Function = Reflect::get(&clipboard, &JsValue::from_str("writeText"))
        .ok()
        .and_then(|f| f.dyn_into().ok())
        .ok_or(ClipboardError::Unavailable)?;

    let promise: Promise = write_text
        .call1(&clipboard, &JsValue::from_str(text))
        .map_err(|e| ClipboardError::WriteFailed(describe(&e)))?
        .dyn_into()
        .map_err(|_| ClipboardError::WriteFailed("writeText did not return a promise".into()))?;

    JsFuture::from(promise)
        .await
        .map(|_| ())
        .map_err(|e| ClipboardError::WriteFailed(describe(&e)))
}

fn describe(value: &JsValue) -> String {
    value
        .as_string()
        .or_else(|| {
            Reflect::get(value, &JsValue::from_str("message"))
                .ok()
                .and_then(|m| m.as_string())
        })
        .unwrap_or_else(|| "unknown error".to_string())
}

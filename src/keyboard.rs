//! On-screen keyboard control
//!
//! Mobile webviews dismiss the soft keyboard when the focused element
//! loses focus.

use wasm_bindgen::JsCast;

/// Blur whatever has focus. Missing window/document is ignored.
pub fn hide_keyboard() {
    let focused = web_sys::window()
        .and_then(|win| win.document())
        .and_then(|doc| doc.active_element());

    if let Some(el) = focused.and_then(|el| el.dyn_into::<web_sys::HtmlElement>().ok()) {
        if let Err(e) = el.blur() {
            tracing::warn!(error = ?e, "[UI] blur failed");
        }
    }
}

use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use web_sys::Document;

/// Runs `f` once the document has been parsed.
///
/// If parsing already finished (the module loaded late or `defer`red), `f`
/// runs immediately; otherwise it runs on `DOMContentLoaded`.
pub fn when_ready(document: &Document, f: impl FnOnce() + 'static) -> Result<(), JsValue> {
    if document.ready_state() != "loading" {
        f();
        return Ok(());
    }

    let callback = Closure::once_into_js(f);
    document.add_event_listener_with_callback("DOMContentLoaded", callback.unchecked_ref())
}

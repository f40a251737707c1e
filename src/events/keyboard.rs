use super::Wiring;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

// Escape closes whichever result panel is open.
pub fn wire_escape_dismiss(w: &Wiring) {
    if let Some(window) = web::window() {
        let w = w.clone();
        let closure = Closure::wrap(Box::new(move |ev: web::KeyboardEvent| {
            if ev.key() != "Escape" {
                return;
            }
            if w.controller.borrow_mut().dismiss() {
                w.sync_panels();
                ev.prevent_default();
            }
        }) as Box<dyn FnMut(_)>);
        _ = window.add_event_listener_with_callback("keydown", closure.as_ref().unchecked_ref());
        closure.forget();
    }
}

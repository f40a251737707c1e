use super::Wiring;
use crate::dom;
use crate::input;
use glam::Vec2;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

/// Track the pointer/touch sample over the whole page.
pub fn wire_surface(w: &Wiring) {
    let Some(window) = web::window() else {
        return;
    };
    wire_pointermove(w, &window);
    wire_touch(w, &window);
    wire_leave(w);
}

fn feed(w: &Wiring, sample: Option<Vec2>) {
    let placement = w.controller.borrow_mut().on_pointer(sample, dom::now_ms());
    w.publish(placement);
}

fn wire_pointermove(w: &Wiring, window: &web::Window) {
    let w = w.clone();
    let closure = Closure::wrap(Box::new(move |ev: web::PointerEvent| {
        feed(&w, Some(input::pointer_client_px(&ev)));
    }) as Box<dyn FnMut(_)>);
    _ = window.add_event_listener_with_callback("pointermove", closure.as_ref().unchecked_ref());
    closure.forget();
}

fn wire_touch(w: &Wiring, window: &web::Window) {
    for name in ["touchstart", "touchmove"] {
        let w = w.clone();
        let closure = Closure::wrap(Box::new(move |ev: web::TouchEvent| {
            if let Some(p) = input::touch_client_px(&ev) {
                feed(&w, Some(p));
            }
        }) as Box<dyn FnMut(_)>);
        _ = window.add_event_listener_with_callback(name, closure.as_ref().unchecked_ref());
        closure.forget();
    }
    for name in ["touchend", "touchcancel"] {
        let w = w.clone();
        let closure = Closure::wrap(Box::new(move |_ev: web::TouchEvent| {
            feed(&w, None);
        }) as Box<dyn FnMut(_)>);
        _ = window.add_event_listener_with_callback(name, closure.as_ref().unchecked_ref());
        closure.forget();
    }
}

fn wire_leave(w: &Wiring) {
    let Some(root) = w.document.document_element() else {
        return;
    };
    let w = w.clone();
    let closure = Closure::wrap(Box::new(move |_ev: web::MouseEvent| {
        feed(&w, None);
    }) as Box<dyn FnMut(_)>);
    _ = root.add_event_listener_with_callback("mouseleave", closure.as_ref().unchecked_ref());
    closure.forget();
}

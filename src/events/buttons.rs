use super::Wiring;
use crate::confetti::ConfettiSink;
use crate::controller::ClickEffect;
use crate::dom;
use crate::input;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

pub fn wire_buttons(w: &Wiring) {
    wire_yes(w);
    wire_close(w, "accept-close");
    wire_close(w, "decline-close");
    wire_no_hover(w);
    wire_no_press(w);
    wire_no_focus(w);
    wire_no_click(w);
}

fn wire_yes(w: &Wiring) {
    let w2 = w.clone();
    dom::add_click_listener(&w.document, "btn-yes", move || {
        let accepted = w2.controller.borrow_mut().accept(&mut ConfettiSink);
        if accepted {
            w2.sync_panels();
        }
    });
}

fn wire_close(w: &Wiring, element_id: &str) {
    let w2 = w.clone();
    dom::add_click_listener(&w.document, element_id, move || {
        if w2.controller.borrow_mut().dismiss() {
            w2.sync_panels();
        }
    });
}

fn wire_no_hover(w: &Wiring) {
    let w = w.clone();
    let target = w.no_button.clone();
    let closure = Closure::wrap(Box::new(move |ev: web::PointerEvent| {
        if !w.controller.borrow().is_measured() {
            w.remeasure_next_frame();
        }
        let sample = input::pointer_client_px(&ev);
        let placement = w.controller.borrow_mut().on_hover(sample, dom::now_ms());
        w.publish(placement);
    }) as Box<dyn FnMut(_)>);
    _ = target.add_event_listener_with_callback("pointerenter", closure.as_ref().unchecked_ref());
    closure.forget();
}

fn wire_no_press(w: &Wiring) {
    let w = w.clone();
    let target = w.no_button.clone();
    let closure = Closure::wrap(Box::new(move |ev: web::PointerEvent| {
        let sample = input::pointer_client_px(&ev);
        let placement = w.controller.borrow_mut().on_press(sample, dom::now_ms());
        w.publish(placement);
    }) as Box<dyn FnMut(_)>);
    _ = target.add_event_listener_with_callback("pointerdown", closure.as_ref().unchecked_ref());
    closure.forget();
}

fn wire_no_focus(w: &Wiring) {
    let w = w.clone();
    let target = w.no_button.clone();
    let closure = Closure::wrap(Box::new(move |_ev: web::FocusEvent| {
        let placement = w.controller.borrow_mut().on_focus(dom::now_ms());
        w.publish(placement);
    }) as Box<dyn FnMut(_)>);
    _ = target.add_event_listener_with_callback("focus", closure.as_ref().unchecked_ref());
    closure.forget();
}

fn wire_no_click(w: &Wiring) {
    let w = w.clone();
    let target = w.no_button.clone();
    let closure = Closure::wrap(Box::new(move |ev: web::MouseEvent| {
        ev.prevent_default();
        let effect = w.controller.borrow_mut().on_evasive_click(dom::now_ms());
        match effect {
            ClickEffect::Declined => w.sync_panels(),
            ClickEffect::Moved(placement) => w.publish(Some(placement)),
            ClickEffect::Ignored => {}
        }
    }) as Box<dyn FnMut(_)>);
    _ = target.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref());
    closure.forget();
}

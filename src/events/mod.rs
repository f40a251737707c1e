pub mod buttons;
pub mod keyboard;
pub mod pointer;

use crate::controller::{EvasiveController, Placement};
use crate::input;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

/// Handles shared by every listener on the page.
#[derive(Clone)]
pub struct Wiring {
    pub document: web::Document,
    pub controller: Rc<RefCell<EvasiveController>>,
    pub no_button: web::HtmlElement,
}

impl Wiring {
    #[inline]
    pub fn publish(&self, placement: Option<Placement>) {
        if let Some(p) = placement {
            crate::render::apply(&self.no_button, p);
        }
    }

    /// Measure the button on the next frame, once the layout has applied
    /// whatever offset was just published.
    pub fn remeasure_next_frame(&self) {
        let Some(window) = web::window() else {
            return;
        };
        let w = self.clone();
        let callback = Closure::once_into_js(move || {
            let rect = input::element_rect(&w.no_button);
            w.controller.borrow_mut().measure(rect);
        });
        _ = window.request_animation_frame(callback.unchecked_ref());
    }

    pub fn sync_panels(&self) {
        let outcome = self.controller.borrow().outcome();
        crate::panels::sync(&self.document, outcome);
    }
}

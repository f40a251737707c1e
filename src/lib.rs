#![cfg(target_arch = "wasm32")]
use crate::config::{MotionMode, PageConfig};
use crate::controller::EvasiveController;
use crate::events::Wiring;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::spawn_local;
use web_sys as web;

mod collage;
mod confetti;
mod config;
mod constants;
mod controller;
mod dom;
mod events;
mod frame;
mod geometry;
mod input;
mod lifecycle;
mod outcome;
mod panels;
mod render;
mod spring;
mod teleport;

fn wire_resize(w: &Wiring) {
    let w = w.clone();
    let resize_closure = Closure::wrap(Box::new(move || {
        let Some(window) = web::window() else {
            return;
        };
        let viewport = input::viewport(&window);
        let placement = w
            .controller
            .borrow_mut()
            .on_resize(viewport, dom::now_ms());
        w.publish(placement);
        // Re-anchor once the layout has the reset offset.
        w.remeasure_next_frame();
    }) as Box<dyn FnMut()>);
    if let Some(window) = web::window() {
        _ = window
            .add_event_listener_with_callback("resize", resize_closure.as_ref().unchecked_ref());
    }
    resize_closure.forget();
}

// Stop the motion loop and relocation timer when the page is unloaded.
// A page entering the back-forward cache keeps both so they resume on restore.
fn wire_teardown(frame_handle: frame::FrameHandle, mut timer: Option<frame::TimerHandle>) {
    let closure = Closure::wrap(Box::new(move |ev: web::PageTransitionEvent| {
        if lifecycle::on_pagehide(ev.persisted()) == lifecycle::HideAction::Keep {
            log::info!("[lifecycle] page cached; loop kept");
            return;
        }
        frame_handle.cancel();
        if let Some(t) = timer.as_mut() {
            t.cancel();
        }
    }) as Box<dyn FnMut(_)>);
    if let Some(window) = web::window() {
        _ = window.add_event_listener_with_callback("pagehide", closure.as_ref().unchecked_ref());
    }
    closure.forget();
}

fn read_config(window: &web::Window) -> PageConfig {
    let query = window.location().search().unwrap_or_default();
    let cfg = PageConfig::from_query(&query);
    log::info!(
        "[config] mode={:?} edges={:?} seed={:?}",
        cfg.mode,
        cfg.edges,
        cfg.seed
    );
    cfg
}

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("valentine-web starting");

    spawn_local(async move {
        if let Err(e) = init().await {
            log::error!("init error: {:?}", e);
        }
    });
    Ok(())
}

async fn init() -> anyhow::Result<()> {
    let window = web::window().ok_or_else(|| anyhow::anyhow!("no window"))?;
    let document = window
        .document()
        .ok_or_else(|| anyhow::anyhow!("no document"))?;
    let no_button = dom::html_element(&document, "btn-no")
        .ok_or_else(|| anyhow::anyhow!("missing #btn-no"))?;

    collage::mount(&document)?;
    panels::write_date(&document);

    let config = read_config(&window);
    let controller = Rc::new(RefCell::new(EvasiveController::new(
        &config,
        input::viewport(&window),
    )));
    if config.mode == MotionMode::Teleport {
        _ = no_button.class_list().add_1("teleport");
    }

    let wiring = Wiring {
        document: document.clone(),
        controller: controller.clone(),
        no_button,
    };
    panels::sync(&document, controller.borrow().outcome());
    wiring.remeasure_next_frame();

    events::pointer::wire_surface(&wiring);
    events::buttons::wire_buttons(&wiring);
    events::keyboard::wire_escape_dismiss(&wiring);
    wire_resize(&wiring);

    let interval_ms = controller.borrow().teleport().map(|t| t.params().interval_ms);
    let timer = interval_ms.map(|ms| frame::start_relocation_timer(wiring.clone(), ms));
    let frame_ctx = Rc::new(RefCell::new(frame::FrameContext::new(wiring)));
    let frame_handle = frame::start_loop(frame_ctx);
    wire_teardown(frame_handle, timer);

    Ok(())
}

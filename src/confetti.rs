use crate::outcome::{Burst, BurstSink};
use js_sys::{Object, Reflect};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys as web;

#[wasm_bindgen]
extern "C" {
    // Provided by the canvas-confetti script tag in index.html.
    #[wasm_bindgen(js_name = confetti, catch)]
    fn confetti_js(options: &JsValue) -> Result<JsValue, JsValue>;
}

fn burst_options(burst: &Burst) -> Result<JsValue, JsValue> {
    let opts = Object::new();
    let origin = Object::new();
    Reflect::set(&origin, &"x".into(), &burst.origin[0].into())?;
    Reflect::set(&origin, &"y".into(), &burst.origin[1].into())?;
    Reflect::set(&opts, &"particleCount".into(), &burst.particle_count.into())?;
    Reflect::set(&opts, &"spread".into(), &burst.spread_deg.into())?;
    Reflect::set(&opts, &"origin".into(), &origin)?;
    Ok(opts.into())
}

pub fn fire(burst: &Burst) {
    let result = burst_options(burst).and_then(|opts| confetti_js(&opts));
    if let Err(e) = result {
        log::warn!("[confetti] burst failed: {:?}", e);
    }
}

/// Sends bursts to the page's confetti function, deferring delayed ones
/// with `setTimeout`.
pub struct ConfettiSink;

impl BurstSink for ConfettiSink {
    fn schedule(&mut self, delay_ms: u32, burst: Burst) {
        if delay_ms == 0 {
            fire(&burst);
            return;
        }
        let Some(window) = web::window() else {
            return;
        };
        let callback = Closure::once_into_js(move || fire(&burst));
        if let Err(e) = window.set_timeout_with_callback_and_timeout_and_arguments_0(
            callback.unchecked_ref(),
            delay_ms as i32,
        ) {
            log::warn!("[confetti] could not schedule burst: {:?}", e);
        }
    }
}

use crate::controller::EvasiveController;
use crate::dom;
use crate::events::Wiring;
use instant::Instant;
use std::cell::{Cell, RefCell};
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

pub struct FrameContext {
    pub wiring: Wiring,
    pub last_instant: Instant,
}

impl FrameContext {
    pub fn new(wiring: Wiring) -> Self {
        Self {
            wiring,
            last_instant: Instant::now(),
        }
    }

    pub fn frame(&mut self) {
        let now = Instant::now();
        let dt_sec = (now - self.last_instant).as_secs_f32();
        self.last_instant = now;

        let placement = self.controller().borrow_mut().tick(dt_sec);
        self.wiring.publish(placement);
    }

    fn controller(&self) -> &Rc<RefCell<EvasiveController>> {
        &self.wiring.controller
    }
}

/// Stops the `requestAnimationFrame` chain started by [`start_loop`].
pub struct FrameHandle {
    raf_id: Rc<Cell<i32>>,
    cancelled: Rc<Cell<bool>>,
    tick: Rc<RefCell<Option<Closure<dyn FnMut()>>>>,
}

impl FrameHandle {
    pub fn cancel(&self) {
        if self.cancelled.replace(true) {
            return;
        }
        if let Some(w) = web::window() {
            _ = w.cancel_animation_frame(self.raf_id.get());
        }
        // Breaks the closure's self-reference so it can be dropped.
        self.tick.borrow_mut().take();
        log::info!("[frame] loop stopped");
    }
}

fn request_frame(tick: &Rc<RefCell<Option<Closure<dyn FnMut()>>>>, raf_id: &Cell<i32>) {
    let Some(w) = web::window() else {
        return;
    };
    if let Some(cb) = tick.borrow().as_ref() {
        match w.request_animation_frame(cb.as_ref().unchecked_ref()) {
            Ok(id) => raf_id.set(id),
            Err(e) => log::error!("requestAnimationFrame failed: {:?}", e),
        }
    }
}

pub fn start_loop(frame_ctx: Rc<RefCell<FrameContext>>) -> FrameHandle {
    let tick: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));
    let raf_id = Rc::new(Cell::new(0));
    let cancelled = Rc::new(Cell::new(false));

    let tick_clone = tick.clone();
    let raf_id_tick = raf_id.clone();
    let cancelled_tick = cancelled.clone();
    *tick.borrow_mut() = Some(Closure::wrap(Box::new(move || {
        if cancelled_tick.get() {
            return;
        }
        frame_ctx.borrow_mut().frame();
        request_frame(&tick_clone, &raf_id_tick);
    }) as Box<dyn FnMut()>));
    request_frame(&tick, &raf_id);
    log::info!("[frame] loop started");

    FrameHandle {
        raf_id,
        cancelled,
        tick,
    }
}

/// Stops the relocation interval started by [`start_relocation_timer`].
pub struct TimerHandle {
    interval_id: Option<i32>,
    _callback: Closure<dyn FnMut()>,
}

impl TimerHandle {
    pub fn cancel(&mut self) {
        if let (Some(id), Some(w)) = (self.interval_id.take(), web::window()) {
            w.clear_interval_with_handle(id);
            log::info!("[frame] relocation timer stopped");
        }
    }
}

/// Fire the controller's fixed-cadence relocation every `interval_ms`.
pub fn start_relocation_timer(wiring: Wiring, interval_ms: u32) -> TimerHandle {
    let callback = Closure::wrap(Box::new(move || {
        let placement = wiring.controller.borrow_mut().on_timer(dom::now_ms());
        wiring.publish(placement);
    }) as Box<dyn FnMut()>);
    let interval_id = web::window().and_then(|w| {
        w.set_interval_with_callback_and_timeout_and_arguments_0(
            callback.as_ref().unchecked_ref(),
            interval_ms as i32,
        )
        .map_err(|e| log::error!("setInterval failed: {:?}", e))
        .ok()
    });
    TimerHandle {
        interval_id,
        _callback: callback,
    }
}

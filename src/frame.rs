use crate::dom;
use crate::render::CanvasSurface;
use squares_core::{CursorTracker, FrameClock, Simulation};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

pub struct FrameContext {
    pub simulation: Simulation,
    pub surface: CanvasSurface,
    pub canvas: web::HtmlCanvasElement,
    pub cursor: Rc<RefCell<CursorTracker>>,
    pub clock: FrameClock,
    pub frame_id: Option<i32>,
}

impl FrameContext {
    /// Run one frame; returns false once the clock has been stopped.
    pub fn frame(&mut self, now_ms: f64) -> bool {
        let Some(dt) = self.clock.advance(now_ms) else {
            return false;
        };
        let cursor = self.cursor.borrow().point();
        self.simulation.step(dt, cursor, &mut self.surface);
        true
    }
}

type FrameCallback = Closure<dyn FnMut(f64)>;

/// Handle to the requestAnimationFrame loop. Clones share the same loop.
#[derive(Clone)]
pub struct Animation {
    ctx: Rc<RefCell<FrameContext>>,
    tick: Rc<RefCell<Option<FrameCallback>>>,
}

impl Animation {
    pub fn new(frame_ctx: FrameContext) -> Self {
        let ctx = Rc::new(RefCell::new(frame_ctx));
        let tick: Rc<RefCell<Option<FrameCallback>>> = Rc::new(RefCell::new(None));
        let tick_clone = tick.clone();
        let ctx_tick = ctx.clone();
        *tick.borrow_mut() = Some(Closure::wrap(Box::new(move |now: f64| {
            let mut ctx = ctx_tick.borrow_mut();
            ctx.frame_id = None;
            if ctx.frame(now) {
                ctx.frame_id = request_frame(&tick_clone);
            }
        }) as Box<dyn FnMut(f64)>));
        Self { ctx, tick }
    }

    /// No-op while already running.
    pub fn start(&self) {
        let mut ctx = self.ctx.borrow_mut();
        if ctx.clock.start(instant::now()) {
            ctx.frame_id = request_frame(&self.tick);
            log::debug!("animation started");
        }
    }

    pub fn stop(&self) {
        let mut ctx = self.ctx.borrow_mut();
        if ctx.clock.stop() {
            log::debug!("animation stopped");
        }
        if let Some(id) = ctx.frame_id.take() {
            if let Some(w) = web::window() {
                _ = w.cancel_animation_frame(id);
            }
        }
    }

    /// Stop, resize the backing store, repopulate, start again.
    pub fn resize(&self) {
        self.stop();
        {
            let mut ctx = self.ctx.borrow_mut();
            let (width, height) = dom::sync_canvas_backing_size(&ctx.canvas);
            ctx.simulation.rebuild(width, height);
        }
        self.start();
    }
}

fn request_frame(tick: &Rc<RefCell<Option<FrameCallback>>>) -> Option<i32> {
    let window = web::window()?;
    let tick = tick.borrow();
    let callback = tick.as_ref()?;
    window
        .request_animation_frame(callback.as_ref().unchecked_ref())
        .ok()
}

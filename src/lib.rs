#![cfg(target_arch = "wasm32")]
use squares_core::{CursorTracker, FrameClock, Simulation};
use std::cell::RefCell;
use std::rc::Rc;
use std::sync::atomic::{AtomicBool, Ordering};
use wasm_bindgen::prelude::*;

mod constants;
mod dom;
mod events;
mod frame;
mod input;
mod render;

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();

    // The module may be instantiated twice by some bundlers; one canvas is enough
    static STARTED: AtomicBool = AtomicBool::new(false);
    if STARTED.swap(true, Ordering::SeqCst) {
        return Ok(());
    }
    if let Err(e) = init() {
        log::error!("init error: {:?}", e);
    }
    Ok(())
}

fn init() -> anyhow::Result<()> {
    let document = dom::window_document().ok_or_else(|| anyhow::anyhow!("no document"))?;
    let variant = dom::requested_variant(&document);
    log::info!("squares background starting ({variant})");

    let config = variant.config();
    let canvas = dom::create_canvas(&document)?;
    dom::apply_canvas_style(&canvas, config.palette.background_css)?;
    let surface = render::CanvasSurface::new(dom::context_2d(&canvas)?);
    let simulation = Simulation::from_entropy(config)?;

    let cursor = Rc::new(RefCell::new(CursorTracker::new()));
    events::wire_pointer_handlers(&canvas, &cursor);
    events::wire_touch_handlers(&canvas, &cursor);

    let animation = frame::Animation::new(frame::FrameContext {
        simulation,
        surface,
        canvas,
        cursor,
        clock: FrameClock::new(),
        frame_id: None,
    });
    events::wire_window_lifecycle(&animation);

    // First resize sizes the canvas, builds the population and starts the loop
    animation.resize();
    Ok(())
}

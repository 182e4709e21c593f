use crate::constants::TOUCH_EVENTS;
use crate::input;
use squares_core::CursorTracker;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

/// Track the primary touch and suppress default scrolling/zooming over the canvas.
pub fn wire_touch_handlers(canvas: &web::HtmlCanvasElement, cursor: &Rc<RefCell<CursorTracker>>) {
    let options = web::AddEventListenerOptions::new();
    options.set_passive(false);

    for &event_type in TOUCH_EVENTS {
        let canvas_touch = canvas.clone();
        let cursor = cursor.clone();
        let closure = Closure::wrap(Box::new(move |ev: web::TouchEvent| {
            ev.prevent_default();
            let first = input::touch_canvas_px(&ev, &canvas_touch);
            if let Some(event) = input::touch_cursor_event(event_type, first) {
                cursor.borrow_mut().apply(event);
            }
        }) as Box<dyn FnMut(_)>);
        if let Err(e) = canvas.add_event_listener_with_callback_and_add_event_listener_options(
            event_type,
            closure.as_ref().unchecked_ref(),
            &options,
        ) {
            log::warn!("failed to listen for {event_type}: {:?}", e);
        }
        closure.forget();
    }
}

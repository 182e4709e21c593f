use crate::input;
use squares_core::{CursorEvent, CursorTracker};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

pub fn wire_pointer_handlers(canvas: &web::HtmlCanvasElement, cursor: &Rc<RefCell<CursorTracker>>) {
    wire_pointermove(canvas, cursor);
    wire_pointerleave(canvas, cursor);
}

fn wire_pointermove(canvas: &web::HtmlCanvasElement, cursor: &Rc<RefCell<CursorTracker>>) {
    let canvas_move = canvas.clone();
    let cursor = cursor.clone();
    let closure = Closure::wrap(Box::new(move |ev: web::PointerEvent| {
        let pos = input::pointer_canvas_px(&ev, &canvas_move);
        cursor
            .borrow_mut()
            .apply(CursorEvent::PointerMove { x: pos.x, y: pos.y });
    }) as Box<dyn FnMut(_)>);
    _ = canvas.add_event_listener_with_callback("pointermove", closure.as_ref().unchecked_ref());
    closure.forget();
}

fn wire_pointerleave(canvas: &web::HtmlCanvasElement, cursor: &Rc<RefCell<CursorTracker>>) {
    let cursor = cursor.clone();
    let closure = Closure::wrap(Box::new(move |_ev: web::PointerEvent| {
        cursor.borrow_mut().apply(CursorEvent::PointerLeave);
    }) as Box<dyn FnMut(_)>);
    _ = canvas.add_event_listener_with_callback("pointerleave", closure.as_ref().unchecked_ref());
    closure.forget();
}

use glam::DVec2;
use squares_core::CursorEvent;
use web_sys as web;

/// Map a client-space point onto the canvas backing store.
///
/// `rect_origin`/`rect_size` are the canvas bounding rect in CSS pixels and
/// `backing` its pixel size. A collapsed rect leaves the point unscaled.
#[inline]
pub fn client_to_canvas(client: DVec2, rect_origin: DVec2, rect_size: DVec2, backing: DVec2) -> DVec2 {
    let local = client - rect_origin;
    if rect_size.x > 0.0 && rect_size.y > 0.0 {
        local / rect_size * backing
    } else {
        local
    }
}

/// Cursor update for a touch event type; `first` is the primary touch, if any.
pub fn touch_cursor_event(event_type: &str, first: Option<DVec2>) -> Option<CursorEvent> {
    match event_type {
        "touchstart" => first.map(|p| CursorEvent::TouchStart { x: p.x, y: p.y }),
        "touchmove" => first.map(|p| CursorEvent::TouchMove { x: p.x, y: p.y }),
        "touchend" => Some(CursorEvent::TouchEnd),
        "touchcancel" => Some(CursorEvent::TouchCancel),
        _ => None,
    }
}

fn to_canvas(canvas: &web::HtmlCanvasElement, client_x: f64, client_y: f64) -> DVec2 {
    let rect = canvas.get_bounding_client_rect();
    client_to_canvas(
        DVec2::new(client_x, client_y),
        DVec2::new(rect.left(), rect.top()),
        DVec2::new(rect.width(), rect.height()),
        DVec2::new(canvas.width() as f64, canvas.height() as f64),
    )
}

// ---------------- Event helpers ----------------
#[inline]
pub fn pointer_canvas_px(ev: &web::PointerEvent, canvas: &web::HtmlCanvasElement) -> DVec2 {
    to_canvas(canvas, ev.client_x() as f64, ev.client_y() as f64)
}

#[inline]
pub fn touch_canvas_px(ev: &web::TouchEvent, canvas: &web::HtmlCanvasElement) -> Option<DVec2> {
    let touch = ev.touches().get(0)?;
    Some(to_canvas(canvas, touch.client_x() as f64, touch.client_y() as f64))
}

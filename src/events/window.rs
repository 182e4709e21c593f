use crate::frame::Animation;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

/// Pause on blur, resume on focus, rebuild on resize.
pub fn wire_window_lifecycle(animation: &Animation) {
    let Some(window) = web::window() else {
        return;
    };
    let handlers: [(&str, fn(&Animation)); 3] = [
        ("focus", Animation::start),
        ("blur", Animation::stop),
        ("resize", Animation::resize),
    ];
    for (event_type, handler) in handlers {
        let animation = animation.clone();
        let closure = Closure::wrap(Box::new(move || handler(&animation)) as Box<dyn FnMut()>);
        _ = window.add_event_listener_with_callback(event_type, closure.as_ref().unchecked_ref());
        closure.forget();
    }
}

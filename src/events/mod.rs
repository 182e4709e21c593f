mod pointer;
mod touch;
mod window;

pub use pointer::wire_pointer_handlers;
pub use touch::wire_touch_handlers;
pub use window::wire_window_lifecycle;

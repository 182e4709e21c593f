// Page wiring for the background canvas

// <body data-squares-variant="drift|gravity|flicker|cursor-flicker">
pub const VARIANT_ATTRIBUTE: &str = "data-squares-variant";
pub const CANVAS_ID: &str = "squares-bg";

// Full-viewport layer behind the page content; background color is per variant
pub const CANVAS_STYLE: &[(&str, &str)] = &[
    ("display", "block"),
    ("position", "absolute"),
    ("top", "0"),
    ("left", "0"),
    ("width", "100vw"),
    ("height", "100vh"),
];

// Touch listeners call preventDefault, which browsers ignore on passive listeners
pub const TOUCH_EVENTS: &[&str] = &["touchstart", "touchmove", "touchend", "touchcancel"];

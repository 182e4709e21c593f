// Shared tuning constants for every background variant.
// Times are in milliseconds, distances in canvas pixels.

// Palette resolution (bucket count) shared by all variants
pub const INTENSITY_STEPS: usize = 1000;

// ---------------- Drift (plain + cursor gravity) ----------------

pub const DRIFT_MIN_SIZE: f64 = 8.0;
pub const DRIFT_MAX_SIZE: f64 = 18.0;

// Squares never fade fully into the background
pub const DRIFT_MIN_ALPHA: f64 = 0.25;
pub const DRIFT_MAX_ALPHA: f64 = 1.0;

pub const DRIFT_MIN_SPEED: f64 = 0.01; // px per ms
pub const DRIFT_MAX_SPEED: f64 = 0.03;
pub const ALPHA_MIN_SPEED: f64 = 0.0003; // alpha per ms
pub const ALPHA_MAX_SPEED: f64 = 0.0006;

// Canvas area (px²) per square
pub const DENSITY_FACTOR: f64 = 6000.0;

pub const GRAVITY_ACTION_RADIUS_RATE: f64 = 0.4; // of the shorter canvas side
pub const CURSOR_GRAVITY: f64 = 0.0002;
pub const MAX_GRAVITY_SPEED: f64 = 0.16;
pub const FRICTION: f64 = 0.98;
pub const RELAX_RATE: f64 = 0.02; // pull back toward the birth velocity

pub const DRIFT_BACKGROUND_RGB: [u8; 3] = [28, 36, 43];
pub const DRIFT_FOREGROUND_RGB: [u8; 3] = [0, 254, 144];
pub const DRIFT_BACKGROUND_CSS: &str = "#1c242b";

// ---------------- Flicker (LCD grid) ----------------

pub const FLICKER_MAX_SIZE: f64 = 20.0;
pub const FLICKER_CELL_PADDING: f64 = 4.0;

// (size px, weight); size 0 leaves the cell empty
pub const FLICKER_SIZE_WEIGHTS: &[(u32, usize)] = &[
    (0, 1024),
    (2, 512),
    (4, 256),
    (6, 128),
    (8, 64),
    (10, 32),
    (12, 16),
    (14, 8),
    (16, 4),
    (18, 2),
    (20, 1),
];

pub const BRIGHTNESS_MIN_SPEED: f64 = 0.0002;
pub const BRIGHTNESS_MAX_SPEED: f64 = 0.0004;
pub const CHANCE_LOW_BRIGHTNESS: f64 = 0.9995;

pub const FLICKER_DARK_RGB: [u8; 3] = [34, 48, 69]; // #223045
pub const FLICKER_BRIGHT_RGB: [u8; 3] = [74, 222, 128]; // #4ade80
pub const FLICKER_BACKGROUND_CSS: &str = "#1e2a3c";

// Cursor-aware flicker is calmer at rest and shimmers under the pointer
pub const HOVER_BRIGHTNESS_MAX_SPEED: f64 = 0.0003;
pub const HOVER_CHANCE_LOW_BRIGHTNESS: f64 = 0.99975;
pub const HOVER_BRIGHT_RGB: [u8; 3] = [38, 207, 100];
pub const HOVER_ACTION_RADIUS_RATE: f64 = 0.1;
pub const HOVER_BRIGHTNESS_SPEED_RATE: f64 = 3.0;

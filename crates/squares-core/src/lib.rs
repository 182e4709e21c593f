pub mod bucket;
pub mod config;
pub mod constants;
pub mod cursor;
pub mod driver;
pub mod error;
pub mod grid;
pub mod palette;
pub mod particle;
pub mod render;
pub mod simulation;

pub use bucket::{ColorBuckets, Slot};
pub use config::*;
pub use constants::*;
pub use cursor::{ActionRadius, CursorEvent, CursorTracker};
pub use driver::FrameClock;
pub use error::ConfigError;
pub use grid::{drift_population, GridLayout, SizeSequence};
pub use palette::{Palette, Rgb};
pub use particle::{Field, Particle};
pub use render::Surface;
pub use simulation::Simulation;

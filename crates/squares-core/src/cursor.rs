//! Pointer/touch input reduced to a single point of influence.

use glam::DVec2;

/// Input events after translation into canvas pixel coordinates.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum CursorEvent {
    PointerMove { x: f64, y: f64 },
    PointerLeave,
    TouchStart { x: f64, y: f64 },
    TouchMove { x: f64, y: f64 },
    TouchEnd,
    TouchCancel,
}

/// Most recent pointer position, or nothing when no pointer is active.
///
/// The absent state plays the role of a far off-canvas sentinel but cannot be
/// reached by any canvas size.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct CursorTracker {
    point: Option<DVec2>,
}

impl CursorTracker {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn apply(&mut self, event: CursorEvent) {
        match event {
            CursorEvent::PointerMove { x, y }
            | CursorEvent::TouchStart { x, y }
            | CursorEvent::TouchMove { x, y } => self.set(x, y),
            CursorEvent::PointerLeave | CursorEvent::TouchEnd | CursorEvent::TouchCancel => {
                self.clear()
            }
        }
    }

    pub fn set(&mut self, x: f64, y: f64) {
        // A non-finite position would poison every distance check
        self.point = (x.is_finite() && y.is_finite()).then(|| DVec2::new(x, y));
    }

    pub fn clear(&mut self) {
        self.point = None;
    }

    #[inline]
    pub fn point(&self) -> Option<DVec2> {
        self.point
    }

    pub fn is_active(&self) -> bool {
        self.point.is_some()
    }
}

/// Cursor influence radius as a fraction of the shorter canvas side,
/// recomputed only when that side changes.
#[derive(Clone, Copy, Debug)]
pub struct ActionRadius {
    rate: f64,
    min_side: f64,
    radius: f64,
}

impl ActionRadius {
    pub fn new(rate: f64) -> Self {
        Self {
            rate,
            min_side: 0.0,
            radius: 0.0,
        }
    }

    pub fn get(&mut self, width: f64, height: f64) -> f64 {
        let min_side = width.min(height);
        if min_side != self.min_side {
            self.min_side = min_side;
            self.radius = min_side * self.rate;
        }
        self.radius
    }
}

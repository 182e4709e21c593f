//! Precomputed color lookup indexed by discretized intensity.

use std::fmt;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Linear blend toward `other`; each channel is rounded to the nearest integer.
    pub fn lerp(self, other: Rgb, t: f64) -> Rgb {
        let mix = |a: u8, b: u8| {
            let v = a as f64 + (b as f64 - a as f64) * t;
            v.round().clamp(0.0, 255.0) as u8
        };
        Rgb::new(
            mix(self.r, other.r),
            mix(self.g, other.g),
            mix(self.b, other.b),
        )
    }
}

impl From<[u8; 3]> for Rgb {
    fn from(c: [u8; 3]) -> Self {
        Rgb::new(c[0], c[1], c[2])
    }
}

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "rgb({},{},{})", self.r, self.g, self.b)
    }
}

/// Immutable table of `steps` CSS colors spanning `[min, max]` intensity.
#[derive(Clone, Debug)]
pub struct Palette {
    colors: Vec<String>,
    min: f64,
    max: f64,
    inv_step: f64,
}

impl Palette {
    /// Entry `i` blends `dim → bright` at `i / (steps - 1)`.
    pub fn new(steps: usize, dim: impl Into<Rgb>, bright: impl Into<Rgb>) -> Self {
        Self::with_range(steps, dim, bright, 0.0, 1.0)
    }

    /// Entry `i` is the blend at intensity `min + i * step`, so a drift
    /// palette can start part of the way toward the bright color.
    pub fn with_range(
        steps: usize,
        dim: impl Into<Rgb>,
        bright: impl Into<Rgb>,
        min: f64,
        max: f64,
    ) -> Self {
        let (dim, bright) = (dim.into(), bright.into());
        let steps = steps.max(2);
        let step = (max - min) / (steps - 1) as f64;
        let colors = (0..steps)
            .map(|i| dim.lerp(bright, min + i as f64 * step).to_string())
            .collect();
        let inv_step = if step > 0.0 { 1.0 / step } else { 0.0 };
        Self {
            colors,
            min,
            max,
            inv_step,
        }
    }

    pub fn steps(&self) -> usize {
        self.colors.len()
    }

    pub fn range(&self) -> (f64, f64) {
        (self.min, self.max)
    }

    /// Bucket index for an intensity, clamped into the table.
    #[inline]
    pub fn index_for(&self, value: f64) -> usize {
        let v = if value.is_nan() {
            self.min
        } else {
            value.clamp(self.min, self.max)
        };
        let index = ((v - self.min) * self.inv_step).round() as usize;
        index.min(self.colors.len() - 1)
    }

    #[inline]
    pub fn color(&self, index: usize) -> &str {
        &self.colors[index.min(self.colors.len() - 1)]
    }

    #[inline]
    pub fn color_for_intensity(&self, value: f64) -> &str {
        self.color(self.index_for(value))
    }
}

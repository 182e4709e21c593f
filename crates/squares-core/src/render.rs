//! Drawing against an abstract 2D surface.

use crate::bucket::ColorBuckets;
use crate::palette::Palette;
use crate::particle::Particle;

/// The handful of raster operations the background needs. The web front-end
/// implements it over `CanvasRenderingContext2d`.
pub trait Surface {
    fn clear(&mut self, width: f64, height: f64);
    fn set_fill_style(&mut self, color: &str);
    fn fill_rect(&mut self, x: f64, y: f64, width: f64, height: f64);
}

/// Clear, then paint one bucket at a time with a single fill-style change each.
pub fn draw_bucketed<S: Surface + ?Sized>(
    surface: &mut S,
    width: f64,
    height: f64,
    particles: &[Particle],
    buckets: &ColorBuckets,
    palette: &Palette,
) {
    surface.clear(width, height);
    for (index, members) in buckets.iter_non_empty() {
        surface.set_fill_style(palette.color(index));
        for &slot in members {
            if let Some(p) = particles.get(slot) {
                surface.fill_rect(p.position.x, p.position.y, p.size, p.size);
            }
        }
    }
}

/// Clear, then paint every particle with its own color lookup.
pub fn draw_direct<S: Surface + ?Sized>(
    surface: &mut S,
    width: f64,
    height: f64,
    particles: &[Particle],
    palette: &Palette,
) {
    surface.clear(width, height);
    for p in particles {
        surface.set_fill_style(palette.color_for_intensity(p.intensity));
        surface.fill_rect(p.position.x, p.position.y, p.size, p.size);
    }
}

//! Population layout: drift density and the flicker grid with its weighted
//! size sequence.

use glam::DVec2;
use rand::seq::SliceRandom;
use rand::Rng;

/// Number of drift squares for a canvas.
pub fn drift_population(width: f64, height: f64, density_factor: f64) -> usize {
    let area = (width * height).max(0.0);
    (area / density_factor).floor() as usize
}

/// Cell sizes drawn from a weighted table, shuffled once and consumed
/// cyclically. The read position survives rebuilds so each resize continues
/// the sequence instead of repeating its start.
#[derive(Clone, Debug, Default)]
pub struct SizeSequence {
    sizes: Vec<u32>,
    cursor: usize,
}

impl SizeSequence {
    pub fn shuffled<R: Rng + ?Sized>(weights: &[(u32, usize)], rng: &mut R) -> Self {
        let mut sizes: Vec<u32> = weights
            .iter()
            .flat_map(|&(size, count)| std::iter::repeat(size).take(count))
            .collect();
        sizes.shuffle(rng);
        Self::from_sizes(sizes)
    }

    pub fn from_sizes(sizes: Vec<u32>) -> Self {
        Self { sizes, cursor: 0 }
    }

    pub fn len(&self) -> usize {
        self.sizes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sizes.is_empty()
    }

    pub fn position(&self) -> usize {
        self.cursor
    }

    /// Next cell size; `None` leaves the cell empty.
    pub fn next_size(&mut self) -> Option<f64> {
        let size = *self.sizes.get(self.cursor)?;
        self.cursor = (self.cursor + 1) % self.sizes.len();
        (size > 0).then_some(size as f64)
    }
}

/// Regular grid covering the canvas with a fixed cell pitch.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GridLayout {
    pub pitch: f64,
    pub cols: usize,
    pub rows: usize,
}

impl GridLayout {
    pub fn new(width: f64, height: f64, pitch: f64) -> Self {
        let cells = |side: f64| (side.max(0.0) / pitch).ceil() as usize;
        Self {
            pitch,
            cols: cells(width),
            rows: cells(height),
        }
    }

    pub fn cell_count(&self) -> usize {
        self.cols * self.rows
    }

    /// Cell centers in row-major order.
    pub fn centers(&self) -> impl Iterator<Item = DVec2> + '_ {
        let start = self.pitch * 0.5;
        (0..self.rows).flat_map(move |row| {
            (0..self.cols).map(move |col| {
                DVec2::new(
                    start + col as f64 * self.pitch,
                    start + row as f64 * self.pitch,
                )
            })
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn drift_population_scales_with_area() {
        assert_eq!(drift_population(800.0, 600.0, 6000.0), 80);
        assert_eq!(drift_population(1600.0, 1200.0, 6000.0), 320);
        assert_eq!(drift_population(50.0, 50.0, 6000.0), 0);
    }

    #[test]
    fn shuffled_sequence_keeps_weights() {
        let mut rng = StdRng::seed_from_u64(5);
        let seq = SizeSequence::shuffled(&[(0, 4), (2, 2), (8, 1)], &mut rng);
        assert_eq!(seq.len(), 7);
        let mut sorted = seq.sizes.clone();
        sorted.sort_unstable();
        assert_eq!(sorted, vec![0, 0, 0, 0, 2, 2, 8]);
    }

    #[test]
    fn sequence_wraps_and_skips_zero() {
        let mut seq = SizeSequence::from_sizes(vec![4, 0, 6]);
        assert_eq!(seq.next_size(), Some(4.0));
        assert_eq!(seq.next_size(), None);
        assert_eq!(seq.next_size(), Some(6.0));
        assert_eq!(seq.position(), 0);
        assert_eq!(seq.next_size(), Some(4.0));
    }

    #[test]
    fn empty_sequence_yields_nothing() {
        let mut seq = SizeSequence::default();
        assert_eq!(seq.next_size(), None);
        assert_eq!(seq.position(), 0);
    }

    #[test]
    fn grid_covers_partial_cells() {
        let g = GridLayout::new(50.0, 24.0, 24.0);
        assert_eq!((g.cols, g.rows), (3, 1));
        let centers: Vec<_> = g.centers().collect();
        assert_eq!(
            centers,
            vec![
                DVec2::new(12.0, 12.0),
                DVec2::new(36.0, 12.0),
                DVec2::new(60.0, 12.0)
            ]
        );
    }
}

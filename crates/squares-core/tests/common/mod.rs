// Shared helpers for simulation integration tests.
#![allow(dead_code)]

use squares_core::{ColorBuckets, Particle, Simulation, Surface};

#[derive(Clone, Debug, PartialEq)]
pub enum DrawCommand {
    Clear { width: f64, height: f64 },
    Fill(String),
    Rect { x: f64, y: f64, w: f64, h: f64 },
}

/// Surface that records every call instead of rasterizing.
#[derive(Default)]
pub struct RecordingSurface {
    pub commands: Vec<DrawCommand>,
}

impl Surface for RecordingSurface {
    fn clear(&mut self, width: f64, height: f64) {
        self.commands.push(DrawCommand::Clear { width, height });
    }

    fn set_fill_style(&mut self, color: &str) {
        self.commands.push(DrawCommand::Fill(color.to_string()));
    }

    fn fill_rect(&mut self, x: f64, y: f64, w: f64, h: f64) {
        self.commands.push(DrawCommand::Rect { x, y, w, h });
    }
}

impl RecordingSurface {
    pub fn fill_changes(&self) -> usize {
        self.commands
            .iter()
            .filter(|c| matches!(c, DrawCommand::Fill(_)))
            .count()
    }

    /// Each painted rectangle paired with the fill active when it was drawn,
    /// sorted so two recordings can be compared independent of order.
    pub fn painted(&self) -> Vec<(String, [u64; 4])> {
        let mut fill = String::new();
        let mut out = Vec::new();
        for c in &self.commands {
            match c {
                DrawCommand::Fill(f) => fill = f.clone(),
                DrawCommand::Rect { x, y, w, h } => out.push((
                    fill.clone(),
                    [x.to_bits(), y.to_bits(), w.to_bits(), h.to_bits()],
                )),
                DrawCommand::Clear { .. } => {}
            }
        }
        out.sort();
        out
    }
}

/// Every particle sits in exactly the bucket its intensity maps to.
pub fn assert_bucket_invariant(sim: &Simulation) {
    let particles: &[Particle] = sim.particles();
    let buckets: &ColorBuckets = sim.buckets().expect("bucketed simulation");
    assert_eq!(buckets.len(), particles.len(), "bucket membership drifted");

    let mut seen = vec![0usize; particles.len()];
    for (index, members) in buckets.iter_non_empty() {
        for &slot in members {
            seen[slot] += 1;
            assert_eq!(particles[slot].bucket, index, "slot {slot} cached wrong bucket");
        }
    }
    assert!(seen.iter().all(|&n| n == 1), "particle missing or duplicated");

    for p in particles {
        assert_eq!(p.bucket, sim.palette().index_for(p.intensity));
    }
}

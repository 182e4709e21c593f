use crate::bucket::ColorBuckets;
use crate::config::{IntensityModel, SimulationConfig};
use crate::cursor::ActionRadius;
use crate::error::ConfigError;
use crate::grid::{drift_population, GridLayout, SizeSequence};
use crate::palette::Palette;
use crate::particle::{Field, Particle};
use crate::render::{self, Surface};
use glam::DVec2;
use rand::rngs::StdRng;
use rand::SeedableRng;

/// Owns every square, the color buckets and all process-wide state the
/// variants share (size-sequence position, cursor radius cache, RNG).
pub struct Simulation {
    config: SimulationConfig,
    palette: Palette,
    particles: Vec<Particle>,
    /// Absent when rendering draws each square directly.
    buckets: Option<ColorBuckets>,
    sizes: SizeSequence,
    action_radius: ActionRadius,
    rng: StdRng,
    width: f64,
    height: f64,
}

impl Simulation {
    pub fn new(config: SimulationConfig, seed: u64) -> Result<Self, ConfigError> {
        Self::with_rng(config, StdRng::seed_from_u64(seed))
    }

    pub fn from_entropy(config: SimulationConfig) -> Result<Self, ConfigError> {
        Self::with_rng(config, StdRng::from_entropy())
    }

    fn with_rng(config: SimulationConfig, mut rng: StdRng) -> Result<Self, ConfigError> {
        config.validate()?;

        let (min, max) = config.intensity_range();
        let p = &config.palette;
        let palette = Palette::with_range(p.steps, p.dim, p.bright, min, max);
        let buckets = config
            .features
            .bucketed_rendering_enabled
            .then(|| ColorBuckets::new(palette.steps()));
        let sizes = if config.features.grid_placement_enabled {
            SizeSequence::shuffled(config.flicker.size_weights, &mut rng)
        } else {
            SizeSequence::default()
        };
        let action_radius = ActionRadius::new(config.action_radius_rate());

        Ok(Self {
            config,
            palette,
            particles: Vec::new(),
            buckets,
            sizes,
            action_radius,
            rng,
            width: 0.0,
            height: 0.0,
        })
    }

    /// Replace the whole population for a canvas of the given size.
    pub fn rebuild(&mut self, width: f64, height: f64) {
        self.width = width.max(0.0);
        self.height = height.max(0.0);
        self.particles.clear();

        if self.config.features.grid_placement_enabled {
            let grid = GridLayout::new(self.width, self.height, self.config.flicker.cell_pitch());
            for center in grid.centers() {
                if let Some(size) = self.sizes.next_size() {
                    self.particles.push(Particle::spawn_cell(
                        &mut self.rng,
                        center,
                        size,
                        &self.config.flicker,
                    ));
                }
            }
        } else {
            let count = drift_population(self.width, self.height, self.config.drift.density_factor);
            self.particles.reserve(count);
            for _ in 0..count {
                self.particles.push(Particle::spawn_drifting(
                    &mut self.rng,
                    self.width,
                    self.height,
                    &self.config.drift,
                ));
            }
        }

        for p in &mut self.particles {
            p.bucket = self.palette.index_for(p.intensity);
        }
        if let Some(buckets) = &mut self.buckets {
            buckets.rebuild(&self.particles);
        }

        log::info!(
            "created {} squares for area {} ({}x{})",
            self.particles.len(),
            self.width * self.height,
            self.width,
            self.height
        );
    }

    /// Advance every square by `dt` milliseconds.
    pub fn tick(&mut self, dt: f64, cursor: Option<DVec2>) {
        let features = self.config.features;
        let model = features.intensity_model();
        let (min, max) = self.config.intensity_range();
        let field = Field {
            width: self.width,
            height: self.height,
            cursor,
            action_radius: self.action_radius.get(self.width, self.height),
        };

        for (slot, p) in self.particles.iter_mut().enumerate() {
            if features.drift_enabled {
                p.drift(dt, &field, &self.config.drift, features.cursor_gravity_enabled);
            }
            let changed = match model {
                IntensityModel::PingPong => p.pulse(dt, min, max),
                IntensityModel::Flicker => p.flicker(
                    dt,
                    &field,
                    &self.config.flicker,
                    features.cursor_flicker_enabled,
                    &mut self.rng,
                ),
            };
            if changed {
                let next = self.palette.index_for(p.intensity);
                match &mut self.buckets {
                    Some(buckets) => {
                        buckets.move_if_changed(slot, &mut p.bucket, next);
                    }
                    None => p.bucket = next,
                }
            }
        }
    }

    /// Repaint the whole surface.
    pub fn render<S: Surface + ?Sized>(&self, surface: &mut S) {
        match &self.buckets {
            Some(buckets) => render::draw_bucketed(
                surface,
                self.width,
                self.height,
                &self.particles,
                buckets,
                &self.palette,
            ),
            None => render::draw_direct(
                surface,
                self.width,
                self.height,
                &self.particles,
                &self.palette,
            ),
        }
    }

    /// One animation frame: update, then repaint.
    pub fn step<S: Surface + ?Sized>(&mut self, dt: f64, cursor: Option<DVec2>, surface: &mut S) {
        self.tick(dt, cursor);
        self.render(surface);
    }

    pub fn config(&self) -> &SimulationConfig {
        &self.config
    }

    pub fn palette(&self) -> &Palette {
        &self.palette
    }

    pub fn particles(&self) -> &[Particle] {
        &self.particles
    }

    pub fn buckets(&self) -> Option<&ColorBuckets> {
        self.buckets.as_ref()
    }

    pub fn size_sequence(&self) -> &SizeSequence {
        &self.sizes
    }

    pub fn dimensions(&self) -> (f64, f64) {
        (self.width, self.height)
    }

    pub fn particle_count(&self) -> usize {
        self.particles.len()
    }
}

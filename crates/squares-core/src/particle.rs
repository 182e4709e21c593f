//! A single square and its per-tick update rules.
//!
//! Drift squares wander across a toroidal canvas and pulse their alpha back
//! and forth; flicker squares sit on a grid cell and light up at random.
//! Both report whether their intensity moved so the simulation can keep the
//! color buckets in sync.

use crate::config::{DriftParams, FlickerParams};
use glam::DVec2;
use rand::Rng;
use std::f64::consts::TAU;

#[derive(Clone, Debug, PartialEq)]
pub struct Particle {
    /// Top-left corner in canvas pixels.
    pub position: DVec2,
    pub size: f64,
    /// Pixels per millisecond.
    pub velocity: DVec2,
    /// Heading the square relaxes back to once the cursor lets go.
    pub origin_velocity: DVec2,
    pub intensity: f64,
    /// Intensity change per millisecond.
    pub intensity_speed: f64,
    /// Cached palette index, owned by the simulation.
    pub bucket: usize,
}

/// Shared per-tick surroundings: canvas bounds and cursor influence.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Field {
    pub width: f64,
    pub height: f64,
    pub cursor: Option<DVec2>,
    pub action_radius: f64,
}

impl Field {
    /// `1 - distance/radius` for points strictly inside the action radius.
    #[inline]
    pub fn proximity(&self, point: DVec2) -> Option<f64> {
        let cursor = self.cursor?;
        let radius = self.action_radius;
        let dist_sq = cursor.distance_squared(point);
        (dist_sq < radius * radius).then(|| 1.0 - dist_sq.sqrt() / radius)
    }
}

#[inline]
fn uniform<R: Rng + ?Sized>(rng: &mut R, min: f64, max: f64) -> f64 {
    min + rng.gen::<f64>() * (max - min)
}

#[inline]
fn random_sign<R: Rng + ?Sized>(rng: &mut R) -> f64 {
    if rng.gen_bool(0.5) {
        1.0
    } else {
        -1.0
    }
}

impl Particle {
    pub fn spawn_drifting<R: Rng + ?Sized>(
        rng: &mut R,
        width: f64,
        height: f64,
        params: &DriftParams,
    ) -> Self {
        let size = uniform(rng, params.min_size, params.max_size);
        let position = DVec2::new(
            rng.gen::<f64>() * (width - size).max(0.0),
            rng.gen::<f64>() * (height - size).max(0.0),
        );
        let intensity = uniform(rng, params.min_alpha, params.max_alpha);
        let heading = DVec2::from_angle(rng.gen::<f64>() * TAU);
        let velocity = heading * uniform(rng, params.min_speed, params.max_speed);
        let intensity_speed =
            random_sign(rng) * uniform(rng, params.alpha_min_speed, params.alpha_max_speed);
        Self {
            position,
            size,
            velocity,
            origin_velocity: velocity,
            intensity,
            intensity_speed,
            bucket: 0,
        }
    }

    /// A flicker square centered on a grid cell.
    pub fn spawn_cell<R: Rng + ?Sized>(
        rng: &mut R,
        center: DVec2,
        size: f64,
        params: &FlickerParams,
    ) -> Self {
        let intensity = if rng.gen::<f64>() < params.chance_low_brightness {
            0.0
        } else {
            rng.gen::<f64>() * rng.gen::<f64>()
        };
        let intensity_speed = uniform(rng, params.min_speed, params.max_speed) * random_sign(rng);
        Self {
            position: center - DVec2::splat(size * 0.5),
            size,
            velocity: DVec2::ZERO,
            origin_velocity: DVec2::ZERO,
            intensity,
            intensity_speed,
            bucket: 0,
        }
    }

    pub fn center(&self) -> DVec2 {
        self.position + DVec2::splat(self.size * 0.5)
    }

    /// Steer, move and wrap around the canvas edges.
    pub fn drift(&mut self, dt: f64, field: &Field, params: &DriftParams, gravity: bool) {
        let mut attracted = false;
        if gravity {
            if let Some(cursor) = field.cursor {
                let to_cursor = cursor - self.position;
                let dist_sq = to_cursor.length_squared();
                let radius = field.action_radius;
                if dist_sq < radius * radius && dist_sq > 0.0 {
                    let distance = dist_sq.sqrt();
                    let force = (1.0 - distance / radius) * params.gravity * dt;
                    self.velocity += to_cursor / distance * force;

                    let speed_sq = self.velocity.length_squared();
                    let max = params.max_gravity_speed;
                    if speed_sq > max * max {
                        self.velocity *= max / speed_sq.sqrt();
                    }
                    attracted = true;
                }
            }
        }
        if !attracted {
            self.velocity = self.velocity * params.friction
                + (self.origin_velocity - self.velocity) * params.relax_rate;
        }

        self.position += self.velocity * dt;

        // Toroidal wrap: leave one edge, re-enter at the opposite one
        if self.position.x < -self.size {
            self.position.x = field.width;
        } else if self.position.x > field.width {
            self.position.x = -self.size;
        }
        if self.position.y < -self.size {
            self.position.y = field.height;
        } else if self.position.y > field.height {
            self.position.y = -self.size;
        }
    }

    /// Ping-pong intensity between `min` and `max`: clamp first, then flip.
    pub fn pulse(&mut self, dt: f64, min: f64, max: f64) -> bool {
        let before = self.intensity;
        self.intensity += self.intensity_speed * dt;
        if self.intensity <= min {
            self.intensity = min;
            self.intensity_speed = self.intensity_speed.abs();
        } else if self.intensity >= max {
            self.intensity = max;
            self.intensity_speed = -self.intensity_speed.abs();
        }
        self.intensity != before
    }

    /// LCD-style flicker: rest dark, occasionally brighten, dim from the peak.
    pub fn flicker<R: Rng + ?Sized>(
        &mut self,
        dt: f64,
        field: &Field,
        params: &FlickerParams,
        cursor_aware: bool,
        rng: &mut R,
    ) -> bool {
        let before = self.intensity;

        let mut stay_dark = params.chance_low_brightness;
        let mut speed_multiplier = 1.0;
        if cursor_aware {
            if let Some(proximity) = field.proximity(self.center()) {
                stay_dark *= 1.0 - proximity;
                speed_multiplier = 1.0 + (params.hover_speed_rate - 1.0) * proximity;
            }
        }

        if self.intensity <= 0.0 {
            self.intensity = 0.0;
            if rng.gen::<f64>() < stay_dark {
                self.intensity_speed = 0.0;
            } else {
                self.intensity_speed =
                    uniform(rng, params.min_speed, params.max_speed).abs() * speed_multiplier;
                self.intensity += self.intensity_speed * dt;
            }
        } else if self.intensity >= 1.0 {
            self.intensity = 1.0;
            self.intensity_speed =
                -uniform(rng, params.min_speed, params.max_speed).abs() * speed_multiplier;
            self.intensity += self.intensity_speed * dt;
        } else {
            self.intensity += self.intensity_speed * dt;
        }

        self.intensity != before
    }
}

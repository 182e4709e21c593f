//! Variant presets and the unified configuration driving one simulation.
//!
//! The four backgrounds share a single particle/simulation implementation;
//! what differs between them is captured by [`Features`] plus the per-model
//! parameter blocks below.

use crate::constants::*;
use crate::error::ConfigError;
use std::fmt;
use std::str::FromStr;

/// The four shipped backgrounds.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Variant {
    /// Squares drift and pulse, no pointer interaction.
    Drift,
    /// Drift with squares attracted toward the cursor.
    #[default]
    Gravity,
    /// LCD-style grid whose cells light up at random.
    Flicker,
    /// LCD grid that shimmers faster around the cursor.
    CursorFlicker,
}

impl Variant {
    pub const ALL: [Variant; 4] = [
        Variant::Drift,
        Variant::Gravity,
        Variant::Flicker,
        Variant::CursorFlicker,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Variant::Drift => "drift",
            Variant::Gravity => "gravity",
            Variant::Flicker => "flicker",
            Variant::CursorFlicker => "cursor-flicker",
        }
    }

    pub fn config(self) -> SimulationConfig {
        match self {
            Variant::Drift => SimulationConfig::drift(),
            Variant::Gravity => {
                let base = SimulationConfig::drift();
                SimulationConfig {
                    features: Features {
                        cursor_gravity_enabled: true,
                        ..base.features
                    },
                    ..base
                }
            }
            Variant::Flicker => SimulationConfig::flicker(),
            Variant::CursorFlicker => {
                let base = SimulationConfig::flicker();
                SimulationConfig {
                    features: Features {
                        cursor_flicker_enabled: true,
                        ..base.features
                    },
                    drift: base.drift,
                    flicker: FlickerParams {
                        max_speed: HOVER_BRIGHTNESS_MAX_SPEED,
                        chance_low_brightness: HOVER_CHANCE_LOW_BRIGHTNESS,
                        ..base.flicker
                    },
                    palette: PaletteParams {
                        bright: HOVER_BRIGHT_RGB,
                        ..base.palette
                    },
                }
            }
        }
    }
}

impl fmt::Display for Variant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Variant {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "drift" | "plain" => Ok(Variant::Drift),
            "gravity" | "cursor" => Ok(Variant::Gravity),
            "flicker" | "lcd" => Ok(Variant::Flicker),
            "cursor-flicker" | "lcd-cursor" => Ok(Variant::CursorFlicker),
            _ => Err(ConfigError::UnknownVariant(s.to_string())),
        }
    }
}

/// Behavior switches; each variant is one combination of them.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Features {
    pub drift_enabled: bool,
    pub cursor_gravity_enabled: bool,
    pub bucketed_rendering_enabled: bool,
    pub grid_placement_enabled: bool,
    pub cursor_flicker_enabled: bool,
}

/// How a particle's intensity evolves each tick.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum IntensityModel {
    /// Alpha bounces between its bounds.
    PingPong,
    /// Brightness rests at 0 and lights up at random.
    Flicker,
}

impl Features {
    pub fn intensity_model(&self) -> IntensityModel {
        if self.grid_placement_enabled {
            IntensityModel::Flicker
        } else {
            IntensityModel::PingPong
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct DriftParams {
    pub min_size: f64,
    pub max_size: f64,
    pub min_alpha: f64,
    pub max_alpha: f64,
    pub min_speed: f64,
    pub max_speed: f64,
    pub alpha_min_speed: f64,
    pub alpha_max_speed: f64,
    pub density_factor: f64,
    pub action_radius_rate: f64,
    pub gravity: f64,
    pub max_gravity_speed: f64,
    pub friction: f64,
    pub relax_rate: f64,
}

impl Default for DriftParams {
    fn default() -> Self {
        Self {
            min_size: DRIFT_MIN_SIZE,
            max_size: DRIFT_MAX_SIZE,
            min_alpha: DRIFT_MIN_ALPHA,
            max_alpha: DRIFT_MAX_ALPHA,
            min_speed: DRIFT_MIN_SPEED,
            max_speed: DRIFT_MAX_SPEED,
            alpha_min_speed: ALPHA_MIN_SPEED,
            alpha_max_speed: ALPHA_MAX_SPEED,
            density_factor: DENSITY_FACTOR,
            action_radius_rate: GRAVITY_ACTION_RADIUS_RATE,
            gravity: CURSOR_GRAVITY,
            max_gravity_speed: MAX_GRAVITY_SPEED,
            friction: FRICTION,
            relax_rate: RELAX_RATE,
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct FlickerParams {
    pub max_size: f64,
    pub cell_padding: f64,
    pub size_weights: &'static [(u32, usize)],
    pub min_speed: f64,
    pub max_speed: f64,
    pub chance_low_brightness: f64,
    pub action_radius_rate: f64,
    pub hover_speed_rate: f64,
}

impl FlickerParams {
    /// Grid cell pitch; one square per cell at most.
    pub fn cell_pitch(&self) -> f64 {
        self.max_size + self.cell_padding
    }
}

impl Default for FlickerParams {
    fn default() -> Self {
        Self {
            max_size: FLICKER_MAX_SIZE,
            cell_padding: FLICKER_CELL_PADDING,
            size_weights: FLICKER_SIZE_WEIGHTS,
            min_speed: BRIGHTNESS_MIN_SPEED,
            max_speed: BRIGHTNESS_MAX_SPEED,
            chance_low_brightness: CHANCE_LOW_BRIGHTNESS,
            action_radius_rate: HOVER_ACTION_RADIUS_RATE,
            hover_speed_rate: HOVER_BRIGHTNESS_SPEED_RATE,
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct PaletteParams {
    pub steps: usize,
    pub dim: [u8; 3],
    pub bright: [u8; 3],
    /// CSS color painted behind the canvas.
    pub background_css: &'static str,
}

#[derive(Clone, Debug, PartialEq)]
pub struct SimulationConfig {
    pub features: Features,
    pub drift: DriftParams,
    pub flicker: FlickerParams,
    pub palette: PaletteParams,
}

impl SimulationConfig {
    fn drift() -> Self {
        Self {
            features: Features {
                drift_enabled: true,
                bucketed_rendering_enabled: true,
                ..Features::default()
            },
            drift: DriftParams::default(),
            flicker: FlickerParams::default(),
            palette: PaletteParams {
                steps: INTENSITY_STEPS,
                dim: DRIFT_BACKGROUND_RGB,
                bright: DRIFT_FOREGROUND_RGB,
                background_css: DRIFT_BACKGROUND_CSS,
            },
        }
    }

    fn flicker() -> Self {
        Self {
            features: Features {
                bucketed_rendering_enabled: true,
                grid_placement_enabled: true,
                ..Features::default()
            },
            drift: DriftParams::default(),
            flicker: FlickerParams::default(),
            palette: PaletteParams {
                steps: INTENSITY_STEPS,
                dim: FLICKER_DARK_RGB,
                bright: FLICKER_BRIGHT_RGB,
                background_css: FLICKER_BACKGROUND_CSS,
            },
        }
    }

    /// Intensity bounds mapped onto the palette.
    pub fn intensity_range(&self) -> (f64, f64) {
        match self.features.intensity_model() {
            IntensityModel::PingPong => (self.drift.min_alpha, self.drift.max_alpha),
            IntensityModel::Flicker => (0.0, 1.0),
        }
    }

    pub fn action_radius_rate(&self) -> f64 {
        match self.features.intensity_model() {
            IntensityModel::PingPong => self.drift.action_radius_rate,
            IntensityModel::Flicker => self.flicker.action_radius_rate,
        }
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        let f = &self.features;
        if f.cursor_gravity_enabled && !f.drift_enabled {
            return Err(ConfigError::FeatureConflict {
                feature: "cursor gravity",
                requires: "drift",
            });
        }
        if f.cursor_flicker_enabled && !f.grid_placement_enabled {
            return Err(ConfigError::FeatureConflict {
                feature: "cursor flicker",
                requires: "grid placement",
            });
        }
        if self.palette.steps < 2 {
            return Err(ConfigError::TooFewSteps(self.palette.steps));
        }

        match f.intensity_model() {
            IntensityModel::PingPong => {
                let d = &self.drift;
                range("size", d.min_size, d.max_size)?;
                range("alpha", d.min_alpha, d.max_alpha)?;
                unit("min alpha", d.min_alpha)?;
                unit("max alpha", d.max_alpha)?;
                range("speed", d.min_speed, d.max_speed)?;
                range("alpha speed", d.alpha_min_speed, d.alpha_max_speed)?;
                positive("density factor", d.density_factor)?;
                positive("min size", d.min_size)?;
                if d.max_alpha <= d.min_alpha {
                    return Err(ConfigError::InvalidRange {
                        name: "alpha",
                        min: d.min_alpha,
                        max: d.max_alpha,
                    });
                }
                if f.cursor_gravity_enabled {
                    unit("action radius rate", d.action_radius_rate)?;
                    positive("max gravity speed", d.max_gravity_speed)?;
                }
            }
            IntensityModel::Flicker => {
                let fl = &self.flicker;
                positive("cell pitch", fl.cell_pitch())?;
                range("brightness speed", fl.min_speed, fl.max_speed)?;
                unit("stay-dark chance", fl.chance_low_brightness)?;
                if !fl.size_weights.iter().any(|&(size, w)| size > 0 && w > 0) {
                    return Err(ConfigError::NoDrawableSize);
                }
                if f.cursor_flicker_enabled {
                    unit("action radius rate", fl.action_radius_rate)?;
                    positive("hover speed rate", fl.hover_speed_rate)?;
                }
            }
        }
        Ok(())
    }
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Variant::default().config()
    }
}

fn range(name: &'static str, min: f64, max: f64) -> Result<(), ConfigError> {
    if min.is_finite() && max.is_finite() && min <= max {
        Ok(())
    } else {
        Err(ConfigError::InvalidRange { name, min, max })
    }
}

fn positive(name: &'static str, value: f64) -> Result<(), ConfigError> {
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        Err(ConfigError::NotPositive { name, value })
    }
}

fn unit(name: &'static str, value: f64) -> Result<(), ConfigError> {
    if (0.0..=1.0).contains(&value) {
        Ok(())
    } else {
        Err(ConfigError::NotUnit { name, value })
    }
}

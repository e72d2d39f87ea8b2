//! Tunable constants for a viewer session, with one-shot validation.
//!
//! The map itself is not configured here: levels are built from static
//! tables and checked when the [`Level`](crate::world::Level) is assembled.

use crate::engine::Screen;
use crate::renderer::Rgba;
use crate::sim::MoveTuning;
use crate::world::{Camera, Level, MapError};

/// Everything that can be rejected before the first frame.
#[derive(Debug, thiserror::Error, PartialEq)]
pub enum ConfigError {
    #[error("screen must be at least 1×1 (got {0}×{1})")]
    Screen(usize, usize),

    #[error("field of view must lie strictly between 0° and 180° (got {0}°)")]
    Fov(f64),

    /// A speed, sensitivity or multiplier that is negative, zero or NaN.
    #[error("`{name}` must be a positive finite number (got {value})")]
    Tuning { name: &'static str, value: f64 },

    #[error("frame-rate cap must be at least 1")]
    FpsCap,

    #[error(transparent)]
    Map(#[from] MapError),
}

#[derive(Clone, Debug, PartialEq)]
pub struct Config {
    pub width: usize,
    pub height: usize,
    /// Horizontal field of view in degrees.
    pub fov_deg: f64,
    pub movement: MoveTuning,
    /// Upper bound on presented frames per second. Advisory.
    pub fps_cap: u32,
    /// Cast columns on the rayon pool.
    pub parallel: bool,
    /// Colour of rows above and below the walls.
    pub background: Rgba,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            width: 1280,
            height: 720,
            fov_deg: 90.0,
            movement: MoveTuning::default(),
            fps_cap: 120,
            parallel: false,
            background: 0,
        }
    }
}

impl Config {
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.width == 0 || self.height == 0 {
            return Err(ConfigError::Screen(self.width, self.height));
        }
        if !(self.fov_deg > 0.0 && self.fov_deg < 180.0) {
            return Err(ConfigError::Fov(self.fov_deg));
        }
        let m = &self.movement;
        for (name, value) in [
            ("speed", m.speed),
            ("rotation_speed", m.rotation_speed),
            ("run_multiplier", m.run_multiplier),
        ] {
            if !(value.is_finite() && value > 0.0) {
                return Err(ConfigError::Tuning { name, value });
            }
        }
        if self.fps_cap == 0 {
            return Err(ConfigError::FpsCap);
        }
        Ok(())
    }

    /// Validate, build the built-in level and place the camera on its spawn
    /// cell. Everything that can fail at startup fails here.
    pub fn prepare(&self) -> Result<(Level, Camera), ConfigError> {
        self.validate()?;
        let level = Level::reference()?;
        let camera = level.spawn_camera(self.fov());
        Ok((level, camera))
    }

    #[inline]
    pub fn screen(&self) -> Screen {
        Screen::new(self.width, self.height)
    }

    #[inline]
    pub fn fov(&self) -> f64 {
        self.fov_deg.to_radians()
    }
}

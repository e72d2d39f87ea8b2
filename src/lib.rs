//! Grid raycaster.
//!
//! One ray per screen column is walked through a cell map with DDA, the hit
//! is projected to a fisheye-free wall stripe and shaded by distance and
//! face orientation. The same map drives all-or-nothing collision for the
//! camera.

pub mod config;
pub mod engine;
pub mod renderer;
pub mod sim;
pub mod world;

pub use config::{Config, ConfigError};

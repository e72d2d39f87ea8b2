use glam::DVec2;
use tracing::info;

use super::grid::{GridMap, MapError, WallColors};
use super::Camera;

/// A grid together with the colours its walls are drawn in.
///
/// Built only through [`Level::new`], so every wall code is known to have a
/// colour by the time a frame is rendered.
#[derive(Clone, Debug)]
pub struct Level {
    grid: GridMap,
    colors: WallColors,
    spawn: DVec2,
}

impl Level {
    pub fn new(grid: GridMap, colors: WallColors) -> Result<Self, MapError> {
        grid.validate(&colors)?;
        let spawn = grid.spawn_point().ok_or(MapError::NoSpawn)?;
        info!(
            width = grid.width(),
            height = grid.height(),
            spawn_x = spawn.x,
            spawn_y = spawn.y,
            "level ready"
        );
        Ok(Self {
            grid,
            colors,
            spawn,
        })
    }

    /// The built-in 8×8 map with the reference palette.
    pub fn reference() -> Result<Self, MapError> {
        Self::new(GridMap::reference(), WallColors::reference())
    }

    #[inline]
    pub fn grid(&self) -> &GridMap {
        &self.grid
    }

    #[inline]
    pub fn colors(&self) -> &WallColors {
        &self.colors
    }

    /// Centre of the spawn cell.
    #[inline]
    pub fn spawn(&self) -> DVec2 {
        self.spawn
    }

    /// Camera placed on the spawn cell, facing angle 0.
    pub fn spawn_camera(&self, fov: f64) -> Camera {
        Camera::new(self.spawn, 0.0, fov)
    }
}

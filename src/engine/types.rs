use glam::IVec2;

/// Constants that depend on the *frame-buffer*, not on the map.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Screen {
    pub w: usize,
    pub h: usize,
}

impl Screen {
    pub fn new(w: usize, h: usize) -> Self {
        Self { w, h }
    }

    /// Camera-space offset of column `x`: −1 at the left edge, 0 in the
    /// middle, approaching +1 at the right edge.
    #[inline]
    pub fn camera_x(&self, x: usize) -> f64 {
        2.0 * x as f64 / self.w as f64 - 1.0
    }
}

/// Which family of grid lines the ray crossed last before hitting a wall.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Side {
    /// Crossed a vertical line (x changed); the face points east or west.
    AxisX,
    /// Crossed a horizontal line (y changed); the face points north or south.
    AxisY,
}

/// Where a ray stopped.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Hit {
    /// First non-open cell entered. May lie outside the grid.
    pub cell: IVec2,
    pub side: Side,
    /// Per-axis step sign used during the walk, each ±1.
    pub step: IVec2,
    /// Number of cell boundaries crossed.
    pub steps: u32,
}

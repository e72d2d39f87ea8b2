// Static cell map the ray caster and the collision test both read.
// Cells are addressed with signed coordinates so callers can probe one step
// past the border; anything outside the grid reads as solid.

use glam::{DVec2, IVec2};

use crate::renderer::Rgba;

/// Raw per-cell value stored in the grid.
pub type CellCode = u8;

/// Walkable floor.
pub const OPEN: CellCode = 0;

/// Camera start marker. Passable for movement and transparent to rays.
pub const SPAWN: CellCode = 6;

/// Things that can be wrong with a grid / colour table pair.
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum MapError {
    /// Either dimension is zero.
    #[error("grid must be at least 1×1 (got {width}×{height})")]
    Empty { width: usize, height: usize },

    /// `width * height` disagrees with the number of cells supplied.
    #[error("grid is {width}×{height} but {len} cells were supplied")]
    DimensionMismatch {
        width: usize,
        height: usize,
        len: usize,
    },

    /// No cell carries the spawn code, so the camera has nowhere to start.
    #[error("grid has no spawn cell (code {})", SPAWN)]
    NoSpawn,

    /// A wall code has no entry in the colour table.
    #[error("wall code {code} at ({x}, {y}) has no entry in the colour table")]
    MissingWallColor { code: CellCode, x: usize, y: usize },
}

/// Base colour for every wall code, indexed by code.
///
/// Entry 0 is never a wall (code 0 is open floor), so it doubles as the
/// colour of the implicit wall beyond the grid edge.
#[derive(Clone, Debug, PartialEq)]
pub struct WallColors(pub Vec<Rgba>);

impl WallColors {
    /// Colour for `code`, if the table has one.
    #[inline]
    pub fn get(&self, code: CellCode) -> Option<Rgba> {
        self.0.get(code as usize).copied()
    }

    /// Colour drawn for rays that leave the grid.
    #[inline]
    pub fn boundary(&self) -> Rgba {
        self.0.first().copied().unwrap_or(0)
    }

    /// The reference palette: blue, green and cyan walls over a black edge.
    pub fn reference() -> Self {
        WallColors(vec![
            0x00_00_00_00, // outside the grid
            0x00_00_00_FF, // 1: blue
            0x00_00_FF_00, // 2: green
            0x00_00_FF_FF, // 3: cyan
            0x00_00_FF_FF, // 4: cyan
        ])
    }
}

/// Row-major grid of cell codes. Immutable once built.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GridMap {
    width: usize,
    height: usize,
    cells: Vec<CellCode>,
}

#[rustfmt::skip]
const REFERENCE_CELLS: [CellCode; 64] = [
    1, 1, 1, 1, 1, 1, 1, 1,
    1, 0, 0, 0, 0, 0, 0, 1,
    1, 0, 0, 0, 0, 0, 0, 1,
    1, 0, 0, 3, 3, 0, 0, 1,
    1, 0, 0, 3, 3, 0, 0, 1,
    1, 0, 0, 0, 0, 0, 0, 1,
    6, 0, 0, 0, 0, 0, 0, 1,
    1, 1, 2, 1, 1, 1, 1, 1,
];

impl GridMap {
    /// Build a `width × height` grid from row-major `cells`.
    pub fn new(width: usize, height: usize, cells: Vec<CellCode>) -> Result<Self, MapError> {
        if width == 0 || height == 0 {
            return Err(MapError::Empty { width, height });
        }
        if width.checked_mul(height) != Some(cells.len()) {
            return Err(MapError::DimensionMismatch {
                width,
                height,
                len: cells.len(),
            });
        }
        Ok(Self {
            width,
            height,
            cells,
        })
    }

    /// The built-in 8×8 room with a central pillar and a spawn cell in the
    /// west wall.
    pub fn reference() -> Self {
        Self {
            width: 8,
            height: 8,
            cells: REFERENCE_CELLS.to_vec(),
        }
    }

    #[inline]
    pub fn width(&self) -> usize {
        self.width
    }

    #[inline]
    pub fn height(&self) -> usize {
        self.height
    }

    #[inline]
    fn index(&self, x: i32, y: i32) -> Option<usize> {
        if x < 0 || y < 0 || x as usize >= self.width || y as usize >= self.height {
            return None;
        }
        Some(y as usize * self.width + x as usize)
    }

    /// Raw code at `(x, y)`, or `None` outside the grid.
    #[inline]
    pub fn code_at(&self, x: i32, y: i32) -> Option<CellCode> {
        self.index(x, y).map(|i| self.cells[i])
    }

    /// `true` if the cell can be walked into and seen through.
    ///
    /// Out-of-bounds cells are always closed, which is what bounds the DDA
    /// walk and keeps the camera inside the grid.
    #[inline]
    pub fn is_open(&self, x: i32, y: i32) -> bool {
        matches!(self.code_at(x, y), Some(OPEN | SPAWN))
    }

    /// Same test for a continuous point, using the cell that contains it.
    #[inline]
    pub fn is_open_at(&self, p: DVec2) -> bool {
        let cell = p.floor().as_ivec2();
        self.is_open(cell.x, cell.y)
    }

    /// Centre of the first spawn cell in row-major order.
    pub fn spawn_point(&self) -> Option<DVec2> {
        let i = self.cells.iter().position(|&c| c == SPAWN)?;
        let cell = IVec2::new((i % self.width) as i32, (i / self.width) as i32);
        Some(cell.as_dvec2() + DVec2::splat(0.5))
    }

    /// Check every wall code against `colors`. Run once when a level is
    /// assembled so the renderer never has to handle a missing entry.
    pub fn validate(&self, colors: &WallColors) -> Result<(), MapError> {
        for (i, &code) in self.cells.iter().enumerate() {
            if code == OPEN || code == SPAWN {
                continue;
            }
            if colors.get(code).is_none() {
                return Err(MapError::MissingWallColor {
                    code,
                    x: i % self.width,
                    y: i / self.width,
                });
            }
        }
        Ok(())
    }

    /// Iterate `(x, y, code)` over every cell, row by row.
    pub fn cells(&self) -> impl Iterator<Item = (usize, usize, CellCode)> + '_ {
        self.cells
            .iter()
            .enumerate()
            .map(|(i, &c)| (i % self.width, i / self.width, c))
    }
}

//! Grid traversal by Digital Differential Analysis.
//!
//! The ray is walked one grid-line crossing at a time, always taking the
//! axis whose next crossing is nearer, until it enters a cell the map
//! reports as closed. Out-of-bounds cells are closed, so the walk always
//! ends within `width + height` crossings of any in-grid start.

use glam::{DVec2, IVec2};

use super::types::{Hit, Side};
use crate::world::GridMap;

/// Ray length needed to cross one full cell along each axis.
///
/// `|dir| / |along|`, with the length taken by `hypot` so tiny components
/// do not underflow to `0 / 0`. A zero component never crosses that axis,
/// so its delta is infinite.
#[inline]
fn delta_dist(dir: DVec2) -> DVec2 {
    let axis = |along: f64, across: f64| {
        if along == 0.0 {
            f64::INFINITY
        } else {
            along.hypot(across) / along.abs()
        }
    };
    DVec2::new(axis(dir.x, dir.y), axis(dir.y, dir.x))
}

/// Cast a ray from `origin` along `dir` (need not be normalised).
pub fn cast(grid: &GridMap, origin: DVec2, dir: DVec2) -> Hit {
    let mut map = origin.floor().as_ivec2();
    let delta = delta_dist(dir);

    /* step direction and ray length to the first grid line on each axis */
    let (step_x, mut side_x) = if dir.x < 0.0 {
        (-1, (origin.x - map.x as f64) * delta.x)
    } else {
        (1, (map.x as f64 + 1.0 - origin.x) * delta.x)
    };
    let (step_y, mut side_y) = if dir.y < 0.0 {
        (-1, (origin.y - map.y as f64) * delta.y)
    } else {
        (1, (map.y as f64 + 1.0 - origin.y) * delta.y)
    };

    let mut steps = 0u32;
    let side = loop {
        let side = if side_x < side_y {
            side_x += delta.x;
            map.x += step_x;
            Side::AxisX
        } else {
            side_y += delta.y;
            map.y += step_y;
            Side::AxisY
        };
        steps += 1;

        // spawn cells read as open, so they never stop the ray
        if !grid.is_open(map.x, map.y) {
            break side;
        }
    };

    Hit {
        cell: map,
        side,
        step: IVec2::new(step_x, step_y),
        steps,
    }
}

//! Cell-granular collision: a move either lands exactly where it was aimed
//! or does not happen at all. There is no sliding along walls and no
//! partial step.

use glam::DVec2;
use tracing::debug;

use crate::world::GridMap;

/// What the caller gets back.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct MoveResult {
    pub pos: DVec2,     // final XY
    pub hit_wall: bool, // candidate was rejected
}

/// Try to move from `pos` by `delta`.
///
/// The candidate is accepted iff the cell containing it (by `floor`) is
/// open; spawn cells count as open, anything outside the grid does not.
pub fn try_move(grid: &GridMap, pos: DVec2, delta: DVec2) -> MoveResult {
    let target = pos + delta;
    if grid.is_open_at(target) {
        MoveResult {
            pos: target,
            hit_wall: false,
        }
    } else {
        debug!(
            from_x = pos.x,
            from_y = pos.y,
            to_x = target.x,
            to_y = target.y,
            "move blocked"
        );
        MoveResult {
            pos,
            hit_wall: true,
        }
    }
}

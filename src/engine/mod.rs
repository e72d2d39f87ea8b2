//! Per-column ray casting: DDA traversal of the grid followed by
//! projection of the hit into a shaded screen stripe.

pub mod dda;
pub mod projection;
mod types;

pub use projection::Stripe;
pub use types::{Hit, Screen, Side};

use crate::world::{Camera, Level};

/// Cast and project the ray for screen column `x`.
///
/// Columns share no state, so any subset of them can be computed in any
/// order, or concurrently.
#[inline]
pub fn cast_column(level: &Level, camera: &Camera, screen: Screen, x: usize) -> Stripe {
    let origin = camera.pos();
    let dir = camera.ray_dir(screen.camera_x(x));
    let hit = dda::cast(level.grid(), origin, dir);
    let code = level.grid().code_at(hit.cell.x, hit.cell.y);
    projection::project(&hit, origin, dir, code, level.colors(), screen.h)
}

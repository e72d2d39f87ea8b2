use glam::DVec2;

use crate::{
    engine::types::{Hit, Side},
    renderer::Rgba,
    world::{CellCode, WallColors},
};

/// Distance at which walls fade to black.
const FADE_DISTANCE: f64 = 10.0;

/// Extra darkening per face orientation. Purely stylistic: Y-side faces
/// come out darker than X-side faces so corners read clearly.
const X_SIDE_SHADE: f64 = 0.75;
const Y_SIDE_SHADE: f64 = 0.5;

/// One screen column's worth of wall: a solid run `draw_start..draw_end`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Stripe {
    pub perp_dist: f64,
    pub draw_start: usize,
    pub draw_end: usize,
    pub color: Rgba,
    pub side: Side,
}

impl Stripe {
    /// Rows actually painted.
    #[inline]
    pub fn rows(&self) -> std::ops::Range<usize> {
        self.draw_start..self.draw_end
    }
}

/// Depth of the hit measured along the view axis, not along the ray.
///
/// Uses the near face of the hit cell on the crossed axis divided by the
/// ray's component on that axis. Euclidean distance here would bend straight
/// walls into a fisheye.
#[inline]
pub fn perpendicular_distance(hit: &Hit, origin: DVec2, dir: DVec2) -> f64 {
    match hit.side {
        Side::AxisX => {
            (hit.cell.x as f64 - origin.x + (1 - hit.step.x) as f64 / 2.0) / dir.x
        }
        Side::AxisY => {
            (hit.cell.y as f64 - origin.y + (1 - hit.step.y) as f64 / 2.0) / dir.y
        }
    }
}

/// Vertical extent `[start, end)` of a wall at `perp_dist` on a screen
/// `height` rows tall.
///
/// ```text
/// line  = trunc(h / d)
/// start = max(h/2 - line/2, 0)
/// end   = min(h/2 + line/2, h - 1)
/// ```
pub fn stripe_extent(perp_dist: f64, height: usize) -> (usize, usize) {
    if !(perp_dist.is_finite() && perp_dist > 0.0) || height == 0 {
        return (0, 0);
    }
    let h = height as i32;
    // saturating float → int cast caps walls the camera is pressed against
    let line = (height as f64 / perp_dist) as i32;
    let start = (h / 2 - line / 2).max(0);
    let end = (h / 2).saturating_add(line / 2).min(h - 1);
    (start as usize, end as usize)
}

/// Brightness in `[0, 1]` for a wall at `perp_dist` seen on `side`.
#[inline]
pub fn shade_factor(perp_dist: f64, side: Side) -> f64 {
    let fade = (1.0 - perp_dist / FADE_DISTANCE).clamp(0.0, 1.0);
    match side {
        Side::AxisX => fade * X_SIDE_SHADE,
        Side::AxisY => fade * Y_SIDE_SHADE,
    }
}

/// Scale every byte of `color` by `factor`, truncating toward zero.
#[inline]
pub fn shade(color: Rgba, factor: f64) -> Rgba {
    let scale = |shift: u32| ((((color >> shift) & 0xFF) as f64 * factor) as u32) << shift;
    scale(24) | scale(16) | scale(8) | scale(0)
}

/// Turn a DDA hit into the stripe drawn for its column.
pub fn project(
    hit: &Hit,
    origin: DVec2,
    dir: DVec2,
    code: Option<CellCode>,
    colors: &WallColors,
    height: usize,
) -> Stripe {
    let perp_dist = perpendicular_distance(hit, origin, dir);
    let (draw_start, draw_end) = stripe_extent(perp_dist, height);

    // level validation guarantees an entry for every in-grid wall
    let base = match code {
        Some(code) => colors.get(code).unwrap_or_else(|| colors.boundary()),
        None => colors.boundary(),
    };

    Stripe {
        perp_dist,
        draw_start,
        draw_end,
        color: shade(base, shade_factor(perp_dist, hit.side)),
        side: hit.side,
    }
}

use glam::DVec2;

/// Viewer state in grid space.
///
/// * `pos` is in cell units; `(2.5, 1.5)` is the centre of cell `(2, 1)`.
/// * The facing angle turns clockwise with a +y-up reading of the grid, so
///   the cached basis is `(cos θ, −sin θ)`.
/// * Position has no public setter: only the movement integrator writes it,
///   after checking the destination cell.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Camera {
    pos: DVec2,
    angle: f64, // radians, unbounded
    fov: f64,   // horizontal FoV (radians)
    basis: DVec2,
}

impl Camera {
    /// Create a camera at `pos`, facing `angle`, with horizontal FoV `fov`.
    pub fn new(pos: DVec2, angle: f64, fov: f64) -> Self {
        Self {
            pos,
            angle,
            fov,
            basis: basis_for(angle),
        }
    }

    #[inline]
    pub fn pos(&self) -> DVec2 {
        self.pos
    }

    #[inline]
    pub fn angle(&self) -> f64 {
        self.angle
    }

    #[inline]
    pub fn fov(&self) -> f64 {
        self.fov
    }

    /*──────────────────────── derived vectors ───────────────────────*/

    /// Unit vector the camera looks along. Cached; refreshed by [`Camera::turn`].
    #[inline(always)]
    pub fn forward(&self) -> DVec2 {
        self.basis
    }

    /// Unit vector to the camera's right: `(x, y) -> (y, -x)`.
    #[inline(always)]
    pub fn right(&self) -> DVec2 {
        DVec2::new(self.basis.y, -self.basis.x)
    }

    /// Half-width of the camera plane at unit depth, `tan(fov / 2)`.
    ///
    /// 1.0 at the default 90°, where the ray for `camera_x = ±1` sits at
    /// exactly 45° off the forward axis.
    #[inline]
    pub fn plane_scale(&self) -> f64 {
        (self.fov * 0.5).tan()
    }

    /// Ray direction for screen-space offset `camera_x` in `[-1, 1]`.
    ///
    /// The forward component of every ray is 1, which is what lets the
    /// projector divide by the hit-axis component to get depth.
    #[inline]
    pub fn ray_dir(&self, camera_x: f64) -> DVec2 {
        self.forward() + self.right() * (camera_x * self.plane_scale())
    }

    /*──────────────────────── integrator hooks ──────────────────────*/

    /// Overwrite the position. Crate-private so that collision checks in
    /// `sim` stay the only way in.
    #[inline]
    pub(crate) fn set_pos(&mut self, pos: DVec2) {
        self.pos = pos;
    }

    /// Rotate by `delta` radians (positive = clockwise) and refresh the basis.
    pub(crate) fn turn(&mut self, delta: f64) {
        self.angle += delta;
        self.basis = basis_for(self.angle);
    }
}

#[inline]
fn basis_for(angle: f64) -> DVec2 {
    let (s, c) = angle.sin_cos();
    DVec2::new(c, -s)
}

/*====================================================================*/
/*                                Tests                                */
/*====================================================================*/
#[cfg(test)]
mod tests {
    use super::*;
    use std::f64::consts::{FRAC_PI_2, PI};

    #[test]
    fn forward_and_right_are_orthonormal() {
        let cam = Camera::new(DVec2::ZERO, 0.3, FRAC_PI_2);
        let f = cam.forward();
        let r = cam.right();
        assert!((f.length() - 1.0).abs() < 1e-12);
        assert!((r.length() - 1.0).abs() < 1e-12);
        assert!(f.dot(r).abs() < 1e-12);
    }

    #[test]
    fn angle_zero_looks_along_positive_x() {
        let cam = Camera::new(DVec2::ZERO, 0.0, FRAC_PI_2);
        assert_eq!(cam.forward(), DVec2::new(1.0, 0.0));
        assert_eq!(cam.ray_dir(0.0), DVec2::new(1.0, 0.0));
    }

    #[test]
    fn ninety_degree_plane_matches_unit_offsets() {
        let cam = Camera::new(DVec2::ZERO, 0.0, FRAC_PI_2);
        assert!((cam.plane_scale() - 1.0).abs() < 1e-12);
        // (c + s·x, s − c·x) with c = 1, s = 0
        let left = cam.ray_dir(-1.0);
        assert!((left - DVec2::new(1.0, 1.0)).length() < 1e-12);
    }

    #[test]
    fn turn_refreshes_cached_basis_without_wrapping() {
        let mut cam = Camera::new(DVec2::ZERO, 0.0, FRAC_PI_2);
        cam.turn(3.0 * PI);
        assert!((cam.angle() - 3.0 * PI).abs() < 1e-12);
        assert!((cam.forward() - DVec2::new(-1.0, 0.0)).length() < 1e-9);
    }
}

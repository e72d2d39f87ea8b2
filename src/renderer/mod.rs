//! Rendering abstraction layer.
//!
//! *The rest of the crate never touches a pixel buffer directly.*
//! A type implementing [`Renderer`] owns the frame, fills it from a
//! [`Level`] seen through a [`Camera`], and loans the finished buffer to a
//! caller-supplied closure.
//!
//! * The window layer stays outside: `minifb` in the binaries, nothing in
//!   tests.
//! * A helper blanket-impl [`RendererExt`] adds `draw_frame` so call-sites
//!   stay short.

use crate::world::{Camera, Level};

/// Pixel format of the software frame-buffer (0xAARRGGBB).
pub type Rgba = u32;

/// A renderer that owns an internal scratch buffer for the whole frame.
pub trait Renderer {
    /// (Re)allocate internal scratch for the requested resolution and clear it.
    fn begin_frame(&mut self, width: usize, height: usize);

    /// Cast one ray per column and paint the resulting wall stripes.
    fn draw_view(&mut self, level: &Level, camera: &Camera);

    /// Finish the frame and **loan** the finished buffer to `submit`.
    ///
    /// * `submit(&[Rgba], w, h)` is run exactly once per frame.
    /// * Software caller passes `|fb, w, h| window.update_with_buffer(fb, w, h)`.
    fn end_frame<F>(&mut self, submit: F)
    where
        F: FnOnce(&[Rgba], usize, usize);
}

/// Convenience blanket-impl with a one-liner `draw_frame` adaptor.
pub trait RendererExt: Renderer {
    fn draw_frame<F>(
        &mut self,
        width: usize,
        height: usize,
        level: &Level,
        camera: &Camera,
        submit: F,
    ) where
        F: FnOnce(&[Rgba], usize, usize),
    {
        self.begin_frame(width, height);
        self.draw_view(level, camera);
        self.end_frame(submit);
    }
}
impl<T: Renderer + ?Sized> RendererExt for T {}

/// Integer Bresenham line into a `w × h` buffer; off-screen pixels are skipped.
#[allow(clippy::too_many_arguments)]
pub fn draw_line(
    buf: &mut [Rgba],
    w: usize,
    h: usize,
    mut x0: i32,
    mut y0: i32,
    x1: i32,
    y1: i32,
    colour: Rgba,
) {
    let dx = (x1 - x0).abs();
    let dy = -(y1 - y0).abs();
    let sx = if x0 < x1 { 1 } else { -1 };
    let sy = if y0 < y1 { 1 } else { -1 };
    let mut err = dx + dy;

    loop {
        if (0..w as i32).contains(&x0) && (0..h as i32).contains(&y0) {
            buf[y0 as usize * w + x0 as usize] = colour;
        }
        if x0 == x1 && y0 == y1 {
            break;
        }
        let e2 = 2 * err;
        if e2 >= dy {
            err += dy;
            x0 += sx;
        }
        if e2 <= dx {
            err += dx;
            y0 += sy;
        }
    }
}

pub mod software;
pub use software::Software;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn horizontal_line_is_inclusive() {
        let mut buf = vec![0; 5 * 3];
        draw_line(&mut buf, 5, 3, 1, 1, 3, 1, 7);
        assert_eq!(&buf[5..10], &[0, 7, 7, 7, 0]);
    }

    #[test]
    fn clipped_line_does_not_panic() {
        let mut buf = vec![0; 4 * 4];
        draw_line(&mut buf, 4, 4, -3, -3, 6, 6, 1);
        assert_eq!(buf.iter().filter(|&&p| p == 1).count(), 4);
    }
}

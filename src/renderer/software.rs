//! ---------------------------------------------------------------------------
//! Software (CPU) column renderer
//!
//! * Fills a `Vec<u32>` frame-buffer in **0xAARRGGBB** format, row-major.
//! * One ray per screen column; each column becomes a single solid stripe.
//! * Columns are independent, so the optional parallel path computes all
//!   stripes with rayon, then fills disjoint rows. Both paths produce the
//!   same pixels.
//! ---------------------------------------------------------------------------

use rayon::prelude::*;
use tracing::trace;

use crate::{
    engine::{Screen, Stripe, cast_column},
    renderer::{Renderer, Rgba, draw_line},
    world::{Camera, Level},
};

/// Raycasting column renderer.
pub struct Software {
    scratch: Vec<Rgba>,
    /* per-column results of the last frame */
    stripes: Vec<Stripe>,
    width: usize,
    height: usize,
    background: Rgba,
    parallel: bool,
}

impl Default for Software {
    fn default() -> Self {
        Self::new(0, false)
    }
}

impl Software {
    /// Renderer clearing to `background`, optionally casting on the rayon pool.
    pub fn new(background: Rgba, parallel: bool) -> Self {
        Self {
            scratch: Vec::new(),
            stripes: Vec::new(),
            width: 0,
            height: 0,
            background,
            parallel,
        }
    }

    /// Stripes computed by the last `draw_view`, indexed by column.
    #[inline]
    pub fn stripes(&self) -> &[Stripe] {
        &self.stripes
    }

    /// The frame as it stands.
    #[inline]
    pub fn pixels(&self) -> &[Rgba] {
        &self.scratch
    }

    #[inline]
    fn screen(&self) -> Screen {
        Screen::new(self.width, self.height)
    }

    /// Small `+` at the screen centre, drawn over whatever is there.
    pub fn draw_crosshair(&mut self, half_len: i32, colour: Rgba) {
        let (cx, cy) = ((self.width / 2) as i32, (self.height / 2) as i32);
        let (w, h) = (self.width, self.height);
        draw_line(&mut self.scratch, w, h, cx - half_len, cy, cx + half_len, cy, colour);
        draw_line(&mut self.scratch, w, h, cx, cy - half_len, cx, cy + half_len, colour);
    }

    fn draw_columns_serial(&mut self, level: &Level, camera: &Camera) {
        let screen = self.screen();
        self.stripes.clear();
        for x in 0..self.width {
            let stripe = cast_column(level, camera, screen, x);
            for y in stripe.rows() {
                self.scratch[y * self.width + x] = stripe.color;
            }
            self.stripes.push(stripe);
        }
    }

    fn draw_columns_parallel(&mut self, level: &Level, camera: &Camera) {
        let screen = self.screen();
        (0..self.width)
            .into_par_iter()
            .map(|x| cast_column(level, camera, screen, x))
            .collect_into_vec(&mut self.stripes);

        /* every row is owned by exactly one task */
        let stripes = &self.stripes;
        self.scratch
            .par_chunks_mut(self.width)
            .enumerate()
            .for_each(|(y, row)| {
                for (px, s) in row.iter_mut().zip(stripes) {
                    if s.rows().contains(&y) {
                        *px = s.color;
                    }
                }
            });
    }
}

/*──────────────────────── Renderer trait impl ────────────────────────*/
impl Renderer for Software {
    fn begin_frame(&mut self, w: usize, h: usize) {
        // (re)allocate if resolution changed
        if w != self.width || h != self.height {
            self.width = w;
            self.height = h;
            self.scratch.resize(w * h, 0);
            self.stripes.reserve(w);
        }
        self.scratch.fill(self.background);
    }

    fn draw_view(&mut self, level: &Level, camera: &Camera) {
        if self.width == 0 || self.height == 0 {
            self.stripes.clear();
            return;
        }
        if self.parallel {
            self.draw_columns_parallel(level, camera);
        } else {
            self.draw_columns_serial(level, camera);
        }
        trace!(
            x = camera.pos().x,
            y = camera.pos().y,
            angle = camera.angle(),
            columns = self.stripes.len(),
            "frame cast"
        );
    }

    fn end_frame<F>(&mut self, submit: F)
    where
        F: FnOnce(&[Rgba], usize, usize),
    {
        submit(&self.scratch, self.width, self.height);
    }
}

/*──────────────────────────────── Tests ───────────────────────────────*/

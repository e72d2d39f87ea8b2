//! Top-down debug viewer: the grid, the camera and the rays it casts.
//!
//! ```bash
//! cargo run --release --bin map_view -- --rays 32
//! ```
//!
//! Controls W/S = forward/back A/D = strafe ←/→ = turn Esc = quit

use clap::Parser;
use glam::DVec2;
use minifb::{Key, Window, WindowOptions};
use tracing_subscriber::EnvFilter;

use gridcast::{
    Config,
    engine::{Screen, cast_column},
    renderer::draw_line,
    sim::{FrameClock, InputCmd, Intents, integrate},
    world::{Camera, Level, OPEN, SPAWN},
};

const WIDTH: usize = 768;
const HEIGHT: usize = 768;
const KEY_TURN_DX: f64 = 15.0;

#[derive(Parser, Debug)]
#[command(version, about = "Top-down view of the grid and its rays")]
struct Args {
    /// Number of rays fanned across the field of view
    #[arg(long, default_value_t = 48)]
    rays: usize,
    /// Horizontal field of view in degrees
    #[arg(long)]
    fov: Option<f64>,
}

/*───────────────────────── drawing helpers ─────────────────────────*/

/// Map space (cells) → screen pixels, fitted with a 10 % margin.
struct View {
    scale: f64,
    off: DVec2,
}

impl View {
    fn fit(grid_w: usize, grid_h: usize) -> Self {
        let scale = (WIDTH as f64 / grid_w as f64).min(HEIGHT as f64 / grid_h as f64) * 0.9;
        let off = DVec2::new(
            (WIDTH as f64 - grid_w as f64 * scale) * 0.5,
            (HEIGHT as f64 - grid_h as f64 * scale) * 0.5,
        );
        Self { scale, off }
    }

    fn to_screen(&self, p: DVec2) -> (i32, i32) {
        let s = p * self.scale + self.off;
        (s.x.round() as i32, s.y.round() as i32)
    }
}

fn fill_rect(buf: &mut [u32], x0: i32, y0: i32, x1: i32, y1: i32, col: u32) {
    for y in y0.max(0)..y1.min(HEIGHT as i32) {
        for x in x0.max(0)..x1.min(WIDTH as i32) {
            buf[y as usize * WIDTH + x as usize] = col;
        }
    }
}

fn draw_grid(buf: &mut [u32], level: &Level, view: &View) {
    for (x, y, code) in level.grid().cells() {
        let col = match code {
            OPEN => continue,
            SPAWN => 0x00_40_40_00,
            wall => level.colors().get(wall).unwrap_or_else(|| level.colors().boundary()),
        };
        let (x0, y0) = view.to_screen(DVec2::new(x as f64, y as f64));
        let (x1, y1) = view.to_screen(DVec2::new(x as f64 + 1.0, y as f64 + 1.0));
        fill_rect(buf, x0 + 1, y0 + 1, x1, y1, col);
    }
}

fn draw_rays(buf: &mut [u32], level: &Level, camera: &Camera, view: &View, rays: usize) {
    let screen = Screen::new(rays, 1);
    let (px, py) = view.to_screen(camera.pos());
    for x in 0..rays {
        let stripe = cast_column(level, camera, screen, x);
        // every ray has unit forward component, so depth × dir is the hit point
        let dir = camera.ray_dir(screen.camera_x(x));
        let (hx, hy) = view.to_screen(camera.pos() + dir * stripe.perp_dist);
        draw_line(buf, WIDTH, HEIGHT, px, py, hx, hy, 0x00_FF_FF_00);
    }
}

/*──────────────────────────── main ────────────────────────────────*/
fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let args = Args::parse();
    let mut cfg = Config::default();
    if let Some(fov) = args.fov {
        cfg.fov_deg = fov;
    }
    let (level, mut camera) = cfg.prepare()?;
    let view = View::fit(level.grid().width(), level.grid().height());

    /*----- window ---------------------------------------------------*/
    let mut buf = vec![0u32; WIDTH * HEIGHT];
    let mut win = Window::new("gridcast map", WIDTH, HEIGHT, WindowOptions::default())?;
    win.set_target_fps(60);

    let mut clock = FrameClock::new();

    /*========================== main loop ==========================*/
    while win.is_open() && !win.is_key_down(Key::Escape) {
        let dt = clock.tick();

        /*--- input --------------------------------------------------*/
        let mut cmd = InputCmd::default();
        for (key, intent) in [
            (Key::W, Intents::FORWARD),
            (Key::S, Intents::BACK),
            (Key::A, Intents::STRAFE_LEFT),
            (Key::D, Intents::STRAFE_RIGHT),
        ] {
            if win.is_key_down(key) {
                cmd.intents |= intent;
            }
        }
        cmd.run = win.is_key_down(Key::LeftShift);
        if win.is_key_down(Key::Right) {
            cmd.pointer_dx += KEY_TURN_DX;
        }
        if win.is_key_down(Key::Left) {
            cmd.pointer_dx -= KEY_TURN_DX;
        }
        camera = integrate(&camera, level.grid(), &cmd, dt, &cfg.movement);

        /*--- clear & draw ------------------------------------------*/
        buf.fill(0x00_30_30_30);
        draw_grid(&mut buf, &level, &view);
        draw_rays(&mut buf, &level, &camera, &view, args.rays.max(1));

        /*--- draw player -------------------------------------------*/
        let (px, py) = view.to_screen(camera.pos());
        fill_rect(&mut buf, px - 2, py - 2, px + 3, py + 3, 0x00_FF_FF_FF);

        win.update_with_buffer(&buf, WIDTH, HEIGHT)?;
    }
    Ok(())
}

//! First-person view of the built-in grid.
//!
//! Controls  W/S = forward/back  A/D = strafe  mouse or ←/→ = turn
//!           Shift = run  Esc = quit
//!
//! ```bash
//! RUST_LOG=gridcast=debug cargo run --release -- --parallel
//! ```

use std::time::{Duration, Instant};

use anyhow::Context;
use clap::Parser;
use minifb::{Key, MouseMode, Window, WindowOptions};
use tracing::info;
use tracing_subscriber::EnvFilter;

use gridcast::{
    Config,
    renderer::{Renderer, Software},
    sim::{FrameClock, FrameStats, InputCmd, Intents, integrate},
};

/// Pointer-equivalent travel per tick while an arrow key is held.
const KEY_TURN_DX: f64 = 15.0;
const CROSSHAIR_HALF_LEN: i32 = 5;
const CROSSHAIR_COLOUR: u32 = 0x00_FF_FF_FF;

#[derive(Parser, Debug)]
#[command(version, about = "First-person grid raycaster")]
struct Args {
    /// Window width in pixels
    #[arg(long)]
    width: Option<usize>,
    /// Window height in pixels
    #[arg(long)]
    height: Option<usize>,
    /// Horizontal field of view in degrees
    #[arg(long)]
    fov: Option<f64>,
    /// Walk speed in cells per second
    #[arg(long)]
    speed: Option<f64>,
    /// Turn rate per unit of pointer travel
    #[arg(long)]
    sensitivity: Option<f64>,
    /// Speed factor while Shift is held
    #[arg(long)]
    run_multiplier: Option<f64>,
    /// Frame-rate cap
    #[arg(long)]
    fps: Option<u32>,
    /// Cast columns in parallel
    #[arg(long)]
    parallel: bool,
}

impl Args {
    fn into_config(self) -> Config {
        let mut cfg = Config::default();
        if let Some(v) = self.width {
            cfg.width = v;
        }
        if let Some(v) = self.height {
            cfg.height = v;
        }
        if let Some(v) = self.fov {
            cfg.fov_deg = v;
        }
        if let Some(v) = self.speed {
            cfg.movement.speed = v;
        }
        if let Some(v) = self.sensitivity {
            cfg.movement.rotation_speed = v;
        }
        if let Some(v) = self.run_multiplier {
            cfg.movement.run_multiplier = v;
        }
        if let Some(v) = self.fps {
            cfg.fps_cap = v;
        }
        cfg.parallel = self.parallel;
        cfg
    }
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let cfg = Args::parse().into_config();
    let (level, mut camera) = cfg.prepare().context("startup configuration rejected")?;
    let mut renderer = Software::new(cfg.background, cfg.parallel);
    let screen = cfg.screen();

    let mut win = Window::new("gridcast", screen.w, screen.h, WindowOptions::default())?;
    win.set_target_fps(cfg.fps_cap as usize);
    win.set_cursor_visibility(false);

    info!(
        width = screen.w,
        height = screen.h,
        fov = cfg.fov_deg,
        parallel = cfg.parallel,
        "window open"
    );

    let mut clock = FrameClock::new();
    let mut stats = FrameStats::new(Duration::from_secs(3));
    let mut last_mouse_x: Option<f32> = None;

    while win.is_open() && !win.is_key_down(Key::Escape) {
        let t0 = Instant::now(); // ┌─ frame timer start
        let dt = clock.tick();

        let cmd = sample_input(&win, &mut last_mouse_x);
        camera = integrate(&camera, level.grid(), &cmd, dt, &cfg.movement);

        /* draw */
        renderer.begin_frame(screen.w, screen.h);
        renderer.draw_view(&level, &camera);
        renderer.draw_crosshair(CROSSHAIR_HALF_LEN, CROSSHAIR_COLOUR);

        let mut presented = Ok(());
        renderer.end_frame(|fb, w, h| presented = win.update_with_buffer(fb, w, h));
        presented?;

        if let Some(report) = stats.record(t0.elapsed()) {
            let pos = camera.pos();
            info!(
                avg_ms = report.avg_ms,
                fps = report.fps,
                x = pos.x,
                y = pos.y,
                angle = camera.angle(),
                "frame stats"
            );
            win.set_title(&format!(
                "gridcast  FPS: {:3.0}  X: {:.2}, Y: {:.2}, Angle: {:.2}",
                report.fps,
                pos.x,
                pos.y,
                camera.angle()
            ));
        }
    }
    Ok(())
}

/// Build one [`InputCmd`] from the current key and pointer state.
///
/// The pointer is not captured, so mouse turning stops at the window edge.
/// Hold ←/→ to keep turning.
fn sample_input(win: &Window, last_mouse_x: &mut Option<f32>) -> InputCmd {
    let mut cmd = InputCmd::default();

    /* movement --------------------------------------------------------- */
    for (keys, intent) in [
        ([Key::W, Key::Up], Intents::FORWARD),
        ([Key::S, Key::Down], Intents::BACK),
    ] {
        if keys.iter().any(|&k| win.is_key_down(k)) {
            cmd.intents |= intent;
        }
    }
    if win.is_key_down(Key::A) {
        cmd.intents |= Intents::STRAFE_LEFT;
    }
    if win.is_key_down(Key::D) {
        cmd.intents |= Intents::STRAFE_RIGHT;
    }

    /* modifiers -------------------------------------------------------- */
    cmd.run = win.is_key_down(Key::LeftShift) || win.is_key_down(Key::RightShift);

    /* turning: pointer travel since last tick, plus arrow keys ---------- */
    if let Some((mx, _)) = win.get_mouse_pos(MouseMode::Pass) {
        if let Some(prev) = last_mouse_x.replace(mx) {
            cmd.pointer_dx += (mx - prev) as f64;
        }
    }
    if win.is_key_down(Key::Right) {
        cmd.pointer_dx += KEY_TURN_DX;
    }
    if win.is_key_down(Key::Left) {
        cmd.pointer_dx -= KEY_TURN_DX;
    }

    cmd
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cli_overrides_only_what_is_given() {
        let cfg = Args::parse_from(["gridcast", "--width", "320", "--parallel"]).into_config();
        assert_eq!(cfg.width, 320);
        assert_eq!(cfg.height, Config::default().height);
        assert!(cfg.parallel);
        assert_eq!(cfg.movement, Config::default().movement);
    }

    #[test]
    fn cli_kebab_case_flags() {
        let args = ["gridcast", "--run-multiplier", "2", "--fps", "60"];
        let cfg = Args::parse_from(args).into_config();
        assert_eq!(cfg.movement.run_multiplier, 2.0);
        assert_eq!(cfg.fps_cap, 60);
    }
}

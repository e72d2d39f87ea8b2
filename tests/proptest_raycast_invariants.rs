//! Property-based invariant tests for ray casting, projection and movement.
//!
//! 1. DDA from inside an open cell stops on a closed cell within w + h steps,
//!    whatever the length of the direction vector.
//! 2. Axis-aligned rays report the exact distance to the wall face.
//! 3. A single move lands exactly on the candidate or not at all.
//! 4. Any sequence of ticks keeps the camera in open cells.
//! 5. Shade factor stays in [0, 1] and never grows with distance.
//! 6. Stripe extents stay on screen.

use glam::DVec2;
use gridcast::{
    engine::{Side, dda, projection},
    sim::{InputCmd, Intents, MoveTuning, integrate, try_move},
    world::{Camera, GridMap, Level},
};
use proptest::prelude::*;
use std::f64::consts::FRAC_PI_2;

// ── Helpers ─────────────────────────────────────────────────────────────

fn open_cells(grid: &GridMap) -> Vec<(i32, i32)> {
    grid.cells()
        .map(|(x, y, _)| (x as i32, y as i32))
        .filter(|&(x, y)| grid.is_open(x, y))
        .collect()
}

/// A point strictly inside some open cell of the reference grid.
fn inside_open_cell() -> impl Strategy<Value = DVec2> {
    let cells = open_cells(&GridMap::reference());
    (0..cells.len(), 0.001f64..0.999, 0.001f64..0.999).prop_map(move |(i, fx, fy)| {
        let (x, y) = cells[i];
        DVec2::new(x as f64 + fx, y as f64 + fy)
    })
}

fn any_direction() -> impl Strategy<Value = DVec2> {
    prop_oneof![
        Just(DVec2::new(1.0, 0.0)),
        Just(DVec2::new(-1.0, 0.0)),
        Just(DVec2::new(0.0, 1.0)),
        Just(DVec2::new(0.0, -1.0)),
        (0.0f64..std::f64::consts::TAU).prop_map(|a| DVec2::new(a.cos(), a.sin())),
        // unnormalised, from vanishingly short to huge
        (0.0f64..std::f64::consts::TAU, -160i32..160)
            .prop_map(|(a, e)| DVec2::new(a.cos(), a.sin()) * 10f64.powi(e)),
    ]
}

fn input_cmd() -> impl Strategy<Value = InputCmd> {
    (0u8..16, any::<bool>(), -60.0f64..60.0).prop_map(|(bits, run, pointer_dx)| InputCmd {
        intents: Intents::from_bits_truncate(bits),
        run,
        pointer_dx,
    })
}

// ═════════════════════════════════════════════════════════════════════════
// 1. DDA termination
// ═════════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn dda_terminates_on_closed_cell(pos in inside_open_cell(), dir in any_direction()) {
        let grid = GridMap::reference();
        let hit = dda::cast(&grid, pos, dir);
        prop_assert!(!grid.is_open(hit.cell.x, hit.cell.y));
        prop_assert!(
            hit.steps as usize <= grid.width() + grid.height(),
            "{} steps from {:?} along {:?}", hit.steps, pos, dir
        );
    }

    #[test]
    fn dda_ignores_direction_length(
        pos in inside_open_cell(),
        axis in 0usize..4,
        e in -160i32..160,
    ) {
        let grid = GridMap::reference();
        let (dx, dy) = [(1.0, 0.0), (-1.0, 0.0), (0.0, 1.0), (0.0, -1.0)][axis];
        let unit = DVec2::new(dx, dy);
        let scaled = unit * 10f64.powi(e);
        let a = dda::cast(&grid, pos, unit);
        let b = dda::cast(&grid, pos, scaled);
        prop_assert_eq!((a.cell, a.side), (b.cell, b.side));
    }
}

// ═════════════════════════════════════════════════════════════════════════
// 2. Exact distance along an axis
// ═════════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn axis_aligned_distance_is_exact(pos in inside_open_cell(), axis in 0usize..4) {
        let grid = GridMap::reference();
        let (dx, dy) = [(1, 0), (-1, 0), (0, 1), (0, -1)][axis];
        let dir = DVec2::new(dx as f64, dy as f64);

        // walk cells by hand to the first closed one
        let mut cell = pos.floor().as_ivec2();
        loop {
            cell.x += dx;
            cell.y += dy;
            if !grid.is_open(cell.x, cell.y) {
                break;
            }
        }
        let expected = match (dx, dy) {
            (1, _) => cell.x as f64 - pos.x,
            (-1, _) => pos.x - (cell.x as f64 + 1.0),
            (_, 1) => cell.y as f64 - pos.y,
            _ => pos.y - (cell.y as f64 + 1.0),
        };

        let hit = dda::cast(&grid, pos, dir);
        prop_assert_eq!(hit.cell, cell);
        let d = projection::perpendicular_distance(&hit, pos, dir);
        prop_assert!((d - expected).abs() < 1e-6, "got {}, want {}", d, expected);
    }
}

// ═════════════════════════════════════════════════════════════════════════
// 3. All-or-nothing moves
// ═════════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn move_is_all_or_nothing(
        pos in inside_open_cell(),
        dx in -1.5f64..1.5,
        dy in -1.5f64..1.5,
    ) {
        let grid = GridMap::reference();
        let delta = DVec2::new(dx, dy);
        let r = try_move(&grid, pos, delta);
        if grid.is_open_at(pos + delta) {
            prop_assert_eq!(r.pos, pos + delta);
            prop_assert!(!r.hit_wall);
        } else {
            prop_assert_eq!(r.pos, pos);
            prop_assert!(r.hit_wall);
        }
    }
}

// ═════════════════════════════════════════════════════════════════════════
// 4. The camera never enters a closed cell
// ═════════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn ticks_keep_camera_in_open_cells(
        cmds in proptest::collection::vec((input_cmd(), 0.0f64..0.25), 1..64),
    ) {
        let level = Level::reference().unwrap();
        let tuning = MoveTuning::default();
        let mut cam = level.spawn_camera(FRAC_PI_2);
        for (cmd, dt) in cmds {
            cam = integrate(&cam, level.grid(), &cmd, dt, &tuning);
            prop_assert!(level.grid().is_open_at(cam.pos()), "camera at {:?}", cam.pos());
        }
    }

    #[test]
    fn blocked_forward_keeps_position(
        pos in inside_open_cell(),
        angle in 0.0f64..std::f64::consts::TAU,
        dt in 0.0f64..2.0,
    ) {
        let grid = GridMap::reference();
        let cam = Camera::new(pos, angle, FRAC_PI_2);
        let tuning = MoveTuning::default();
        let candidate = pos + cam.forward() * (tuning.speed * dt);
        let next = integrate(&cam, &grid, &InputCmd::new(Intents::FORWARD), dt, &tuning);
        if grid.is_open_at(candidate) {
            prop_assert_eq!(next.pos(), candidate);
        } else {
            prop_assert_eq!(next.pos(), pos);
        }
    }
}

// ═════════════════════════════════════════════════════════════════════════
// 5. Shade factor bounds and monotonicity
// ═════════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn shade_is_bounded_and_non_increasing(a in 0.0f64..50.0, b in 0.0f64..50.0) {
        let (near, far) = if a <= b { (a, b) } else { (b, a) };
        for side in [Side::AxisX, Side::AxisY] {
            let fn_ = projection::shade_factor(near, side);
            let ff = projection::shade_factor(far, side);
            prop_assert!((0.0..=1.0).contains(&fn_));
            prop_assert!((0.0..=1.0).contains(&ff));
            prop_assert!(ff <= fn_);
        }
    }
}

// ═════════════════════════════════════════════════════════════════════════
// 6. Stripes stay on screen
// ═════════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn stripe_extent_is_on_screen(d in 1e-6f64..100.0, h in 1usize..2000) {
        let (start, end) = projection::stripe_extent(d, h);
        prop_assert!(start <= end);
        prop_assert!(end < h);
    }
}

//! Per-tick camera integration: translate along the view basis with
//! all-or-nothing collision, then turn.

use super::collision::try_move;
use super::{InputCmd, Intents};
use crate::world::{Camera, GridMap};

/// Speeds the integrator works with. Units are cells and radians.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct MoveTuning {
    /// Cells per second.
    pub speed: f64,
    /// Radians per second per unit of pointer travel.
    pub rotation_speed: f64,
    /// Speed factor while running.
    pub run_multiplier: f64,
}

impl Default for MoveTuning {
    fn default() -> Self {
        Self {
            speed: 1.5,
            rotation_speed: 0.1,
            run_multiplier: 1.2,
        }
    }
}

/// Produce the camera for the next tick from `camera`, `cmd` and `dt` seconds.
///
/// Intents are applied in the order forward, back, strafe-left,
/// strafe-right, each from wherever the previous one left the camera, all
/// along the basis the tick started with. A step whose destination cell is
/// closed is dropped whole. Rotation is applied last and refreshes the
/// cached basis; the angle is left unwrapped.
pub fn integrate(
    camera: &Camera,
    grid: &GridMap,
    cmd: &InputCmd,
    dt: f64,
    tuning: &MoveTuning,
) -> Camera {
    let mut next = *camera;

    let mut move_speed = tuning.speed * dt;
    if cmd.run {
        move_speed *= tuning.run_multiplier;
    }
    let forward = camera.forward() * move_speed;
    let right = camera.right() * move_speed;

    for (intent, delta) in [
        (Intents::FORWARD, forward),
        (Intents::BACK, -forward),
        (Intents::STRAFE_LEFT, -right),
        (Intents::STRAFE_RIGHT, right),
    ] {
        if cmd.intents.contains(intent) {
            let moved = try_move(grid, next.pos(), delta);
            next.set_pos(moved.pos);
        }
    }

    if cmd.pointer_dx != 0.0 {
        next.turn(cmd.pointer_dx * tuning.rotation_speed * dt);
    }
    next
}

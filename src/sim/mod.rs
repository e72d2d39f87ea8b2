mod collision;
mod components;
mod movement;
mod tic;

pub use collision::{MoveResult, try_move};
pub use components::{InputCmd, Intents};
pub use movement::{MoveTuning, integrate};
pub use tic::{FrameClock, FrameReport, FrameStats};

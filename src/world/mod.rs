mod camera;
pub mod grid;
mod level;

pub use camera::Camera;

pub use grid::{CellCode, GridMap, MapError, OPEN, SPAWN, WallColors};

pub use level::Level;

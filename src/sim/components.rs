use bitflags::bitflags;

bitflags! {
    /// Directional movement requested this tick.
    ///
    /// Opposite pairs may both be set; each one is applied on its own.
    #[derive(Default, Clone, Copy, Debug, PartialEq, Eq)]
    pub struct Intents: u8 {
        const FORWARD      = 0b0001;
        const BACK         = 0b0010;
        const STRAFE_LEFT  = 0b0100;
        const STRAFE_RIGHT = 0b1000;
    }
}

/// One tick's worth of player input, sampled by the window layer.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct InputCmd {
    pub intents: Intents,
    pub run: bool,        // Shift
    pub pointer_dx: f64,  // horizontal pointer travel since last tick (+ = right)
}

impl InputCmd {
    pub fn new(intents: Intents) -> Self {
        Self {
            intents,
            ..Self::default()
        }
    }
}

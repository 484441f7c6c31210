//! Keyboard and touch mapping to player intents

use crate::sim::TickInput;

/// One of the five player controls
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Intent {
    MoveLeft,
    MoveRight,
    MoveForward,
    MoveBack,
    Jump,
}

impl Intent {
    /// On-screen touch buttons, by element id
    pub const TOUCH_BUTTONS: [(&'static str, Intent); 5] = [
        ("left-btn", Intent::MoveLeft),
        ("right-btn", Intent::MoveRight),
        ("up-btn", Intent::MoveForward),
        ("down-btn", Intent::MoveBack),
        ("jump-btn", Intent::Jump),
    ];

    /// Map a `KeyboardEvent.key` value
    pub fn from_key(key: &str) -> Option<Self> {
        match key {
            "ArrowLeft" | "Left" => Some(Intent::MoveLeft),
            "ArrowRight" | "Right" => Some(Intent::MoveRight),
            "ArrowUp" | "Up" => Some(Intent::MoveForward),
            "ArrowDown" | "Down" => Some(Intent::MoveBack),
            " " | "Spacebar" => Some(Intent::Jump),
            _ => None,
        }
    }

    /// Map a legacy `KeyboardEvent.keyCode`
    pub fn from_key_code(code: u32) -> Option<Self> {
        match code {
            37 => Some(Intent::MoveLeft),
            38 => Some(Intent::MoveForward),
            39 => Some(Intent::MoveRight),
            40 => Some(Intent::MoveBack),
            32 => Some(Intent::Jump),
            _ => None,
        }
    }

    /// Record a press or release; the latest event wins
    pub fn apply(self, input: &mut TickInput, pressed: bool) {
        let flag = match self {
            Intent::MoveLeft => &mut input.move_left,
            Intent::MoveRight => &mut input.move_right,
            Intent::MoveForward => &mut input.move_forward,
            Intent::MoveBack => &mut input.move_back,
            Intent::Jump => &mut input.jump,
        };
        *flag = pressed;
    }
}

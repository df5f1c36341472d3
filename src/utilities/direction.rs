use serde::{Deserialize, Serialize};

use super::call::Call;

/// Which way the car is sweeping. `Idle` means neither up nor down.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MotionState {
    #[default]
    Idle,
    MovingUp,
    MovingDown,
}

impl MotionState {
    pub fn as_string(self) -> String {
        match self {
            MotionState::Idle => String::from("idle"),
            MotionState::MovingUp => String::from("up"),
            MotionState::MovingDown => String::from("down"),
        }
    }

    pub fn is_moving(self) -> bool {
        self != MotionState::Idle
    }

    pub fn reversed(self) -> Self {
        match self {
            MotionState::MovingUp => MotionState::MovingDown,
            MotionState::MovingDown => MotionState::MovingUp,
            MotionState::Idle => MotionState::Idle,
        }
    }

    /// The landing button served by a sweep in this direction.
    pub fn to_call(self) -> Option<Call> {
        match self {
            MotionState::MovingUp => Some(Call::HallUp),
            MotionState::MovingDown => Some(Call::HallDown),
            MotionState::Idle => None,
        }
    }
}

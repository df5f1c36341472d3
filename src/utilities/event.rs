use std::fmt;

use serde::{Deserialize, Serialize};

/// What the car did during one step. Exactly one is produced per step.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
pub enum DispatchEvent {
    Waiting(u8),
    Stopping(u8),
    Passing(u8),
}

impl DispatchEvent {
    pub fn floor(self) -> u8 {
        match self {
            DispatchEvent::Waiting(floor)
            | DispatchEvent::Stopping(floor)
            | DispatchEvent::Passing(floor) => floor,
        }
    }
}

impl fmt::Display for DispatchEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DispatchEvent::Waiting(floor) => {
                write!(f, "Elevator: Nothing to do, just waiting on floor {}", floor)
            }
            DispatchEvent::Stopping(floor) => write!(f, "Elevator: Stopping at floor {}", floor),
            DispatchEvent::Passing(floor) => write!(f, "Elevator: Passing floor {}", floor),
        }
    }
}

use serde::{Deserialize, Serialize};

use super::call::Call;
use super::direction::MotionState;

/// Point-in-time copy of the dispatcher state, taken under its lock.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct ElevatorStatus {
    pub num_floors: u8,
    pub floor: u8,
    pub motion: MotionState,
    pub inside_requests: Vec<u8>,
    pub hall_up_requests: Vec<u8>,
    pub hall_down_requests: Vec<u8>,
}

impl ElevatorStatus {
    pub fn requests(&self, call: Call) -> &[u8] {
        match call {
            Call::Inside => &self.inside_requests,
            Call::HallUp => &self.hall_up_requests,
            Call::HallDown => &self.hall_down_requests,
        }
    }

    /// Per floor flags in `Call` order: hall up, hall down, inside.
    pub fn get_requests_at_floor(&self, floor: u8) -> Vec<bool> {
        Call::iter()
            .map(|call| self.requests(call).contains(&floor))
            .collect()
    }

    pub fn is_clear(&self) -> bool {
        Call::iter().all(|call| self.requests(call).is_empty())
    }
}

use serde::{Deserialize, Serialize};

use super::call::Call;

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
pub struct Request {
    pub floor: u8,
    pub call: Call,
}

impl Request {
    pub fn inside(floor: u8) -> Self {
        Request { floor, call: Call::Inside }
    }

    pub fn up(floor: u8) -> Self {
        Request { floor, call: Call::HallUp }
    }

    pub fn down(floor: u8) -> Self {
        Request { floor, call: Call::HallDown }
    }
}

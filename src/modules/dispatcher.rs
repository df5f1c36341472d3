/// ----- DISPATCHER MODULE -----
/// The scheduling core. Holds the car position, its sweep direction and
/// the three sets of pending requests, and advances the car one floor per
/// call to `step`. It performs no I/O and no locking; the `elevator` module
/// owns the thread and the mutex around it.

use std::collections::BTreeSet;
use std::ops::Bound::{Excluded, Unbounded};

use log::debug;

use crate::utilities::call::Call;
use crate::utilities::direction::MotionState;
use crate::utilities::elevator_status::ElevatorStatus;
use crate::utilities::event::DispatchEvent;
use crate::utilities::request::Request;

#[derive(Debug, Clone)]
pub struct Dispatcher {
    num_floors: u8,
    floor: u8,
    motion: MotionState,
    inside_requests: BTreeSet<u8>,
    hall_up_requests: BTreeSet<u8>,
    hall_down_requests: BTreeSet<u8>,
}

fn any_below(requests: &BTreeSet<u8>, floor: u8) -> bool {
    requests.range(..floor).next().is_some()
}

fn any_above(requests: &BTreeSet<u8>, floor: u8) -> bool {
    requests.range((Excluded(floor), Unbounded)).next().is_some()
}

impl Dispatcher {
    /// Floors are numbered `1..=num_floors`. The caller validates both
    /// arguments before constructing.
    pub fn new(num_floors: u8, starting_floor: u8) -> Self {
        Dispatcher {
            num_floors,
            floor: starting_floor,
            motion: MotionState::Idle,
            inside_requests: BTreeSet::new(),
            hall_up_requests: BTreeSet::new(),
            hall_down_requests: BTreeSet::new(),
        }
    }

    pub fn num_floors(&self) -> u8 {
        self.num_floors
    }

    pub fn floor(&self) -> u8 {
        self.floor
    }

    pub fn motion(&self) -> MotionState {
        self.motion
    }

    pub fn request_from_inside(&mut self, floor: u8) {
        self.inside_requests.insert(floor);
        self.assign_direction(floor);
    }

    pub fn request_up_from_floor(&mut self, floor: u8) {
        self.hall_up_requests.insert(floor);
        self.assign_direction(floor);
    }

    pub fn request_down_from_floor(&mut self, floor: u8) {
        self.hall_down_requests.insert(floor);
        self.assign_direction(floor);
    }

    pub fn add_request(&mut self, request: Request) {
        match request.call {
            Call::Inside => self.request_from_inside(request.floor),
            Call::HallUp => self.request_up_from_floor(request.floor),
            Call::HallDown => self.request_down_from_floor(request.floor),
        }
    }

    /// Pending floors for one kind of request, ascending.
    pub fn pending(&self, call: Call) -> Vec<u8> {
        self.requests(call).iter().copied().collect()
    }

    pub fn is_clear(&self) -> bool {
        self.inside_requests.is_empty()
            && self.hall_up_requests.is_empty()
            && self.hall_down_requests.is_empty()
    }

    pub fn status(&self) -> ElevatorStatus {
        ElevatorStatus {
            num_floors: self.num_floors,
            floor: self.floor,
            motion: self.motion,
            inside_requests: self.pending(Call::Inside),
            hall_up_requests: self.pending(Call::HallUp),
            hall_down_requests: self.pending(Call::HallDown),
        }
    }

    /// Advances the car by one tick and reports what happened on it.
    pub fn step(&mut self) -> DispatchEvent {
        if self.is_clear() {
            self.motion = MotionState::Idle;
            return DispatchEvent::Waiting(self.floor);
        }

        let event = match self.motion {
            MotionState::Idle => return self.serve_while_idle(),
            MotionState::MovingDown => {
                self.floor -= 1;
                if self.inside_requests.contains(&self.floor)
                    || self.hall_down_requests.contains(&self.floor)
                {
                    DispatchEvent::Stopping(self.floor)
                } else if self.hall_up_requests.contains(&self.floor)
                    && !any_below(&self.inside_requests, self.floor)
                    && !any_below(&self.hall_down_requests, self.floor)
                {
                    // nothing left below: serve the up call and turn around
                    self.motion = MotionState::MovingUp;
                    DispatchEvent::Stopping(self.floor)
                } else {
                    DispatchEvent::Passing(self.floor)
                }
            }
            MotionState::MovingUp => {
                self.floor += 1;
                if self.inside_requests.contains(&self.floor)
                    || self.hall_up_requests.contains(&self.floor)
                {
                    DispatchEvent::Stopping(self.floor)
                } else if self.hall_down_requests.contains(&self.floor)
                    && !any_above(&self.inside_requests, self.floor)
                    && !any_above(&self.hall_up_requests, self.floor)
                {
                    // nothing left above: serve the down call and turn around
                    self.motion = MotionState::MovingDown;
                    DispatchEvent::Stopping(self.floor)
                } else {
                    DispatchEvent::Passing(self.floor)
                }
            }
        };

        self.clear_floor();
        self.set_next_direction();
        debug!("step: {:?}, now {:?} at floor {}", event, self.motion, self.floor);
        event
    }

    fn requests(&self, call: Call) -> &BTreeSet<u8> {
        match call {
            Call::Inside => &self.inside_requests,
            Call::HallUp => &self.hall_up_requests,
            Call::HallDown => &self.hall_down_requests,
        }
    }

    /// Only an idle car picks a direction from a new request. A request for
    /// the floor the car is on leaves it idle; the next step serves it.
    fn assign_direction(&mut self, floor: u8) {
        if self.motion.is_moving() {
            return;
        }
        if floor > self.floor {
            self.motion = MotionState::MovingUp;
        } else if floor < self.floor {
            self.motion = MotionState::MovingDown;
        }
    }

    fn serve_while_idle(&mut self) -> DispatchEvent {
        let floor = self.floor;
        let served = self.inside_requests.remove(&floor)
            | self.hall_up_requests.remove(&floor)
            | self.hall_down_requests.remove(&floor);

        // pick up anything left elsewhere the same way intake would
        let next = self
            .inside_requests
            .iter()
            .chain(self.hall_up_requests.iter())
            .chain(self.hall_down_requests.iter())
            .copied()
            .next();
        if let Some(target) = next {
            self.assign_direction(target);
        }

        if served {
            debug!("served requests at floor {} while idle", floor);
            DispatchEvent::Stopping(floor)
        } else {
            DispatchEvent::Waiting(floor)
        }
    }

    /// Clears the inside request here and the landing call matching the
    /// direction the car leaves this floor in.
    fn clear_floor(&mut self) {
        self.inside_requests.remove(&self.floor);
        if let Some(call) = self.motion.to_call() {
            match call {
                Call::HallUp => self.hall_up_requests.remove(&self.floor),
                Call::HallDown => self.hall_down_requests.remove(&self.floor),
                Call::Inside => false,
            };
        }
    }

    /// Finish the current sweep before turning. Inside requests win over
    /// landing calls at every level.
    fn set_next_direction(&mut self) {
        let floor = self.floor;
        let (inside_ahead, hall_ahead, inside_behind, hall_behind, at_end) = match self.motion {
            MotionState::MovingUp => (
                any_above(&self.inside_requests, floor),
                any_above(&self.hall_up_requests, floor),
                any_below(&self.inside_requests, floor),
                any_below(&self.hall_down_requests, floor),
                floor == self.num_floors,
            ),
            MotionState::MovingDown => (
                any_below(&self.inside_requests, floor),
                any_below(&self.hall_down_requests, floor),
                any_above(&self.inside_requests, floor),
                any_above(&self.hall_up_requests, floor),
                floor == 1,
            ),
            MotionState::Idle => return,
        };

        if inside_ahead || hall_ahead {
            return;
        }
        if inside_behind || hall_behind {
            self.motion = self.motion.reversed();
            return;
        }
        // an empty car parks even at the top or bottom floor
        if self.is_clear() {
            self.motion = MotionState::Idle;
            return;
        }
        if at_end {
            self.motion = self.motion.reversed();
        }
        // otherwise keep going; a landing call further on will be reached
    }
}

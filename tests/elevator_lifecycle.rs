use std::time::Duration;

use crossbeam_channel::{unbounded, Receiver};

use sweep_elevator::utilities::request::Request;
use sweep_elevator::{DispatchEvent, Elevator, MotionState};

const TICK: Duration = Duration::from_millis(5);
const PATIENCE: Duration = Duration::from_secs(2);

fn elevator(num_floors: u8, starting_floor: u8) -> (Elevator, Receiver<DispatchEvent>) {
    let (events_tx, events_rx) = unbounded();
    (Elevator::new(num_floors, starting_floor, TICK, events_tx), events_rx)
}

/// Collects events until `last` shows up.
fn events_until(events_rx: &Receiver<DispatchEvent>, last: DispatchEvent) -> Vec<DispatchEvent> {
    let mut events = Vec::new();
    loop {
        let event = events_rx.recv_timeout(PATIENCE).expect("no event from the dispatcher");
        events.push(event);
        if event == last {
            return events;
        }
    }
}

#[test]
fn nothing_happens_before_start() {
    let (elevator, events_rx) = elevator(5, 1);
    elevator.request_from_inside(3);
    assert!(!elevator.is_running());
    assert!(events_rx.recv_timeout(TICK * 10).is_err());
    assert_eq!(elevator.status().floor, 1);
}

#[test]
fn serves_requests_and_settles() {
    let (elevator, events_rx) = elevator(10, 1);
    elevator.request_from_inside(5);
    elevator.request_up_from_floor(8);
    elevator.start().unwrap();
    assert!(elevator.is_running());

    let events = events_until(&events_rx, DispatchEvent::Waiting(8));
    assert_eq!(
        events,
        vec![
            DispatchEvent::Passing(2),
            DispatchEvent::Passing(3),
            DispatchEvent::Passing(4),
            DispatchEvent::Stopping(5),
            DispatchEvent::Passing(6),
            DispatchEvent::Passing(7),
            DispatchEvent::Stopping(8),
            DispatchEvent::Waiting(8),
        ]
    );

    let status = elevator.status();
    assert_eq!(status.motion, MotionState::Idle);
    assert!(status.is_clear());
    elevator.shutdown();
}

#[test]
fn requests_from_another_thread_are_served() {
    let (elevator, events_rx) = elevator(6, 1);
    elevator.start().unwrap();
    assert_eq!(events_rx.recv_timeout(PATIENCE), Ok(DispatchEvent::Waiting(1)));

    std::thread::scope(|scope| {
        scope.spawn(|| elevator.add_request(Request::down(4)));
    });

    let events = events_until(&events_rx, DispatchEvent::Stopping(4));
    assert!(events.iter().all(|event| matches!(
        event,
        DispatchEvent::Waiting(1) | DispatchEvent::Passing(_) | DispatchEvent::Stopping(4)
    )));
    elevator.shutdown();
}

#[test]
fn pause_holds_position_and_start_resumes() {
    let (elevator, events_rx) = elevator(20, 1);
    elevator.request_from_inside(20);
    elevator.start().unwrap();
    events_rx.recv_timeout(PATIENCE).unwrap();

    elevator.pause();
    assert!(elevator.is_paused());
    // drain whatever raced the pause, then expect silence
    while events_rx.recv_timeout(TICK * 4).is_ok() {}
    let floor = elevator.status().floor;
    assert!(events_rx.recv_timeout(TICK * 10).is_err());
    assert_eq!(elevator.status().floor, floor);
    assert_eq!(elevator.status().inside_requests, vec![20]);

    elevator.start().unwrap();
    assert!(!elevator.is_paused());
    assert_eq!(
        events_rx.recv_timeout(PATIENCE),
        Ok(DispatchEvent::Passing(floor + 1))
    );
    elevator.shutdown();
}

#[test]
fn shutdown_is_idempotent_and_final() {
    let (elevator, events_rx) = elevator(5, 2);
    elevator.start().unwrap();
    events_rx.recv_timeout(PATIENCE).unwrap();

    elevator.shutdown();
    elevator.shutdown();
    assert!(!elevator.is_running());

    while events_rx.try_recv().is_ok() {}
    elevator.request_from_inside(5);
    elevator.start().unwrap();
    assert!(!elevator.is_running());
    assert!(events_rx.recv_timeout(TICK * 10).is_err());
}

#[test]
fn shutdown_interrupts_a_long_tick() {
    let (events_tx, events_rx) = unbounded();
    let elevator = Elevator::new(5, 1, Duration::from_secs(3600), events_tx);
    elevator.start().unwrap();
    assert_eq!(events_rx.recv_timeout(PATIENCE), Ok(DispatchEvent::Waiting(1)));

    let started = std::time::Instant::now();
    elevator.shutdown();
    assert!(started.elapsed() < PATIENCE);
}

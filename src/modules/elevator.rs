/// ----- ELEVATOR MODULE -----
/// Owns the dispatcher behind a single lock and the background thread
/// stepping it once per tick. Requests may arrive from any thread; they
/// land either before or after a whole step, never inside one.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::thread::{self, JoinHandle};
use std::time::Duration;

use crossbeam_channel::{bounded, select, tick, Receiver, Sender, TryRecvError};
use log::{debug, info, warn};
use parking_lot::Mutex;

use crate::modules::dispatcher::Dispatcher;
use crate::utilities::elevator_status::ElevatorStatus;
use crate::utilities::event::DispatchEvent;
use crate::utilities::request::Request;

struct Shared {
    dispatcher: Mutex<Dispatcher>,
    paused: AtomicBool,
}

pub struct Elevator {
    shared: Arc<Shared>,
    num_floors: u8,
    tick_interval: Duration,
    events_tx: Sender<DispatchEvent>,
    // dropping the sender is the shutdown signal
    shutdown_tx: Mutex<Option<Sender<()>>>,
    handle: Mutex<Option<JoinHandle<()>>>,
    running: AtomicBool,
    shut_down: AtomicBool,
}

impl Elevator {
    pub fn new(
        num_floors: u8,
        starting_floor: u8,
        tick_interval: Duration,
        events_tx: Sender<DispatchEvent>,
    ) -> Self {
        Elevator {
            shared: Arc::new(Shared {
                dispatcher: Mutex::new(Dispatcher::new(num_floors, starting_floor)),
                paused: AtomicBool::new(false),
            }),
            num_floors,
            tick_interval,
            events_tx,
            shutdown_tx: Mutex::new(None),
            handle: Mutex::new(None),
            running: AtomicBool::new(false),
            shut_down: AtomicBool::new(false),
        }
    }

    pub fn num_floors(&self) -> u8 {
        self.num_floors
    }

    /// Spawns the step loop the first time, resumes it afterwards.
    pub fn start(&self) -> std::io::Result<()> {
        if self.shut_down.load(Ordering::SeqCst) {
            warn!("start ignored, elevator has been shut down");
            return Ok(());
        }
        if self.is_running() {
            self.resume();
            return Ok(());
        }

        let (shutdown_tx, shutdown_rx) = bounded::<()>(0);
        let shared = Arc::clone(&self.shared);
        let events_tx = self.events_tx.clone();
        let tick_interval = self.tick_interval;
        self.shared.paused.store(false, Ordering::SeqCst);

        let handle = thread::Builder::new()
            .name("dispatcher".to_string())
            .spawn(move || step_loop(shared, tick_interval, shutdown_rx, events_tx))?;

        *self.shutdown_tx.lock() = Some(shutdown_tx);
        *self.handle.lock() = Some(handle);
        self.running.store(true, Ordering::SeqCst);
        info!("elevator started, one step every {:?}", self.tick_interval);
        Ok(())
    }

    pub fn pause(&self) {
        if !self.shared.paused.swap(true, Ordering::SeqCst) {
            info!("elevator paused");
        }
    }

    pub fn resume(&self) {
        if self.shared.paused.swap(false, Ordering::SeqCst) {
            info!("elevator resumed");
        }
    }

    pub fn is_paused(&self) -> bool {
        self.shared.paused.load(Ordering::SeqCst)
    }

    pub fn is_running(&self) -> bool {
        self.running.load(Ordering::SeqCst)
    }

    /// Stops the step loop after the step in progress, if any, and waits
    /// for the thread. Safe to call more than once.
    pub fn shutdown(&self) {
        if self.shut_down.swap(true, Ordering::SeqCst) {
            return;
        }
        self.running.store(false, Ordering::SeqCst);
        drop(self.shutdown_tx.lock().take());
        if let Some(handle) = self.handle.lock().take() {
            if handle.join().is_err() {
                warn!("dispatcher thread panicked");
            }
        }
        info!("elevator shut down");
    }

    pub fn request_from_inside(&self, floor: u8) {
        self.add_request(Request::inside(floor));
    }

    pub fn request_up_from_floor(&self, floor: u8) {
        self.add_request(Request::up(floor));
    }

    pub fn request_down_from_floor(&self, floor: u8) {
        self.add_request(Request::down(floor));
    }

    pub fn add_request(&self, request: Request) {
        debug!("request {} at floor {}", request.call.as_string(), request.floor);
        self.shared.dispatcher.lock().add_request(request);
    }

    pub fn status(&self) -> ElevatorStatus {
        self.shared.dispatcher.lock().status()
    }
}

impl Drop for Elevator {
    fn drop(&mut self) {
        self.shutdown();
    }
}

fn step_loop(
    shared: Arc<Shared>,
    tick_interval: Duration,
    shutdown_rx: Receiver<()>,
    events_tx: Sender<DispatchEvent>,
) {
    let ticker = tick(tick_interval);

    loop {
        match shutdown_rx.try_recv() {
            Err(TryRecvError::Empty) => (),
            _ => break,
        }

        if !shared.paused.load(Ordering::SeqCst) {
            let event = shared.dispatcher.lock().step();
            if events_tx.send(event).is_err() {
                warn!("event receiver dropped, stopping dispatcher");
                break;
            }
        }

        select! {
            recv(shutdown_rx) -> _ => break,
            recv(ticker) -> _ => (),
        }
    }
    debug!("dispatcher loop finished");
}

/// ----- DISPLAY MODULE -----
/// Prints every event coming out of the dispatcher. Runs until all
/// senders are gone.

use crossbeam_channel::Receiver;

use crate::utilities::event::DispatchEvent;

pub fn main(events_rx: Receiver<DispatchEvent>) {
    for event in events_rx.iter() {
        println!("{}", event);
    }
}

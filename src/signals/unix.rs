//! SIGINT handling in Unix systems.
use std::sync::mpsc::Sender;
use std::thread;

use signal_hook::consts::SIGINT;
use signal_hook::iterator::Signals;

use super::Event;
use crate::error::{err, Error};

/// Forward each SIGINT to `sender` from a dedicated thread.
pub fn register(sender: Sender<Event>) -> Result<(), Error> {
    let mut signals = Signals::new(&[SIGINT])
        .map_err(|e| err!("Failed to register SIGINT handler: {}", e))?;

    thread::Builder::new()
        .name("sigint".into())
        .spawn(move || {
            for signal in signals.forever() {
                tracing::debug!(signal, "Interrupt received");
                if sender.send(Event::Interrupt(signal)).is_err() {
                    // Main loop is gone; keep swallowing interrupts anyway.
                    tracing::debug!("Main loop no longer listening");
                }
            }
        })
        .map_err(|e| err!("Failed to start signal thread: {}", e))?;

    tracing::debug!(signal = SIGINT, "Installed interrupt handler");
    Ok(())
}

//! Ctrl-C handling where there are no Unix signals.
use std::sync::mpsc::Sender;

use super::Event;
use crate::error::{err, Error};

/// Value of SIGINT in the C runtime.
const SIGINT: i32 = 2;

pub fn register(sender: Sender<Event>) -> Result<(), Error> {
    ctrlc::set_handler(move || {
        let _ = sender.send(Event::Interrupt(SIGINT));
    })
    .map_err(|e| err!("Failed to register Ctrl-C handler: {}", e))?;

    tracing::debug!(signal = SIGINT, "Installed interrupt handler");
    Ok(())
}

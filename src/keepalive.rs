use std::io::Write;
use std::sync::mpsc::{Receiver, RecvTimeoutError};
use std::time::{Duration, Instant};

use crate::error::Error;
use crate::interceptor::{self, STATUS_LINE};
use crate::signals::Event;

#[derive(Debug, Clone)]
pub struct Settings {
    pub interval: Duration,
    /// Stop after this many status lines. `None` runs until the event
    /// channel closes, which never happens in the binary.
    pub count: Option<u64>,
}

impl Default for Settings {
    fn default() -> Self {
        Settings {
            interval: Duration::from_secs(1),
            count: None,
        }
    }
}

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Stats {
    pub ticks: u64,
    pub interrupts: u64,
}

/// Print the status line once per `interval`, reporting any interrupt that
/// arrives in between.
///
/// An interrupt is handled to completion on this thread and the loop then
/// sleeps out the rest of the same interval, so the status cadence only
/// slips by however long the report took.
pub fn run<W: Write>(out: &mut W, events: &Receiver<Event>, settings: &Settings) -> Result<Stats, Error> {
    let mut stats = Stats::default();

    loop {
        writeln!(out, "{}", STATUS_LINE)?;
        out.flush()?;
        stats.ticks += 1;

        if settings.count == Some(stats.ticks) {
            return Ok(stats);
        }

        let deadline = Instant::now() + settings.interval;
        loop {
            let remaining = deadline.saturating_duration_since(Instant::now());
            if remaining.is_zero() {
                break;
            }
            match events.recv_timeout(remaining) {
                Ok(Event::Interrupt(signal)) => {
                    interceptor::report_interrupt(out, signal)?;
                    stats.interrupts += 1;
                }
                Err(RecvTimeoutError::Timeout) => break,
                Err(RecvTimeoutError::Disconnected) => {
                    tracing::debug!("Interrupt source closed");
                    return Ok(stats);
                }
            }
        }
    }
}

//! Process-wide interrupt registration.
//!
//! The OS-facing side only forwards; the report itself is written by the main
//! loop when it picks the event off the channel.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::mpsc::Sender;

use crate::error::{err, Error};

#[cfg(unix)]
mod unix;
#[cfg(unix)]
use self::unix::register;

#[cfg(not(unix))]
mod other;
#[cfg(not(unix))]
use self::other::register;

static INSTALLED: AtomicBool = AtomicBool::new(false);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Event {
    /// An interrupt request was delivered, carrying its signal number.
    Interrupt(i32),
}

/// Route every interrupt delivered to this process to `sender`.
///
/// May succeed only once per process; the disposition it sets up is never
/// replaced or removed.
pub fn install_handler(sender: Sender<Event>) -> Result<(), Error> {
    if INSTALLED
        .compare_exchange(false, true, Ordering::SeqCst, Ordering::SeqCst)
        .is_err()
    {
        return Err(err!("Interrupt handler is already installed"));
    }
    register(sender).map_err(|e| {
        INSTALLED.store(false, Ordering::SeqCst);
        e
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::mpsc::channel;

    #[test]
    fn test_install_only_once() {
        let (sender, _receiver) = channel();
        install_handler(sender.clone()).unwrap();
        let second = install_handler(sender);
        assert!(second.is_err(), "second install must not replace the handler");
        assert_eq!(second.unwrap_err().message, "Interrupt handler is already installed");
    }
}

//! Background timer that periodically raises a [`StatusFlag`].
//!
//! The engine consumes the flag at its next poll and logs one progress line.
//! Dropping the timer stops and joins the thread.

use std::sync::mpsc::{self, RecvTimeoutError, Sender};
use std::thread::JoinHandle;
use std::time::Duration;

use quarry_search::StatusFlag;

#[derive(Debug)]
pub struct StatusTimer {
    stop: Option<Sender<()>>,
    handle: Option<JoinHandle<()>>,
}

impl StatusTimer {
    /// Raise `flag` every `period` until the timer is dropped.
    #[must_use]
    pub fn start(flag: StatusFlag, period: Duration) -> Self {
        let (stop, stopped) = mpsc::channel::<()>();
        let handle = std::thread::spawn(move || loop {
            match stopped.recv_timeout(period) {
                Err(RecvTimeoutError::Timeout) => flag.raise(),
                Ok(()) | Err(RecvTimeoutError::Disconnected) => break,
            }
        });
        Self {
            stop: Some(stop),
            handle: Some(handle),
        }
    }
}

impl Drop for StatusTimer {
    fn drop(&mut self) {
        drop(self.stop.take());
        if let Some(handle) = self.handle.take() {
            if handle.join().is_err() {
                tracing::warn!("status timer thread panicked");
            }
        }
    }
}

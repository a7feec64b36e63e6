// File: crates/popchart-core/src/playback.rs
// Summary: Owned repeating timer for the time-lapse. At most one ticker runs; starting a new
// one stops the old one first, and stopping joins the thread so no tick fires afterwards.

use std::sync::mpsc::{self, RecvTimeoutError, Sender};
use std::thread::{self, JoinHandle};
use std::time::Duration;

use tracing::{debug, warn};

struct Ticker {
    // Dropping the sender wakes the thread out of `recv_timeout` and ends the loop.
    stop_tx: Option<Sender<()>>,
    handle: Option<JoinHandle<()>>,
}

impl Ticker {
    fn spawn<F>(interval: Duration, mut on_tick: F) -> std::io::Result<Self>
    where
        F: FnMut() + Send + 'static,
    {
        let (stop_tx, stop_rx) = mpsc::channel::<()>();
        let handle = thread::Builder::new().name("popchart-ticker".into()).spawn(move || loop {
            match stop_rx.recv_timeout(interval) {
                Err(RecvTimeoutError::Timeout) => on_tick(),
                Ok(()) | Err(RecvTimeoutError::Disconnected) => break,
            }
        })?;
        Ok(Self { stop_tx: Some(stop_tx), handle: Some(handle) })
    }

    fn stop(&mut self) {
        drop(self.stop_tx.take());
        if let Some(handle) = self.handle.take() {
            // Stopped from inside a tick callback: the loop exits on its own.
            if handle.thread().id() == thread::current().id() {
                return;
            }
            if handle.join().is_err() {
                warn!("ticker thread panicked");
            }
        }
    }
}

impl Drop for Ticker {
    fn drop(&mut self) {
        self.stop();
    }
}

#[derive(Default)]
pub struct PlaybackTimer {
    ticker: Option<Ticker>,
}

impl PlaybackTimer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_running(&self) -> bool {
        self.ticker.is_some()
    }

    /// Call `on_tick` every `interval` until cancelled. A running ticker is cancelled first.
    pub fn start<F>(&mut self, interval: Duration, on_tick: F) -> std::io::Result<()>
    where
        F: FnMut() + Send + 'static,
    {
        self.cancel();
        self.ticker = Some(Ticker::spawn(interval, on_tick)?);
        debug!(?interval, "ticker started");
        Ok(())
    }

    /// Stop the ticker. When this returns no further tick will be delivered.
    pub fn cancel(&mut self) {
        if let Some(mut ticker) = self.ticker.take() {
            ticker.stop();
            debug!("ticker cancelled");
        }
    }
}

//! Cancellable frame clock driving the orbit animation.

use std::sync::mpsc::{self, Receiver, RecvTimeoutError};
use std::sync::{Arc, RwLock};
use std::thread;
use std::time::{Duration, Instant};

/// One frame signal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Tick {
    /// Frames emitted before this one.
    pub frame: u64,
    /// When the tick was emitted.
    pub at: Instant,
}

/// Frame clock running on a background thread until stopped or dropped.
#[derive(Debug)]
pub struct Ticker {
    ticks: Receiver<Tick>,
    /// Flag to signal thread termination.
    running: Arc<RwLock<bool>>,
    interval: Duration,
}

impl Ticker {
    /// Start emitting a [`Tick`] every `interval`.
    pub fn start(interval: Duration) -> Self {
        let (tx, ticks) = mpsc::channel();
        let running = Arc::new(RwLock::new(true));
        let flag = running.clone();

        thread::spawn(move || {
            let mut frame = 0;
            let mut next = Instant::now() + interval;
            loop {
                let now = Instant::now();
                if next > now {
                    thread::sleep(next - now);
                }

                if let Ok(is_running) = flag.read()
                    && !*is_running
                {
                    break;
                }

                if tx.send(Tick { frame, at: Instant::now() }).is_err() {
                    // Receiver gone
                    break;
                }
                frame += 1;
                // Skip missed frames instead of bursting to catch up.
                next = (next + interval).max(Instant::now());
            }
            log::debug!("ticker stopped after {frame} frames");
        });

        log::debug!("ticker started at {} ms", interval.as_millis());
        Self {
            ticks,
            running,
            interval,
        }
    }

    pub fn interval(&self) -> Duration {
        self.interval
    }

    pub fn is_running(&self) -> bool {
        self.running.read().map(|r| *r).unwrap_or(false)
    }

    /// Signal the thread to stop. Ticks already queued can still be drained.
    pub fn stop(&self) {
        if let Ok(mut running) = self.running.write() {
            *running = false;
        }
    }

    /// Every tick queued since the last call, without blocking.
    pub fn drain(&self) -> Vec<Tick> {
        self.ticks.try_iter().collect()
    }

    /// Wait up to `timeout` for the next tick.
    ///
    /// Returns `None` on timeout or once the clock has stopped and the queue
    /// is empty.
    pub fn wait(&self, timeout: Duration) -> Option<Tick> {
        match self.ticks.recv_timeout(timeout) {
            Ok(tick) => Some(tick),
            Err(RecvTimeoutError::Timeout | RecvTimeoutError::Disconnected) => None,
        }
    }
}

impl Drop for Ticker {
    fn drop(&mut self) {
        self.stop();
    }
}

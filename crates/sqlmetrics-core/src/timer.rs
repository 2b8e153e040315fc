//! Duration timers and measurement scopes.

use std::sync::Arc;
use std::time::{Duration, Instant};

use parking_lot::Mutex;

/// A named timer accumulating duration samples.
///
/// Timers are created by the registry and handed out behind `Arc`, so every
/// caller resolving the same name records into the same sample sink.
/// Recording is thread-safe.
#[derive(Debug, Default)]
pub struct Timer {
    samples: Mutex<Vec<Duration>>,
}

impl Timer {
    pub(crate) fn new() -> Self {
        Self {
            samples: Mutex::new(Vec::new()),
        }
    }

    /// Begin one measurement interval against this timer.
    pub fn start(self: Arc<Self>) -> RunningTimer {
        RunningTimer {
            timer: self,
            started_at: Instant::now(),
        }
    }

    /// Record a raw duration sample.
    pub fn record(&self, duration: Duration) {
        self.samples.lock().push(duration);
    }

    /// Number of samples recorded so far.
    pub fn count(&self) -> u64 {
        self.samples.lock().len() as u64
    }

    /// Snapshot of every recorded sample, in recording order.
    pub fn samples(&self) -> Vec<Duration> {
        self.samples.lock().clone()
    }

    /// Remove all recorded samples.
    pub fn reset(&self) {
        self.samples.lock().clear();
    }
}

/// One in-progress measurement interval.
///
/// [`stop`](Self::stop) consumes the value, so each interval records at most
/// one sample. A value dropped without stopping records nothing.
#[must_use = "a running timer records nothing until it is stopped"]
#[derive(Debug)]
pub struct RunningTimer {
    timer: Arc<Timer>,
    started_at: Instant,
}

impl RunningTimer {
    /// Stop the interval and record the elapsed duration as one sample.
    pub fn stop(self) -> Duration {
        let elapsed = self.started_at.elapsed();
        self.timer.record(elapsed);
        elapsed
    }
}

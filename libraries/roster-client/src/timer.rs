//! Interval-driven stopwatch and tick-counting delay.

use roster_core::format_elapsed;
use std::time::Duration;
use tokio::sync::watch;
use tokio::task::JoinHandle;
use tokio::time::{interval, MissedTickBehavior};
use tracing::debug;

/// Counts elapsed periods on a background task.
///
/// The count starts at zero and increments once per period. The task stops
/// on [`stop`](Self::stop) or when the stopwatch is dropped.
#[derive(Debug)]
pub struct Stopwatch {
    elapsed: watch::Receiver<u64>,
    task: JoinHandle<()>,
}

impl Stopwatch {
    /// Start counting on the current tokio runtime.
    pub fn start(period: Duration) -> Self {
        let (tx, rx) = watch::channel(0u64);

        let task = tokio::spawn(async move {
            let mut ticker = interval(period);
            ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);
            // First tick completes immediately
            ticker.tick().await;

            loop {
                ticker.tick().await;
                tx.send_modify(|count| *count += 1);
            }
        });

        Self { elapsed: rx, task }
    }

    /// Periods elapsed so far
    pub fn elapsed(&self) -> u64 {
        *self.elapsed.borrow()
    }

    /// `MM:SS` / `HH:MM:SS` rendering of [`elapsed`](Self::elapsed), assuming one-second periods
    pub fn formatted(&self) -> String {
        format_elapsed(self.elapsed())
    }

    /// Receiver notified on every increment.
    pub fn subscribe(&self) -> watch::Receiver<u64> {
        self.elapsed.clone()
    }

    /// Stop counting. The last count stays readable.
    pub fn stop(&self) {
        self.task.abort();
    }
}

impl Drop for Stopwatch {
    fn drop(&mut self) {
        self.task.abort();
    }
}

/// Resolve after `ticks` periods have elapsed, returning the tick count.
///
/// Each tick is logged at debug level. Zero ticks resolves immediately.
pub async fn resolve_after_ticks(ticks: u32, period: Duration) -> u32 {
    if ticks == 0 {
        return 0;
    }

    let mut ticker = interval(period);
    ticker.tick().await;

    let mut count = 0;
    while count < ticks {
        ticker.tick().await;
        count += 1;
        debug!(tick = count, "Tick");
    }
    count
}

//! Fixed pacing between page requests.

use std::time::Duration;

/// Waits between consecutive page requests.
pub trait Pacer {
    fn pause(&self, delay: Duration);
}

/// Blocks the current thread for the full delay.
#[derive(Debug, Clone, Copy, Default)]
pub struct ThreadSleepPacer;

impl Pacer for ThreadSleepPacer {
    fn pause(&self, delay: Duration) {
        if !delay.is_zero() {
            std::thread::sleep(delay);
        }
    }
}

/// Returns immediately.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoDelay;

impl Pacer for NoDelay {
    fn pause(&self, _delay: Duration) {}
}

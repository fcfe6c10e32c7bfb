//! Delay strategies for the warning printer

use std::time::Duration;

/// Pause before a warning is printed
pub const WARNING_DELAY: Duration = Duration::from_secs(1);

/// Something that can hold the caller for a duration
pub trait Delay {
    /// Block for `duration`.
    fn wait(&self, duration: Duration);
}

/// Blocks the calling thread with `std::thread::sleep`
#[derive(Debug, Clone, Copy, Default)]
pub struct ThreadSleep;

impl Delay for ThreadSleep {
    fn wait(&self, duration: Duration) {
        std::thread::sleep(duration);
    }
}

/// Returns immediately
#[derive(Debug, Clone, Copy, Default)]
pub struct NoDelay;

impl Delay for NoDelay {
    fn wait(&self, _duration: Duration) {}
}

//! Shared test utilities
//!
//! Fakes for the formatter's capabilities. Only compiled in test builds.

use std::cell::RefCell;
use std::io::{self, Write};
use std::rc::Rc;
use std::time::Duration;

use crate::delay::Delay;
use crate::env::MapEnv;
use crate::output::{ColorMode, Formatter};

/// Formatter writing into memory with colors on, an empty environment
/// and a no-op warning delay.
#[must_use]
pub fn test_formatter() -> Formatter<Vec<u8>> {
    Formatter::new(Vec::new())
        .with_color(ColorMode::Always)
        .with_env(MapEnv::new())
        .with_delay(crate::delay::NoDelay)
}

/// Everything written to an in-memory formatter so far.
#[must_use]
pub fn output_of(fmt: &Formatter<Vec<u8>>) -> String {
    String::from_utf8(fmt.sink().clone()).unwrap()
}

/// Sink that counts explicit flushes
#[derive(Debug, Default)]
pub struct CountingSink {
    pub buf: Vec<u8>,
    pub flushes: usize,
}

impl Write for CountingSink {
    fn write(&mut self, data: &[u8]) -> io::Result<usize> {
        self.buf.extend_from_slice(data);
        Ok(data.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        self.flushes += 1;
        Ok(())
    }
}

/// Delay that records requested durations instead of sleeping
#[derive(Debug, Clone, Default)]
pub struct RecordingDelay {
    waits: Rc<RefCell<Vec<Duration>>>,
}

impl RecordingDelay {
    /// Durations requested so far
    #[must_use]
    pub fn waits(&self) -> Vec<Duration> {
        self.waits.borrow().clone()
    }
}

impl Delay for RecordingDelay {
    fn wait(&self, duration: Duration) {
        self.waits.borrow_mut().push(duration);
    }
}

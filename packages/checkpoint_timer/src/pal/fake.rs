//! Fake platform implementation for testing.

use std::sync::{Arc, Mutex};

use crate::pal::Platform;

/// Fake implementation of the platform abstraction for testing.
///
/// Time only moves when the test says so. Multiple clones of the same `FakePlatform` share
/// the same underlying time, allowing tests to advance time after handing a clone to the
/// code under test.
#[derive(Clone, Debug)]
pub(crate) struct FakePlatform {
    micros: Arc<Mutex<u64>>,
}

impl FakePlatform {
    /// Creates a new fake platform whose clock reads zero.
    pub(crate) fn new() -> Self {
        Self {
            micros: Arc::new(Mutex::new(0)),
        }
    }

    /// Sets the current time.
    pub(crate) fn set_micros(&self, micros: u64) {
        *self
            .micros
            .lock()
            .expect("FakePlatform state lock should not be poisoned") = micros;
    }

    /// Moves the current time forward.
    pub(crate) fn advance_micros(&self, micros: u64) {
        let mut now = self
            .micros
            .lock()
            .expect("FakePlatform state lock should not be poisoned");

        *now = now
            .checked_add(micros)
            .expect("test advanced the fake clock beyond u64");
    }
}

impl Platform for FakePlatform {
    fn now_micros(&self) -> u64 {
        *self
            .micros
            .lock()
            .expect("FakePlatform state lock should not be poisoned")
    }
}

#[cfg(test)]
#[cfg_attr(coverage_nightly, coverage(off))]
mod tests {
    use super::*;

    #[test]
    fn initializes_with_zero_time() {
        let platform = FakePlatform::new();
        assert_eq!(platform.now_micros(), 0);
    }

    #[test]
    fn set_and_advance() {
        let platform = FakePlatform::new();

        platform.set_micros(1_000);
        assert_eq!(platform.now_micros(), 1_000);

        platform.advance_micros(250);
        assert_eq!(platform.now_micros(), 1_250);
    }

    #[test]
    fn shared_state_between_clones() {
        let platform1 = FakePlatform::new();
        let platform2 = platform1.clone();

        platform1.advance_micros(100);
        assert_eq!(platform2.now_micros(), 100);

        platform2.set_micros(500);
        assert_eq!(platform1.now_micros(), 500);
    }
}

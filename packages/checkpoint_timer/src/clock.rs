use std::fmt;

use crate::pal::{Platform, PlatformFacade};

/// A point in time, in microseconds since an arbitrary origin chosen by the platform clock.
///
/// Timestamps from the same [`Clock`] never decrease. A `u64` microsecond counter wraps
/// after roughly 584 000 years, so overflow is not a concern for any realistic run.
#[derive(Clone, Copy, Debug, Default, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub struct Timestamp(u64);

impl Timestamp {
    /// The origin of the platform clock.
    pub const ZERO: Self = Self(0);

    /// Creates a timestamp from a raw microsecond value.
    #[must_use]
    pub const fn from_micros(micros: u64) -> Self {
        Self(micros)
    }

    /// Returns the raw microsecond value of the timestamp.
    #[must_use]
    pub const fn as_micros(self) -> u64 {
        self.0
    }

    /// Microseconds elapsed from `earlier` to `self`, or zero if `earlier` is later.
    #[must_use]
    pub const fn saturating_micros_since(self, earlier: Self) -> u64 {
        self.0.saturating_sub(earlier.0)
    }

    /// Returns a timestamp `micros` later than `self`, clamped to the end of time.
    #[must_use]
    pub const fn saturating_add_micros(self, micros: u64) -> Self {
        Self(self.0.saturating_add(micros))
    }
}

impl fmt::Display for Timestamp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}us", self.0)
    }
}

/// A monotonic clock with microsecond resolution.
///
/// The implementation is chosen per build target:
///
/// * Unix: `clock_gettime(CLOCK_MONOTONIC)`, unaffected by wall clock adjustments.
/// * Windows: the high-resolution performance counter, scaled to microseconds with integer
///   arithmetic.
/// * Anything else: [`std::time::Instant`].
///
/// # Examples
///
/// ```
/// use checkpoint_timer::Clock;
///
/// let clock = Clock::new();
///
/// let start = clock.now();
/// std::thread::sleep(std::time::Duration::from_millis(2));
/// let end = clock.now();
///
/// assert!(end.saturating_micros_since(start) >= 1_000);
/// ```
#[derive(Clone, Debug)]
pub struct Clock {
    platform: PlatformFacade,
}

impl Clock {
    /// Creates a clock backed by the build target platform.
    #[must_use]
    pub fn new() -> Self {
        Self::with_platform(PlatformFacade::real())
    }

    pub(crate) fn with_platform(platform: PlatformFacade) -> Self {
        Self { platform }
    }

    /// Reads the current timestamp.
    ///
    /// # Panics
    ///
    /// Panics if the operating system refuses to report the time. This does not happen on
    /// any supported platform.
    #[must_use]
    pub fn now(&self) -> Timestamp {
        Timestamp(self.platform.now_micros())
    }
}

impl Default for Clock {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
#[cfg_attr(coverage_nightly, coverage(off))]
mod tests {
    use static_assertions::assert_impl_all;

    use super::*;
    use crate::pal::FakePlatform;

    assert_impl_all!(Clock: Send, Sync);
    assert_impl_all!(Timestamp: Send, Sync, Copy);

    #[test]
    fn now_follows_platform() {
        let platform = FakePlatform::new();
        let clock = Clock::with_platform(PlatformFacade::fake(platform.clone()));

        assert_eq!(clock.now(), Timestamp::ZERO);

        platform.advance_micros(1_500);
        assert_eq!(clock.now().as_micros(), 1_500);
    }

    #[test]
    fn saturating_micros_since_clamps_at_zero() {
        let earlier = Timestamp::from_micros(100);
        let later = Timestamp::from_micros(350);

        assert_eq!(later.saturating_micros_since(earlier), 250);
        assert_eq!(earlier.saturating_micros_since(later), 0);
    }

    #[test]
    fn saturating_add_micros_clamps_at_max() {
        let near_end = Timestamp::from_micros(u64::MAX - 10);

        assert_eq!(near_end.saturating_add_micros(5).as_micros(), u64::MAX - 5);
        assert_eq!(near_end.saturating_add_micros(100).as_micros(), u64::MAX);
    }

    #[test]
    fn display_shows_microseconds() {
        assert_eq!(Timestamp::from_micros(42).to_string(), "42us");
    }

    #[test]
    fn real_clock_never_goes_backwards() {
        let clock = Clock::new();

        let mut previous = clock.now();
        for _ in 0..1000 {
            let current = clock.now();
            assert!(current >= previous);
            previous = current;
        }
    }
}

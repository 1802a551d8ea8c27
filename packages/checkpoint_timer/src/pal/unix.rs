use std::{io, mem};

use libc::{CLOCK_MONOTONIC, timespec};

use crate::MICROS_PER_SECOND;
use crate::pal::Platform;

const NANOS_PER_MICRO: u64 = 1_000;

/// Singleton instance of `BuildTargetPlatform`, used by public API types
/// to hook up to the correct PAL implementation.
pub(crate) static BUILD_TARGET_PLATFORM: BuildTargetPlatform = BuildTargetPlatform::new();

/// Reads the monotonic clock, which is not affected by wall clock adjustments
/// applied while the process is running.
#[derive(Debug)]
pub(crate) struct BuildTargetPlatform;

impl BuildTargetPlatform {
    // Only executed in const context.
    #[cfg_attr(coverage_nightly, coverage(off))]
    pub(crate) const fn new() -> Self {
        Self
    }
}

impl Platform for BuildTargetPlatform {
    #[expect(
        clippy::cast_sign_loss,
        reason = "the monotonic clock never reports negative values"
    )]
    #[expect(
        clippy::integer_division,
        reason = "truncation to whole microseconds is intended"
    )]
    fn now_micros(&self) -> u64 {
        // SAFETY: All-zero is a valid initial value for this type.
        let mut ts: timespec = unsafe { mem::zeroed() };

        // SAFETY: We are passing valid arguments, no other safety requirements.
        let result = unsafe { libc::clock_gettime(CLOCK_MONOTONIC, &raw mut ts) };

        assert!(result == 0, "{}", io::Error::last_os_error());

        (ts.tv_sec as u64)
            .checked_mul(MICROS_PER_SECOND)
            .and_then(|micros| micros.checked_add(ts.tv_nsec as u64 / NANOS_PER_MICRO))
            .expect("platform timestamp beyond the end of the universe - impossible")
    }
}

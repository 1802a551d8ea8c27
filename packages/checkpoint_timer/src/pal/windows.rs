use std::num::NonZero;
use std::sync::OnceLock;

use windows::Win32::System::Performance::{QueryPerformanceCounter, QueryPerformanceFrequency};

use crate::pal::{Platform, ticks_to_micros};

/// Singleton instance of `BuildTargetPlatform`, used by public API types
/// to hook up to the correct PAL implementation.
pub(crate) static BUILD_TARGET_PLATFORM: BuildTargetPlatform = BuildTargetPlatform::new();

/// Reads the high-resolution performance counter and scales it to microseconds.
#[derive(Debug)]
pub(crate) struct BuildTargetPlatform {
    // The counter frequency is fixed at system boot, so we only ask once.
    frequency: OnceLock<NonZero<u64>>,
}

impl BuildTargetPlatform {
    // Only executed in const context.
    #[cfg_attr(coverage_nightly, coverage(off))]
    pub(crate) const fn new() -> Self {
        Self {
            frequency: OnceLock::new(),
        }
    }

    fn frequency(&self) -> NonZero<u64> {
        *self.frequency.get_or_init(|| {
            let mut frequency = 0_i64;

            // SAFETY: We are passing a valid pointer, no other safety requirements.
            unsafe { QueryPerformanceFrequency(&raw mut frequency) }
                .expect("QueryPerformanceFrequency never fails on supported Windows versions");

            u64::try_from(frequency)
                .ok()
                .and_then(NonZero::new)
                .expect("performance counter frequency is always positive")
        })
    }
}

impl Platform for BuildTargetPlatform {
    fn now_micros(&self) -> u64 {
        let mut counter = 0_i64;

        // SAFETY: We are passing a valid pointer, no other safety requirements.
        unsafe { QueryPerformanceCounter(&raw mut counter) }
            .expect("QueryPerformanceCounter never fails on supported Windows versions");

        ticks_to_micros(
            u64::try_from(counter).expect("performance counter is never negative"),
            self.frequency(),
        )
    }
}

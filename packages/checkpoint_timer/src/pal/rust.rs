use std::sync::OnceLock;
use std::time::Instant;

use crate::pal::Platform;

/// Singleton instance of `BuildTargetPlatform`, used by public API types
/// to hook up to the correct PAL implementation.
pub(crate) static BUILD_TARGET_PLATFORM: BuildTargetPlatform = BuildTargetPlatform::new();

/// Portable fallback that measures time with [`Instant`] relative to the first read.
///
/// We use this under Miri and on targets without a dedicated implementation.
#[derive(Debug)]
pub(crate) struct BuildTargetPlatform {
    epoch: OnceLock<Instant>,
}

impl BuildTargetPlatform {
    pub(crate) const fn new() -> Self {
        Self {
            epoch: OnceLock::new(),
        }
    }
}

impl Platform for BuildTargetPlatform {
    fn now_micros(&self) -> u64 {
        let epoch = *self.epoch.get_or_init(Instant::now);

        u64::try_from(epoch.elapsed().as_micros())
            .expect("unrealistically long duration, never going to happen with real clocks")
    }
}

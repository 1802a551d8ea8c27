use std::fmt::Debug;

/// Reads the current time from the platform.
///
/// Implemented by the build target platform and by test doubles.
#[cfg_attr(test, mockall::automock)]
pub(crate) trait Platform: Debug + Send + Sync + 'static {
    /// Microseconds elapsed since an arbitrary platform-defined origin.
    ///
    /// Consecutive calls never return a smaller value.
    fn now_micros(&self) -> u64;
}

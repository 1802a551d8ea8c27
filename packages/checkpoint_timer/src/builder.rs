use crate::checkpoints::Checkpoints;
use crate::pal::PlatformFacade;
use crate::{Clock, KeyStrategy, Profiler};

/// Creates instances of [`Profiler`].
///
/// All parameters are optional. Use `Profiler::builder()` to create a new instance of
/// this builder.
///
/// # Example
///
/// ```
/// use checkpoint_timer::{KeyStrategy, Profiler};
///
/// let mut profiler = Profiler::builder()
///     .key_strategy(KeyStrategy::Identity)
///     .build();
///
/// profiler.mark(Some("startup"));
/// ```
#[derive(Debug)]
#[must_use]
pub struct ProfilerBuilder {
    key_strategy: KeyStrategy,
    platform: PlatformFacade,
}

impl ProfilerBuilder {
    pub(crate) fn new() -> Self {
        Self {
            key_strategy: KeyStrategy::default(),
            platform: PlatformFacade::real(),
        }
    }

    /// Sets how checkpoint names are compared.
    ///
    /// The default is [`KeyStrategy::Content`], which is correct for names from any source.
    pub fn key_strategy(self, key_strategy: KeyStrategy) -> Self {
        Self {
            key_strategy,
            ..self
        }
    }

    /// Replaces the platform clock, for tests that need to control time.
    #[cfg(test)]
    pub(crate) fn platform(self, platform: PlatformFacade) -> Self {
        Self { platform, ..self }
    }

    /// Builds the profiler. The clock starts now.
    #[must_use]
    pub fn build(self) -> Profiler {
        Profiler::start(
            Clock::with_platform(self.platform),
            Checkpoints::new(self.key_strategy),
        )
    }
}

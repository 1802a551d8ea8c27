/// Running statistics of the intervals attributed to one checkpoint.
///
/// All values are in whole microseconds and cover the samples recorded since the last
/// reset of the record.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct CheckpointRecord {
    total: u64,
    count: u64,

    // u64::MAX until the first sample arrives.
    min: u64,
    max: u64,
}

impl CheckpointRecord {
    pub(crate) const fn new() -> Self {
        Self {
            total: 0,
            count: 0,
            min: u64::MAX,
            max: 0,
        }
    }

    /// Adds one interval to the statistics.
    pub(crate) fn observe(&mut self, elapsed_micros: u64) {
        self.total = self
            .total
            .checked_add(elapsed_micros)
            .expect("checkpoint total overflows u64 microseconds - this indicates an unrealistic scenario");

        self.count = self
            .count
            .checked_add(1)
            .expect("checkpoint sample count overflows u64 - this indicates an unrealistic scenario");

        self.min = self.min.min(elapsed_micros);
        self.max = self.max.max(elapsed_micros);
    }

    /// Forgets all samples.
    pub(crate) fn reset(&mut self) {
        *self = Self::new();
    }

    /// Number of intervals attributed to the checkpoint.
    #[must_use]
    pub fn count(&self) -> u64 {
        self.count
    }

    /// Sum of all intervals, in microseconds.
    #[must_use]
    pub fn total(&self) -> u64 {
        self.total
    }

    /// Shortest interval, in microseconds.
    ///
    /// Zero if there are no samples.
    #[must_use]
    pub fn min(&self) -> u64 {
        if self.count == 0 { 0 } else { self.min }
    }

    /// Longest interval, in microseconds.
    #[must_use]
    pub fn max(&self) -> u64 {
        self.max
    }

    /// Mean interval, in microseconds, truncated to a whole microsecond.
    ///
    /// Zero if there are no samples.
    #[must_use]
    pub fn mean(&self) -> u64 {
        self.total.checked_div(self.count).unwrap_or_default()
    }

    /// Whether any interval has been recorded since the last reset.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.count == 0
    }
}

impl Default for CheckpointRecord {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
#[cfg_attr(coverage_nightly, coverage(off))]
mod tests {
    use super::*;

    #[test]
    fn new_record_is_empty() {
        let record = CheckpointRecord::new();

        assert!(record.is_empty());
        assert_eq!(record.count(), 0);
        assert_eq!(record.total(), 0);
        assert_eq!(record.max(), 0);
        assert_eq!(record.mean(), 0);
    }

    #[test]
    fn min_of_empty_record_reads_zero() {
        // The internal sentinel must never leak out.
        assert_eq!(CheckpointRecord::new().min(), 0);
    }

    #[test]
    fn observe_tracks_total_count_min_max() {
        let mut record = CheckpointRecord::new();

        record.observe(100);
        record.observe(300);
        record.observe(200);

        assert_eq!(record.count(), 3);
        assert_eq!(record.total(), 600);
        assert_eq!(record.min(), 100);
        assert_eq!(record.max(), 300);
        assert_eq!(record.mean(), 200);
    }

    #[test]
    fn mean_lies_between_min_and_max() {
        let mut record = CheckpointRecord::new();

        for elapsed in [7, 1_000, 13, 999_999, 0, 42] {
            record.observe(elapsed);
        }

        assert!(record.min() <= record.mean());
        assert!(record.mean() <= record.max());
        assert_eq!(record.min(), 0);
        assert_eq!(record.max(), 999_999);
    }

    #[test]
    fn zero_length_interval_is_a_sample() {
        let mut record = CheckpointRecord::new();
        record.observe(0);

        assert!(!record.is_empty());
        assert_eq!(record.count(), 1);
        assert_eq!(record.total(), 0);
        assert_eq!(record.min(), 0);
    }

    #[test]
    fn reset_restores_initial_state() {
        let mut record = CheckpointRecord::new();
        record.observe(5);
        record.observe(50);

        record.reset();

        assert_eq!(record, CheckpointRecord::new());

        // The minimum starts over from the sentinel, not from the old value.
        record.observe(70);
        assert_eq!(record.min(), 70);
    }
}

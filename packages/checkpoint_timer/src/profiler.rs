use std::io;

use tracing::{debug, trace};

use crate::checkpoints::Checkpoints;
use crate::{CheckpointRecord, Clock, MICROS_PER_SECOND, ProfilerBuilder, Report, Result, Timestamp};

/// Attributes the time between consecutive checkpoints to checkpoint names and reports the
/// accumulated statistics.
///
/// The profiler is owned by the caller and driven from a single timeline of [`mark()`]
/// calls interleaved with the code being measured. Reports are windowed: each one covers
/// only the samples recorded since the previous report.
///
/// [`mark()`]: Self::mark
///
/// # Examples
///
/// ```
/// use std::time::Duration;
///
/// use checkpoint_timer::Profiler;
///
/// let mut profiler = Profiler::new();
///
/// for _ in 0..3 {
///     std::thread::sleep(Duration::from_millis(1));
///     profiler.mark(Some("read"));
///
///     std::thread::sleep(Duration::from_millis(2));
///     profiler.mark(Some("write"));
/// }
///
/// let report = profiler.render().expect("time passed, so there is something to report");
/// assert_eq!(report.rows().len(), 2);
///
/// // Rendering reset all statistics.
/// assert!(profiler.render().is_none());
/// ```
#[derive(Debug)]
pub struct Profiler {
    clock: Clock,
    checkpoints: Checkpoints,

    // Start of the interval that the next named mark will close.
    interval_start: Timestamp,

    // When the periodic dump last opened its gate.
    last_dump: Timestamp,

    last_report: Option<Report>,
}

impl Profiler {
    /// Creates a profiler with the default configuration and starts its clock.
    ///
    /// Use [`builder()`](Self::builder) to customize the profiler.
    #[expect(
        clippy::new_without_default,
        reason = "construction starts the clock - that is an action, not a default value"
    )]
    #[must_use]
    pub fn new() -> Self {
        Self::builder().build()
    }

    /// Creates a builder for a customized profiler.
    pub fn builder() -> ProfilerBuilder {
        ProfilerBuilder::new()
    }

    pub(crate) fn start(clock: Clock, checkpoints: Checkpoints) -> Self {
        let now = clock.now();

        Self {
            clock,
            checkpoints,
            interval_start: now,
            last_dump: now,
            last_report: None,
        }
    }

    /// Marks a checkpoint, closing the interval that started when the previous mark returned
    /// (or when the profiler was created).
    ///
    /// With a name, the interval is attributed to the checkpoint of that name, which is
    /// created on first use. Marking the same name repeatedly accumulates further samples.
    ///
    /// With `None`, the interval is discarded. Use this to exclude work you do not want to
    /// appear in the report.
    ///
    /// # Examples
    ///
    /// ```
    /// use checkpoint_timer::Profiler;
    ///
    /// let mut profiler = Profiler::new();
    ///
    /// // Not measured.
    /// std::thread::sleep(std::time::Duration::from_millis(1));
    /// profiler.mark(None);
    ///
    /// std::thread::sleep(std::time::Duration::from_millis(1));
    /// profiler.mark(Some("measured"));
    ///
    /// let (name, record) = profiler.checkpoints().next().unwrap();
    /// assert_eq!(name, "measured");
    /// assert_eq!(record.count(), 1);
    /// ```
    pub fn mark(&mut self, checkpoint: Option<&str>) {
        let Some(name) = checkpoint else {
            self.interval_start = self.clock.now();
            return;
        };

        let elapsed = self.clock.now().saturating_micros_since(self.interval_start);
        self.checkpoints.record(name, elapsed);

        // Bookkeeping above belongs to nobody's interval.
        self.interval_start = self.clock.now();
    }

    /// Discards the time since the previous mark. Equivalent to `mark(None)`.
    pub fn resync(&mut self) {
        self.mark(None);
    }

    /// Resets the statistics of every checkpoint without reporting them.
    ///
    /// Checkpoint names are kept, so they still appear in later reports.
    pub fn reset_all(&mut self) {
        self.checkpoints.reset_all();
    }

    /// Renders the statistics recorded since the previous report and resets them.
    ///
    /// Returns `None` and changes nothing if no time was recorded since the previous report.
    /// Otherwise, every checkpoint is reset by the time this returns and the new report is
    /// also available from [`last_report()`](Self::last_report).
    pub fn render(&mut self) -> Option<&Report> {
        if self.render_in_place() {
            self.last_report.as_ref()
        } else {
            None
        }
    }

    fn render_in_place(&mut self) -> bool {
        let Some(report) =
            Report::from_records(self.checkpoints.sorted(), self.checkpoints.total_micros())
        else {
            return false;
        };

        self.checkpoints.reset_all();

        debug!(
            checkpoints = report.rows().len(),
            window_micros = report.total_micros(),
            "rendered checkpoint report"
        );

        self.last_report = Some(report);
        true
    }

    /// Renders the statistics recorded since the previous report, resets them and prints
    /// the report to stdout.
    ///
    /// Prints nothing if no time was recorded since the previous report.
    #[cfg_attr(test, mutants::skip)] // Too difficult to test stdout output reliably - manually tested.
    pub fn dump(&mut self) {
        if let Some(report) = self.render() {
            report.print_to_stdout();
        }
    }

    /// Renders the statistics recorded since the previous report, resets them and writes
    /// the report to `sink`.
    ///
    /// Returns whether a report was written. Nothing is written if no time was recorded
    /// since the previous report.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Write`](crate::Error::Write) if the sink fails. The statistics are
    /// reset even then, and the report remains available from
    /// [`last_report()`](Self::last_report).
    pub fn dump_to(&mut self, sink: &mut impl io::Write) -> Result<bool> {
        match self.render() {
            Some(report) => {
                report.write_to(sink)?;
                Ok(true)
            }
            None => Ok(false),
        }
    }

    /// Renders a report if at least `period_seconds` have passed since the periodic gate
    /// last opened (or since the profiler was created).
    ///
    /// This is a polled time gate, not a scheduler: call it regularly, for example once per
    /// iteration of the measured loop. While the gate is closed, nothing happens. When it
    /// opens, the statistics are rendered and reset exactly as by [`render()`](Self::render)
    /// and the gate closes again for the next period, even if there was nothing to render.
    pub fn periodic_render(&mut self, period_seconds: u32) -> Option<&Report> {
        let period_micros = u64::from(period_seconds).saturating_mul(MICROS_PER_SECOND);
        let opens_at = self.last_dump.saturating_add_micros(period_micros);

        let now = self.clock.now();
        if now < opens_at {
            trace!(%now, %opens_at, "periodic report not due yet");
            return None;
        }

        let rendered = self.render_in_place();

        // The next period starts after rendering, not at the gate check.
        self.last_dump = self.clock.now();

        if rendered {
            self.last_report.as_ref()
        } else {
            None
        }
    }

    /// Prints a report to stdout if at least `period_seconds` have passed since the
    /// periodic gate last opened.
    ///
    /// See [`periodic_render()`](Self::periodic_render) for the gate semantics.
    #[cfg_attr(test, mutants::skip)] // Too difficult to test stdout output reliably - manually tested.
    pub fn periodic_dump(&mut self, period_seconds: u32) {
        if let Some(report) = self.periodic_render(period_seconds) {
            report.print_to_stdout();
        }
    }

    /// The most recently rendered report, if any.
    #[must_use]
    pub fn last_report(&self) -> Option<&Report> {
        self.last_report.as_ref()
    }

    /// The statistics of every checkpoint seen so far, sorted by name, without resetting
    /// them.
    pub fn checkpoints(&self) -> impl Iterator<Item = (&str, &CheckpointRecord)> {
        self.checkpoints.sorted()
    }

    /// Whether no time was recorded since the previous report, in which case rendering
    /// does nothing.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.checkpoints.total_micros() == 0
    }
}

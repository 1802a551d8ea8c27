//! Checkpoint reports.

use std::{fmt, io, iter};

use crate::{CheckpointRecord, Result};

/// Column header of the report table.
///
/// Scrapers of existing logs depend on this exact text.
pub const REPORT_HEADER: &str = "           name count   total(%)        min   avg   max";

const MICROS_PER_MILLI: f64 = 1000.0;

/// Snapshot of every checkpoint of a [`Profiler`](crate::Profiler) over one reporting window.
///
/// The `Display` implementation renders the report as an aligned text table: the
/// [`REPORT_HEADER`] line followed by one line per checkpoint, sorted by name.
///
/// # Examples
///
/// ```
/// use checkpoint_timer::Profiler;
///
/// let mut profiler = Profiler::new();
///
/// std::thread::sleep(std::time::Duration::from_millis(1));
/// profiler.mark(Some("sleep"));
///
/// if let Some(report) = profiler.render() {
///     for row in report.rows() {
///         println!("{} took {:.1} ms", row.name(), row.total_millis());
///     }
/// }
/// ```
#[derive(Clone, Debug, PartialEq)]
pub struct Report {
    rows: Vec<ReportRow>,
    total_micros: u64,
}

/// Statistics of a single checkpoint in a [`Report`].
///
/// Times are in milliseconds, as displayed in the table.
#[derive(Clone, Debug, PartialEq)]
pub struct ReportRow {
    name: String,
    count: u64,
    total_millis: f64,
    percent: f64,
    min_millis: f64,
    mean_millis: f64,
    max_millis: f64,
}

impl Report {
    /// Creates a report from checkpoint records in the order they are to be displayed.
    ///
    /// Returns `None` if no time was recorded by any checkpoint, as there is nothing
    /// worth reporting.
    pub(crate) fn from_records<'a>(
        records: impl IntoIterator<Item = (&'a str, &'a CheckpointRecord)>,
        total_micros: u64,
    ) -> Option<Self> {
        if total_micros == 0 {
            return None;
        }

        let window_millis = micros_to_millis(total_micros);

        let rows = records
            .into_iter()
            .map(|(name, record)| ReportRow::new(name, record, window_millis))
            .collect();

        Some(Self { rows, total_micros })
    }

    /// The rows of the report, sorted by checkpoint name.
    #[must_use]
    pub fn rows(&self) -> &[ReportRow] {
        &self.rows
    }

    /// Time recorded by all checkpoints together, in microseconds.
    ///
    /// This is the base of the percentages in the report.
    #[must_use]
    pub fn total_micros(&self) -> u64 {
        self.total_micros
    }

    /// The formatted lines of the table, header first, without line terminators.
    pub fn lines(&self) -> impl Iterator<Item = String> {
        iter::once(REPORT_HEADER.to_owned()).chain(self.rows.iter().map(ToString::to_string))
    }

    /// Prints the report table to stdout.
    #[cfg_attr(test, mutants::skip)] // Too difficult to test stdout output reliably - manually tested.
    pub fn print_to_stdout(&self) {
        print!("{self}");
    }

    /// Writes the report table to a caller-chosen sink.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Write`](crate::Error::Write) if the sink fails to accept the text.
    pub fn write_to(&self, sink: &mut impl io::Write) -> Result<()> {
        write!(sink, "{self}")?;
        Ok(())
    }
}

impl fmt::Display for Report {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{REPORT_HEADER}")?;

        for row in &self.rows {
            writeln!(f, "{row}")?;
        }

        Ok(())
    }
}

impl ReportRow {
    fn new(name: &str, record: &CheckpointRecord, window_millis: f64) -> Self {
        let total_millis = micros_to_millis(record.total());

        #[expect(
            clippy::cast_precision_loss,
            reason = "display precision is one decimal - realistic counts are far below 2^52"
        )]
        let mean_millis = if record.is_empty() {
            0.0
        } else {
            total_millis / record.count() as f64
        };

        Self {
            name: name.to_owned(),
            count: record.count(),
            total_millis,
            percent: total_millis / window_millis * 100.0,
            min_millis: micros_to_millis(record.min()),
            mean_millis,
            max_millis: micros_to_millis(record.max()),
        }
    }

    /// Name of the checkpoint.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Number of intervals attributed to the checkpoint in this window.
    #[must_use]
    pub fn count(&self) -> u64 {
        self.count
    }

    /// Sum of all intervals, in milliseconds.
    #[must_use]
    pub fn total_millis(&self) -> f64 {
        self.total_millis
    }

    /// Share of this checkpoint in the time recorded by all checkpoints, in percent.
    #[must_use]
    pub fn percent(&self) -> f64 {
        self.percent
    }

    /// Shortest interval, in milliseconds. Zero if the checkpoint saw no samples.
    #[must_use]
    pub fn min_millis(&self) -> f64 {
        self.min_millis
    }

    /// Mean interval, in milliseconds. Zero if the checkpoint saw no samples.
    #[must_use]
    pub fn mean_millis(&self) -> f64 {
        self.mean_millis
    }

    /// Longest interval, in milliseconds.
    #[must_use]
    pub fn max_millis(&self) -> f64 {
        self.max_millis
    }
}

impl fmt::Display for ReportRow {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let Self {
            name,
            count,
            total_millis,
            percent,
            min_millis,
            mean_millis,
            max_millis,
        } = self;

        write!(
            f,
            "{name:>15} {count:>5} {total_millis:>7.1}({percent:>5.1}%) {min_millis:>5.1} {mean_millis:>5.1} {max_millis:>5.1}"
        )
    }
}

#[expect(
    clippy::cast_precision_loss,
    reason = "microsecond values below 2^52 (142 years) convert exactly"
)]
fn micros_to_millis(micros: u64) -> f64 {
    micros as f64 / MICROS_PER_MILLI
}

#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

//! Attributes wall-clock time between named checkpoints in a running loop and periodically
//! prints a summary table of what each section of the loop cost.
//!
//! The core functionality includes:
//! - [`Profiler`] - Caller-owned measurement session that records intervals between checkpoints
//! - [`Report`] - Windowed snapshot of all checkpoints, rendered as an aligned text table
//! - [`CheckpointRecord`] - Running statistics (count, total, min, max) of one checkpoint
//! - [`Clock`] - Monotonic microsecond timestamp source used by the profiler
//!
//! This package is meant as a development tool for "top"-style live views of a hot loop,
//! not as a production metrics pipeline.
//!
//! # Simple usage
//!
//! Every call to [`Profiler::mark()`] closes the interval that started when the previous
//! call returned. Passing `None` discards that interval, which excludes work you do not
//! want to see in the table. Passing a name attributes the interval to that name.
//!
//! ```
//! use checkpoint_timer::Profiler;
//!
//! let mut profiler = Profiler::new();
//!
//! for _ in 0..3 {
//!     // Work that should not be measured.
//!     std::hint::black_box((0..1000).sum::<u64>());
//!     profiler.mark(None);
//!
//!     std::hint::black_box((0..5000).sum::<u64>());
//!     profiler.mark(Some("parse"));
//!
//!     std::hint::black_box((0..9000).sum::<u64>());
//!     profiler.mark(Some("evaluate"));
//!
//!     // Prints the table at most once every 5 seconds.
//!     profiler.periodic_dump(5);
//! }
//! ```
//!
//! # Output format
//!
//! Each report is a header line followed by one row per checkpoint, sorted by name:
//!
//! ```text
//!            name count   total(%)        min   avg   max
//!        evaluate     3     0.9( 64.3%)   0.3   0.3   0.3
//!           parse     3     0.5( 35.7%)   0.1   0.2   0.2
//! ```
//!
//! All times are in milliseconds. The percentage is the share of the time recorded by all
//! checkpoints in the same report.
//!
//! # Windowed reports
//!
//! Rendering a report resets the statistics of every checkpoint, so each table only covers
//! the samples recorded since the previous one. Checkpoint names are never forgotten: a
//! checkpoint that saw no samples in a window still gets a row with a zero count.
//!
//! Rendering when no time was recorded since the previous report does nothing at all.
//!
//! # Checkpoint identity
//!
//! By default checkpoints are identified by the content of their name. The
//! [`KeyStrategy::Identity`] option identifies them by the address of the name instead,
//! which is only sound if every name comes from stable (ideally `'static`) storage.
//!
//! # Threading
//!
//! A [`Profiler`] records a single timeline of checkpoints and is driven from one thread.
//! Use one profiler per thread if you need to measure several threads.

mod builder;
mod checkpoints;
mod clock;
mod error;
mod pal;
mod profiler;
mod record;
mod report;

pub use builder::*;
pub use checkpoints::KeyStrategy;
pub use clock::*;
pub use error::*;
pub use profiler::*;
pub use record::*;
pub use report::*;

/// Number of microseconds in one second.
pub(crate) const MICROS_PER_SECOND: u64 = 1_000_000;

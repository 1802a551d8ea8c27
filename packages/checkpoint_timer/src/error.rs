use std::io;

use thiserror::Error;

/// Errors that can occur when emitting checkpoint reports.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum Error {
    /// The report could not be written to the sink chosen by the caller.
    #[error("failed to write checkpoint report: {source}")]
    Write {
        /// The error reported by the sink.
        #[from]
        source: io::Error,
    },
}

/// A specialized `Result` type for checkpoint report operations, returning the crate's
/// [`Error`] type as the error value.
pub type Result<T> = std::result::Result<T, Error>;

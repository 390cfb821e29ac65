//! Error types for the job-data crate.

use thiserror::Error;

/// Errors that can occur while reading or decoding a job feed.
///
/// Note that a job record with a missing optional field is NOT an error:
/// optional fields decode to their documented defaults. These variants cover
/// feeds that cannot be read or are not valid JSON at all.
#[derive(Error, Debug)]
pub enum JobDataError {
    /// I/O error occurred while reading a feed file
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The feed body couldn't be decoded as a job feed
    ///
    /// This variant stores where in the document decoding failed
    #[error("Failed to decode job feed at line {line}, column {column}: {reason}")]
    Decode {
        line: usize,
        column: usize,
        reason: String,
    },

    /// A field had a value outside its documented set
    #[error("Invalid value for {field}: {value}")]
    InvalidValue { field: String, value: String },
}

/// Convenience type alias for Results in this crate
pub type Result<T> = std::result::Result<T, JobDataError>;

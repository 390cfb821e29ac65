//! Parser for JSON job feeds.
//!
//! A feed is normally the wire structure `{ "jobs": [...] }`, but some
//! sources hand back a bare top-level array of job records; both forms
//! decode to the same `Vec<Job>`.

use crate::error::{JobDataError, Result};
use crate::types::{Job, JobFeed};
use std::fs;
use std::path::Path;

/// Decode a job feed from a JSON string.
///
/// Accepts either `{ "jobs": [...] }` or a bare `[...]` of job records.
/// Unknown fields on a record are ignored; missing optional fields take
/// their documented defaults.
pub fn parse_jobs(raw: &str) -> Result<Vec<Job>> {
    if raw.trim_start().starts_with('[') {
        serde_json::from_str::<Vec<Job>>(raw).map_err(decode_error)
    } else {
        serde_json::from_str::<JobFeed>(raw)
            .map(|feed| feed.jobs)
            .map_err(decode_error)
    }
}

/// Read and decode a job feed from a file on disk.
pub fn parse_jobs_file(path: &Path) -> Result<Vec<Job>> {
    let raw = fs::read_to_string(path)?;
    parse_jobs(&raw)
}

fn decode_error(err: serde_json::Error) -> JobDataError {
    JobDataError::Decode {
        line: err.line(),
        column: err.column(),
        reason: err.to_string(),
    }
}

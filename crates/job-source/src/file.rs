//! File-backed job source.

use crate::JobSource;
use anyhow::{Context, Result};
use async_trait::async_trait;
use job_data::{parser, Job};
use std::path::PathBuf;
use tracing::debug;

/// Reads a JSON job feed from a file on disk.
///
/// Accepts the same feed shapes as the parser: `{ "jobs": [...] }` or a
/// bare array of records.
pub struct FileSource {
    path: PathBuf,
}

impl FileSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

#[async_trait]
impl JobSource for FileSource {
    fn name(&self) -> &str {
        "file"
    }

    async fn fetch(&self) -> Result<Vec<Job>> {
        debug!("Reading job feed from {}", self.path.display());
        let raw = tokio::fs::read_to_string(&self.path)
            .await
            .with_context(|| format!("Failed to read job feed {}", self.path.display()))?;

        let jobs = parser::parse_jobs(&raw)
            .with_context(|| format!("Failed to decode job feed {}", self.path.display()))?;
        debug!("Read {} postings from {}", jobs.len(), self.path.display());
        Ok(jobs)
    }
}

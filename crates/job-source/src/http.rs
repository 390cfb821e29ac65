//! HTTP job source.

use crate::JobSource;
use anyhow::{Context, Result};
use async_trait::async_trait;
use job_data::{parser, Job};
use tracing::debug;

/// Fetches a JSON job feed from an endpoint with a single GET.
///
/// A non-success status or an undecodable body is a fetch failure; retry
/// and timeout policy belong to whoever owns the endpoint, not here.
pub struct HttpSource {
    url: String,
    client: reqwest::Client,
}

impl HttpSource {
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            client: reqwest::Client::new(),
        }
    }
}

#[async_trait]
impl JobSource for HttpSource {
    fn name(&self) -> &str {
        "http"
    }

    async fn fetch(&self) -> Result<Vec<Job>> {
        debug!("Fetching job feed from {}", self.url);
        let response = self
            .client
            .get(&self.url)
            .send()
            .await
            .with_context(|| format!("Failed to fetch job feed from {}", self.url))?
            .error_for_status()
            .with_context(|| format!("Job feed endpoint {} returned an error", self.url))?;

        let body = response
            .text()
            .await
            .with_context(|| format!("Failed to read job feed body from {}", self.url))?;

        let jobs = parser::parse_jobs(&body)
            .with_context(|| format!("Failed to decode job feed from {}", self.url))?;
        debug!("Fetched {} postings from {}", jobs.len(), self.url);
        Ok(jobs)
    }
}

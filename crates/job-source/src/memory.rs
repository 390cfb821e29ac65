//! In-memory job source for tests and demos.

use crate::JobSource;
use anyhow::Result;
use async_trait::async_trait;
use job_data::Job;

/// Hands back a fixed job set without touching disk or network.
pub struct InMemorySource {
    jobs: Vec<Job>,
}

impl InMemorySource {
    pub fn new(jobs: Vec<Job>) -> Self {
        Self { jobs }
    }
}

#[async_trait]
impl JobSource for InMemorySource {
    fn name(&self) -> &str {
        "memory"
    }

    async fn fetch(&self) -> Result<Vec<Job>> {
        Ok(self.jobs.clone())
    }
}

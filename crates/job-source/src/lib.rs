//! # Job Source Crate
//!
//! Fetch abstractions that supply the raw job set to the browser.
//!
//! ## Components
//!
//! ### FileSource
//! Reads a JSON job feed from disk. The usual source for local data sets
//! and demos.
//!
//! ### HttpSource
//! Fetches a JSON job feed from an endpoint with one GET. No retry policy
//! lives here; a failed fetch is reported and the browser shows the error
//! state.
//!
//! ### InMemorySource
//! Hands back a fixed vector. Used by tests and demos that don't want I/O.
//!
//! ## Example Usage
//!
//! ```ignore
//! use job_source::{FileSource, JobSource};
//!
//! let source = FileSource::new("data/jobs.json");
//! let jobs = source.fetch().await?;
//! println!("Fetched {} postings", jobs.len());
//! ```

use anyhow::Result;
use async_trait::async_trait;
use job_data::Job;

// Public modules
pub mod file;
pub mod http;
pub mod memory;

// Re-export commonly used types
pub use file::FileSource;
pub use http::HttpSource;
pub use memory::InMemorySource;

/// A supplier of the raw job set.
///
/// One fetch per browser load. Implementations report failures as
/// descriptive errors; they never panic on a bad feed.
#[async_trait]
pub trait JobSource: Send + Sync {
    /// Returns the name of this source (for logging/debugging)
    fn name(&self) -> &str;

    /// Fetch the full job set.
    async fn fetch(&self) -> Result<Vec<Job>>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_in_memory_source_round_trip() {
        let jobs = vec![Job {
            title: "Engineer".to_string(),
            company_name: "A".to_string(),
            location: "NY".to_string(),
            ..Default::default()
        }];

        let source = InMemorySource::new(jobs);
        assert_eq!(source.name(), "memory");

        let fetched = source.fetch().await.unwrap();
        assert_eq!(fetched.len(), 1);
        assert_eq!(fetched[0].title, "Engineer");
    }

    #[test]
    fn test_http_source_creation() {
        let source = HttpSource::new("https://example.com/jobs.json");
        assert_eq!(source.name(), "http");
    }
}

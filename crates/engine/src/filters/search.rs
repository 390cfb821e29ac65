//! Free-text search over title, description, and department.
//!
//! This is typically the first filter in the pipeline since a keystroke of
//! search text usually narrows the set harder than any facet.

use crate::state::ViewState;
use crate::traits::JobFilter;
use anyhow::Result;
use job_data::Job;

/// Keeps jobs whose title, description, or department contains the query.
///
/// ## Algorithm
/// 1. Lowercase the query once
/// 2. A job passes if ANY of the three fields, lowercased, contains the
///    query as a substring (department only when present)
/// 3. An empty query keeps every job
pub struct SearchFilter;

impl JobFilter for SearchFilter {
    fn name(&self) -> &str {
        "SearchFilter"
    }

    fn apply(&self, jobs: Vec<Job>, view: &ViewState) -> Result<Vec<Job>> {
        if view.query.is_empty() {
            return Ok(jobs);
        }
        let needle = view.query.to_lowercase();

        let filtered: Vec<Job> = jobs
            .into_iter()
            .filter(|job| {
                job.title.to_lowercase().contains(&needle)
                    || job.description.to_lowercase().contains(&needle)
                    || job
                        .department
                        .as_deref()
                        .is_some_and(|dept| dept.to_lowercase().contains(&needle))
            })
            .collect();
        Ok(filtered)
    }
}

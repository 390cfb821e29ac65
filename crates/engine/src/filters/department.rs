//! Department facet filter.

use crate::state::ViewState;
use crate::traits::JobFilter;
use anyhow::Result;
use job_data::Job;

/// Keeps jobs whose department is one of the selected departments.
///
/// A job with no department never matches a department selection.
pub struct DepartmentFilter;

impl JobFilter for DepartmentFilter {
    fn name(&self) -> &str {
        "DepartmentFilter"
    }

    fn apply(&self, jobs: Vec<Job>, view: &ViewState) -> Result<Vec<Job>> {
        if view.filters.departments.is_empty() {
            return Ok(jobs);
        }

        let filtered: Vec<Job> = jobs
            .into_iter()
            .filter(|job| {
                job.department
                    .as_ref()
                    .is_some_and(|dept| view.filters.departments.contains(dept))
            })
            .collect();
        Ok(filtered)
    }
}

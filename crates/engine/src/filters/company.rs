//! Company facet filter.

use crate::state::ViewState;
use crate::traits::JobFilter;
use anyhow::Result;
use job_data::Job;

/// Keeps jobs whose company is one of the selected companies.
///
/// Companies are matched exactly as stored (case-sensitive); the selection
/// set is populated from the facet enumeration, so its values are the stored
/// values. No selection means no constraint.
pub struct CompanyFilter;

impl JobFilter for CompanyFilter {
    fn name(&self) -> &str {
        "CompanyFilter"
    }

    fn apply(&self, jobs: Vec<Job>, view: &ViewState) -> Result<Vec<Job>> {
        if view.filters.companies.is_empty() {
            return Ok(jobs);
        }

        let filtered: Vec<Job> = jobs
            .into_iter()
            .filter(|job| view.filters.companies.contains(&job.company_name))
            .collect();
        Ok(filtered)
    }
}

//! Remote-only toggle filter.

use crate::state::ViewState;
use crate::traits::JobFilter;
use anyhow::Result;
use job_data::Job;

/// When the remote-only toggle is set, keeps only remote jobs.
pub struct RemoteFilter;

impl JobFilter for RemoteFilter {
    fn name(&self) -> &str {
        "RemoteFilter"
    }

    fn apply(&self, jobs: Vec<Job>, view: &ViewState) -> Result<Vec<Job>> {
        if !view.filters.remote_only {
            return Ok(jobs);
        }

        let filtered: Vec<Job> = jobs.into_iter().filter(|job| job.remote).collect();
        Ok(filtered)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn job(title: &str, remote: bool) -> Job {
        Job {
            title: title.to_string(),
            company_name: "Acme".to_string(),
            location: "NY".to_string(),
            remote,
            ..Default::default()
        }
    }

    #[test]
    fn test_toggle_off_keeps_everything() {
        let jobs = vec![job("Engineer", false), job("Analyst", true)];
        let view = ViewState::new();

        let filtered = RemoteFilter.apply(jobs, &view).unwrap();
        assert_eq!(filtered.len(), 2);
    }

    #[test]
    fn test_toggle_on_keeps_only_remote() {
        let jobs = vec![job("Engineer", false), job("Analyst", true)];
        let mut view = ViewState::new();
        view.filters.remote_only = true;

        let filtered = RemoteFilter.apply(jobs, &view).unwrap();
        assert_eq!(filtered.len(), 1);
        assert_eq!(filtered[0].title, "Analyst");
    }
}

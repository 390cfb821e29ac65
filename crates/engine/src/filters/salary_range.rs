//! Salary-band filter.
//!
//! Uses the same salary-figure extraction as the salary sorts, so a job is
//! filtered and ordered by one consistent number.

use crate::state::ViewState;
use crate::traits::JobFilter;
use anyhow::Result;
use job_data::Job;

/// Keeps jobs whose parsed salary figure falls inside the selected band.
///
/// A job with absent or unparsable salary text has figure 0, so raising the
/// band minimum above 0 excludes jobs with unknown salary. That is the
/// intended semantics of the filter, not an accident.
pub struct SalaryRangeFilter;

impl JobFilter for SalaryRangeFilter {
    fn name(&self) -> &str {
        "SalaryRangeFilter"
    }

    fn apply(&self, jobs: Vec<Job>, view: &ViewState) -> Result<Vec<Job>> {
        if !view.filters.salary_active {
            return Ok(jobs);
        }
        let band = view.filters.salary;

        let filtered: Vec<Job> = jobs
            .into_iter()
            .filter(|job| band.contains(job.salary_figure()))
            .collect();
        Ok(filtered)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn job(title: &str, salary: Option<&str>) -> Job {
        Job {
            title: title.to_string(),
            company_name: "Acme".to_string(),
            location: "NY".to_string(),
            salary: salary.map(str::to_string),
            ..Default::default()
        }
    }

    #[test]
    fn test_inactive_band_keeps_everything() {
        let jobs = vec![job("Engineer", Some("$100,000")), job("Intern", None)];
        let view = ViewState::new();

        let filtered = SalaryRangeFilter.apply(jobs, &view).unwrap();
        assert_eq!(filtered.len(), 2);
    }

    #[test]
    fn test_band_is_inclusive() {
        let jobs = vec![
            job("Engineer", Some("$100,000")),
            job("Analyst", Some("$80,000")),
        ];
        let mut view = ViewState::new();
        view.filters.set_salary_range(80_000, 100_000);

        let filtered = SalaryRangeFilter.apply(jobs, &view).unwrap();
        assert_eq!(filtered.len(), 2);
    }

    #[test]
    fn test_minimum_above_zero_excludes_unknown_salary() {
        let jobs = vec![
            job("Engineer", Some("$100,000")),
            job("Analyst", Some("$80,000")),
            job("Mystery", None),
            job("Vague", Some("Competitive")),
        ];
        let mut view = ViewState::new();
        view.filters.set_salary_range(90_000, 500_000);

        let filtered = SalaryRangeFilter.apply(jobs, &view).unwrap();
        assert_eq!(filtered.len(), 1);
        assert_eq!(filtered[0].title, "Engineer");
    }
}

//! Ordering of the filtered listing.
//!
//! All sorts are stable: jobs with equal keys keep the relative order they
//! had after filtering, which for `SortOption::None` is the feed order.

use crate::state::SortOption;
use job_data::Job;
use std::cmp::Reverse;

/// Reorder jobs in place according to the sort option.
///
/// Title ordering compares Unicode-lowercased titles, the closest standard
/// equivalent of a locale-aware comparison without pulling in ICU. Salary
/// ordering uses the same parsed figure as the salary filter; jobs with no
/// parseable salary key as 0.
pub fn order_jobs(jobs: &mut [Job], sort: SortOption) {
    match sort {
        SortOption::None => {}
        SortOption::Alphabetical => {
            jobs.sort_by_cached_key(|job| job.title.to_lowercase());
        }
        SortOption::SalaryHighToLow => {
            jobs.sort_by_cached_key(|job| Reverse(job.salary_figure()));
        }
        SortOption::SalaryLowToHigh => {
            jobs.sort_by_cached_key(|job| job.salary_figure());
        }
    }
}

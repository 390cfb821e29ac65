//! Derived facet enumeration and salary statistics.
//!
//! The filter-selection UI needs to know which facet values exist at all;
//! both structures here are derived from the full job set and must be
//! recomputed whenever that set changes. Nothing in this module is
//! memoized.

use job_data::Job;
use rayon::prelude::*;
use std::collections::HashSet;

/// The distinct facet values observed across a job set.
///
/// Values are deduplicated in first-seen feed order. Jobs without a
/// department contribute nothing to `departments`.
#[derive(Debug, Clone, Default)]
pub struct FacetOptions {
    pub companies: Vec<String>,
    pub locations: Vec<String>,
    pub departments: Vec<String>,
}

impl FacetOptions {
    /// Enumerate the facet values present in `jobs`.
    pub fn from_jobs(jobs: &[Job]) -> Self {
        let mut options = Self::default();
        let mut seen_companies = HashSet::new();
        let mut seen_locations = HashSet::new();
        let mut seen_departments = HashSet::new();

        for job in jobs {
            if seen_companies.insert(job.company_name.as_str()) {
                options.companies.push(job.company_name.clone());
            }
            if seen_locations.insert(job.location.as_str()) {
                options.locations.push(job.location.clone());
            }
            if let Some(dept) = &job.department {
                if seen_departments.insert(dept.as_str()) {
                    options.departments.push(dept.clone());
                }
            }
        }
        options
    }
}

/// Observed salary figures across a job set, for seeding a salary-band
/// selector with realistic bounds.
#[derive(Debug, Clone, Copy, Default)]
pub struct SalaryStats {
    /// Lowest parsed figure among jobs that list a salary (0 when none do)
    pub observed_min: u64,
    /// Highest parsed figure among jobs that list a salary (0 when none do)
    pub observed_max: u64,
    /// How many jobs carry a parseable, non-zero figure
    pub listed_count: usize,
}

impl SalaryStats {
    /// Compute stats over `jobs`, ignoring absent/unparsable salaries.
    ///
    /// The parse runs in parallel; the reduction is order-independent so the
    /// result is still deterministic.
    pub fn from_jobs(jobs: &[Job]) -> Self {
        let figures: Vec<u64> = jobs
            .par_iter()
            .map(Job::salary_figure)
            .filter(|&figure| figure > 0)
            .collect();

        match (figures.iter().min(), figures.iter().max()) {
            (Some(&observed_min), Some(&observed_max)) => Self {
                observed_min,
                observed_max,
                listed_count: figures.len(),
            },
            _ => Self::default(),
        }
    }
}

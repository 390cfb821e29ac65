//! Location facet filter.
//!
//! Stored locations are free text and often carry qualifiers ("Brooklyn,
//! NY", "London, UK — hybrid"), so a selected location matches as a
//! case-insensitive substring rather than an exact value.

use crate::state::ViewState;
use crate::traits::JobFilter;
use anyhow::Result;
use job_data::Job;

/// Keeps jobs whose location contains ANY selected location.
///
/// ## Algorithm
/// 1. Lowercase every selected location once
/// 2. A job passes if its lowercased location contains at least one of them
/// 3. No selection means no constraint
pub struct LocationFilter;

impl JobFilter for LocationFilter {
    fn name(&self) -> &str {
        "LocationFilter"
    }

    fn apply(&self, jobs: Vec<Job>, view: &ViewState) -> Result<Vec<Job>> {
        if view.filters.locations.is_empty() {
            return Ok(jobs);
        }
        let needles: Vec<String> = view
            .filters
            .locations
            .iter()
            .map(|loc| loc.to_lowercase())
            .collect();

        let filtered: Vec<Job> = jobs
            .into_iter()
            .filter(|job| {
                let haystack = job.location.to_lowercase();
                needles.iter().any(|needle| haystack.contains(needle))
            })
            .collect();
        Ok(filtered)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn job(location: &str) -> Job {
        Job {
            title: "Engineer".to_string(),
            company_name: "Acme".to_string(),
            location: location.to_string(),
            ..Default::default()
        }
    }

    #[test]
    fn test_no_selection_keeps_everything() {
        let jobs = vec![job("New York, NY"), job("San Francisco, CA")];
        let view = ViewState::new();

        let filtered = LocationFilter.apply(jobs, &view).unwrap();
        assert_eq!(filtered.len(), 2);
    }

    #[test]
    fn test_substring_match_is_case_insensitive() {
        let jobs = vec![job("Brooklyn, NY"), job("San Francisco, CA")];
        let mut view = ViewState::new();
        view.filters.locations.insert("brooklyn".to_string());

        let filtered = LocationFilter.apply(jobs, &view).unwrap();
        assert_eq!(filtered.len(), 1);
        assert_eq!(filtered[0].location, "Brooklyn, NY");
    }

    #[test]
    fn test_any_selected_location_passes() {
        let jobs = vec![job("New York, NY"), job("Austin, TX"), job("Lisbon")];
        let mut view = ViewState::new();
        view.filters.locations.insert("Austin".to_string());
        view.filters.locations.insert("Lisbon".to_string());

        let filtered = LocationFilter.apply(jobs, &view).unwrap();
        assert_eq!(filtered.len(), 2);
    }
}

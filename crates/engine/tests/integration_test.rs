//! Integration tests for the filter engine.
//!
//! These tests run the standard pipeline end-to-end over a small realistic
//! feed and pin down the behaviors the rest of the system leans on: the
//! identity law, conjunction semantics, the naive salary parse, and stable
//! ordering.

use engine::{FilterEngine, SortOption, ViewState};
use job_data::Job;

fn feed() -> Vec<Job> {
    vec![
        Job {
            title: "Engineer".to_string(),
            description: "Build and ship backend services".to_string(),
            department: Some("Engineering".to_string()),
            company_name: "A".to_string(),
            location: "NY".to_string(),
            remote: false,
            salary: Some("$100,000".to_string()),
        },
        Job {
            title: "Analyst".to_string(),
            description: "Dig through product metrics".to_string(),
            department: Some("Data".to_string()),
            company_name: "B".to_string(),
            location: "SF".to_string(),
            remote: true,
            salary: Some("$80,000".to_string()),
        },
        Job {
            title: "Designer".to_string(),
            description: "Own the design system".to_string(),
            department: None,
            company_name: "A".to_string(),
            location: "Brooklyn, NY".to_string(),
            remote: true,
            salary: None,
        },
    ]
}

fn titles(jobs: &[Job]) -> Vec<&str> {
    jobs.iter().map(|j| j.title.as_str()).collect()
}

#[test]
fn test_default_state_returns_feed_unchanged() {
    let jobs = feed();
    let engine = FilterEngine::standard();
    let view = ViewState::new();

    let visible = engine.evaluate(&jobs, &view).unwrap();
    assert_eq!(titles(&visible), vec!["Engineer", "Analyst", "Designer"]);
}

#[test]
fn test_salary_high_low_scenario() {
    let jobs = feed();
    let engine = FilterEngine::standard();
    let mut view = ViewState::new();
    view.sort = SortOption::SalaryHighToLow;

    let visible = engine.evaluate(&jobs, &view).unwrap();
    // Designer has no salary, so it keys as 0 and sinks to the bottom
    assert_eq!(titles(&visible), vec!["Engineer", "Analyst", "Designer"]);
}

#[test]
fn test_remote_only_scenario() {
    let jobs = feed();
    let engine = FilterEngine::standard();
    let mut view = ViewState::new();
    view.filters.remote_only = true;

    let visible = engine.evaluate(&jobs, &view).unwrap();
    assert_eq!(titles(&visible), vec!["Analyst", "Designer"]);
}

#[test]
fn test_case_insensitive_query_scenario() {
    let jobs = feed();
    let engine = FilterEngine::standard();
    let mut view = ViewState::new();
    view.query = "engineer".to_string();

    let visible = engine.evaluate(&jobs, &view).unwrap();
    assert_eq!(titles(&visible), vec!["Engineer"]);
}

#[test]
fn test_salary_band_excludes_unknown_salary() {
    let jobs = feed();
    let engine = FilterEngine::standard();
    let mut view = ViewState::new();
    view.filters.set_salary_range(90_000, 500_000);

    let visible = engine.evaluate(&jobs, &view).unwrap();
    // Analyst (80k) is below the band; Designer keys as 0 with no salary
    assert_eq!(titles(&visible), vec!["Engineer"]);
}

#[test]
fn test_active_filters_are_a_conjunction() {
    let jobs = feed();
    let engine = FilterEngine::standard();
    let mut view = ViewState::new();
    view.filters.companies.insert("A".to_string());
    view.filters.remote_only = true;

    let visible = engine.evaluate(&jobs, &view).unwrap();

    // Soundness: every visible job satisfies every active category
    for job in &visible {
        assert_eq!(job.company_name, "A");
        assert!(job.remote);
    }

    // Completeness: every feed job satisfying both categories is visible
    let expected: Vec<&Job> = jobs
        .iter()
        .filter(|j| j.company_name == "A" && j.remote)
        .collect();
    assert_eq!(visible.len(), expected.len());
    assert_eq!(titles(&visible), vec!["Designer"]);
}

#[test]
fn test_location_substring_composes_with_search() {
    let jobs = feed();
    let engine = FilterEngine::standard();
    let mut view = ViewState::new();
    view.filters.locations.insert("ny".to_string());

    let visible = engine.evaluate(&jobs, &view).unwrap();
    assert_eq!(titles(&visible), vec!["Engineer", "Designer"]);

    view.query = "design".to_string();
    let visible = engine.evaluate(&jobs, &view).unwrap();
    assert_eq!(titles(&visible), vec!["Designer"]);
}

#[test]
fn test_department_selection_skips_departmentless_jobs() {
    let jobs = feed();
    let engine = FilterEngine::standard();
    let mut view = ViewState::new();
    view.filters.departments.insert("Engineering".to_string());
    view.filters.departments.insert("Data".to_string());

    let visible = engine.evaluate(&jobs, &view).unwrap();
    // Designer has no department and never matches a department selection
    assert_eq!(titles(&visible), vec!["Engineer", "Analyst"]);
}

#[test]
fn test_alphabetical_sort_composes_with_filters() {
    let jobs = feed();
    let engine = FilterEngine::standard();
    let mut view = ViewState::new();
    view.filters.remote_only = true;
    view.sort = SortOption::Alphabetical;

    let visible = engine.evaluate(&jobs, &view).unwrap();
    assert_eq!(titles(&visible), vec!["Analyst", "Designer"]);
}

#[test]
fn test_naive_range_parse_is_preserved() {
    // "90k-120k" concatenates to 90120, which falls below a 100k minimum.
    // The filter must see the same figure the sort does.
    let mut jobs = feed();
    jobs.push(Job {
        title: "Ranged".to_string(),
        description: String::new(),
        department: None,
        company_name: "C".to_string(),
        location: "Remote".to_string(),
        remote: true,
        salary: Some("90k-120k".to_string()),
    });

    let engine = FilterEngine::standard();
    let mut view = ViewState::new();
    view.filters.set_salary_range(100_000, 500_000);

    let visible = engine.evaluate(&jobs, &view).unwrap();
    assert_eq!(titles(&visible), vec!["Engineer"]);

    view.filters.set_salary_range(90_000, 91_000);
    let visible = engine.evaluate(&jobs, &view).unwrap();
    assert_eq!(titles(&visible), vec!["Ranged"]);
}

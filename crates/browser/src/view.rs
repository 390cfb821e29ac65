//! # Job Browser
//!
//! This module coordinates the browsing session:
//! 1. Fetch the job set once from a JobSource
//! 2. Track the fetch as three distinct states (loading / data / error)
//! 3. Hold the view state the user edits (search text, facets, sort)
//! 4. Recompute the visible listing through the engine on every read
//!
//! The engine is pure, so recomputation is triggered by reading a snapshot
//! rather than by a reactive framework: mutate state, read again. Repeated
//! reads with unchanged state are idempotent and side-effect-free.

use std::time::Instant;

use anyhow::Result;
use tracing::{info, warn};

use engine::{FacetOptions, FilterEngine, SalaryStats, SortOption, ViewState};
use job_data::Job;
use job_source::JobSource;

/// Where the one startup fetch currently stands.
///
/// The engine is never invoked in `Loading` or `Failed`; the presentation
/// layer renders a spinner or the error message instead.
#[derive(Debug)]
pub enum LoadState {
    Loading,
    Ready(Vec<Job>),
    Failed(String),
}

/// The visible listing plus the count the header renders.
#[derive(Debug, Clone)]
pub struct Listing {
    pub jobs: Vec<Job>,
    pub count: usize,
}

/// What the presentation layer gets when it asks for the current view.
#[derive(Debug)]
pub enum ViewSnapshot {
    Loading,
    Failed(String),
    Ready(Listing),
}

/// Owns the fetched job set and the user's view state, and derives the
/// visible listing from them on demand.
pub struct JobBrowser {
    source: Box<dyn JobSource>,
    load: LoadState,
    view: ViewState,
    engine: FilterEngine,
}

impl JobBrowser {
    /// Create a browser over a source. The browser starts in `Loading`
    /// until `load` completes.
    pub fn new(source: Box<dyn JobSource>) -> Self {
        Self {
            source,
            load: LoadState::Loading,
            view: ViewState::new(),
            engine: FilterEngine::standard(),
        }
    }

    /// Perform the one startup fetch.
    ///
    /// A failed fetch becomes the visible error state; it is reported, not
    /// propagated, so the browser stays usable for a retry via another
    /// `load` call.
    pub async fn load(&mut self) {
        self.load = LoadState::Loading;
        let start = Instant::now();
        match self.source.fetch().await {
            Ok(jobs) => {
                info!(
                    "Loaded {} postings from {} source in {:.2?}",
                    jobs.len(),
                    self.source.name(),
                    start.elapsed()
                );
                self.load = LoadState::Ready(jobs);
            }
            Err(err) => {
                warn!(
                    "Job fetch from {} source failed: {:#}",
                    self.source.name(),
                    err
                );
                self.load = LoadState::Failed(format!("{err:#}"));
            }
        }
    }

    // State mutators. These only record the change; the listing is
    // re-derived on the next snapshot.

    pub fn set_query(&mut self, query: impl Into<String>) {
        self.view.query = query.into();
    }

    pub fn set_sort(&mut self, sort: SortOption) {
        self.view.sort = sort;
    }

    /// Add the company to the selection, or remove it if already selected.
    pub fn toggle_company(&mut self, company: &str) {
        if !self.view.filters.companies.remove(company) {
            self.view.filters.companies.insert(company.to_string());
        }
    }

    /// Add the location to the selection, or remove it if already selected.
    pub fn toggle_location(&mut self, location: &str) {
        if !self.view.filters.locations.remove(location) {
            self.view.filters.locations.insert(location.to_string());
        }
    }

    /// Add the department to the selection, or remove it if already selected.
    pub fn toggle_department(&mut self, department: &str) {
        if !self.view.filters.departments.remove(department) {
            self.view.filters.departments.insert(department.to_string());
        }
    }

    pub fn set_remote_only(&mut self, remote_only: bool) {
        self.view.filters.remote_only = remote_only;
    }

    pub fn set_salary_range(&mut self, min: u64, max: u64) {
        self.view.filters.set_salary_range(min, max);
    }

    pub fn clear_salary_range(&mut self) {
        self.view.filters.clear_salary_range();
    }

    /// Drop every facet selection, the remote toggle, and the salary band.
    /// The search text and sort choice survive.
    pub fn reset_filters(&mut self) {
        self.view.filters = Default::default();
    }

    /// The current view state, for rendering the controls.
    pub fn view(&self) -> &ViewState {
        &self.view
    }

    /// The loaded job set, if the fetch has succeeded.
    pub fn jobs(&self) -> Option<&[Job]> {
        match &self.load {
            LoadState::Ready(jobs) => Some(jobs),
            _ => None,
        }
    }

    /// Compute the current view: loading, error, or the visible listing
    /// with its count.
    pub fn snapshot(&self) -> Result<ViewSnapshot> {
        match &self.load {
            LoadState::Loading => Ok(ViewSnapshot::Loading),
            LoadState::Failed(message) => Ok(ViewSnapshot::Failed(message.clone())),
            LoadState::Ready(jobs) => {
                let visible = self.engine.evaluate(jobs, &self.view)?;
                let count = visible.len();
                Ok(ViewSnapshot::Ready(Listing {
                    jobs: visible,
                    count,
                }))
            }
        }
    }

    /// Facet values derived from the loaded job set.
    ///
    /// Re-derived on every call so a reloaded job set can never serve
    /// stale options. `None` until the fetch has succeeded.
    pub fn facets(&self) -> Option<FacetOptions> {
        self.jobs().map(FacetOptions::from_jobs)
    }

    /// Observed salary bounds for seeding the salary-band selector.
    pub fn salary_stats(&self) -> Option<SalaryStats> {
        self.jobs().map(SalaryStats::from_jobs)
    }
}

//! Where a view state becomes a visible listing.
//!
//! `FilterEngine` is the piece the presentation layer actually calls: it
//! strings the category filters into one pass over the job set and then
//! orders whatever survives. Everything interesting about an individual
//! category lives in `filters/`; this module only sequences them.

use crate::filters::{
    CompanyFilter, DepartmentFilter, LocationFilter, RemoteFilter, SalaryRangeFilter, SearchFilter,
};
use crate::sort::order_jobs;
use crate::state::ViewState;
use crate::traits::JobFilter;
use anyhow::Result;
use job_data::Job;
use tracing;

/// Turns (job set, view state) into the visible, ordered listing.
///
/// ## Usage
/// ```ignore
/// let engine = FilterEngine::standard();
/// let visible = engine.evaluate(&jobs, &view)?;
/// ```
///
/// The engine holds no job data and no per-invocation state: the same
/// inputs always produce the same output, so a caller may re-run
/// `evaluate` on every keystroke.
pub struct FilterEngine {
    filters: Vec<Box<dyn JobFilter>>,
}

impl FilterEngine {
    /// Create a new empty FilterEngine.
    pub fn new() -> Self {
        Self {
            filters: Vec::new(),
        }
    }

    /// The standard pipeline, in narrowing order: search, company,
    /// location, department, remote, salary band.
    ///
    /// The order only matters for performance (narrow the set before the
    /// later passes); every category is a conjunction, so correctness is
    /// order-independent.
    pub fn standard() -> Self {
        Self::new()
            .add_filter(SearchFilter)
            .add_filter(CompanyFilter)
            .add_filter(LocationFilter)
            .add_filter(DepartmentFilter)
            .add_filter(RemoteFilter)
            .add_filter(SalaryRangeFilter)
    }

    /// Add a filter to the pipeline (builder pattern).
    pub fn add_filter(mut self, filter: impl JobFilter + 'static) -> Self {
        self.filters.push(Box::new(filter));
        self
    }

    /// Run the job set through every filter, in pipeline order.
    ///
    /// Each stage hands its survivors to the next one; an inactive
    /// category passes the set through untouched, so the cost of a filter
    /// is only paid while the user has it engaged. The per-stage counts go
    /// to the debug log, which is usually enough to answer "why did my
    /// search come back empty". The result is unsorted; `evaluate` owns
    /// the ordering step.
    pub fn apply(&self, jobs: Vec<Job>, view: &ViewState) -> Result<Vec<Job>> {
        let mut current = jobs;
        for filter in &self.filters {
            let before = current.len();
            current = filter.apply(current, view)?;
            tracing::debug!(
                "{} narrowed {} postings to {}",
                filter.name(),
                before,
                current.len()
            );
        }
        Ok(current)
    }

    /// Compute the visible, ordered listing for the given view state.
    ///
    /// Works on a clone of the input slice; the caller's jobs are never
    /// mutated or reordered. An empty input yields an empty output.
    pub fn evaluate(&self, jobs: &[Job], view: &ViewState) -> Result<Vec<Job>> {
        let mut visible = self.apply(jobs.to_vec(), view)?;
        order_jobs(&mut visible, view.sort);
        Ok(visible)
    }
}

impl Default for FilterEngine {
    fn default() -> Self {
        Self::new()
    }
}

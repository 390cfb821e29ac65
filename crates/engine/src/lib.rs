//! Filtering-and-sorting engine for job listings.
//!
//! This crate provides:
//! - JobFilter trait and implementations for the six filter categories
//! - FilterEngine for composing filters and ordering the result
//! - View state types (FilterState, SortOption, ViewState)
//! - Derived facet enumeration for the filter-selection UI
//!
//! ## Architecture
//! The engine is a pure, synchronous transformation: given the full job set
//! plus the current search/filter/sort state it deterministically produces
//! the visible, ordered subset. It performs no I/O, holds no job data, and
//! never mutates its input, so callers can re-run it on every state change.
//!
//! Filtering is a conjunction across the active categories; a job must
//! satisfy every active filter to stay visible. Sorting is stable, and the
//! salary sort key is extracted with the same rule as the salary filter.
//!
//! ## Example Usage
//! ```ignore
//! use engine::{FilterEngine, SortOption, ViewState};
//!
//! let mut view = ViewState::new();
//! view.query = "engineer".to_string();
//! view.filters.remote_only = true;
//! view.sort = SortOption::SalaryHighToLow;
//!
//! let engine = FilterEngine::standard();
//! let visible = engine.evaluate(&jobs, &view)?;
//! println!("{} matching jobs", visible.len());
//! ```

pub mod state;
pub mod traits;
pub mod filters;
pub mod filter_engine;
pub mod sort;
pub mod facets;

// Re-export main types
pub use facets::{FacetOptions, SalaryStats};
pub use filter_engine::FilterEngine;
pub use state::{
    FilterState, SalaryBand, SortOption, ViewState, DEFAULT_SALARY_MAX, DEFAULT_SALARY_MIN,
};
pub use traits::JobFilter;

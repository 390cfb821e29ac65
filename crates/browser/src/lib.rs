//! Browser crate for the JobLens listing browser.
//!
//! This crate contains the view orchestrator that ties the fetch side,
//! the user's view state, and the filter engine together.

pub mod view;

pub use view::{JobBrowser, Listing, LoadState, ViewSnapshot};

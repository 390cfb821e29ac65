//! # Job Data Crate
//!
//! Domain types and decoding for job postings.
//!
//! ## Main Components
//!
//! - **types**: Core domain types (Job, JobFeed)
//! - **salary**: Extracting a representative salary figure from free-form text
//! - **parser**: Decode JSON job feeds into Rust structs
//! - **error**: Error types for feed decoding
//!
//! ## Example Usage
//!
//! ```ignore
//! use job_data::parser::parse_jobs_file;
//! use std::path::Path;
//!
//! let jobs = parse_jobs_file(Path::new("data/jobs.json"))?;
//! println!("Feed carries {} postings", jobs.len());
//! ```

// Public modules
pub mod error;
pub mod types;
pub mod salary;
pub mod parser;

// Re-export commonly used types for convenience
pub use error::{JobDataError, Result};
pub use salary::parse_salary;
pub use types::{Job, JobFeed};

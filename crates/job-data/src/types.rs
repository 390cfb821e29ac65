//! Core domain types for job postings.
//!
//! A `Job` is the unit the whole system moves around: the fetch side produces
//! them, the filter engine consumes and re-emits them, the presentation layer
//! renders them. Records arrive JSON-shaped with camelCase field names.

use serde::{Deserialize, Serialize};

/// A single job posting as supplied by a feed.
///
/// Jobs are immutable once fetched; the filter engine clones and reorders
/// them but never edits one. Optional fields decode to their documented
/// defaults so a sparse record is still a valid record:
/// - missing `description` decodes as the empty string
/// - missing `department` or `salary` decodes as `None`
/// - missing `remote` decodes as `false`
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Job {
    /// Job title, free text, searched
    pub title: String,

    /// Long-form posting text, free text, searched
    #[serde(default)]
    pub description: String,

    /// Optional category label (e.g. "Engineering"), exact-match facet
    #[serde(default)]
    pub department: Option<String>,

    /// Company offering the job, exact-match facet
    pub company_name: String,

    /// Free-text location, substring-matched facet. Stored values often
    /// carry qualifiers ("Brooklyn, NY"), which is why matching is not exact.
    pub location: String,

    /// Whether the position is remote
    #[serde(default)]
    pub remote: bool,

    /// Free-form salary text, e.g. "$90,000" or "90k-120k/yr"
    #[serde(default)]
    pub salary: Option<String>,
}

impl Job {
    /// The single representative salary figure for this job.
    ///
    /// Used both for salary-range filtering and as a sort key, so the two
    /// always agree. Absent or unparsable salary text yields 0.
    pub fn salary_figure(&self) -> u64 {
        self.salary
            .as_deref()
            .map(crate::salary::parse_salary)
            .unwrap_or(0)
    }
}

/// The wire structure a feed endpoint returns: `{ "jobs": [...] }`
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct JobFeed {
    pub jobs: Vec<Job>,
}

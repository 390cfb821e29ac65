//! The seam every filter category plugs into.

use anyhow::Result;
use job_data::Job;

use crate::state::ViewState;

/// One category of constraint on the visible listing.
///
/// The engine treats filters uniformly: each gets the whole view state and
/// decides for itself whether its category is engaged. An inactive filter
/// must hand back exactly what it was given, so stacking six categories
/// costs nothing until the user selects something.
///
/// `apply` consumes and returns the job vector rather than borrowing it;
/// a filter is a `retain` over the set, and passing ownership down the
/// chain means no stage ever clones a surviving job. `Send + Sync` keeps
/// a built engine shareable across threads.
pub trait JobFilter: Send + Sync {
    /// Short name used in the per-stage debug log.
    fn name(&self) -> &str;

    /// Keep the jobs that satisfy this category under `view`, dropping
    /// the rest. Must be a pure function of its inputs — no I/O, no
    /// stashed state between calls.
    fn apply(&self, jobs: Vec<Job>, view: &ViewState) -> Result<Vec<Job>>;
}

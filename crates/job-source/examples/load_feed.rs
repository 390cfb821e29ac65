//! Load a job feed from disk and print a short summary.
//!
//! Run with: cargo run -p job-source --example load_feed -- data/jobs.json

use anyhow::Result;
use job_source::{FileSource, JobSource};

#[tokio::main]
async fn main() -> Result<()> {
    let path = std::env::args()
        .nth(1)
        .unwrap_or_else(|| "data/jobs.json".to_string());

    let source = FileSource::new(&path);
    let jobs = source.fetch().await?;

    println!("{}: {} postings", path, jobs.len());
    for job in jobs.iter().take(10) {
        println!("  {} @ {} ({})", job.title, job.company_name, job.location);
    }
    Ok(())
}

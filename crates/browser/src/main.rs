//! Simple test harness for the job browser.
//!
//! This binary exercises the end-to-end flow against a feed file: fetch,
//! facet enumeration, a search, and a sorted listing.

use anyhow::Result;
use tracing::info;

use browser::{JobBrowser, ViewSnapshot};
use engine::SortOption;
use job_source::FileSource;

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter("info,browser=debug,engine=debug,job_source=debug")
        .init();

    info!("Starting JobLens browser harness");

    let mut browser = JobBrowser::new(Box::new(FileSource::new("data/jobs.json")));
    browser.load().await;

    if let Some(facets) = browser.facets() {
        info!(
            "Facets: {} companies, {} locations, {} departments",
            facets.companies.len(),
            facets.locations.len(),
            facets.departments.len()
        );
    }
    if let Some(stats) = browser.salary_stats() {
        info!(
            "Salaries listed on {} postings, observed range {}..{}",
            stats.listed_count, stats.observed_min, stats.observed_max
        );
    }

    browser.set_query("engineer");
    browser.set_sort(SortOption::SalaryHighToLow);

    match browser.snapshot()? {
        ViewSnapshot::Loading => info!("Still loading"),
        ViewSnapshot::Failed(message) => info!("Fetch failed: {}", message),
        ViewSnapshot::Ready(listing) => {
            info!("{} matching postings:", listing.count);
            for (i, job) in listing.jobs.iter().enumerate() {
                info!(
                    "{}. {} @ {} ({}) - {}",
                    i + 1,
                    job.title,
                    job.company_name,
                    job.location,
                    job.salary.as_deref().unwrap_or("salary not listed")
                );
            }
        }
    }

    Ok(())
}

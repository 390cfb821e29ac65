use anyhow::{anyhow, Context, Result};
use clap::{Parser, Subcommand};
use colored::Colorize;
use std::path::PathBuf;
use std::time::Instant;

use browser::{JobBrowser, ViewSnapshot};
use engine::{FacetOptions, FilterEngine, SortOption, ViewState, DEFAULT_SALARY_MAX};
use job_data::Job;
use job_source::{FileSource, HttpSource, JobSource};

/// JobLens - Job Listing Browser
#[derive(Parser)]
#[command(name = "job-lens")]
#[command(about = "Browse, filter, and sort job postings from a JSON feed", long_about = None)]
struct Cli {
    /// Path to a JSON job feed file
    #[arg(short, long, default_value = "data/jobs.json")]
    jobs: PathBuf,

    /// Fetch the feed from this URL instead of a file
    #[arg(long)]
    url: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List the postings matching a search/filter/sort state
    List {
        /// Free-text search over title, description, and department
        #[arg(long, default_value = "")]
        query: String,

        /// Select a company (repeatable)
        #[arg(long)]
        company: Vec<String>,

        /// Select a location, substring-matched (repeatable)
        #[arg(long)]
        location: Vec<String>,

        /// Select a department (repeatable)
        #[arg(long)]
        department: Vec<String>,

        /// Only remote postings
        #[arg(long)]
        remote: bool,

        /// Lower salary bound; activates the salary filter
        #[arg(long)]
        salary_min: Option<u64>,

        /// Upper salary bound; activates the salary filter
        #[arg(long)]
        salary_max: Option<u64>,

        /// One of: alphabetical, salary-high-low, salary-low-high
        #[arg(long, default_value = "")]
        sort: String,

        /// Show at most this many postings
        #[arg(long, default_value = "50")]
        limit: usize,
    },

    /// Show the facet values and salary bounds present in the feed
    Facets,

    /// Run benchmark to test evaluation throughput
    Benchmark {
        /// Number of evaluations to run
        #[arg(long, default_value = "1000")]
        requests: usize,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();

    let source: Box<dyn JobSource> = match &cli.url {
        Some(url) => Box::new(HttpSource::new(url.clone())),
        None => Box::new(FileSource::new(&cli.jobs)),
    };

    let start = Instant::now();
    let mut browser = JobBrowser::new(source);
    browser.load().await;
    if browser.jobs().is_some() {
        println!("{} Loaded feed in {:?}", "✓".green(), start.elapsed());
    }

    match cli.command {
        Commands::List {
            query,
            company,
            location,
            department,
            remote,
            salary_min,
            salary_max,
            sort,
            limit,
        } => handle_list(
            &mut browser,
            query,
            company,
            location,
            department,
            remote,
            salary_min,
            salary_max,
            sort,
            limit,
        )?,
        Commands::Facets => handle_facets(&browser)?,
        Commands::Benchmark { requests } => handle_benchmark(&browser, requests)?,
    }

    Ok(())
}

/// Handle the 'list' command
#[allow(clippy::too_many_arguments)]
fn handle_list(
    browser: &mut JobBrowser,
    query: String,
    company: Vec<String>,
    location: Vec<String>,
    department: Vec<String>,
    remote: bool,
    salary_min: Option<u64>,
    salary_max: Option<u64>,
    sort: String,
    limit: usize,
) -> Result<()> {
    browser.set_query(query);
    for name in &company {
        browser.toggle_company(name);
    }
    for name in &location {
        browser.toggle_location(name);
    }
    for name in &department {
        browser.toggle_department(name);
    }
    browser.set_remote_only(remote);
    if salary_min.is_some() || salary_max.is_some() {
        browser.set_salary_range(
            salary_min.unwrap_or(0),
            salary_max.unwrap_or(DEFAULT_SALARY_MAX),
        );
    }
    let sort: SortOption = sort
        .parse()
        .context("Unrecognized sort option (expected alphabetical, salary-high-low, or salary-low-high)")?;
    browser.set_sort(sort);

    match browser.snapshot()? {
        ViewSnapshot::Loading => println!("Feed still loading"),
        ViewSnapshot::Failed(message) => println!("{} {}", "✗".red(), message),
        ViewSnapshot::Ready(listing) => {
            println!(
                "{} matching posting{}",
                listing.count.to_string().bold(),
                if listing.count == 1 { "" } else { "s" }
            );
            for job in listing.jobs.iter().take(limit) {
                print_job(job);
            }
            if listing.count > limit {
                println!("  ... and {} more", listing.count - limit);
            }
        }
    }

    Ok(())
}

fn print_job(job: &Job) {
    let remote_tag = if job.remote {
        " [remote]".green().to_string()
    } else {
        String::new()
    };
    println!(
        "  {} @ {} ({}){}",
        job.title.bold(),
        job.company_name.cyan(),
        job.location,
        remote_tag
    );
    if let Some(dept) = &job.department {
        println!("    {}", dept.dimmed());
    }
    if let Some(salary) = &job.salary {
        println!("    {}", salary.yellow());
    }
}

/// Handle the 'facets' command
fn handle_facets(browser: &JobBrowser) -> Result<()> {
    let facets = browser
        .facets()
        .ok_or_else(|| anyhow!("Feed not loaded; cannot enumerate facets"))?;

    println!("{}", "Companies:".bold());
    for name in &facets.companies {
        println!("  {}", name);
    }
    println!("{}", "Locations:".bold());
    for name in &facets.locations {
        println!("  {}", name);
    }
    println!("{}", "Departments:".bold());
    for name in &facets.departments {
        println!("  {}", name);
    }

    if let Some(stats) = browser.salary_stats() {
        println!(
            "{} {} posting{} list a salary, observed range {}..{}",
            "Salaries:".bold(),
            stats.listed_count,
            if stats.listed_count == 1 { "" } else { "s" },
            stats.observed_min,
            stats.observed_max
        );
    }

    Ok(())
}

/// Handle the 'benchmark' command
///
/// Evaluates the engine repeatedly under randomized view states, the way a
/// front end re-runs it on every keystroke and toggle.
fn handle_benchmark(browser: &JobBrowser, requests: usize) -> Result<()> {
    use rand::Rng;

    let jobs = browser
        .jobs()
        .ok_or_else(|| anyhow!("Feed not loaded; cannot benchmark"))?;
    let facets = FacetOptions::from_jobs(jobs);
    let engine = FilterEngine::standard();
    let queries = ["engineer", "analyst", "senior", "designer", ""];

    let mut rng = rand::rng();
    let mut total_visible = 0usize;
    let start = Instant::now();

    for _ in 0..requests {
        let mut view = ViewState::new();
        view.query = queries[rng.random_range(0..queries.len())].to_string();
        if !facets.companies.is_empty() && rng.random_bool(0.5) {
            let pick = rng.random_range(0..facets.companies.len());
            view.filters.companies.insert(facets.companies[pick].clone());
        }
        if rng.random_bool(0.3) {
            view.filters.remote_only = true;
        }
        view.sort = match rng.random_range(0..4u8) {
            0 => SortOption::None,
            1 => SortOption::Alphabetical,
            2 => SortOption::SalaryHighToLow,
            _ => SortOption::SalaryLowToHigh,
        };

        total_visible += engine.evaluate(jobs, &view)?.len();
    }

    let elapsed = start.elapsed();
    println!(
        "{} evaluations over {} postings in {:?} ({:.2?}/eval, {} rows surfaced)",
        requests,
        jobs.len(),
        elapsed,
        elapsed / requests.max(1) as u32,
        total_visible
    );

    Ok(())
}

//! Command-line front end: one resume in, console report and a CSV out.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Args;
use tracing::warn;

use crate::jobs::export::{export_jobs, DEFAULT_EXPORT_FILE};
use crate::jobs::query::SearchMode;
use crate::jobs::search::{JobSearchService, SearchRequest, DEFAULT_LOCATION, MAX_API_RESULTS};
use crate::llm_client::TextCompletion;
use crate::resume::handlers::MAX_KEYWORD_COUNT;
use crate::resume::loader::load_resume;
use crate::resume::pipeline::{analyze_resume, KeywordSource};

#[derive(Debug, Args)]
pub struct AnalyzeArgs {
    /// Path to resume file (PDF or TXT)
    #[arg(long)]
    pub resume: PathBuf,

    /// Job search location
    #[arg(long, default_value = DEFAULT_LOCATION)]
    pub location: String,

    /// Number of jobs to fetch
    #[arg(long, default_value_t = 10, value_parser = clap::value_parser!(u16).range(1..=MAX_API_RESULTS as i64))]
    pub num_jobs: u16,

    /// Number of keywords to extract (defaults to KEYWORD_COUNT)
    #[arg(long, value_parser = clap::value_parser!(u16).range(1..=MAX_KEYWORD_COUNT as i64))]
    pub keywords: Option<u16>,

    /// Require every keyword in the search query
    #[arg(long)]
    pub precise: bool,

    /// CSV file for the ranked jobs
    #[arg(long, default_value = DEFAULT_EXPORT_FILE)]
    pub output: PathBuf,
}

pub async fn run_analyze(
    args: AnalyzeArgs,
    llm: &dyn TextCompletion,
    job_search: &JobSearchService,
    default_keyword_count: usize,
) -> Result<()> {
    println!("\n[1/5] Extracting info from {} ...", args.resume.display());
    let document = load_resume(&args.resume)
        .await
        .with_context(|| format!("Could not load {}", args.resume.display()))?;

    let keyword_count = args.keywords.map(usize::from).unwrap_or(default_keyword_count);
    let analysis = analyze_resume(llm, &document, keyword_count).await;
    if analysis.keyword_source == KeywordSource::Fallback {
        println!(
            "Warning: {}. Using generic keywords instead.",
            analysis.keyword_warning.as_deref().unwrap_or("keyword extraction failed")
        );
    }
    println!(
        "Extracted {} keywords: {}\n",
        analysis.keywords.len(),
        analysis.keywords.as_slice().join(", ")
    );

    println!("[2/5] Generating report ...");
    println!("{}\n", analysis.report);
    println!("Resume Feedback:\n{}", analysis.feedback);

    println!("\n[3/5] Searching for jobs ...");
    let request = SearchRequest {
        keywords: analysis.keywords,
        location: args.location,
        max_jobs: usize::from(args.num_jobs),
        search_mode: if args.precise {
            SearchMode::Precise
        } else {
            SearchMode::Auto
        },
    };

    let jobs = match job_search.search(&request).await {
        Ok(results) => {
            println!(
                "Searching for: {} in {}",
                results.query,
                results.location.as_deref().unwrap_or("any location")
            );
            if results.jobs.is_empty() {
                println!("No jobs found. Try changing keywords or location.");
            } else {
                println!("Found {} jobs.\n", results.jobs.len());
            }
            for (idx, job) in results.jobs.iter().enumerate() {
                println!(
                    "{}. {} | {} | {} | {} | relevance {:.1}%\n   Apply: {}\n",
                    idx + 1,
                    job.title,
                    job.company,
                    job.location,
                    job.posted,
                    job.relevance_score,
                    job.apply_link
                );
            }
            results.jobs
        }
        Err(e) => {
            warn!("Job search failed: {e}");
            println!("Warning: {e}");
            vec![]
        }
    };

    println!("[4/5] Saving jobs to {} ...", args.output.display());
    match export_jobs(&jobs, &args.output) {
        Ok(true) => println!("Jobs saved to {}\n", args.output.display()),
        Ok(false) => println!("No jobs to save.\n"),
        Err(e) => {
            warn!("Export failed: {e}");
            println!("Warning: could not save jobs: {e}\n");
        }
    }

    println!("[5/5] Done!");
    Ok(())
}

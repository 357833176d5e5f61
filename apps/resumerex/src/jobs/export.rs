//! Result Exporter: CSV with a fixed column order.

use std::path::Path;

use thiserror::Error;
use tracing::info;

use crate::jobs::posting::JobPosting;

pub const DEFAULT_EXPORT_FILE: &str = "job_results.csv";

pub const EXPORT_HEADERS: [&str; 9] = [
    "Title",
    "Company",
    "Location",
    "Posted",
    "Salary",
    "Matched Skills",
    "Relevance %",
    "Apply Link",
    "Description",
];

#[derive(Debug, Error)]
pub enum ExportError {
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("Failed to write export: {0}")]
    Io(#[from] std::io::Error),
}

/// Writes `jobs` to `path`, replacing any existing file.
///
/// Returns `Ok(false)` without touching the filesystem when there is nothing to save.
pub fn export_jobs(jobs: &[JobPosting], path: &Path) -> Result<bool, ExportError> {
    if jobs.is_empty() {
        info!("No jobs to export; skipping {}", path.display());
        return Ok(false);
    }

    let mut writer = csv::Writer::from_path(path)?;
    write_rows(&mut writer, jobs)?;
    writer.flush()?;

    info!("Exported {} jobs to {}", jobs.len(), path.display());
    Ok(true)
}

/// Same layout as `export_jobs`, in memory. Empty input still yields the header row.
pub fn jobs_to_csv(jobs: &[JobPosting]) -> Result<Vec<u8>, ExportError> {
    let mut writer = csv::Writer::from_writer(Vec::new());
    write_rows(&mut writer, jobs)?;
    writer
        .into_inner()
        .map_err(|e| ExportError::Io(e.into_error()))
}

fn write_rows<W: std::io::Write>(
    writer: &mut csv::Writer<W>,
    jobs: &[JobPosting],
) -> Result<(), ExportError> {
    writer.write_record(EXPORT_HEADERS)?;
    for job in jobs {
        let relevance = format!("{:.1}", job.relevance_score);
        writer.write_record([
            job.title.as_str(),
            job.company.as_str(),
            job.location.as_str(),
            job.posted.as_str(),
            job.salary.as_str(),
            job.matched_skills.as_str(),
            relevance.as_str(),
            job.apply_link.as_str(),
            job.description.as_str(),
        ])?;
    }
    Ok(())
}

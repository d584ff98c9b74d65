use crate::models::JobPosting;
use anyhow::Result;
use chrono::{DateTime, Utc};
use std::path::PathBuf;

/// Directory the run artifact lands in, created on demand.
pub const OUTPUT_DIR: &str = "data";

/// Output path for a run captured at `now`. Second-resolution timestamps
/// keep paths unique across runs more than a second apart.
pub fn output_path(now: DateTime<Utc>) -> PathBuf {
    PathBuf::from(OUTPUT_DIR).join(format!("linkedin_jobs_data_{}.json", now.timestamp()))
}

/// Writes the whole collection as one pretty-printed JSON array and returns
/// where it landed. This is the only flush of the run; an empty collection
/// still produces a file.
pub async fn save(jobs: &[JobPosting]) -> Result<PathBuf> {
    let path = output_path(Utc::now());

    tokio::fs::create_dir_all(OUTPUT_DIR).await?;
    let json = serde_json::to_string_pretty(jobs)?;
    tokio::fs::write(&path, json).await?;

    Ok(path)
}

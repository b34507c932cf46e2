//! JSON output for extracted profiles.
//!
//! Each author gets one file named after their handle:
//! ```text
//! json_output_dir/
//! ├── jane.json
//! └── sameeruddinmohammed.json
//! ```
//!
//! The file holds the [`ExtractionResult`] as pretty-printed UTF-8 JSON.

use crate::models::ExtractionResult;
use std::error::Error;
use std::path::PathBuf;
use tokio::fs;
use tracing::{error, info, instrument};

/// Write an [`ExtractionResult`] to `{json_output_dir}/{author}.json`.
///
/// Path separators in `author` are replaced so the file always lands directly
/// inside `json_output_dir`. Returns the written path.
#[instrument(level = "info", skip_all, fields(%author, %json_output_dir))]
pub async fn write_profile(
    result: &ExtractionResult,
    author: &str,
    json_output_dir: &str,
) -> Result<PathBuf, Box<dyn Error>> {
    let json = serde_json::to_string_pretty(result)?;

    if let Err(e) = fs::create_dir_all(json_output_dir).await {
        error!(%json_output_dir, error = %e, "Failed to create JSON dir");
        return Err(e.into());
    }

    let file_stem = author.replace(['/', '\\'], "_");
    let path = PathBuf::from(json_output_dir).join(format!("{file_stem}.json"));

    info!(path = %path.display(), "Writing JSON");
    fs::write(&path, json).await?;
    info!(path = %path.display(), articles = result.article_count(), "Wrote profile JSON");

    Ok(path)
}

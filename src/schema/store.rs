use anyhow::{Context, Result};
use std::{fs, path::Path};
use tracing::debug;

use super::write::OutputFormat;
use super::MergedRecord;

/// Read back an artifact produced by [`super::write_records`].
pub fn load_records(path: &Path) -> Result<Vec<MergedRecord>> {
    let text = fs::read_to_string(path)
        .with_context(|| format!("reading records from {}", path.display()))?;
    let records: Vec<MergedRecord> = match OutputFormat::from_path(path) {
        OutputFormat::Json => serde_json::from_str(&text)
            .with_context(|| format!("parsing JSON {}", path.display()))?,
        OutputFormat::Yaml => serde_yaml::from_str(&text)
            .with_context(|| format!("parsing YAML {}", path.display()))?,
    };
    debug!(count = records.len(), path = %path.display(), "loaded records");
    Ok(records)
}

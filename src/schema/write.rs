use anyhow::{Context, Result};
use std::{io::Write, path::Path};
use tempfile::NamedTempFile;

use super::MergedRecord;

/// Serialization format of the output artifact.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Json,
    Yaml,
}

impl OutputFormat {
    /// `.yaml` / `.yml` select YAML; anything else is JSON.
    pub fn from_path(path: &Path) -> Self {
        match path
            .extension()
            .and_then(|e| e.to_str())
            .map(|e| e.to_ascii_lowercase())
            .as_deref()
        {
            Some("yaml") | Some("yml") => OutputFormat::Yaml,
            _ => OutputFormat::Json,
        }
    }
}

/// Write `records` to `path`, format picked from the extension.
///
/// - pretty-printed, non-ASCII kept verbatim
/// - written to a temp file in the same directory, then renamed over `path`,
///   so a failed run never leaves a half-written artifact
pub fn write_records(path: &Path, records: &[MergedRecord]) -> Result<()> {
    let dir = match path.parent() {
        Some(p) if !p.as_os_str().is_empty() => p,
        _ => Path::new("."),
    };
    let mut tmp = NamedTempFile::new_in(dir)
        .with_context(|| format!("creating temp file in {}", dir.display()))?;

    match OutputFormat::from_path(path) {
        OutputFormat::Json => {
            // pretty-print with a trailing newline
            serde_json::to_writer_pretty(&mut tmp, records).context("serializing JSON")?;
            tmp.write_all(b"\n")?;
        }
        OutputFormat::Yaml => {
            serde_yaml::to_writer(&mut tmp, records).context("serializing YAML")?;
        }
    }
    tmp.flush()?;

    tmp.persist(path)
        .with_context(|| format!("renaming temp file -> {}", path.display()))?;
    Ok(())
}

use anyhow::Result;
use std::{env, path::PathBuf};
use telescraper::{catalog::load_catalog, config::DEFAULT_OUTPUT};
use tracing_subscriber::EnvFilter;

/// Build identifier → name / value-list lookups from a converted artifact
/// and print them as JSON on stdout.
fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_writer(std::io::stderr)
        .init();

    let path = env::args()
        .nth(1)
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from(DEFAULT_OUTPUT));

    let catalog = load_catalog(&path)?;
    println!("{}", serde_json::to_string_pretty(&catalog)?);
    Ok(())
}

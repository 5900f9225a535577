use anyhow::Result;
use std::{env, path::PathBuf};
use telescraper::{
    config::{DEFAULT_ENGLISH, DEFAULT_GERMAN},
    extract::parse_html_file,
};
use tracing::info;
use tracing_subscriber::{fmt, EnvFilter};

/// Print the headers and first row of each given HTML table, to check the
/// header labels before running a conversion.
fn main() -> Result<()> {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    fmt::Subscriber::builder().with_env_filter(env_filter).init();

    let mut paths: Vec<PathBuf> = env::args().skip(1).map(PathBuf::from).collect();
    if paths.is_empty() {
        paths = vec![DEFAULT_ENGLISH.into(), DEFAULT_GERMAN.into()];
    }

    for path in &paths {
        info!("=== {} ===", path.display());
        let table = parse_html_file(path)?;
        info!("headers: {:?}", table.headers);
        info!("{} rows", table.len());

        if let Some(first) = table.rows.first() {
            for header in &table.headers {
                info!("  {}: {:?}", header, first.get(header));
            }
        }
    }
    Ok(())
}

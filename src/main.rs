use anyhow::Result;
use telescraper::{config::ConvertConfig, process};
use tracing::{error, info};
use tracing_subscriber::{fmt, EnvFilter};

fn main() -> Result<()> {
    // ─── 1) init logging ─────────────────────────────────────────────
    let env = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    fmt::Subscriber::builder()
        .with_env_filter(env)
        .with_span_events(fmt::format::FmtSpan::CLOSE)
        .init();
    info!("startup");

    // ─── 2) resolve paths ────────────────────────────────────────────
    let config = ConvertConfig::from_env()?;
    info!(
        english = %config.english.display(),
        german = %config.german.display(),
        output = %config.output.display(),
        "configured"
    );

    // ─── 3) extract, merge, write ────────────────────────────────────
    match process::convert_tables(&config) {
        Ok(report) => {
            info!(
                english_rows = report.english_rows,
                german_rows = report.german_rows,
                merged = report.records.len(),
                "all done"
            );
            Ok(())
        }
        Err(e) => {
            error!("conversion failed: {:?}", e);
            Err(e)
        }
    }
}

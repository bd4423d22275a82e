//! `undead` entry point.
use std::path::Path;

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use undead_client::{Cli, RunSettings, Scenario, log_failure};

fn main() -> Result<()> {
    // Load .env file if it exists (silently ignore if not found)
    let _ = dotenvy::dotenv();

    let cli = Cli::parse();
    setup_logging(cli.log_dir.as_deref())?;

    let settings = RunSettings::from_env().with_cli(&cli);
    let mut scenario = Scenario::from_cli(&cli, settings).inspect_err(log_failure)?;
    let report = scenario.run();

    tracing::info!(
        ticks = report.tick,
        agents = report.agents,
        visible = report.visible,
        chasing = report.chasing,
        "run finished"
    );
    Ok(())
}

/// Setup logging to stderr, mirrored to `<log_dir>/undead.log` when given.
fn setup_logging(log_dir: Option<&Path>) -> Result<()> {
    // RUST_LOG wins; otherwise info and above
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));
    let stderr_layer = tracing_subscriber::fmt::layer().with_writer(std::io::stderr);

    let file_layer = match log_dir {
        Some(dir) => {
            std::fs::create_dir_all(dir)?;
            let file_appender = tracing_appender::rolling::never(dir, "undead.log");
            let (non_blocking_file, guard) = tracing_appender::non_blocking(file_appender);
            // Leak the guard to keep file writer alive
            std::mem::forget(guard);
            Some(
                tracing_subscriber::fmt::layer()
                    .with_writer(non_blocking_file)
                    .with_ansi(false),
            )
        }
        None => None,
    };

    tracing_subscriber::registry()
        .with(env_filter)
        .with(stderr_layer)
        .with(file_layer)
        .init();

    if let Some(dir) = log_dir {
        tracing::info!("Log file: {}/undead.log", dir.display());
    }
    Ok(())
}

use anyhow::{Context, Result};
use clap::Parser;
use qicompare::{
    cli::Cli,
    config::ReportConfig,
    pipeline::{self, RunOptions},
};
use tracing_subscriber::EnvFilter;

/// Initialize tracing subscriber; warnings always, everything with --debug
fn init_tracing(debug: bool) {
    let default_level = if debug {
        tracing::Level::TRACE
    } else {
        tracing::Level::WARN
    };

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive(default_level.into()))
        .with_writer(std::io::stderr)
        .init();
}

/// Build the effective configuration: file (or defaults), then CLI overrides
fn load_config(args: &Cli) -> Result<ReportConfig> {
    let mut config = match &args.config {
        Some(path) => ReportConfig::from_file(path)
            .with_context(|| format!("Failed to load config {}", path.display()))?,
        None => ReportConfig::default(),
    };

    if let Some(dir) = &args.data_dir {
        config.data_dir = dir.clone();
    }
    if let Some(dir) = &args.tables_dir {
        config.tables_dir = dir.clone();
    }

    Ok(config)
}

fn main() -> Result<()> {
    let args = Cli::parse();

    init_tracing(args.debug);

    let config = load_config(&args)?;
    let options = RunOptions {
        indicators: args.selected_indicators(),
        with_comparisons: !args.no_comparisons,
        format: args.format,
    };

    let summary = pipeline::run(&config, &options)?;
    tracing::debug!(
        "Done: {} tables in {}",
        summary.files_written.len(),
        config.tables_dir.display()
    );

    Ok(())
}

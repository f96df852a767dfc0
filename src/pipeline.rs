//! Batch report run: load, compute, render, write
//!
//! Indicators are processed one after another. Each table is rendered to a
//! string first and then written atomically (temp file in the target
//! directory, then rename), so a failure never leaves a truncated table.

use crate::cli::OutputFormat;
use crate::config::ReportConfig;
use crate::indicator::Indicator;
use crate::json_output::JsonReport;
use crate::latex_output::{algorithm_test_table, mean_std_table, table_file_name, time_test_table};
use crate::loader::load_indicator;
use crate::report::IndicatorReport;
use crate::text_output::render_summary;
use anyhow::{Context, Result};
use std::io::Write;
use std::path::{Path, PathBuf};
use tempfile::NamedTempFile;

/// What to produce in a run
#[derive(Debug, Clone)]
pub struct RunOptions {
    pub indicators: Vec<Indicator>,
    /// Also write `_test_time`/`_test_algo` tables and print comparisons
    pub with_comparisons: bool,
    pub format: OutputFormat,
}

impl Default for RunOptions {
    fn default() -> Self {
        Self {
            indicators: Indicator::ALL.to_vec(),
            with_comparisons: true,
            format: OutputFormat::Text,
        }
    }
}

/// Print a progress marker; on stderr when stdout carries JSON
fn progress(format: OutputFormat, marker: &str) {
    match format {
        OutputFormat::Text => println!("----- {}", marker),
        OutputFormat::Json => eprintln!("----- {}", marker),
    }
}

/// Outcome of a run
#[derive(Debug, Clone, Default)]
pub struct RunSummary {
    pub measurements_loaded: usize,
    pub comparisons: usize,
    pub files_written: Vec<PathBuf>,
    /// Indicators with no result files
    pub skipped_indicators: Vec<Indicator>,
}

/// Write `content` to `dir/file_name` atomically
pub fn write_atomic(dir: &Path, file_name: &str, content: &str) -> Result<PathBuf> {
    let target = dir.join(file_name);

    let mut tmp = NamedTempFile::new_in(dir)
        .with_context(|| format!("Failed to create temporary file in {}", dir.display()))?;
    tmp.write_all(content.as_bytes())
        .with_context(|| format!("Failed to write {}", target.display()))?;
    tmp.persist(&target)
        .map_err(|e| e.error)
        .with_context(|| format!("Failed to persist {}", target.display()))?;

    tracing::info!("Wrote {}", target.display());
    Ok(target)
}

/// Render and write every table of one indicator report
pub fn write_tables(
    report: &IndicatorReport,
    config: &ReportConfig,
    with_comparisons: bool,
) -> Result<Vec<PathBuf>> {
    let qi = report.indicator;
    let dir = &config.tables_dir;

    let mut written = vec![write_atomic(
        dir,
        &table_file_name(qi, "mean_std"),
        &mean_std_table(report),
    )?];

    if with_comparisons {
        written.push(write_atomic(
            dir,
            &table_file_name(qi, "test_time"),
            &time_test_table(report, config),
        )?);
        written.push(write_atomic(
            dir,
            &table_file_name(qi, "test_algo"),
            &algorithm_test_table(report, config),
        )?);
    }

    Ok(written)
}

/// Run the whole batch
///
/// Prints `----- <QI>` and `----- <case study>` progress markers followed by
/// the comparison summary in the requested format.
pub fn run(config: &ReportConfig, options: &RunOptions) -> Result<RunSummary> {
    std::fs::create_dir_all(&config.tables_dir).with_context(|| {
        format!(
            "Failed to create output directory {}",
            config.tables_dir.display()
        )
    })?;

    let mut summary = RunSummary::default();

    for &qi in &options.indicators {
        progress(options.format, qi.as_str());

        let measurements = load_indicator(&config.data_dir, qi, config).with_context(|| {
            format!(
                "Failed to load {} measurements from {}",
                qi,
                config.data_dir.display()
            )
        })?;

        if measurements.is_empty() {
            tracing::warn!(
                "No {} result files in {}; skipping",
                qi,
                config.data_dir.display()
            );
            summary.skipped_indicators.push(qi);
            continue;
        }

        let report = IndicatorReport::build(qi, &measurements, config, options.with_comparisons)
            .with_context(|| format!("Failed to compute {} statistics", qi))?;
        for section in &report.sections {
            progress(options.format, &section.case_study);
        }

        summary
            .files_written
            .extend(write_tables(&report, config, options.with_comparisons)?);
        summary.measurements_loaded += measurements.len();
        summary.comparisons += report.comparison_count();

        match options.format {
            OutputFormat::Text => {
                if options.with_comparisons {
                    print!("{}", render_summary(&report, config));
                }
                println!();
            }
            OutputFormat::Json => {
                let json = JsonReport::new(&report, config)
                    .to_json()
                    .context("Failed to serialize JSON report")?;
                println!("{}", json);
            }
        }
    }

    tracing::info!(
        "Loaded {} measurements, {} comparisons, wrote {} tables",
        summary.measurements_loaded,
        summary.comparisons,
        summary.files_written.len()
    );

    Ok(summary)
}

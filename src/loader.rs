//! Result file discovery and loading
//!
//! Files are discovered by name in a single directory. Names that look like
//! result files but fail strict parsing are reported and skipped; every other
//! problem (unreadable file, bad value, unknown algorithm) is fatal.

use crate::config::ReportConfig;
use crate::error::LoadError;
use crate::indicator::Indicator;
use crate::measurement::{Measurement, ParsedFileName};
use std::path::{Path, PathBuf};

/// List candidate result files for one indicator, sorted by path
///
/// A candidate starts with `qi__` and ends with `__<indicator>.csv`.
pub fn discover(dir: &Path, indicator: Indicator) -> Result<Vec<PathBuf>, LoadError> {
    let io_err = |source| LoadError::Io {
        path: dir.to_path_buf(),
        source,
    };
    let suffix = format!("__{}.csv", indicator);

    let mut paths = Vec::new();
    for entry in std::fs::read_dir(dir).map_err(io_err)? {
        let entry = entry.map_err(io_err)?;
        let file_name = entry.file_name();
        let Some(name) = file_name.to_str() else {
            continue;
        };

        if name.starts_with("qi__") && name.ends_with(&suffix) {
            paths.push(entry.path());
        }
    }

    paths.sort();
    tracing::debug!(
        "Discovered {} {} result files in {}",
        paths.len(),
        indicator,
        dir.display()
    );
    Ok(paths)
}

/// Parse one value per non-blank line
///
/// Blank lines separate records and are skipped. `NaN` and infinities are
/// rejected like any other malformed token: they cannot be ranked.
pub fn parse_values(content: &str, path: &Path) -> Result<Vec<f64>, LoadError> {
    content
        .lines()
        .enumerate()
        .filter(|(_, line)| !line.trim().is_empty())
        .map(|(idx, line)| {
            let token = line.trim();
            token
                .parse::<f64>()
                .ok()
                .filter(|v| v.is_finite())
                .ok_or_else(|| LoadError::InvalidValue {
                    path: path.to_path_buf(),
                    line: idx + 1,
                    value: token.to_string(),
                })
        })
        .collect()
}

/// Load a single result file
///
/// Returns `Ok(None)` when the file name does not follow the result file
/// convention; the file is logged and skipped.
pub fn load_measurement(path: &Path, config: &ReportConfig) -> Result<Option<Measurement>, LoadError> {
    let parsed = path
        .file_name()
        .and_then(|name| name.to_str())
        .and_then(ParsedFileName::parse);

    let Some(parsed) = parsed else {
        tracing::warn!("Cannot parse {}.", path.display());
        return Ok(None);
    };

    let content = std::fs::read_to_string(path).map_err(|source| LoadError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let values = parse_values(&content, path)?;

    Measurement::from_parsed(parsed, &values, path, config).map(Some)
}

/// Load every result file of one indicator from `dir`
pub fn load_indicator(
    dir: &Path,
    indicator: Indicator,
    config: &ReportConfig,
) -> Result<Vec<Measurement>, LoadError> {
    let mut measurements = Vec::new();

    for path in discover(dir, indicator)? {
        if let Some(m) = load_measurement(&path, config)? {
            tracing::trace!(
                "Loaded {} ({} runs)",
                path.display(),
                m.values().len()
            );
            measurements.push(m);
        }
    }

    Ok(measurements)
}

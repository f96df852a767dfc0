// Configuration for report generation
//
// Defaults reproduce the fixed constants of the experiment layout: where the
// result files live, where tables go, and how raw tokens render in LaTeX.
// A TOML file may override any subset of fields.

use crate::comparison::EffectSizeThresholds;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Errors raised while loading a configuration file
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Cannot read config file {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid config file {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("Invalid configuration: {0}")]
    Invalid(String),
}

/// Configuration for a report run
///
/// # Example
/// ```
/// use qicompare::config::ReportConfig;
///
/// let config = ReportConfig::default();
/// assert_eq!(config.significance_level, 0.05);
/// assert_eq!(config.algorithm_labels["pesa2"], "\\pesa");
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ReportConfig {
    /// Directory holding `qi__*.csv` result files
    pub data_dir: PathBuf,

    /// Directory receiving the rendered `.tex` tables
    pub tables_dir: PathBuf,

    /// Raw algorithm token → display label
    ///
    /// A token missing from this table is a fatal load error.
    pub algorithm_labels: BTreeMap<String, String>,

    /// Raw case-study name → section header label
    pub case_study_labels: BTreeMap<String, String>,

    /// Section header label for case studies missing from `case_study_labels`
    pub default_case_study_label: String,

    /// p-values below this are significant (bold, favored side underlined)
    pub significance_level: f64,

    /// p-values below this are strongly significant (scientific notation)
    pub strong_significance_level: f64,

    /// Ascending |scaled A12| cut points for N/S/M/L magnitudes
    pub effect_size_thresholds: EffectSizeThresholds,
}

fn default_algorithm_labels() -> BTreeMap<String, String> {
    [("nsgaii", "\\nsga"), ("pesa2", "\\pesa"), ("spea2", "\\spea")]
        .into_iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect()
}

fn default_case_study_labels() -> BTreeMap<String, String> {
    [("train-ticket", "\\ttbs")]
        .into_iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect()
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            data_dir: PathBuf::from("data/quality_indicators"),
            tables_dir: PathBuf::from("tables"),
            algorithm_labels: default_algorithm_labels(),
            case_study_labels: default_case_study_labels(),
            default_case_study_label: "\\ccm".to_string(),
            significance_level: 0.05,
            strong_significance_level: 0.001,
            effect_size_thresholds: EffectSizeThresholds::default(),
        }
    }
}

impl ReportConfig {
    /// Load a configuration from a TOML file, filling missing fields with defaults
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        let config: Self = toml::from_str(&content).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })?;
        config.validate().map_err(ConfigError::Invalid)?;
        tracing::debug!("Loaded report config from {}", path.display());
        Ok(config)
    }

    /// Display label for a raw algorithm token
    pub fn algorithm_label(&self, token: &str) -> Option<&str> {
        self.algorithm_labels.get(token).map(String::as_str)
    }

    /// Section header label for a raw case-study name
    pub fn case_study_label<'a>(&'a self, case_study: &str) -> &'a str {
        self.case_study_labels
            .get(case_study)
            .map(String::as_str)
            .unwrap_or(&self.default_case_study_label)
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<(), String> {
        if !(0.0..=1.0).contains(&self.significance_level) {
            return Err(format!(
                "significance_level must be in [0, 1], got {}",
                self.significance_level
            ));
        }

        if !(0.0..=self.significance_level).contains(&self.strong_significance_level) {
            return Err(format!(
                "strong_significance_level must be in [0, significance_level], got {}",
                self.strong_significance_level
            ));
        }

        if self.algorithm_labels.is_empty() {
            return Err("algorithm_labels must not be empty".to_string());
        }

        self.effect_size_thresholds.validate()
    }
}

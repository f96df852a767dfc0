//! Measurements: one parsed quality-indicator result file
//!
//! Result files follow `qi__<algo>-<casestudy>-bytime-<time>__<indicator>.csv`.
//! The name carries every experimental attribute; the body holds one value
//! per independent run.

use crate::aggregate::mean_and_stdev;
use crate::config::ReportConfig;
use crate::error::{LoadError, StatsError};
use crate::indicator::Indicator;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::{Path, PathBuf};
use std::sync::LazyLock;

/// Result file name pattern, with one named group per attribute
static FILE_NAME_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"^qi__(?P<algo>[^-]+)-(?P<casestudy>.+)-bytime-(?P<time>\d+)__(?P<qi>HV|IGD|IGD\+|EP|SPREAD|GSPREAD)\.csv$",
    )
    .expect("Invalid result file name regex")
});

/// Search time budget, stored in milliseconds
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct TimeBudget(u64);

impl TimeBudget {
    pub fn from_millis(millis: u64) -> Self {
        Self(millis)
    }

    pub fn from_minutes(minutes: u64) -> Self {
        Self(minutes * 60 * 1000)
    }

    pub fn as_millis(&self) -> u64 {
        self.0
    }

    /// Whole minutes (truncated)
    pub fn whole_minutes(&self) -> u64 {
        self.0 / 1000 / 60
    }
}

impl fmt::Display for TimeBudget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} min", self.whole_minutes())
    }
}

/// Attributes embedded in a result file name
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedFileName {
    pub algorithm: String,
    pub case_study: String,
    pub budget: TimeBudget,
    pub indicator: Indicator,
}

impl ParsedFileName {
    /// Parse a bare file name (no directory part)
    ///
    /// Returns `None` when the name does not follow the result file
    /// convention or when any attribute is missing or malformed.
    ///
    /// # Example
    /// ```
    /// use qicompare::measurement::ParsedFileName;
    ///
    /// let parsed = ParsedFileName::parse("qi__nsgaii-train-ticket-bytime-60000__HV.csv").unwrap();
    /// assert_eq!(parsed.algorithm, "nsgaii");
    /// assert_eq!(parsed.case_study, "train-ticket");
    /// assert_eq!(parsed.budget.to_string(), "1 min");
    /// ```
    pub fn parse(file_name: &str) -> Option<Self> {
        let caps = FILE_NAME_PATTERN.captures(file_name)?;
        let millis = caps.name("time")?.as_str().parse::<u64>().ok()?;

        Some(Self {
            algorithm: caps.name("algo")?.as_str().to_string(),
            case_study: caps.name("casestudy")?.as_str().to_string(),
            budget: TimeBudget::from_millis(millis),
            indicator: caps.name("qi")?.as_str().parse().ok()?,
        })
    }
}

/// One algorithm × case study × budget × indicator sample
///
/// Values are sign-normalized at construction (higher is better); `mean`
/// and `stdev` describe the raw values in the indicator's own polarity.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Measurement {
    #[serde(skip_serializing_if = "Option::is_none")]
    path: Option<PathBuf>,
    algorithm_token: String,
    algorithm: String,
    case_study: String,
    budget: TimeBudget,
    indicator: Indicator,
    values: Vec<f64>,
    mean: f64,
    stdev: f64,
}

impl Measurement {
    /// Build a measurement from raw (un-normalized) run values
    ///
    /// `algorithm` is used both as the raw token and as the display label.
    pub fn new(
        algorithm: impl Into<String>,
        case_study: impl Into<String>,
        budget: TimeBudget,
        indicator: Indicator,
        raw_values: &[f64],
    ) -> Result<Self, StatsError> {
        let algorithm = algorithm.into();
        Self::build(
            None,
            algorithm.clone(),
            algorithm,
            case_study.into(),
            budget,
            indicator,
            raw_values,
        )
    }

    /// Build a measurement from a parsed file name and the file's values
    ///
    /// The algorithm token must have a display label in `config`.
    pub fn from_parsed(
        parsed: ParsedFileName,
        raw_values: &[f64],
        path: &Path,
        config: &ReportConfig,
    ) -> Result<Self, LoadError> {
        let label = config
            .algorithm_label(&parsed.algorithm)
            .ok_or_else(|| LoadError::UnknownAlgorithm {
                token: parsed.algorithm.clone(),
                path: path.to_path_buf(),
            })?
            .to_string();

        Ok(Self::build(
            Some(path.to_path_buf()),
            parsed.algorithm,
            label,
            parsed.case_study,
            parsed.budget,
            parsed.indicator,
            raw_values,
        )?)
    }

    fn build(
        path: Option<PathBuf>,
        algorithm_token: String,
        algorithm: String,
        case_study: String,
        budget: TimeBudget,
        indicator: Indicator,
        raw_values: &[f64],
    ) -> Result<Self, StatsError> {
        let (mean, stdev) = mean_and_stdev(raw_values)?;

        Ok(Self {
            path,
            algorithm_token,
            algorithm,
            case_study,
            budget,
            indicator,
            values: indicator.normalize(raw_values),
            mean,
            stdev,
        })
    }

    pub fn path(&self) -> Option<&Path> {
        self.path.as_deref()
    }

    pub fn algorithm_token(&self) -> &str {
        &self.algorithm_token
    }

    /// Display label of the algorithm (e.g. `\nsga`)
    pub fn algorithm(&self) -> &str {
        &self.algorithm
    }

    pub fn case_study(&self) -> &str {
        &self.case_study
    }

    pub fn budget(&self) -> TimeBudget {
        self.budget
    }

    /// Budget as displayed in tables (e.g. `5 min`)
    pub fn time(&self) -> String {
        self.budget.to_string()
    }

    pub fn indicator(&self) -> Indicator {
        self.indicator
    }

    /// Sign-normalized run values (higher is better)
    pub fn values(&self) -> &[f64] {
        &self.values
    }

    pub fn mean(&self) -> f64 {
        self.mean
    }

    pub fn stdev(&self) -> f64 {
        self.stdev
    }

    /// Total order over the experimental identity of a measurement
    pub(crate) fn identity(&self) -> (&str, &str, TimeBudget, Indicator) {
        (
            &self.algorithm,
            &self.case_study,
            self.budget,
            self.indicator,
        )
    }
}

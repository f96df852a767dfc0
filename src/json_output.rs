//! JSON output format for comparison reports
//!
//! `--format json` prints one document per indicator.

use crate::aggregate::AggregateRow;
use crate::comparison::{AttributeComparison, AttributeValue, Magnitude};
use crate::config::ReportConfig;
use crate::report::IndicatorReport;
use crate::significance::{Favored, Significance};
use serde::Serialize;

/// A single comparison with its highlighting decisions
#[derive(Debug, Clone, Serialize)]
pub struct JsonComparison {
    pub group: AttributeValue,
    pub first: AttributeValue,
    pub second: AttributeValue,
    pub p_value: f64,
    pub a12: f64,
    pub magnitude: Magnitude,
    pub significance: Significance,
    pub favored: Favored,
}

impl JsonComparison {
    fn new(comparison: &AttributeComparison, config: &ReportConfig) -> Self {
        Self {
            group: comparison.group.clone(),
            first: comparison.first.clone(),
            second: comparison.second.clone(),
            p_value: comparison.p_value,
            a12: comparison.a12,
            magnitude: comparison.magnitude,
            significance: Significance::classify(comparison.p_value, config),
            favored: Favored::of(comparison, config),
        }
    }
}

/// One case study's statistics
#[derive(Debug, Clone, Serialize)]
pub struct JsonCaseStudy {
    pub case_study: String,
    pub aggregates: Vec<AggregateRow>,
    pub time_comparisons: Vec<JsonComparison>,
    pub algorithm_comparisons: Vec<JsonComparison>,
}

/// Complete JSON document for one indicator
#[derive(Debug, Clone, Serialize)]
pub struct JsonReport {
    pub version: String,
    pub indicator: String,
    pub significance_level: f64,
    pub case_studies: Vec<JsonCaseStudy>,
}

impl JsonReport {
    pub fn new(report: &IndicatorReport, config: &ReportConfig) -> Self {
        let convert = |rows: &[AttributeComparison]| {
            rows.iter()
                .map(|c| JsonComparison::new(c, config))
                .collect::<Vec<_>>()
        };

        Self {
            version: env!("CARGO_PKG_VERSION").to_string(),
            indicator: report.indicator.to_string(),
            significance_level: config.significance_level,
            case_studies: report
                .sections
                .iter()
                .map(|s| JsonCaseStudy {
                    case_study: s.case_study.clone(),
                    aggregates: s.aggregates.clone(),
                    time_comparisons: convert(s.time_comparisons.as_slice()),
                    algorithm_comparisons: convert(s.algorithm_comparisons.as_slice()),
                })
                .collect(),
        }
    }

    /// Serialize to pretty-printed JSON
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}

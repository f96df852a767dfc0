//! Per-indicator report model
//!
//! One section per case study, each holding the mean/stdev rows and the two
//! comparison families:
//! - budgets compared within each algorithm ("test_time")
//! - algorithms compared within each budget ("test_algo")

use crate::aggregate::{aggregate, AggregateRow};
use crate::comparison::{compare, Attribute, AttributeComparison};
use crate::config::ReportConfig;
use crate::error::StatsError;
use crate::indicator::Indicator;
use crate::measurement::Measurement;
use serde::Serialize;
use std::collections::BTreeMap;

/// Statistics for one case study
#[derive(Debug, Clone, Serialize)]
pub struct CaseStudySection {
    /// Raw case-study name from the file names
    pub case_study: String,
    /// Section header label
    pub label: String,
    pub aggregates: Vec<AggregateRow>,
    /// Budgets compared within each algorithm
    pub time_comparisons: Vec<AttributeComparison>,
    /// Algorithms compared within each budget
    pub algorithm_comparisons: Vec<AttributeComparison>,
}

/// All statistics for one indicator
#[derive(Debug, Clone, Serialize)]
pub struct IndicatorReport {
    pub indicator: Indicator,
    /// Sections sorted by raw case-study name
    pub sections: Vec<CaseStudySection>,
}

impl IndicatorReport {
    /// Build the report for one indicator's measurements
    ///
    /// With `with_comparisons` off, only aggregates are computed.
    pub fn build(
        indicator: Indicator,
        measurements: &[Measurement],
        config: &ReportConfig,
        with_comparisons: bool,
    ) -> Result<Self, StatsError> {
        let mut by_case_study: BTreeMap<&str, Vec<Measurement>> = BTreeMap::new();
        for m in measurements.iter().filter(|m| m.indicator() == indicator) {
            by_case_study
                .entry(m.case_study())
                .or_default()
                .push(m.clone());
        }

        let thresholds = &config.effect_size_thresholds;
        let mut sections = Vec::with_capacity(by_case_study.len());
        for (case_study, runs) in by_case_study {
            let (time_comparisons, algorithm_comparisons) = if with_comparisons {
                (
                    compare(&runs, Attribute::Algorithm, Attribute::Budget, thresholds)?,
                    compare(&runs, Attribute::Budget, Attribute::Algorithm, thresholds)?,
                )
            } else {
                (Vec::new(), Vec::new())
            };

            sections.push(CaseStudySection {
                case_study: case_study.to_string(),
                label: config.case_study_label(case_study).to_string(),
                aggregates: aggregate(&runs)?,
                time_comparisons,
                algorithm_comparisons,
            });
        }

        Ok(Self {
            indicator,
            sections,
        })
    }

    /// Total number of pairwise comparisons across all sections
    pub fn comparison_count(&self) -> usize {
        self.sections
            .iter()
            .map(|s| s.time_comparisons.len() + s.algorithm_comparisons.len())
            .sum()
    }
}

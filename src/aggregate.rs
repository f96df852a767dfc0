// Aggregate statistics per (algorithm, time budget)
//
// Mean and population standard deviation (divide by n) are accumulated in
// f64 with Welford's update, so constant samples give exactly zero spread.

use crate::error::StatsError;
use crate::indicator::Indicator;
use crate::measurement::{Measurement, TimeBudget};
use serde::Serialize;
use std::collections::BTreeMap;

/// Mean and population standard deviation of a non-empty sample
pub fn mean_and_stdev(values: &[f64]) -> Result<(f64, f64), StatsError> {
    if values.is_empty() {
        return Err(StatsError::EmptySample { side: "sample" });
    }

    let mut mean = 0.0;
    let mut sum_sq = 0.0;
    for (i, &x) in values.iter().enumerate() {
        let delta = x - mean;
        mean += delta / (i + 1) as f64;
        sum_sq += delta * (x - mean);
    }
    let stdev = (sum_sq / values.len() as f64).max(0.0).sqrt();

    if !mean.is_finite() || !stdev.is_finite() {
        return Err(StatsError::Computation {
            what: "mean and standard deviation",
            reason: format!("non-finite result over {} values", values.len()),
        });
    }

    Ok((mean, stdev))
}

/// Pooled statistics for one (algorithm, budget) cell of the mean/stdev table
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AggregateRow {
    pub algorithm: String,
    pub budget: TimeBudget,
    pub indicator: Indicator,
    /// Mean in the indicator's own polarity
    pub mean: f64,
    pub stdev: f64,
    /// Number of pooled run values
    pub runs: usize,
    /// Case studies that contributed values
    pub case_studies: Vec<String>,
}

/// Pool run values per (algorithm, budget) and summarize them
///
/// Every measurement sharing an algorithm label and budget contributes all of
/// its runs, whatever its case study. Callers wanting one table section per
/// case study pass that case study's measurements only.
///
/// Rows are ordered by algorithm label, then by the budget's display text,
/// both compared as strings.
pub fn aggregate(measurements: &[Measurement]) -> Result<Vec<AggregateRow>, StatsError> {
    let mut pooled: BTreeMap<(String, TimeBudget, Indicator), (Vec<f64>, Vec<String>)> =
        BTreeMap::new();

    for m in measurements {
        let key = (m.algorithm().to_string(), m.budget(), m.indicator());
        let (values, case_studies) = pooled.entry(key).or_default();
        // Values are stored normalized; undo it to report raw polarity
        values.extend(m.indicator().normalize(m.values()));
        if !case_studies.iter().any(|cs| cs == m.case_study()) {
            case_studies.push(m.case_study().to_string());
        }
    }

    let mut rows = pooled
        .into_iter()
        .map(|((algorithm, budget, indicator), (values, mut case_studies))| {
            let (mean, stdev) = mean_and_stdev(&values)?;
            case_studies.sort();
            Ok(AggregateRow {
                algorithm,
                budget,
                indicator,
                mean,
                stdev,
                runs: values.len(),
                case_studies,
            })
        })
        .collect::<Result<Vec<_>, StatsError>>()?;

    rows.sort_by(|a, b| {
        (a.algorithm.as_str(), a.budget.to_string(), a.indicator).cmp(&(
            b.algorithm.as_str(),
            b.budget.to_string(),
            b.indicator,
        ))
    });

    tracing::debug!(
        "Aggregated {} measurements into {} rows",
        measurements.len(),
        rows.len()
    );

    Ok(rows)
}

// Grouped pairwise comparison of measurements
//
// Measurements are partitioned by a grouping accessor; inside each group,
// every unordered pair is compared once with the Mann-Whitney U test and the
// A12 effect size. Groups of one produce nothing.

use super::effect_size::{EffectSizeThresholds, Magnitude};
use super::mann_whitney::mann_whitney_u;
use super::rank::vargha_delaney_a12;
use crate::error::StatsError;
use crate::measurement::{Measurement, TimeBudget};
use serde::{Serialize, Serializer};
use std::collections::BTreeMap;
use std::fmt;

/// Experimental attribute of a measurement, usable as a grouping key
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Attribute {
    Algorithm,
    CaseStudy,
    Budget,
}

impl Attribute {
    /// Select this attribute's value from a measurement
    pub fn value(&self, m: &Measurement) -> AttributeValue {
        match self {
            Attribute::Algorithm => AttributeValue::Text(m.algorithm().to_string()),
            Attribute::CaseStudy => AttributeValue::Text(m.case_study().to_string()),
            Attribute::Budget => AttributeValue::Budget(m.budget()),
        }
    }

    /// Column name used in summaries
    pub fn name(&self) -> &'static str {
        match self {
            Attribute::Algorithm => "algo",
            Attribute::CaseStudy => "casestudy",
            Attribute::Budget => "time",
        }
    }
}

/// Value of an [`Attribute`]
///
/// Budgets order numerically; text orders lexicographically.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum AttributeValue {
    Text(String),
    Budget(TimeBudget),
}

impl fmt::Display for AttributeValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AttributeValue::Text(text) => f.write_str(text),
            AttributeValue::Budget(budget) => budget.fmt(f),
        }
    }
}

impl Serialize for AttributeValue {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

/// Test outcome for one pair of samples
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct PairStatistics {
    pub p_value: f64,
    pub a12: f64,
    pub magnitude: Magnitude,
}

/// Compare two samples: rank-sum p-value, A12 and its magnitude
pub fn compare_samples(
    first: &[f64],
    second: &[f64],
    thresholds: &EffectSizeThresholds,
) -> Result<PairStatistics, StatsError> {
    let mwu = mann_whitney_u(first, second)?;
    let a12 = vargha_delaney_a12(first, second)?;

    Ok(PairStatistics {
        p_value: mwu.p_value,
        a12,
        magnitude: thresholds.classify(a12),
    })
}

/// One row of a grouped comparison
///
/// `a12 > 0.5` means `first` tends to produce larger (better) values.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PairwiseComparison<K, V> {
    pub group: K,
    pub first: V,
    pub second: V,
    pub p_value: f64,
    pub a12: f64,
    pub magnitude: Magnitude,
}

/// Comparison keyed by stock attributes
pub type AttributeComparison = PairwiseComparison<AttributeValue, AttributeValue>;

/// Compare every unordered pair of measurements inside each group
///
/// `group_by` selects the grouping key and `varying` the value that tells the
/// two sides of a pair apart. Inside a group, members are ordered by their
/// varying value (then by experimental identity) before pairing, so the
/// first side of a pair never has the larger varying value and reordering
/// the input changes nothing. Rows are sorted by group, first value, second
/// value.
///
/// Fails on the first pair with an empty sample.
pub fn compare_by<K, V, G, F>(
    measurements: &[Measurement],
    group_by: G,
    varying: F,
    thresholds: &EffectSizeThresholds,
) -> Result<Vec<PairwiseComparison<K, V>>, StatsError>
where
    K: Ord + Clone,
    V: Ord + Clone,
    G: Fn(&Measurement) -> K,
    F: Fn(&Measurement) -> V,
{
    let mut groups: BTreeMap<K, Vec<(V, &Measurement)>> = BTreeMap::new();
    for m in measurements {
        groups.entry(group_by(m)).or_default().push((varying(m), m));
    }

    let mut rows = Vec::new();
    for (key, mut members) in groups {
        if members.len() < 2 {
            continue;
        }

        members.sort_by(|(va, a), (vb, b)| va.cmp(vb).then_with(|| a.identity().cmp(&b.identity())));

        for (i, (first_value, first)) in members.iter().enumerate() {
            for (second_value, second) in &members[i + 1..] {
                let stats = compare_samples(first.values(), second.values(), thresholds)?;
                rows.push(PairwiseComparison {
                    group: key.clone(),
                    first: first_value.clone(),
                    second: second_value.clone(),
                    p_value: stats.p_value,
                    a12: stats.a12,
                    magnitude: stats.magnitude,
                });
            }
        }
    }

    rows.sort_by(|a, b| {
        a.group
            .cmp(&b.group)
            .then_with(|| a.first.cmp(&b.first))
            .then_with(|| a.second.cmp(&b.second))
    });

    Ok(rows)
}

/// [`compare_by`] with stock attribute accessors
///
/// # Example
/// ```
/// use qicompare::comparison::{compare, Attribute, EffectSizeThresholds};
/// use qicompare::indicator::Indicator;
/// use qicompare::measurement::{Measurement, TimeBudget};
///
/// let runs = vec![
///     Measurement::new("nsgaii", "cs", TimeBudget::from_minutes(1), Indicator::Hv, &[0.1, 0.2]).unwrap(),
///     Measurement::new("nsgaii", "cs", TimeBudget::from_minutes(2), Indicator::Hv, &[0.3, 0.4]).unwrap(),
/// ];
/// let rows = compare(&runs, Attribute::Algorithm, Attribute::Budget, &EffectSizeThresholds::default()).unwrap();
/// assert_eq!(rows.len(), 1);
/// assert_eq!(rows[0].first.to_string(), "1 min");
/// assert_eq!(rows[0].a12, 0.0);
/// ```
pub fn compare(
    measurements: &[Measurement],
    group_by: Attribute,
    varying: Attribute,
    thresholds: &EffectSizeThresholds,
) -> Result<Vec<AttributeComparison>, StatsError> {
    let rows = compare_by(
        measurements,
        |m| group_by.value(m),
        |m| varying.value(m),
        thresholds,
    )?;

    tracing::debug!(
        "Compared {} measurements grouped by {} across {}: {} pairs",
        measurements.len(),
        group_by.name(),
        varying.name(),
        rows.len()
    );

    Ok(rows)
}

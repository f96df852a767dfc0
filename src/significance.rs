//! Significance and direction highlighting rules shared by all renderers

use crate::comparison::PairwiseComparison;
use crate::config::ReportConfig;
use serde::Serialize;

/// Significance class of a p-value
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Significance {
    /// Below the strong level (0.001 by default)
    Strong,
    /// Below the significance level (0.05 by default)
    Significant,
    NotSignificant,
}

impl Significance {
    pub fn classify(p_value: f64, config: &ReportConfig) -> Self {
        if p_value < config.strong_significance_level {
            Significance::Strong
        } else if p_value < config.significance_level {
            Significance::Significant
        } else {
            Significance::NotSignificant
        }
    }

    pub fn is_significant(&self) -> bool {
        !matches!(self, Significance::NotSignificant)
    }
}

/// Side of a comparison with stochastically larger (better) values
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Favored {
    First,
    Second,
    Neither,
}

impl Favored {
    /// Favored side of a comparison; `Neither` unless it is significant
    pub fn of<K, V>(comparison: &PairwiseComparison<K, V>, config: &ReportConfig) -> Self {
        if !Significance::classify(comparison.p_value, config).is_significant() {
            return Favored::Neither;
        }

        if comparison.a12 > 0.5 {
            Favored::First
        } else if comparison.a12 < 0.5 {
            Favored::Second
        } else {
            Favored::Neither
        }
    }
}

// Effect size magnitude interpretation
//
// A12 is rescaled to [-1, 1] via (A12 - 0.5) * 2 and its absolute value is
// checked against three ascending cut points (Romano et al. thresholds for
// Cliff's delta, which the rescaled A12 equals).

use serde::{Deserialize, Serialize};
use std::fmt;

/// Magnitude of a stochastic-dominance effect
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Magnitude {
    Negligible,
    Small,
    Medium,
    Large,
}

impl Magnitude {
    /// One-letter label used in tables (N, S, M, L)
    pub fn abbreviation(&self) -> &'static str {
        match self {
            Magnitude::Negligible => "N",
            Magnitude::Small => "S",
            Magnitude::Medium => "M",
            Magnitude::Large => "L",
        }
    }
}

impl fmt::Display for Magnitude {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.abbreviation())
    }
}

/// Lower bounds of the Small, Medium and Large magnitudes
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EffectSizeThresholds {
    pub small: f64,
    pub medium: f64,
    pub large: f64,
}

impl Default for EffectSizeThresholds {
    fn default() -> Self {
        Self {
            small: 0.147,
            medium: 0.33,
            large: 0.474,
        }
    }
}

impl EffectSizeThresholds {
    /// Classify an A12 value
    ///
    /// # Example
    /// ```
    /// use qicompare::comparison::{EffectSizeThresholds, Magnitude};
    ///
    /// let thresholds = EffectSizeThresholds::default();
    /// assert_eq!(thresholds.classify(0.5), Magnitude::Negligible);
    /// assert_eq!(thresholds.classify(0.0), Magnitude::Large);
    /// ```
    pub fn classify(&self, a12: f64) -> Magnitude {
        let scaled = ((a12 - 0.5) * 2.0).abs();

        if scaled < self.small {
            Magnitude::Negligible
        } else if scaled < self.medium {
            Magnitude::Small
        } else if scaled < self.large {
            Magnitude::Medium
        } else {
            Magnitude::Large
        }
    }

    /// Validate thresholds
    pub fn validate(&self) -> Result<(), String> {
        let ascending = 0.0 < self.small && self.small < self.medium && self.medium < self.large;
        if !ascending || self.large > 1.0 {
            return Err(format!(
                "effect_size_thresholds must satisfy 0 < small < medium < large <= 1, got {}, {}, {}",
                self.small, self.medium, self.large
            ));
        }
        Ok(())
    }
}

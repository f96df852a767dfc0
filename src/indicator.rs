//! Quality indicators and sign normalization
//!
//! Every downstream consumer assumes "higher is better". Indicators where
//! smaller values are better (distance- and spread-based ones) are negated
//! once, when a measurement is built.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Whether larger or smaller values of an indicator are better
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Polarity {
    Maximize,
    Minimize,
}

/// Supported quality indicators
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Indicator {
    /// Hypervolume
    #[serde(rename = "HV")]
    Hv,
    /// Inverted generational distance
    #[serde(rename = "IGD")]
    Igd,
    /// Inverted generational distance plus
    #[serde(rename = "IGD+")]
    IgdPlus,
    /// Additive epsilon
    #[serde(rename = "EP")]
    Ep,
    /// Spread (Delta)
    #[serde(rename = "SPREAD")]
    Spread,
    /// Generalized spread
    #[serde(rename = "GSPREAD")]
    Gspread,
}

impl Indicator {
    /// All indicators, in report order
    pub const ALL: [Indicator; 6] = [
        Indicator::Hv,
        Indicator::Igd,
        Indicator::IgdPlus,
        Indicator::Ep,
        Indicator::Spread,
        Indicator::Gspread,
    ];

    /// Token used in file names and table headers
    pub fn as_str(&self) -> &'static str {
        match self {
            Indicator::Hv => "HV",
            Indicator::Igd => "IGD",
            Indicator::IgdPlus => "IGD+",
            Indicator::Ep => "EP",
            Indicator::Spread => "SPREAD",
            Indicator::Gspread => "GSPREAD",
        }
    }

    pub fn polarity(&self) -> Polarity {
        match self {
            Indicator::Igd | Indicator::IgdPlus | Indicator::Spread | Indicator::Gspread => {
                Polarity::Minimize
            }
            Indicator::Hv | Indicator::Ep => Polarity::Maximize,
        }
    }

    pub fn is_minimized(&self) -> bool {
        self.polarity() == Polarity::Minimize
    }

    /// Return `values` oriented so that larger is better
    ///
    /// Minimize-oriented indicators are negated; maximize-oriented ones are
    /// returned unchanged.
    pub fn normalize(&self, values: &[f64]) -> Vec<f64> {
        match self.polarity() {
            Polarity::Maximize => values.to_vec(),
            Polarity::Minimize => values.iter().map(|v| -v).collect(),
        }
    }
}

impl fmt::Display for Indicator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Indicator {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Indicator::ALL
            .iter()
            .copied()
            .find(|qi| qi.as_str().eq_ignore_ascii_case(s))
            .ok_or_else(|| {
                format!(
                    "Unknown quality indicator: {}. Expected one of HV, IGD, IGD+, EP, SPREAD, GSPREAD",
                    s
                )
            })
    }
}

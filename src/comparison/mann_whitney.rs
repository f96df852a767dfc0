// Mann-Whitney U (Wilcoxon rank-sum) test
//
// Two-sided test of the null hypothesis that both samples come from the same
// distribution. p-value method:
// - Exact: either sample has at most 8 values and there are no ties. The null
//   distribution of U is the coefficient sequence of the Gaussian binomial
//   [m+n choose m]_q.
// - Asymptotic otherwise: normal approximation with tie correction and
//   continuity correction.

use super::rank::{ensure_non_empty, first_rank_sum, tie_group_sizes};
use crate::error::StatsError;
use serde::Serialize;

/// Largest sample size for which the exact null distribution is used
pub const EXACT_MAX_SAMPLE_SIZE: usize = 8;

/// How the p-value was obtained
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum PValueMethod {
    Exact,
    Asymptotic,
}

/// Result of a Mann-Whitney U test
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MannWhitneyResult {
    /// U statistic of the first sample (`R1 - m*(m+1)/2`)
    pub u_statistic: f64,
    /// Two-sided p-value in [0, 1]
    pub p_value: f64,
    pub method: PValueMethod,
}

/// Two-sided Mann-Whitney U test of `first` against `second`
///
/// Fails on a zero-length sample; no p-value is fabricated for it.
///
/// # Example
/// ```
/// use qicompare::comparison::{mann_whitney_u, PValueMethod};
///
/// let result = mann_whitney_u(&[1.0, 2.0, 3.0, 4.0, 5.0], &[6.0, 7.0, 8.0, 9.0, 10.0]).unwrap();
/// assert_eq!(result.method, PValueMethod::Exact);
/// assert!(result.p_value < 0.01);
/// ```
pub fn mann_whitney_u(first: &[f64], second: &[f64]) -> Result<MannWhitneyResult, StatsError> {
    ensure_non_empty(first, second)?;

    let m = first.len();
    let n = second.len();
    let u1 = first_rank_sum(first, second) - (m * (m + 1)) as f64 / 2.0;
    let u2 = (m * n) as f64 - u1;
    let u = u1.max(u2);

    let pooled: Vec<f64> = first.iter().chain(second).copied().collect();
    let ties = tie_group_sizes(&pooled);
    let has_ties = ties.iter().any(|&t| t > 1);

    let (p_value, method) = if m.min(n) <= EXACT_MAX_SAMPLE_SIZE && !has_ties {
        (exact_p_value(u, m, n), PValueMethod::Exact)
    } else {
        (asymptotic_p_value(u, m, n, &ties), PValueMethod::Asymptotic)
    };

    tracing::trace!(m, n, u1, p_value, ?method, "Mann-Whitney U test");

    Ok(MannWhitneyResult {
        u_statistic: u1,
        p_value: p_value.clamp(0.0, 1.0),
        method,
    })
}

/// Frequencies of each U value (0..=m*n) under the null hypothesis
///
/// Builds `[m+n choose m]_q = prod_{i=1..k} (1 - q^(l+i)) / (1 - q^i)` with
/// `k = min(m, n)` and `l = max(m, n)`.
fn u_null_frequencies(m: usize, n: usize) -> Vec<f64> {
    let (k, l) = (m.min(n), m.max(n));
    let mut freq = vec![0.0; k * l + 1];
    freq[0] = 1.0;

    for i in 1..=k {
        // Multiply by (1 - q^(l+i))
        let shift = l + i;
        for d in (shift..freq.len()).rev() {
            freq[d] -= freq[d - shift];
        }
        // Divide by (1 - q^i)
        for d in i..freq.len() {
            freq[d] += freq[d - i];
        }
    }

    freq
}

fn exact_p_value(u: f64, m: usize, n: usize) -> f64 {
    let freq = u_null_frequencies(m, n);
    let total: f64 = freq.iter().sum();
    // u = max(U1, U2) >= m*n/2, always a whole number without ties
    let start = u.round() as usize;
    let upper_tail: f64 = freq.iter().skip(start).sum();

    2.0 * upper_tail / total
}

fn asymptotic_p_value(u: f64, m: usize, n: usize, ties: &[usize]) -> f64 {
    let (mf, nf) = (m as f64, n as f64);
    let total = mf + nf;
    let mu = mf * nf / 2.0;

    let tie_term: f64 = ties
        .iter()
        .map(|&t| {
            let t = t as f64;
            t * t * t - t
        })
        .sum();
    let tie_adjust = if total > 1.0 {
        tie_term / (total * (total - 1.0))
    } else {
        0.0
    };
    let sigma = (mf * nf / 12.0 * ((total + 1.0) - tie_adjust)).sqrt();

    if sigma <= 0.0 || !sigma.is_finite() {
        // Every pooled value is identical
        return 1.0;
    }

    let z = (u - mu - 0.5) / sigma;
    2.0 * normal_sf(z)
}

/// Standard normal survival function, P(Z > z)
fn normal_sf(z: f64) -> f64 {
    0.5 * erfc(z / std::f64::consts::SQRT_2)
}

/// Complementary error function (Chebyshev fit, fractional error < 1.2e-7)
#[allow(clippy::unreadable_literal)] // Standard numerical constants
fn erfc(x: f64) -> f64 {
    let z = x.abs();
    let t = 1.0 / (1.0 + 0.5 * z);
    let poly = -z * z - 1.26551223
        + t * (1.00002368
            + t * (0.37409196
                + t * (0.09678418
                    + t * (-0.18628806
                        + t * (0.27886807
                            + t * (-1.13520398
                                + t * (1.48851587 + t * (-0.82215223 + t * 0.17087277))))))));
    let ans = t * poly.exp();

    if x >= 0.0 {
        ans
    } else {
        2.0 - ans
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn binomial(n: u64, k: u64) -> f64 {
        (1..=k).fold(1.0, |acc, i| acc * (n - k + i) as f64 / i as f64)
    }

    #[test]
    fn test_null_frequencies_small_table() {
        // m = n = 2: U ∈ {0,1,2,3,4} with counts 1,1,2,1,1
        assert_eq!(u_null_frequencies(2, 2), vec![1.0, 1.0, 2.0, 1.0, 1.0]);
    }

    #[test]
    fn test_null_frequencies_sum_to_binomial() {
        for (m, n) in [(3, 5), (5, 5), (8, 12), (1, 30)] {
            let freq = u_null_frequencies(m, n);
            let total: f64 = freq.iter().sum();
            assert!((total - binomial((m + n) as u64, m as u64)).abs() < 1e-6);
            assert_eq!(freq.len(), m * n + 1);
        }
    }

    #[test]
    fn test_null_frequencies_symmetric_in_sizes() {
        assert_eq!(u_null_frequencies(3, 6), u_null_frequencies(6, 3));
    }

    #[test]
    fn test_exact_complete_separation_five_each() {
        let result = mann_whitney_u(&[1.0, 2.0, 3.0, 4.0, 5.0], &[6.0, 7.0, 8.0, 9.0, 10.0]).unwrap();
        assert_eq!(result.method, PValueMethod::Exact);
        assert_eq!(result.u_statistic, 0.0);
        // Two of C(10,5) = 252 arrangements are as extreme
        assert!((result.p_value - 2.0 / 252.0).abs() < 1e-12);
    }

    #[test]
    fn test_exact_p_value_is_symmetric() {
        let a = [1.1, 2.4, 3.9, 0.2];
        let b = [2.0, 5.5, 4.1, 6.3, 0.9];
        let ab = mann_whitney_u(&a, &b).unwrap();
        let ba = mann_whitney_u(&b, &a).unwrap();
        assert!((ab.p_value - ba.p_value).abs() < 1e-12);
        assert!((ab.u_statistic + ba.u_statistic - 20.0).abs() < 1e-12);
    }

    #[test]
    fn test_single_values_each() {
        let result = mann_whitney_u(&[1.0], &[2.0]).unwrap();
        assert_eq!(result.p_value, 1.0);
    }

    #[test]
    fn test_ties_use_asymptotic() {
        let result = mann_whitney_u(&[1.0, 2.0, 2.0, 3.0], &[2.0, 3.0, 4.0, 5.0]).unwrap();
        assert_eq!(result.method, PValueMethod::Asymptotic);
        assert!(result.p_value > 0.05 && result.p_value <= 1.0);
    }

    #[test]
    fn test_all_identical_values() {
        let result = mann_whitney_u(&[0.5; 10], &[0.5; 10]).unwrap();
        assert_eq!(result.p_value, 1.0);
    }

    #[test]
    fn test_asymptotic_large_separated_samples() {
        let a: Vec<f64> = (0..30).map(f64::from).collect();
        let b: Vec<f64> = (100..130).map(f64::from).collect();
        let result = mann_whitney_u(&a, &b).unwrap();
        assert_eq!(result.method, PValueMethod::Asymptotic);
        assert!(result.p_value < 1e-6, "p-value {} too large", result.p_value);
        assert!(result.p_value > 0.0);
    }

    #[test]
    fn test_asymptotic_similar_samples_not_significant() {
        let a: Vec<f64> = (0..20).map(|i| f64::from(i) * 2.0).collect();
        let b: Vec<f64> = (0..20).map(|i| f64::from(i) * 2.0 + 1.0).collect();
        let result = mann_whitney_u(&a, &b).unwrap();
        assert!(result.p_value > 0.5);
    }

    #[test]
    fn test_empty_sample_fails_fast() {
        assert!(matches!(
            mann_whitney_u(&[], &[1.0, 2.0]),
            Err(StatsError::EmptySample { .. })
        ));
    }

    #[test]
    fn test_normal_sf_reference_points() {
        assert!((normal_sf(0.0) - 0.5).abs() < 1e-7);
        assert!((normal_sf(1.959964) - 0.025).abs() < 1e-6);
        assert!((normal_sf(-1.959964) - 0.975).abs() < 1e-6);
    }
}

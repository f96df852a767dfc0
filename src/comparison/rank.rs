// Pooled ranking and the Vargha-Delaney A12 effect size
//
// Ranks are 1-based; tied values share the average of the ranks they span.

use crate::error::StatsError;

/// Rank `values` in their original order, averaging ranks across ties
///
/// # Example
/// ```
/// use qicompare::comparison::average_ranks;
///
/// assert_eq!(average_ranks(&[3.0, 1.0, 3.0, 2.0]), vec![3.5, 1.0, 3.5, 2.0]);
/// ```
pub fn average_ranks(values: &[f64]) -> Vec<f64> {
    let mut order: Vec<usize> = (0..values.len()).collect();
    order.sort_by(|&a, &b| values[a].total_cmp(&values[b]));

    let mut ranks = vec![0.0; values.len()];
    let mut i = 0;
    while i < order.len() {
        let mut j = i + 1;
        while j < order.len() && values[order[j]] == values[order[i]] {
            j += 1;
        }

        // Positions i..j hold ranks (i+1)..=j
        let avg_rank = (i + 1 + j) as f64 / 2.0;
        for &idx in &order[i..j] {
            ranks[idx] = avg_rank;
        }
        i = j;
    }

    ranks
}

/// Sizes of every group of tied values (groups of one included)
pub(crate) fn tie_group_sizes(values: &[f64]) -> Vec<usize> {
    let mut sorted = values.to_vec();
    sorted.sort_by(f64::total_cmp);

    let mut sizes = Vec::new();
    let mut i = 0;
    while i < sorted.len() {
        let mut j = i + 1;
        while j < sorted.len() && sorted[j] == sorted[i] {
            j += 1;
        }
        sizes.push(j - i);
        i = j;
    }
    sizes
}

/// Sum of the pooled ranks held by the first sample
pub(crate) fn first_rank_sum(first: &[f64], second: &[f64]) -> f64 {
    let pooled: Vec<f64> = first.iter().chain(second).copied().collect();
    average_ranks(&pooled)[..first.len()].iter().sum()
}

pub(crate) fn ensure_non_empty(first: &[f64], second: &[f64]) -> Result<(), StatsError> {
    if first.is_empty() {
        return Err(StatsError::EmptySample { side: "first" });
    }
    if second.is_empty() {
        return Err(StatsError::EmptySample { side: "second" });
    }
    Ok(())
}

/// Vargha-Delaney A12: probability that a draw from `first` exceeds a draw
/// from `second`, ties counting one half
///
/// `A12 = (2*R1 - m*(m+1)) / (2*m*n)` where `R1` is the pooled rank sum of
/// `first`. 0.5 means no stochastic dominance.
///
/// # Example
/// ```
/// use qicompare::comparison::vargha_delaney_a12;
///
/// let a12 = vargha_delaney_a12(&[4.0, 5.0, 6.0], &[1.0, 2.0, 3.0]).unwrap();
/// assert_eq!(a12, 1.0);
/// ```
pub fn vargha_delaney_a12(first: &[f64], second: &[f64]) -> Result<f64, StatsError> {
    ensure_non_empty(first, second)?;

    let m = first.len() as f64;
    let n = second.len() as f64;
    let r1 = first_rank_sum(first, second);

    Ok((2.0 * r1 - m * (m + 1.0)) / (2.0 * m * n))
}

// Pairwise non-parametric comparison of experimental conditions
//
// Each pair of measurements in a group is compared with:
// - the Mann-Whitney U (Wilcoxon rank-sum) test for a two-sided p-value
// - the Vargha-Delaney A12 effect size, classified as N/S/M/L
//
// Scientific Foundation:
// [1] Mann, H. B., & Whitney, D. R. (1947). On a test of whether one of two
//     random variables is stochastically larger than the other.
//     Annals of Mathematical Statistics, 18(1).
// [2] Vargha, A., & Delaney, H. D. (2000). A critique and improvement of the
//     CL common language effect size statistics of McGraw and Wong.
//     Journal of Educational and Behavioral Statistics, 25(2).
// [3] Arcuri, A., & Briand, L. (2011). A practical guide for using statistical
//     tests to assess randomized algorithms in software engineering. ICSE.
//
// Sample values are sign-normalized, so A12 > 0.5 always means the first
// side is better.

mod effect_size;
mod engine;
mod mann_whitney;
mod rank;

pub use effect_size::{EffectSizeThresholds, Magnitude};
pub use engine::{
    compare, compare_by, compare_samples, Attribute, AttributeComparison, AttributeValue,
    PairStatistics, PairwiseComparison,
};
pub use mann_whitney::{mann_whitney_u, MannWhitneyResult, PValueMethod, EXACT_MAX_SAMPLE_SIZE};
pub use rank::{average_ranks, vargha_delaney_a12};

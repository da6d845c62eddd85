use crate::dataset::Group;
use crate::testing::distribution::normal_cdf;
use crate::testing::utils::{RankedObservation, rank_observations, rank_sum};
use crate::testing::{SecondaryParam, TestResult};
use serde::Serialize;

/// Rank sums and both U statistics of a two-sample comparison.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct UStatistics {
    pub n1: usize,
    pub n2: usize,
    /// Sum of the ranks of group A in the pooled sample.
    pub rank_sum_a: f64,
    pub u1: f64,
    pub u2: f64,
}

impl UStatistics {
    /// `min(U1, U2)`, the reported statistic.
    pub fn u(&self) -> f64 {
        self.u1.min(self.u2)
    }

    fn from_ranked(ranked: &[RankedObservation], n1: usize, n2: usize) -> Self {
        let rank_sum_a = rank_sum(ranked, Group::A);
        let (n1f, n2f) = (n1 as f64, n2 as f64);
        let u1 = n1f * n2f + n1f * (n1f + 1.0) / 2.0 - rank_sum_a;
        let u2 = n1f * n2f - u1;
        UStatistics {
            n1,
            n2,
            rank_sum_a,
            u1,
            u2,
        }
    }
}

/// U statistics of `x` (group A) against `y` (group B).
///
/// `u1 + u2 == n1 * n2` for every input, including empty groups.
pub fn u_statistics(x: &[f64], y: &[f64]) -> UStatistics {
    let ranked = rank_observations(x, y);
    UStatistics::from_ranked(&ranked, x.len(), y.len())
}

/// Two-sided Mann-Whitney U test using the normal approximation.
///
/// `z = (U - n1*n2/2 + 0.5) / sqrt(n1*n2*(n1+n2+1)/12)` with `U = min(U1, U2)`.
/// The `+0.5` is applied as is, not toward zero. `p = 2 * (1 - Phi(|z|))`.
///
/// If either group is empty the result is `{U: 0, z: 0, p: 1}`.
pub fn mann_whitney(x: &[f64], y: &[f64]) -> TestResult {
    let nx = x.len();
    let ny = y.len();

    if nx == 0 || ny == 0 {
        tracing::debug!(nx, ny, "mann-whitney on an empty group");
        return TestResult::no_evidence(SecondaryParam::ZScore(0.0));
    }

    let stats = u_statistics(x, y);
    let u = stats.u();

    let n1 = nx as f64;
    let n2 = ny as f64;
    let mean_u = n1 * n2 / 2.0;
    let var_u = n1 * n2 * (n1 + n2 + 1.0) / 12.0;

    let z = (u - mean_u + 0.5) / var_u.sqrt();
    let p_value = 2.0 * (1.0 - normal_cdf(z.abs()));

    TestResult::new(u, SecondaryParam::ZScore(z), p_value)
}

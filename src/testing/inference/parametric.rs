//! Welch's unequal-variance t-test.
//!
//! Uses the Bessel-corrected sample SD of each group and Welch-Satterthwaite
//! degrees of freedom. The p-value is two-sided, `2 * (1 - F(|t|, df))`, where
//! `F` is selected by [`TCdfModel`].

use crate::descriptive::{mean, sample_sd};
use crate::testing::distribution::TCdfModel;
use crate::testing::{SecondaryParam, TestResult};

/// Welch's t-test with the widget t-CDF approximation.
pub fn welch_t_test(x: &[f64], y: &[f64]) -> TestResult {
    welch_t_test_with(x, y, TCdfModel::default())
}

/// Welch's t-test with an explicit t-CDF model.
///
/// Returns `{t: 0, df: n1 + n2 - 2, p: 1}` when either group is empty or when
/// the pooled standard error is zero.
pub fn welch_t_test_with(x: &[f64], y: &[f64], model: TCdfModel) -> TestResult {
    let nx = x.len();
    let ny = y.len();

    if nx == 0 || ny == 0 {
        tracing::debug!(nx, ny, "welch t-test on an empty group");
        return TestResult::no_evidence(SecondaryParam::DegreesOfFreedom(fallback_df(nx, ny)));
    }

    welch_t_test_from_moments(
        mean(x),
        sample_sd(x),
        nx,
        mean(y),
        sample_sd(y),
        ny,
        model,
    )
}

/// Welch's t-test from per-group mean, sample SD and size.
///
/// Useful when the renderer already holds the summaries. Group sizes must be
/// at least 1; zero sizes get the empty-group fallback.
pub fn welch_t_test_from_moments(
    mean1: f64,
    sd1: f64,
    n1: usize,
    mean2: f64,
    sd2: f64,
    n2: usize,
    model: TCdfModel,
) -> TestResult {
    if n1 == 0 || n2 == 0 {
        return TestResult::no_evidence(SecondaryParam::DegreesOfFreedom(fallback_df(n1, n2)));
    }

    let n1f = n1 as f64;
    let n2f = n2 as f64;

    let se1 = sd1 * sd1 / n1f;
    let se2 = sd2 * sd2 / n2f;
    let combined = se1 + se2;
    let std_err = combined.sqrt();

    if std_err == 0.0 {
        tracing::debug!(n1, n2, "welch t-test with zero standard error");
        return TestResult::no_evidence(SecondaryParam::DegreesOfFreedom(fallback_df(n1, n2)));
    }

    let t = (mean1 - mean2) / std_err;

    // Welch-Satterthwaite
    let df = combined * combined / (satterthwaite_term(se1, n1) + satterthwaite_term(se2, n2));

    if df.is_nan() {
        tracing::debug!(n1, n2, "welch df undefined for a single-value group");
    }

    let p_value = 2.0 * (1.0 - model.cdf(t.abs(), df));
    TestResult::new(t, SecondaryParam::DegreesOfFreedom(df), p_value)
}

/// `se^2 / (n - 1)`. A single-value group gives `0 / 0`, so df is NaN and the
/// p-value comes from the uninflated normal CDF.
#[inline]
fn satterthwaite_term(se: f64, n: usize) -> f64 {
    se * se / (n as f64 - 1.0)
}

#[inline]
fn fallback_df(n1: usize, n2: usize) -> f64 {
    n1 as f64 + n2 as f64 - 2.0
}

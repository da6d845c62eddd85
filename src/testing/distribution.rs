//! Closed-form CDFs used to turn test statistics into p-values.
//!
//! [`normal_cdf`] is the Abramowitz-Stegun 7.1.26 rational approximation
//! (absolute error about 1.5e-7).
//!
//! [`t_cdf`] is **not** a Student's t CDF. It inflates the normal CDF by a
//! df-dependent factor and caps the result at 0.9999. The bundled widgets
//! were calibrated against it, so it stays the default. Callers that need
//! real Student's t tail probabilities select [`TCdfModel::StudentsT`], which
//! evaluates the regularized incomplete beta function through `statrs`.

use serde::{Deserialize, Serialize};
use statrs::distribution::{ContinuousCDF, StudentsT};

const A1: f64 = 0.254829592;
const A2: f64 = -0.284496736;
const A3: f64 = 1.421413741;
const A4: f64 = -1.453152027;
const A5: f64 = 1.061405429;
const P: f64 = 0.3275911;

/// Above this many degrees of freedom `t_cdf` is the normal CDF.
pub const NORMAL_LIMIT_DF: f64 = 100.0;

/// Upper cap on the inflated one-sided probability.
const T_CDF_CAP: f64 = 0.9999;

/// Standard normal CDF, `P(Z <= z)`.
pub fn normal_cdf(z: f64) -> f64 {
    let sign = if z < 0.0 { -1.0 } else { 1.0 };
    let x = z.abs() / std::f64::consts::SQRT_2;

    let t = 1.0 / (1.0 + P * x);
    let y = 1.0 - (((((A5 * t + A4) * t) + A3) * t + A2) * t + A1) * t * (-x * x).exp();

    0.5 * (1.0 + sign * y)
}

/// Approximate `P(T <= t)` for `df` degrees of freedom.
///
/// - `df > 100`: `normal_cdf(t)`.
/// - `1 < df <= 100`: with `x = |t|`,
///   `p = normal_cdf(x) * (1 + (0.25 / df) * (x^2 / (1 + x^2 / df)))` capped at
///   0.9999, mirrored to `1 - p` for negative `t`.
/// - otherwise (`df <= 1` or NaN): `normal_cdf(|t|)` without inflation,
///   mirrored for negative `t`.
pub fn t_cdf(t: f64, df: f64) -> f64 {
    if df > NORMAL_LIMIT_DF {
        return normal_cdf(t);
    }

    let x = t.abs();
    let mut p = normal_cdf(x);
    if df > 1.0 {
        let inflation = 1.0 + (0.25 / df) * (x * x / (1.0 + x * x / df));
        p = (p * inflation).min(T_CDF_CAP);
    }

    if t < 0.0 { 1.0 - p } else { p }
}

/// How Welch's test converts `t` and `df` into a probability.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum TCdfModel {
    /// [`t_cdf`], numerically identical to the interactive widgets.
    #[default]
    WidgetApproximation,
    /// Exact Student's t CDF. Diverges from the widgets, most visibly for
    /// small df and large `|t|`.
    StudentsT,
}

impl TCdfModel {
    pub fn cdf(&self, t: f64, df: f64) -> f64 {
        match self {
            TCdfModel::WidgetApproximation => t_cdf(t, df),
            TCdfModel::StudentsT => students_t_cdf(t, df),
        }
    }
}

fn students_t_cdf(t: f64, df: f64) -> f64 {
    if df.is_nan() || (df.is_infinite() && df > 0.0) {
        return normal_cdf(t);
    }
    match StudentsT::new(0.0, 1.0, df) {
        Ok(dist) => dist.cdf(t),
        Err(_) => {
            tracing::debug!(df, "degrees of freedom outside Student's t domain");
            0.5
        }
    }
}

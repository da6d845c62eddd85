//! Normal and lognormal deviates built from a [`UniformSource`].
//!
//! Every output value consumes exactly two uniform draws (Box-Muller, cosine
//! branch only), so a seeded stream of `n` normals always uses `2n` draws.
//!
//! Parameters are validated up front. A negative SD or a non-positive
//! lognormal scale is an error, never a NaN flowing into histograms and tests.

use super::UniformSource;
use serde::{Deserialize, Serialize};
use std::f64::consts::PI;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum SamplingError {
    #[error("invalid parameter `{name}` = {value}: {reason}")]
    InvalidParameter {
        name: &'static str,
        value: f64,
        reason: &'static str,
    },
    /// The uniform source produced exactly zero for the Box-Muller radius draw.
    #[error("uniform source produced 0.0, ln(u1) is not finite")]
    DegenerateUniform,
}

/// Normal distribution parameters.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct NormalParams {
    pub mean: f64,
    pub sd: f64,
}

impl NormalParams {
    pub fn new(mean: f64, sd: f64) -> Result<Self, SamplingError> {
        let params = NormalParams { mean, sd };
        params.validate()?;
        Ok(params)
    }

    pub fn validate(&self) -> Result<(), SamplingError> {
        if !self.mean.is_finite() {
            return Err(SamplingError::InvalidParameter {
                name: "mean",
                value: self.mean,
                reason: "must be finite",
            });
        }
        check_spread("sd", self.sd)
    }

    pub fn sample<R: UniformSource>(&self, rng: &mut R) -> Result<f64, SamplingError> {
        normal(self.mean, self.sd, rng)
    }
}

/// Lognormal parameters. `shape` and `scale` describe the *underlying* normal:
/// `ln(X) ~ Normal(ln(scale), shape)`. They are not the mean and SD of `X`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LognormalParams {
    pub shape: f64,
    pub scale: f64,
}

impl LognormalParams {
    pub fn new(shape: f64, scale: f64) -> Result<Self, SamplingError> {
        let params = LognormalParams { shape, scale };
        params.validate()?;
        Ok(params)
    }

    pub fn validate(&self) -> Result<(), SamplingError> {
        check_spread("shape", self.shape)?;
        check_scale(self.scale)
    }

    pub fn sample<R: UniformSource>(&self, rng: &mut R) -> Result<f64, SamplingError> {
        lognormal(self.shape, self.scale, rng)
    }

    /// Mean of the lognormal itself, `scale * exp(shape^2 / 2)`.
    pub fn distribution_mean(&self) -> f64 {
        self.scale * (self.shape * self.shape / 2.0).exp()
    }

    /// Median of the lognormal itself, which is `scale`.
    pub fn distribution_median(&self) -> f64 {
        self.scale
    }
}

fn check_spread(name: &'static str, value: f64) -> Result<(), SamplingError> {
    if value.is_nan() || value < 0.0 || value.is_infinite() {
        return Err(SamplingError::InvalidParameter {
            name,
            value,
            reason: "must be finite and non-negative",
        });
    }
    Ok(())
}

fn check_scale(scale: f64) -> Result<(), SamplingError> {
    if scale.is_nan() || scale <= 0.0 || scale.is_infinite() {
        return Err(SamplingError::InvalidParameter {
            name: "scale",
            value: scale,
            reason: "must be finite and positive",
        });
    }
    Ok(())
}

/// Draw one normal deviate with the Box-Muller transform.
///
/// Draws `u1` then `u2` from `rng` and returns
/// `sqrt(-2 ln u1) * cos(2 pi u2) * sd + mean`.
///
/// # Errors
///
/// [`SamplingError::InvalidParameter`] if `sd` is negative or not finite, or
/// `mean` is not finite. [`SamplingError::DegenerateUniform`] if `u1` is zero.
pub fn normal<R: UniformSource>(mean: f64, sd: f64, rng: &mut R) -> Result<f64, SamplingError> {
    NormalParams { mean, sd }.validate()?;

    let u1 = rng.next_f64();
    let u2 = rng.next_f64();
    if u1 <= 0.0 {
        return Err(SamplingError::DegenerateUniform);
    }

    let z0 = (-2.0 * u1.ln()).sqrt() * (2.0 * PI * u2).cos();
    Ok(z0 * sd + mean)
}

/// Draw one lognormal deviate: `exp(normal(ln(scale), shape))`.
///
/// # Errors
///
/// [`SamplingError::InvalidParameter`] if `scale <= 0` or `shape < 0`.
pub fn lognormal<R: UniformSource>(
    shape: f64,
    scale: f64,
    rng: &mut R,
) -> Result<f64, SamplingError> {
    check_scale(scale)?;
    check_spread("shape", shape)?;
    let mean_log = scale.ln();
    Ok(normal(mean_log, shape, rng)?.exp())
}

/// Draw `n` normal deviates in order.
pub fn normal_samples<R: UniformSource>(
    params: &NormalParams,
    n: usize,
    rng: &mut R,
) -> Result<Vec<f64>, SamplingError> {
    params.validate()?;
    (0..n).map(|_| params.sample(rng)).collect()
}

/// Draw `n` lognormal deviates in order.
pub fn lognormal_samples<R: UniformSource>(
    params: &LognormalParams,
    n: usize,
    rng: &mut R,
) -> Result<Vec<f64>, SamplingError> {
    params.validate()?;
    (0..n).map(|_| params.sample(rng)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::random::SeededRandom;
    use approx::assert_abs_diff_eq;

    /// Replays a fixed list of uniforms.
    struct Scripted(Vec<f64>, usize);

    impl UniformSource for Scripted {
        fn next_f64(&mut self) -> f64 {
            let v = self.0[self.1];
            self.1 += 1;
            v
        }
    }

    #[test]
    fn test_box_muller_formula() {
        let mut rng = Scripted(vec![0.5, 0.25], 0);
        // cos(pi / 2) == 0
        let x = normal(3.0, 2.0, &mut rng).unwrap();
        assert_abs_diff_eq!(x, 3.0, epsilon = 1e-12);
        assert_eq!(rng.1, 2);

        let mut rng = Scripted(vec![(-0.5f64).exp(), 0.0], 0);
        // sqrt(-2 * -0.5) = 1, cos(0) = 1
        let x = normal(10.0, 4.0, &mut rng).unwrap();
        assert_abs_diff_eq!(x, 14.0, epsilon = 1e-12);
    }

    #[test]
    fn test_two_draws_per_value() {
        let mut a = SeededRandom::new(5);
        let mut b = SeededRandom::new(5);
        normal(0.0, 1.0, &mut a).unwrap();
        b.next();
        b.next();
        assert_eq!(a, b);
    }

    #[test]
    fn test_zero_sd_returns_mean() {
        let mut rng = SeededRandom::new(11);
        for _ in 0..20 {
            assert_eq!(normal(7.5, 0.0, &mut rng).unwrap(), 7.5);
        }
    }

    #[test]
    fn test_invalid_parameters() {
        let mut rng = SeededRandom::new(1);
        assert!(matches!(
            normal(0.0, -1.0, &mut rng),
            Err(SamplingError::InvalidParameter { name: "sd", .. })
        ));
        assert!(matches!(
            normal(f64::NAN, 1.0, &mut rng),
            Err(SamplingError::InvalidParameter { name: "mean", .. })
        ));
        assert!(matches!(
            lognormal(1.0, 0.0, &mut rng),
            Err(SamplingError::InvalidParameter { name: "scale", .. })
        ));
        assert!(matches!(
            lognormal(1.0, -3.0, &mut rng),
            Err(SamplingError::InvalidParameter { name: "scale", .. })
        ));
        assert!(matches!(
            lognormal(-0.1, 10.0, &mut rng),
            Err(SamplingError::InvalidParameter { name: "shape", .. })
        ));
        // Failed validation consumes no draws.
        assert_eq!(rng, SeededRandom::new(1));
    }

    #[test]
    fn test_degenerate_uniform() {
        let mut rng = Scripted(vec![0.0, 0.3], 0);
        assert_eq!(
            normal(0.0, 1.0, &mut rng),
            Err(SamplingError::DegenerateUniform)
        );
    }

    #[test]
    fn test_lognormal_is_exp_of_normal() {
        let mut a = SeededRandom::new(24);
        let mut b = SeededRandom::new(24);
        let x = lognormal(1.2, 12.0, &mut a).unwrap();
        let y = normal(12.0f64.ln(), 1.2, &mut b).unwrap().exp();
        assert_eq!(x, y);
        assert!(x > 0.0);
    }

    #[test]
    fn test_normal_moments() {
        let mut rng = SeededRandom::new(2024);
        let params = NormalParams::new(14.0, 23.1).unwrap();
        let xs = normal_samples(&params, 20_000, &mut rng).unwrap();
        let mean = xs.iter().sum::<f64>() / xs.len() as f64;
        let var = xs.iter().map(|x| (x - mean).powi(2)).sum::<f64>() / xs.len() as f64;
        assert_abs_diff_eq!(mean, 14.0, epsilon = 0.8);
        assert_abs_diff_eq!(var.sqrt(), 23.1, epsilon = 0.8);
    }

    #[test]
    fn test_lognormal_median_is_scale() {
        let mut rng = SeededRandom::new(3);
        let params = LognormalParams::new(1.0, 10.0).unwrap();
        let mut xs = lognormal_samples(&params, 20_001, &mut rng).unwrap();
        xs.sort_by(|a, b| a.total_cmp(b));
        assert_abs_diff_eq!(xs[10_000], params.distribution_median(), epsilon = 0.5);
        assert_abs_diff_eq!(params.distribution_mean(), 10.0 * 0.5f64.exp(), epsilon = 1e-12);
    }
}

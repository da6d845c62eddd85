//! Normal curves drawn over a histogram.
//!
//! The overlay uses the data's mean and *population* SD. Two scalings exist:
//! the sample histograms match the curve's peak to the tallest bar, the
//! Galton board matches the area under the curve to the number of balls.

use anyhow::{Result, anyhow};
use serde::{Deserialize, Serialize};
use std::f64::consts::PI;

/// Points used by every bundled overlay.
pub const DEFAULT_CURVE_POINTS: usize = 200;

pub fn normal_pdf(x: f64, mean: f64, sd: f64) -> f64 {
    let variance = sd * sd;
    let coefficient = 1.0 / (2.0 * PI * variance).sqrt();
    let exponent = -(x - mean).powi(2) / (2.0 * variance);
    coefficient * exponent.exp()
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum CurveScaling {
    /// Peak of the curve equals `max(max_count, 1)`.
    PeakMatched { max_count: u64 },
    /// Riemann sum of the curve over the plotted range equals `total`.
    AreaMatched { total: u64 },
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct CurvePoint {
    pub x: f64,
    pub y: f64,
}

/// Evaluate a scaled normal density at `points + 1` evenly spaced x values
/// covering `[x_min, x_max]`.
pub fn fitted_curve(
    x_min: f64,
    x_max: f64,
    points: usize,
    mean: f64,
    sd: f64,
    scaling: CurveScaling,
) -> Result<Vec<CurvePoint>> {
    if sd.is_nan() || sd <= 0.0 || sd.is_infinite() {
        return Err(anyhow!("curve requires a positive, finite sd, got {}", sd));
    }
    if points == 0 {
        return Err(anyhow!("curve requires at least one step"));
    }
    if x_min.is_nan() || x_max.is_nan() || x_min >= x_max {
        return Err(anyhow!("empty curve range [{}, {}]", x_min, x_max));
    }

    let step = (x_max - x_min) / points as f64;
    let xs: Vec<f64> = (0..=points).map(|i| x_min + i as f64 * step).collect();

    let factor = match scaling {
        CurveScaling::PeakMatched { max_count } => {
            max_count.max(1) as f64 / normal_pdf(mean, mean, sd)
        }
        CurveScaling::AreaMatched { total } => {
            let pdf_sum: f64 = xs.iter().map(|&x| normal_pdf(x, mean, sd)).sum();
            if pdf_sum == 0.0 {
                return Err(anyhow!(
                    "curve with mean {} and sd {} vanishes over [{}, {}]",
                    mean,
                    sd,
                    x_min,
                    x_max
                ));
            }
            total as f64 / (pdf_sum * step)
        }
    };

    Ok(xs
        .into_iter()
        .map(|x| CurvePoint {
            x,
            y: normal_pdf(x, mean, sd) * factor,
        })
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn test_pdf_peak() {
        assert_abs_diff_eq!(normal_pdf(0.0, 0.0, 1.0), 0.398_942_280_4, epsilon = 1e-9);
        assert_abs_diff_eq!(
            normal_pdf(1.0, 0.0, 1.0),
            normal_pdf(-1.0, 0.0, 1.0),
            epsilon = 1e-15
        );
    }

    #[test]
    fn test_peak_matched() {
        let curve = fitted_curve(
            -50.0,
            80.0,
            DEFAULT_CURVE_POINTS,
            15.0,
            20.0,
            CurveScaling::PeakMatched { max_count: 12 },
        )
        .unwrap();
        assert_eq!(curve.len(), DEFAULT_CURVE_POINTS + 1);
        assert_eq!(curve[0].x, -50.0);
        assert_abs_diff_eq!(curve[200].x, 80.0, epsilon = 1e-9);
        // x = 15 is point 100
        assert_abs_diff_eq!(curve[100].y, 12.0, epsilon = 1e-9);
        assert!(curve.iter().all(|p| p.y <= 12.0 + 1e-9));
    }

    #[test]
    fn test_peak_matched_empty_histogram() {
        let curve =
            fitted_curve(0.0, 10.0, 10, 5.0, 1.0, CurveScaling::PeakMatched { max_count: 0 })
                .unwrap();
        assert_abs_diff_eq!(curve[5].y, 1.0, epsilon = 1e-12);
    }

    #[test]
    fn test_area_matched() {
        let curve = fitted_curve(
            -1.0,
            11.0,
            DEFAULT_CURVE_POINTS,
            5.0,
            1.6,
            CurveScaling::AreaMatched { total: 500 },
        )
        .unwrap();
        let step = 12.0 / DEFAULT_CURVE_POINTS as f64;
        let area: f64 = curve.iter().map(|p| p.y * step).sum();
        assert_abs_diff_eq!(area, 500.0, epsilon = 1e-6);
    }

    #[test]
    fn test_rejects_bad_input() {
        let peak = CurveScaling::PeakMatched { max_count: 3 };
        assert!(fitted_curve(0.0, 1.0, 10, 0.5, 0.0, peak).is_err());
        assert!(fitted_curve(0.0, 1.0, 10, 0.5, f64::NAN, peak).is_err());
        assert!(fitted_curve(0.0, 1.0, 0, 0.5, 1.0, peak).is_err());
        assert!(fitted_curve(1.0, 1.0, 10, 0.5, 1.0, peak).is_err());
    }
}

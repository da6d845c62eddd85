//! Descriptive statistics over raw samples and over bin counts.
//!
//! Two standard deviations are provided and they are not interchangeable:
//!
//! - [`population_sd`] divides by `n`. Curve-fit overlays use it.
//! - [`sample_sd`] divides by `n - 1` (Bessel). Welch's t-test uses it.
//!
//! Empty input is not an error: the mean and both SDs of an empty slice are
//! zero, and the sample SD of a single value is zero.

use num_traits::{Float, NumCast};
use serde::Serialize;
use single_utilities::traits::FloatOps;

#[inline]
fn count_as<T: FloatOps>(n: usize) -> T {
    <T as NumCast>::from(n).unwrap_or_else(<T as Float>::nan)
}

/// Arithmetic mean; `0` for an empty slice.
pub fn mean<T: FloatOps>(data: &[T]) -> T {
    if data.is_empty() {
        return T::zero();
    }
    let mut sum = T::zero();
    for &x in data {
        sum += x;
    }
    sum / count_as(data.len())
}

fn sum_squared_deviations<T: FloatOps>(data: &[T], center: T) -> T {
    let mut acc = T::zero();
    for &x in data {
        let d = x - center;
        acc += d * d;
    }
    acc
}

/// `sqrt(mean((x - mean)^2))`; `0` for an empty slice.
pub fn population_sd<T: FloatOps>(data: &[T]) -> T {
    if data.is_empty() {
        return T::zero();
    }
    let m = mean(data);
    Float::sqrt(sum_squared_deviations(data, m) / count_as(data.len()))
}

/// `sqrt(sum((x - mean)^2) / (n - 1))`; `0` when `n <= 1`.
pub fn sample_sd<T: FloatOps>(data: &[T]) -> T {
    if data.len() <= 1 {
        return T::zero();
    }
    let m = mean(data);
    Float::sqrt(sum_squared_deviations(data, m) / count_as(data.len() - 1))
}

/// Mean, population SD and sample SD of one dataset, as shown next to a histogram.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Summary<T> {
    pub count: usize,
    pub mean: T,
    pub population_sd: T,
    pub sample_sd: T,
}

impl<T: FloatOps> Summary<T> {
    pub fn of(data: &[T]) -> Self {
        Summary {
            count: data.len(),
            mean: mean(data),
            population_sd: population_sd(data),
            sample_sd: sample_sd(data),
        }
    }
}

/// Mean of a frequency table whose bin index is the value (a Galton board's slots).
pub fn counts_mean(counts: &[u64]) -> f64 {
    let total: u64 = counts.iter().sum();
    if total == 0 {
        return 0.0;
    }
    let weighted: f64 = counts
        .iter()
        .enumerate()
        .map(|(i, &c)| i as f64 * c as f64)
        .sum();
    weighted / total as f64
}

/// Population SD of a frequency table whose bin index is the value.
pub fn counts_population_sd(counts: &[u64]) -> f64 {
    let total: u64 = counts.iter().sum();
    if total == 0 {
        return 0.0;
    }
    let m = counts_mean(counts);
    let ss: f64 = counts
        .iter()
        .enumerate()
        .map(|(i, &c)| {
            let d = i as f64 - m;
            d * d * c as f64
        })
        .sum();
    (ss / total as f64).sqrt()
}

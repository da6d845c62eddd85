//! Fixed-range frequency binning.
//!
//! The axis is fixed per exercise rather than fitted to the data so repeated
//! samples land on the same bars. Values outside the range are clamped into
//! the first or last bin, so every value is counted exactly once.
//!
//! [`bin`] is a pure function of its input. Animated reveal calls it again with
//! a longer prefix; nothing is carried between calls (see [`reveal`]).

pub mod curve;
pub mod reveal;

use anyhow::{Result, anyhow};
use num_traits::ToPrimitive;
use serde::{Deserialize, Serialize};
use single_utilities::traits::FloatOps;

/// Bin count used by every bundled histogram.
pub const DEFAULT_BIN_COUNT: usize = 30;

/// Axis bounds and bin count of one histogram.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct HistogramConfig {
    pub range_min: f64,
    pub range_max: f64,
    pub bin_count: usize,
}

impl HistogramConfig {
    pub fn new(range_min: f64, range_max: f64, bin_count: usize) -> Result<Self> {
        let config = HistogramConfig {
            range_min,
            range_max,
            bin_count,
        };
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        if self.bin_count == 0 {
            return Err(anyhow!("bin_count must be at least 1"));
        }
        if !self.range_min.is_finite() || !self.range_max.is_finite() {
            return Err(anyhow!(
                "histogram range must be finite, got [{}, {})",
                self.range_min,
                self.range_max
            ));
        }
        if self.range_min >= self.range_max {
            return Err(anyhow!(
                "range_min ({}) must be below range_max ({})",
                self.range_min,
                self.range_max
            ));
        }
        Ok(())
    }

    pub fn bin_width(&self) -> f64 {
        (self.range_max - self.range_min) / self.bin_count as f64
    }

    /// Bin for `value`: `floor((value - range_min) / bin_width)` clamped to
    /// `[0, bin_count - 1]`. NaN goes to bin 0.
    pub fn bin_index(&self, value: f64) -> usize {
        let raw = ((value - self.range_min) / self.bin_width()).floor();
        let last = self.bin_count.saturating_sub(1);
        if raw.is_nan() || raw < 0.0 {
            0
        } else if raw >= last as f64 {
            last
        } else {
            raw as usize
        }
    }

    /// Center of bin `index` on the value axis.
    pub fn bin_center(&self, index: usize) -> f64 {
        self.range_min + (index as f64 + 0.5) * self.bin_width()
    }

    /// Bin `data` under this configuration.
    pub fn bin<T: FloatOps>(&self, data: &[T]) -> Histogram {
        bin(self, data)
    }
}

/// Counts for one dataset under a [`HistogramConfig`].
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Histogram {
    pub range_min: f64,
    pub range_max: f64,
    pub bin_count: usize,
    pub bin_width: f64,
    pub counts: Vec<u64>,
}

impl Histogram {
    pub fn empty(config: &HistogramConfig) -> Self {
        Histogram {
            range_min: config.range_min,
            range_max: config.range_max,
            bin_count: config.bin_count,
            bin_width: config.bin_width(),
            counts: vec![0; config.bin_count],
        }
    }

    pub fn total(&self) -> u64 {
        self.counts.iter().sum()
    }

    /// Tallest bar, floored at 1 so an empty histogram still has a usable y-axis.
    pub fn max_count(&self) -> u64 {
        self.counts.iter().copied().max().unwrap_or(0).max(1)
    }

    /// `(lower, upper)` edges of bin `index`.
    pub fn bin_edges(&self, index: usize) -> (f64, f64) {
        let lower = self.range_min + index as f64 * self.bin_width;
        (lower, lower + self.bin_width)
    }
}

/// Count every value of `data` into `config.bin_count` bins, from scratch.
///
/// `sum(counts) == data.len()` always holds.
pub fn bin<T: FloatOps>(config: &HistogramConfig, data: &[T]) -> Histogram {
    let mut histogram = Histogram::empty(config);
    if config.bin_count == 0 {
        tracing::debug!("binning into zero bins, nothing counted");
        return histogram;
    }
    for value in data {
        let v = ToPrimitive::to_f64(value).unwrap_or(f64::NAN);
        histogram.counts[config.bin_index(v)] += 1;
    }
    histogram
}

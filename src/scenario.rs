//! Reproducible exercise presets.
//!
//! A scenario bundles distribution parameters, the histogram axis and (for the
//! two-group comparison) the seed, and turns them into datasets plus every
//! derived record the widgets display. Re-running a seeded scenario always
//! reproduces the same numbers.

use crate::dataset::Dataset;
use crate::descriptive::Summary;
use crate::histogram::{DEFAULT_BIN_COUNT, Histogram, HistogramConfig};
use crate::random::distributions::{LognormalParams, NormalParams, SamplingError};
use crate::random::{DEFAULT_SEED, SeededRandom, UniformSource};
use crate::testing::inference::TwoSampleTests;
use crate::testing::GroupComparison;
use anyhow::Result;
use serde::{Deserialize, Serialize};

/// Samples per group when the comparison page first loads.
pub const DEFAULT_SAMPLES_PER_GROUP: usize = 5;

/// Largest value the lognormal exercise keeps.
pub const LOGNORMAL_EXERCISE_CUTOFF: f64 = 80.0;

/// Distribution a single-group exercise draws from.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum SampleDistribution {
    Normal(NormalParams),
    Lognormal(LognormalParams),
}

impl SampleDistribution {
    pub fn validate(&self) -> Result<(), SamplingError> {
        match self {
            SampleDistribution::Normal(p) => p.validate(),
            SampleDistribution::Lognormal(p) => p.validate(),
        }
    }

    pub fn sample<R: UniformSource>(&self, rng: &mut R) -> Result<f64, SamplingError> {
        match self {
            SampleDistribution::Normal(p) => p.sample(rng),
            SampleDistribution::Lognormal(p) => p.sample(rng),
        }
    }
}

/// Single-group exercise: draw batches, append them, and show the histogram.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ExerciseConfig {
    pub distribution: SampleDistribution,
    pub histogram: HistogramConfig,
    /// Generated values above this are discarded before they reach the dataset.
    #[serde(default)]
    pub keep_at_most: Option<f64>,
}

impl ExerciseConfig {
    /// Normal(14, 23.1) on a [-50, 80) axis.
    pub fn normal_exercise() -> Self {
        ExerciseConfig {
            distribution: SampleDistribution::Normal(NormalParams {
                mean: 14.0,
                sd: 23.1,
            }),
            histogram: HistogramConfig {
                range_min: -50.0,
                range_max: 80.0,
                bin_count: DEFAULT_BIN_COUNT,
            },
            keep_at_most: None,
        }
    }

    /// Lognormal(shape 1.1, scale 9) on a [-50, 80) axis, values above 80 dropped.
    pub fn lognormal_exercise() -> Self {
        ExerciseConfig {
            distribution: SampleDistribution::Lognormal(LognormalParams {
                shape: 1.1,
                scale: 9.0,
            }),
            histogram: HistogramConfig {
                range_min: -50.0,
                range_max: 80.0,
                bin_count: DEFAULT_BIN_COUNT,
            },
            keep_at_most: Some(LOGNORMAL_EXERCISE_CUTOFF),
        }
    }

    pub fn validate(&self) -> Result<()> {
        self.distribution.validate()?;
        self.histogram.validate()
    }

    /// Draw `n` values and return `existing` followed by the ones that pass the
    /// cutoff. `existing` itself is left as is.
    pub fn add_samples<R: UniformSource>(
        &self,
        existing: &Dataset,
        n: usize,
        rng: &mut R,
    ) -> Result<Dataset> {
        self.validate()?;
        let mut fresh = Vec::with_capacity(n);
        for _ in 0..n {
            let value = self.distribution.sample(rng)?;
            if self.keep_at_most.is_none_or(|cutoff| value <= cutoff) {
                fresh.push(value);
            }
        }
        tracing::debug!(
            requested = n,
            kept = fresh.len(),
            total = existing.len() + fresh.len(),
            "exercise samples added"
        );
        Ok(existing.appended(fresh))
    }

    pub fn histogram_of(&self, data: &Dataset) -> Histogram {
        self.histogram.bin(data.as_slice())
    }
}

/// Two-group comparison where the t-test and Mann-Whitney can disagree.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ComparisonConfig {
    pub seed: u32,
    pub group_a: LognormalParams,
    pub group_b: LognormalParams,
    pub histogram: HistogramConfig,
    pub samples_per_group: usize,
}

impl Default for ComparisonConfig {
    fn default() -> Self {
        ComparisonConfig::parametric_comparison()
    }
}

impl ComparisonConfig {
    /// Seed 24; A ~ lognormal(1.0, 10), B ~ lognormal(1.2, 12); [0, 100) axis.
    pub fn parametric_comparison() -> Self {
        ComparisonConfig {
            seed: DEFAULT_SEED,
            group_a: LognormalParams {
                shape: 1.0,
                scale: 10.0,
            },
            group_b: LognormalParams {
                shape: 1.2,
                scale: 12.0,
            },
            histogram: HistogramConfig {
                range_min: 0.0,
                range_max: 100.0,
                bin_count: DEFAULT_BIN_COUNT,
            },
            samples_per_group: DEFAULT_SAMPLES_PER_GROUP,
        }
    }

    pub fn with_samples_per_group(mut self, n: usize) -> Self {
        self.samples_per_group = n;
        self
    }

    pub fn validate(&self) -> Result<()> {
        self.group_a.validate()?;
        self.group_b.validate()?;
        self.histogram.validate()
    }

    /// Reset a generator to `seed` and draw A, B, A, B, ... until both groups
    /// hold `samples_per_group` values.
    pub fn generate(&self) -> Result<(Dataset, Dataset)> {
        self.validate()?;
        let mut rng = SeededRandom::new(self.seed);
        let mut a = Vec::with_capacity(self.samples_per_group);
        let mut b = Vec::with_capacity(self.samples_per_group);
        for _ in 0..self.samples_per_group {
            a.push(self.group_a.sample(&mut rng)?);
            b.push(self.group_b.sample(&mut rng)?);
        }
        tracing::debug!(
            seed = self.seed,
            samples_per_group = self.samples_per_group,
            "comparison groups generated"
        );
        Ok((Dataset::new(a), Dataset::new(b)))
    }

    /// Generate both groups and compute everything shown for them.
    pub fn run(&self) -> Result<ComparisonOutcome> {
        let (group_a, group_b) = self.generate()?;
        Ok(ComparisonOutcome::from_groups(&self.histogram, group_a, group_b))
    }
}

/// Datasets and derived records of one two-group comparison.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ComparisonOutcome {
    pub group_a: Dataset,
    pub group_b: Dataset,
    pub histogram_a: Histogram,
    pub histogram_b: Histogram,
    pub summary_a: Summary<f64>,
    pub summary_b: Summary<f64>,
    pub tests: GroupComparison,
}

impl ComparisonOutcome {
    pub fn from_groups(config: &HistogramConfig, group_a: Dataset, group_b: Dataset) -> Self {
        ComparisonOutcome {
            histogram_a: config.bin(group_a.as_slice()),
            histogram_b: config.bin(group_b.as_slice()),
            summary_a: Summary::of(group_a.as_slice()),
            summary_b: Summary::of(group_b.as_slice()),
            tests: group_a.compare(&group_b),
            group_a,
            group_b,
        }
    }
}

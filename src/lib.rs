//! # sampling-stats
//!
//! The statistical core behind a set of interactive sampling-distribution widgets
//! (histograms of normal and lognormal samples, parametric vs. non-parametric
//! two-group comparisons).
//!
//! Everything here is synchronous and pure apart from the PRNG state. Rendering,
//! animation timing and user input belong to the caller, which passes raw
//! numbers in and gets small result records back.
//!
//! ## Core Features
//!
//! - **Deterministic sampling**: a seeded 32-bit LCG plus Box-Muller normal and
//!   lognormal deviates
//! - **Histograms**: fixed-range binning with clamping, progressive reveal, fitted
//!   normal overlays
//! - **Descriptive statistics**: mean, population SD, sample SD
//! - **Hypothesis tests**: Mann-Whitney U and Welch's t-test with closed-form CDF
//!   approximations
//!
//! ## Quick Start
//!
//! ```
//! use sampling_stats::scenario::ComparisonConfig;
//!
//! let outcome = ComparisonConfig::parametric_comparison()
//!     .with_samples_per_group(30)
//!     .run()
//!     .unwrap();
//! assert_eq!(outcome.histogram_a.total(), 30);
//! println!(
//!     "t-test p = {}, Mann-Whitney p = {}",
//!     outcome.tests.welch.formatted_p_value(),
//!     outcome.tests.mann_whitney.formatted_p_value(),
//! );
//! ```
//!
//! ## Module Organization
//!
//! - **[`random`]**: seeded uniform generator and normal/lognormal samplers
//! - **[`dataset`]**: immutable datasets and group tags
//! - **[`descriptive`]**: mean and standard deviations
//! - **[`histogram`]**: binning, reveal schedule, curve overlays
//! - **[`testing`]**: Mann-Whitney U, Welch's t-test, CDF approximations
//! - **[`scenario`]**: reproducible exercise presets

pub mod dataset;
pub mod descriptive;
pub mod histogram;
pub mod random;
pub mod scenario;
pub mod testing;

pub use dataset::{Dataset, Group, TaggedSample};
pub use histogram::{Histogram, HistogramConfig, bin};
pub use random::distributions::{SamplingError, lognormal, normal};
pub use random::{SeededRandom, UniformSource};
pub use testing::inference::nonparametric::mann_whitney;
pub use testing::inference::parametric::welch_t_test;
pub use testing::{TestResult, distribution::normal_cdf, distribution::t_cdf};

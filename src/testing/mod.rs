//! Two-sample hypothesis tests and their result records.
//!
//! - [`inference::nonparametric::mann_whitney`]: rank-based, normal approximation with
//!   continuity correction.
//! - [`inference::parametric::welch_t_test`]: unequal-variance t-test with
//!   Welch-Satterthwaite degrees of freedom.
//!
//! Both are two-sided and never fail: empty groups and zero variance return the
//! documented fallback records.

use serde::{Deserialize, Serialize};

pub mod distribution;
pub mod inference;

pub mod utils;

pub use distribution::TCdfModel;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TestMethod {
    MannWhitney,
    WelchT(TCdfModel),
}

/// The second number a test reports next to its statistic.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(tag = "kind", content = "value", rename_all = "snake_case")]
pub enum SecondaryParam {
    /// Normal-approximation z score (Mann-Whitney).
    ZScore(f64),
    /// Welch-Satterthwaite degrees of freedom.
    DegreesOfFreedom(f64),
}

impl SecondaryParam {
    pub fn value(&self) -> f64 {
        match *self {
            SecondaryParam::ZScore(v) | SecondaryParam::DegreesOfFreedom(v) => v,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct TestResult {
    /// U for Mann-Whitney, t for Welch.
    pub statistic: f64,
    pub secondary: SecondaryParam,
    /// Two-sided p-value
    pub p_value: f64,
}

impl TestResult {
    pub fn new(statistic: f64, secondary: SecondaryParam, p_value: f64) -> Self {
        TestResult {
            statistic,
            secondary,
            p_value,
        }
    }

    /// `{statistic: 0, secondary, p: 1}`, returned when a test is undefined for its input.
    pub fn no_evidence(secondary: SecondaryParam) -> Self {
        TestResult::new(0.0, secondary, 1.0)
    }

    pub fn z_score(&self) -> Option<f64> {
        match self.secondary {
            SecondaryParam::ZScore(z) => Some(z),
            SecondaryParam::DegreesOfFreedom(_) => None,
        }
    }

    pub fn degrees_of_freedom(&self) -> Option<f64> {
        match self.secondary {
            SecondaryParam::DegreesOfFreedom(df) => Some(df),
            SecondaryParam::ZScore(_) => None,
        }
    }

    pub fn is_significant(&self, alpha: f64) -> bool {
        self.p_value < alpha
    }

    pub fn stars(&self) -> &'static str {
        significance_stars(self.p_value)
    }

    pub fn formatted_p_value(&self) -> String {
        format_p_value(self.p_value)
    }
}

/// Both tests run on the same pair of groups, as shown side by side.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct GroupComparison {
    pub mann_whitney: TestResult,
    pub welch: TestResult,
}

impl GroupComparison {
    /// The t-test rejects at `alpha` while Mann-Whitney does not.
    pub fn only_parametric_significant(&self, alpha: f64) -> bool {
        self.welch.is_significant(alpha) && !self.mann_whitney.is_significant(alpha)
    }
}

/// `"< 0.001"` below 0.001, otherwise three decimals.
pub fn format_p_value(p_value: f64) -> String {
    if p_value < 0.001 {
        "< 0.001".to_string()
    } else {
        format!("{:.3}", p_value)
    }
}

pub fn significance_stars(p_value: f64) -> &'static str {
    if p_value < 0.001 {
        "***"
    } else if p_value < 0.01 {
        "**"
    } else if p_value < 0.05 {
        "*"
    } else {
        ""
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_p_value_formatting() {
        assert_eq!(format_p_value(0.0004), "< 0.001");
        assert_eq!(format_p_value(0.001), "0.001");
        assert_eq!(format_p_value(0.08086), "0.081");
        assert_eq!(format_p_value(1.0), "1.000");
    }

    #[test]
    fn test_stars() {
        assert_eq!(significance_stars(0.0001), "***");
        assert_eq!(significance_stars(0.005), "**");
        assert_eq!(significance_stars(0.049), "*");
        assert_eq!(significance_stars(0.05), "");
    }

    #[test]
    fn test_secondary_accessors() {
        let mw = TestResult::new(3.0, SecondaryParam::ZScore(-1.2), 0.2);
        assert_eq!(mw.z_score(), Some(-1.2));
        assert_eq!(mw.degrees_of_freedom(), None);
        assert_eq!(mw.secondary.value(), -1.2);

        let t = TestResult::no_evidence(SecondaryParam::DegreesOfFreedom(4.0));
        assert_eq!(t.statistic, 0.0);
        assert_eq!(t.p_value, 1.0);
        assert_eq!(t.degrees_of_freedom(), Some(4.0));
        assert!(!t.is_significant(0.05));
    }
}

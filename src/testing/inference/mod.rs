use crate::dataset::TaggedSample;
use crate::testing::utils::split_groups;
use crate::testing::{GroupComparison, TCdfModel, TestMethod, TestResult};

pub mod nonparametric;

pub mod parametric;

/// Two-sample tests over any pair of sample containers.
pub trait TwoSampleTests {
    fn mann_whitney_test(&self, other: &Self) -> TestResult;

    fn welch_t_test(&self, other: &Self, model: TCdfModel) -> TestResult;

    fn run_test(&self, other: &Self, method: TestMethod) -> TestResult {
        match method {
            TestMethod::MannWhitney => self.mann_whitney_test(other),
            TestMethod::WelchT(model) => self.welch_t_test(other, model),
        }
    }

    /// Both tests with the default t-CDF model.
    fn compare(&self, other: &Self) -> GroupComparison {
        GroupComparison {
            mann_whitney: self.mann_whitney_test(other),
            welch: self.welch_t_test(other, TCdfModel::default()),
        }
    }
}

impl TwoSampleTests for [f64] {
    fn mann_whitney_test(&self, other: &Self) -> TestResult {
        nonparametric::mann_whitney(self, other)
    }

    fn welch_t_test(&self, other: &Self, model: TCdfModel) -> TestResult {
        parametric::welch_t_test_with(self, other, model)
    }
}

impl TwoSampleTests for crate::dataset::Dataset {
    fn mann_whitney_test(&self, other: &Self) -> TestResult {
        nonparametric::mann_whitney(self.as_slice(), other.as_slice())
    }

    fn welch_t_test(&self, other: &Self, model: TCdfModel) -> TestResult {
        parametric::welch_t_test_with(self.as_slice(), other.as_slice(), model)
    }
}

/// Run `method` on group A versus group B of a tagged sample.
pub fn test_tagged(samples: &[TaggedSample], method: TestMethod) -> TestResult {
    let (a, b) = split_groups(samples);
    a.as_slice().run_test(b.as_slice(), method)
}

/// Run both tests on group A versus group B of a tagged sample.
pub fn compare_tagged(samples: &[TaggedSample]) -> GroupComparison {
    let (a, b) = split_groups(samples);
    a.as_slice().compare(b.as_slice())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dataset::{Dataset, Group};

    #[test]
    fn test_dispatch_matches_direct_calls() {
        let a = [1.2, 3.4, 2.2, 5.1];
        let b = [4.4, 6.0, 5.5, 7.3, 6.1];
        assert_eq!(
            a[..].run_test(&b[..], TestMethod::MannWhitney),
            nonparametric::mann_whitney(&a, &b)
        );
        assert_eq!(
            a[..].run_test(&b[..], TestMethod::WelchT(TCdfModel::StudentsT)),
            parametric::welch_t_test_with(&a, &b, TCdfModel::StudentsT)
        );
    }

    #[test]
    fn test_dataset_and_tagged_agree() {
        let a = Dataset::new(vec![1.0, 2.0, 3.0]);
        let b = Dataset::new(vec![4.0, 5.0, 6.0]);
        let tagged: Vec<TaggedSample> = a.tagged(Group::A).chain(b.tagged(Group::B)).collect();

        let direct = a.compare(&b);
        let via_tags = compare_tagged(&tagged);
        assert_eq!(direct, via_tags);
        assert_eq!(
            test_tagged(&tagged, TestMethod::MannWhitney),
            direct.mann_whitney
        );
    }
}

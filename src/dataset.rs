//! Immutable datasets.
//!
//! A [`Dataset`] never changes after it is built. Adding samples produces a new,
//! longer dataset that shares nothing mutable with the old one, so histograms
//! and statistics derived from the old value stay valid.

use serde::{Deserialize, Serialize};
use std::ops::Deref;

/// Group label of a sample in a two-sample comparison.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Group {
    A,
    B,
}

/// A value tagged with the group it came from.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TaggedSample {
    pub value: f64,
    pub group: Group,
}

/// Ordered samples. Order is kept for incremental reveal only; no statistic
/// depends on it.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Dataset {
    values: Vec<f64>,
}

impl Dataset {
    pub fn new(values: Vec<f64>) -> Self {
        Dataset { values }
    }

    pub fn empty() -> Self {
        Dataset::default()
    }

    /// A new dataset holding a copy of `self` followed by `more`.
    pub fn appended<I>(&self, more: I) -> Dataset
    where
        I: IntoIterator<Item = f64>,
    {
        let mut values = self.values.clone();
        values.extend(more);
        Dataset::new(values)
    }

    /// First `n` values, or all of them if `n` exceeds the length.
    pub fn prefix(&self, n: usize) -> &[f64] {
        &self.values[..n.min(self.values.len())]
    }

    pub fn as_slice(&self) -> &[f64] {
        &self.values
    }

    /// Tag every value with `group`.
    pub fn tagged(&self, group: Group) -> impl Iterator<Item = TaggedSample> + '_ {
        self.values
            .iter()
            .map(move |&value| TaggedSample { value, group })
    }
}

impl Deref for Dataset {
    type Target = [f64];

    fn deref(&self) -> &[f64] {
        &self.values
    }
}

impl From<Vec<f64>> for Dataset {
    fn from(values: Vec<f64>) -> Self {
        Dataset::new(values)
    }
}

impl FromIterator<f64> for Dataset {
    fn from_iter<I: IntoIterator<Item = f64>>(iter: I) -> Self {
        Dataset::new(iter.into_iter().collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_appended_leaves_original_untouched() {
        let first = Dataset::new(vec![1.0, 2.0]);
        let second = first.appended([3.0, 4.0]);
        assert_eq!(first.as_slice(), &[1.0, 2.0]);
        assert_eq!(second.as_slice(), &[1.0, 2.0, 3.0, 4.0]);
        assert_eq!(second.prefix(2), first.as_slice());
    }

    #[test]
    fn test_prefix_clamps() {
        let d: Dataset = (0..3).map(f64::from).collect();
        assert_eq!(d.prefix(10).len(), 3);
        assert_eq!(d.prefix(0).len(), 0);
        assert_eq!(d.len(), 3);
    }

    #[test]
    fn test_tagged() {
        let d = Dataset::new(vec![5.0, 6.0]);
        let tags: Vec<TaggedSample> = d.tagged(Group::B).collect();
        assert_eq!(tags.len(), 2);
        assert!(tags.iter().all(|t| t.group == Group::B));
        assert_eq!(tags[1].value, 6.0);
    }
}

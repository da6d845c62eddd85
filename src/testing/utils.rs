use crate::dataset::{Group, TaggedSample};
use serde::Serialize;

/// One value of the pooled sample with its (possibly fractional) rank.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct RankedObservation {
    pub value: f64,
    pub group: Group,
    pub rank: f64,
}

/// Pool `a` and `b`, sort ascending, and rank `1..=n`. Each run of equal values
/// gets the mean of the ranks it spans.
pub fn rank_observations(a: &[f64], b: &[f64]) -> Vec<RankedObservation> {
    let mut pooled: Vec<TaggedSample> = Vec::with_capacity(a.len() + b.len());
    pooled.extend(a.iter().map(|&value| TaggedSample { value, group: Group::A }));
    pooled.extend(b.iter().map(|&value| TaggedSample { value, group: Group::B }));
    rank_tagged(pooled)
}

/// Rank already-tagged samples. See [`rank_observations`].
pub fn rank_tagged(mut pooled: Vec<TaggedSample>) -> Vec<RankedObservation> {
    pooled.sort_by(|x, y| x.value.total_cmp(&y.value));

    let mut ranked = Vec::with_capacity(pooled.len());
    let mut first_rank = 1usize;
    for run in pooled.chunk_by(|x, y| x.value == y.value) {
        let last_rank = first_rank + run.len() - 1;
        let rank = (first_rank + last_rank) as f64 / 2.0;
        ranked.extend(run.iter().map(|s| RankedObservation {
            value: s.value,
            group: s.group,
            rank,
        }));
        first_rank = last_rank + 1;
    }
    ranked
}

/// Sum of ranks held by `group`.
pub fn rank_sum(ranked: &[RankedObservation], group: Group) -> f64 {
    ranked
        .iter()
        .filter(|r| r.group == group)
        .map(|r| r.rank)
        .sum()
}

/// Split tagged samples into group A values and group B values, keeping order.
pub fn split_groups(samples: &[TaggedSample]) -> (Vec<f64>, Vec<f64>) {
    let mut a = Vec::new();
    let mut b = Vec::new();
    for s in samples {
        match s.group {
            Group::A => a.push(s.value),
            Group::B => b.push(s.value),
        }
    }
    (a, b)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ranks_without_ties() {
        let ranked = rank_observations(&[3.0, 1.0], &[2.0]);
        let ranks: Vec<(f64, f64)> = ranked.iter().map(|r| (r.value, r.rank)).collect();
        assert_eq!(ranks, vec![(1.0, 1.0), (2.0, 2.0), (3.0, 3.0)]);
        assert_eq!(rank_sum(&ranked, Group::A), 4.0);
        assert_eq!(rank_sum(&ranked, Group::B), 2.0);
    }

    #[test]
    fn test_three_way_tie_gets_mean_rank() {
        // sorted: 1 2 3 7 7 7 9 -> the 7s occupy ranks 4, 5, 6
        let ranked = rank_observations(&[7.0, 1.0, 9.0], &[2.0, 7.0, 3.0, 7.0]);
        let sevens: Vec<f64> = ranked
            .iter()
            .filter(|r| r.value == 7.0)
            .map(|r| r.rank)
            .collect();
        assert_eq!(sevens, vec![5.0, 5.0, 5.0]);
        assert_eq!(ranked.last().map(|r| r.rank), Some(7.0));
    }

    #[test]
    fn test_rank_total_is_triangular() {
        let ranked = rank_observations(&[1.0, 1.0, 2.0, 4.0], &[2.0, 2.0, 4.0, 5.0, 5.0]);
        let total: f64 = ranked.iter().map(|r| r.rank).sum();
        assert_eq!(total, 45.0);
    }

    #[test]
    fn test_all_equal() {
        let ranked = rank_observations(&[4.0, 4.0], &[4.0, 4.0]);
        assert!(ranked.iter().all(|r| r.rank == 2.5));
    }

    #[test]
    fn test_split_groups() {
        let samples = [
            TaggedSample { value: 1.0, group: Group::B },
            TaggedSample { value: 2.0, group: Group::A },
            TaggedSample { value: 3.0, group: Group::B },
        ];
        let (a, b) = split_groups(&samples);
        assert_eq!(a, vec![2.0]);
        assert_eq!(b, vec![1.0, 3.0]);
    }
}

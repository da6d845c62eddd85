//! Caller-driven progressive reveal.
//!
//! A renderer that wants to "grow" a histogram asks a [`RevealSchedule`] for the
//! next prefix length, then calls [`RevealFrame::of`] on that prefix. Timing,
//! frame callbacks and cancellation stay with the caller; this module only
//! decides batch boundaries.

use super::{Histogram, HistogramConfig, bin};
use crate::descriptive::Summary;
use serde::Serialize;
use single_utilities::traits::FloatOps;

/// Number of steps a reveal is spread over.
pub const REVEAL_STEPS: usize = 100;

/// Iterator over strictly increasing prefix lengths ending at `total`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RevealSchedule {
    next_end: usize,
    total: usize,
    batch: usize,
}

impl RevealSchedule {
    /// Reveal values `start..total`; values before `start` are already visible.
    pub fn new(start: usize, total: usize) -> Self {
        let remaining = total.saturating_sub(start);
        let batch = remaining.div_ceil(REVEAL_STEPS).max(1);
        RevealSchedule {
            next_end: start,
            total,
            batch,
        }
    }

    pub fn batch_size(&self) -> usize {
        self.batch
    }
}

impl Iterator for RevealSchedule {
    type Item = usize;

    fn next(&mut self) -> Option<usize> {
        if self.next_end >= self.total {
            return None;
        }
        self.next_end = (self.next_end + self.batch).min(self.total);
        Some(self.next_end)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let left = self.total.saturating_sub(self.next_end).div_ceil(self.batch);
        (left, Some(left))
    }
}

impl ExactSizeIterator for RevealSchedule {}

/// What a renderer draws for one prefix of a dataset.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RevealFrame<T> {
    pub shown: usize,
    pub histogram: Histogram,
    pub summary: Summary<T>,
}

impl<T: FloatOps> RevealFrame<T> {
    pub fn of(prefix: &[T], config: &HistogramConfig) -> Self {
        RevealFrame {
            shown: prefix.len(),
            histogram: bin(config, prefix),
            summary: Summary::of(prefix),
        }
    }
}

/// All frames revealing `data[start..]` on top of `data[..start]`.
pub fn reveal_frames<T: FloatOps>(
    data: &[T],
    start: usize,
    config: &HistogramConfig,
) -> Vec<RevealFrame<T>> {
    RevealSchedule::new(start, data.len())
        .map(|end| RevealFrame::of(&data[..end], config))
        .collect()
}

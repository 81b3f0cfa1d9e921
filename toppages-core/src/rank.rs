//! Ranking utilities.

use std::cmp::Ordering;

/// Page indices ordered by descending probability.
///
/// Pages with equal probability keep their input order, so the page that
/// appears first in the log is ranked first.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Ranking {
    entries: Vec<(usize, f64)>,
}

impl Ranking {
    pub fn new(probabilities: &[f64]) -> Self {
        let mut entries: Vec<(usize, f64)> = probabilities.iter().copied().enumerate().collect();
        // sort_by is stable
        entries.sort_by(|a, b| b.1.partial_cmp(&a.1).unwrap_or(Ordering::Equal));
        Self { entries }
    }

    /// The first `k` entries, or all of them when there are fewer.
    pub fn top(&self, k: usize) -> &[(usize, f64)] {
        &self.entries[..k.min(self.entries.len())]
    }

    pub fn indices(&self) -> impl Iterator<Item = usize> + '_ {
        self.entries.iter().map(|&(idx, _)| idx)
    }

    pub fn entries(&self) -> &[(usize, f64)] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

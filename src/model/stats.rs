//! Aggregate counts over a partitioned prompt list.

use super::Prompt;

/// Snapshot of how far through the book we are.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Stats {
    pub total: usize,
    pub completed: usize,
    pub started: usize,
    pub remaining: usize,
}

impl Stats {
    /// Build a snapshot from the three status groups.
    ///
    /// `total` is passed separately; it equals the sum of the group lengths
    /// when the groups come from a partition.
    pub fn build(
        total: usize,
        completed: &[Prompt],
        started: &[Prompt],
        remaining: &[Prompt],
    ) -> Self {
        Self {
            total,
            completed: completed.len(),
            started: started.len(),
            remaining: remaining.len(),
        }
    }

    /// Fraction of prompts completed, in `[0, 1]`. Zero for an empty book.
    #[allow(clippy::cast_precision_loss)]
    pub fn progress(&self) -> f64 {
        if self.total == 0 {
            0.0
        } else {
            self.completed as f64 / self.total as f64
        }
    }

    /// Progress as a whole percentage, rounding halves to even.
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    pub fn percent(&self) -> u32 {
        (self.progress() * 100.0).round_ties_even() as u32
    }
}

//! Splitting prompts by status.

use crate::model::{Prompt, Stats};

/// Prompts grouped by status, each group in input order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Partition {
    pub completed: Vec<Prompt>,
    pub started: Vec<Prompt>,
    pub remaining: Vec<Prompt>,
}

impl Partition {
    /// Total number of prompts across all groups.
    pub fn total(&self) -> usize {
        self.completed.len() + self.started.len() + self.remaining.len()
    }

    /// Counts for this partition.
    pub fn stats(&self) -> Stats {
        Stats::build(
            self.total(),
            &self.completed,
            &self.started,
            &self.remaining,
        )
    }
}

/// Classify each prompt: completed first, then started, otherwise remaining.
pub fn partition(prompts: &[Prompt]) -> Partition {
    let mut groups = Partition::default();
    for prompt in prompts {
        let group = if prompt.completed {
            &mut groups.completed
        } else if prompt.started {
            &mut groups.started
        } else {
            &mut groups.remaining
        };
        group.push(prompt.clone());
    }
    groups
}

//! Deciding what to show and printing it.
//!
//! [`evaluate`] does the work: partition, count, and pick. [`write_outcome`]
//! turns the result into the text printed to stdout.

use std::io::{self, Write};

use rand::Rng;

use crate::bar::{self, Palette};
use crate::model::{Prompt, Stats};
use crate::pick::pick;
use crate::progress::partition;

/// Shown when every prompt is completed.
pub const ALL_COMPLETED: &str = "🎉 Everything is completed! No prompts left.";

/// Shown when nothing is left to start but the book isn't finished.
pub const NOTHING_REMAINING: &str =
    "No remaining prompts found (check your started/completed flags).";

/// Result of one run over the prompt list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// Every prompt is completed and there is at least one.
    AllCompleted,

    /// No prompt is untouched, yet not all are completed.
    /// Also covers an empty prompt list.
    NothingRemaining,

    /// Progress so far and a fresh prompt to try next.
    Next { stats: Stats, next: Prompt },
}

/// Partition `prompts`, count them, and pick the next one with `rng`.
pub fn evaluate<R: Rng + ?Sized>(prompts: &[Prompt], rng: &mut R) -> Outcome {
    let total = prompts.len();
    let groups = partition(prompts);
    let stats = groups.stats();

    tracing::debug!(
        total,
        completed = stats.completed,
        started = stats.started,
        remaining = stats.remaining,
        "partitioned prompts"
    );

    if groups.remaining.is_empty() {
        return if total > 0 && groups.completed.len() == total {
            Outcome::AllCompleted
        } else {
            Outcome::NothingRemaining
        };
    }

    match pick(&groups.remaining, rng) {
        Some(next) => Outcome::Next {
            stats,
            next: next.clone(),
        },
        None => Outcome::NothingRemaining,
    }
}

/// Bar settings for the report.
#[derive(Debug, Clone, Copy)]
pub struct BarOptions {
    pub width: usize,
    pub palette: Palette,
}

impl Default for BarOptions {
    fn default() -> Self {
        Self {
            width: bar::DEFAULT_WIDTH,
            palette: Palette::ansi(),
        }
    }
}

/// Write the human-readable text for `outcome`.
pub fn write_outcome(
    out: &mut impl Write,
    outcome: &Outcome,
    options: &BarOptions,
) -> io::Result<()> {
    match outcome {
        Outcome::AllCompleted => writeln!(out, "{ALL_COMPLETED}"),
        Outcome::NothingRemaining => writeln!(out, "{NOTHING_REMAINING}"),
        Outcome::Next { stats, next } => {
            write_stats(out, stats, options)?;
            writeln!(out, "Next new prompt:")?;
            writeln!(out, "  P{}: {}", next.page, next.prompt)
        }
    }
}

fn write_stats(out: &mut impl Write, stats: &Stats, options: &BarOptions) -> io::Result<()> {
    let bar = bar::render(stats, options.width, &options.palette);

    writeln!(out)?;
    writeln!(out, "Create This Book Progress")?;
    writeln!(out, "{}", "=".repeat(24))?;
    writeln!(out, "Total pages: {}", stats.total)?;
    writeln!(out, "✅ Completed : {}", stats.completed)?;
    writeln!(out, "🟨 Started   : {}", stats.started)?;
    writeln!(out, "⬜ Remaining : {}", stats.remaining)?;
    writeln!(out)?;
    writeln!(out, "Progress: [{bar}] {}%", stats.percent())?;
    writeln!(out)
}

#[cfg(test)]
mod tests {
    use super::*;

    use rand::SeedableRng;
    use rand::rngs::StdRng;

    use crate::store::parse_prompts;

    fn run(json: &str) -> (Outcome, String) {
        let prompts = parse_prompts(json, "data.json").unwrap();
        let outcome = evaluate(&prompts, &mut StdRng::seed_from_u64(7));
        let options = BarOptions {
            width: 10,
            palette: Palette::plain(),
        };

        let mut out = Vec::new();
        write_outcome(&mut out, &outcome, &options).unwrap();
        (outcome, String::from_utf8(out).unwrap())
    }

    #[test]
    fn single_completed_prompt_is_celebrated() {
        let (outcome, text) =
            run(r#"[{"page": 1, "prompt": "A", "started": false, "completed": true}]"#);

        assert_eq!(outcome, Outcome::AllCompleted);
        assert_eq!(text, format!("{ALL_COMPLETED}\n"));
    }

    #[test]
    fn empty_list_reports_nothing_remaining() {
        let (outcome, text) = run("[]");

        assert_eq!(outcome, Outcome::NothingRemaining);
        assert_eq!(text, format!("{NOTHING_REMAINING}\n"));
    }

    #[test]
    fn only_started_prompts_report_nothing_remaining() {
        let (outcome, _) = run(
            r#"[
                {"page": 1, "prompt": "A", "started": true, "completed": false},
                {"page": 2, "prompt": "B", "started": true, "completed": true}
            ]"#,
        );

        assert_eq!(outcome, Outcome::NothingRemaining);
    }

    #[test]
    fn next_prompt_comes_from_remaining() {
        let (outcome, _) = run(
            r#"[
                {"page": 1, "prompt": "A", "started": false, "completed": true},
                {"page": 2, "prompt": "B", "started": true, "completed": false},
                {"page": 3, "prompt": "C", "started": false, "completed": false},
                {"page": 4, "prompt": "D", "started": false, "completed": false}
            ]"#,
        );

        let Outcome::Next { stats, next } = outcome else {
            panic!("expected a next prompt");
        };
        assert_eq!(stats.total, 4);
        assert_eq!(stats.completed, 1);
        assert_eq!(stats.started, 1);
        assert_eq!(stats.remaining, 2);
        assert!(!next.started && !next.completed);
        assert!([3, 4].contains(&next.page));
    }

    #[test]
    fn full_report_text() {
        let (_, text) = run(
            r#"[
                {"page": 1, "prompt": "A", "started": true, "completed": true},
                {"page": 2, "prompt": "B", "started": true, "completed": false},
                {"page": 9, "prompt": "Tear out this page", "started": false, "completed": false},
                {"page": 4, "prompt": "D", "started": false, "completed": true},
                {"page": 5, "prompt": "E", "started": true, "completed": false}
            ]"#,
        );

        let expected = "\n\
            Create This Book Progress\n\
            ========================\n\
            Total pages: 5\n\
            ✅ Completed : 2\n\
            🟨 Started   : 2\n\
            ⬜ Remaining : 1\n\
            \n\
            Progress: [####++++..] 40%\n\
            \n\
            Next new prompt:\n  \
            P9: Tear out this page\n";
        assert_eq!(text, expected);
    }
}

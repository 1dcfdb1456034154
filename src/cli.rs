//! CLI interface for ctb.
//!
//! One command, no required arguments: read the prompt list, print progress,
//! and suggest an untouched prompt to try next. Flags override the config
//! file for a single run.

use std::io::{self, Write};
use std::path::PathBuf;

use clap::Parser;
use rand::SeedableRng;
use rand::rngs::StdRng;

use crate::bar::{self, Palette};
use crate::config::Config;
use crate::report::{self, BarOptions, Outcome};
use crate::store;

/// Track your way through Create This Book.
#[derive(Debug, Parser)]
#[command(name = "ctb", version, after_long_help = DATA_HELP)]
pub struct Cli {
    /// Prompt list to read. Defaults to `CTB_DATA`, then the config file,
    /// then `data.json` in the working directory.
    #[arg(long)]
    pub data: Option<PathBuf>,

    /// Progress bar width in cells.
    #[arg(long)]
    pub width: Option<usize>,

    /// Seed for picking the next prompt, for a repeatable suggestion.
    #[arg(long)]
    pub seed: Option<u64>,

    /// Draw the bar with plain ASCII instead of colored blocks.
    #[arg(long)]
    pub no_color: bool,
}

const DATA_HELP: &str = r#"Data file:
  A JSON list of prompts, one object per page:
    [
      { "page": 1, "prompt": "Draw a line", "started": false, "completed": true },
      { "page": 2, "prompt": "Tear this page", "started": true, "completed": false }
    ]

Config (~/.ctb/config.toml, all optional):
  data-file = "/path/to/data.json"
  bar-width = 30
  color = true"#;

impl Cli {
    /// Whether the bar should be drawn with colors, after config is applied.
    pub fn color(&self, config: &Config) -> bool {
        !self.no_color && config.color.unwrap_or(true)
    }

    fn bar_options(&self, config: &Config) -> BarOptions {
        let palette = if self.color(config) {
            Palette::ansi()
        } else {
            Palette::plain()
        };
        BarOptions {
            width: self
                .width
                .or(config.bar_width)
                .unwrap_or(bar::DEFAULT_WIDTH),
            palette,
        }
    }
}

/// Run the CLI, returning an error message on failure.
pub fn run(cli: &Cli, config: &Config) -> Result<(), String> {
    let path = config.data_file(cli.data.clone());
    let prompts = store::load_prompts(&path).map_err(|e| e.to_string())?;

    let outcome = match cli.seed {
        Some(seed) => {
            tracing::info!(seed, "using seeded picker");
            report::evaluate(&prompts, &mut StdRng::seed_from_u64(seed))
        }
        None => report::evaluate(&prompts, &mut rand::rng()),
    };

    if let Outcome::Next { next, .. } = &outcome {
        tracing::debug!(page = next.page, "picked next prompt");
    }

    let stdout = io::stdout();
    let mut out = stdout.lock();
    report::write_outcome(&mut out, &outcome, &cli.bar_options(config))
        .and_then(|()| out.flush())
        .map_err(|e| format!("failed to write report: {e}"))
}

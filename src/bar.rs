//! Stacked progress bar: completed, then started, then remaining.
//!
//! Width arithmetic lives in [`widths`]; glyphs and colors live in
//! [`Palette`] so the two can change independently.

use crate::model::Stats;

/// Bar width used when none is configured.
pub const DEFAULT_WIDTH: usize = 30;

const GREEN: &str = "\x1b[32m";
const YELLOW: &str = "\x1b[33m";
const GREY: &str = "\x1b[90m";
const RESET: &str = "\x1b[0m";

/// Lengths of the three runs. Always sums to the requested width.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BarWidths {
    pub completed: usize,
    pub started: usize,
    pub remaining: usize,
}

/// Split `width` cells proportionally between the three groups.
///
/// Each share is rounded half-to-even. If the completed and started shares
/// round up past `width`, the started run gives up the excess.
pub fn widths(stats: &Stats, width: usize) -> BarWidths {
    if stats.total == 0 {
        return BarWidths {
            completed: 0,
            started: 0,
            remaining: width,
        };
    }

    let completed = share(stats.completed, stats.total, width);
    let mut started = share(stats.started, stats.total, width);

    if completed + started > width {
        started = width.saturating_sub(completed);
    }

    BarWidths {
        completed,
        started,
        remaining: width - completed - started,
    }
}

#[allow(
    clippy::cast_precision_loss,
    clippy::cast_possible_truncation,
    clippy::cast_sign_loss
)]
fn share(count: usize, total: usize, width: usize) -> usize {
    ((count as f64 / total as f64) * width as f64).round_ties_even() as usize
}

/// How each run is drawn.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    pub completed: Segment,
    pub started: Segment,
    pub remaining: Segment,
    /// Emitted after the last run; empty when no colors are used.
    pub reset: &'static str,
}

/// A glyph and the escape sequence that precedes its run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Segment {
    pub style: &'static str,
    pub glyph: char,
}

impl Palette {
    /// Colored block glyphs for terminals.
    pub fn ansi() -> Self {
        Self {
            completed: Segment {
                style: GREEN,
                glyph: '█',
            },
            started: Segment {
                style: YELLOW,
                glyph: '█',
            },
            remaining: Segment {
                style: GREY,
                glyph: '░',
            },
            reset: RESET,
        }
    }

    /// Distinct ASCII glyphs with no escape codes.
    pub fn plain() -> Self {
        Self {
            completed: Segment {
                style: "",
                glyph: '#',
            },
            started: Segment {
                style: "",
                glyph: '+',
            },
            remaining: Segment {
                style: "",
                glyph: '.',
            },
            reset: "",
        }
    }
}

/// Draw the bar for `stats` in `width` cells.
pub fn render(stats: &Stats, width: usize, palette: &Palette) -> String {
    let widths = widths(stats, width);

    let mut bar = String::new();
    for (segment, len) in [
        (palette.completed, widths.completed),
        (palette.started, widths.started),
        (palette.remaining, widths.remaining),
    ] {
        // Runs of zero length are skipped entirely, escape code included.
        if len > 0 {
            bar.push_str(segment.style);
            bar.extend(std::iter::repeat_n(segment.glyph, len));
        }
    }
    bar.push_str(palette.reset);
    bar
}

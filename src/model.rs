//! Core data model for ctb.
//!
//! Two immutable values: a [`Prompt`] read from the data file and the
//! [`Stats`] snapshot derived from a partition of all prompts.

mod prompt;
mod stats;

pub use prompt::{Prompt, RecordError};
pub use stats::Stats;

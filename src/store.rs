//! Reading the prompt list from disk.
//!
//! The data file is a single JSON array:
//!
//! ```text
//! [
//!   { "page": 1, "prompt": "Draw a line", "started": false, "completed": true },
//!   { "page": 2, "prompt": "Tear this page", "started": true, "completed": false }
//! ]
//! ```
//!
//! It is read once per run and never written.

use std::{fs, io, path::Path, path::PathBuf};

use serde_json::Value;

use crate::model::{Prompt, RecordError};

/// Errors that can occur while loading prompts.
#[derive(Debug, thiserror::Error)]
pub enum LoadError {
    #[error("failed to read {}: {source}", path.display())]
    Read { path: PathBuf, source: io::Error },

    #[error("invalid JSON in {name}: {source}")]
    Json {
        name: String,
        source: serde_json::Error,
    },

    #[error("{name} should contain a JSON list of prompt objects")]
    NotAList { name: String },

    #[error("{name}: prompt #{index}: {source}")]
    Record {
        name: String,
        index: usize,
        source: RecordError,
    },
}

pub type Result<T> = core::result::Result<T, LoadError>;

/// Load every prompt from the JSON file at `path`.
pub fn load_prompts(path: &Path) -> Result<Vec<Prompt>> {
    let text = fs::read_to_string(path).map_err(|source| LoadError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    let prompts = parse_prompts(&text, &path.display().to_string())?;
    tracing::debug!(path = %path.display(), count = prompts.len(), "loaded prompts");
    Ok(prompts)
}

/// Parse a prompt list from JSON text.
///
/// `name` identifies the source in error messages. The first bad record
/// aborts the whole parse.
pub fn parse_prompts(text: &str, name: &str) -> Result<Vec<Prompt>> {
    let value: Value = serde_json::from_str(text).map_err(|source| LoadError::Json {
        name: name.to_string(),
        source,
    })?;

    let Value::Array(items) = value else {
        return Err(LoadError::NotAList {
            name: name.to_string(),
        });
    };

    items
        .iter()
        .enumerate()
        .map(|(index, item)| {
            Prompt::from_value(item).map_err(|source| LoadError::Record {
                name: name.to_string(),
                index,
                source,
            })
        })
        .collect()
}

//! Types for the classify module.

use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

/// Errors that can occur while building a classifier.
#[derive(Debug, Error)]
pub enum ClassifyError {
    /// A series pattern is not a valid regular expression.
    #[error("invalid series pattern {pattern:?}: {reason}")]
    InvalidPattern { pattern: String, reason: String },
}

/// What kind of content a finished download holds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MediaKind {
    Movie,
    Series,
}

impl MediaKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Movie => "movie",
            Self::Series => "series",
        }
    }
}

impl fmt::Display for MediaKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Where a finished download should go and under which name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SortDecision {
    /// Content path with the downloads root removed, before any cleanup.
    pub stripped: String,
    /// Normalized file name.
    pub file_name: String,
    /// Detected content kind.
    pub kind: MediaKind,
    /// Destination root concatenated with the file name.
    pub destination: String,
}

//! Types for the placer module.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::PathBuf;

/// A single move request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlacementJob {
    /// Run identifier, for log correlation.
    pub job_id: String,
    /// Content path handed over by the torrent client.
    pub source: PathBuf,
    /// Final destination path.
    pub destination: PathBuf,
}

impl PlacementJob {
    pub fn new(
        job_id: impl Into<String>,
        source: impl Into<PathBuf>,
        destination: impl Into<PathBuf>,
    ) -> Self {
        Self {
            job_id: job_id.into(),
            source: source.into(),
            destination: destination.into(),
        }
    }
}

/// How the file ended up at its destination.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PlacementMethod {
    /// Atomic rename on the same filesystem.
    Rename,
    /// Copy followed by removal of the source.
    Copy,
}

/// Information about a placed file.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlacedFile {
    /// Job ID.
    pub job_id: String,
    /// Final destination path.
    pub destination: PathBuf,
    /// Bytes placed (0 for a renamed directory).
    pub size_bytes: u64,
    pub method: PlacementMethod,
    /// SHA-256 of the copied data, if verified.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub checksum: Option<String>,
    /// Duration in milliseconds.
    pub duration_ms: u64,
}

/// Coarse category of a failed move.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MoveFailureKind {
    SourceNotFound,
    DestinationUnwritable,
    CrossDeviceMove,
    Unknown,
}

impl MoveFailureKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::SourceNotFound => "source_not_found",
            Self::DestinationUnwritable => "destination_unwritable",
            Self::CrossDeviceMove => "cross_device_move",
            Self::Unknown => "unknown",
        }
    }
}

impl fmt::Display for MoveFailureKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

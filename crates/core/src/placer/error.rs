//! Error types for the placer module.

use std::io::ErrorKind;
use std::path::PathBuf;
use thiserror::Error;

use super::types::MoveFailureKind;

/// Errors that can occur during file placement.
#[derive(Debug, Error)]
pub enum PlacerError {
    /// Source file not found.
    #[error("Source file not found: {path}")]
    SourceNotFound { path: PathBuf },

    /// Destination already exists and overwrite is disabled.
    #[error("Destination already exists: {path}")]
    DestinationExists { path: PathBuf },

    /// Destination is an existing directory.
    #[error("Destination is an existing directory: {path}")]
    DestinationIsDirectory { path: PathBuf },

    /// Destination directory does not exist and may not be created.
    #[error("Destination directory does not exist: {path}")]
    DestinationDirectoryMissing { path: PathBuf },

    /// Failed to create destination directory.
    #[error("Failed to create directory: {path}")]
    DirectoryCreationFailed {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Rename crossed filesystems and no copy fallback is possible.
    #[error("Cannot move {from} to {to} across devices")]
    CrossDevice { from: PathBuf, to: PathBuf },

    /// Failed to copy file.
    #[error("Failed to copy file from {source} to {destination}")]
    CopyFailed {
        source: PathBuf,
        destination: PathBuf,
        #[source]
        error: std::io::Error,
    },

    /// Failed to move/rename file.
    #[error("Failed to move file from {source} to {destination}")]
    MoveFailed {
        source: PathBuf,
        destination: PathBuf,
        #[source]
        error: std::io::Error,
    },

    /// Checksum verification failed.
    #[error("Checksum mismatch for {path}: expected {expected}, got {actual}")]
    ChecksumMismatch {
        path: PathBuf,
        expected: String,
        actual: String,
    },

    /// Failed to calculate checksum.
    #[error("Failed to calculate checksum for {path}")]
    ChecksumCalculationFailed {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Failed to delete the source after copying.
    #[error("Failed to remove source: {path}")]
    CleanupFailed {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Placer configuration is unusable.
    #[error("Invalid placer configuration: {0}")]
    InvalidConfig(String),

    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl PlacerError {
    /// Creates a copy failed error.
    pub fn copy_failed(source: PathBuf, destination: PathBuf, error: std::io::Error) -> Self {
        Self::CopyFailed {
            source,
            destination,
            error,
        }
    }

    /// Creates a move failed error.
    pub fn move_failed(source: PathBuf, destination: PathBuf, error: std::io::Error) -> Self {
        Self::MoveFailed {
            source,
            destination,
            error,
        }
    }

    /// Coarse failure category reported in the hook log.
    pub fn kind(&self) -> MoveFailureKind {
        match self {
            Self::SourceNotFound { .. } => MoveFailureKind::SourceNotFound,
            Self::DestinationExists { .. }
            | Self::DestinationIsDirectory { .. }
            | Self::DestinationDirectoryMissing { .. }
            | Self::DirectoryCreationFailed { .. } => MoveFailureKind::DestinationUnwritable,
            Self::CrossDevice { .. } => MoveFailureKind::CrossDeviceMove,
            Self::CopyFailed { error, .. } | Self::MoveFailed { error, .. } => {
                io_failure_kind(error)
            }
            Self::Io(error) => io_failure_kind(error),
            Self::ChecksumMismatch { .. }
            | Self::ChecksumCalculationFailed { .. }
            | Self::CleanupFailed { .. }
            | Self::InvalidConfig(_) => MoveFailureKind::Unknown,
        }
    }
}

fn io_failure_kind(error: &std::io::Error) -> MoveFailureKind {
    match error.kind() {
        ErrorKind::PermissionDenied
        | ErrorKind::ReadOnlyFilesystem
        | ErrorKind::IsADirectory
        | ErrorKind::NotADirectory
        | ErrorKind::DirectoryNotEmpty
        | ErrorKind::StorageFull
        | ErrorKind::AlreadyExists => MoveFailureKind::DestinationUnwritable,
        ErrorKind::CrossesDevices => MoveFailureKind::CrossDeviceMove,
        ErrorKind::NotFound => MoveFailureKind::SourceNotFound,
        _ if error.raw_os_error() == Some(18) => MoveFailureKind::CrossDeviceMove,
        _ => MoveFailureKind::Unknown,
    }
}

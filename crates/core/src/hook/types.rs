//! Types for the hook runner.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::classify::SortDecision;
use crate::config::ExitPolicy;
use crate::placer::{MoveFailureKind, PlacedFile};

/// Number of positional arguments the torrent client passes.
pub const REQUIRED_ARGS: usize = 2;

/// Errors that can occur while reading the invocation.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum HookError {
    #[error("not enough arguments: expected {expected}, got {received}")]
    NotEnoughArguments { expected: usize, received: usize },
}

/// Arguments handed over by the torrent client.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Invocation {
    /// Content path (`%F`).
    pub content_path: String,
    /// Torrent name (`%N`).
    pub torrent_name: String,
}

impl Invocation {
    /// Reads the invocation from process arguments.
    ///
    /// `args[0]` is the program name. Arguments after the torrent name are
    /// ignored.
    pub fn from_args(args: &[String]) -> Result<Self, HookError> {
        let positional = args.get(1..).unwrap_or_default();
        match positional {
            [content_path, torrent_name, ..] => Ok(Self {
                content_path: content_path.clone(),
                torrent_name: torrent_name.clone(),
            }),
            _ => Err(HookError::NotEnoughArguments {
                expected: REQUIRED_ARGS,
                received: positional.len(),
            }),
        }
    }
}

/// Result of one hook run.
#[derive(Debug, Clone)]
pub enum HookOutcome {
    /// The content was moved to its destination.
    Moved {
        decision: SortDecision,
        placed: PlacedFile,
    },
    /// The move was attempted and failed.
    MoveFailed {
        decision: SortDecision,
        kind: MoveFailureKind,
    },
    /// Too few arguments; nothing was attempted.
    InsufficientArguments,
}

impl HookOutcome {
    pub fn is_success(&self) -> bool {
        matches!(self, Self::Moved { .. })
    }

    /// The decision taken, if the run got that far.
    pub fn decision(&self) -> Option<&SortDecision> {
        match self {
            Self::Moved { decision, .. } | Self::MoveFailed { decision, .. } => Some(decision),
            Self::InsufficientArguments => None,
        }
    }

    /// Process exit code under the given policy.
    pub fn exit_code(&self, policy: ExitPolicy) -> i32 {
        match (policy, self) {
            (ExitPolicy::AlwaysZero, _) => 0,
            (ExitPolicy::ReportFailures, Self::Moved { .. }) => 0,
            (ExitPolicy::ReportFailures, Self::MoveFailed { .. }) => 1,
            (ExitPolicy::ReportFailures, Self::InsufficientArguments) => 2,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::classify::MediaKind;
    use crate::placer::PlacementMethod;
    use std::path::PathBuf;

    fn args(values: &[&str]) -> Vec<String> {
        values.iter().map(|s| s.to_string()).collect()
    }

    fn decision() -> SortDecision {
        SortDecision {
            stripped: "A.mkv".to_string(),
            file_name: "a.mkv".to_string(),
            kind: MediaKind::Movie,
            destination: "/plex-movies/a.mkv".to_string(),
        }
    }

    #[test]
    fn test_from_args() {
        let invocation =
            Invocation::from_args(&args(&["plexdrop", "/downloads/A.mkv", "A"])).unwrap();
        assert_eq!(invocation.content_path, "/downloads/A.mkv");
        assert_eq!(invocation.torrent_name, "A");
    }

    #[test]
    fn test_from_args_ignores_extra() {
        let invocation =
            Invocation::from_args(&args(&["plexdrop", "/downloads/A.mkv", "A", "extra"])).unwrap();
        assert_eq!(invocation.torrent_name, "A");
    }

    #[test]
    fn test_from_args_too_few() {
        assert_eq!(
            Invocation::from_args(&args(&["plexdrop", "/downloads/A.mkv"])),
            Err(HookError::NotEnoughArguments {
                expected: 2,
                received: 1
            })
        );
        assert_eq!(
            Invocation::from_args(&args(&["plexdrop"])),
            Err(HookError::NotEnoughArguments {
                expected: 2,
                received: 0
            })
        );
        assert!(Invocation::from_args(&[]).is_err());
    }

    #[test]
    fn test_exit_codes() {
        let moved = HookOutcome::Moved {
            decision: decision(),
            placed: PlacedFile {
                job_id: "run".to_string(),
                destination: PathBuf::from("/plex-movies/a.mkv"),
                size_bytes: 1,
                method: PlacementMethod::Rename,
                checksum: None,
                duration_ms: 0,
            },
        };
        let failed = HookOutcome::MoveFailed {
            decision: decision(),
            kind: MoveFailureKind::SourceNotFound,
        };
        let missing = HookOutcome::InsufficientArguments;

        for outcome in [&moved, &failed, &missing] {
            assert_eq!(outcome.exit_code(ExitPolicy::AlwaysZero), 0);
        }
        assert_eq!(moved.exit_code(ExitPolicy::ReportFailures), 0);
        assert_eq!(failed.exit_code(ExitPolicy::ReportFailures), 1);
        assert_eq!(missing.exit_code(ExitPolicy::ReportFailures), 2);

        assert!(moved.is_success());
        assert!(!failed.is_success());
        assert!(failed.decision().is_some());
        assert!(missing.decision().is_none());
    }
}

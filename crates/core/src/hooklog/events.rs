use serde::{Deserialize, Serialize};
use std::fmt;

use crate::classify::MediaKind;
use crate::placer::{MoveFailureKind, PlacementMethod};

/// Line written before and after every invocation.
pub const SEPARATOR: &str = "----------------------------------------";

/// Hook log event types
///
/// Every variant renders to one line of the hook log.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum HookEvent {
    Separator,
    NotEnoughArguments {
        args: Vec<String>,
    },
    Triggered,
    ContentPath {
        path: String,
    },
    TorrentName {
        name: String,
    },
    /// Content path after the downloads root was removed.
    Stripped {
        file_name: String,
    },
    Detected {
        kind: MediaKind,
        file_name: String,
        destination: String,
    },
    MoveFailed {
        destination: String,
        kind: MoveFailureKind,
        reason: String,
    },
    Moved {
        destination: String,
        method: PlacementMethod,
    },
    Completed,
}

impl HookEvent {
    /// Whether the event reports a problem.
    pub fn is_failure(&self) -> bool {
        matches!(
            self,
            Self::NotEnoughArguments { .. } | Self::MoveFailed { .. }
        )
    }
}

impl fmt::Display for HookEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Separator => f.write_str(SEPARATOR),
            Self::NotEnoughArguments { args } => {
                write!(f, "ERROR: Not enough arguments. Got: {}", quoted_list(args))
            }
            Self::Triggered => f.write_str("Script triggered."),
            Self::ContentPath { path } => write!(f, "Content Path: {}", path),
            Self::TorrentName { name } => write!(f, "Torrent Name: {}", name),
            Self::Stripped { file_name } => write!(
                f,
                "Stripped media file of prefix directory. File name: {}",
                file_name
            ),
            Self::Detected {
                kind,
                file_name,
                destination,
            } => write!(
                f,
                "Detected a {} with name: {}. Attempting to move file to {}",
                kind, file_name, destination
            ),
            Self::MoveFailed {
                destination,
                kind,
                reason,
            } => write!(
                f,
                "Failed to move file to {} ({}: {})",
                destination, kind, reason
            ),
            Self::Moved { destination, .. } => write!(f, "Moved file to {}", destination),
            Self::Completed => f.write_str("Script completed."),
        }
    }
}

/// Renders arguments as `['a', 'b']`.
fn quoted_list(args: &[String]) -> String {
    let quoted: Vec<String> = args
        .iter()
        .map(|arg| format!("'{}'", arg.replace('\\', "\\\\").replace('\'', "\\'")))
        .collect();
    format!("[{}]", quoted.join(", "))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_separator_is_forty_dashes() {
        assert_eq!(SEPARATOR.len(), 40);
        assert!(SEPARATOR.chars().all(|c| c == '-'));
        assert_eq!(HookEvent::Separator.to_string(), SEPARATOR);
    }

    #[test]
    fn test_messages() {
        assert_eq!(
            HookEvent::NotEnoughArguments {
                args: vec!["plexdrop".to_string(), "/downloads/a.mkv".to_string()]
            }
            .to_string(),
            "ERROR: Not enough arguments. Got: ['plexdrop', '/downloads/a.mkv']"
        );
        assert_eq!(HookEvent::Triggered.to_string(), "Script triggered.");
        assert_eq!(
            HookEvent::ContentPath {
                path: "/downloads/a.mkv".to_string()
            }
            .to_string(),
            "Content Path: /downloads/a.mkv"
        );
        assert_eq!(
            HookEvent::TorrentName {
                name: "A".to_string()
            }
            .to_string(),
            "Torrent Name: A"
        );
        assert_eq!(
            HookEvent::Detected {
                kind: MediaKind::Series,
                file_name: "show.season.1.mkv".to_string(),
                destination: "/plex-series/show.season.1.mkv".to_string(),
            }
            .to_string(),
            "Detected a series with name: show.season.1.mkv. Attempting to move file to /plex-series/show.season.1.mkv"
        );
        assert_eq!(
            HookEvent::MoveFailed {
                destination: "/plex-movies/a.mkv".to_string(),
                kind: MoveFailureKind::SourceNotFound,
                reason: "Source file not found: /downloads/a.mkv".to_string(),
            }
            .to_string(),
            "Failed to move file to /plex-movies/a.mkv (source_not_found: Source file not found: /downloads/a.mkv)"
        );
        assert_eq!(HookEvent::Completed.to_string(), "Script completed.");
    }

    #[test]
    fn test_argument_quoting() {
        assert_eq!(quoted_list(&[]), "[]");
        assert_eq!(
            quoted_list(&["plexdrop".to_string(), r"C:\it's".to_string()]),
            r"['plexdrop', 'C:\\it\'s']"
        );
    }

    #[test]
    fn test_failure_events() {
        assert!(HookEvent::NotEnoughArguments { args: vec![] }.is_failure());
        assert!(!HookEvent::Completed.is_failure());
        assert!(!HookEvent::Moved {
            destination: "/x".to_string(),
            method: PlacementMethod::Rename
        }
        .is_failure());
    }

    #[test]
    fn test_event_serialization() {
        let event = HookEvent::Moved {
            destination: "/plex-movies/a.mkv".to_string(),
            method: PlacementMethod::Copy,
        };
        let json = serde_json::to_value(&event).unwrap();
        assert_eq!(json["type"], "moved");
        assert_eq!(json["method"], "copy");

        let back: HookEvent = serde_json::from_value(json).unwrap();
        assert_eq!(back, event);
    }
}

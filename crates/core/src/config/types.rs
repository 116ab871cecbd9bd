use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::placer::PlacerConfig;

/// Root configuration
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct Config {
    #[serde(default)]
    pub paths: PathsConfig,
    #[serde(default)]
    pub log: LogConfig,
    #[serde(default)]
    pub classify: ClassifyConfig,
    #[serde(default)]
    pub placer: PlacerConfig,
    #[serde(default)]
    pub hook: HookConfig,
}

/// Download root and the two destination roots.
///
/// Destinations are built by plain concatenation of a root and the normalized
/// file name, so roots are expected to end with a path separator.
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq, Eq)]
pub struct PathsConfig {
    #[serde(default = "default_downloads_root")]
    pub downloads_root: String,
    #[serde(default = "default_movies_root")]
    pub movies_root: String,
    #[serde(default = "default_series_root")]
    pub series_root: String,
}

impl Default for PathsConfig {
    fn default() -> Self {
        Self {
            downloads_root: default_downloads_root(),
            movies_root: default_movies_root(),
            series_root: default_series_root(),
        }
    }
}

fn default_downloads_root() -> String {
    "/downloads/".to_string()
}

fn default_movies_root() -> String {
    "/plex-movies/".to_string()
}

fn default_series_root() -> String {
    "/plex-series/".to_string()
}

/// Hook log configuration
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct LogConfig {
    /// Log file location. Defaults to `plexdrop.log` beside the executable.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub path: Option<PathBuf>,
    #[serde(default)]
    pub format: LogFormat,
}

/// Line format of the hook log.
#[derive(Debug, Clone, Copy, Default, Deserialize, Serialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum LogFormat {
    /// `[YYYY-MM-DD HH:MM:SS] message`
    #[default]
    Text,
    /// One JSON object per line.
    Json,
}

/// How the downloads root is removed from the content path.
#[derive(Debug, Clone, Copy, Default, Deserialize, Serialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum StripMode {
    /// Trim any character of the root string from both ends.
    #[default]
    Charset,
    /// Remove the root once when it is a literal prefix.
    Prefix,
}

/// Classification configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ClassifyConfig {
    #[serde(default)]
    pub strip_mode: StripMode,
    /// Substrings that mark a file name as series content.
    #[serde(default = "default_series_indicators")]
    pub series_indicators: Vec<String>,
    /// Extra regular expressions that mark a file name as series content.
    #[serde(default)]
    pub series_patterns: Vec<String>,
}

impl Default for ClassifyConfig {
    fn default() -> Self {
        Self {
            strip_mode: StripMode::default(),
            series_indicators: default_series_indicators(),
            series_patterns: Vec::new(),
        }
    }
}

fn default_series_indicators() -> Vec<String> {
    vec!["season".to_string(), "episode".to_string()]
}

/// Process-level hook behavior
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct HookConfig {
    #[serde(default)]
    pub exit_policy: ExitPolicy,
}

/// How hook outcomes map to the process exit code.
#[derive(Debug, Clone, Copy, Default, Deserialize, Serialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum ExitPolicy {
    /// Exit 0 whatever happened; failures only show up in the hook log.
    #[default]
    AlwaysZero,
    /// Exit non-zero on insufficient arguments or a failed move.
    ReportFailures,
}

//! Testing utilities and mock implementations.
//!
//! Lets the hook runner be exercised without touching the filesystem.
//!
//! # Example
//!
//! ```rust,ignore
//! use plexdrop_core::testing::{MemoryHookLog, MockPlacer};
//!
//! let placer = MockPlacer::new();
//! let log = MemoryHookLog::new();
//! let runner = HookRunner::new(&Config::default(), placer.clone(), log.clone())?;
//!
//! runner.run(&args).await;
//! assert!(log.contains("Script completed."));
//! ```

mod memory_log;
mod mock_placer;

pub use memory_log::MemoryHookLog;
pub use mock_placer::{MockPlacer, RecordedPlacement};

/// Test fixtures and helper functions.
pub mod fixtures {
    /// Builds process arguments with a program name in front.
    pub fn hook_args(content_path: &str, torrent_name: &str) -> Vec<String> {
        vec![
            "plexdrop".to_string(),
            content_path.to_string(),
            torrent_name.to_string(),
        ]
    }

    /// Content path of a movie download with a year in parentheses.
    pub const MOVIE_PATH: &str = "/downloads/Movies/Some.Movie.(2021).mkv";

    /// Content path of a series episode with spelled-out indicators.
    pub const SERIES_PATH: &str = "/downloads/Show.Name.Season.01.Episode.02.mkv";
}

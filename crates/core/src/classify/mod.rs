//! Classification of finished downloads.
//!
//! Turns a content path into a [`SortDecision`]: the downloads root is
//! stripped, the remainder is cleaned into a file name, the name is checked
//! for series indicators, and the matching destination root is prefixed.
//!
//! # Example
//!
//! ```ignore
//! use plexdrop_core::classify::{plan, MediaKind, SeriesMatcher};
//! use plexdrop_core::config::{PathsConfig, StripMode};
//!
//! let decision = plan(
//!     "/downloads/Show.Name.Season.01.Episode.02.mkv",
//!     &PathsConfig::default(),
//!     StripMode::Charset,
//!     &SeriesMatcher::default(),
//! );
//! assert_eq!(decision.kind, MediaKind::Series);
//! assert_eq!(decision.destination, "/plex-series/show.name.season.01.episode.02.mkv");
//! ```

mod matcher;
mod normalize;
mod types;

pub use matcher::SeriesMatcher;
pub use normalize::{
    clean_file_name, normalize_file_name, strip_charset, strip_download_root, strip_prefix_root,
};
pub use types::{ClassifyError, MediaKind, SortDecision};

use crate::config::{PathsConfig, StripMode};

/// Computes the file name, kind and destination for a content path.
///
/// The destination is the root string followed directly by the file name.
pub fn plan(
    content_path: &str,
    paths: &PathsConfig,
    strip_mode: StripMode,
    matcher: &SeriesMatcher,
) -> SortDecision {
    let stripped = strip_download_root(content_path, &paths.downloads_root, strip_mode);
    let file_name = clean_file_name(&stripped);
    let kind = matcher.classify(&file_name);
    let root = match kind {
        MediaKind::Movie => &paths.movies_root,
        MediaKind::Series => &paths.series_root,
    };
    let destination = format!("{}{}", root, file_name);

    SortDecision {
        stripped,
        file_name,
        kind,
        destination,
    }
}

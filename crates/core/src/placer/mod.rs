//! Placer module for moving finished downloads to their library.
//!
//! This module provides the `Placer` trait and a filesystem implementation.
//!
//! # Features
//!
//! - Atomic rename when source and destination share a filesystem
//! - Copy + delete fallback when the rename crosses devices
//! - Optional SHA-256 verification of copies
//! - Optional creation of missing destination directories
//! - Typed failures, collapsed into a [`MoveFailureKind`] for reporting
//!
//! # Example
//!
//! ```ignore
//! use plexdrop_core::placer::{FsPlacer, Placer, PlacementJob};
//!
//! let placer = FsPlacer::with_defaults();
//! let job = PlacementJob::new(
//!     "run-1",
//!     "/downloads/Some.Movie.(2021).mkv",
//!     "/plex-movies/some.movie.2021.mkv",
//! );
//!
//! match placer.place(job).await {
//!     Ok(placed) => println!("moved to {}", placed.destination.display()),
//!     Err(e) => println!("{}: {}", e.kind(), e),
//! }
//! ```

mod config;
mod error;
mod fs_placer;
mod traits;
mod types;

pub use config::PlacerConfig;
pub use error::PlacerError;
pub use fs_placer::FsPlacer;
pub use traits::Placer;
pub use types::{MoveFailureKind, PlacedFile, PlacementJob, PlacementMethod};

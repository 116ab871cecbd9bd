//! Post-download hook orchestration.
//!
//! Reads the torrent client's arguments, decides where the content goes,
//! moves it through a [`Placer`](crate::placer::Placer) and records each step
//! in a [`HookLog`](crate::hooklog::HookLog).

mod runner;
mod types;

pub use runner::HookRunner;
pub use types::{HookError, HookOutcome, Invocation, REQUIRED_ARGS};

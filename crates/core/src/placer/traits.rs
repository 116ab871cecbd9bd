//! Trait definitions for the placer module.

use async_trait::async_trait;

use super::error::PlacerError;
use super::types::{PlacedFile, PlacementJob};

/// A placer that can move a finished download to its destination.
#[async_trait]
pub trait Placer: Send + Sync {
    /// Returns the name of this placer implementation.
    fn name(&self) -> &str;

    /// Moves the job's source to its destination.
    async fn place(&self, job: PlacementJob) -> Result<PlacedFile, PlacerError>;

    /// Validates that the placer is properly configured and ready.
    async fn validate(&self) -> Result<(), PlacerError>;
}

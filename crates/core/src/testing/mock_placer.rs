//! Mock placer for testing.

use async_trait::async_trait;
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::placer::{PlacedFile, PlacementJob, PlacementMethod, Placer, PlacerError};

/// A recorded placement job for test assertions.
#[derive(Debug, Clone)]
pub struct RecordedPlacement {
    /// The job that was submitted.
    pub job: PlacementJob,
    /// Whether the placement succeeded.
    pub success: bool,
}

/// Mock implementation of the Placer trait.
///
/// Never touches the filesystem:
/// - Track placement jobs for assertions
/// - Simulate failures with a specific error
///
/// Clones share their recorded state.
///
/// # Example
///
/// ```rust,ignore
/// use plexdrop_core::testing::MockPlacer;
///
/// let placer = MockPlacer::new();
/// let result = placer.place(job).await?;
///
/// let placements = placer.recorded_placements().await;
/// assert_eq!(placements.len(), 1);
/// assert!(placements[0].success);
/// ```
#[derive(Debug, Clone, Default)]
pub struct MockPlacer {
    /// Recorded placements.
    placements: Arc<RwLock<Vec<RecordedPlacement>>>,
    /// If set, the next operation will fail with this error.
    next_error: Arc<RwLock<Option<PlacerError>>>,
}

impl MockPlacer {
    /// Create a new mock placer.
    pub fn new() -> Self {
        Self::default()
    }

    /// Get all recorded placements.
    pub async fn recorded_placements(&self) -> Vec<RecordedPlacement> {
        self.placements.read().await.clone()
    }

    /// Get the number of placements attempted.
    pub async fn placement_count(&self) -> usize {
        self.placements.read().await.len()
    }

    /// Configure the next operation to fail with the given error.
    pub async fn set_next_error(&self, error: PlacerError) {
        *self.next_error.write().await = Some(error);
    }

    /// Take the next error if set.
    async fn take_error(&self) -> Option<PlacerError> {
        self.next_error.write().await.take()
    }
}

#[async_trait]
impl Placer for MockPlacer {
    fn name(&self) -> &str {
        "mock"
    }

    async fn place(&self, job: PlacementJob) -> Result<PlacedFile, PlacerError> {
        if let Some(err) = self.take_error().await {
            self.placements.write().await.push(RecordedPlacement {
                job,
                success: false,
            });
            return Err(err);
        }

        let placed = PlacedFile {
            job_id: job.job_id.clone(),
            destination: job.destination.clone(),
            size_bytes: 50 * 1024 * 1024,
            method: PlacementMethod::Rename,
            checksum: None,
            duration_ms: 0,
        };

        self.placements.write().await.push(RecordedPlacement {
            job,
            success: true,
        });

        Ok(placed)
    }

    async fn validate(&self) -> Result<(), PlacerError> {
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    fn job() -> PlacementJob {
        PlacementJob::new("job-1", "/downloads/a.mkv", "/plex-movies/a.mkv")
    }

    #[tokio::test]
    async fn test_records_successful_placement() {
        let placer = MockPlacer::new();
        let placed = placer.place(job()).await.unwrap();

        assert_eq!(placed.destination, PathBuf::from("/plex-movies/a.mkv"));
        let placements = placer.recorded_placements().await;
        assert_eq!(placements.len(), 1);
        assert!(placements[0].success);
    }

    #[tokio::test]
    async fn test_next_error_applies_once() {
        let placer = MockPlacer::new();
        placer
            .set_next_error(PlacerError::SourceNotFound {
                path: PathBuf::from("/downloads/a.mkv"),
            })
            .await;

        assert!(placer.place(job()).await.is_err());
        assert!(placer.place(job()).await.is_ok());

        let placements = placer.recorded_placements().await;
        assert!(!placements[0].success);
        assert!(placements[1].success);
    }

    #[tokio::test]
    async fn test_clones_share_state() {
        let placer = MockPlacer::new();
        let clone = placer.clone();
        clone.place(job()).await.unwrap();
        assert_eq!(placer.placement_count().await, 1);
    }
}

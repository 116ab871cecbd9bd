//! File system placer implementation.

use async_trait::async_trait;
use sha2::{Digest, Sha256};
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use std::time::Instant;
use tokio::fs::{self, File};
use tokio::io::{AsyncReadExt, AsyncWriteExt, BufReader, BufWriter};
use tracing::{debug, warn};

use super::config::PlacerConfig;
use super::error::PlacerError;
use super::traits::Placer;
use super::types::{PlacedFile, PlacementJob, PlacementMethod};

/// File system based placer implementation.
///
/// Renames when possible. When the rename crosses devices the file or folder
/// is copied and the source removed afterwards, like `mv` does. Copies are
/// written to a hidden `.<name>.part` sibling and only renamed onto the
/// destination once complete, so a failed copy never touches what is already
/// in the library.
#[derive(Debug, Clone)]
pub struct FsPlacer {
    config: PlacerConfig,
}

impl FsPlacer {
    /// Creates a new file system placer with the given configuration.
    pub fn new(config: PlacerConfig) -> Self {
        Self { config }
    }

    /// Creates a placer with default configuration.
    pub fn with_defaults() -> Self {
        Self::new(PlacerConfig::default())
    }

    pub fn config(&self) -> &PlacerConfig {
        &self.config
    }

    /// Attempts to move a file atomically (rename).
    ///
    /// Returns `Ok(false)` when source and destination are on different
    /// filesystems.
    async fn try_rename(source: &Path, destination: &Path) -> Result<bool, std::io::Error> {
        match fs::rename(source, destination).await {
            Ok(()) => Ok(true),
            Err(e) => {
                // EXDEV is 18 on Linux and macOS
                if e.kind() == ErrorKind::CrossesDevices || e.raw_os_error() == Some(18) {
                    Ok(false)
                } else {
                    Err(e)
                }
            }
        }
    }

    /// Copies a file, hashing the data when checksum verification is on.
    async fn copy_file(
        &self,
        source: &Path,
        destination: &Path,
    ) -> Result<(u64, Option<String>), PlacerError> {
        let source_file = File::open(source).await.map_err(|e| {
            if e.kind() == ErrorKind::NotFound {
                PlacerError::SourceNotFound {
                    path: source.to_path_buf(),
                }
            } else {
                PlacerError::copy_failed(source.to_path_buf(), destination.to_path_buf(), e)
            }
        })?;

        let dest_file = File::create(destination).await.map_err(|e| {
            PlacerError::copy_failed(source.to_path_buf(), destination.to_path_buf(), e)
        })?;

        let mut reader = BufReader::with_capacity(self.config.buffer_size, source_file);
        let mut writer = BufWriter::with_capacity(self.config.buffer_size, dest_file);

        let mut hasher = if self.config.verify_checksum {
            Some(Sha256::new())
        } else {
            None
        };

        let mut total_bytes = 0u64;
        let mut buffer = vec![0u8; self.config.buffer_size];

        loop {
            let bytes_read = reader.read(&mut buffer).await.map_err(|e| {
                PlacerError::copy_failed(source.to_path_buf(), destination.to_path_buf(), e)
            })?;

            if bytes_read == 0 {
                break;
            }

            if let Some(ref mut h) = hasher {
                h.update(&buffer[..bytes_read]);
            }

            writer.write_all(&buffer[..bytes_read]).await.map_err(|e| {
                PlacerError::copy_failed(source.to_path_buf(), destination.to_path_buf(), e)
            })?;

            total_bytes += bytes_read as u64;
        }

        writer.flush().await.map_err(|e| {
            PlacerError::copy_failed(source.to_path_buf(), destination.to_path_buf(), e)
        })?;

        if let Ok(meta) = fs::metadata(source).await {
            if let Err(e) = fs::set_permissions(destination, meta.permissions()).await {
                warn!(
                    "Failed to copy permissions to {}: {}",
                    destination.display(),
                    e
                );
            }
        }

        let checksum = hasher.map(|h| format!("{:x}", h.finalize()));

        Ok((total_bytes, checksum))
    }

    /// Calculates the SHA-256 checksum of a file.
    async fn file_checksum(&self, path: &Path) -> Result<String, PlacerError> {
        let file = File::open(path)
            .await
            .map_err(|e| PlacerError::ChecksumCalculationFailed {
                path: path.to_path_buf(),
                source: e,
            })?;

        let mut reader = BufReader::with_capacity(self.config.buffer_size, file);
        let mut buffer = vec![0u8; self.config.buffer_size];
        let mut hasher = Sha256::new();

        loop {
            let bytes_read =
                reader
                    .read(&mut buffer)
                    .await
                    .map_err(|e| PlacerError::ChecksumCalculationFailed {
                        path: path.to_path_buf(),
                        source: e,
                    })?;
            if bytes_read == 0 {
                break;
            }
            hasher.update(&buffer[..bytes_read]);
        }

        Ok(format!("{:x}", hasher.finalize()))
    }

    /// Copies a file and, when enabled, checks the written data against the
    /// checksum taken while reading.
    async fn copy_verified(
        &self,
        source: &Path,
        destination: &Path,
    ) -> Result<(u64, Option<String>), PlacerError> {
        let (bytes, checksum) = self.copy_file(source, destination).await?;

        if let Some(ref expected) = checksum {
            let actual = self.file_checksum(destination).await?;
            if &actual != expected {
                return Err(PlacerError::ChecksumMismatch {
                    path: destination.to_path_buf(),
                    expected: expected.clone(),
                    actual,
                });
            }
        }

        Ok((bytes, checksum))
    }

    /// Copies a directory tree, returning the number of bytes copied.
    async fn copy_tree(&self, source: &Path, destination: &Path) -> Result<u64, PlacerError> {
        let mut pending = vec![(source.to_path_buf(), destination.to_path_buf())];
        let mut total_bytes = 0u64;

        while let Some((from_dir, to_dir)) = pending.pop() {
            let copy_failed =
                |e: std::io::Error| PlacerError::copy_failed(from_dir.clone(), to_dir.clone(), e);

            fs::create_dir(&to_dir).await.map_err(copy_failed)?;
            let mut entries = fs::read_dir(&from_dir).await.map_err(copy_failed)?;

            while let Some(entry) = entries.next_entry().await.map_err(copy_failed)? {
                let from = entry.path();
                let to = to_dir.join(entry.file_name());
                let file_type = entry.file_type().await.map_err(copy_failed)?;

                if file_type.is_dir() {
                    pending.push((from, to));
                } else {
                    let (bytes, _) = self.copy_verified(&from, &to).await?;
                    total_bytes += bytes;
                }
            }
        }

        Ok(total_bytes)
    }

    /// Makes sure the destination directory exists.
    async fn ensure_parent_dir(&self, destination: &Path) -> Result<(), PlacerError> {
        let Some(parent) = destination.parent() else {
            return Ok(());
        };
        if parent.as_os_str().is_empty() || fs::try_exists(parent).await.unwrap_or(false) {
            return Ok(());
        }

        if !self.config.create_parents {
            return Err(PlacerError::DestinationDirectoryMissing {
                path: parent.to_path_buf(),
            });
        }

        fs::create_dir_all(parent)
            .await
            .map_err(|e| PlacerError::DirectoryCreationFailed {
                path: parent.to_path_buf(),
                source: e,
            })?;
        debug!("Created destination directory {}", parent.display());
        Ok(())
    }

    /// Copies the source into a staging path beside the destination, renames
    /// it into place and removes the source.
    ///
    /// Returns the number of bytes copied and, for single files, the checksum.
    async fn copy_and_remove(
        &self,
        job: &PlacementJob,
        is_dir: bool,
    ) -> Result<(u64, Option<String>), PlacerError> {
        let staging = staging_path(&job.destination);
        // Leftover from an interrupted run
        discard(&staging).await;

        let staged = async {
            let copied = if is_dir {
                (self.copy_tree(&job.source, &staging).await?, None)
            } else {
                self.copy_verified(&job.source, &staging).await?
            };
            fs::rename(&staging, &job.destination).await.map_err(|e| {
                PlacerError::move_failed(staging.clone(), job.destination.clone(), e)
            })?;
            Ok::<_, PlacerError>(copied)
        }
        .await;

        let (bytes, checksum) = match staged {
            Ok(copied) => copied,
            Err(e) => {
                discard(&staging).await;
                return Err(e);
            }
        };
        debug!(
            "Copied {} bytes from {} to {}",
            bytes,
            job.source.display(),
            job.destination.display()
        );

        let removed = if is_dir {
            fs::remove_dir_all(&job.source).await
        } else {
            fs::remove_file(&job.source).await
        };
        removed.map_err(|e| PlacerError::CleanupFailed {
            path: job.source.clone(),
            source: e,
        })?;

        Ok((bytes, checksum))
    }
}

/// Hidden sibling of the destination that copies are written to.
fn staging_path(destination: &Path) -> PathBuf {
    let name = destination
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_default();
    destination.with_file_name(format!(".{}.part", name))
}

/// Removes a staged file or tree, if any.
async fn discard(path: &Path) {
    let removed = match fs::symlink_metadata(path).await {
        Ok(meta) if meta.is_dir() => fs::remove_dir_all(path).await,
        Ok(_) => fs::remove_file(path).await,
        Err(_) => return,
    };
    if let Err(e) = removed {
        warn!("Failed to remove staged copy {}: {}", path.display(), e);
    }
}

#[async_trait]
impl Placer for FsPlacer {
    fn name(&self) -> &str {
        "fs"
    }

    async fn place(&self, job: PlacementJob) -> Result<PlacedFile, PlacerError> {
        let start = Instant::now();

        let source_meta = fs::metadata(&job.source).await.map_err(|e| {
            if e.kind() == ErrorKind::NotFound {
                PlacerError::SourceNotFound {
                    path: job.source.clone(),
                }
            } else {
                PlacerError::Io(e)
            }
        })?;

        // Never move into or over an existing folder
        if let Ok(dest_meta) = fs::metadata(&job.destination).await {
            if dest_meta.is_dir() {
                return Err(PlacerError::DestinationIsDirectory {
                    path: job.destination.clone(),
                });
            }
            if !self.config.overwrite {
                return Err(PlacerError::DestinationExists {
                    path: job.destination.clone(),
                });
            }
        }

        self.ensure_parent_dir(&job.destination).await?;

        let is_dir = source_meta.is_dir();
        let renamed_size = if is_dir { 0 } else { source_meta.len() };
        let (method, size_bytes, checksum) = if self.config.prefer_rename {
            match Self::try_rename(&job.source, &job.destination).await {
                Ok(true) => (PlacementMethod::Rename, renamed_size, None),
                Ok(false) if self.config.copy_fallback => {
                    debug!(
                        "Rename of {} crosses devices, copying instead",
                        job.source.display()
                    );
                    let (bytes, checksum) = self.copy_and_remove(&job, is_dir).await?;
                    (PlacementMethod::Copy, bytes, checksum)
                }
                Ok(false) => {
                    return Err(PlacerError::CrossDevice {
                        from: job.source.clone(),
                        to: job.destination.clone(),
                    });
                }
                Err(e) => {
                    return Err(PlacerError::move_failed(
                        job.source.clone(),
                        job.destination.clone(),
                        e,
                    ));
                }
            }
        } else {
            let (bytes, checksum) = self.copy_and_remove(&job, is_dir).await?;
            (PlacementMethod::Copy, bytes, checksum)
        };

        Ok(PlacedFile {
            job_id: job.job_id,
            destination: job.destination,
            size_bytes,
            method,
            checksum,
            duration_ms: start.elapsed().as_millis() as u64,
        })
    }

    async fn validate(&self) -> Result<(), PlacerError> {
        if self.config.buffer_size == 0 {
            return Err(PlacerError::InvalidConfig(
                "buffer_size cannot be 0".to_string(),
            ));
        }
        Ok(())
    }
}

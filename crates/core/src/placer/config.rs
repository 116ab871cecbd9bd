//! Configuration for the placer module.

use serde::{Deserialize, Serialize};

/// Configuration for the file system placer.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlacerConfig {
    /// Whether to try a rename before copying.
    #[serde(default = "default_true")]
    pub prefer_rename: bool,

    /// Whether to copy and delete the source when a rename crosses devices.
    #[serde(default = "default_true")]
    pub copy_fallback: bool,

    /// Whether an existing destination file is replaced.
    #[serde(default = "default_true")]
    pub overwrite: bool,

    /// Whether to compare SHA-256 checksums after a copy.
    #[serde(default)]
    pub verify_checksum: bool,

    /// Whether to create a missing destination directory.
    #[serde(default)]
    pub create_parents: bool,

    /// Buffer size for file copies in bytes.
    #[serde(default = "default_buffer_size")]
    pub buffer_size: usize,
}

fn default_buffer_size() -> usize {
    8 * 1024 * 1024 // 8 MB
}

fn default_true() -> bool {
    true
}

impl Default for PlacerConfig {
    fn default() -> Self {
        Self {
            prefer_rename: true,
            copy_fallback: true,
            overwrite: true,
            verify_checksum: false,
            create_parents: false,
            buffer_size: default_buffer_size(),
        }
    }
}

impl PlacerConfig {
    /// Enables or disables the rename attempt.
    pub fn with_rename(mut self, enabled: bool) -> Self {
        self.prefer_rename = enabled;
        self
    }

    /// Enables or disables the cross-device copy fallback.
    pub fn with_copy_fallback(mut self, enabled: bool) -> Self {
        self.copy_fallback = enabled;
        self
    }

    /// Allows or forbids replacing an existing destination.
    pub fn with_overwrite(mut self, enabled: bool) -> Self {
        self.overwrite = enabled;
        self
    }

    /// Enables checksum verification.
    pub fn with_checksum_verification(mut self, enabled: bool) -> Self {
        self.verify_checksum = enabled;
        self
    }

    /// Enables creation of missing destination directories.
    pub fn with_create_parents(mut self, enabled: bool) -> Self {
        self.create_parents = enabled;
        self
    }

    /// Sets the buffer size for copies.
    pub fn with_buffer_size(mut self, size: usize) -> Self {
        self.buffer_size = size;
        self
    }
}

//! Image upload limits.

use serde::{Deserialize, Serialize};

const fn default_max_size_mb() -> u64 {
    8
}

const fn default_max_property_images() -> usize {
    4
}

const fn default_max_files() -> usize {
    5
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct UploadConfig {
    /// Largest accepted file, in megabytes.
    #[serde(default = "default_max_size_mb")]
    pub max_size_mb: u64,

    /// Additional images allowed per property listing.
    #[serde(default = "default_max_property_images")]
    pub max_property_images: usize,

    /// Files allowed in a single generic batch.
    #[serde(default = "default_max_files")]
    pub max_files: usize,
}

impl Default for UploadConfig {
    fn default() -> Self {
        Self {
            max_size_mb: default_max_size_mb(),
            max_property_images: default_max_property_images(),
            max_files: default_max_files(),
        }
    }
}

impl UploadConfig {
    #[must_use]
    pub const fn max_size_bytes(&self) -> u64 {
        self.max_size_mb * 1024 * 1024
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_correct() {
        let config = UploadConfig::default();
        assert_eq!(config.max_size_mb, 8);
        assert_eq!(config.max_size_bytes(), 8 * 1024 * 1024);
        assert_eq!(config.max_property_images, 4);
        assert_eq!(config.max_files, 5);
    }
}

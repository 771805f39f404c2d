//! Client-side storage location.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

const APP_DIR: &str = "realty";

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct StorageConfig {
    /// Directory holding `storage.json`. Empty means the platform data dir.
    #[serde(default)]
    pub dir: String,
}

impl StorageConfig {
    /// Directory for the session mirror: the configured `dir`, or
    /// `<data_dir>/realty`. `None` when no data dir can be determined.
    #[must_use]
    pub fn resolve_dir(&self) -> Option<PathBuf> {
        if self.dir.is_empty() {
            dirs::data_dir().map(|p| p.join(APP_DIR))
        } else {
            Some(PathBuf::from(&self.dir))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn explicit_dir_wins() {
        let config = StorageConfig {
            dir: "/tmp/realty-test".into(),
        };
        assert_eq!(config.resolve_dir(), Some(PathBuf::from("/tmp/realty-test")));
    }

    #[test]
    fn default_dir_is_under_data_dir() {
        if let Some(dir) = StorageConfig::default().resolve_dir() {
            assert!(dir.ends_with("realty"));
        }
    }
}

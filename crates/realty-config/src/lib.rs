//! # realty-config
//!
//! Layered configuration loading for Realty using figment.
//!
//! Configuration sources (in priority order, highest wins):
//! 1. Environment variables (`REALTY_*` prefix, `__` as separator)
//! 2. Project-level `.realty/config.toml`
//! 3. User-level `~/.config/realty/config.toml`
//! 4. Built-in defaults
//!
//! # Environment Variable Mapping
//!
//! Figment maps `REALTY_API__BASE_URL` -> `api.base_url`,
//! `REALTY_UPLOAD__MAX_SIZE_MB` -> `upload.max_size_mb`, etc.
//!
//! # Usage
//!
//! ```no_run
//! use realty_config::RealtyConfig;
//!
//! let config = RealtyConfig::load_with_dotenv().expect("config");
//! println!("backend: {}", config.api.origin());
//! ```

mod api;
mod error;
mod general;
mod storage;
mod upload;

pub use api::ApiConfig;
pub use error::ConfigError;
pub use general::GeneralConfig;
pub use storage::StorageConfig;
pub use upload::UploadConfig;

use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct RealtyConfig {
    #[serde(default)]
    pub api: ApiConfig,
    #[serde(default)]
    pub storage: StorageConfig,
    #[serde(default)]
    pub upload: UploadConfig,
    #[serde(default)]
    pub general: GeneralConfig,
}

impl RealtyConfig {
    /// Load configuration from all sources (TOML files + environment variables).
    ///
    /// Does NOT call `dotenvy` -- use [`Self::load_with_dotenv`] for `.env` loading.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if a source cannot be parsed or a value fails
    /// [`Self::validate`].
    pub fn load() -> Result<Self, ConfigError> {
        let config: Self = Self::figment().extract()?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration with `.env` file support.
    ///
    /// # Errors
    ///
    /// Same as [`Self::load`].
    pub fn load_with_dotenv() -> Result<Self, ConfigError> {
        Self::load_dotenv();
        Self::load()
    }

    /// Build the figment provider chain.
    ///
    /// Public so tests can inspect the figment or layer extra providers.
    #[must_use]
    pub fn figment() -> Figment {
        let mut figment = Figment::from(Serialized::defaults(Self::default()));

        // Layer 1: User-global config
        if let Some(global_path) = Self::global_config_path()
            && global_path.exists()
        {
            figment = figment.merge(Toml::file(global_path));
        }

        // Layer 2: Project-local config
        let local_path = PathBuf::from(".realty/config.toml");
        if local_path.exists() {
            figment = figment.merge(Toml::file(local_path));
        }

        // Layer 3: Environment variables (highest priority)
        figment.merge(Env::prefixed("REALTY_").split("__"))
    }

    /// Reject values that would only fail later at request time.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::InvalidValue` for a non-HTTP base URL or a zero
    /// upload size limit.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !self.api.is_configured() {
            return Err(ConfigError::InvalidValue {
                field: "api.base_url".into(),
                reason: format!("expected an http(s) URL, got '{}'", self.api.base_url),
            });
        }
        if self.upload.max_size_mb == 0 {
            return Err(ConfigError::InvalidValue {
                field: "upload.max_size_mb".into(),
                reason: "must be greater than zero".into(),
            });
        }
        Ok(())
    }

    /// Path to the user-global config file.
    fn global_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|p| p.join("realty").join("config.toml"))
    }

    /// Load `.env` from the current directory, silently ignoring a missing file.
    fn load_dotenv() {
        let _ = dotenvy::dotenv();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_is_valid() {
        let config = RealtyConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.general.default_limit, 20);
        assert_eq!(config.upload.max_size_mb, 8);
    }

    #[test]
    fn figment_builds_without_files() {
        figment::Jail::expect_with(|_jail| {
            let config: RealtyConfig = RealtyConfig::figment().extract()?;
            assert_eq!(config.api.origin(), "http://localhost:5000");
            assert!(config.storage.dir.is_empty());
            Ok(())
        });
    }

    #[test]
    fn validate_rejects_zero_upload_limit() {
        let mut config = RealtyConfig::default();
        config.upload.max_size_mb = 0;
        let err = config.validate().unwrap_err();
        assert!(err.to_string().contains("upload.max_size_mb"));
    }
}

//! Integration tests for TOML configuration loading.
//!
//! Uses `figment::Jail` for sandboxed file and env var manipulation.

use figment::{
    Figment, Jail,
    providers::{Env, Format, Serialized, Toml},
};
use pretty_assertions::assert_eq;
use realty_config::RealtyConfig;

fn from_file(path: &str) -> Figment {
    Figment::from(Serialized::defaults(RealtyConfig::default())).merge(Toml::file(path))
}

#[test]
fn loads_api_config_from_toml() {
    Jail::expect_with(|jail| {
        jail.create_file(
            "config.toml",
            r#"
[api]
base_url = "https://realty.example.com/"
timeout_secs = 15
user_agent = "realty-test"
"#,
        )?;

        let config: RealtyConfig = from_file("config.toml").extract()?;

        assert_eq!(config.api.origin(), "https://realty.example.com");
        assert_eq!(config.api.timeout_secs, Some(15));
        assert_eq!(config.api.user_agent, "realty-test");
        Ok(())
    });
}

#[test]
fn partial_sections_keep_defaults() {
    Jail::expect_with(|jail| {
        jail.create_file(
            "config.toml",
            r#"
[upload]
max_property_images = 6
"#,
        )?;

        let config: RealtyConfig = from_file("config.toml").extract()?;

        assert_eq!(config.upload.max_property_images, 6);
        assert_eq!(config.upload.max_size_mb, 8);
        assert_eq!(config.api.origin(), "http://localhost:5000");
        assert!(config.api.timeout_secs.is_none());
        Ok(())
    });
}

#[test]
fn loads_full_config_from_toml() {
    Jail::expect_with(|jail| {
        jail.create_file(
            "config.toml",
            r#"
[api]
base_url = "http://127.0.0.1:8080"

[storage]
dir = "/var/lib/realty"

[upload]
max_size_mb = 4
max_files = 3

[general]
default_limit = 50
"#,
        )?;

        let config: RealtyConfig = from_file("config.toml").extract()?;

        assert_eq!(config.api.endpoint("/api/agents"), "http://127.0.0.1:8080/api/agents");
        assert_eq!(config.storage.dir, "/var/lib/realty");
        assert_eq!(config.upload.max_size_bytes(), 4 * 1024 * 1024);
        assert_eq!(config.upload.max_files, 3);
        assert_eq!(config.general.default_limit, 50);
        assert!(config.validate().is_ok());
        Ok(())
    });
}

#[test]
fn env_overrides_toml() {
    Jail::expect_with(|jail| {
        jail.create_file(
            "config.toml",
            r#"
[api]
base_url = "http://from-toml:5000"
"#,
        )?;
        jail.set_env("REALTY_API__BASE_URL", "http://from-env:5000");

        let config: RealtyConfig = from_file("config.toml")
            .merge(Env::prefixed("REALTY_").split("__"))
            .extract()?;

        assert_eq!(config.api.origin(), "http://from-env:5000");
        Ok(())
    });
}

#[test]
fn project_local_file_is_picked_up() {
    Jail::expect_with(|jail| {
        jail.create_dir(".realty")?;
        jail.create_file(
            ".realty/config.toml",
            r#"
[general]
default_limit = 7
"#,
        )?;

        let config: RealtyConfig = RealtyConfig::figment().extract()?;
        assert_eq!(config.general.default_limit, 7);
        Ok(())
    });
}

use figment::Jail;
use realty_config::{ConfigError, RealtyConfig};

#[test]
fn env_vars_fill_config_values() {
    Jail::expect_with(|jail| {
        jail.set_env("REALTY_API__TIMEOUT_SECS", "30");
        jail.set_env("REALTY_STORAGE__DIR", "/tmp/realty-env");

        let config = RealtyConfig::load().expect("config loads");
        assert_eq!(config.api.timeout_secs, Some(30));
        assert_eq!(config.storage.dir, "/tmp/realty-env");
        Ok(())
    });
}

#[test]
fn invalid_base_url_fails_load() {
    Jail::expect_with(|jail| {
        jail.set_env("REALTY_API__BASE_URL", "ftp://realty.example.com");

        let err = RealtyConfig::load().expect_err("non-http base url should fail");
        assert!(matches!(err, ConfigError::InvalidValue { ref field, .. } if field == "api.base_url"));
        Ok(())
    });
}

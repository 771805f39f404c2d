use anyhow::Context;
use realty_config::RealtyConfig;

/// Load `.env`, config files, and `REALTY_*` overrides.
pub fn load_config() -> anyhow::Result<RealtyConfig> {
    let config = RealtyConfig::load_with_dotenv().context("failed to load realty configuration")?;
    for warning in misplaced_env_keys(std::env::vars().map(|(key, _)| key)) {
        tracing::warn!("{warning}");
    }
    tracing::debug!(origin = config.api.origin(), "configuration loaded");
    Ok(config)
}

/// Sections are separated by a double underscore. `REALTY_API_BASE_URL` is
/// read as a top-level `api_base_url` key and silently ignored.
fn misplaced_env_keys<I>(keys: I) -> Vec<String>
where
    I: IntoIterator<Item = String>,
{
    const SECTIONS: [&str; 4] = ["API", "STORAGE", "UPLOAD", "GENERAL"];

    keys.into_iter()
        .filter_map(|key| {
            let rest = key.strip_prefix("REALTY_")?;
            let section = SECTIONS.iter().find(|section| {
                rest.strip_prefix(**section)
                    .is_some_and(|tail| tail.starts_with('_') && !tail.starts_with("__"))
            })?;
            Some(format!(
                "{key} is ignored; use a double underscore after the section (example: REALTY_{section}__{})",
                &rest[section.len() + 1..]
            ))
        })
        .collect()
}

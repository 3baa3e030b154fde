mod types;

pub use types::*;

use crate::{Error, Result};
use std::{env, path::Path};
use tracing::debug;

const DEFAULT_CONFIG_PATH: &str = "config.yaml";

pub async fn load() -> Result<Config> {
    load_with(DEFAULT_CONFIG_PATH, |key| env::var(key).ok()).await
}

/// Loads `CONFIG_PATH` (or `default_path` when unset) and applies env overrides.
///
/// A missing `default_path` yields the built-in defaults; a missing
/// `CONFIG_PATH` is an error.
pub async fn load_with<F>(default_path: &str, lookup: F) -> Result<Config>
where
    F: Fn(&str) -> Option<String>,
{
    let (config_path, explicit) = match lookup("CONFIG_PATH") {
        Some(path) => (path, true),
        None => (default_path.to_string(), false),
    };

    let mut config = if explicit || Path::new(&config_path).exists() {
        load_from(&config_path).await?
    } else {
        debug!("No {} found, using default configuration", config_path);
        Config::default()
    };

    apply_env_overrides(&mut config, lookup)?;
    Ok(config)
}

pub async fn load_from(config_path: &str) -> Result<Config> {
    debug!("Loading configuration from: {}", config_path);

    let config_str = tokio::fs::read_to_string(config_path).await?;
    let config: Config = serde_yaml::from_str(&config_str)?;

    Ok(config)
}

/// Applies `ENGINE_MODE` and `HF_API_TOKEN` on top of the file values.
pub fn apply_env_overrides<F>(config: &mut Config, lookup: F) -> Result<()>
where
    F: Fn(&str) -> Option<String>,
{
    if let Some(mode) = lookup("ENGINE_MODE") {
        config.engine.mode = mode.parse().map_err(Error::config)?;
    }

    if let Some(token) = lookup("HF_API_TOKEN").filter(|t| !t.is_empty()) {
        config.engine.api_key = Some(token);
    }

    Ok(())
}

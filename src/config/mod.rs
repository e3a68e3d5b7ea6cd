mod types;

pub use types::*;

use anyhow::{Context, Result};
use std::path::Path;

use crate::Error;

/// Load configuration from a TOML file
pub fn load_config(path: &Path) -> Result<Config> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read config file: {:?}", path))?;

    let config: Config = toml::from_str(&content)
        .with_context(|| format!("Failed to parse config file: {:?}", path))?;

    validate_config(&config)?;

    Ok(config)
}

/// Load config from default locations or return default config
pub fn load_config_or_default(custom_path: Option<&Path>) -> Result<Config> {
    if let Some(path) = custom_path {
        return load_config(path);
    }

    let default_paths = ["./reelmatch.toml", "~/.config/reelmatch/config.toml"];

    for path_str in default_paths {
        let path = shellexpand::tilde(path_str);
        let path = Path::new(path.as_ref());
        if path.exists() {
            tracing::debug!("Using config file: {:?}", path);
            return load_config(path);
        }
    }

    Ok(Config::default())
}

/// Validate configuration
fn validate_config(config: &Config) -> crate::Result<()> {
    if config.cache.capacity == 0 {
        return Err(Error::config("Cache capacity cannot be 0"));
    }

    for ext in config
        .scan
        .extra_video_extensions
        .iter()
        .chain(&config.scan.extra_subtitle_extensions)
    {
        if ext.trim_start_matches('.').is_empty() {
            return Err(Error::config("Empty file extension in scan config"));
        }
    }

    Ok(())
}

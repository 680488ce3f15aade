//! Game configuration loader.

use std::path::Path;

use slot_core::GameConfig;

use crate::loaders::{LoadResult, read_file};

/// Loader for game configuration from TOML files.
pub struct ConfigLoader;

impl ConfigLoader {
    /// Load and validate config data from a TOML file.
    pub fn load(path: &Path) -> LoadResult<GameConfig> {
        let content = read_file(path)?;
        let config = Self::from_toml_str(&content)
            .map_err(|e| anyhow::anyhow!("{} ({})", e, path.display()))?;

        tracing::info!(
            path = %path.display(),
            reels = config.reels.count,
            symbols = config.symbols.len(),
            "loaded slot config"
        );
        Ok(config)
    }

    /// Parse and validate config data from a TOML string.
    pub fn from_toml_str(content: &str) -> LoadResult<GameConfig> {
        let config: GameConfig = toml::from_str(content)
            .map_err(|e| anyhow::anyhow!("Failed to parse config TOML: {}", e))?;

        config
            .validate()
            .map_err(|e| anyhow::anyhow!("Invalid config: {}", e))?;

        Ok(config)
    }

    #[cfg(test)]
    pub(crate) fn to_toml_string(config: &GameConfig) -> LoadResult<String> {
        toml::to_string_pretty(config)
            .map_err(|e| anyhow::anyhow!("Failed to serialize config TOML: {}", e))
    }
}

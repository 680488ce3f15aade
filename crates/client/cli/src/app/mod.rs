//! Glue code tying configuration, the engine, and the terminal UI together.
use std::path::Path;

use anyhow::{Context, Result};
use slot_content::{ConfigLoader, ContentFactory};
use slot_core::{GameConfig, GameEngine, PcgRng, SpinEnv, SystemClock};

use crate::{
    config::{ClientConfig, GameSource},
    presentation::{EventLoop, terminal},
};

pub struct SlotApp {
    config: ClientConfig,
    game: GameConfig,
    seed: u64,
}

impl SlotApp {
    /// Resolves the game configuration and session seed.
    pub fn build(config: ClientConfig) -> Result<Self> {
        let game = match (&config.game, &config.data_dir) {
            (GameSource::File(path), _) => ConfigLoader::load(path)
                .with_context(|| format!("failed to load game config from {}", path.display()))?,
            (GameSource::Default, Some(data_dir)) => load_from_data_dir(data_dir)?,
            (GameSource::Default, None) => {
                tracing::info!("no data directory set; using built-in config");
                GameConfig::default()
            }
        };
        let seed = config.seed.unwrap_or_else(rand::random::<u64>);

        Ok(Self { config, game, seed })
    }

    pub async fn run(self) -> Result<()> {
        tracing::info!(seed = self.seed, reels = self.game.reels.count, "slot client starting");

        let env = SpinEnv::new(PcgRng::seeded(self.seed), SystemClock::new());
        let engine = GameEngine::new(self.game, env).context("invalid game configuration")?;
        let event_loop = EventLoop::new(engine, &self.config.frame, self.seed);

        let mut terminal = terminal::init()?;
        let _guard = terminal::TerminalGuard;

        event_loop.run(&mut terminal).await
    }
}

fn load_from_data_dir(data_dir: &Path) -> Result<GameConfig> {
    let factory = ContentFactory::new(data_dir);
    tracing::info!(data_dir = %factory.data_dir().display(), "loading content");
    factory.load_config().with_context(|| {
        format!("failed to load game config from data dir {}", data_dir.display())
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    const THREE_REELS: &str = r#"
[reels]
count = 3
visible_symbols = 2
spin_speed = 600.0
min_spin_duration_ms = 800
max_spin_duration_ms = 1200

[[symbols]]
id = "cherry"
color = 0xCC0000
label = "C"

[[symbols]]
id = "bell"
color = 0xFFD700
label = "B"

[layout]
symbol_size = 60.0
symbol_spacing = 6.0
reel_spacing = 8.0
"#;

    fn data_dir_with(config_toml: &str) -> tempfile::TempDir {
        let dir = tempfile::tempdir().expect("temp dir");
        std::fs::write(dir.path().join(ContentFactory::CONFIG_FILE), config_toml)
            .expect("write config");
        dir
    }

    #[test]
    fn default_source_without_data_dir_uses_builtin_config() {
        let app = SlotApp::build(ClientConfig {
            seed: Some(7),
            ..ClientConfig::default()
        })
        .expect("default config builds");
        assert_eq!(app.game, GameConfig::default());
        assert_eq!(app.seed, 7);
    }

    #[test]
    fn default_source_loads_config_from_data_dir() {
        let dir = data_dir_with(THREE_REELS);
        let app = SlotApp::build(ClientConfig {
            data_dir: Some(dir.path().to_path_buf()),
            seed: Some(1),
            ..ClientConfig::default()
        })
        .expect("data dir config builds");

        assert_eq!(app.game.reels.count, 3);
        assert_eq!(app.game.symbols.len(), 2);
        assert_eq!(app.game.symbols[1].id, "bell");
    }

    #[test]
    fn invalid_data_dir_config_is_reported() {
        let dir = data_dir_with(&THREE_REELS.replacen("count = 3", "count = 0", 1));
        let err = SlotApp::build(ClientConfig {
            data_dir: Some(dir.path().to_path_buf()),
            ..ClientConfig::default()
        })
        .err()
        .expect("zero reels is rejected");
        assert!(err.to_string().contains("data dir"));
    }

    #[test]
    fn explicit_file_wins_over_data_dir() {
        let dir = data_dir_with(THREE_REELS);
        let file = dir.path().join("single.toml");
        std::fs::write(&file, THREE_REELS.replacen("count = 3", "count = 1", 1))
            .expect("write config");

        let app = SlotApp::build(ClientConfig {
            game: GameSource::File(file),
            data_dir: Some(dir.path().to_path_buf()),
            ..ClientConfig::default()
        })
        .expect("file config builds");
        assert_eq!(app.game.reels.count, 1);
    }

    #[test]
    fn file_source_is_loaded_and_validated() {
        let dir = data_dir_with(THREE_REELS);
        let file = dir.path().join("broken.toml");
        std::fs::write(&file, THREE_REELS.replacen("count = 3", "count = 0", 1))
            .expect("write config");

        let err = SlotApp::build(ClientConfig {
            game: GameSource::File(file),
            ..ClientConfig::default()
        })
        .err()
        .expect("zero reels is rejected");
        assert!(err.to_string().contains("failed to load game config"));
    }
}

//! Client configuration structures and loaders.
use std::env;
use std::path::PathBuf;

/// Configuration required to bootstrap the engine and terminal UI.
#[derive(Clone, Debug, Default)]
pub struct ClientConfig {
    pub game: GameSource,
    /// Content directory holding `config.toml`, used with [`GameSource::Default`].
    pub data_dir: Option<PathBuf>,
    pub seed: Option<u64>,
    pub frame: FrameConfig,
    pub session_id: Option<String>,
}

/// Where the slot machine configuration comes from.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum GameSource {
    /// `config.toml` in the data directory if one is set, built-in defaults
    /// otherwise.
    #[default]
    Default,
    /// TOML file on disk.
    File(PathBuf),
}

impl ClientConfig {
    /// Construct configuration from process environment variables.
    ///
    /// Environment variables:
    /// - `SLOT_CONFIG` - Path to a TOML game config (default: data dir or built-in)
    /// - `SLOT_DATA_DIR` - Content directory containing `config.toml`
    /// - `SLOT_SEED` - RNG seed for a reproducible session (default: random)
    /// - `SLOT_FRAME_INTERVAL_MS` - Frame interval in milliseconds (default: 16, min: 1)
    /// - `SLOT_SESSION_ID` - Session identifier for log files (default: timestamp)
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Same as [`ClientConfig::from_env`], reading variables through `lookup`.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        if let Some(path) = lookup("SLOT_CONFIG") {
            config.game = GameSource::File(PathBuf::from(path));
        }

        config.data_dir = lookup("SLOT_DATA_DIR").map(PathBuf::from);
        config.seed = read_env::<u64, _>(&lookup, "SLOT_SEED");

        if let Some(interval) = read_env::<u64, _>(&lookup, "SLOT_FRAME_INTERVAL_MS") {
            config.frame.interval_ms = interval.max(1);
        }

        config.session_id = lookup("SLOT_SESSION_ID");

        config
    }
}

/// Frame pacing for the render loop.
#[derive(Clone, Debug)]
pub struct FrameConfig {
    /// Always at least 1.
    pub interval_ms: u64,
}

impl Default for FrameConfig {
    fn default() -> Self {
        Self { interval_ms: 16 }
    }
}

fn read_env<T, F>(lookup: &F, key: &str) -> Option<T>
where
    T: std::str::FromStr,
    F: Fn(&str) -> Option<String>,
{
    lookup(key)?.parse().ok()
}

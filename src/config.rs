use anyhow::{Context, Result};
use serde::Deserialize;
use std::path::{Path, PathBuf};
use std::time::Duration;

pub const CONFIG_ENV: &str = "CIPHER_QUEST_CONFIG";
const LOCAL_CONFIG: &str = "cipher-quest.toml";

#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    /// Directory of `level_*.toml` files. The builtin trials are used when unset.
    pub puzzle_dir: Option<PathBuf>,
    pub advance_delay_ms: u64,
    pub guide_name: String,
    /// `EnvFilter` directive; `RUST_LOG` wins when set.
    pub log_filter: String,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            puzzle_dir: None,
            advance_delay_ms: 2000,
            guide_name: "Divine Guide".to_string(),
            log_filter: "info".to_string(),
        }
    }
}

impl Config {
    pub fn advance_delay(&self) -> Duration {
        Duration::from_millis(self.advance_delay_ms)
    }

    pub fn from_toml(content: &str) -> Result<Self> {
        Ok(toml::from_str(content)?)
    }

    pub fn load_from(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read config {}", path.display()))?;
        Self::from_toml(&content).with_context(|| format!("failed to parse config {}", path.display()))
    }

    /// Load the first config file that exists, or defaults when none does.
    /// A path named by `CIPHER_QUEST_CONFIG` must exist.
    pub fn load() -> Result<(Self, Option<PathBuf>)> {
        if let Some(path) = std::env::var_os(CONFIG_ENV).map(PathBuf::from) {
            return Ok((Self::load_from(&path)?, Some(path)));
        }

        for path in candidates() {
            if path.is_file() {
                return Ok((Self::load_from(&path)?, Some(path)));
            }
        }

        Ok((Config::default(), None))
    }
}

fn candidates() -> Vec<PathBuf> {
    let mut paths = vec![PathBuf::from(LOCAL_CONFIG)];
    if let Some(dir) = dirs::config_dir() {
        paths.push(dir.join("cipher-quest").join("config.toml"));
    }
    paths
}

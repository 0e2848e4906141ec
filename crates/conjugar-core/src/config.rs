//! Drill configuration loading.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use crate::drill::{CARD_COUNT_PRESETS, DEFAULT_CARD_COUNT};
use crate::model::Tense;

/// Top-level conjugar configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConjugarConfig {
    /// File holding persisted statistics.
    #[serde(default = "default_data_file")]
    pub data_file: PathBuf,
    /// Tenses active when a drill starts.
    #[serde(default = "default_tenses")]
    pub default_tenses: Vec<Tense>,
    /// Progress target shown during a drill.
    #[serde(default = "default_target_cards")]
    pub target_cards: u32,
}

fn default_data_file() -> PathBuf {
    data_dir()
        .map(|d| d.join("store.json"))
        .unwrap_or_else(|| PathBuf::from("conjugar-store.json"))
}
fn default_tenses() -> Vec<Tense> {
    vec![Tense::Present]
}
fn default_target_cards() -> u32 {
    DEFAULT_CARD_COUNT
}

impl Default for ConjugarConfig {
    fn default() -> Self {
        Self {
            data_file: default_data_file(),
            default_tenses: default_tenses(),
            target_cards: default_target_cards(),
        }
    }
}

impl ConjugarConfig {
    /// Check values that TOML typing alone cannot rule out.
    pub fn validate(&self) -> Result<()> {
        anyhow::ensure!(
            !self.default_tenses.is_empty(),
            "default_tenses must name at least one tense"
        );
        anyhow::ensure!(
            CARD_COUNT_PRESETS.contains(&self.target_cards),
            "target_cards must be one of {:?}, got {}",
            CARD_COUNT_PRESETS,
            self.target_cards
        );
        Ok(())
    }
}

/// Resolve environment variable references like `${VAR_NAME}` in a string.
fn resolve_env_vars(s: &str) -> String {
    let mut result = s.to_string();
    while let Some(start) = result.find("${") {
        if let Some(end) = result[start..].find('}') {
            let var_name = &result[start + 2..start + end];
            let value = std::env::var(var_name).unwrap_or_default();
            result = format!(
                "{}{}{}",
                &result[..start],
                value,
                &result[start + end + 1..]
            );
        } else {
            break;
        }
    }
    result
}

/// Load config from an explicit path, or search the default locations.
///
/// Search order:
/// 1. `conjugar.toml` in the current directory
/// 2. `~/.config/conjugar/config.toml`
///
/// `CONJUGAR_DATA_FILE` overrides `data_file`.
pub fn load_config_from(path: Option<&Path>) -> Result<ConjugarConfig> {
    let config_path = if let Some(p) = path {
        if p.exists() {
            Some(p.to_path_buf())
        } else {
            anyhow::bail!("config file not found: {}", p.display());
        }
    } else {
        let local = PathBuf::from("conjugar.toml");
        if local.exists() {
            Some(local)
        } else {
            config_dir()
                .map(|d| d.join("config.toml"))
                .filter(|global| global.exists())
        }
    };

    let mut config = match config_path {
        Some(path) => {
            let content = std::fs::read_to_string(&path)
                .with_context(|| format!("failed to read config: {}", path.display()))?;
            let config = toml::from_str::<ConjugarConfig>(&content)
                .with_context(|| format!("failed to parse config: {}", path.display()))?;
            tracing::debug!("loaded config from {}", path.display());
            config
        }
        None => ConjugarConfig::default(),
    };

    if let Ok(file) = std::env::var("CONJUGAR_DATA_FILE") {
        config.data_file = PathBuf::from(file);
    }
    config.data_file = PathBuf::from(resolve_env_vars(&config.data_file.to_string_lossy()));

    config.validate()?;
    Ok(config)
}

fn home_dir() -> Option<PathBuf> {
    std::env::var("HOME").ok().map(PathBuf::from)
}

fn config_dir() -> Option<PathBuf> {
    home_dir().map(|h| h.join(".config").join("conjugar"))
}

fn data_dir() -> Option<PathBuf> {
    home_dir().map(|h| h.join(".local").join("share").join("conjugar"))
}

/// Starter file written by `conjugar init`.
pub const SAMPLE_CONFIG: &str = r#"# conjugar configuration

# Where session statistics are stored. ${VAR} references are expanded.
data_file = "${HOME}/.local/share/conjugar/store.json"

# Tenses active when a drill starts: "present", "preterite", "future".
default_tenses = ["present"]

# Progress target per session: 10, 20, or 50.
target_cards = 20
"#;

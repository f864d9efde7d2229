use std::{fs, path::Path, path::PathBuf};

use anyhow::{Context, Result};
use serde::Deserialize;

use crate::engine::core::EngineConfig;
use crate::games::tile_destroyer::rules::Rules;

pub const DEFAULT_CONFIG_PATH: &str = "tile_destroyer.ron";

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct AssetPaths {
    /// Directory the other asset paths are relative to.
    pub root: PathBuf,
    pub font: PathBuf,
    pub hit_sound: PathBuf,
}

impl Default for AssetPaths {
    fn default() -> Self {
        Self {
            root: PathBuf::from("."),
            font: PathBuf::from("Fonts/Retro Gaming.ttf"),
            hit_sound: PathBuf::from("Sounds/Explosion.wav"),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub engine: EngineConfig,
    pub rules: Rules,
    pub assets: AssetPaths,
}

impl AppConfig {
    pub fn from_ron_str(text: &str) -> Result<Self> {
        ron::from_str(text).context("parse RON config")
    }

    pub fn load_from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let text = fs::read_to_string(path)
            .with_context(|| format!("read config {}", path.display()))?;
        Self::from_ron_str(&text)
    }

    /// A missing file quietly yields the defaults; a broken one yields the
    /// defaults plus a warning.
    pub fn load_or_default(path: impl AsRef<Path>) -> Self {
        let path = path.as_ref();
        if !path.exists() {
            tracing::debug!(path = %path.display(), "no config file, using defaults");
            return Self::default();
        }
        match Self::load_from_file(path) {
            Ok(config) => {
                tracing::info!(path = %path.display(), "config loaded");
                config
            }
            Err(err) => {
                tracing::warn!(path = %path.display(), "config ignored: {err:#}");
                Self::default()
            }
        }
    }
}

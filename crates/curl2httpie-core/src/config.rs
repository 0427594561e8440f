use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::render::TARGET_COMMAND;

/// Global configuration loaded from `~/.config/curl2httpie/config.toml`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Curl2HttpieConfig {
    /// Program name the converted command starts with (`http`, `https`, `xh`, ...).
    pub program: String,
    /// Write the converted command back to the clipboard.
    pub copy_to_clipboard: bool,
    /// Print only the converted command instead of the full summary.
    pub quiet: bool,
}

impl Default for Curl2HttpieConfig {
    fn default() -> Self {
        Self {
            program: TARGET_COMMAND.to_string(),
            copy_to_clipboard: true,
            quiet: false,
        }
    }
}

pub fn config_path() -> Result<PathBuf> {
    let xdg_dirs = xdg::BaseDirectories::with_prefix("curl2httpie")?;
    Ok(xdg_dirs.place_config_file("config.toml")?)
}

/// Load configuration from disk, creating a default file if none exists.
pub fn load_or_init() -> Result<Curl2HttpieConfig> {
    let path = config_path()?;
    if !path.exists() {
        let default_cfg = Curl2HttpieConfig::default();
        write_config(&path, &default_cfg)?;
        tracing::info!("created default config at {}", path.display());
        return Ok(default_cfg);
    }
    load_from(&path)
}

/// Load configuration from an explicit path. Missing keys take defaults.
pub fn load_from(path: &Path) -> Result<Curl2HttpieConfig> {
    let data = fs::read_to_string(path)
        .with_context(|| format!("read config: {}", path.display()))?;
    let cfg: Curl2HttpieConfig =
        toml::from_str(&data).with_context(|| format!("parse config: {}", path.display()))?;
    Ok(cfg)
}

pub fn write_config(path: &Path, cfg: &Curl2HttpieConfig) -> Result<()> {
    let toml = toml::to_string_pretty(cfg)?;
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    fs::write(path, toml).with_context(|| format!("write config: {}", path.display()))?;
    Ok(())
}

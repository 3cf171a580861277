use crate::archive::BuildOptions;
use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;
use std::time::Duration;

/// Global configuration loaded from `~/.config/imgrab/config.toml`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ImgrabConfig {
    /// Whole-request timeout for the page GET during scan.
    pub page_timeout_secs: u64,
    /// Whole-request timeout for each image GET during retrieve.
    pub asset_timeout_secs: u64,
    /// TCP/TLS connect timeout, capped by the request timeout.
    pub connect_timeout_secs: u64,
    /// Maximum redirects followed per request.
    pub max_redirects: u32,
    /// Concurrent image fetches during retrieve (1 = sequential).
    pub workers: usize,
    /// Optional User-Agent header; libcurl sends none by default.
    pub user_agent: Option<String>,
}

impl Default for ImgrabConfig {
    fn default() -> Self {
        Self {
            page_timeout_secs: 15,
            asset_timeout_secs: 10,
            connect_timeout_secs: 10,
            max_redirects: 10,
            workers: 1,
            user_agent: None,
        }
    }
}

impl ImgrabConfig {
    pub fn page_timeout(&self) -> Duration {
        Duration::from_secs(self.page_timeout_secs)
    }

    pub fn build_options(&self) -> BuildOptions {
        BuildOptions {
            timeout: Duration::from_secs(self.asset_timeout_secs),
            workers: self.workers.max(1),
        }
    }

    pub fn to_toml(&self) -> Result<String> {
        Ok(toml::to_string_pretty(self)?)
    }
}

pub fn config_path() -> Result<PathBuf> {
    let xdg_dirs = xdg::BaseDirectories::with_prefix("imgrab")?;
    Ok(xdg_dirs.place_config_file("config.toml")?)
}

/// Load configuration from disk, creating a default file if none exists.
pub fn load_or_init() -> Result<ImgrabConfig> {
    let path = config_path()?;
    if !path.exists() {
        let default_cfg = ImgrabConfig::default();
        let toml = default_cfg.to_toml()?;
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&path, toml)?;
        tracing::info!("created default config at {}", path.display());
        return Ok(default_cfg);
    }

    let data = fs::read_to_string(&path)?;
    let cfg: ImgrabConfig = toml::from_str(&data)?;
    Ok(cfg)
}

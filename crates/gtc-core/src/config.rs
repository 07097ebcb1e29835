use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;

fn default_base_url() -> String {
    "http://127.0.0.1:8000".to_string()
}

fn default_connect_timeout() -> u64 {
    15
}

fn default_request_timeout() -> u64 {
    60
}

/// Global configuration loaded from `~/.config/gtc/config.toml`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GtcConfig {
    /// Base URL of the geotag backend (no trailing slash needed).
    #[serde(default = "default_base_url")]
    pub base_url: String,
    /// Directory where downloaded attachments are saved (None = current directory).
    #[serde(default)]
    pub download_dir: Option<PathBuf>,
    /// Connect timeout in seconds for each request.
    #[serde(default = "default_connect_timeout")]
    pub connect_timeout_secs: u64,
    /// Overall timeout in seconds for each request (downloads included).
    #[serde(default = "default_request_timeout")]
    pub request_timeout_secs: u64,
}

impl Default for GtcConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            download_dir: None,
            connect_timeout_secs: default_connect_timeout(),
            request_timeout_secs: default_request_timeout(),
        }
    }
}

pub fn config_path() -> Result<PathBuf> {
    let xdg_dirs = xdg::BaseDirectories::with_prefix("gtc")?;
    Ok(xdg_dirs.place_config_file("config.toml")?)
}

/// Load configuration from disk, creating a default file if none exists.
pub fn load_or_init() -> Result<GtcConfig> {
    let path = config_path()?;
    if !path.exists() {
        let default_cfg = GtcConfig::default();
        let toml = toml::to_string_pretty(&default_cfg)?;
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&path, toml)?;
        tracing::info!("created default config at {}", path.display());
        return Ok(default_cfg);
    }

    let data = fs::read_to_string(&path)?;
    let cfg: GtcConfig = toml::from_str(&data)?;
    Ok(cfg)
}

use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;

fn default_progress_decimal_places() -> u32 {
    1
}

/// Updater configuration loaded from `~/.config/patchup/config.toml`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UpdaterConfig {
    /// URL of the server metadata file. None means the host application
    /// supplies it at run time (e.g. compiled-in default).
    #[serde(default)]
    pub server_metadata_url: Option<String>,
    /// Directory patch files are downloaded into. None = platform temp dir.
    #[serde(default)]
    pub download_dir: Option<PathBuf>,
    /// Decimal places used when formatting byte counts for progress labels.
    #[serde(default = "default_progress_decimal_places")]
    pub progress_decimal_places: u32,
}

impl Default for UpdaterConfig {
    fn default() -> Self {
        Self {
            server_metadata_url: None,
            download_dir: None,
            progress_decimal_places: default_progress_decimal_places(),
        }
    }
}

pub fn config_path() -> Result<PathBuf> {
    let xdg_dirs = xdg::BaseDirectories::with_prefix("patchup")?;
    Ok(xdg_dirs.place_config_file("config.toml")?)
}

/// Load configuration from disk, creating a default file if none exists.
pub fn load_or_init() -> Result<UpdaterConfig> {
    let path = config_path()?;
    if !path.exists() {
        let default_cfg = UpdaterConfig::default();
        let toml = toml::to_string_pretty(&default_cfg)?;
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&path, toml)?;
        tracing::info!("created default config at {}", path.display());
        return Ok(default_cfg);
    }

    let data = fs::read_to_string(&path)?;
    let cfg: UpdaterConfig = toml::from_str(&data)?;
    Ok(cfg)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_values() {
        let cfg = UpdaterConfig::default();
        assert!(cfg.server_metadata_url.is_none());
        assert!(cfg.download_dir.is_none());
        assert_eq!(cfg.progress_decimal_places, 1);
    }

    #[test]
    fn config_toml_roundtrip() {
        let cfg = UpdaterConfig::default();
        let toml = toml::to_string_pretty(&cfg).unwrap();
        let parsed: UpdaterConfig = toml::from_str(&toml).unwrap();
        assert_eq!(
            parsed.progress_decimal_places,
            cfg.progress_decimal_places
        );
        assert!(parsed.server_metadata_url.is_none());
    }

    #[test]
    fn config_toml_custom_values() {
        let toml = r#"
            server_metadata_url = "https://updates.example.com/metadata.txt"
            download_dir = "/var/tmp/patchup"
            progress_decimal_places = 2
        "#;
        let cfg: UpdaterConfig = toml::from_str(toml).unwrap();
        assert_eq!(
            cfg.server_metadata_url.as_deref(),
            Some("https://updates.example.com/metadata.txt")
        );
        assert_eq!(cfg.download_dir, Some(PathBuf::from("/var/tmp/patchup")));
        assert_eq!(cfg.progress_decimal_places, 2);
    }

    #[test]
    fn config_toml_empty_file_uses_defaults() {
        let cfg: UpdaterConfig = toml::from_str("").unwrap();
        assert!(cfg.server_metadata_url.is_none());
        assert_eq!(cfg.progress_decimal_places, 1);
    }
}

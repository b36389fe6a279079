use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use super::palette::{LinkColor, Palette};
use crate::app::infrastructure::error::{AppError, Result};

/// Overrides `endpoint` when set.
pub const ENDPOINT_ENV_VAR: &str = "NEWS_DIGEST_ENDPOINT";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AppSettings {
    /// Base URL of the digest service, without the `/api/...` path.
    #[serde(default = "default_endpoint")]
    pub endpoint: String,

    #[serde(default = "default_request_timeout_secs")]
    pub request_timeout_secs: u64,

    /// Link colors in the order they are handed out within a paragraph.
    #[serde(default = "default_link_palette")]
    pub link_palette: Vec<LinkColor>,

    /// Directory holding the category icon files; defaults to the bundled assets.
    #[serde(default)]
    pub assets_dir: Option<PathBuf>,
}

fn default_endpoint() -> String {
    "http://localhost:8000".to_string()
}

fn default_request_timeout_secs() -> u64 {
    10
}

fn default_link_palette() -> Vec<LinkColor> {
    LinkColor::all().to_vec()
}

impl Default for AppSettings {
    fn default() -> Self {
        Self {
            endpoint: default_endpoint(),
            request_timeout_secs: default_request_timeout_secs(),
            link_palette: default_link_palette(),
            assets_dir: None,
        }
    }
}

impl AppSettings {
    /// Load settings from the default location, writing defaults on first run.
    /// The endpoint environment override is applied afterwards.
    pub fn load() -> Self {
        let mut settings = Self::load_from(&Self::get_config_path());
        if let Ok(endpoint) = std::env::var(ENDPOINT_ENV_VAR) {
            settings.apply_endpoint_override(&endpoint);
        }
        settings
    }

    pub fn load_from(path: &Path) -> Self {
        match fs::read_to_string(path) {
            Ok(contents) => match serde_json::from_str(&contents) {
                Ok(settings) => settings,
                Err(e) => {
                    tracing::warn!(path = %path.display(), error = %e, "failed to parse settings, using defaults");
                    Self::default()
                }
            },
            Err(_) => {
                let default = Self::default();
                if let Err(e) = default.save_to(path) {
                    tracing::debug!(error = %e, "could not write default settings");
                }
                default
            }
        }
    }

    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)
                .map_err(|e| AppError::Settings(format!("Failed to create config directory: {}", e)))?;
        }

        let json = serde_json::to_string_pretty(self)?;
        fs::write(path, json)?;

        Ok(())
    }

    /// Get config file path (cross-platform)
    pub fn get_config_path() -> PathBuf {
        let mut path = dirs::config_dir().unwrap_or_else(|| PathBuf::from("."));
        path.push("news-digest");
        path.push("settings.json");
        path
    }

    pub fn apply_endpoint_override(&mut self, endpoint: &str) {
        let endpoint = endpoint.trim();
        if !endpoint.is_empty() {
            self.endpoint = endpoint.to_string();
        }
    }

    /// Full URL of the sections resource.
    pub fn sections_url(&self) -> String {
        format!("{}/api/digests/sections/", self.endpoint.trim_end_matches('/'))
    }

    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs.max(1))
    }

    pub fn palette(&self) -> Palette {
        Palette::new(self.link_palette.clone())
    }

    /// The configured icon directory, else `assets/icons` next to the
    /// executable, else the source tree's copy for `cargo run`.
    pub fn icons_dir(&self) -> PathBuf {
        if let Some(dir) = &self.assets_dir {
            return dir.clone();
        }
        std::env::current_exe()
            .ok()
            .and_then(|exe| icons_dir_beside(&exe))
            .unwrap_or_else(|| PathBuf::from(concat!(env!("CARGO_MANIFEST_DIR"), "/assets/icons")))
    }
}

/// `assets/icons` in the directory holding `exe`, if it exists.
fn icons_dir_beside(exe: &Path) -> Option<PathBuf> {
    let dir = exe.parent()?.join("assets").join("icons");
    dir.is_dir().then_some(dir)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_default_settings() {
        let settings = AppSettings::default();
        assert_eq!(settings.endpoint, "http://localhost:8000");
        assert_eq!(settings.request_timeout_secs, 10);
        assert_eq!(settings.palette(), Palette::default());
        assert!(settings.assets_dir.is_none());
    }

    #[test]
    fn test_partial_config() {
        let json = r#"{"endpoint": "https://digest.example.com"}"#;
        let settings: AppSettings = serde_json::from_str(json).unwrap();
        assert_eq!(settings.endpoint, "https://digest.example.com");
        assert_eq!(settings.request_timeout_secs, 10);
        assert_eq!(settings.link_palette.len(), 8);
    }

    #[test]
    fn test_sections_url_joins_path() {
        let mut settings = AppSettings::default();
        assert_eq!(settings.sections_url(), "http://localhost:8000/api/digests/sections/");

        settings.endpoint = "http://digest.local:9000/".to_string();
        assert_eq!(settings.sections_url(), "http://digest.local:9000/api/digests/sections/");
    }

    #[test]
    fn test_endpoint_override_ignores_blank() {
        let mut settings = AppSettings::default();
        settings.apply_endpoint_override("   ");
        assert_eq!(settings.endpoint, "http://localhost:8000");

        settings.apply_endpoint_override(" http://other:1 ");
        assert_eq!(settings.endpoint, "http://other:1");
    }

    #[test]
    fn test_empty_palette_falls_back() {
        let json = r#"{"link_palette": []}"#;
        let settings: AppSettings = serde_json::from_str(json).unwrap();
        assert_eq!(settings.palette().len(), 8);
    }

    #[test]
    fn test_first_load_writes_defaults() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("news-digest").join("settings.json");

        let settings = AppSettings::load_from(&path);
        assert_eq!(settings, AppSettings::default());
        assert!(path.exists());
    }

    #[test]
    fn test_save_and_reload() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("settings.json");

        let settings = AppSettings {
            request_timeout_secs: 3,
            link_palette: vec![LinkColor::Rose, LinkColor::Sky],
            ..Default::default()
        };
        settings.save_to(&path).unwrap();

        assert_eq!(AppSettings::load_from(&path), settings);
    }

    #[test]
    fn test_icons_found_beside_executable() {
        let dir = tempdir().unwrap();
        let exe = dir.path().join("NewsDigest");
        assert_eq!(icons_dir_beside(&exe), None);

        let icons = dir.path().join("assets").join("icons");
        fs::create_dir_all(&icons).unwrap();
        assert_eq!(icons_dir_beside(&exe), Some(icons));
    }

    #[test]
    fn test_configured_icons_dir_wins() {
        let settings = AppSettings {
            assets_dir: Some(PathBuf::from("/opt/news-digest/icons")),
            ..Default::default()
        };
        assert_eq!(settings.icons_dir(), PathBuf::from("/opt/news-digest/icons"));
    }

    #[test]
    fn test_corrupt_file_uses_defaults() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("settings.json");
        fs::write(&path, "{ nope").unwrap();

        assert_eq!(AppSettings::load_from(&path), AppSettings::default());
    }
}

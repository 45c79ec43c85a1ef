//! Runtime settings
//!
//! Settings come from a TOML file (explicit path, `SCRATCHPAD_CONFIG`, or the
//! user's config directory) with every field defaulted, followed by a couple
//! of environment overrides.

use anyhow::Context;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::{debug, info};

use crate::error::{Result, ScratchError};

pub const DEFAULT_USER_AGENT: &str = "Mozilla/5.0 (X11; Linux x86_64) AppleWebKit/537.36 \
     (KHTML, like Gecko) Chrome/83.0.4103.97 Safari/537.36";

pub const DEFAULT_PRODUCT_URL: &str = "https://www.amazon.co.uk/Samsung-Galaxy-Dual-SIM-Android-Smartphone-Prism-Black/\
     dp/B07NWR7QYQ/ref=sr_1_3?dchild=1&keywords=galaxy+s10&qid=1592944411&s=electronics&sr=1-3";

pub const DEFAULT_CLUBS_URL: &str = "https://www.premierleague.com/clubs";
pub const DEFAULT_SITE_BASE_URL: &str = "http://www.premierleague.com";

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct Settings {
    pub scraper: ScraperSettings,
    pub dashboard: DashboardSettings,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct ScraperSettings {
    pub user_agent: String,
    pub timeout_secs: u64,
    pub product_url: String,
    pub clubs_url: String,
    pub site_base_url: String,
}

impl Default for ScraperSettings {
    fn default() -> Self {
        Self {
            user_agent: DEFAULT_USER_AGENT.to_string(),
            timeout_secs: 30,
            product_url: DEFAULT_PRODUCT_URL.to_string(),
            clubs_url: DEFAULT_CLUBS_URL.to_string(),
            site_base_url: DEFAULT_SITE_BASE_URL.to_string(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct DashboardSettings {
    pub host: String,
    pub port: u16,
    pub max_upload_bytes: usize,
    /// Number of words shown in the common-words panel
    pub top_words: usize,
}

impl Default for DashboardSettings {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_string(),
            port: 8050,
            max_upload_bytes: 10 * 1024 * 1024,
            top_words: 20,
        }
    }
}

impl Settings {
    /// Load settings from the first config file found, then apply env overrides.
    pub fn load(explicit: Option<&Path>) -> Result<Self> {
        let mut settings = match resolve_config_path(explicit) {
            Some(path) => Self::from_file(&path)?,
            None => {
                debug!("No config file found, using defaults");
                Self::default()
            }
        };
        settings.apply_env_overrides()?;
        Ok(settings)
    }

    pub fn from_file(path: &Path) -> Result<Self> {
        info!("Loading config from {:?}", path);
        let raw = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file {}", path.display()))?;
        Self::from_toml(&raw).with_context(|| format!("Invalid config file {}", path.display()))
    }

    pub fn from_toml(raw: &str) -> Result<Self> {
        let settings: Settings =
            toml::from_str(raw).map_err(|e| ScratchError::Config(e.to_string()))?;
        Ok(settings)
    }

    pub fn to_toml(&self) -> Result<String> {
        toml::to_string_pretty(self).context("Failed to serialize settings")
    }

    fn apply_env_overrides(&mut self) -> Result<()> {
        if let Ok(agent) = std::env::var("SCRATCHPAD_USER_AGENT") {
            self.scraper.user_agent = agent;
        }
        if let Ok(port) = std::env::var("SCRATCHPAD_DASHBOARD_PORT") {
            self.dashboard.port = port.trim().parse().map_err(|_| {
                ScratchError::Config(format!("SCRATCHPAD_DASHBOARD_PORT is not a port: {}", port))
            })?;
        }
        Ok(())
    }

    pub fn validate(&self) -> Result<()> {
        if self.scraper.user_agent.trim().is_empty() {
            return Err(ScratchError::Config("scraper.user_agent must not be empty".into()).into());
        }
        if self.scraper.timeout_secs == 0 {
            return Err(ScratchError::Config("scraper.timeout_secs must be positive".into()).into());
        }
        for (field, url) in [
            ("scraper.product_url", &self.scraper.product_url),
            ("scraper.clubs_url", &self.scraper.clubs_url),
            ("scraper.site_base_url", &self.scraper.site_base_url),
        ] {
            if !(url.starts_with("http://") || url.starts_with("https://")) {
                return Err(
                    ScratchError::Config(format!("{} must be an http(s) URL: {}", field, url)).into(),
                );
            }
        }
        if self.dashboard.max_upload_bytes == 0 {
            return Err(
                ScratchError::Config("dashboard.max_upload_bytes must be positive".into()).into(),
            );
        }
        Ok(())
    }
}

fn resolve_config_path(explicit: Option<&Path>) -> Option<PathBuf> {
    if let Some(path) = explicit {
        return Some(path.to_path_buf());
    }
    if let Ok(path) = std::env::var("SCRATCHPAD_CONFIG") {
        if !path.trim().is_empty() {
            return Some(PathBuf::from(path));
        }
    }
    dir_spec::config_home()
        .map(|dir| dir.join("scratchpad").join("config.toml"))
        .filter(|path| path.exists())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_partial_toml_keeps_defaults() {
        let settings = Settings::from_toml(
            r#"
            [dashboard]
            port = 9000
            "#,
        )
        .unwrap();
        assert_eq!(settings.dashboard.port, 9000);
        assert_eq!(settings.dashboard.host, "127.0.0.1");
        assert_eq!(settings.scraper, ScraperSettings::default());
    }

    #[test]
    fn test_from_file_reads_scraper_section() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(
            &path,
            "[scraper]\nclubs_url = \"http://localhost:1234/clubs\"\ntimeout_secs = 5\n",
        )
        .unwrap();

        let settings = Settings::from_file(&path).unwrap();
        assert_eq!(settings.scraper.clubs_url, "http://localhost:1234/clubs");
        assert_eq!(settings.scraper.timeout_secs, 5);
        assert!(settings.validate().is_ok());
    }

    #[test]
    fn test_invalid_toml_is_config_error() {
        let err = Settings::from_toml("[dashboard]\nport = \"abc\"").unwrap_err();
        assert!(err.to_string().starts_with("config error"));
    }

    #[test]
    fn test_validate_rejects_bad_values() {
        let mut settings = Settings::default();
        settings.scraper.product_url = "ftp://example.com".to_string();
        assert!(settings.validate().is_err());

        let mut settings = Settings::default();
        settings.scraper.timeout_secs = 0;
        assert!(settings.validate().is_err());

        let mut settings = Settings::default();
        settings.dashboard.max_upload_bytes = 0;
        assert!(settings.validate().is_err());
    }

    #[test]
    fn test_toml_roundtrip_of_defaults() {
        let settings = Settings::default();
        let raw = settings.to_toml().unwrap();
        assert!(raw.contains("[scraper]"));
        assert_eq!(Settings::from_toml(&raw).unwrap(), settings);
    }
}

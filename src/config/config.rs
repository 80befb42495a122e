use std::env;
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;
use serde::{Deserialize, Serialize};

use crate::constants::*;
use crate::devcircle_error;
use crate::error::{DevCircleResult, ErrorContext};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Origin used to build invite links (`<origin>/join/<code>`)
    pub invite_origin: String,
    pub load_delay_ms: u64,
    pub submit_delay_ms: u64,
    pub signup_redirect_ms: u64,
    pub notification_secs: u64,
    /// When false the mock backend starts without a team
    pub mock_team: bool,
    pub default_hackathon: String,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            invite_origin: DEFAULT_INVITE_ORIGIN.to_string(),
            load_delay_ms: DEFAULT_LOAD_DELAY_MS,
            submit_delay_ms: DEFAULT_SUBMIT_DELAY_MS,
            signup_redirect_ms: DEFAULT_SIGNUP_REDIRECT_MS,
            notification_secs: DEFAULT_NOTIFICATION_SECS,
            mock_team: true,
            default_hackathon: DEFAULT_HACKATHON.to_string(),
        }
    }
}

impl Config {
    pub fn load_delay(&self) -> Duration {
        Duration::from_millis(self.load_delay_ms)
    }

    pub fn submit_delay(&self) -> Duration {
        Duration::from_millis(self.submit_delay_ms)
    }

    pub fn signup_redirect(&self) -> Duration {
        Duration::from_millis(self.signup_redirect_ms)
    }

    pub fn notification_ttl(&self) -> Duration {
        Duration::from_secs(self.notification_secs)
    }

    pub fn team_path(&self) -> String {
        format!("/hackathon/{}/team", self.default_hackathon)
    }

    /// Apply `DEVCIRCLE_INVITE_ORIGIN`, if set
    pub fn with_env_overrides(self) -> Self {
        let origin = env::var(INVITE_ORIGIN_ENV).ok();
        self.with_invite_origin(origin.as_deref())
    }

    /// A non-blank origin replaces the configured one, minus any trailing `/`
    pub fn with_invite_origin(mut self, origin: Option<&str>) -> Self {
        if let Some(origin) = origin.map(str::trim).filter(|o| !o.is_empty()) {
            self.invite_origin = origin.trim_end_matches('/').to_string();
        }
        self
    }
}

pub fn config_path() -> DevCircleResult<PathBuf> {
    let home_dir = dirs::home_dir()
        .ok_or_else(|| devcircle_error!(ConfigError, "Could not find home directory"))?;
    Ok(home_dir.join(CONFIG_FILE))
}

/// Load the user configuration, falling back to defaults when no file exists.
/// `DEVCIRCLE_INVITE_ORIGIN` wins over the file.
pub fn load_config() -> DevCircleResult<Config> {
    let path = config_path()?;
    Ok(load_config_from(&path)?.with_env_overrides())
}

pub fn load_config_from(path: &Path) -> DevCircleResult<Config> {
    if !path.exists() {
        return Ok(Config::default());
    }

    let config_str = fs::read_to_string(path)
        .with_context(|| format!("Failed to read {}", path.display()))?;
    serde_json::from_str(&config_str).map_err(|e| {
        devcircle_error!(ConfigError, "{} is not valid: {}", path.display(), e)
    })
}

pub fn save_config(config: &Config) -> DevCircleResult<PathBuf> {
    let path = config_path()?;
    save_config_to(config, &path)?;
    Ok(path)
}

pub fn save_config_to(config: &Config, path: &Path) -> DevCircleResult<()> {
    let config_str = serde_json::to_string_pretty(config)?;
    fs::write(path, config_str)
        .with_context(|| format!("Failed to write {}", path.display()))?;
    Ok(())
}

//! Configuration management for Orientor

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::error::{ConfigError, Result};

/// Backend address used when neither flag, env nor config provide one
pub const DEFAULT_API_URL: &str = "http://localhost:8000";

/// Resume editor address used when nothing else is configured
pub const DEFAULT_RESUME_URL: &str = "http://localhost:3100";

/// Application configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Orientor backend base address
    #[serde(skip_serializing_if = "Option::is_none")]
    pub api_url: Option<String>,

    /// Resume editor base address
    #[serde(skip_serializing_if = "Option::is_none")]
    pub resume_url: Option<String>,

    /// Request timeout in seconds
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,

    /// User preferences
    #[serde(default)]
    pub preferences: Preferences,
}

/// User preferences
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Preferences {
    /// Default output format
    #[serde(skip_serializing_if = "Option::is_none")]
    pub format: Option<String>,
}

fn default_timeout_secs() -> u64 {
    30
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api_url: None,
            resume_url: None,
            timeout_secs: default_timeout_secs(),
            preferences: Preferences::default(),
        }
    }
}

impl Config {
    /// Get the default config file path
    pub fn default_path() -> Result<PathBuf> {
        Ok(orientor_dir()?.join("config.yaml"))
    }

    /// Resolve an optional override into a concrete config path
    pub fn resolve_path(path: Option<&str>) -> Result<PathBuf> {
        match path {
            Some(p) => Ok(PathBuf::from(p)),
            None => Self::default_path(),
        }
    }

    /// Load configuration from a specific path
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Err(ConfigError::NotFound(path.display().to_string()).into());
        }

        let contents = std::fs::read_to_string(path)?;
        let config: Config = serde_yaml::from_str(&contents).map_err(ConfigError::from)?;

        Ok(config)
    }

    /// Load configuration, falling back to defaults when the file is missing
    pub fn load_or_default(path: Option<&str>) -> Result<Self> {
        let path = Self::resolve_path(path)?;
        match Self::load_from(&path) {
            Ok(config) => Ok(config),
            Err(crate::error::Error::Config(ConfigError::NotFound(_))) => {
                log::debug!("No config at {}, using defaults", path.display());
                Ok(Self::default())
            }
            Err(e) => Err(e),
        }
    }

    /// Save configuration to an optional override path
    pub fn save_at(&self, path: Option<&str>) -> Result<()> {
        self.save_to(&Self::resolve_path(path)?)
    }

    /// Save configuration to a specific path
    pub fn save_to(&self, path: &Path) -> Result<()> {
        let contents =
            serde_yaml::to_string(self).map_err(|e| ConfigError::SaveError(e.to_string()))?;

        write_private(path, &contents)
    }

    /// Effective backend address: override, then config, then default.
    ///
    /// The result is trimmed of surrounding whitespace and a trailing slash.
    pub fn api_url(&self, override_url: Option<&str>) -> Result<String> {
        let raw = override_url
            .or(self.api_url.as_deref())
            .unwrap_or(DEFAULT_API_URL);
        let url = normalize_base_url(raw);
        if url.is_empty() {
            return Err(ConfigError::Invalid("API URL is empty".to_string()).into());
        }
        Ok(url)
    }

    /// Effective resume editor address
    pub fn resume_url(&self, override_url: Option<&str>) -> String {
        normalize_base_url(
            override_url
                .or(self.resume_url.as_deref())
                .unwrap_or(DEFAULT_RESUME_URL),
        )
    }
}

/// Trim whitespace and any trailing slash from a base address
pub fn normalize_base_url(raw: &str) -> String {
    raw.trim().trim_end_matches('/').to_string()
}

/// The `~/.orientor` directory holding config and session files
pub fn orientor_dir() -> Result<PathBuf> {
    let home = dirs::home_dir().ok_or(ConfigError::Invalid(
        "Could not determine home directory".to_string(),
    ))?;

    Ok(home.join(".orientor"))
}

/// Write a file readable only by the owner, creating parent directories
pub fn write_private(path: &Path, contents: &str) -> Result<()> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }

    std::fs::write(path, contents)?;

    // Set file permissions to 600 on Unix systems
    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        let mut perms = std::fs::metadata(path)?.permissions();
        perms.set_mode(0o600);
        std::fs::set_permissions(path, perms)?;
    }

    Ok(())
}

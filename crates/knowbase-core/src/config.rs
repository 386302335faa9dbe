//! Knowbase configuration system.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::error::{KnowbaseError, Result};

/// Root configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct KnowbaseConfig {
    #[serde(default)]
    pub gateway: GatewayConfig,
    #[serde(default)]
    pub knowledge: KnowledgeConfig,
}

impl KnowbaseConfig {
    /// Load config from `KNOWBASE_CONFIG` or the default path (~/.knowbase/config.toml).
    /// A missing file yields the defaults.
    pub fn load() -> Result<Self> {
        let path = Self::resolve_path();
        let mut config = if path.exists() {
            Self::load_from(&path)?
        } else {
            tracing::debug!("No config at {}, using defaults", path.display());
            Self::default()
        };
        config.apply_env_overrides();
        Ok(config)
    }

    /// Load config from a specific path.
    pub fn load_from(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| KnowbaseError::Config(format!("Failed to read config: {e}")))?;
        let config: Self = toml::from_str(&content)
            .map_err(|e| KnowbaseError::Config(format!("Failed to parse config: {e}")))?;
        Ok(config)
    }

    /// Save config to a specific path, creating parent directories.
    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let content = toml::to_string_pretty(self)
            .map_err(|e| KnowbaseError::Config(format!("Failed to serialize config: {e}")))?;
        std::fs::write(path, content)?;
        Ok(())
    }

    /// `KNOWBASE_CONFIG` if set, else the default path.
    pub fn resolve_path() -> PathBuf {
        std::env::var("KNOWBASE_CONFIG")
            .map(PathBuf::from)
            .unwrap_or_else(|_| Self::default_path())
    }

    /// Get the default config path.
    pub fn default_path() -> PathBuf {
        Self::home_dir().join("config.toml")
    }

    /// Get the Knowbase home directory.
    pub fn home_dir() -> PathBuf {
        dirs::home_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(".knowbase")
    }

    /// Apply environment overrides. `PORT` replaces `gateway.port`.
    pub fn apply_env_overrides(&mut self) {
        if let Ok(port) = std::env::var("PORT") {
            self.gateway.apply_port_override(&port);
        }
    }
}

/// Gateway (HTTP server) configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GatewayConfig {
    #[serde(default = "default_port")]
    pub port: u16,
    #[serde(default = "default_host")]
    pub host: String,
    /// Directory served for unmatched GET paths.
    #[serde(default)]
    pub static_dir: Option<String>,
}

fn default_port() -> u16 { 3000 }
fn default_host() -> String { "0.0.0.0".into() }

impl Default for GatewayConfig {
    fn default() -> Self {
        Self {
            port: default_port(),
            host: default_host(),
            static_dir: None,
        }
    }
}

impl GatewayConfig {
    /// Socket address string for binding.
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    fn apply_port_override(&mut self, raw: &str) {
        match raw.trim().parse::<u16>() {
            Ok(port) => self.port = port,
            Err(e) => tracing::warn!("Ignoring invalid PORT value {raw:?}: {e}"),
        }
    }
}

/// Knowledge store configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct KnowledgeConfig {
    /// TOML topic table replacing the built-in one.
    #[serde(default)]
    pub topics_path: Option<String>,
}

//! Configuration for weathermock

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::error::{Error, Result};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    /// Address the servers bind to
    #[serde(default = "default_bind_address")]
    pub bind_address: String,

    /// HTTP server port
    #[serde(default = "default_http_port")]
    pub http_port: u16,

    /// MCP server port (for HTTP transport)
    #[serde(default = "default_mcp_port")]
    pub mcp_port: u16,

    /// Serve Swagger UI at /api/docs
    #[serde(default = "default_swagger_ui")]
    pub swagger_ui: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            bind_address: default_bind_address(),
            http_port: default_http_port(),
            mcp_port: default_mcp_port(),
            swagger_ui: default_swagger_ui(),
        }
    }
}

impl Config {
    /// Load config from the default location, or defaults if absent
    pub fn load() -> Result<Self> {
        Self::load_from(&Self::config_path()?)
    }

    /// Load config from a specific file, or defaults if absent
    pub fn load_from(path: &Path) -> Result<Self> {
        if path.exists() {
            let content = std::fs::read_to_string(path)?;
            let config: Config = toml::from_str(&content)?;
            Ok(config)
        } else {
            tracing::debug!("No config at {:?}, using defaults", path);
            Ok(Config::default())
        }
    }

    /// Save config to file
    pub fn save(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content)?;

        Ok(())
    }

    /// Get the default config path
    pub fn config_path() -> Result<PathBuf> {
        let dir = dirs::config_dir()
            .ok_or_else(|| Error::Config("Could not find config directory".into()))?;
        Ok(dir.join("weathermock").join("config.toml"))
    }

    /// Socket address for the HTTP server
    pub fn http_addr(&self) -> String {
        format!("{}:{}", self.bind_address, self.http_port)
    }

    /// Socket address for the standalone MCP server
    pub fn mcp_addr(&self) -> String {
        format!("{}:{}", self.bind_address, self.mcp_port)
    }
}

// Default value functions

fn default_bind_address() -> String {
    "0.0.0.0".to_string()
}

fn default_http_port() -> u16 {
    3000
}

fn default_mcp_port() -> u16 {
    3001
}

fn default_swagger_ui() -> bool {
    true
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_missing_file_uses_defaults() {
        let temp_dir = TempDir::new().unwrap();
        let config = Config::load_from(&temp_dir.path().join("absent.toml")).unwrap();
        assert_eq!(config, Config::default());
        assert_eq!(config.http_addr(), "0.0.0.0:3000");
    }

    #[test]
    fn test_partial_file_fills_defaults() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("config.toml");
        std::fs::write(&path, "http_port = 8080\nswagger_ui = false\n").unwrap();

        let config = Config::load_from(&path).unwrap();
        assert_eq!(config.http_port, 8080);
        assert!(!config.swagger_ui);
        assert_eq!(config.bind_address, "0.0.0.0");
        assert_eq!(config.mcp_port, 3001);
    }

    #[test]
    fn test_invalid_file_is_an_error() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("config.toml");
        std::fs::write(&path, "http_port = \"not a port\"\n").unwrap();

        assert!(matches!(Config::load_from(&path), Err(Error::Toml(_))));
    }

    #[test]
    fn test_save_and_load() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("nested").join("config.toml");

        let config = Config {
            bind_address: "127.0.0.1".into(),
            mcp_port: 4001,
            ..Config::default()
        };
        config.save(&path).unwrap();

        let loaded = Config::load_from(&path).unwrap();
        assert_eq!(loaded, config);
        assert_eq!(loaded.mcp_addr(), "127.0.0.1:4001");
    }
}

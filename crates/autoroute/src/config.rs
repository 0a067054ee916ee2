// File: src/config.rs
// Purpose: Configuration parsing from autoroute.toml

use crate::magic::MountOptions;
use crate::mounter::DEFAULT_EXTENSION;
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Default config file name
pub const CONFIG_FILE: &str = "autoroute.toml";

/// Application configuration
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub server: ServerConfig,

    #[serde(default)]
    pub routing: RoutingConfig,
}

/// Server configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    #[serde(default = "default_port")]
    pub port: u16,

    #[serde(default = "default_host")]
    pub host: String,
}

/// Routing configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RoutingConfig {
    /// Directory containing route modules (default: "src/routes")
    #[serde(default = "default_routes_dir")]
    pub routes_dir: String,

    /// Path to mount the whole tree under (e.g., "/api")
    #[serde(default)]
    pub prefix: Option<String>,

    /// Route module extension (default: "rs")
    #[serde(default = "default_extension")]
    pub extension: String,
}

// Default values
fn default_port() -> u16 {
    3000
}

fn default_host() -> String {
    "127.0.0.1".to_string()
}

fn default_routes_dir() -> String {
    "src/routes".to_string()
}

fn default_extension() -> String {
    DEFAULT_EXTENSION.to_string()
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            port: default_port(),
            host: default_host(),
        }
    }
}

impl Default for RoutingConfig {
    fn default() -> Self {
        Self {
            routes_dir: default_routes_dir(),
            prefix: None,
            extension: default_extension(),
        }
    }
}

impl ServerConfig {
    /// `host:port` to bind to
    pub fn addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

impl RoutingConfig {
    /// Mount options for this routing section
    ///
    /// Relative `routes_dir` values resolve against `base_dir`.
    pub fn mount_options(&self, base_dir: Option<PathBuf>) -> MountOptions {
        MountOptions {
            prefix: self.prefix.clone(),
            extension: self.extension.clone(),
            base_dir,
        }
    }
}

impl Config {
    /// Load configuration from a TOML file
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();

        // Missing file means defaults
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {:?}", path))?;

        if content.trim().is_empty() {
            return Ok(Self::default());
        }

        let config: Config = toml::from_str(&content)
            .with_context(|| format!("Failed to parse config file: {:?}", path))?;

        Ok(config)
    }

    /// Load configuration from default path (./autoroute.toml)
    pub fn load_default() -> Result<Self> {
        Self::load(CONFIG_FILE)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.server.port, 3000);
        assert_eq!(config.server.host, "127.0.0.1");
        assert_eq!(config.server.addr(), "127.0.0.1:3000");
        assert_eq!(config.routing.routes_dir, "src/routes");
        assert_eq!(config.routing.prefix, None);
        assert_eq!(config.routing.extension, "rs");
    }

    #[test]
    fn test_empty_config() {
        let config = toml::from_str::<Config>("").unwrap_or_default();
        assert_eq!(config.server.port, 3000);
        assert_eq!(config.routing.routes_dir, "src/routes");
    }

    #[test]
    fn test_routing_section() {
        let toml = r#"
            [routing]
            routes_dir = "app/routes"
            prefix = "/api"
        "#;
        let config: Config = toml::from_str(toml).unwrap();
        assert_eq!(config.routing.routes_dir, "app/routes");
        assert_eq!(config.routing.prefix.as_deref(), Some("/api"));
        assert_eq!(config.routing.extension, "rs");

        let options = config.routing.mount_options(Some(PathBuf::from("/srv")));
        assert_eq!(options.prefix.as_deref(), Some("/api"));
        assert_eq!(options.base_dir, Some(PathBuf::from("/srv")));
    }

    #[test]
    fn test_load_missing_file_gives_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let config = Config::load(dir.path().join(CONFIG_FILE)).unwrap();
        assert_eq!(config.server.port, 3000);
    }

    #[test]
    fn test_load_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(CONFIG_FILE);
        let mut file = fs::File::create(&path).unwrap();
        writeln!(file, "[server]\nport = 8080\n\n[routing]\nprefix = \"/v1\"").unwrap();

        let config = Config::load(&path).unwrap();
        assert_eq!(config.server.port, 8080);
        assert_eq!(config.server.host, "127.0.0.1");
        assert_eq!(config.routing.prefix.as_deref(), Some("/v1"));
    }

    #[test]
    fn test_load_invalid_file_names_path() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(CONFIG_FILE);
        fs::write(&path, "[server]\nport = \"not a number\"").unwrap();

        let err = Config::load(&path).unwrap_err();
        assert!(format!("{err}").contains(CONFIG_FILE));
    }
}

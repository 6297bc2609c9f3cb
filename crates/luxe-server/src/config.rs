use std::net::SocketAddr;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{ServerError, ServerResult};

/// Server configuration. Every key is optional in a config file.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    pub bind_addr: SocketAddr,
    /// Start from the sample catalog instead of an empty one.
    pub seed_catalog: bool,
    /// Request body limit for create and update.
    pub max_body_bytes: usize,
    /// Answer cross-origin requests, for a storefront hosted elsewhere.
    pub allow_cors: bool,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind_addr: SocketAddr::from(([127, 0, 0, 1], 3000)),
            seed_catalog: true,
            max_body_bytes: 1024 * 1024,
            allow_cors: true,
        }
    }
}

impl ServerConfig {
    /// Parse a TOML document; missing keys take their defaults.
    pub fn from_toml_str(s: &str) -> ServerResult<Self> {
        toml::from_str(s).map_err(|e| ServerError::Config(e.to_string()))
    }

    /// Read and parse a TOML config file.
    pub fn load(path: impl AsRef<Path>) -> ServerResult<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)?;
        let config = Self::from_toml_str(&content)?;
        tracing::debug!(path = %path.display(), "loaded server config");
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn default_config() {
        let c = ServerConfig::default();
        assert_eq!(c.bind_addr, "127.0.0.1:3000".parse::<SocketAddr>().unwrap());
        assert!(c.seed_catalog);
        assert_eq!(c.max_body_bytes, 1024 * 1024);
        assert!(c.allow_cors);
    }

    #[test]
    fn empty_document_is_default() {
        assert_eq!(ServerConfig::from_toml_str("").unwrap(), ServerConfig::default());
    }

    #[test]
    fn partial_document_overrides_some_keys() {
        let c = ServerConfig::from_toml_str(
            r#"
            bind_addr = "0.0.0.0:8080"
            seed_catalog = false
            "#,
        )
        .unwrap();
        assert_eq!(c.bind_addr, "0.0.0.0:8080".parse::<SocketAddr>().unwrap());
        assert!(!c.seed_catalog);
        assert!(c.allow_cors);
    }

    #[test]
    fn invalid_document_is_config_error() {
        let err = ServerConfig::from_toml_str("bind_addr = 42").unwrap_err();
        assert!(matches!(err, ServerError::Config(_)));
    }

    #[test]
    fn load_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "max_body_bytes = 2048").unwrap();
        let c = ServerConfig::load(file.path()).unwrap();
        assert_eq!(c.max_body_bytes, 2048);
    }

    #[test]
    fn load_missing_file_is_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = ServerConfig::load(dir.path().join("absent.toml")).unwrap_err();
        assert!(matches!(err, ServerError::Io(_)));
    }
}

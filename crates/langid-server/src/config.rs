//! Server configuration

use axum::http::HeaderValue;
use langid_core::{Error, Result};
use serde::{Deserialize, Serialize};
use std::net::SocketAddr;
use std::path::{Path, PathBuf};

use crate::cli::Cli;

/// Server configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    /// Listen address
    #[serde(default = "default_listen")]
    pub listen: String,

    /// Listen port
    #[serde(default = "default_port")]
    pub port: u16,

    /// Trained model artifact
    #[serde(default = "default_model_path")]
    pub model_path: PathBuf,

    /// Fail startup instead of serving without a model
    #[serde(default)]
    pub strict_startup: bool,

    /// Cross-origin policy for the browser frontend
    #[serde(default)]
    pub cors: CorsConfig,
}

impl ServerConfig {
    /// Load configuration from file and CLI overrides
    pub fn load(config_path: &str, cli: &Cli) -> Result<Self> {
        // Try to load from file, or use defaults
        let mut config = if Path::new(config_path).exists() {
            let content = std::fs::read_to_string(config_path)?;
            serde_yaml::from_str(&content)?
        } else {
            Self::default()
        };

        config.apply_overrides(cli);
        config.validate()?;
        Ok(config)
    }

    /// Apply CLI overrides on top of file values
    pub fn apply_overrides(&mut self, cli: &Cli) {
        if let Some(listen) = &cli.listen {
            self.listen = listen.clone();
        }

        if let Some(port) = cli.port {
            self.port = port;
        }

        if let Some(model) = &cli.model {
            self.model_path = model.clone();
        }

        if let Some(strict) = cli.strict {
            self.strict_startup = strict;
        }
    }

    /// Reject settings the server cannot start with
    pub fn validate(&self) -> Result<()> {
        if self.model_path.as_os_str().is_empty() {
            return Err(Error::config("model_path must not be empty"));
        }
        self.socket_addr()?;
        self.cors.origin_values()?;
        Ok(())
    }

    /// Address to bind
    pub fn socket_addr(&self) -> Result<SocketAddr> {
        format!("{}:{}", self.listen, self.port)
            .parse()
            .map_err(|e| Error::config(format!("invalid listen address {}: {}", self.listen, e)))
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            listen: default_listen(),
            port: default_port(),
            model_path: default_model_path(),
            strict_startup: false,
            cors: CorsConfig::default(),
        }
    }
}

/// CORS configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CorsConfig {
    /// Origins allowed to call the API
    #[serde(default = "default_origins")]
    pub allowed_origins: Vec<String>,

    /// Send `Access-Control-Allow-Credentials: true`
    #[serde(default = "default_true")]
    pub allow_credentials: bool,
}

impl CorsConfig {
    /// Allowed origins as header values
    ///
    /// `*` is rejected: the layer only echoes listed origins, and a wildcard
    /// cannot be combined with credentials.
    pub fn origin_values(&self) -> Result<Vec<HeaderValue>> {
        self.allowed_origins
            .iter()
            .map(|origin| {
                if origin.trim() == "*" {
                    return Err(Error::config(
                        "wildcard CORS origin \"*\" is not supported; list origins explicitly",
                    ));
                }
                HeaderValue::from_str(origin)
                    .map_err(|e| Error::config(format!("invalid CORS origin {:?}: {}", origin, e)))
            })
            .collect()
    }
}

impl Default for CorsConfig {
    fn default() -> Self {
        Self {
            allowed_origins: default_origins(),
            allow_credentials: true,
        }
    }
}

fn default_listen() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    8000
}

fn default_model_path() -> PathBuf {
    PathBuf::from("model/trained_model.json")
}

fn default_origins() -> Vec<String> {
    // Vite dev server
    vec![
        "http://localhost:5173".to_string(),
        "http://127.0.0.1:5173".to_string(),
    ]
}

fn default_true() -> bool {
    true
}

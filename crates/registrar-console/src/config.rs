//! Console configuration.
//!
//! Read from `--config <path>` or `<config_dir>/registrar/config.toml`. A
//! missing file yields the defaults; `REGISTRAR_API_URL` overrides
//! `api.base_url` either way.
//!
//! ```toml
//! [api]
//! base_url = "http://localhost:8000/api"
//!
//! [session]
//! path = "/home/me/.local/share/registrar/session.json"
//!
//! [guard]
//! redirect = "login"
//! roles = ["registrar"]
//!
//! [log]
//! level = "info"
//! ```

use std::path::{Path, PathBuf};

use registrar_auth::{FileSessionStore, Guard, RedirectTarget, Role};
use registrar_client::ClientConfig;
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Environment variable overriding `api.base_url`.
pub const API_URL_ENV: &str = "REGISTRAR_API_URL";

/// Top-level configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ConsoleConfig {
    /// Records API location
    pub api: ClientConfig,
    /// Session persistence
    pub session: SessionConfig,
    /// Dashboard access
    pub guard: GuardConfig,
    /// Diagnostics
    pub log: LogConfig,
}

/// `[session]`
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SessionConfig {
    /// Session file; the platform data directory when unset
    pub path: Option<PathBuf>,
}

/// `[guard]`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GuardConfig {
    /// Where rejected visitors are sent
    pub redirect: RedirectTarget,
    /// Roles admitted to the registrar dashboard
    pub roles: Vec<String>,
}

impl Default for GuardConfig {
    fn default() -> Self {
        Self {
            redirect: RedirectTarget::default(),
            roles: vec![Role::Registrar.as_str().to_string()],
        }
    }
}

/// `[log]`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LogConfig {
    /// Filter used when `RUST_LOG` is unset
    pub level: String,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
        }
    }
}

impl ConsoleConfig {
    /// `<config_dir>/registrar/config.toml`, if the platform has one.
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("registrar").join("config.toml"))
    }

    /// The explicit path if given, else [`ConsoleConfig::default_path`].
    pub fn resolve_path(explicit: Option<&Path>) -> Option<PathBuf> {
        explicit.map(Path::to_path_buf).or_else(Self::default_path)
    }

    /// Load the configuration and apply the environment override.
    pub fn load(explicit: Option<&Path>) -> Result<Self> {
        let mut config = match Self::resolve_path(explicit) {
            Some(path) if path.exists() => Self::from_file(&path)?,
            Some(path) if explicit.is_some() => {
                return Err(Error::config(format!(
                    "Config file not found: {}",
                    path.display()
                )));
            }
            _ => Self::default(),
        };
        config.apply_api_url(std::env::var(API_URL_ENV).ok());
        Ok(config)
    }

    /// Parse a config file.
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| Error::io_with_path(e, path))?;
        Self::from_toml_str(&content)
            .map_err(|e| Error::config(format!("Failed to parse {}: {e}", path.display())))
    }

    /// Parse config from TOML text.
    pub fn from_toml_str(content: &str) -> Result<Self> {
        toml::from_str(content).map_err(|e| Error::config(e.to_string()))
    }

    /// Render as TOML.
    pub fn to_toml_string(&self) -> Result<String> {
        toml::to_string_pretty(self).map_err(|e| Error::config(e.to_string()))
    }

    /// Replace `api.base_url` with a non-empty override.
    pub fn apply_api_url(&mut self, url: Option<String>) {
        if let Some(url) = url.filter(|u| !u.trim().is_empty()) {
            tracing::debug!(%url, "API base URL overridden from environment");
            self.api.base_url = url;
        }
    }

    /// Where the session file lives.
    pub fn session_path(&self) -> Result<PathBuf> {
        match &self.session.path {
            Some(path) => Ok(path.clone()),
            None => Ok(FileSessionStore::default_path()?),
        }
    }

    /// The dashboard guard described by `[guard]`.
    pub fn guard(&self) -> Guard {
        Guard::new(&self.guard.roles).with_redirect(self.guard.redirect)
    }
}

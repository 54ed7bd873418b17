//! Client configuration parsing and validation.

use std::fs;
use std::os::unix::ffi::OsStrExt;
use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::{AppError, Result};

/// Control socket the daemon listens on when nothing else is configured.
pub const DEFAULT_SOCKET_PATH: &str = "/var/run/sfptpd-control-v1.sock";

/// Longest path that fits `sockaddr_un.sun_path` with its trailing NUL.
pub const MAX_SOCKET_PATH_LEN: usize = 107;

fn default_socket_path() -> PathBuf {
    PathBuf::from(DEFAULT_SOCKET_PATH)
}

/// Client configuration parsed from an optional TOML file.
///
/// ```toml
/// socket_path = "/var/run/sfptpd-control-v1.sock"
/// ```
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case", deny_unknown_fields)]
pub struct CtlConfig {
    /// Filesystem path of the daemon's datagram control socket.
    #[serde(default = "default_socket_path")]
    pub socket_path: PathBuf,
}

impl Default for CtlConfig {
    fn default() -> Self {
        Self {
            socket_path: default_socket_path(),
        }
    }
}

impl CtlConfig {
    /// Load and validate configuration from a TOML file path.
    ///
    /// # Errors
    ///
    /// Returns `AppError::Config` if the file cannot be read or contains
    /// invalid TOML, or if validation fails.
    pub fn load_from_path(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let raw = fs::read_to_string(path).map_err(|err| {
            AppError::Config(format!("failed to read config {}: {err}", path.display()))
        })?;
        Self::from_toml_str(&raw)
    }

    /// Parse configuration from a TOML string.
    ///
    /// # Errors
    ///
    /// Returns `AppError::Config` if parsing or validation fails.
    pub fn from_toml_str(raw: &str) -> Result<Self> {
        let config: Self = toml::from_str(raw)?;
        config.validate()?;
        Ok(config)
    }

    /// Replace the socket path, re-running validation.
    ///
    /// # Errors
    ///
    /// Returns `AppError::Config` if the new path is empty or too long.
    pub fn with_socket_path(mut self, socket_path: impl Into<PathBuf>) -> Result<Self> {
        self.socket_path = socket_path.into();
        self.validate()?;
        Ok(self)
    }

    /// Path of the daemon's control socket.
    #[must_use]
    pub fn socket_path(&self) -> &Path {
        &self.socket_path
    }

    fn validate(&self) -> Result<()> {
        let len = self.socket_path.as_os_str().as_bytes().len();
        if len == 0 {
            return Err(AppError::Config("socket_path must not be empty".into()));
        }
        if len > MAX_SOCKET_PATH_LEN {
            return Err(AppError::Config(format!(
                "socket_path is {len} bytes, longer than the {MAX_SOCKET_PATH_LEN} byte limit"
            )));
        }
        Ok(())
    }
}

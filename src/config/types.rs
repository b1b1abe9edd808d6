//! Configuration type definitions
//!
//! Core configuration structures for the daemon. All sections have serde
//! defaults so a partial (or empty) TOML file still deserializes.

use serde::{Deserialize, Serialize};

use crate::constants::listen;

/// Main daemon configuration
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Default)]
pub struct Config {
    /// Listener settings
    #[serde(default)]
    pub server: ServerConfig,
    /// Client authentication configuration
    #[serde(default)]
    pub auth: AuthConfig,
    /// Article spool location
    #[serde(default)]
    pub spool: SpoolConfig,
}

/// Listener settings
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct ServerConfig {
    /// Host/IP to bind to (default: 0.0.0.0)
    pub host: String,
    /// Port to listen on (default: 1119)
    pub port: u16,
    /// Number of worker threads (default: 1, use 0 for CPU cores)
    pub threads: usize,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: super::defaults::listen_host(),
            port: super::defaults::listen_port(),
            threads: super::defaults::worker_threads(),
        }
    }
}

impl ServerConfig {
    /// Default listen host (all interfaces)
    pub const DEFAULT_HOST: &'static str = listen::DEFAULT_HOST;
}

/// Client authentication configuration
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct AuthConfig {
    /// List of authorized users; an empty list disables authentication
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub users: Vec<UserCredentials>,
}

/// Individual user credentials
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct UserCredentials {
    pub username: String,
    pub password: String,
}

impl AuthConfig {
    /// Check if authentication is enabled
    #[must_use]
    pub fn is_enabled(&self) -> bool {
        !self.users.is_empty()
    }

    /// Owned (username, password) pairs for building a verifier
    #[must_use]
    pub fn credential_pairs(&self) -> Vec<(String, String)> {
        self.users
            .iter()
            .map(|u| (u.username.clone(), u.password.clone()))
            .collect()
    }
}

/// Article spool location
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct SpoolConfig {
    /// Directory the daemon creates at startup for article storage
    pub path: String,
}

impl Default for SpoolConfig {
    fn default() -> Self {
        Self {
            path: super::defaults::spool_path(),
        }
    }
}

//! Configuration loading from files and environment variables
//!
//! This module handles loading configuration from TOML files and environment variables,
//! with environment variables taking precedence for Docker/container deployments.

use anyhow::Result;

use super::types::{Config, UserCredentials};

/// Load client credentials from environment variables
///
/// Supports indexed environment variables for Docker/container deployments:
/// - `NNTP_USER_0`, `NNTP_PASS_0`
/// - `NNTP_USER_1`, `NNTP_PASS_1`
/// - etc.
///
/// Enumeration stops at the first missing `NNTP_USER_N`. A username without
/// a matching password is skipped with a warning.
fn load_users_from_env() -> Option<Vec<UserCredentials>> {
    let mut users = Vec::new();
    let mut index = 0;

    loop {
        let user_key = format!("NNTP_USER_{}", index);
        let username = match std::env::var(&user_key) {
            Ok(u) => u,
            Err(_) => break,
        };

        let pass_key = format!("NNTP_PASS_{}", index);
        match std::env::var(&pass_key) {
            Ok(password) => users.push(UserCredentials { username, password }),
            Err(_) => {
                tracing::warn!("{} is set but {} is missing, skipping user", user_key, pass_key);
            }
        }

        index += 1;
    }

    if users.is_empty() { None } else { Some(users) }
}

/// Load configuration from a TOML file, with environment variable overrides
///
/// Environment variables for client credentials take precedence over the
/// config file:
/// - `NNTP_USER_0`, `NNTP_PASS_0`
/// - `NNTP_USER_1`, `NNTP_PASS_1`
/// - etc.
///
/// This allows Docker/container deployments to supply credentials without
/// modifying the config file.
pub fn load_config(config_path: &str) -> Result<Config> {
    let config_content = std::fs::read_to_string(config_path)
        .map_err(|e| anyhow::anyhow!("Failed to read config file '{}': {}", config_path, e))?;

    let mut config: Config = toml::from_str(&config_content)
        .map_err(|e| anyhow::anyhow!("Failed to parse config file '{}': {}", config_path, e))?;

    // Check for environment variable credential overrides
    if let Some(env_users) = load_users_from_env() {
        tracing::info!(
            "Using {} client credential(s) from environment variables (overriding config file)",
            env_users.len()
        );
        config.auth.users = env_users;
    }

    // Validate the loaded configuration
    config.validate()?;

    Ok(config)
}

/// Create a default configuration for first-run and tests
#[must_use]
pub fn create_default_config() -> Config {
    Config::default()
}

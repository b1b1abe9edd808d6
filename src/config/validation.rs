//! Configuration validation
//!
//! This module provides validation logic for the configuration to ensure
//! all settings are valid before the daemon starts.

use anyhow::Result;

use super::types::{Config, UserCredentials};

impl Config {
    /// Validate configuration for correctness
    ///
    /// Checks:
    /// - Listen host is non-blank and port is non-zero
    /// - Spool path is non-blank
    /// - Every configured user has a non-blank username and password
    pub fn validate(&self) -> Result<()> {
        if self.server.host.trim().is_empty() {
            return Err(anyhow::anyhow!("server.host must not be blank"));
        }

        if self.server.port == 0 {
            return Err(anyhow::anyhow!("server.port must be non-zero"));
        }

        if self.spool.path.trim().is_empty() {
            return Err(anyhow::anyhow!("spool.path must not be blank"));
        }

        for user in &self.auth.users {
            validate_user(user)?;
        }

        Ok(())
    }
}

/// Validate a single credential entry
fn validate_user(user: &UserCredentials) -> Result<()> {
    if user.username.trim().is_empty() {
        return Err(anyhow::anyhow!(
            "auth.users entries must have a non-blank username"
        ));
    }

    if user.password.trim().is_empty() {
        return Err(anyhow::anyhow!(
            "auth user '{}' must have a non-blank password",
            user.username
        ));
    }

    Ok(())
}

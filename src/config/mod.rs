//! Configuration module
//!
//! This module handles all configuration types and loading
//! for the NNTP daemon.

mod defaults;
mod loading;
mod types;
mod validation;

// Re-export public types
pub use loading::{create_default_config, load_config};
pub use types::{AuthConfig, Config, ServerConfig, SpoolConfig, UserCredentials};

//! Default values for configuration fields
//!
//! This module centralizes all default value functions used in serde deserialization.

use crate::constants::listen;

/// Default listen host (all interfaces)
#[inline]
pub fn listen_host() -> String {
    listen::DEFAULT_HOST.to_string()
}

/// Default listen port
#[inline]
pub fn listen_port() -> u16 {
    listen::DEFAULT_PORT
}

/// Default worker thread count (single-threaded runtime)
#[inline]
pub fn worker_threads() -> usize {
    1
}

/// Default spool directory, relative to the working directory
#[inline]
pub fn spool_path() -> String {
    "spool".to_string()
}

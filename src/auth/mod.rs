//! Client authentication
//!
//! The session consults a [`CredentialVerifier`] when a USER/PASS pair
//! completes; [`StaticCredentials`] is the config-backed implementation.

mod verifier;

pub use verifier::{CredentialVerifier, StaticCredentials};

//! Client credential verification

use std::collections::HashMap;
use std::sync::Arc;

use crate::types::{Password, Username, ValidationError};

/// Checks credentials during the AUTHINFO exchange.
///
/// A session owns at most one verifier at a time and consults it when the
/// password of a USER/PASS pair arrives. Where credentials live is the
/// implementation's concern; the session only needs a yes or no.
pub trait CredentialVerifier: Send {
    /// Returns true when the pair names a known client.
    fn check(&self, username: &str, password: &str) -> bool;
}

/// Verifier backed by an in-memory username → password map.
///
/// The map is built once from configuration and shared between sessions;
/// each session still holds its own boxed verifier. An empty map rejects
/// every pair.
#[derive(Clone)]
pub struct StaticCredentials {
    users: Arc<HashMap<String, String>>,
}

impl std::fmt::Debug for StaticCredentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("StaticCredentials")
            .field("user_count", &self.users.len())
            .finish_non_exhaustive()
    }
}

impl StaticCredentials {
    /// Build a verifier from credential pairs, validating each one.
    ///
    /// # Errors
    /// Returns `Err` if any username or password is empty or whitespace-only.
    /// A typo in the config must fail loudly here instead of producing a
    /// user nobody can match.
    pub fn new(user_list: Vec<(String, String)>) -> Result<Self, ValidationError> {
        let mut users = HashMap::new();

        for (u, p) in user_list {
            let username = Username::new(u)?;
            let password = Password::new(p)?;
            users.insert(username.into_inner(), password.into_inner());
        }

        Ok(Self {
            users: Arc::new(users),
        })
    }

    /// Number of known users.
    #[must_use]
    pub fn user_count(&self) -> usize {
        self.users.len()
    }
}

impl CredentialVerifier for StaticCredentials {
    fn check(&self, username: &str, password: &str) -> bool {
        self.users
            .get(username)
            .is_some_and(|stored| stored == password)
    }
}

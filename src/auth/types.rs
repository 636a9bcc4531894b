//! Auth configuration types

use std::fmt;

/// HTTP Basic credentials
#[derive(Clone, PartialEq, Eq)]
pub struct AuthConfig {
    /// Username (account e-mail on Confluence Cloud)
    pub username: String,
    /// Password or API token
    pub password: String,
}

impl AuthConfig {
    /// Create a Basic auth config
    pub fn basic(username: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            password: password.into(),
        }
    }
}

// Keeps tokens out of `{:?}` output and therefore out of logs.
impl fmt::Debug for AuthConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AuthConfig")
            .field("username", &self.username)
            .field("password", &"***")
            .finish()
    }
}

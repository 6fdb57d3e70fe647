use serde::{Deserialize, Serialize};

/// An account as this core sees it: identity, a login name, and an opaque
/// credential. Users are created at signup, outside this crate, and are
/// read-only here.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: String,
    pub username: String,
    /// Opaque credential; never inspected or validated by this crate.
    pub password: String,
}

impl User {
    pub fn new(
        id: impl Into<String>,
        username: impl Into<String>,
        password: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            username: username.into(),
            password: password.into(),
        }
    }
}

/// The one canonical form used for username lookups, everywhere.
/// Every repository implementation must index usernames through this.
pub fn normalize_username(username: &str) -> String {
    username.trim().to_lowercase()
}

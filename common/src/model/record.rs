use serde::{Deserialize, Serialize};

/// A user matched by `GET /api/authorizations?username=...`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Record {
    pub username: String,
    /// Shim keys this user has already authorized.
    #[serde(default)]
    pub auths: Vec<String>,
}

impl Record {
    pub fn new(username: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            auths: Vec::new(),
        }
    }

    pub fn is_authorized(&self, shim_key: &str) -> bool {
        self.auths.iter().any(|auth| auth == shim_key)
    }
}

use serde::{Deserialize, Serialize};

/// Body of `GET /api/authorize/{shimKey}?username=...`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AuthorizationResponse {
    /// Third-party consent page the popup is pointed at.
    pub authorization_url: String,
}

//! String keys addressing per-panel UI state.
//!
//! Keys are plain `-` joined concatenations. Usernames, shim keys and endpoint
//! names are assumed not to contain the separator, which keeps the mapping
//! injective. Keys are never sent to the server.

use std::fmt;

use crate::panels::Region;

const SEPARATOR: &str = "-";

/// Identifies the state of one `(username, shimKey, endpoint)` data panel.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct RequestKey(String);

impl RequestKey {
    pub fn derive(username: &str, shim_key: &str, endpoint: &str) -> Self {
        Self([username, shim_key, endpoint].join(SEPARATOR))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// DOM id of the element rendering `region` for this key.
    pub fn region_id(&self, region: Region) -> String {
        let prefix = match region {
            Region::Error => "shim-error",
            Region::Loading => "shim-spinner",
            Region::Results => "shim-results",
        };
        format!("{}-{}", prefix, self.0)
    }

    pub fn from_date_id(&self) -> String {
        format!("fromDate-{}", self.0)
    }

    pub fn to_date_id(&self) -> String {
        format!("toDate-{}", self.0)
    }
}

impl fmt::Display for RequestKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Identifies the collapsible endpoint panel of one `(username, shimKey)` pair.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct PanelKey(String);

impl PanelKey {
    pub fn derive(username: &str, shim_key: &str) -> Self {
        Self([username, shim_key].join(SEPARATOR))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn element_id(&self) -> String {
        format!("shim-panel-{}", self.0)
    }
}

impl fmt::Display for PanelKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn derivation_is_deterministic() {
        assert_eq!(
            RequestKey::derive("alice", "fitbit", "steps"),
            RequestKey::derive("alice", "fitbit", "steps")
        );
        assert_eq!(
            RequestKey::derive("alice", "fitbit", "steps").as_str(),
            "alice-fitbit-steps"
        );
    }

    #[test]
    fn distinct_triples_do_not_collide() {
        let users = ["alice", "bob", "carol"];
        let shims = ["fitbit", "jawbone", "withings"];
        let endpoints = ["steps", "sleep", "weight"];

        let mut seen = HashSet::new();
        for user in users {
            for shim in shims {
                for endpoint in endpoints {
                    assert!(seen.insert(RequestKey::derive(user, shim, endpoint)));
                }
            }
        }
        assert_eq!(seen.len(), 27);
    }

    #[test]
    fn element_ids_follow_region_prefixes() {
        let key = RequestKey::derive("alice", "fitbit", "steps");
        assert_eq!(key.region_id(Region::Error), "shim-error-alice-fitbit-steps");
        assert_eq!(key.region_id(Region::Loading), "shim-spinner-alice-fitbit-steps");
        assert_eq!(key.region_id(Region::Results), "shim-results-alice-fitbit-steps");
        assert_eq!(key.from_date_id(), "fromDate-alice-fitbit-steps");
        assert_eq!(key.to_date_id(), "toDate-alice-fitbit-steps");
    }

    #[test]
    fn display_matches_raw_key() {
        let key = RequestKey::derive("alice", "fitbit", "steps");
        assert_eq!(key.to_string(), key.as_str());

        let panel = PanelKey::derive("alice", "fitbit");
        assert_eq!(panel.to_string(), "alice-fitbit");
        assert_eq!(panel.as_str(), "alice-fitbit");
    }

    #[test]
    fn panel_key_addresses_panel_element() {
        assert_eq!(
            PanelKey::derive("alice", "fitbit").element_id(),
            "shim-panel-alice-fitbit"
        );
    }
}

use serde::{Deserialize, Serialize};

/// One entry of the shim server registry (`GET /api/registry`).
///
/// The registry response replaces the whole directory on every load, so a
/// `Shim` is never patched in place.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Shim {
    /// Unique key used in `/api/authorize/{shimKey}` and `/api/data/{shimKey}/...`.
    pub shim_key: String,
    /// Human readable name. Older registries omit it.
    #[serde(default)]
    pub label: Option<String>,
    /// Data endpoints the shim exposes, e.g. `steps` or `sleep`.
    #[serde(default, alias = "endPoints")]
    pub endpoints: Vec<String>,
}

impl Shim {
    pub fn display_name(&self) -> &str {
        self.label
            .as_deref()
            .filter(|label| !label.is_empty())
            .unwrap_or(&self.shim_key)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_registry_entry() {
        let shims: Vec<Shim> = serde_json::from_str(
            r#"[{"shimKey":"fitbit","label":"Fitbit","endpoints":["steps","sleep"]}]"#,
        )
        .unwrap();

        assert_eq!(shims.len(), 1);
        assert_eq!(shims[0].shim_key, "fitbit");
        assert_eq!(shims[0].display_name(), "Fitbit");
        assert_eq!(shims[0].endpoints, vec!["steps", "sleep"]);
    }

    #[test]
    fn accepts_legacy_endpoint_field_and_missing_label() {
        let shim: Shim =
            serde_json::from_str(r#"{"shimKey":"jawbone","endPoints":["body"]}"#).unwrap();

        assert_eq!(shim.display_name(), "jawbone");
        assert_eq!(shim.endpoints, vec!["body"]);
    }
}

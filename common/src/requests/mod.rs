//! Construction of the shim server requests consumed by the console.
//!
//! All four endpoints are plain GETs with path and query parameters only.
//! Query values are form-encoded; path segments are used as-is since shim
//! keys and endpoint names are identifiers.

use url::form_urlencoded;

use crate::window::DateWindow;

/// A GET request against the shim server API.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ApiRequest<'a> {
    /// `GET /api/registry`
    Registry,
    /// `GET /api/authorizations?username=...`
    Authorizations { username: &'a str },
    /// `GET /api/authorize/{shimKey}?username=...`
    Authorize { shim_key: &'a str, username: &'a str },
    /// `GET /api/data/{shimKey}/{endpoint}?username=...&dateStart=...&dateEnd=...[&normalize=true]`
    Data {
        shim_key: &'a str,
        endpoint: &'a str,
        username: &'a str,
        window: &'a DateWindow,
        normalize: bool,
    },
}

impl ApiRequest<'_> {
    pub fn path(&self) -> String {
        match self {
            Self::Registry => "/api/registry".to_string(),
            Self::Authorizations { .. } => "/api/authorizations".to_string(),
            Self::Authorize { shim_key, .. } => format!("/api/authorize/{}", shim_key),
            Self::Data {
                shim_key, endpoint, ..
            } => format!("/api/data/{}/{}", shim_key, endpoint),
        }
    }

    /// Query pairs in wire order. `normalize` is omitted entirely unless requested.
    pub fn query(&self) -> Vec<(&'static str, &str)> {
        match self {
            Self::Registry => Vec::new(),
            Self::Authorizations { username } | Self::Authorize { username, .. } => {
                vec![("username", *username)]
            }
            Self::Data {
                username,
                window,
                normalize,
                ..
            } => {
                let mut query = vec![
                    ("username", *username),
                    ("dateStart", window.start.as_str()),
                    ("dateEnd", window.end.as_str()),
                ];
                if *normalize {
                    query.push(("normalize", "true"));
                }
                query
            }
        }
    }

    /// Full request URL relative to `api_base` (empty for same-origin).
    pub fn url(&self, api_base: &str) -> String {
        let mut url = format!("{}{}", api_base.trim_end_matches('/'), self.path());
        let query = self.query();
        if !query.is_empty() {
            let encoded = form_urlencoded::Serializer::new(String::new())
                .extend_pairs(query)
                .finish();
            url.push('?');
            url.push_str(&encoded);
        }
        url
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn window() -> DateWindow {
        DateWindow {
            start: "2026-10-16".into(),
            end: "2026-10-19".into(),
        }
    }

    #[test]
    fn registry_has_no_query() {
        assert_eq!(ApiRequest::Registry.url(""), "/api/registry");
    }

    #[test]
    fn api_base_is_prefixed_without_double_slash() {
        assert_eq!(
            ApiRequest::Registry.url("http://localhost:8083/"),
            "http://localhost:8083/api/registry"
        );
    }

    #[test]
    fn empty_username_is_still_sent() {
        assert_eq!(
            ApiRequest::Authorizations { username: "" }.url(""),
            "/api/authorizations?username="
        );
    }

    #[test]
    fn authorize_puts_shim_in_path() {
        let request = ApiRequest::Authorize {
            shim_key: "fitbit",
            username: "alice",
        };
        assert_eq!(request.url(""), "/api/authorize/fitbit?username=alice");
    }

    #[test]
    fn data_request_omits_normalize_when_false() {
        let window = window();
        let url = ApiRequest::Data {
            shim_key: "fitbit",
            endpoint: "steps",
            username: "alice",
            window: &window,
            normalize: false,
        }
        .url("");

        assert_eq!(
            url,
            "/api/data/fitbit/steps?username=alice&dateStart=2026-10-16&dateEnd=2026-10-19"
        );
        assert!(!url.contains("normalize"));
    }

    #[test]
    fn data_request_appends_normalize_when_true() {
        let window = window();
        let url = ApiRequest::Data {
            shim_key: "fitbit",
            endpoint: "steps",
            username: "alice",
            window: &window,
            normalize: true,
        }
        .url("");

        assert!(url.ends_with("&normalize=true"));
        assert_eq!(url.matches("normalize").count(), 1);
    }

    #[test]
    fn query_values_are_form_encoded() {
        assert_eq!(
            ApiRequest::Authorizations { username: "a&b" }.url(""),
            "/api/authorizations?username=a%26b"
        );
    }
}

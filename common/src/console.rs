//! The console workflow controller.
//!
//! `Console` owns the state shared between flows (registry, matched records
//! and the active search term) and runs the four operator flows against a
//! [`Transport`]. Everything runs on one thread; state lives in `RefCell`s and
//! no borrow is held across an `.await`.
//!
//! Failure policy
//! - registry, lookup and authorization URL failures are logged only and leave
//!   the visible state untouched;
//! - data fetch failures are logged and rendered in the panel's error region.
//!
//! Nothing is retried.

use std::cell::RefCell;

use chrono::NaiveDate;
use log::{debug, error, info};
use serde_json::Value;

use crate::config::ConsoleConfig;
use crate::error::FetchError;
use crate::keys::RequestKey;
use crate::model::authorization::AuthorizationResponse;
use crate::model::record::Record;
use crate::model::shim::Shim;
use crate::panels::{Region, RegionSink, RegionUpdate};
use crate::popup::{PopupFeatures, PopupOpener, PopupSession, Ticker};
use crate::requests::ApiRequest;
use crate::transport::Transport;
use crate::window::DateWindow;

/// Parameters of one data pull for a `(record, shim, endpoint)` panel.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DataQuery {
    pub username: String,
    pub shim_key: String,
    pub endpoint: String,
    pub normalize: bool,
    pub from_date: Option<String>,
    pub to_date: Option<String>,
}

impl DataQuery {
    pub fn new(record: &Record, shim_key: &str, endpoint: &str, normalize: bool) -> Self {
        Self {
            username: record.username.clone(),
            shim_key: shim_key.to_string(),
            endpoint: endpoint.to_string(),
            normalize,
            from_date: None,
            to_date: None,
        }
    }

    pub fn with_dates(mut self, from_date: Option<String>, to_date: Option<String>) -> Self {
        self.from_date = from_date;
        self.to_date = to_date;
        self
    }

    pub fn key(&self) -> RequestKey {
        RequestKey::derive(&self.username, &self.shim_key, &self.endpoint)
    }
}

pub struct Console<T> {
    transport: T,
    config: ConsoleConfig,
    shims: RefCell<Vec<Shim>>,
    records: RefCell<Vec<Record>>,
    search_term: RefCell<String>,
}

impl<T: Transport> Console<T> {
    pub fn new(transport: T, config: ConsoleConfig) -> Self {
        Self {
            transport,
            config,
            shims: RefCell::new(Vec::new()),
            records: RefCell::new(Vec::new()),
            search_term: RefCell::new(String::new()),
        }
    }

    pub fn config(&self) -> &ConsoleConfig {
        &self.config
    }

    pub fn shims(&self) -> Vec<Shim> {
        self.shims.borrow().clone()
    }

    pub fn records(&self) -> Vec<Record> {
        self.records.borrow().clone()
    }

    pub fn search_term(&self) -> String {
        self.search_term.borrow().clone()
    }

    pub fn set_search_term(&self, term: impl Into<String>) {
        *self.search_term.borrow_mut() = term.into();
    }

    /// Replaces the shim directory with the registry contents.
    pub async fn load_shims(&self) -> Result<(), FetchError> {
        let url = ApiRequest::Registry.url(&self.config.api_base);
        match self.transport.get_json::<Vec<Shim>>(&url).await {
            Ok(shims) => {
                *self.shims.borrow_mut() = shims;
                Ok(())
            }
            Err(e) => {
                error!("Error querying the registry, status {}: {}", e.status(), e);
                Err(e)
            }
        }
    }

    /// Looks up records matching `fragment` (trimmed) and replaces the
    /// visible set. An empty fragment is sent as-is.
    pub async fn lookup(&self, fragment: &str) -> Result<(), FetchError> {
        let url = ApiRequest::Authorizations {
            username: fragment.trim(),
        }
        .url(&self.config.api_base);
        match self.transport.get_json::<Vec<Record>>(&url).await {
            Ok(records) => {
                *self.records.borrow_mut() = records;
                Ok(())
            }
            Err(e) => {
                error!("Error doing lookup, status {}: {}", e.status(), e);
                Err(e)
            }
        }
    }

    /// Runs [`Console::lookup`] with the active search term.
    pub async fn lookup_current(&self) -> Result<(), FetchError> {
        let term = self.search_term();
        self.lookup(&term).await
    }

    /// Authorizes `shim_key` for `record` through a consent popup.
    ///
    /// Resolves once the popup has been closed and the records have been
    /// looked up again with whatever search term is active at that moment.
    /// Only a failure to obtain the authorization URL is returned; the
    /// follow-up lookup logs its own failures.
    pub async fn authorize<O, K>(
        &self,
        opener: &O,
        ticker: K,
        record: &Record,
        shim_key: &str,
    ) -> Result<(), FetchError>
    where
        O: PopupOpener,
        K: Ticker,
    {
        let url = ApiRequest::Authorize {
            shim_key,
            username: &record.username,
        }
        .url(&self.config.api_base);

        let response = match self.transport.get_json::<AuthorizationResponse>(&url).await {
            Ok(response) => response,
            Err(e) => {
                error!(
                    "Error requesting authorization URL for {}, status {}: {}",
                    shim_key,
                    e.status(),
                    e
                );
                return Err(e);
            }
        };
        info!("Retrieved authorization URL: {}", response.authorization_url);

        let features = PopupFeatures::centered(
            opener.screen_size(),
            self.config.popup_width,
            self.config.popup_height,
        );
        let mut session = PopupSession::new();
        session.open(opener, &response.authorization_url, &features);
        session.watch(ticker).await;

        // `lookup` already logged the failure; the stale records stay visible.
        if let Err(e) = self.lookup_current().await {
            debug!("Post-authorization lookup for {} failed: {}", shim_key, e);
        }
        Ok(())
    }

    /// Fetches one endpoint's data and drives the panel regions of its key.
    ///
    /// Before the request: error and results hidden, loading shown. On
    /// success the pretty-printed body is shown; on failure the diagnostic is
    /// shown in the error region while results stay hidden.
    pub async fn fetch_data<S: RegionSink>(
        &self,
        sink: &S,
        query: &DataQuery,
        today: NaiveDate,
    ) -> Result<String, FetchError> {
        let key = query.key();
        let window = DateWindow::resolve(
            query.from_date.as_deref(),
            query.to_date.as_deref(),
            today,
        );

        sink.apply(&key, RegionUpdate::Hide(Region::Error));
        sink.apply(&key, RegionUpdate::Hide(Region::Results));
        sink.apply(&key, RegionUpdate::Show(Region::Loading));

        let url = ApiRequest::Data {
            shim_key: &query.shim_key,
            endpoint: &query.endpoint,
            username: &query.username,
            window: &window,
            normalize: query.normalize,
        }
        .url(&self.config.api_base);
        info!("The URL to be used for {} is: {}", key, url);

        let rendered = self
            .transport
            .get_json::<Value>(&url)
            .await
            .and_then(|body| {
                serde_json::to_string_pretty(&body).map_err(|e| FetchError::Decode(e.to_string()))
            });

        match rendered {
            Ok(pretty) => {
                sink.apply(&key, RegionUpdate::SetContent(Region::Results, pretty.clone()));
                sink.apply(&key, RegionUpdate::Hide(Region::Loading));
                sink.apply(&key, RegionUpdate::Show(Region::Results));
                Ok(pretty)
            }
            Err(e) => {
                let message = fetch_error_message(&e);
                error!("{} ({})", message, e);
                sink.apply(&key, RegionUpdate::Show(Region::Error));
                sink.apply(&key, RegionUpdate::SetContent(Region::Error, message));
                sink.apply(&key, RegionUpdate::Hide(Region::Loading));
                Err(e)
            }
        }
    }
}

/// Operator-facing text for a failed data pull.
pub fn fetch_error_message(error: &FetchError) -> String {
    match error {
        FetchError::Decode(reason) => {
            format!("Error, could not read the data returned by the server: {}", reason)
        }
        _ => format!(
            "Error, could not get data from server: status {}",
            error.status()
        ),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn query_key_matches_panel_triple() {
        let query = DataQuery::new(&Record::new("alice"), "fitbit", "steps", true);
        assert_eq!(query.key().as_str(), "alice-fitbit-steps");
    }

    #[test]
    fn error_message_embeds_status() {
        assert_eq!(
            fetch_error_message(&FetchError::Status(500)),
            "Error, could not get data from server: status 500"
        );
        assert!(fetch_error_message(&FetchError::Network("refused".into())).contains("status 0"));
    }

    #[test]
    fn undecodable_body_is_not_reported_as_server_failure() {
        let message = fetch_error_message(&FetchError::Decode("expected value".into()));
        assert_eq!(
            message,
            "Error, could not read the data returned by the server: expected value"
        );
        assert!(!message.contains("status"));
    }
}

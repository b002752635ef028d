//! Browser implementations of the console collaborators.
//!
//! - `GlooTransport`: GETs through `gloo-net`, non-2xx mapped to `FetchError::Status`.
//! - `BrowserPopupOpener` / `BrowserPopup`: `window.open` and the returned window handle.
//! - `TimeoutTicker`: one `gloo-timers` timeout per polling interval.

use std::time::Duration;

use chrono::NaiveDate;
use common::error::{FetchError, ProbeError};
use common::popup::{PopupFeatures, PopupOpener, PopupWindow, ScreenSize, Ticker};
use common::transport::Transport;
use gloo_net::http::Request;
use gloo_timers::future::TimeoutFuture;
use log::warn;
use serde::de::DeserializeOwned;
use wasm_bindgen::JsValue;

const POPUP_TARGET: &str = "_blank";

pub struct GlooTransport;

impl Transport for GlooTransport {
    async fn get_json<T: DeserializeOwned>(&self, url: &str) -> Result<T, FetchError> {
        let response = Request::get(url)
            .send()
            .await
            .map_err(|e| FetchError::Network(e.to_string()))?;

        if !response.ok() {
            return Err(FetchError::Status(response.status()));
        }

        response
            .json::<T>()
            .await
            .map_err(|e| FetchError::Decode(e.to_string()))
    }
}

pub struct BrowserPopup(web_sys::Window);

impl PopupWindow for BrowserPopup {
    fn is_closed(&self) -> Result<bool, ProbeError> {
        self.0.closed().map_err(probe_error)
    }

    fn focus(&self) -> Result<(), ProbeError> {
        self.0.focus().map_err(probe_error)
    }
}

pub struct BrowserPopupOpener;

impl PopupOpener for BrowserPopupOpener {
    type Window = BrowserPopup;

    fn screen_size(&self) -> ScreenSize {
        let screen = web_sys::window().and_then(|window| window.screen().ok());
        ScreenSize {
            width: screen.as_ref().and_then(|s| s.width().ok()).unwrap_or(0),
            height: screen.as_ref().and_then(|s| s.height().ok()).unwrap_or(0),
        }
    }

    fn open(&self, url: &str, features: &PopupFeatures) -> Option<BrowserPopup> {
        let window = web_sys::window()?;
        match window.open_with_url_and_target_and_features(url, POPUP_TARGET, &features.to_string())
        {
            Ok(popup) => popup.map(BrowserPopup),
            Err(e) => {
                warn!("window.open failed: {:?}", e);
                None
            }
        }
    }
}

pub struct TimeoutTicker {
    period_ms: u32,
}

impl TimeoutTicker {
    pub fn new(period: Duration) -> Self {
        Self {
            period_ms: u32::try_from(period.as_millis()).unwrap_or(u32::MAX),
        }
    }
}

impl Ticker for TimeoutTicker {
    async fn tick(&mut self) {
        TimeoutFuture::new(self.period_ms).await;
    }
}

/// The operator's local calendar date.
pub fn today() -> NaiveDate {
    let now = js_sys::Date::new_0();
    NaiveDate::from_ymd_opt(now.get_full_year() as i32, now.get_month() + 1, now.get_date())
        .unwrap_or_default()
}

fn probe_error(value: JsValue) -> ProbeError {
    ProbeError(format!("{:?}", value))
}

//! Popup completion watcher.
//!
//! A consent page opened cross-origin gives no reliable completion signal, so
//! the console watches the popup instead: once it is gone (never opened, or
//! closed by the user) the authorization is considered finished.
//!
//! ```text
//! Idle --open--> Opened --watch--> Watching --closed--> Completed
//! ```
//!
//! Probe failures are swallowed and read as "still open"; the check across
//! windows is known to be flaky and must not abort the watch. There is no
//! timeout: a popup nobody closes is polled forever.

use std::fmt;

use log::{debug, warn};

use crate::error::ProbeError;

/// Handle to an opened popup window.
pub trait PopupWindow {
    fn is_closed(&self) -> Result<bool, ProbeError>;
    fn focus(&self) -> Result<(), ProbeError>;
}

/// Opens popup windows and reports the screen they are centered on.
pub trait PopupOpener {
    type Window: PopupWindow;

    fn screen_size(&self) -> ScreenSize;

    /// Returns `None` when the popup could not be obtained, e.g. it was blocked.
    fn open(&self, url: &str, features: &PopupFeatures) -> Option<Self::Window>;
}

/// Recurring timer driving the watcher, one per session.
#[allow(async_fn_in_trait)]
pub trait Ticker {
    /// Resolves after one polling interval.
    async fn tick(&mut self);
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScreenSize {
    pub width: i32,
    pub height: i32,
}

/// Window features of the authorization popup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PopupFeatures {
    pub width: u32,
    pub height: u32,
    pub left: i32,
    pub top: i32,
    pub resizable: bool,
    pub scrollbars: bool,
}

impl PopupFeatures {
    /// A fixed-size, non-resizable, scrollable popup centered on `screen`.
    pub fn centered(screen: ScreenSize, width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            left: screen.width / 2 - width as i32 / 2,
            top: screen.height / 2 - height as i32 / 2,
            resizable: false,
            scrollbars: true,
        }
    }
}

impl fmt::Display for PopupFeatures {
    /// Renders the `window.open` features string.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "resizable={},scrollbars={},width={},height={},left={},top={}",
            u8::from(self.resizable),
            u8::from(self.scrollbars),
            self.width,
            self.height,
            self.left,
            self.top
        )
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WatchState {
    Idle,
    Opened,
    Watching,
    Completed,
}

/// One authorization popup and its polling state.
///
/// Owned by a single authorization flow invocation and consumed by
/// [`PopupSession::watch`], so a session can complete at most once.
pub struct PopupSession<W> {
    window: Option<W>,
    state: WatchState,
}

impl<W: PopupWindow> Default for PopupSession<W> {
    fn default() -> Self {
        Self::new()
    }
}

impl<W: PopupWindow> PopupSession<W> {
    /// A session with no popup yet.
    pub fn new() -> Self {
        Self {
            window: None,
            state: WatchState::Idle,
        }
    }

    /// Opens `url` in a popup and enters `Opened`. A blocked popup still
    /// opens the session; its first probe then reports it closed.
    ///
    /// Sessions are single use: anything but an `Idle` session is left as is.
    pub fn open<O>(&mut self, opener: &O, url: &str, features: &PopupFeatures)
    where
        O: PopupOpener<Window = W>,
    {
        if self.state != WatchState::Idle {
            return;
        }
        self.window = opener.open(url, features);
        if self.window.is_none() {
            warn!("Authorization popup could not be opened for {}", url);
        }
        self.state = WatchState::Opened;
    }

    pub fn state(&self) -> WatchState {
        self.state
    }

    /// Enters `Watching` and brings the popup to the front.
    pub fn start_watching(&mut self) {
        if self.state != WatchState::Opened {
            return;
        }
        self.state = WatchState::Watching;

        match &self.window {
            Some(window) => {
                if let Err(e) = window.focus() {
                    debug!("Ignoring popup focus failure: {}", e);
                }
            }
            None => debug!("No popup handle to focus"),
        }
    }

    /// Runs one probe. Returns `true` exactly once, on the check that first
    /// sees the popup missing or closed.
    pub fn check(&mut self) -> bool {
        if self.state != WatchState::Watching {
            return false;
        }

        let closed = match &self.window {
            None => true,
            Some(window) => match window.is_closed() {
                Ok(closed) => closed,
                Err(e) => {
                    debug!("Treating popup as open after probe failure: {}", e);
                    false
                }
            },
        };

        if closed {
            self.state = WatchState::Completed;
            self.window = None;
        }
        closed
    }

    /// Polls once per tick until the popup is closed.
    ///
    /// Resolving this future is the completion signal; it happens on the same
    /// tick that observed the closure and the ticker is dropped with it.
    pub async fn watch<K: Ticker>(mut self, mut ticker: K) {
        self.start_watching();
        if self.state != WatchState::Watching {
            return;
        }
        loop {
            ticker.tick().await;
            if self.check() {
                return;
            }
        }
    }
}

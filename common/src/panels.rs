//! Per-panel UI state addressed by [`RequestKey`] and [`PanelKey`].
//!
//! The data retrieval flow never touches rendering directly. It emits
//! [`RegionUpdate`]s through a [`RegionSink`]; the view keeps one
//! [`PanelState`] per key and applies them in order.

use std::collections::HashSet;
use std::time::Duration;

use crate::keys::{PanelKey, RequestKey};

/// Duration of the endpoint panel slide animation.
pub const PANEL_SLIDE: Duration = Duration::from_millis(250);

/// The three regions of a data panel the retrieval flow drives.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Region {
    Error,
    Loading,
    Results,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RegionUpdate {
    Show(Region),
    Hide(Region),
    SetContent(Region, String),
}

/// Receives region updates for a key. Implemented by the view layer.
pub trait RegionSink {
    fn apply(&self, key: &RequestKey, update: RegionUpdate);
}

/// View model of one `(username, shimKey, endpoint)` panel.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PanelState {
    pub error_visible: bool,
    pub error_message: String,
    pub loading_visible: bool,
    pub results_visible: bool,
    pub results: String,
    /// Raw value of the "from" date input; empty means default.
    pub from_date: String,
    /// Raw value of the "to" date input; empty means default.
    pub to_date: String,
}

impl PanelState {
    pub fn apply(&mut self, update: RegionUpdate) {
        match update {
            RegionUpdate::Show(region) => *self.visibility(region) = true,
            RegionUpdate::Hide(region) => *self.visibility(region) = false,
            RegionUpdate::SetContent(Region::Error, content) => self.error_message = content,
            RegionUpdate::SetContent(Region::Results, content) => self.results = content,
            // The loading indicator has no content of its own.
            RegionUpdate::SetContent(Region::Loading, _) => {}
        }
    }

    pub fn is_visible(&self, region: Region) -> bool {
        match region {
            Region::Error => self.error_visible,
            Region::Loading => self.loading_visible,
            Region::Results => self.results_visible,
        }
    }

    fn visibility(&mut self, region: Region) -> &mut bool {
        match region {
            Region::Error => &mut self.error_visible,
            Region::Loading => &mut self.loading_visible,
            Region::Results => &mut self.results_visible,
        }
    }
}

/// Open/closed state of the endpoint panels.
///
/// Each toggle flips whatever state it observes; overlapping toggles during
/// the slide animation are not serialized.
#[derive(Debug, Clone, Default)]
pub struct PanelToggles {
    open: HashSet<PanelKey>,
}

impl PanelToggles {
    /// Flips the panel and returns whether it is now open.
    pub fn toggle(&mut self, key: &PanelKey) -> bool {
        log::info!("Toggling endpoint panel {}", key);
        if self.open.remove(key) {
            false
        } else {
            self.open.insert(key.clone());
            true
        }
    }

    pub fn is_open(&self, key: &PanelKey) -> bool {
        self.open.contains(key)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn panel_starts_hidden() {
        let state = PanelState::default();
        assert!(!state.is_visible(Region::Error));
        assert!(!state.is_visible(Region::Loading));
        assert!(!state.is_visible(Region::Results));
    }

    #[test]
    fn updates_apply_in_order() {
        let mut state = PanelState::default();
        state.apply(RegionUpdate::Show(Region::Results));
        state.apply(RegionUpdate::SetContent(Region::Results, "{}".into()));
        state.apply(RegionUpdate::Hide(Region::Results));

        assert!(!state.results_visible);
        assert_eq!(state.results, "{}");
    }

    #[test]
    fn loading_content_is_ignored() {
        let mut state = PanelState::default();
        state.apply(RegionUpdate::SetContent(Region::Loading, "ignored".into()));
        assert_eq!(state, PanelState::default());
    }

    #[test]
    fn toggle_flips_observed_state() {
        let mut toggles = PanelToggles::default();
        let key = PanelKey::derive("alice", "fitbit");

        assert!(toggles.toggle(&key));
        assert!(toggles.is_open(&key));
        assert!(!toggles.toggle(&key));
        assert!(!toggles.is_open(&key));
        assert!(!toggles.is_open(&PanelKey::derive("bob", "fitbit")));
    }
}

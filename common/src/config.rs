use std::time::Duration;

/// Runtime settings of the console controller.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConsoleConfig {
    /// Prefix for every API path. Empty means same origin.
    pub api_base: String,
    /// How often an open authorization popup is probed for closure.
    pub poll_interval: Duration,
    pub popup_width: u32,
    pub popup_height: u32,
}

impl ConsoleConfig {
    pub fn with_api_base(mut self, api_base: impl Into<String>) -> Self {
        self.api_base = api_base.into();
        self
    }
}

impl Default for ConsoleConfig {
    fn default() -> Self {
        Self {
            api_base: String::new(),
            poll_interval: Duration::from_secs(1),
            popup_width: 500,
            popup_height: 500,
        }
    }
}

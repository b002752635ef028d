//! Component state of the shim console.

use std::collections::HashMap;
use std::rc::Rc;

use common::config::ConsoleConfig;
use common::console::Console;
use common::keys::RequestKey;
use common::panels::{PanelState, PanelToggles};

use crate::browser::GlooTransport;

pub struct ConsoleComponent {
    /// Workflow controller; shared with in-flight flows.
    pub console: Rc<Console<GlooTransport>>,

    /// View model of every data panel touched so far, by request key.
    pub panels: HashMap<RequestKey, PanelState>,

    /// Which endpoint panels are expanded.
    pub toggles: PanelToggles,

    /// Guard to run the registry load only on the first render.
    pub loaded: bool,
}

impl ConsoleComponent {
    pub fn new(config: ConsoleConfig) -> Self {
        Self {
            console: Rc::new(Console::new(GlooTransport, config)),
            panels: HashMap::new(),
            toggles: PanelToggles::default(),
            loaded: false,
        }
    }

    pub fn panel_mut(&mut self, key: &RequestKey) -> &mut PanelState {
        self.panels.entry(key.clone()).or_default()
    }
}

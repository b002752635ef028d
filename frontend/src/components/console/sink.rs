use common::keys::RequestKey;
use common::panels::{RegionSink, RegionUpdate};
use yew::html::Scope;

use super::messages::Msg;
use super::state::ConsoleComponent;

/// Routes region updates of a data pull back into the component as messages,
/// preserving their order.
pub struct LinkSink {
    link: Scope<ConsoleComponent>,
}

impl LinkSink {
    pub fn new(link: Scope<ConsoleComponent>) -> Self {
        Self { link }
    }
}

impl RegionSink for LinkSink {
    fn apply(&self, key: &RequestKey, update: RegionUpdate) {
        self.link.send_message(Msg::Region(key.clone(), update));
    }
}

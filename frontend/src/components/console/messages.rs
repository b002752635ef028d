use common::keys::{PanelKey, RequestKey};
use common::model::record::Record;
use common::panels::RegionUpdate;

pub enum Msg {
    /// Fetch the shim registry.
    LoadShims,
    /// Controller state changed; re-render.
    Refresh,
    SearchInput(String),
    /// Look up records with the current search term.
    Lookup,
    Authorize {
        record: Record,
        shim_key: String,
    },
    TogglePanel(PanelKey),
    SetFromDate(RequestKey, String),
    SetToDate(RequestKey, String),
    FetchData {
        record: Record,
        shim_key: String,
        endpoint: String,
        normalize: bool,
    },
    Region(RequestKey, RegionUpdate),
}

//! Update function for the shim console.
//!
//! Flows run on `spawn_local` against a clone of the shared controller and
//! report back through messages: `Msg::Refresh` once controller state changed,
//! `Msg::Region` for every data panel update.

use common::console::DataQuery;
use common::keys::RequestKey;
use yew::platform::spawn_local;
use yew::prelude::*;

use crate::browser::{self, BrowserPopupOpener, TimeoutTicker};

use super::messages::Msg;
use super::sink::LinkSink;
use super::state::ConsoleComponent;

pub fn update(component: &mut ConsoleComponent, ctx: &Context<ConsoleComponent>, msg: Msg) -> bool {
    match msg {
        Msg::LoadShims => {
            let console = component.console.clone();
            let link = ctx.link().clone();
            spawn_local(async move {
                if console.load_shims().await.is_ok() {
                    link.send_message(Msg::Refresh);
                }
            });
            false
        }
        Msg::Refresh => true,
        Msg::SearchInput(term) => {
            component.console.set_search_term(term);
            false
        }
        Msg::Lookup => {
            let console = component.console.clone();
            let link = ctx.link().clone();
            spawn_local(async move {
                if console.lookup_current().await.is_ok() {
                    link.send_message(Msg::Refresh);
                }
            });
            false
        }
        Msg::Authorize { record, shim_key } => {
            let console = component.console.clone();
            let link = ctx.link().clone();
            let ticker = TimeoutTicker::new(console.config().poll_interval);
            spawn_local(async move {
                if console
                    .authorize(&BrowserPopupOpener, ticker, &record, &shim_key)
                    .await
                    .is_ok()
                {
                    link.send_message(Msg::Refresh);
                }
            });
            false
        }
        Msg::TogglePanel(key) => {
            component.toggles.toggle(&key);
            true
        }
        Msg::SetFromDate(key, value) => {
            component.panel_mut(&key).from_date = value;
            true
        }
        Msg::SetToDate(key, value) => {
            component.panel_mut(&key).to_date = value;
            true
        }
        Msg::FetchData {
            record,
            shim_key,
            endpoint,
            normalize,
        } => {
            let key = RequestKey::derive(&record.username, &shim_key, &endpoint);
            let panel = component.panel_mut(&key);
            let query = DataQuery::new(&record, &shim_key, &endpoint, normalize)
                .with_dates(Some(panel.from_date.clone()), Some(panel.to_date.clone()));

            let console = component.console.clone();
            let sink = LinkSink::new(ctx.link().clone());
            spawn_local(async move {
                let _ = console.fetch_data(&sink, &query, browser::today()).await;
            });
            false
        }
        Msg::Region(key, update) => {
            component.panel_mut(&key).apply(update);
            true
        }
    }
}

//! View rendering for the shim console.
//!
//! Layout: a search bar, then one card per matched record listing every
//! registered shim with its authorization badge, an "Authorize" action and a
//! collapsible endpoint panel. Each endpoint row owns its date inputs, error
//! region, loading indicator and results box, all addressed by request key.

use common::keys::{PanelKey, RequestKey};
use common::model::record::Record;
use common::model::shim::Shim;
use common::panels::{Region, PANEL_SLIDE};
use web_sys::HtmlInputElement;
use yew::html::Scope;
use yew::prelude::*;

use super::messages::Msg;
use super::state::ConsoleComponent;

/// Expanded height cap used by the slide transition.
const PANEL_OPEN_MAX_HEIGHT: &str = "4000px";

pub fn view(component: &ConsoleComponent, ctx: &Context<ConsoleComponent>) -> Html {
    let link = ctx.link();
    let shims = component.console.shims();
    let records = component.console.records();

    html! {
        <div class="console-root">
            { build_search_bar(component, link) }
            { build_directory_summary(&shims, link) }
            { for records.iter().map(|record| build_record(component, record, &shims, link)) }
        </div>
    }
}

fn build_search_bar(component: &ConsoleComponent, link: &Scope<ConsoleComponent>) -> Html {
    html! {
        <div class="search-bar">
            <input
                id="uid-term"
                type="text"
                placeholder="Username fragment"
                value={component.console.search_term()}
                oninput={link.callback(|e: InputEvent| {
                    Msg::SearchInput(e.target_unchecked_into::<HtmlInputElement>().value())
                })}
                onkeydown={link.batch_callback(|e: KeyboardEvent| {
                    if e.key() == "Enter" { vec![Msg::Lookup] } else { vec![] }
                })}
            />
            <button onclick={link.callback(|_| Msg::Lookup)}>{"Search"}</button>
        </div>
    }
}

fn build_directory_summary(shims: &[Shim], link: &Scope<ConsoleComponent>) -> Html {
    let names = shims
        .iter()
        .map(|shim| shim.display_name())
        .collect::<Vec<_>>()
        .join(", ");

    html! {
        <div class="shim-row">
            <span>{ format!("{} shims available{}", shims.len(), if names.is_empty() { String::new() } else { format!(": {}", names) }) }</span>
            <button onclick={link.callback(|_| Msg::LoadShims)}>{"Reload shims"}</button>
        </div>
    }
}

fn build_record(
    component: &ConsoleComponent,
    record: &Record,
    shims: &[Shim],
    link: &Scope<ConsoleComponent>,
) -> Html {
    html! {
        <div class="record">
            <strong>{ record.username.clone() }</strong>
            { for shims.iter().map(|shim| build_shim_row(component, record, shim, link)) }
        </div>
    }
}

fn build_shim_row(
    component: &ConsoleComponent,
    record: &Record,
    shim: &Shim,
    link: &Scope<ConsoleComponent>,
) -> Html {
    let panel_key = PanelKey::derive(&record.username, &shim.shim_key);
    let open = component.toggles.is_open(&panel_key);

    let on_authorize = {
        let record = record.clone();
        let shim_key = shim.shim_key.clone();
        link.callback(move |_| Msg::Authorize {
            record: record.clone(),
            shim_key: shim_key.clone(),
        })
    };
    let on_toggle = {
        let key = panel_key.clone();
        link.callback(move |_| Msg::TogglePanel(key.clone()))
    };

    html! {
        <div key={panel_key.as_str().to_owned()}>
            <div class="shim-row">
                <span>{ shim.display_name().to_string() }</span>
                {
                    if record.is_authorized(&shim.shim_key) {
                        html! { <span class="badge">{"authorized"}</span> }
                    } else {
                        html! {}
                    }
                }
                <button onclick={on_authorize}>{"Authorize"}</button>
                <button onclick={on_toggle}>{"Endpoints"}</button>
            </div>
            <div id={panel_key.element_id()} class="shim-panel" style={panel_style(open)}>
                { for shim.endpoints.iter().map(|endpoint| build_endpoint(component, record, &shim.shim_key, endpoint, link)) }
            </div>
        </div>
    }
}

fn build_endpoint(
    component: &ConsoleComponent,
    record: &Record,
    shim_key: &str,
    endpoint: &str,
    link: &Scope<ConsoleComponent>,
) -> Html {
    let key = RequestKey::derive(&record.username, shim_key, endpoint);
    let panel = component.panels.get(&key).cloned().unwrap_or_default();

    let on_from = {
        let key = key.clone();
        link.callback(move |e: InputEvent| {
            Msg::SetFromDate(key.clone(), e.target_unchecked_into::<HtmlInputElement>().value())
        })
    };
    let on_to = {
        let key = key.clone();
        link.callback(move |e: InputEvent| {
            Msg::SetToDate(key.clone(), e.target_unchecked_into::<HtmlInputElement>().value())
        })
    };

    html! {
        <div class="endpoint" key={key.as_str().to_owned()}>
            <div class="shim-row">
                <span>{ endpoint.to_string() }</span>
                <input type="date" id={key.from_date_id()} value={panel.from_date.clone()} oninput={on_from} />
                <input type="date" id={key.to_date_id()} value={panel.to_date.clone()} oninput={on_to} />
                <button onclick={make_fetch_callback(link, record, shim_key, endpoint, false)}>{"Get raw"}</button>
                <button onclick={make_fetch_callback(link, record, shim_key, endpoint, true)}>{"Get normalized"}</button>
            </div>
            <div id={key.region_id(Region::Error)} class="shim-error" style={display(panel.error_visible)}>
                { panel.error_message.clone() }
            </div>
            <div id={key.region_id(Region::Loading)} class="spin" style={display(panel.loading_visible)} />
            <textarea
                id={key.region_id(Region::Results)}
                class="shim-results"
                readonly={true}
                value={panel.results.clone()}
                style={display(panel.results_visible)}
            />
        </div>
    }
}

fn make_fetch_callback(
    link: &Scope<ConsoleComponent>,
    record: &Record,
    shim_key: &str,
    endpoint: &str,
    normalize: bool,
) -> Callback<MouseEvent> {
    let record = record.clone();
    let shim_key = shim_key.to_string();
    let endpoint = endpoint.to_string();
    link.callback(move |_| Msg::FetchData {
        record: record.clone(),
        shim_key: shim_key.clone(),
        endpoint: endpoint.clone(),
        normalize,
    })
}

fn display(visible: bool) -> &'static str {
    if visible {
        "display: block;"
    } else {
        "display: none;"
    }
}

fn panel_style(open: bool) -> String {
    format!(
        "transition-duration: {}ms; max-height: {};",
        PANEL_SLIDE.as_millis(),
        if open { PANEL_OPEN_MAX_HEIGHT } else { "0" }
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn panel_slides_for_250ms() {
        assert_eq!(panel_style(false), "transition-duration: 250ms; max-height: 0;");
        assert!(panel_style(true).ends_with("max-height: 4000px;"));
    }
}

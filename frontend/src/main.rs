use crate::app::App;

mod app;
mod browser;
mod components;
mod config;
mod logging;

fn main() {
    logging::init(config::log_level());
    yew::Renderer::<App>::new().render();
}

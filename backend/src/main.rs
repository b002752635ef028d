mod config;
mod services;

use crate::config::HostConfig;
use crate::services::proxy::UpstreamState;
use actix_web::{web, App, HttpServer};
use clap::Parser;
use env_logger::Env;
use log::info;
use std::thread;
use std::time::Duration;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    env_logger::init_from_env(Env::default().default_filter_or("info"));
    let config = HostConfig::parse();
    let url = config.console_url();

    if !config.no_browser {
        let url_clone = url.clone();
        thread::spawn(move || {
            thread::sleep(Duration::from_millis(500));
            let _ = webbrowser::open(&url_clone);
        });
    }

    let upstream = UpstreamState::new(config.shim_server.clone());

    info!(
        "Console running at {}, forwarding /api to {}",
        url, config.shim_server
    );

    HttpServer::new(move || {
        App::new()
            .app_data(web::Data::new(upstream.clone()))
            .service(services::proxy::configure_routes())
            .default_service(web::route().to(services::embedded::serve_embedded))
    })
    .bind((config.host.as_str(), config.port))?
    .run()
    .await
}

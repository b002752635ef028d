//! Forwards the console's API calls to the shim server.
//!
//! Every `GET /api/{tail}` is replayed against `{shim_server}/api/{tail}`
//! with the original query string. Status, `Content-Type` and body are
//! relayed unchanged so the console sees the shim server's own statuses.
//! Upstream transport failures answer `502 Bad Gateway`. Nothing is retried.

use actix_web::http::StatusCode;
use actix_web::web::{get, scope, Data};
use actix_web::{HttpRequest, HttpResponse, Scope};
use log::{error, info};
use thiserror::Error;

const API_PATH: &str = "/api";

#[derive(Clone)]
pub struct UpstreamState {
    client: reqwest::Client,
    shim_server: String,
}

impl UpstreamState {
    pub fn new(shim_server: String) -> Self {
        Self {
            client: reqwest::Client::new(),
            shim_server,
        }
    }
}

#[derive(Debug, Error)]
pub enum HostError {
    #[error("shim server unreachable: {0}")]
    Upstream(#[from] reqwest::Error),
    #[error("shim server sent invalid status {0}")]
    InvalidStatus(u16),
}

/// Registers `GET /api/{tail}` on the forwarding handler.
pub fn configure_routes() -> Scope {
    scope(API_PATH).route("/{tail:.*}", get().to(forward))
}

async fn forward(req: HttpRequest, upstream: Data<UpstreamState>) -> HttpResponse {
    let url = upstream_url(&upstream.shim_server, req.path(), req.query_string());
    match relay(&upstream.client, &url).await {
        Ok(response) => {
            info!("GET {} -> {}", url, response.status());
            response
        }
        Err(e) => {
            error!("Forwarding GET {} failed: {}", url, e);
            HttpResponse::BadGateway().body(e.to_string())
        }
    }
}

async fn relay(client: &reqwest::Client, url: &str) -> Result<HttpResponse, HostError> {
    let upstream = client.get(url).send().await?;
    let status_code = upstream.status().as_u16();
    let status =
        StatusCode::from_u16(status_code).map_err(|_| HostError::InvalidStatus(status_code))?;
    let content_type = upstream
        .headers()
        .get(reqwest::header::CONTENT_TYPE)
        .and_then(|value| value.to_str().ok())
        .map(str::to_owned);
    let body = upstream.bytes().await?;

    let mut response = HttpResponse::build(status);
    if let Some(content_type) = content_type {
        response.content_type(content_type);
    }
    Ok(response.body(body))
}

fn upstream_url(shim_server: &str, path: &str, query: &str) -> String {
    let mut url = format!("{}{}", shim_server.trim_end_matches('/'), path);
    if !query.is_empty() {
        url.push('?');
        url.push_str(query);
    }
    url
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::test::{call_service, init_service, TestRequest};
    use actix_web::App;

    #[test]
    fn keeps_path_and_query() {
        assert_eq!(
            upstream_url(
                "http://localhost:8083/",
                "/api/data/fitbit/steps",
                "username=alice&normalize=true"
            ),
            "http://localhost:8083/api/data/fitbit/steps?username=alice&normalize=true"
        );
    }

    #[test]
    fn omits_empty_query() {
        assert_eq!(
            upstream_url("http://localhost:8083", "/api/registry", ""),
            "http://localhost:8083/api/registry"
        );
    }

    #[actix_web::test]
    async fn unreachable_shim_server_is_bad_gateway() {
        let app = init_service(
            App::new()
                .app_data(Data::new(UpstreamState::new("http://127.0.0.1:1".into())))
                .service(configure_routes()),
        )
        .await;

        let request = TestRequest::get().uri("/api/registry").to_request();
        let response = call_service(&app, request).await;

        assert_eq!(response.status(), StatusCode::BAD_GATEWAY);
    }
}

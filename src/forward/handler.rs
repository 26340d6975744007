//! The forwarding handler: decides by method and path, answers locally
//! or relays POST bodies to the backend.

use axum::http::{Method, StatusCode};

use crate::forward::upstream::Upstream;
use crate::http::{RelayRequest, RelayResponse};

/// Dispatches every inbound request. Holds no per-request state.
pub struct Relay<U> {
    upstream: U,
    port: u16,
}

impl<U: Upstream> Relay<U> {
    /// `port` is the listening port announced in the health banner.
    pub fn new(upstream: U, port: u16) -> Self {
        Self { upstream, port }
    }

    pub fn upstream(&self) -> &U {
        &self.upstream
    }

    /// Produce exactly one response for one request.
    pub async fn handle(&self, req: RelayRequest) -> RelayResponse {
        match req.method {
            Method::OPTIONS => RelayResponse::status(StatusCode::OK).with_cors(),
            Method::GET => self.health(&req.path),
            Method::POST => self.forward(&req).await,
            _ => RelayResponse::status(StatusCode::NOT_IMPLEMENTED),
        }
    }

    fn health(&self, path: &str) -> RelayResponse {
        if path == "/" || path == "/health" {
            RelayResponse::status(StatusCode::OK)
                .with_cors()
                .with_content_type("text/html")
                .with_body(self.banner())
        } else {
            // No CORS headers on 404.
            RelayResponse::status(StatusCode::NOT_FOUND)
        }
    }

    fn banner(&self) -> String {
        format!(
            "<h1>Volt Node is RUNNING ⚡</h1><p>API Proxy Active on Port {}</p>",
            self.port
        )
    }

    async fn forward(&self, req: &RelayRequest) -> RelayResponse {
        let body = req.declared_body();
        tracing::debug!(path = %req.path, bytes = body.len(), "Forwarding POST");

        match self.upstream.post(body).await {
            Ok(upstream) => {
                tracing::debug!(status = %upstream.status, bytes = upstream.body.len(), "Backend responded");
                RelayResponse::status(upstream.status)
                    .with_cors()
                    .with_content_type("application/json")
                    .with_body(upstream.body)
            }
            Err(e) => {
                tracing::warn!(path = %req.path, error = %e, "Backend unreachable");
                RelayResponse::unreachable(&e.to_string())
            }
        }
    }
}

//! HTTP server setup.
//!
//! # Responsibilities
//! - Build the Axum router: a single fallback so every method and path
//!   reaches the forwarding handler
//! - Buffer inbound bodies under the configured limit
//! - Wire up tracing middleware
//! - Bind and serve

use std::sync::Arc;

use axum::{
    body::Bytes,
    extract::{DefaultBodyLimit, State},
    http::{uri::InvalidUri, HeaderMap, Method, Uri},
    response::{IntoResponse, Response},
    Router,
};
use thiserror::Error;
use tokio::net::TcpListener;
use tower::ServiceBuilder;
use tower_http::trace::TraceLayer;

use crate::config::RelayConfig;
use crate::forward::{HyperUpstream, Relay, Upstream};
use crate::http::RelayRequest;

/// Errors that stop the server from starting or serving.
#[derive(Debug, Error)]
pub enum ServerError {
    #[error("invalid backend url: {0}")]
    InvalidBackend(#[from] InvalidUri),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Application state injected into the handler.
pub struct AppState<U> {
    pub relay: Arc<Relay<U>>,
}

impl<U> Clone for AppState<U> {
    fn clone(&self) -> Self {
        Self {
            relay: self.relay.clone(),
        }
    }
}

/// HTTP server for the relay.
pub struct HttpServer {
    router: Router,
    config: RelayConfig,
}

impl HttpServer {
    /// Create a server forwarding to `config.backend.url`.
    pub fn new(config: RelayConfig) -> Result<Self, ServerError> {
        let target: Uri = config.backend.url.parse()?;
        let relay = Relay::new(HyperUpstream::new(target), config.listener.port);
        let router = build_router(relay, config.limits.max_body_bytes);
        Ok(Self { router, config })
    }

    /// Serve on an already-bound listener until the process exits.
    pub async fn run(self, listener: TcpListener) -> Result<(), ServerError> {
        let addr = listener.local_addr()?;
        tracing::info!(
            address = %addr,
            backend = %self.config.backend.url,
            "HTTP server starting"
        );

        axum::serve(listener, self.router).await?;

        tracing::info!("HTTP server stopped");
        Ok(())
    }
}

/// Build the router around any [`Upstream`]. Without a limit, bodies of
/// any size are buffered and forwarded.
pub fn build_router<U: Upstream>(relay: Relay<U>, max_body_bytes: Option<usize>) -> Router {
    let state = AppState {
        relay: Arc::new(relay),
    };

    Router::new()
        .fallback(relay_handler::<U>)
        .with_state(state)
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(body_limit(max_body_bytes)),
        )
}

fn body_limit(max_body_bytes: Option<usize>) -> DefaultBodyLimit {
    match max_body_bytes {
        Some(limit) => DefaultBodyLimit::max(limit),
        None => DefaultBodyLimit::disable(),
    }
}

/// Bind `listener.host:listener.port` and relay forever.
pub async fn run(config: RelayConfig) -> Result<(), ServerError> {
    let listener = TcpListener::bind(config.bind_address()).await?;
    tracing::info!(
        port = config.listener.port,
        backend = %config.backend.url,
        "Starting Volt relay"
    );
    HttpServer::new(config)?.run(listener).await
}

async fn relay_handler<U: Upstream>(
    State(state): State<AppState<U>>,
    method: Method,
    uri: Uri,
    headers: HeaderMap,
    body: Bytes,
) -> Response {
    let path = uri
        .path_and_query()
        .map(|pq| pq.as_str())
        .unwrap_or("/")
        .to_string();

    let request = RelayRequest {
        method,
        path,
        headers,
        body,
    };

    state.relay.handle(request).await.into_response()
}

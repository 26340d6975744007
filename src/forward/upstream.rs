//! Client seam between the handler and the backend.

use std::error::Error as StdError;
use std::future::Future;

use axum::body::{Body, Bytes};
use axum::http::{header, Method, Request, StatusCode, Uri};
use hyper_util::client::legacy::{connect::HttpConnector, Client};
use hyper_util::rt::TokioExecutor;
use thiserror::Error;

/// What the backend answered.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UpstreamResponse {
    pub status: StatusCode,
    pub body: Bytes,
}

/// Network-level failure talking to the backend.
#[derive(Debug, Error)]
pub enum UpstreamError {
    #[error("{0}")]
    Transport(String),
    #[error("invalid backend request: {0}")]
    Request(#[from] axum::http::Error),
}

impl UpstreamError {
    /// Build a transport error whose message carries the full source chain,
    /// e.g. `client error (Connect): tcp connect error: Connection refused (os error 111)`.
    pub fn transport(err: &(dyn StdError + 'static)) -> Self {
        let mut detail = err.to_string();
        let mut source = err.source();
        while let Some(cause) = source {
            let text = cause.to_string();
            if !detail.ends_with(&text) {
                detail.push_str(": ");
                detail.push_str(&text);
            }
            source = cause.source();
        }
        Self::Transport(detail)
    }
}

/// Something that can POST a JSON body to the backend.
pub trait Upstream: Send + Sync + 'static {
    fn post(&self, body: Bytes) -> impl Future<Output = Result<UpstreamResponse, UpstreamError>> + Send;
}

/// [`Upstream`] over hyper's HTTP/1 client.
#[derive(Clone)]
pub struct HyperUpstream {
    client: Client<HttpConnector, Body>,
    target: Uri,
}

impl HyperUpstream {
    pub fn new(target: Uri) -> Self {
        let client = Client::builder(TokioExecutor::new()).build(HttpConnector::new());
        Self { client, target }
    }
}

impl Upstream for HyperUpstream {
    async fn post(&self, body: Bytes) -> Result<UpstreamResponse, UpstreamError> {
        let req = Request::builder()
            .method(Method::POST)
            .uri(self.target.clone())
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body))?;

        let response = self
            .client
            .request(req)
            .await
            .map_err(|e| UpstreamError::transport(&e))?;

        let status = response.status();
        let body = axum::body::to_bytes(Body::new(response.into_body()), usize::MAX)
            .await
            .map_err(|e| UpstreamError::transport(&e))?;

        Ok(UpstreamResponse { status, body })
    }
}

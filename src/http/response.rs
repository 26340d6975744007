//! Outbound response values and the fixed header sets.

use axum::body::{Body, Bytes};
use axum::http::{header, HeaderName, HeaderValue, StatusCode};
use axum::response::{IntoResponse, Response};
use serde::Serialize;

/// Headers that let a browser on another origin read the response.
pub const CORS_HEADERS: [(&str, &str); 3] = [
    ("access-control-allow-origin", "*"),
    ("access-control-allow-methods", "GET, POST, OPTIONS"),
    ("access-control-allow-headers", "Content-Type, X-Node-Url"),
];

/// Prefix of every 502 error message.
const UNREACHABLE_PREFIX: &str = "Node Unreachable: ";

/// A response produced by the forwarding handler.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RelayResponse {
    pub status: StatusCode,
    pub headers: Vec<(HeaderName, HeaderValue)>,
    pub body: Bytes,
}

impl RelayResponse {
    /// Bare response: no headers, empty body.
    pub fn status(status: StatusCode) -> Self {
        Self {
            status,
            headers: Vec::new(),
            body: Bytes::new(),
        }
    }

    pub fn with_cors(mut self) -> Self {
        for (name, value) in CORS_HEADERS {
            self.headers
                .push((HeaderName::from_static(name), HeaderValue::from_static(value)));
        }
        self
    }

    pub fn with_content_type(mut self, content_type: &'static str) -> Self {
        self.headers
            .push((header::CONTENT_TYPE, HeaderValue::from_static(content_type)));
        self
    }

    pub fn with_body(mut self, body: impl Into<Bytes>) -> Self {
        self.body = body.into();
        self
    }

    /// Value of the first header with this name, if any.
    pub fn header(&self, name: &HeaderName) -> Option<&HeaderValue> {
        self.headers
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, v)| v)
    }

    /// 502 with the JSON error envelope.
    pub fn unreachable(detail: &str) -> Self {
        Self::status(StatusCode::BAD_GATEWAY)
            .with_cors()
            .with_content_type("application/json")
            .with_body(ErrorEnvelope::unreachable(detail).to_bytes())
    }
}

impl IntoResponse for RelayResponse {
    fn into_response(self) -> Response {
        let mut response = Response::new(Body::from(self.body));
        *response.status_mut() = self.status;
        let headers = response.headers_mut();
        for (name, value) in self.headers {
            headers.append(name, value);
        }
        response
    }
}

/// `{"status":"error","message":"..."}`
#[derive(Debug, Serialize)]
pub struct ErrorEnvelope {
    pub status: &'static str,
    pub message: String,
}

impl ErrorEnvelope {
    pub fn unreachable(detail: &str) -> Self {
        Self {
            status: "error",
            message: format!("{UNREACHABLE_PREFIX}{detail}"),
        }
    }

    fn to_bytes(&self) -> Bytes {
        // Serializing a struct of plain strings cannot fail.
        serde_json::to_vec(self).map(Bytes::from).unwrap_or_default()
    }
}

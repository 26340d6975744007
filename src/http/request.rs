//! Transport-independent inbound request.
//!
//! The axum adapter in `server.rs` builds a [`RelayRequest`] from each
//! connection; the forwarding handler never touches a socket type.

use axum::body::Bytes;
use axum::http::{header, HeaderMap, Method};

/// One inbound request, fully buffered.
#[derive(Debug, Clone)]
pub struct RelayRequest {
    pub method: Method,
    /// Request target as sent, query string included.
    pub path: String,
    pub headers: HeaderMap,
    pub body: Bytes,
}

impl RelayRequest {
    pub fn new(method: Method, path: impl Into<String>) -> Self {
        Self {
            method,
            path: path.into(),
            headers: HeaderMap::new(),
            body: Bytes::new(),
        }
    }

    /// Attach a body and a matching `Content-Length` header.
    pub fn with_body(mut self, body: impl Into<Bytes>) -> Self {
        let body = body.into();
        self.headers.insert(header::CONTENT_LENGTH, body.len().into());
        self.body = body;
        self
    }

    /// Declared body length. Absent or non-numeric headers count as zero.
    pub fn content_length(&self) -> usize {
        self.headers
            .get(header::CONTENT_LENGTH)
            .and_then(|v| v.to_str().ok())
            .and_then(|v| v.trim().parse().ok())
            .unwrap_or(0)
    }

    /// The bytes that will be forwarded: at most `Content-Length` of them.
    pub fn declared_body(&self) -> Bytes {
        let len = self.content_length().min(self.body.len());
        self.body.slice(..len)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::HeaderValue;

    #[test]
    fn missing_content_length_is_zero() {
        let mut req = RelayRequest::new(Method::POST, "/");
        req.body = Bytes::from_static(b"{\"x\":1}");
        assert_eq!(req.content_length(), 0);
        assert!(req.declared_body().is_empty());
    }

    #[test]
    fn non_numeric_content_length_is_zero() {
        let mut req = RelayRequest::new(Method::POST, "/").with_body("{}");
        req.headers
            .insert(header::CONTENT_LENGTH, HeaderValue::from_static("abc"));
        assert_eq!(req.content_length(), 0);
        assert!(req.declared_body().is_empty());
    }

    #[test]
    fn body_is_truncated_to_declared_length() {
        let mut req = RelayRequest::new(Method::POST, "/").with_body("{\"x\":1}trailing");
        req.headers
            .insert(header::CONTENT_LENGTH, HeaderValue::from_static("7"));
        assert_eq!(&req.declared_body()[..], b"{\"x\":1}");
    }

    #[test]
    fn declared_length_longer_than_body_forwards_what_arrived() {
        let mut req = RelayRequest::new(Method::POST, "/").with_body("{}");
        req.headers
            .insert(header::CONTENT_LENGTH, HeaderValue::from_static("100"));
        assert_eq!(&req.declared_body()[..], b"{}");
    }
}

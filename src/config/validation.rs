//! Configuration validation.
//!
//! Serde handles the syntax; this module checks values. All problems are
//! collected so a single run reports everything wrong with a file.

use std::net::IpAddr;

use thiserror::Error;
use url::Url;

use crate::config::schema::RelayConfig;

/// A single semantic problem in a configuration.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("listener.host `{0}` is not an IP address")]
    InvalidHost(String),
    #[error("listener.port must be non-zero")]
    ZeroPort,
    #[error("backend.url `{url}` is invalid: {reason}")]
    InvalidBackendUrl { url: String, reason: String },
    #[error("backend.url `{0}` must use the http scheme")]
    UnsupportedScheme(String),
    #[error("limits.max_body_bytes must be non-zero")]
    ZeroBodyLimit,
}

/// Check a parsed configuration, returning every error found.
pub fn validate_config(config: &RelayConfig) -> Result<(), Vec<ValidationError>> {
    let mut errors = Vec::new();

    if config.listener.host.parse::<IpAddr>().is_err() {
        errors.push(ValidationError::InvalidHost(config.listener.host.clone()));
    }
    if config.listener.port == 0 {
        errors.push(ValidationError::ZeroPort);
    }

    match Url::parse(&config.backend.url) {
        Ok(url) => {
            if url.scheme() != "http" {
                errors.push(ValidationError::UnsupportedScheme(config.backend.url.clone()));
            } else if url.host_str().is_none() {
                errors.push(ValidationError::InvalidBackendUrl {
                    url: config.backend.url.clone(),
                    reason: "missing host".to_string(),
                });
            }
        }
        Err(e) => errors.push(ValidationError::InvalidBackendUrl {
            url: config.backend.url.clone(),
            reason: e.to_string(),
        }),
    }

    if config.limits.max_body_bytes == Some(0) {
        errors.push(ValidationError::ZeroBodyLimit);
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

//! Volt relay library: a single-backend HTTP relay with permissive CORS.

pub mod config;
pub mod forward;
pub mod http;
pub mod observability;

pub use config::RelayConfig;
pub use forward::Relay;
pub use http::{run, HttpServer};

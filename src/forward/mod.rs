//! Forwarding subsystem.
//!
//! # Data Flow
//! ```text
//! RelayRequest
//!     → handler.rs (OPTIONS / GET / POST dispatch)
//!     → upstream.rs (POST body to the backend, JSON content type)
//!     → RelayResponse (backend status + body, or 502 envelope)
//! ```
//!
//! # Design Decisions
//! - No retries, no caching: one inbound POST is one backend call
//! - The backend is reached through the `Upstream` trait so dispatch
//!   is testable without sockets

pub mod handler;
pub mod upstream;

pub use handler::Relay;
pub use upstream::{HyperUpstream, Upstream, UpstreamError, UpstreamResponse};

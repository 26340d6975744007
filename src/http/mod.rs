//! HTTP protocol handling subsystem.
//!
//! # Data Flow
//! ```text
//! TCP connection
//!     → server.rs (Axum setup, body buffering)
//!     → request.rs (RelayRequest: method, path, headers, body)
//!     → [forward::Relay decides]
//!     → response.rs (RelayResponse, CORS headers, error envelope)
//!     → Send to client
//! ```

pub mod request;
pub mod response;
pub mod server;

pub use request::RelayRequest;
pub use response::{ErrorEnvelope, RelayResponse, CORS_HEADERS};
pub use server::{build_router, run, HttpServer, ServerError};

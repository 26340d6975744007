//! Volt relay
//!
//! Listens on a local port, answers health checks and CORS preflight
//! locally, and forwards every POST body to one backend node.
//!
//! ```text
//!     Client ──▶ axum server ──▶ Relay ──┬── OPTIONS / GET: local response
//!                                        │
//!                                        └── POST ──▶ Backend (application/json)
//!     Client ◀── status + JSON body, or 502 {"status":"error",...} ◀──┘
//! ```

use std::path::PathBuf;

use clap::Parser;
use volt_relay::config::load_or_default;
use volt_relay::observability::init_logging;

#[derive(Parser)]
#[command(name = "volt-relay")]
#[command(about = "HTTP relay in front of a local Volt node", long_about = None)]
struct Cli {
    /// Optional TOML configuration file; built-in defaults otherwise.
    #[arg(short, long)]
    config: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    let config = load_or_default(cli.config.as_deref())?;

    init_logging(&config.observability);

    tracing::info!(
        bind_address = %config.bind_address(),
        backend = %config.backend.url,
        max_body_bytes = ?config.limits.max_body_bytes,
        "Configuration loaded"
    );

    volt_relay::run(config).await?;
    Ok(())
}

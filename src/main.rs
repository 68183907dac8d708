//! OrgChat server
//!
//! Entry point: load configuration, install tracing, serve.

use std::sync::Arc;

use dotenvy::dotenv;
use mimalloc::MiMalloc;
use tracing::info;

use orgchat::config::AppConfig;
use orgchat::{server, telemetry};

/// Global allocator for improved performance (M-MIMALLOC-APPS).
#[global_allocator]
static GLOBAL: MiMalloc = MiMalloc;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load .env (if present)
    let _ = dotenv();

    let config = match AppConfig::load() {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Configuration error: {e}");
            std::process::exit(1);
        }
    };

    // Initialize tracing (M-LOG-STRUCTURED)
    telemetry::init(&config.logging);

    info!(
        name: "config.loaded",
        host = %config.server.host,
        port = config.server.port,
        sent_delay_ms = config.lifecycle.sent_delay_ms,
        reply_min_delay_ms = config.lifecycle.reply_min_delay_ms,
        reply_max_delay_ms = config.lifecycle.reply_max_delay_ms,
        read_delay_ms = config.lifecycle.read_delay_ms,
        "Configuration loaded"
    );

    server::start_server(Arc::new(config)).await
}

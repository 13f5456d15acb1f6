//! Banter relay server binary.
//!
//! Hosts the chat relay on a local HTTP listener. Configuration comes from
//! CLI flags with environment fallbacks; a `.env` file is honored in
//! development.

use std::sync::Arc;

use clap::Parser;
use tracing::{info, warn};

use banter_core::config::{DEFAULT_INFERENCE_API_URL, RelayConfig};
use banter_core::relay::ChatRelay;

/// CLI arguments for the relay server.
#[derive(Parser, Debug)]
#[command(name = "banter_server", about = "Banter chat relay server")]
struct Args {
    /// Address to bind the HTTP listener.
    #[arg(long, env = "BIND_ADDR", default_value = "127.0.0.1:3100")]
    bind_addr: String,

    /// Text-generation endpoint URL.
    #[arg(
        long,
        env = "INFERENCE_API_URL",
        default_value = DEFAULT_INFERENCE_API_URL
    )]
    inference_api_url: String,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,banter_api=debug,banter_core=debug".parse().unwrap()),
        )
        .init();

    let args = Args::parse();

    let config = RelayConfig {
        inference_api_url: args.inference_api_url,
    };

    // A misconfigured endpoint is not fatal at boot: each chat request
    // answers with the failure envelope until the configuration is fixed.
    if let Err(err) = config.validate() {
        warn!(error = %err, "inference endpoint misconfigured; chat requests will fail");
    } else {
        info!(endpoint = %config.inference_api_url, "using inference endpoint");
    }

    let state = banter_api::AppState {
        relay: Arc::new(ChatRelay::new(config)),
    };
    let app = banter_api::router(state);

    let listener = tokio::net::TcpListener::bind(&args.bind_addr).await?;
    info!(addr = %listener.local_addr()?, "banter relay listening");

    axum::serve(listener, app).await?;

    Ok(())
}

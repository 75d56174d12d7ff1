use color_eyre::eyre::{Result, WrapErr};
use diagsrv::handlers::{DocumentHandler, EchoHandler, StatusHandler};
use diagsrv::{ProcessClock, RouterBuilder, Server, ServerConfig};
use std::sync::Arc;
use tracing::{error, info};

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize error handling
    color_eyre::install()?;

    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter("diagsrv=info")
        .init();

    // The clock is captured once; every /status response measures against it.
    let clock = ProcessClock::start();

    let config = ServerConfig::from_env();

    // Routes are registered exactly once, before the listener starts.
    let router = RouterBuilder::new()
        .route("/status", StatusHandler::new(clock))
        .route(config.document_route.as_str(), DocumentHandler::default())
        .fallback(EchoHandler)
        .build();

    let addr = config.socket_addr().wrap_err("Invalid listen address")?;
    let server = Server::bind(addr, Arc::new(router))
        .await
        .wrap_err_with(|| format!("Failed to bind {addr}"))?;

    info!(
        version = env!("CARGO_PKG_VERSION"),
        address = %addr,
        document_route = %config.document_route,
        "Starting diagnostic HTTP server"
    );

    // Block until the listener task settles its failure channel. There is no
    // restart or graceful drain; the first fatal listener error ends the process.
    let failure = server.spawn();
    match failure.await {
        Ok(err) => {
            error!(error = %err, "Server terminated");
            Err(err.into())
        }
        // Sender dropped without an error; the listener task is gone.
        Err(_) => Ok(()),
    }
}

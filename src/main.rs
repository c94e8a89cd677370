//! User Service
//!
//! CRUD over a single in-memory collection of user records, served as JSON.
//!
//! # Architecture Overview
//!
//! ```text
//!     Client Request
//!     ──────────────▶ middleware ──▶ dispatcher ──▶ action ──▶ UserStore
//!                     (request id,   (path shape,   (list/read/   (Mutex<Vec<User>>,
//!                      trace,         method)        create/       next id)
//!                      timeout)                      update/
//!                                                    delete)
//!     Client Response
//!     ◀────────────── JSON body, or status + plain text
//! ```

use clap::Parser;
use std::path::PathBuf;
use std::sync::Arc;
use tokio::net::TcpListener;

use user_service::config::resolve_config;
use user_service::http::HttpServer;
use user_service::lifecycle::{wait_for_signal, Shutdown};
use user_service::observability::{logging, metrics};
use user_service::users::UserStore;

#[derive(Parser)]
#[command(name = "user-service", version)]
#[command(about = "In-memory user CRUD service", long_about = None)]
struct Args {
    /// Path to a TOML configuration file.
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Port to listen on, overriding the configuration file.
    #[arg(short, long, env = "PORT")]
    port: Option<u16>,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    let config = resolve_config(args.config.as_deref(), args.port)?;

    logging::init_logging(&config.observability.log_level);

    tracing::info!("user-service v{} starting", env!("CARGO_PKG_VERSION"));
    tracing::info!(
        bind_address = %config.listener.bind_address(),
        request_timeout_secs = config.timeouts.request_secs,
        update_missing = ?config.users.update_missing,
        "Configuration loaded"
    );

    if config.observability.metrics_enabled {
        metrics::init_metrics(config.observability.metrics_address.parse()?)?;
    }

    let listener = TcpListener::bind(config.listener.bind_address()).await?;
    tracing::info!(
        address = %listener.local_addr()?,
        "Listening for connections"
    );

    let store = Arc::new(UserStore::new(config.users.update_missing));
    let shutdown = Arc::new(Shutdown::new());
    let server_shutdown = shutdown.subscribe();

    let signal_shutdown = shutdown.clone();
    tokio::spawn(async move {
        wait_for_signal(&signal_shutdown).await;
    });

    let server = HttpServer::new(config, store);
    server.run(listener, server_shutdown).await?;

    tracing::info!("Shutdown complete");
    Ok(())
}

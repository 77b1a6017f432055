pub mod dashboards;
pub mod domain;
pub mod handlers;
pub mod realtime;
pub mod routes;
pub mod shared;
pub mod state;
pub mod system;

use std::net::SocketAddr;

use tokio::net::TcpListener;

use crate::realtime::broadcaster::Broadcaster;
use crate::state::AppState;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    system::tracing::initialize()?;

    let config = shared::config::load_config()?;

    let db = shared::data::db::initialize_database(&config.database.path)
        .await
        .map_err(|e| anyhow::anyhow!("db init failed: {e}"))?;

    let state = AppState {
        db: db.clone(),
        broadcaster: Broadcaster::new(64),
    };

    // Stands in for a store-level TTL index: orders past retention get purged.
    tokio::spawn(system::expiry::ExpiryWorker::new(db).run_loop());

    let app = routes::configure_routes(state);

    let addr: SocketAddr = ([0, 0, 0, 0], config.server.port).into();

    tracing::info!("Attempting to bind server to http://{}", addr);
    let listener = match TcpListener::bind(addr).await {
        Ok(listener) => {
            tracing::info!("Server successfully bound to {}", addr);
            listener
        }
        Err(e) => {
            if e.kind() == std::io::ErrorKind::AddrInUse {
                tracing::error!(
                    "Error: Port {} is already in use. Please ensure no other process is using this port.",
                    config.server.port
                );
            } else {
                tracing::error!("Failed to bind to port {}. Error: {}", config.server.port, e);
            }
            // Propagate the error to stop the application
            return Err(e.into());
        }
    };

    axum::serve(listener, app).await?;

    Ok(())
}

use std::{net::SocketAddr, sync::Arc};

use axum::Router;
use configs::AppConfig;
use tokio::net::TcpListener;
use tower_http::cors::CorsLayer;
use tracing::{info, warn};

use crate::routes::{self, ServerState};
use service::file::employee_store::EmployeeStore;

/// Any origin, any method, any header.
pub fn build_cors() -> CorsLayer {
    CorsLayer::very_permissive()
}

fn bind_addr(cfg: &AppConfig) -> anyhow::Result<SocketAddr> {
    Ok(cfg.server.bind_addr().parse()?)
}

/// Open the record file named by the config and build the router over it.
pub async fn build_app(cfg: &AppConfig) -> anyhow::Result<Router> {
    let data_file = &cfg.storage.data_file;
    common::env::ensure_data_dir(data_file).await?;

    let store = EmployeeStore::new(data_file.clone(), cfg.storage.layout).await?;
    info!(path = %store.path().display(), layout = ?cfg.storage.layout, "employee store ready");

    let state = ServerState::new(store);
    Ok(routes::build_router(state, build_cors()))
}

/// Serve `app` on an already bound listener until Ctrl+C.
pub async fn serve(listener: TcpListener, app: Router) -> anyhow::Result<()> {
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        warn!(error = %e, "cannot listen for Ctrl+C; server will only stop when killed");
        std::future::pending::<()>().await;
    }
    info!(event = "shutdown_signal", "received Ctrl+C, shutting down");
}

/// Public entry: build the app and run the HTTP server
pub async fn run(cfg: AppConfig) -> anyhow::Result<()> {
    let app = build_app(&cfg).await?;

    let addr = bind_addr(&cfg)?;
    let listener = TcpListener::bind(addr).await?;
    info!(%addr, "employee API listening");
    serve(listener, app).await
}

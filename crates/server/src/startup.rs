use std::{future::Future, sync::Arc};

use axum::Router;
use configs::ServerConfig;
use service::roles::{InMemoryRoleStore, RoleRepository};
use tokio::net::TcpListener;
use tower_http::cors::CorsLayer;
use tracing::info;

use crate::errors::StartupError;
use crate::routes::{self, AppState};

fn build_cors() -> CorsLayer {
    CorsLayer::very_permissive()
}

/// Build the service without attaching it to a listener.
pub fn build_app(roles: Arc<dyn RoleRepository>) -> Router {
    routes::build_router(AppState { roles }, build_cors())
}

/// Serve on an already bound listener until `shutdown` resolves.
pub async fn serve_on<F>(listener: TcpListener, app: Router, shutdown: F) -> Result<(), StartupError>
where
    F: Future<Output = ()> + Send + 'static,
{
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown)
        .await
        .map_err(StartupError::Serve)
}

/// Bind `addr` (host:port, names allowed) and serve.
pub async fn serve<F>(app: Router, addr: &str, shutdown: F) -> Result<(), StartupError>
where
    F: Future<Output = ()> + Send + 'static,
{
    let listener = TcpListener::bind(addr).await.map_err(|source| StartupError::Bind {
        addr: addr.to_string(),
        source,
    })?;
    let local = listener.local_addr().map_err(StartupError::Serve)?;
    info!(addr = %local, "roles api listening");
    serve_on(listener, app, shutdown).await
}

async fn shutdown_signal() {
    if tokio::signal::ctrl_c().await.is_ok() {
        info!("received Ctrl+C, shutting down");
    }
}

/// Seeded store on `cfg`'s address, served until Ctrl+C. Logging and `.env`
/// belong to the caller.
pub async fn run(cfg: ServerConfig) -> anyhow::Result<()> {
    info!(
        addr = %cfg.bind_addr(),
        worker_threads = cfg.worker_threads.unwrap_or_default(),
        "roles api starting"
    );
    let store: Arc<dyn RoleRepository> = Arc::new(InMemoryRoleStore::seeded());
    let app = build_app(store);
    serve(app, &cfg.bind_addr(), shutdown_signal()).await?;
    Ok(())
}

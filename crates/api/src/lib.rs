//! `api` crate — HTTP REST API layer.
//!
//! Exposes:
//!   GET    /
//!   GET    /usuarios?q=
//!   GET    /usuarios/:id
//!   POST   /usuarios
//!   PUT    /usuarios/:id
//!   PATCH  /usuarios/:id
//!   DELETE /usuarios/:id
//!   POST   /verificar_idade

pub mod error;
pub mod handlers;

use axum::{
    routing::{get, post},
    Router,
};
use db::Store;
use tokio::net::TcpListener;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::info;

pub use error::{ApiError, ApiResult};

/// Shared application state handed to every handler.
#[derive(Debug, Clone)]
pub struct AppState {
    pub store: Store,
}

/// Build the router with all routes, CORS and request tracing.
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(handlers::health::root))
        .route(
            "/usuarios",
            get(handlers::usuarios::list).post(handlers::usuarios::create),
        )
        .route(
            "/usuarios/:id",
            get(handlers::usuarios::get)
                .put(handlers::usuarios::update)
                .patch(handlers::usuarios::update)
                .delete(handlers::usuarios::delete),
        )
        .route("/verificar_idade", post(handlers::age::check))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}

/// Bind `bind` and serve until Ctrl+C or SIGTERM.
pub async fn serve(bind: &str, store: Store) -> std::io::Result<()> {
    let app = router(AppState { store });
    let listener = TcpListener::bind(bind).await?;
    info!("Listening on http://{}", listener.local_addr()?);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Shutdown complete");
    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(err) = tokio::signal::ctrl_c().await {
            tracing::error!(error = %err, "Failed to listen for Ctrl+C");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(err) => {
                tracing::error!(error = %err, "Failed to install SIGTERM handler");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => info!("Received Ctrl+C signal"),
        _ = terminate => info!("Received terminate signal"),
    }
}

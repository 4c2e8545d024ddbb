use std::future::Future;
use std::net::SocketAddr;

use axum::routing::get;
use axum::Router;
use tokio::net::TcpListener;
use tokio::sync::watch;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tower_http::trace::{DefaultOnFailure, DefaultOnResponse};
use tower_http::LatencyUnit;

pub mod api;
mod config;
mod index;

pub use config::Config;
pub use index::GREETING;

use crate::ServiceState;

/// Full application router: greeting, enabled account routes,
///  wide-open CORS and request tracing.
pub fn router(state: ServiceState, log_level: tracing::Level) -> Router {
    let trace_layer = TraceLayer::new_for_http()
        .on_response(
            DefaultOnResponse::new()
                .include_headers(false)
                .level(log_level)
                .latency_unit(LatencyUnit::Micros),
        )
        .on_failure(DefaultOnFailure::new().latency_unit(LatencyUnit::Micros));

    let cors_layer = CorsLayer::new()
        .allow_methods(Any)
        .allow_headers(Any)
        .allow_origin(Any)
        .allow_credentials(false);

    Router::new()
        .route("/", get(index::handler))
        .merge(api::router(state.clone()))
        .with_state(state)
        .layer(cors_layer)
        .layer(trace_layer)
}

pub async fn run(
    config: Config,
    state: ServiceState,
    mut shutdown_rx: watch::Receiver<()>,
) -> Result<(), HttpServerError> {
    let listen_addr = config.listen_addr;
    let listener = TcpListener::bind(listen_addr)
        .await
        .map_err(|source| HttpServerError::Bind {
            addr: listen_addr,
            source,
        })?;

    serve(listener, router(state, config.log_level), async move {
        let _ = shutdown_rx.changed().await;
    })
    .await
}

/// Serve `router` on an already bound listener until `shutdown` resolves.
pub async fn serve<F>(
    listener: TcpListener,
    router: Router,
    shutdown: F,
) -> Result<(), HttpServerError>
where
    F: Future<Output = ()> + Send + 'static,
{
    let addr = listener.local_addr().map_err(HttpServerError::ServingFailed)?;
    tracing::info!(addr = ?addr, "server listening");

    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown)
        .await?;

    Ok(())
}

#[derive(Debug, thiserror::Error)]
pub enum HttpServerError {
    #[error("failed to bind {addr}: {source}")]
    Bind {
        addr: SocketAddr,
        source: std::io::Error,
    },
    #[error("an error occurred running the HTTP server: {0}")]
    ServingFailed(#[from] std::io::Error),
}

mod utils;

use std::time::Duration;

use tokio::time::timeout;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{EnvFilter, Layer};

const FINAL_SHUTDOWN_TIMEOUT: Duration = Duration::from_secs(30);

use crate::http_server::{self, HttpServerError};
use crate::{ServiceConfig, ServiceState, ServiceStateSetupError};

/// Run the service until a shutdown signal arrives or the
///  http server stops on its own.
pub async fn spawn_service(service_config: &ServiceConfig) -> Result<(), ServiceError> {
    let (non_blocking_writer, _guard) = tracing_appender::non_blocking(std::io::stdout());
    let env_filter = EnvFilter::builder()
        .with_default_directive(service_config.log_level.into())
        .from_env_lossy();

    let stdout_layer = tracing_subscriber::fmt::layer()
        .compact()
        .with_writer(non_blocking_writer)
        .with_filter(env_filter);

    tracing_subscriber::registry().with(stdout_layer).init();

    utils::register_panic_logger();
    utils::report_build_info();

    let state = ServiceState::from_config(service_config)?;

    let (graceful_waiter, shutdown_rx) = utils::graceful_shutdown_blocker();

    let http_config = http_server::Config::from(service_config);
    let listen_addr = http_config.listen_addr;
    let route_set = service_config.route_set;
    let mut http_handle = tokio::spawn(async move {
        tracing::info!(%route_set, "Starting HTTP server on {}", listen_addr);
        http_server::run(http_config, state, shutdown_rx).await
    });

    tokio::select! {
        _ = graceful_waiter => {}
        result = &mut http_handle => {
            // the server only stops unprompted when it fails
            return flatten(result);
        }
    }

    match timeout(FINAL_SHUTDOWN_TIMEOUT, http_handle).await {
        Ok(result) => flatten(result),
        Err(_) => {
            tracing::error!(
                "Failed to shut down within {} seconds",
                FINAL_SHUTDOWN_TIMEOUT.as_secs()
            );
            Err(ServiceError::ShutdownTimeout(FINAL_SHUTDOWN_TIMEOUT))
        }
    }
}

fn flatten(
    result: Result<Result<(), HttpServerError>, tokio::task::JoinError>,
) -> Result<(), ServiceError> {
    match result {
        Ok(Ok(())) => Ok(()),
        Ok(Err(e)) => {
            tracing::error!("HTTP server error: {}", e);
            Err(e.into())
        }
        Err(e) => Err(ServiceError::Join(e)),
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ServiceError {
    #[error("error creating server state: {0}")]
    State(#[from] ServiceStateSetupError),
    #[error(transparent)]
    HttpServer(#[from] HttpServerError),
    #[error("http server task failed: {0}")]
    Join(#[from] tokio::task::JoinError),
    #[error("failed to shut down within {0:?}")]
    ShutdownTimeout(Duration),
}

use tokio::sync::watch;
use tokio::task::JoinHandle;

use common::prelude::build_info;

/// Route panics through tracing so they land in the same log stream.
pub fn register_panic_logger() {
    std::panic::set_hook(Box::new(|panic_info| {
        let location = panic_info
            .location()
            .map(|loc| format!("{}:{}", loc.file(), loc.line()))
            .unwrap_or_else(|| "unknown".to_string());
        let message = panic_info
            .payload()
            .downcast_ref::<&str>()
            .map(|s| s.to_string())
            .or_else(|| panic_info.payload().downcast_ref::<String>().cloned())
            .unwrap_or_else(|| "non-string panic payload".to_string());

        tracing::error!(%location, %message, "panic");
    }));
}

pub fn report_build_info() {
    let info = build_info();
    tracing::info!(
        version = %info.version,
        git_hash = %info.git_hash,
        profile = %info.build_profile,
        target = %info.target,
        "service starting"
    );
}

/// Spawns a task that resolves on ctrl-c (or SIGTERM on unix) and
///  notifies every holder of the returned receiver.
pub fn graceful_shutdown_blocker() -> (JoinHandle<()>, watch::Receiver<()>) {
    let (shutdown_tx, shutdown_rx) = watch::channel(());

    let handle = tokio::spawn(async move {
        wait_for_signal().await;
        tracing::info!("shutdown signal received, stopping");
        let _ = shutdown_tx.send(());
    });

    (handle, shutdown_rx)
}

#[cfg(unix)]
async fn wait_for_signal() {
    use tokio::signal::unix::{signal, SignalKind};

    let mut sigterm = match signal(SignalKind::terminate()) {
        Ok(sigterm) => sigterm,
        Err(e) => {
            tracing::warn!("unable to listen for SIGTERM: {}", e);
            let _ = tokio::signal::ctrl_c().await;
            return;
        }
    };

    tokio::select! {
        _ = tokio::signal::ctrl_c() => {}
        _ = sigterm.recv() => {}
    }
}

#[cfg(not(unix))]
async fn wait_for_signal() {
    let _ = tokio::signal::ctrl_c().await;
}

use super::ApplicationStateToClose;
use std::future::pending;
use tokio::signal;

pub async fn close(state: ApplicationStateToClose) {
    tracing::info!("closing connection with database");
    state.db_client.shutdown().await;
}

///
/// Resolves on the first of Ctrl+C or SIGTERM.
/// A signal that cannot be listened for is logged and never fires.
///
pub async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(err) = signal::ctrl_c().await {
            tracing::error!(%err, "cannot listen for Ctrl+C");
            pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut terminate) => {
                terminate.recv().await;
            }
            Err(err) => {
                tracing::error!(%err, "cannot listen for SIGTERM");
                pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = pending::<()>();

    tokio::select! {
        _ = ctrl_c => tracing::info!("received Ctrl+C"),
        _ = terminate => tracing::info!("received SIGTERM"),
    }

    tracing::info!("starting graceful shutdown");
}

use axum::Router;
use std::{io, net::SocketAddr};
use thiserror::Error;
use tokio::{net::TcpListener, signal};
use tracing::info;

/// Failure of a transport adapter.
#[derive(Debug, Error)]
pub enum ServerError {
    /// The listener could not be bound.
    #[error("failed to bind {addr}: {source}")]
    Bind {
        /// Address that was requested.
        addr: SocketAddr,
        /// Underlying I/O failure.
        #[source]
        source: io::Error,
    },

    /// Serving stopped with an I/O failure.
    #[error("server error: {0}")]
    Serve(#[source] io::Error),

    /// The function runtime stopped with an error.
    #[error("function runtime error: {0}")]
    Hosted(String),
}

/// Serve `router` on `0.0.0.0:<port>` until Ctrl+C or SIGTERM.
///
/// In-flight requests are allowed to finish after the signal.
///
/// # Errors
///
/// Returns an error if binding or serving fails.
pub async fn serve_local(router: Router, port: u16) -> Result<(), ServerError> {
    let addr = SocketAddr::from(([0, 0, 0, 0], port));
    let listener = TcpListener::bind(addr)
        .await
        .map_err(|source| ServerError::Bind { addr, source })?;
    info!(%addr, "listening");
    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(ServerError::Serve)
}

/// Serve `router` from the function runtime.
///
/// Gateway events are converted into HTTP requests and the responses back into
/// gateway responses; the handlers see no difference from local mode.
///
/// # Errors
///
/// Returns an error if the runtime fails.
pub async fn serve_hosted(router: Router) -> Result<(), ServerError> {
    info!("starting function runtime");
    lambda_http::run(router)
        .await
        .map_err(|error| ServerError::Hosted(error.to_string()))
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(error) = signal::ctrl_c().await {
            tracing::warn!(%error, "failed to install Ctrl+C handler");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut terminate) => {
                terminate.recv().await;
            }
            Err(error) => {
                tracing::warn!(%error, "failed to install SIGTERM handler");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => info!("ctrl_c signal received"),
        () = terminate => info!("terminate signal received"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_bind_failure_is_reported() {
        let taken = TcpListener::bind("0.0.0.0:0").await.unwrap();
        let port = taken.local_addr().unwrap().port();
        let result = serve_local(Router::new(), port).await;
        assert!(matches!(result, Err(ServerError::Bind { .. })));
    }
}

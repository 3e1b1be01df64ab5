pub mod config;
pub mod routes;

use std::future::Future;
use std::net::SocketAddr;

use anyhow::Context;
use tokio::net::TcpListener;
use tokio::sync::oneshot;
use tracing::{error, info};

use crate::store::GrammarStore;
use config::ServerConfig;

/// Handle to a server started with [`start_server`].
pub struct ServerHandle {
    pub addr: SocketAddr,
    shutdown: oneshot::Sender<()>,
}

impl ServerHandle {
    pub fn shutdown(self) {
        let _ = self.shutdown.send(());
    }
}

async fn bind(config: &ServerConfig) -> anyhow::Result<(TcpListener, SocketAddr)> {
    let listener = TcpListener::bind(config.bind_address())
        .await
        .context("failed to bind TCP listener")?;
    let actual_addr = listener
        .local_addr()
        .context("failed to read socket address")?;
    Ok((listener, actual_addr))
}

/// Binds and serves in a background task. Port 0 picks a free port; the
/// chosen address is in the returned handle.
pub async fn start_server(
    config: &ServerConfig,
    store: GrammarStore,
) -> anyhow::Result<ServerHandle> {
    let (listener, actual_addr) = bind(config).await?;
    info!(%actual_addr, "starting ll1-grammar-viewer");

    let (tx, rx) = oneshot::channel();
    let router = routes::router(store);

    tokio::spawn(async move {
        if let Err(err) = axum::serve(listener, router)
            .with_graceful_shutdown(async move {
                let _ = rx.await;
            })
            .await
        {
            error!(?err, "server terminated with error");
        }
    });

    Ok(ServerHandle {
        addr: actual_addr,
        shutdown: tx,
    })
}

/// Serves until `shutdown` resolves.
pub async fn serve<F>(config: &ServerConfig, store: GrammarStore, shutdown: F) -> anyhow::Result<()>
where
    F: Future<Output = ()> + Send + 'static,
{
    let (listener, actual_addr) = bind(config).await?;
    info!(%actual_addr, "starting ll1-grammar-viewer");

    if let Err(err) = axum::serve(listener, routes::router(store))
        .with_graceful_shutdown(shutdown)
        .await
    {
        error!(?err, "server terminated with error");
    }

    Ok(())
}

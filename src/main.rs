use anyhow::Context;
use tracing::info;

use ll1_grammar_viewer::web::{self, config::ServerConfig};
use ll1_grammar_viewer::{logging, GrammarStore};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    let config = ServerConfig::from_env().context("failed to load server configuration")?;

    if let Err(err) = logging::init_tracing(Some(config.log_level())) {
        eprintln!("failed to initialise tracing: {err}");
    }

    let store = GrammarStore::new().context("grammar data is inconsistent")?;
    info!(
        non_terminals = store.data().grammar.rules.len(),
        terminals = store.data().table.terminals.len(),
        "grammar store ready"
    );

    web::serve(&config, store, shutdown_signal()).await
}

async fn shutdown_signal() {
    let ctrl_c = async {
        let _ = tokio::signal::ctrl_c().await;
    };

    #[cfg(unix)]
    let terminate = async {
        if let Ok(mut sigterm) =
            tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate())
        {
            sigterm.recv().await;
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    info!("shutdown signal received");
}

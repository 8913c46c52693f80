use anyhow::Context;
use clap::Parser;
use pokeguess::config::{self, ServerConfig};
use pokeguess::dex::DexSource;
use pokeguess::state::AppState;
use std::net::SocketAddr;
use std::process;
use std::sync::Arc;
use tracing::info;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt::init();
    let args = ServerConfig::parse();

    let secret = config::secret_from_env().unwrap_or_else(|e| {
        eprintln!("{}", e);
        process::exit(1);
    });

    info!("🔎 pokeguess is initializing...");

    let dex = DexSource::from_policy(args.reload, args.dex.clone())
        .with_context(|| format!("Failed to load dex from {:?}", args.dex))?;

    let state = Arc::new(AppState::new(secret, dex, args.limits()));
    let app = pokeguess::build_router(state);

    let addr = SocketAddr::from(([0, 0, 0, 0], args.port));
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("Failed to bind {}", addr))?;
    info!("🚀 Server is running on {}", addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("Server error")?;

    info!("👋 Shut down cleanly");
    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!("Failed to install Ctrl+C handler: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                tracing::error!("Failed to install SIGTERM handler: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => info!("Received Ctrl+C, shutting down..."),
        _ = terminate => info!("Received SIGTERM, shutting down..."),
    }
}

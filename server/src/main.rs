//! Product service server: reads config from env, connects the store, mounts all routes.
//!
//! Run from repo root: `cargo run -p product-server`
//! Set `STORAGE=memory` to run without PostgreSQL.

use product_service::{
    app, connect, ensure_database_exists, ensure_tables, AppConfig, AppState, Storage,
};
use tokio::net::TcpListener;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = AppConfig::from_env()?;
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new("product_server=info,product_service=info,tower_http=info")
        }))
        .init();

    let state = match config.storage {
        Storage::Postgres => {
            ensure_database_exists(&config.database_url).await?;
            let pool = connect(&config).await?;
            ensure_tables(&pool).await?;
            AppState::postgres(pool)
        }
        Storage::Memory => {
            tracing::warn!("using in-memory storage; data is lost on exit");
            AppState::in_memory()
        }
    };
    let pool = state.pool.clone();

    let listener = TcpListener::bind(config.bind_addr).await?;
    tracing::info!("Server listening on http://{}", listener.local_addr()?);
    axum::serve(listener, app(state))
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    if let Some(pool) = pool {
        pool.close().await;
    }
    tracing::info!("server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %e, "failed to listen for shutdown signal");
        std::future::pending::<()>().await;
    }
}

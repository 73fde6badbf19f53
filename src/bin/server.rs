//! Blog API server: reads config from the environment, connects to PostgreSQL, ensures the schema, serves HTTP.

use blog_api::{app, connect, init_logging, AppConfig, AppState, Container, PgBlogRepository};
use std::sync::Arc;
use tokio::net::TcpListener;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    let config = AppConfig::from_env()?;
    init_logging(config.log_level)?;

    let container = Container::new(config);
    let pool = match connect(container.config()).await {
        Ok(pool) => pool,
        Err(err) => {
            tracing::error!(error = %err, fatal = true, "failed to connect database");
            return Err(err.into());
        }
    };
    let repository = Arc::new(PgBlogRepository::new(pool.clone()));
    let state = AppState::new(container.clone(), repository);

    let listener = TcpListener::bind(container.config().bind).await?;
    tracing::info!("listening on {}", listener.local_addr()?);
    axum::serve(listener, app(state))
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    pool.close().await;
    tracing::info!("shut down");
    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(err) = tokio::signal::ctrl_c().await {
            tracing::warn!(error = %err, "ctrl-c handler unavailable");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut sig) => {
                sig.recv().await;
            }
            Err(err) => {
                tracing::warn!(error = %err, "SIGTERM handler unavailable");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }
    tracing::info!("shutdown signal received");
}

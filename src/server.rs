//! HTTP server initialization and runtime setup.
//!
//! Wires the health-check collaborators and runs the Axum server lifecycle.

use crate::application::services::HealthService;
use crate::config::Config;
use crate::domain::collaborators::{ConfigSource, PaymentProvider};
use crate::infrastructure::config::EnvConfigSource;
use crate::infrastructure::payments::{PaypalProvider, StripeProvider};
use crate::infrastructure::persistence::PgStorage;
use crate::infrastructure::runtime::SysinfoRuntime;
use crate::routes::app_router;
use crate::state::AppState;

use anyhow::{Context, Result};
use axum::ServiceExt;
use axum::extract::Request;
use sqlx::postgres::PgPoolOptions;
use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;
use tokio::signal;

/// Builds the health service from configuration.
///
/// The pool connects lazily: the server starts even when the database is
/// down, and the outage is reported by `GET /health`.
///
/// # Errors
///
/// Returns an error if the database URL cannot be parsed or the HTTP client
/// cannot be built.
pub fn build_health_service(config: &Config) -> Result<HealthService> {
    let pool = PgPoolOptions::new()
        .max_connections(config.db_max_connections)
        .acquire_timeout(Duration::from_secs(config.db_connect_timeout))
        .connect_lazy(&config.database_url)
        .context("Invalid database URL")?;

    let http = reqwest::Client::builder()
        .user_agent(concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION")))
        .build()
        .context("Failed to build HTTP client")?;

    let config_source: Arc<dyn ConfigSource> = Arc::new(EnvConfigSource);

    let providers: Vec<Arc<dyn PaymentProvider>> = vec![
        Arc::new(StripeProvider::new(
            http.clone(),
            config.stripe_api_base.clone(),
            config_source.clone(),
        )),
        Arc::new(PaypalProvider::new(
            http,
            config.paypal_api_base.clone(),
            config_source.clone(),
        )),
    ];

    let service = HealthService::new(
        Arc::new(PgStorage::new(Arc::new(pool))),
        providers,
        config_source,
        Arc::new(SysinfoRuntime::new()),
    )
    .with_deadlines(config.deadlines());

    Ok(service)
}

/// Runs the HTTP server with the given configuration.
///
/// # Errors
///
/// Returns an error if:
/// - Collaborator construction fails
/// - Server bind fails
/// - Server runtime error occurs
pub async fn run(config: Config) -> Result<()> {
    let health_service = build_health_service(&config)?;
    tracing::info!("Health service ready");

    let state = AppState::new(Arc::new(health_service));
    let app = app_router(state);

    let addr: SocketAddr = config.listen_addr.parse()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!("Listening on http://{addr}");

    axum::serve(
        listener,
        ServiceExt::<Request>::into_make_service_with_connect_info::<SocketAddr>(app),
    )
    .with_graceful_shutdown(shutdown_signal())
    .await?;

    tracing::info!("Server stopped");
    Ok(())
}

/// Resolves on Ctrl-C or, on Unix, SIGTERM.
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            tracing::error!("Failed to listen for Ctrl-C: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut stream) => {
                stream.recv().await;
            }
            Err(e) => {
                tracing::error!("Failed to listen for SIGTERM: {}", e);
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

    tracing::info!("Shutdown signal received");
}

//! API server binary
//!
//! Boots the lending API: configuration, logging, database pool, partner
//! clients, broker connection, router, graceful shutdown.
//!
//! # Environment Variables
//!
//! * `APP_HOST` - Server host (default: 0.0.0.0)
//! * `APP_PORT` - Server port (default: 8080)
//! * `APP_DATABASE_URL` - PostgreSQL connection string
//! * `APP_DATABASE_MAX_CONNECTIONS` / `APP_DATABASE_MIN_CONNECTIONS` - pool bounds
//! * `APP_LOG_LEVEL` - Log level: trace, debug, info, warn, error (default: info)
//! * `APP_BROKER__HOST` / `APP_BROKER__PORT` / `APP_BROKER__USER` / `APP_BROKER__PASSWORD`
//! * `APP_AUTO_MARKET__BASE_URL` / `APP_AUTO_MARKET__TOKEN` / `APP_AUTO_MARKET__TIMEOUT_SECS`
//! * `APP_LEASING__BASE_URL` / `APP_LEASING__TOKEN` / `APP_LEASING__TIMEOUT_SECS`

use std::net::SocketAddr;
use std::sync::Arc;

use tokio::net::TcpListener;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use domain_lending::LendingService;
use infra_db::{create_pool, DatabaseConfig, PgApplications, PgLoans, PgPayments};
use infra_partners::{broker, AutoMarketClient, LeasingClient};
use interface_api::{config::AppConfig, create_router, AppState};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    let config = AppConfig::from_env().unwrap_or_default();

    init_tracing(&config.log_level);

    tracing::info!(
        host = %config.host,
        port = config.port,
        "starting lending API server"
    );

    let pool = create_pool(
        DatabaseConfig::new(&config.database_url)
            .max_connections(config.database_max_connections)
            .min_connections(config.database_min_connections),
    )
    .await?;

    // Broker problems are a boot failure even though nothing publishes yet.
    let _broker = broker::connect(&config.broker).await?;

    let auto_market = AutoMarketClient::new(config.auto_market.clone())?;
    let leasing = LeasingClient::new(config.leasing.clone())?;
    tracing::debug!(base_url = leasing.base_url(), "leasing partner configured");

    let service = LendingService::new(
        Arc::new(PgApplications::new(pool.clone())),
        Arc::new(PgLoans::new(pool.clone())),
        Arc::new(PgPayments::new(pool)),
        Arc::new(auto_market),
    );

    let app = create_router(AppState {
        service: Arc::new(service),
    });

    let addr: SocketAddr = config.server_addr().parse()?;
    tracing::info!(%addr, "server listening");

    let listener = TcpListener::bind(addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("server shutdown complete");
    Ok(())
}

fn init_tracing(log_level: &str) {
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(log_level))
        .unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_target(true))
        .init();
}

/// Waits for Ctrl+C or SIGTERM so in-flight requests can drain.
async fn shutdown_signal() {
    let ctrl_c = async {
        tokio::signal::ctrl_c()
            .await
            .expect("failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate())
            .expect("failed to install signal handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            tracing::info!("received Ctrl+C, initiating graceful shutdown");
        }
        _ = terminate => {
            tracing::info!("received SIGTERM, initiating graceful shutdown");
        }
    }
}

//! HTTP server initialization and runtime setup.
//!
//! Handles database connections, geo and log sink setup, worker spawning, and
//! the Axum server lifecycle.

use crate::application::services::LogService;
use crate::config::Config;
use crate::domain::log_worker::run_log_worker;
use crate::infrastructure::geo::{GeoLocator, MaxMindGeoLocator, NullGeoLocator};
use crate::infrastructure::log_sink::{HttpLogSink, LogSink, NullLogSink};
use crate::routes::{app_router, normalize};
use crate::state::{AppState, StateOptions};

use anyhow::{Context, Result};
use axum::ServiceExt;
use axum::extract::Request;
use sqlx::SqlitePool;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use std::net::SocketAddr;
use std::str::FromStr;
use std::sync::Arc;
use std::time::Duration;

const STARTUP_STACK: &str = "startup";

/// Runs the HTTP server with the given configuration.
///
/// Initializes:
/// - SQLite connection pool (the database file is created if missing)
/// - Apply migrations
/// - MaxMind geo locator (or NullGeoLocator fallback)
/// - HTTP log sink (or NullLogSink) and the background log worker
/// - Axum HTTP server
///
/// # Errors
///
/// Returns an error if:
/// - Database connection or migration fails
/// - The log sink client cannot be built
/// - Server bind fails
/// - Server runtime error occurs
pub async fn run(config: Config) -> Result<()> {
    let pool = connect_pool(&config).await?;
    tracing::info!("Connected to database");

    sqlx::migrate!("./migrations")
        .run(&pool)
        .await
        .context("Failed to run database migrations")?;

    let geo = build_geo_locator(&config);
    let sink = build_log_sink(&config)?;

    let (log_service, log_rx) =
        LogService::channel(config.log_sink_package.as_str(), config.log_queue_capacity);
    tokio::spawn(run_log_worker(log_rx, sink));
    tracing::info!("Log worker started");

    let options = StateOptions {
        shortcode_length: config.shortcode_length,
        default_validity_minutes: config.default_validity_minutes,
        behind_proxy: config.behind_proxy,
    };
    let state = AppState::new(Arc::new(pool), geo, log_service.clone(), options);

    let app = normalize(app_router(state));

    let addr: SocketAddr = config.listen_addr.parse()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!("Listening on http://{addr}");

    log_service.info(
        STARTUP_STACK,
        format!("Server started on port {}", addr.port()),
    );

    axum::serve(
        listener,
        ServiceExt::<Request>::into_make_service_with_connect_info::<SocketAddr>(app),
    )
    .with_graceful_shutdown(shutdown_signal())
    .await?;

    tracing::info!("Server stopped");

    Ok(())
}

async fn connect_pool(config: &Config) -> Result<SqlitePool> {
    let options = SqliteConnectOptions::from_str(&config.database_url)
        .context("Invalid DATABASE_URL")?
        .create_if_missing(true);

    SqlitePoolOptions::new()
        .max_connections(config.db_max_connections)
        .acquire_timeout(Duration::from_secs(config.db_connect_timeout))
        .connect_with(options)
        .await
        .context("Failed to connect to database")
}

fn build_geo_locator(config: &Config) -> Arc<dyn GeoLocator> {
    if let Some(path) = &config.geoip_db_path {
        match MaxMindGeoLocator::open(path) {
            Ok(locator) => {
                tracing::info!("Geolocation enabled ({})", path.display());
                Arc::new(locator)
            }
            Err(e) => {
                tracing::warn!("Failed to open GeoIP database: {}. Using NullGeoLocator.", e);
                Arc::new(NullGeoLocator::new())
            }
        }
    } else {
        tracing::info!("Geolocation disabled (NullGeoLocator)");
        Arc::new(NullGeoLocator::new())
    }
}

fn build_log_sink(config: &Config) -> Result<Arc<dyn LogSink>> {
    let sink: Arc<dyn LogSink> = match &config.log_sink_url {
        Some(url) => {
            let sink = HttpLogSink::new(url.clone()).context("Failed to build log sink client")?;
            tracing::info!("Log shipping enabled");
            Arc::new(sink)
        }
        None => {
            tracing::info!("Log shipping disabled (NullLogSink)");
            Arc::new(NullLogSink::new())
        }
    };

    Ok(sink)
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to listen for shutdown signal: {}", e);
        std::future::pending::<()>().await;
    }
    tracing::info!("Shutdown signal received");
}

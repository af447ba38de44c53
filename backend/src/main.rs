//! Backend entry-point: loads settings, prepares the database and serves HTTP.

mod server;

use actix_web::web;
use ortho_config::OrthoConfig;
use tracing::{info, warn};
use tracing_subscriber::{EnvFilter, fmt};

use server::{ServerConfig, create_server};
use travel_agency::inbound::http::health::HealthState;
use travel_agency::outbound::persistence::{DbPool, run_migrations};
use travel_agency::settings::AppSettings;

/// Application bootstrap.
#[actix_web::main]
async fn main() -> std::io::Result<()> {
    if let Err(e) = fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .json()
        .try_init()
    {
        warn!(error = %e, "tracing init failed");
    }

    let settings = AppSettings::load_from_iter(std::env::args_os())
        .map_err(|e| std::io::Error::other(format!("failed to load settings: {e}")))?;
    let mut config = ServerConfig::new(settings.bind_addr());

    match settings.pool_config() {
        Some(pool_config) => {
            if settings.run_migrations {
                let url = pool_config.database_url().to_owned();
                let applied = tokio::task::spawn_blocking(move || run_migrations(&url))
                    .await
                    .map_err(|e| std::io::Error::other(format!("migration task failed: {e}")))?
                    .map_err(|e| std::io::Error::other(e.to_string()))?;
                info!(applied, "database schema up to date");
            }
            let pool = DbPool::new(pool_config)
                .await
                .map_err(|e| std::io::Error::other(e.to_string()))?;
            config = config.with_db_pool(pool);
        }
        None => warn!("TRAVEL_AGENCY_DATABASE_URL not set; serving fixture data"),
    }

    let health_state = web::Data::new(HealthState::new());
    info!(bind_addr = %settings.bind_addr(), "starting HTTP server");
    create_server(health_state, config)?.await
}

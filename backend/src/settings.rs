//! Server settings loaded via OrthoConfig.
//!
//! Values come from CLI flags, `TRAVEL_AGENCY_*` environment variables and an
//! optional configuration file, in that order of precedence.

use std::net::{IpAddr, Ipv4Addr, SocketAddr};
use std::time::Duration;

use ortho_config::OrthoConfig;
use serde::Deserialize;

use crate::outbound::persistence::PoolConfig;

const DEFAULT_BIND_HOST: IpAddr = IpAddr::V4(Ipv4Addr::UNSPECIFIED);
const DEFAULT_BIND_PORT: u16 = 8080;
const DEFAULT_POOL_MAX_SIZE: u32 = 10;
const DEFAULT_POOL_TIMEOUT_SECS: u64 = 30;

/// Settings controlling the HTTP listener and the database pool.
#[derive(Debug, Clone, Deserialize, OrthoConfig)]
#[ortho_config(prefix = "TRAVEL_AGENCY")]
pub struct AppSettings {
    /// PostgreSQL URL. Without it the server runs on fixture ports.
    pub database_url: Option<String>,
    /// Listen address.
    pub bind_host: Option<IpAddr>,
    /// Listen port.
    pub bind_port: Option<u16>,
    /// Maximum pooled database connections.
    pub pool_max_size: Option<u32>,
    /// Seconds to wait for a pooled connection.
    pub pool_connection_timeout_secs: Option<u64>,
    /// Apply embedded migrations before serving.
    #[ortho_config(default = false)]
    pub run_migrations: bool,
}

impl AppSettings {
    /// Socket address to bind, falling back to `0.0.0.0:8080`.
    pub fn bind_addr(&self) -> SocketAddr {
        SocketAddr::new(
            self.bind_host.unwrap_or(DEFAULT_BIND_HOST),
            self.bind_port.unwrap_or(DEFAULT_BIND_PORT),
        )
    }

    /// Pool configuration, when a database URL is set.
    pub fn pool_config(&self) -> Option<PoolConfig> {
        let url = self.database_url.as_deref().filter(|url| !url.trim().is_empty())?;
        Some(
            PoolConfig::new(url)
                .with_max_size(self.pool_max_size.unwrap_or(DEFAULT_POOL_MAX_SIZE))
                .with_connection_timeout(Duration::from_secs(
                    self.pool_connection_timeout_secs
                        .unwrap_or(DEFAULT_POOL_TIMEOUT_SECS),
                )),
        )
    }
}

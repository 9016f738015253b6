//! Server configuration

use clap::Parser;

use crate::config::{
    db::DatabaseConfig,
    observability::{LoggingConfig, ObservabilityConfig},
    server::ServerRuntimeConfig,
};

pub(crate) mod db;
pub(crate) mod observability;
pub(crate) mod server;

/// Showcase JSON API Server configuration
#[derive(Debug, Parser)]
#[command(name = "showcase-json", about = "Showcase JSON API Server", long_about = None)]
pub struct ServerConfig {
    /// Listener and shutdown settings.
    #[command(flatten)]
    pub server: ServerRuntimeConfig,

    /// Log level and format.
    #[command(flatten)]
    pub logging: LoggingConfig,

    /// Trace export and request metrics.
    #[command(flatten)]
    pub observability: ObservabilityConfig,

    /// Product database.
    #[command(flatten)]
    pub database: DatabaseConfig,
}

impl ServerConfig {
    /// Read `.env` when present, then parse arguments and environment.
    ///
    /// # Errors
    ///
    /// Returns an error if a value is missing or malformed.
    pub fn load() -> Result<Self, clap::Error> {
        _ = dotenvy::dotenv();

        Self::try_parse()
    }

    /// Address the listener binds to.
    #[must_use]
    pub fn socket_addr(&self) -> String {
        self.server.socket_addr()
    }
}

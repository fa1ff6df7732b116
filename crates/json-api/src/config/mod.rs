//! Server configuration module

use clap::Parser;

use crate::config::{
    auth::AuthConfig, db::DatabaseConfig, observability::LoggingConfig,
    server::ServerRuntimeConfig,
};

pub(crate) mod auth;
pub(crate) mod db;
pub(crate) mod observability;
pub(crate) mod server;

pub(crate) use observability::LogFormat;

/// Eniqilo JSON API Server configuration
#[derive(Debug, Parser)]
#[command(name = "eniqilo-json", about = "Eniqilo store JSON API server", long_about = None)]
pub struct ServerConfig {
    /// Server network settings.
    #[command(flatten)]
    pub server: ServerRuntimeConfig,

    /// Logging output settings.
    #[command(flatten)]
    pub logging: LoggingConfig,

    /// Application database settings.
    #[command(flatten)]
    pub database: DatabaseConfig,

    /// Access token settings.
    #[command(flatten)]
    pub auth: AuthConfig,
}

impl ServerConfig {
    /// Load configuration from `.env`, the environment and CLI arguments
    ///
    /// # Errors
    ///
    /// Returns an error if configuration cannot be parsed
    pub fn load() -> Result<Self, clap::Error> {
        // A missing .env file is fine
        _ = dotenvy::dotenv();

        Self::try_parse()
    }
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use testresult::TestResult;

    use super::*;

    #[test]
    fn arguments_fill_every_section() -> TestResult {
        let config = ServerConfig::try_parse_from([
            "eniqilo-json",
            "--port",
            "9000",
            "--database-url",
            "postgres://localhost/eniqilo",
            "--jwt-secret",
            "secret",
            "--statement-timeout-ms",
            "2500",
        ])?;

        assert_eq!(config.server.socket_addr(), "0.0.0.0:9000");
        assert_eq!(config.server.request_timeout(), Duration::from_secs(30));
        assert_eq!(
            config.database.settings().statement_timeout,
            Duration::from_millis(2500)
        );
        assert_eq!(config.auth.access_token_ttl_hours, 8);

        Ok(())
    }
}

//! Application configuration loaded from environment variables.

use std::env;

use quill_infra::store::DatabaseConfig;

/// Application configuration.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub host: String,
    pub port: u16,
    pub database: Option<DatabaseConfig>,
}

impl AppConfig {
    /// Load configuration from environment variables.
    ///
    /// When `APP_ENV=test` the database URL comes from `TEST_DATABASE_URL`,
    /// otherwise from `DATABASE_URL`, so test runs never touch the
    /// production database. No URL at all means the in-memory store.
    pub fn from_env() -> Self {
        let database = Self::database_url().map(|url| DatabaseConfig {
            url,
            max_connections: env::var("DB_MAX_CONNECTIONS")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(100),
            min_connections: env::var("DB_MIN_CONNECTIONS")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(10),
        });

        Self {
            host: env::var("HOST").unwrap_or_else(|_| "127.0.0.1".to_string()),
            port: env::var("PORT")
                .ok()
                .and_then(|p| p.parse().ok())
                .unwrap_or(8080),
            database,
        }
    }

    fn database_url() -> Option<String> {
        let is_test = env::var("APP_ENV").is_ok_and(|v| v == "test");

        if is_test {
            let url = env::var("TEST_DATABASE_URL").ok();
            if url.is_none() {
                tracing::warn!("APP_ENV=test but TEST_DATABASE_URL not set");
            }
            url
        } else {
            env::var("DATABASE_URL").ok()
        }
    }
}

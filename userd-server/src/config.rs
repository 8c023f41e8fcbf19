//! Application configuration loaded from environment variables.

use std::net::{IpAddr, Ipv4Addr, SocketAddr};
use std::{env, time::Duration};

/// Connection and cache settings, loaded once at startup and passed
/// explicitly into the components that need them.
#[derive(Debug, Clone)]
pub struct Config {
    /// PostgreSQL host (default: "db")
    pub postgres_host: String,
    /// PostgreSQL database name (default: "mydb")
    pub postgres_db: String,
    /// PostgreSQL user (default: "user")
    pub postgres_user: String,
    /// PostgreSQL password (default: "password")
    pub postgres_password: String,
    /// PostgreSQL port (default: 5432)
    pub postgres_port: u16,
    /// Redis host (default: "cache")
    pub redis_host: String,
    /// Redis port (default: 6379)
    pub redis_port: u16,
    /// List snapshot TTL in seconds (default: 30)
    pub cache_ttl_seconds: u64,
    /// HTTP bind host (default: 0.0.0.0)
    pub host: IpAddr,
    /// HTTP bind port (default: 5000)
    pub port: u16,
    /// Full connection string override for PostgreSQL, if set.
    database_url_override: Option<String>,
    /// Full connection string override for Redis, if set.
    redis_url_override: Option<String>,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Environment variables:
    /// - `POSTGRES_HOST` / `POSTGRES_DB` / `POSTGRES_USER` /
    ///   `POSTGRES_PASSWORD` / `POSTGRES_PORT` - store connection parts
    /// - `REDIS_HOST` / `REDIS_PORT` - cache connection parts
    /// - `CACHE_TTL_SECONDS` - list snapshot TTL (default: 30)
    /// - `HOST` / `PORT` - HTTP bind address (default: 0.0.0.0:5000)
    /// - `DATABASE_URL` / `REDIS_URL` - full-URL overrides, taking
    ///   precedence over the assembled parts when present
    pub fn from_env() -> Self {
        Self {
            postgres_host: env::var("POSTGRES_HOST").unwrap_or_else(|_| "db".to_string()),
            postgres_db: env::var("POSTGRES_DB").unwrap_or_else(|_| "mydb".to_string()),
            postgres_user: env::var("POSTGRES_USER").unwrap_or_else(|_| "user".to_string()),
            postgres_password: env::var("POSTGRES_PASSWORD")
                .unwrap_or_else(|_| "password".to_string()),
            postgres_port: env::var("POSTGRES_PORT")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(5432),
            redis_host: env::var("REDIS_HOST").unwrap_or_else(|_| "cache".to_string()),
            redis_port: env::var("REDIS_PORT")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(6379),
            cache_ttl_seconds: env::var("CACHE_TTL_SECONDS")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(30),
            host: env::var("HOST")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(IpAddr::V4(Ipv4Addr::UNSPECIFIED)),
            port: env::var("PORT")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(5000),
            database_url_override: env::var("DATABASE_URL").ok(),
            redis_url_override: env::var("REDIS_URL").ok(),
        }
    }

    /// PostgreSQL connection URL.
    pub fn database_url(&self) -> String {
        self.database_url_override.clone().unwrap_or_else(|| {
            format!(
                "postgres://{}:{}@{}:{}/{}",
                self.postgres_user,
                self.postgres_password,
                self.postgres_host,
                self.postgres_port,
                self.postgres_db
            )
        })
    }

    /// Redis connection URL.
    pub fn redis_url(&self) -> String {
        self.redis_url_override
            .clone()
            .unwrap_or_else(|| format!("redis://{}:{}", self.redis_host, self.redis_port))
    }

    /// Snapshot TTL as a Duration.
    pub fn cache_ttl(&self) -> Duration {
        Duration::from_secs(self.cache_ttl_seconds)
    }

    /// HTTP bind address.
    pub fn bind_addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn bare_config() -> Config {
        Config {
            postgres_host: "db".to_string(),
            postgres_db: "mydb".to_string(),
            postgres_user: "user".to_string(),
            postgres_password: "password".to_string(),
            postgres_port: 5432,
            redis_host: "cache".to_string(),
            redis_port: 6379,
            cache_ttl_seconds: 30,
            host: IpAddr::V4(Ipv4Addr::UNSPECIFIED),
            port: 5000,
            database_url_override: None,
            redis_url_override: None,
        }
    }

    #[test]
    fn assembles_urls_from_parts() {
        let config = bare_config();
        assert_eq!(
            config.database_url(),
            "postgres://user:password@db:5432/mydb"
        );
        assert_eq!(config.redis_url(), "redis://cache:6379");
    }

    #[test]
    fn overrides_take_precedence() {
        let config = Config {
            database_url_override: Some("postgres://elsewhere/other".to_string()),
            redis_url_override: Some("redis://elsewhere:6380".to_string()),
            ..bare_config()
        };
        assert_eq!(config.database_url(), "postgres://elsewhere/other");
        assert_eq!(config.redis_url(), "redis://elsewhere:6380");
    }

    #[test]
    fn default_bind_addr() {
        let config = bare_config();
        assert_eq!(config.bind_addr().to_string(), "0.0.0.0:5000");
    }

    #[test]
    fn cache_ttl_conversion() {
        let config = Config {
            cache_ttl_seconds: 30,
            ..bare_config()
        };
        assert_eq!(config.cache_ttl(), Duration::from_secs(30));
    }
}

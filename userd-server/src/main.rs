//! userd - user directory service with a cached list endpoint
//!
//! Connects to PostgreSQL (authoritative store) and Redis (list cache),
//! bootstraps the schema, and serves the CRUD API until shutdown.

use std::net::SocketAddr;

use anyhow::{anyhow, Context, Result};
use clap::Parser;
use tracing_subscriber::EnvFilter;

use userd_server::cache::RedisCache;
use userd_server::db;
use userd_server::http::{run_server, ServerConfig};
use userd_server::{AppState, Config};

#[derive(Parser, Debug)]
#[command(
    name = "userd",
    author,
    version,
    about = "User CRUD service over PostgreSQL with a Redis-cached list endpoint"
)]
struct Cli {
    /// Address to bind to (overrides HOST/PORT env, default: 0.0.0.0:5000)
    #[arg(long, short = 'b')]
    bind: Option<SocketAddr>,

    /// Allow permissive CORS (all origins) - use with caution
    #[arg(long)]
    cors_permissive: bool,

    /// Enable debug logging (sets RUST_LOG=debug if not already set)
    #[arg(long)]
    debug: bool,
}

/// Initialize tracing with console output
fn init_tracing(debug: bool) -> Result<()> {
    let filter = if debug {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("debug"))
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"))
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(debug)
        .compact()
        .try_init()
        .map_err(|err| anyhow!(err))
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    init_tracing(cli.debug)?;

    let config = Config::from_env();

    let pool = db::create_pool(&config.database_url())
        .await
        .context("Failed to create database pool")?;

    db::migrations::run(&pool)
        .await
        .context("Schema bootstrap failed")?;

    let cache = RedisCache::connect(&config.redis_url())
        .await
        .context("Failed to connect to Redis")?;

    let state = AppState::new(pool, cache, config.cache_ttl());

    let server_config = ServerConfig {
        bind_addr: cli.bind.unwrap_or_else(|| config.bind_addr()),
        cors_permissive: cli.cors_permissive,
    };

    tracing::info!(
        cache_ttl_seconds = config.cache_ttl_seconds,
        "Starting userd server on {}",
        server_config.bind_addr
    );

    run_server(state, server_config)
        .await
        .context("Server error")?;

    Ok(())
}

//! Health check endpoint

use axum::extract::State;
use axum::http::StatusCode;
use axum::{routing::get, Json, Router};
use serde::Serialize;

use userd_core::cache::Cache;

use crate::db;
use crate::state::AppState;

/// Health check response
#[derive(Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub database: &'static str,
    pub cache: &'static str,
}

/// GET /health
///
/// Probes both collaborators; either one unreachable makes the whole
/// service report 503, since list reads need the store on every miss.
async fn health(State(state): State<AppState>) -> (StatusCode, Json<HealthResponse>) {
    let database = match db::ping(state.pool()).await {
        Ok(()) => "connected",
        Err(e) => {
            tracing::error!("Health probe: database unreachable: {}", e);
            "unreachable"
        }
    };

    let cache = match state.cache().ping().await {
        Ok(()) => "connected",
        Err(e) => {
            tracing::error!("Health probe: cache unreachable: {}", e);
            "unreachable"
        }
    };

    let healthy = database == "connected" && cache == "connected";
    let status = if healthy {
        StatusCode::OK
    } else {
        StatusCode::SERVICE_UNAVAILABLE
    };

    (
        status,
        Json(HealthResponse {
            status: if healthy { "ok" } else { "degraded" },
            database,
            cache,
        }),
    )
}

/// Health routes
pub fn router() -> Router<AppState> {
    Router::new().route("/health", get(health))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cache::RedisCache;
    use crate::db::create_pool;
    use std::time::Duration;

    #[tokio::test]
    #[ignore = "requires database and redis"]
    async fn health_reports_ok_with_live_backends() {
        let database_url = std::env::var("DATABASE_URL").expect("DATABASE_URL required");
        let redis_url = std::env::var("REDIS_URL").expect("REDIS_URL required");

        let pool = create_pool(&database_url).await.expect("pool");
        let cache = RedisCache::connect(&redis_url).await.expect("cache");
        let state = AppState::new(pool, cache, Duration::from_secs(30));

        let (status, Json(body)) = health(State(state)).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body.status, "ok");
        assert_eq!(body.database, "connected");
        assert_eq!(body.cache, "connected");
    }
}

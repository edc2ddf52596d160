//! Liveness and database reachability.

use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use serde::Serialize;

use crate::state::AppState;

#[derive(Debug, Serialize)]
pub struct Health {
    pub status: &'static str,
    pub version: &'static str,
    pub db_healthy: bool,
}

impl Health {
    fn from_db_status(db_healthy: bool) -> (StatusCode, Self) {
        let (code, status) = if db_healthy {
            (StatusCode::OK, "ok")
        } else {
            (StatusCode::SERVICE_UNAVAILABLE, "degraded")
        };
        let health = Self {
            status,
            version: env!("CARGO_PKG_VERSION"),
            db_healthy,
        };
        (code, health)
    }
}

/// GET /health
///
/// Answers 503 while the database is unreachable so load balancers stop
/// routing defect submissions here.
pub async fn check(State(state): State<AppState>) -> (StatusCode, Json<Health>) {
    let db_healthy = match handbook_db::health_check(&state.pool).await {
        Ok(()) => true,
        Err(e) => {
            tracing::warn!(error = %e, "Database unreachable from health check");
            false
        }
    };
    let (code, health) = Health::from_db_status(db_healthy);
    (code, Json(health))
}

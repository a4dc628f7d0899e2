//! The stats proxy: thin forwarding to the external stats backend.
//!
//! Browser JavaScript calls `/api/stats/...` on this site; the proxy
//! rebuilds the upstream URL, injects the bearer key, and relays the
//! JSON body. The path segments and query string pass through verbatim,
//! so new backend endpoints work without a site change. The API key is
//! the whole point: it exists only in this process, never in the page.

use std::sync::Arc;

use axum::extract::{Path, RawQuery, State};
use axum::http::StatusCode;
use axum::Json;
use chrono::Utc;
use serde_json::{json, Value};
use tracing::{debug, warn};
use valesmp_stats::StatsError;

use crate::error::SiteError;
use crate::state::AppState;

/// `GET /api/stats/{*path}` -- forward to the backend and relay JSON.
///
/// Upstream non-success statuses are mirrored with an
/// `API request failed: <status>` body; transport and decode failures
/// collapse to a 500 with `Internal server error`.
pub async fn forward(
    State(state): State<Arc<AppState>>,
    Path(path): Path<String>,
    RawQuery(query): RawQuery,
) -> Result<Json<Value>, SiteError> {
    debug!(path, query = query.as_deref(), "proxying stats request");
    let data = state.client.forward(&path, query.as_deref()).await?;
    Ok(Json(data))
}

/// `HEAD /api/stats/{*path}` -- cheap reachability probe.
///
/// Mirrors the status of the backend's `/health` endpoint regardless of
/// the requested path; 503 when the backend cannot be reached at all.
pub async fn forward_head(State(state): State<Arc<AppState>>) -> StatusCode {
    match state.client.health_probe().await {
        Ok(status) => {
            StatusCode::from_u16(status.as_u16()).unwrap_or(StatusCode::SERVICE_UNAVAILABLE)
        }
        Err(error) => {
            warn!(error = %error, "backend health probe failed");
            StatusCode::SERVICE_UNAVAILABLE
        }
    }
}

/// `GET /api/stats/health` -- the site's own verdict on the backend.
///
/// Registered ahead of the catch-all so health checks never count as
/// proxied stats requests. Healthy responses carry the upstream status
/// field; unhealthy ones say why, and both are timestamped.
pub async fn health(State(state): State<Arc<AppState>>) -> (StatusCode, Json<Value>) {
    match state.client.health_detail().await {
        Ok(data) => {
            let api_status = data
                .get("status")
                .and_then(Value::as_str)
                .unwrap_or("unknown");
            (
                StatusCode::OK,
                Json(json!({
                    "status": "healthy",
                    "api_status": api_status,
                    "timestamp": Utc::now().to_rfc3339(),
                })),
            )
        }
        Err(error) => {
            warn!(error = %error, "backend health check failed");
            let message = match error {
                StatsError::Unauthorized { .. } => String::from("API returned 401"),
                StatsError::UnexpectedStatus { status, .. } => {
                    format!("API returned {}", status.as_u16())
                }
                StatsError::Http { .. } | StatsError::Decode { .. } => {
                    String::from("Connection failed")
                }
            };
            (
                StatusCode::SERVICE_UNAVAILABLE,
                Json(json!({
                    "status": "unhealthy",
                    "error": message,
                    "timestamp": Utc::now().to_rfc3339(),
                })),
            )
        }
    }
}

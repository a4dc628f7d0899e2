//! Error types for the site's HTTP layer.
//!
//! [`SiteError`] unifies all failure modes into a single enum that
//! converts into an HTTP response via its
//! [`IntoResponse`](axum::response::IntoResponse) implementation. Proxy
//! error bodies keep the exact wire shape browser callers already
//! depend on: `{"error": "API request failed: <status>"}` for upstream
//! rejections and `{"error": "Internal server error"}` for everything
//! the upstream never answered.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use valesmp_stats::StatsError;

/// Errors that can occur while serving a request.
#[derive(Debug, thiserror::Error)]
pub enum SiteError {
    /// The requested page or resource does not exist.
    #[error("not found: {0}")]
    NotFound(String),

    /// The stats backend answered with a non-success status.
    #[error("API request failed: {0}")]
    Backend(u16),

    /// The stats backend could not be reached or its reply was unusable.
    #[error("internal error")]
    Internal,

    /// A page template failed to render.
    #[error("template error: {0}")]
    Template(#[from] minijinja::Error),
}

impl From<StatsError> for SiteError {
    fn from(error: StatsError) -> Self {
        match error {
            StatsError::Unauthorized { .. } => Self::Backend(401),
            StatsError::UnexpectedStatus { status, .. } => Self::Backend(status.as_u16()),
            StatsError::Http { .. } | StatsError::Decode { .. } => Self::Internal,
        }
    }
}

impl IntoResponse for SiteError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            Self::NotFound(msg) => (StatusCode::NOT_FOUND, msg),
            Self::Backend(code) => (
                StatusCode::from_u16(code).unwrap_or(StatusCode::BAD_GATEWAY),
                format!("API request failed: {code}"),
            ),
            Self::Internal => (
                StatusCode::INTERNAL_SERVER_ERROR,
                String::from("Internal server error"),
            ),
            Self::Template(e) => {
                tracing::error!(error = %e, "template render failed");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    String::from("Internal server error"),
                )
            }
        };

        let body = serde_json::json!({ "error": message });
        (status, axum::Json(body)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn backend_errors_keep_the_upstream_status() {
        let response = SiteError::Backend(404).into_response();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[test]
    fn transport_failures_collapse_to_500() {
        let response = SiteError::Internal.into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[test]
    fn unauthorized_maps_to_401_backend_error() {
        let error = SiteError::from(StatsError::Unauthorized {
            url: String::from("http://backend/api/stats/all"),
        });
        assert_eq!(error.to_string(), "API request failed: 401");
    }
}

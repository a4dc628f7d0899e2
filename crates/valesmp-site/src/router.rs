//! Axum router construction for the site.
//!
//! Assembles pages and API routes into a single [`Router`] with CORS
//! middleware enabled for the map embeds and any external dashboard use
//! of the proxy.

use std::sync::Arc;

use axum::routing::get;
use axum::Router;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use crate::handlers;
use crate::proxy;
use crate::state::AppState;

/// Build the complete Axum router for the site server.
///
/// The router includes:
/// - `GET /` -- landing page
/// - `GET /guide`, `GET /guide/{item}` -- the server guide
/// - `GET /maps` -- live world map embeds
/// - `GET /stats` -- awards and Hall of Fame
/// - `GET /privacy`, `GET /terms` -- legal pages
/// - `GET /api/player-count` -- status snapshot as JSON
/// - `GET /api/stats/health` -- backend health verdict
/// - `GET`/`HEAD /api/stats/{*path}` -- stats backend proxy
///
/// The literal health route wins over the catch-all for
/// `/api/stats/health`; everything else under `/api/stats/` proxies.
pub fn build_router(state: Arc<AppState>) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        // Pages
        .route("/", get(handlers::index))
        .route("/guide", get(handlers::guide_index))
        .route("/guide/{item}", get(handlers::guide_entry))
        .route("/maps", get(handlers::maps_page))
        .route("/stats", get(handlers::stats_page))
        .route("/privacy", get(handlers::privacy_page))
        .route("/terms", get(handlers::terms_page))
        // JSON API
        .route("/api/player-count", get(handlers::player_count))
        .route("/api/stats/health", get(proxy::health))
        .route(
            "/api/stats/{*path}",
            get(proxy::forward).head(proxy::forward_head),
        )
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

//! Shared application state for the site server.
//!
//! [`AppState`] holds the stats backend client, the live server status
//! snapshot, and the compiled template set. It is wrapped in [`Arc`]
//! and injected via Axum's `State` extractor. The status snapshot is
//! the only mutable piece; it is written by the background poller and
//! read by handlers.

use std::sync::Arc;

use tokio::sync::RwLock;
use valesmp_stats::StatsClient;
use valesmp_types::ServerStatus;

use crate::templates::Templates;

/// Shared state for the Axum application.
#[derive(Clone)]
pub struct AppState {
    /// Client for the external stats backend. Constructed once at
    /// startup; handlers borrow it, nothing re-reads the environment.
    pub client: StatsClient,
    /// Latest server status snapshot, written by the poller.
    pub status: Arc<RwLock<ServerStatus>>,
    /// Compiled page templates.
    pub templates: Arc<Templates>,
}

impl AppState {
    /// Create application state with an offline status snapshot.
    ///
    /// The snapshot stays at the offline default until the poller's
    /// first successful fetch.
    pub fn new(client: StatsClient, templates: Templates) -> Self {
        Self {
            client,
            status: Arc::new(RwLock::new(ServerStatus::default())),
            templates: Arc::new(templates),
        }
    }
}

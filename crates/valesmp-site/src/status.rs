//! Background poller for the live server status snapshot.
//!
//! One task, one write path: every interval it queries mcsrvstat.us and
//! replaces the snapshot in [`AppState`]. Any failure -- transport,
//! status, decode -- stores the offline default, so the site shows
//! "offline" rather than a stale "online". Handlers only ever read.

use std::sync::Arc;

use tokio::task::JoinHandle;
use tracing::{debug, warn};
use valesmp_stats::status::fetch_server_status;
use valesmp_types::ServerStatus;

use crate::state::AppState;

/// Spawn the status poller on a background Tokio task.
///
/// Polls immediately, then every `poll_interval_secs`. The task runs
/// until the runtime shuts down; the caller may hold the handle to
/// abort it during clean shutdown.
pub fn spawn_status_poller(
    state: Arc<AppState>,
    address: String,
    poll_interval_secs: u64,
) -> JoinHandle<()> {
    let http = reqwest::Client::new();
    tokio::spawn(async move {
        let period = std::time::Duration::from_secs(poll_interval_secs.max(1));
        let mut ticker = tokio::time::interval(period);
        loop {
            ticker.tick().await;
            let snapshot = match fetch_server_status(&http, &address).await {
                Ok(status) => {
                    debug!(
                        online = status.online,
                        players = status.players,
                        "server status refreshed"
                    );
                    status
                }
                Err(error) => {
                    warn!(error = %error, address, "status poll failed, marking offline");
                    ServerStatus::default()
                }
            };
            *state.status.write().await = snapshot;
        }
    })
}

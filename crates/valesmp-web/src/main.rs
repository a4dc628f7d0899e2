//! `ValeSMP` website binary.
//!
//! Wires together configuration, the stats backend client, the status
//! poller, and the HTTP server.
//!
//! # Startup Sequence
//!
//! 1. Load configuration from `valesmp-config.yaml` (defaults apply
//!    when the file is absent; env vars override the backend settings)
//! 2. Initialize structured logging (tracing)
//! 3. Build the stats backend client and shared state
//! 4. Spawn the server status poller
//! 5. Run the HTTP server until Ctrl-C, then stop the poller

use std::path::Path;
use std::sync::Arc;

use tracing::info;
use tracing_subscriber::EnvFilter;
use valesmp_site::state::AppState;
use valesmp_site::status::spawn_status_poller;
use valesmp_site::templates::Templates;
use valesmp_stats::{SiteConfig, StatsClient};

/// Path of the optional configuration file, relative to the working
/// directory.
const CONFIG_PATH: &str = "valesmp-config.yaml";

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // 1. Load configuration.
    let config = load_config();

    // 2. Initialize structured logging. RUST_LOG wins over the config level.
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(&config.logging.level)),
        )
        .with_target(true)
        .init();

    info!(
        backend_url = config.backend.base_url,
        status_address = config.status.address,
        "valesmp-web starting"
    );

    // 3. Build the stats client and shared state.
    let client = StatsClient::new(&config.backend.base_url, &config.backend.api_key);
    let templates = Templates::new()?;
    let state = Arc::new(AppState::new(client, templates));

    // 4. Spawn the status poller.
    let poller = spawn_status_poller(
        Arc::clone(&state),
        config.status.address.clone(),
        config.status.poll_interval_secs,
    );
    info!(
        poll_interval_secs = config.status.poll_interval_secs,
        "status poller spawned"
    );

    // 5. Run the HTTP server until Ctrl-C, then stop the poller.
    let result = valesmp_site::start_server(&config.server, state).await;
    poller.abort();
    result?;

    Ok(())
}

/// Load `valesmp-config.yaml`, falling back to defaults when absent.
///
/// A present-but-broken file is reported and the defaults are used; a
/// missing file is the normal case for local development. Env overrides
/// apply either way.
fn load_config() -> SiteConfig {
    let path = Path::new(CONFIG_PATH);
    if path.exists() {
        match SiteConfig::from_file(path) {
            Ok(config) => return config,
            Err(error) => {
                // Logging is not up yet; eprintln is all we have.
                eprintln!("failed to load {CONFIG_PATH}: {error}; using defaults");
            }
        }
    }
    let mut config = SiteConfig::default();
    config.backend.apply_env_overrides();
    config
}

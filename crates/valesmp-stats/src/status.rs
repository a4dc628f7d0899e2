//! Live server status query against the public mcsrvstat.us API.
//!
//! Unauthenticated, read-only, one request per poll. Failures are left to
//! the caller, which treats any error as "offline".

use tracing::instrument;
use valesmp_types::{McStatusResponse, ServerStatus};

use crate::error::{StatsError, StatsResult};

/// `User-Agent` sent to mcsrvstat.us, as requested by their usage policy.
const USER_AGENT: &str = "ValeSMP-Website/1.0 (https://valesmp.com)";

/// Base URL of the mcsrvstat.us v3 API.
const MCSRVSTAT_BASE: &str = "https://api.mcsrvstat.us/3";

/// Query mcsrvstat.us for the current status of `address`.
#[instrument(skip(http))]
pub async fn fetch_server_status(
    http: &reqwest::Client,
    address: &str,
) -> StatsResult<ServerStatus> {
    let url = format!("{MCSRVSTAT_BASE}/{address}");

    let response = http
        .get(&url)
        .header("User-Agent", USER_AGENT)
        .send()
        .await
        .map_err(|source| StatsError::Http {
            url: url.clone(),
            source,
        })?;

    let status = response.status();
    if !status.is_success() {
        return Err(StatsError::UnexpectedStatus {
            url: url.clone(),
            status,
        });
    }

    let raw: McStatusResponse =
        response.json().await.map_err(|source| StatsError::Decode {
            url: url.clone(),
            source,
        })?;

    Ok(ServerStatus::from(raw))
}

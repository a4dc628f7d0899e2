//! Authenticated HTTP client for the external stats backend.
//!
//! The backend tracks, aggregates, and ranks every Minecraft statistic;
//! this client only fetches and decodes. All endpoints are bearer-token
//! authenticated except `/health`. A single best-effort request is made
//! per call: no retry, no caching, no timeout beyond client defaults.

use serde::de::DeserializeOwned;
use tracing::instrument;
use valesmp_types::TopList;

use crate::error::{StatsError, StatsResult};

/// Client for the `ValeSMP` stats backend.
///
/// Wraps a [`reqwest::Client`] with the backend base URL and API key.
/// Construct one at startup and pass it into shared state explicitly --
/// there is deliberately no global instance.
#[derive(Debug, Clone)]
pub struct StatsClient {
    http: reqwest::Client,
    base_url: String,
    api_key: String,
}

impl StatsClient {
    /// Create a new client for the given backend.
    pub fn new(base_url: &str, api_key: &str) -> Self {
        Self::with_client(reqwest::Client::new(), base_url, api_key)
    }

    /// Create a new client using the provided [`reqwest::Client`].
    ///
    /// Use this when you need to configure timeouts, proxies, headers, etc.
    pub fn with_client(http: reqwest::Client, base_url: &str, api_key: &str) -> Self {
        Self {
            http,
            base_url: base_url.trim_end_matches('/').to_owned(),
            api_key: api_key.to_owned(),
        }
    }

    /// The configured backend base URL (no trailing slash).
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Fetch all statistics for a single player.
    #[instrument(skip(self))]
    pub async fn player_stats(&self, username: &str) -> StatsResult<serde_json::Value> {
        self.get_json(&player_stats_path(username)).await
    }

    /// Fetch the top-N leaderboard for one stat key.
    #[instrument(skip(self))]
    pub async fn top_players(&self, stat_key: &str, limit: u32) -> StatsResult<TopList> {
        self.get_json(&top_players_path(stat_key, limit)).await
    }

    /// Fetch the leaderboard for a named server event.
    #[instrument(skip(self))]
    pub async fn event_leaderboard(&self, event_name: &str) -> StatsResult<serde_json::Value> {
        self.get_json(&event_leaderboard_path(event_name)).await
    }

    /// Fetch the full statistics dump.
    #[instrument(skip(self))]
    pub async fn all_stats(&self) -> StatsResult<serde_json::Value> {
        self.get_json("/api/stats/all").await
    }

    /// Forward an arbitrary `/api/stats/` request for the proxy route.
    ///
    /// `path` is the already-joined path below `/api/stats/`; `raw_query`
    /// is appended verbatim with no re-encoding or validation.
    #[instrument(skip(self))]
    pub async fn forward(
        &self,
        path: &str,
        raw_query: Option<&str>,
    ) -> StatsResult<serde_json::Value> {
        let url = proxy_url(&self.base_url, path, raw_query);
        self.get_json_url(&url).await
    }

    /// Check backend health, collapsing every failure into `false`.
    pub async fn health(&self) -> bool {
        (self.health_probe().await).is_ok_and(|status| status.is_success())
    }

    /// Probe `GET {base_url}/health` and return the raw status code.
    ///
    /// Used by the proxy's `HEAD` variant, which must mirror the upstream
    /// status rather than collapse it to a boolean.
    #[instrument(skip(self))]
    pub async fn health_probe(&self) -> StatsResult<reqwest::StatusCode> {
        let url = format!("{}/health", self.base_url);
        let response = self
            .http
            .get(&url)
            .send()
            .await
            .map_err(|source| StatsError::Http {
                url: url.clone(),
                source,
            })?;
        Ok(response.status())
    }

    /// Probe `GET {base_url}/health` and decode the JSON body.
    ///
    /// Used by the site's own health route, which reports the upstream
    /// `status` field alongside its own verdict.
    #[instrument(skip(self))]
    pub async fn health_detail(&self) -> StatsResult<serde_json::Value> {
        let url = format!("{}/health", self.base_url);
        self.get_json_url(&url).await
    }

    /// GET a backend path (relative to the base URL) and decode JSON.
    async fn get_json<T: DeserializeOwned>(&self, path: &str) -> StatsResult<T> {
        let url = format!("{}{path}", self.base_url);
        self.get_json_url(&url).await
    }

    /// GET an absolute URL with auth headers and decode JSON.
    async fn get_json_url<T: DeserializeOwned>(&self, url: &str) -> StatsResult<T> {
        let response = self
            .http
            .get(url)
            .header("Authorization", format!("Bearer {}", self.api_key))
            .header("Content-Type", "application/json")
            .send()
            .await
            .map_err(|source| StatsError::Http {
                url: url.to_owned(),
                source,
            })?;

        let status = response.status();
        if status == reqwest::StatusCode::UNAUTHORIZED {
            return Err(StatsError::Unauthorized {
                url: url.to_owned(),
            });
        }
        if !status.is_success() {
            return Err(StatsError::UnexpectedStatus {
                url: url.to_owned(),
                status,
            });
        }

        response.json().await.map_err(|source| StatsError::Decode {
            url: url.to_owned(),
            source,
        })
    }
}

fn player_stats_path(username: &str) -> String {
    format!("/api/stats/player/{username}")
}

fn top_players_path(stat_key: &str, limit: u32) -> String {
    format!("/api/stats/top/{stat_key}?limit={limit}")
}

fn event_leaderboard_path(event_name: &str) -> String {
    format!("/api/stats/event/{event_name}")
}

/// Build the upstream URL for a proxied `/api/stats/` request.
///
/// The original query string is appended verbatim when present; path
/// segments arrive pre-joined from the router's catch-all capture.
pub fn proxy_url(base_url: &str, path: &str, raw_query: Option<&str>) -> String {
    match raw_query {
        Some(query) if !query.is_empty() => {
            format!("{base_url}/api/stats/{path}?{query}")
        }
        _ => format!("{base_url}/api/stats/{path}"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn proxy_url_joins_path_segments() {
        let url = proxy_url("http://backend:8080", "top/minecraft:custom:minecraft:jump", None);
        assert_eq!(
            url,
            "http://backend:8080/api/stats/top/minecraft:custom:minecraft:jump"
        );
    }

    #[test]
    fn proxy_url_appends_query_verbatim() {
        let url = proxy_url(
            "http://backend:8080",
            "top/minecraft:mined:minecraft:stone",
            Some("limit=50&window=all%20time"),
        );
        assert_eq!(
            url,
            "http://backend:8080/api/stats/top/minecraft:mined:minecraft:stone?limit=50&window=all%20time"
        );
    }

    #[test]
    fn proxy_url_ignores_empty_query() {
        let url = proxy_url("http://backend:8080", "all", Some(""));
        assert_eq!(url, "http://backend:8080/api/stats/all");
    }

    #[test]
    fn proxy_url_deep_path() {
        let url = proxy_url("http://backend:8080", "event/halloween2024/winners", None);
        assert_eq!(
            url,
            "http://backend:8080/api/stats/event/halloween2024/winners"
        );
    }

    #[test]
    fn endpoint_paths_match_the_backend_api() {
        assert_eq!(player_stats_path("Steve"), "/api/stats/player/Steve");
        assert_eq!(
            top_players_path("minecraft:custom:minecraft:deaths", 50),
            "/api/stats/top/minecraft:custom:minecraft:deaths?limit=50"
        );
        assert_eq!(
            event_leaderboard_path("halloween2024"),
            "/api/stats/event/halloween2024"
        );
    }

    #[test]
    fn client_trims_trailing_slash() {
        let client = StatsClient::new("http://backend:8080/", "key");
        assert_eq!(client.base_url(), "http://backend:8080");
    }
}

//! Server status snapshot and the mcsrvstat.us wire model.
//!
//! The landing page shows the live player count. A background task polls
//! the public mcsrvstat.us API and stores a [`ServerStatus`] snapshot;
//! handlers only ever read the snapshot, never fetch inline.

use serde::{Deserialize, Serialize};

/// Point-in-time view of the Minecraft server as seen by mcsrvstat.us.
///
/// Any poll failure produces the offline default -- the site never shows
/// a "presumed online" state it cannot back up with a successful query.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServerStatus {
    /// Whether the server answered the status query.
    pub online: bool,
    /// Players currently online (0 when offline).
    pub players: u32,
    /// Player slot capacity (0 when offline).
    pub max: u32,
    /// Server version string when reported.
    pub version: Option<String>,
    /// First clean MOTD line when reported.
    pub motd: Option<String>,
}

/// Wire model of `https://api.mcsrvstat.us/3/<address>`.
///
/// Only the fields the site consumes are modeled; everything else in the
/// response is ignored.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct McStatusResponse {
    /// Whether the queried server is online.
    #[serde(default)]
    pub online: bool,
    /// Player counts, present when online.
    #[serde(default)]
    pub players: Option<McPlayers>,
    /// Version string, present when online.
    #[serde(default)]
    pub version: Option<String>,
    /// Message of the day, present when online.
    #[serde(default)]
    pub motd: Option<McMotd>,
}

/// Player counts inside a mcsrvstat response.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
pub struct McPlayers {
    /// Players currently online.
    #[serde(default)]
    pub online: u32,
    /// Player slot capacity.
    #[serde(default)]
    pub max: u32,
}

/// Message-of-the-day lines inside a mcsrvstat response.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct McMotd {
    /// MOTD lines with formatting codes stripped.
    #[serde(default)]
    pub clean: Vec<String>,
}

impl From<McStatusResponse> for ServerStatus {
    fn from(raw: McStatusResponse) -> Self {
        let players = if raw.online {
            raw.players.unwrap_or_default()
        } else {
            McPlayers::default()
        };
        Self {
            online: raw.online,
            players: players.online,
            max: players.max,
            version: raw.version,
            motd: raw.motd.and_then(|m| m.clean.first().cloned()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn online_response_maps_counts_and_motd() {
        let raw: Option<McStatusResponse> = serde_json::from_str(
            r#"{
                "online": true,
                "players": {"online": 12, "max": 40},
                "version": "1.21.10",
                "motd": {"clean": ["Welcome to ValeSMP", "Season 1"]}
            }"#,
        )
        .ok();
        let status = raw.map(ServerStatus::from);
        assert_eq!(
            status,
            Some(ServerStatus {
                online: true,
                players: 12,
                max: 40,
                version: Some(String::from("1.21.10")),
                motd: Some(String::from("Welcome to ValeSMP")),
            })
        );
    }

    #[test]
    fn offline_response_zeroes_counts_even_if_present() {
        let raw = McStatusResponse {
            online: false,
            players: Some(McPlayers { online: 5, max: 40 }),
            version: None,
            motd: None,
        };
        let status = ServerStatus::from(raw);
        assert!(!status.online);
        assert_eq!(status.players, 0);
        assert_eq!(status.max, 0);
    }

    #[test]
    fn default_snapshot_is_offline() {
        let status = ServerStatus::default();
        assert!(!status.online);
        assert_eq!(status.players, 0);
    }
}

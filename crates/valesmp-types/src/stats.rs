//! Award, ranking, and medal types derived from the external stats backend.
//!
//! The backend exposes per-statistic top-N leaderboards; everything in this
//! module is a transient projection of those lists. Nothing here is
//! persisted -- awards and the Hall of Fame are rebuilt on every load.

use serde::{Deserialize, Serialize};

/// A medal awarded for a top-3 placement in a single award.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Medal {
    /// First place.
    Gold,
    /// Second place.
    Silver,
    /// Third place.
    Bronze,
}

impl Medal {
    /// Crown score contribution of this medal (gold 3, silver 2, bronze 1).
    pub const fn weight(self) -> u64 {
        match self {
            Self::Gold => 3,
            Self::Silver => 2,
            Self::Bronze => 1,
        }
    }

    /// The medal for a zero-based leaderboard position, if any.
    pub const fn for_position(position: usize) -> Option<Self> {
        match position {
            0 => Some(Self::Gold),
            1 => Some(Self::Silver),
            2 => Some(Self::Bronze),
            _ => None,
        }
    }

    /// Emoji used when rendering this medal.
    pub const fn emoji(self) -> &'static str {
        match self {
            Self::Gold => "\u{1f947}",
            Self::Silver => "\u{1f948}",
            Self::Bronze => "\u{1f949}",
        }
    }
}

/// Sort direction for an award's leaderboard.
///
/// Almost every award ranks descending ("most X"); a few rank ascending
/// ("fewest deaths"), where lower values win.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SortOrder {
    /// Higher values rank first.
    #[default]
    Descending,
    /// Lower values rank first.
    Ascending,
}

/// A named, human-labeled wrapper around one or more raw backend stat keys.
///
/// Definitions are static and compiled into the site; they are never
/// mutated at runtime. When `stat_keys` names more than one key the
/// players' values are summed across keys before ranking.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AwardDefinition {
    /// Stable identifier used in value formatting and markup.
    pub id: &'static str,
    /// Display name, e.g. "Diamond Hunter".
    pub name: &'static str,
    /// One-line objective, e.g. "most diamonds mined".
    pub objective: &'static str,
    /// Emoji icon shown next to the award.
    pub icon: &'static str,
    /// The backend stat keys this award aggregates over.
    pub stat_keys: &'static [&'static str],
    /// Leaderboard sort direction.
    pub order: SortOrder,
}

/// A single player's placement for one award.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Ranking {
    /// Player display name.
    pub player: String,
    /// Combined stat value for this award.
    pub value: u64,
    /// Medal for a top-3 position, absent otherwise.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub medal: Option<Medal>,
}

/// The declared winner of an award.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Winner {
    /// Player display name.
    pub name: String,
    /// The winning value.
    pub value: u64,
}

/// One award: a statistic's top-10 leaderboard plus its declared winner.
///
/// `winner` is `None` when no player has any value for the award's stat
/// keys; the display layer renders that as "Nobody" with value 0. The
/// award itself is always emitted, never omitted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Award {
    /// Stable identifier from the defining [`AwardDefinition`].
    pub id: String,
    /// Display name.
    pub name: String,
    /// One-line objective.
    pub objective: String,
    /// Emoji icon.
    pub icon: String,
    /// The winner, absent when no player contributed.
    pub winner: Option<Winner>,
    /// Top-10 rankings, best first.
    pub rankings: Vec<Ranking>,
}

/// Per-player medal counts across all awards.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MedalTally {
    /// Gold medal count.
    pub gold: u32,
    /// Silver medal count.
    pub silver: u32,
    /// Bronze medal count.
    pub bronze: u32,
}

impl MedalTally {
    /// Record one medal in the tally.
    pub const fn record(&mut self, medal: Medal) {
        match medal {
            Medal::Gold => self.gold = self.gold.saturating_add(1),
            Medal::Silver => self.silver = self.silver.saturating_add(1),
            Medal::Bronze => self.bronze = self.bronze.saturating_add(1),
        }
    }

    /// Weighted crown score: `3*gold + 2*silver + 1*bronze`.
    pub fn crown_score(self) -> u64 {
        let gold = u64::from(self.gold).saturating_mul(Medal::Gold.weight());
        let silver = u64::from(self.silver).saturating_mul(Medal::Silver.weight());
        let bronze = u64::from(self.bronze).saturating_mul(Medal::Bronze.weight());
        gold.saturating_add(silver).saturating_add(bronze)
    }
}

/// One row of the cross-award Hall of Fame.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HallOfFameEntry {
    /// Player display name. No stored identity exists beyond this.
    pub name: String,
    /// Medal counts across all awards.
    pub medals: MedalTally,
    /// Weighted crown score used for ranking.
    pub crown_score: u64,
}

/// One entry of a backend top-N leaderboard response.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TopEntry {
    /// Player username.
    pub username: String,
    /// Raw stat value.
    pub value: u64,
    /// Player UUID when the backend returns one.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub uuid: Option<String>,
}

/// Wire model of `GET /api/stats/top/:statKey` on the stats backend.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TopList {
    /// Leaderboard entries, already sorted by the backend.
    #[serde(default)]
    pub players: Vec<TopEntry>,
}

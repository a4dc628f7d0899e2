//! Award ranking and the cross-award Hall of Fame.
//!
//! The backend returns one sorted top-N list per stat key. This module
//! derives everything the stats page shows from those lists:
//!
//! 1. Per-player values are summed across a definition's stat keys
//!    (missing entries count as 0).
//! 2. Each award is sorted by combined value, truncated to the top 10,
//!    and medals are assigned strictly by position.
//! 3. The Hall of Fame tallies medals per player name across all awards
//!    and ranks by the weighted crown score.
//!
//! Everything here is pure except [`load_awards`], which performs the
//! concurrent batch fetch. An individual fetch failure contributes an
//! empty list and never aborts the batch.

use std::collections::BTreeMap;

use tracing::warn;
use valesmp_types::{
    Award, AwardDefinition, HallOfFameEntry, Medal, MedalTally, Ranking, SortOrder, TopList,
    Winner,
};

use crate::catalog;
use crate::client::StatsClient;

/// Number of rankings kept per award.
pub const TOP_RANKINGS: usize = 10;

/// Entries fetched per stat key. Wider than the displayed top 10 so that
/// multi-key awards rank correctly when a player is just outside one
/// key's top 10 but inside another's.
pub const FETCH_LIMIT: u32 = 50;

/// The unique stat keys across a set of definitions, first-seen order.
pub fn unique_stat_keys(definitions: &[AwardDefinition]) -> Vec<&'static str> {
    let mut seen = Vec::new();
    for def in definitions {
        for key in def.stat_keys {
            if !seen.contains(key) {
                seen.push(*key);
            }
        }
    }
    seen
}

/// Sum each player's value across the definition's stat keys.
///
/// A player absent from one key's list simply contributes 0 for that key;
/// this is a plain linear combination, not a weighted score.
pub fn combined_values(
    definition: &AwardDefinition,
    lists: &BTreeMap<&str, TopList>,
) -> BTreeMap<String, u64> {
    let mut values: BTreeMap<String, u64> = BTreeMap::new();
    for key in definition.stat_keys {
        let Some(list) = lists.get(key) else {
            continue;
        };
        for entry in &list.players {
            let slot = values.entry(entry.username.clone()).or_insert(0);
            *slot = slot.saturating_add(entry.value);
        }
    }
    values
}

/// Rank one award from its combined per-player values.
///
/// Sorts per the definition's order, truncates to [`TOP_RANKINGS`], and
/// assigns medals to positions 0/1/2. With no contributing players the
/// award is still produced, with an empty winner and no rankings.
pub fn rank_award(definition: &AwardDefinition, values: &BTreeMap<String, u64>) -> Award {
    let mut entries: Vec<(&String, u64)> = values.iter().map(|(name, v)| (name, *v)).collect();
    // Stable sort keeps BTreeMap name order for equal values.
    match definition.order {
        SortOrder::Descending => entries.sort_by(|a, b| b.1.cmp(&a.1)),
        SortOrder::Ascending => entries.sort_by(|a, b| a.1.cmp(&b.1)),
    }
    entries.truncate(TOP_RANKINGS);

    let rankings: Vec<Ranking> = entries
        .iter()
        .enumerate()
        .map(|(position, (name, value))| Ranking {
            player: (*name).clone(),
            value: *value,
            medal: Medal::for_position(position),
        })
        .collect();

    let winner = rankings.first().map(|first| Winner {
        name: first.player.clone(),
        value: first.value,
    });

    Award {
        id: definition.id.to_owned(),
        name: definition.name.to_owned(),
        objective: definition.objective.to_owned(),
        icon: definition.icon.to_owned(),
        winner,
        rankings,
    }
}

/// Build every award in `definitions` from the fetched top lists.
pub fn build_awards(
    definitions: &[AwardDefinition],
    lists: &BTreeMap<&str, TopList>,
) -> Vec<Award> {
    definitions
        .iter()
        .map(|def| rank_award(def, &combined_values(def, lists)))
        .collect()
}

/// Tally medals per player across all awards and rank by crown score.
///
/// Ties keep the tally's name order (the underlying sort is stable);
/// no further total order is guaranteed or promised.
pub fn hall_of_fame(awards: &[Award]) -> Vec<HallOfFameEntry> {
    let mut tallies: BTreeMap<&str, MedalTally> = BTreeMap::new();
    for award in awards {
        for ranking in &award.rankings {
            if let Some(medal) = ranking.medal {
                tallies
                    .entry(ranking.player.as_str())
                    .or_default()
                    .record(medal);
            }
        }
    }

    let mut entries: Vec<HallOfFameEntry> = tallies
        .into_iter()
        .map(|(name, medals)| HallOfFameEntry {
            name: name.to_owned(),
            medals,
            crown_score: medals.crown_score(),
        })
        .collect();
    entries.sort_by(|a, b| b.crown_score.cmp(&a.crown_score));
    entries
}

/// Fetch every unique stat key's top list once, concurrently, and build
/// the full award set.
///
/// A failed fetch is logged and treated as an empty result for that key;
/// sibling requests are not cancelled.
pub async fn load_awards(client: &StatsClient) -> Vec<Award> {
    let keys = unique_stat_keys(catalog::AWARDS);
    let fetches = keys.into_iter().map(|key| async move {
        match client.top_players(key, FETCH_LIMIT).await {
            Ok(list) => (key, list),
            Err(error) => {
                warn!(stat_key = key, error = %error, "top list fetch failed, treating as empty");
                (key, TopList::default())
            }
        }
    });

    let lists: BTreeMap<&str, TopList> = futures::future::join_all(fetches).await.into_iter().collect();
    build_awards(catalog::AWARDS, &lists)
}

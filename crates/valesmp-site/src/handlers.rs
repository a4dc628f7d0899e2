//! Page and JSON handlers for the site server.
//!
//! | Method | Path | Description |
//! |--------|------|-------------|
//! | `GET` | `/` | Landing page with the live player count |
//! | `GET` | `/guide` | Guide, opened at the default entry |
//! | `GET` | `/guide/{item}` | One guide entry (404 when unknown) |
//! | `GET` | `/maps` | Live world map embeds |
//! | `GET` | `/stats` | Awards and the Hall of Fame |
//! | `GET` | `/privacy`, `/terms` | Legal pages |
//! | `GET` | `/api/player-count` | The current status snapshot as JSON |
//!
//! Pages are rendered server-side; the only JSON endpoint here is the
//! player count (the stats proxy lives in [`crate::proxy`]).

use std::sync::Arc;

use axum::extract::{Path, State};
use axum::response::Html;
use axum::Json;
use serde_json::{json, Value};
use valesmp_content::{guide, legal, maps, markdown};
use valesmp_stats::{catalog, format, rank};
use valesmp_types::{Award, HallOfFameEntry, ServerStatus};

use crate::error::SiteError;
use crate::state::AppState;

/// `GET /` -- landing page.
pub async fn index(State(state): State<Arc<AppState>>) -> Result<Html<String>, SiteError> {
    let status = state.status.read().await.clone();
    let context = json!({ "status": status });
    Ok(Html(state.templates.render("index", &context)?))
}

/// `GET /api/player-count` -- the status snapshot as JSON.
///
/// Served from memory; this endpoint never triggers a fetch.
pub async fn player_count(State(state): State<Arc<AppState>>) -> Json<ServerStatus> {
    Json(state.status.read().await.clone())
}

/// `GET /guide` -- the guide, opened at the default entry.
pub async fn guide_index(state: State<Arc<AppState>>) -> Result<Html<String>, SiteError> {
    guide_entry(state, Path(String::from(guide::DEFAULT_ENTRY))).await
}

/// `GET /guide/{item}` -- one guide entry.
// Handlers must be async for axum even when fully synchronous.
#[allow(clippy::unused_async)]
pub async fn guide_entry(
    State(state): State<Arc<AppState>>,
    Path(item): Path<String>,
) -> Result<Html<String>, SiteError> {
    let entry = guide::entry(&item)
        .ok_or_else(|| SiteError::NotFound(format!("no guide entry named {item}")))?;

    let sections: Vec<Value> = guide::SECTIONS
        .iter()
        .map(|section| {
            json!({
                "title": section.title,
                "items": section.items.iter().map(|i| json!({
                    "id": i.id,
                    "title": i.title,
                    "badge": i.badge,
                })).collect::<Vec<_>>(),
            })
        })
        .collect();

    let quick_commands: Vec<Value> = guide::QUICK_COMMANDS
        .iter()
        .map(|cmd| {
            json!({
                "command": cmd.command,
                "description": cmd.description,
            })
        })
        .collect();

    let context = json!({
        "sections": sections,
        "quick_commands": quick_commands,
        "entry": {
            "title": entry.title,
            "last_updated": entry.last_updated,
            "html": markdown::render(entry.content),
        },
    });
    Ok(Html(state.templates.render("guide", &context)?))
}

/// `GET /maps` -- live world map embeds.
#[allow(clippy::unused_async)]
pub async fn maps_page(State(state): State<Arc<AppState>>) -> Result<Html<String>, SiteError> {
    let maps: Vec<Value> = maps::WORLD_MAPS
        .iter()
        .map(|map| {
            json!({
                "id": map.id,
                "name": map.name,
                "url": map.url,
                "description": map.description,
            })
        })
        .collect();

    let context = json!({ "maps": maps });
    Ok(Html(state.templates.render("maps", &context)?))
}

/// `GET /privacy` -- the privacy policy.
#[allow(clippy::unused_async)]
pub async fn privacy_page(State(state): State<Arc<AppState>>) -> Result<Html<String>, SiteError> {
    legal_page(&state, &legal::PRIVACY)
}

/// `GET /terms` -- the terms of use.
#[allow(clippy::unused_async)]
pub async fn terms_page(State(state): State<Arc<AppState>>) -> Result<Html<String>, SiteError> {
    legal_page(&state, &legal::TERMS)
}

fn legal_page(state: &AppState, doc: &legal::LegalDoc) -> Result<Html<String>, SiteError> {
    let context = json!({
        "doc": {
            "title": doc.title,
            "last_updated": doc.last_updated,
            "html": markdown::render(doc.content),
        },
    });
    Ok(Html(state.templates.render("legal", &context)?))
}

/// `GET /stats` -- awards and the Hall of Fame.
///
/// When the backend is unreachable the page renders with an error
/// banner and a retry link instead of failing the request. Individual
/// stat fetch failures inside the batch are already tolerated by the
/// ranking layer.
pub async fn stats_page(State(state): State<Arc<AppState>>) -> Result<Html<String>, SiteError> {
    if !state.client.health().await {
        let context = json!({ "error": true });
        return Ok(Html(state.templates.render("stats", &context)?));
    }

    let awards = rank::load_awards(&state.client).await;
    let hall = rank::hall_of_fame(&awards);

    let context = json!({
        "error": false,
        "awards": awards.iter().map(award_view).collect::<Vec<_>>(),
        "hall_of_fame": hall.iter().map(hall_view).collect::<Vec<_>>(),
    });
    Ok(Html(state.templates.render("stats", &context)?))
}

/// Project one award into its display form: formatted values, medal
/// emoji, and the explicit "no winner yet" state left to the template.
fn award_view(award: &Award) -> Value {
    // Values are formatted against the award's first stat key; multi-key
    // awards always combine keys with the same unit.
    let stat_key = catalog::find(&award.id)
        .and_then(|def| def.stat_keys.first().copied())
        .unwrap_or_default();

    json!({
        "id": award.id,
        "icon": award.icon,
        "name": award.name,
        "objective": award.objective,
        "winner": award.winner.as_ref().map(|w| json!({
            "name": w.name,
            "value": format::format_stat_value(stat_key, w.value),
        })),
        "rankings": award.rankings.iter().map(|r| json!({
            "player": r.player,
            "value": format::format_stat_value(stat_key, r.value),
            "medal": r.medal.map(valesmp_types::Medal::emoji),
        })).collect::<Vec<_>>(),
    })
}

fn hall_view(entry: &HallOfFameEntry) -> Value {
    json!({
        "name": entry.name,
        "medals": {
            "gold": entry.medals.gold,
            "silver": entry.medals.silver,
            "bronze": entry.medals.bronze,
        },
        "crown_score": entry.crown_score,
    })
}

#[cfg(test)]
mod tests {
    use valesmp_types::{MedalTally, Ranking, Winner};

    use super::*;

    #[test]
    fn award_view_formats_values_per_stat_key() {
        let award = Award {
            id: String::from("dedication"),
            name: String::from("Dedication Award"),
            objective: String::from("most time played"),
            icon: String::from("\u{23f0}"),
            winner: Some(Winner {
                name: String::from("Steve"),
                value: 1_872_000,
            }),
            rankings: vec![Ranking {
                player: String::from("Steve"),
                value: 1_872_000,
                medal: Some(valesmp_types::Medal::Gold),
            }],
        };
        let view = award_view(&award);
        // play_time is tick-based, 1_872_000 ticks is 1d 2h.
        assert_eq!(
            view.pointer("/winner/value").and_then(Value::as_str),
            Some("1d 2h")
        );
        assert_eq!(
            view.pointer("/rankings/0/medal").and_then(Value::as_str),
            Some("\u{1f947}")
        );
    }

    #[test]
    fn award_view_keeps_missing_winner_null() {
        let award = Award {
            id: String::from("fisherman"),
            name: String::from("Master Fisherman"),
            objective: String::from("most fish caught"),
            icon: String::from("\u{1f3a3}"),
            winner: None,
            rankings: Vec::new(),
        };
        let view = award_view(&award);
        assert!(view.pointer("/winner").is_some_and(Value::is_null));
    }

    #[test]
    fn hall_view_carries_the_full_tally() {
        let entry = HallOfFameEntry {
            name: String::from("Alex"),
            medals: MedalTally {
                gold: 2,
                silver: 1,
                bronze: 0,
            },
            crown_score: 8,
        };
        let view = hall_view(&entry);
        assert_eq!(view.pointer("/medals/gold").and_then(Value::as_u64), Some(2));
        assert_eq!(view.pointer("/crown_score").and_then(Value::as_u64), Some(8));
    }
}

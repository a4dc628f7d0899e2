//! The static award catalog displayed on the stats page.
//!
//! Each definition names one or more backend stat keys. Multi-key
//! definitions merge concepts the backend tracks separately, like the two
//! ore variants of diamond or the five raid mobs; per-player values are
//! summed across the keys before ranking.

use valesmp_types::{AwardDefinition, SortOrder};

/// All awards the stats page displays, in display order.
pub const AWARDS: &[AwardDefinition] = &[
    AwardDefinition {
        id: "dedication",
        name: "Dedication",
        objective: "most time played",
        icon: "\u{23f0}",
        stat_keys: &["minecraft:custom:minecraft:play_time"],
        order: SortOrder::Descending,
    },
    AwardDefinition {
        id: "explorer",
        name: "World Explorer",
        objective: "longest distance walked",
        icon: "\u{1f5fa}\u{fe0f}",
        stat_keys: &["minecraft:custom:minecraft:walk_one_cm"],
        order: SortOrder::Descending,
    },
    AwardDefinition {
        id: "miner",
        name: "Master Miner",
        objective: "most stone mined",
        icon: "\u{26cf}\u{fe0f}",
        stat_keys: &[
            "minecraft:mined:minecraft:stone",
            "minecraft:mined:minecraft:deepslate",
        ],
        order: SortOrder::Descending,
    },
    AwardDefinition {
        id: "diamond_hunter",
        name: "Diamond Hunter",
        objective: "most diamonds mined",
        icon: "\u{1f48e}",
        stat_keys: &[
            "minecraft:mined:minecraft:diamond_ore",
            "minecraft:mined:minecraft:deepslate_diamond_ore",
        ],
        order: SortOrder::Descending,
    },
    AwardDefinition {
        id: "monster_slayer",
        name: "Monster Slayer",
        objective: "most hostile mobs killed",
        icon: "\u{2694}\u{fe0f}",
        stat_keys: &["minecraft:custom:minecraft:mob_kills"],
        order: SortOrder::Descending,
    },
    AwardDefinition {
        id: "survivor",
        name: "Survivor",
        objective: "fewest deaths",
        icon: "\u{1f49a}",
        stat_keys: &["minecraft:custom:minecraft:deaths"],
        order: SortOrder::Ascending,
    },
    AwardDefinition {
        id: "fisherman",
        name: "Master Fisherman",
        objective: "most fish caught",
        icon: "\u{1f3a3}",
        stat_keys: &["minecraft:custom:minecraft:fish_caught"],
        order: SortOrder::Descending,
    },
    AwardDefinition {
        id: "sprinter",
        name: "Speed Demon",
        objective: "longest distance sprinted",
        icon: "\u{1f4a8}",
        stat_keys: &["minecraft:custom:minecraft:sprint_one_cm"],
        order: SortOrder::Descending,
    },
    AwardDefinition {
        id: "dragon_slayer",
        name: "Dragon Slayer",
        objective: "most ender dragons killed",
        icon: "\u{1f6e1}\u{fe0f}",
        stat_keys: &["minecraft:killed:minecraft:ender_dragon"],
        order: SortOrder::Descending,
    },
    AwardDefinition {
        id: "raid_defender",
        name: "Raid Defender",
        objective: "most raid mobs killed",
        icon: "\u{1f3f0}",
        stat_keys: &[
            "minecraft:killed:minecraft:pillager",
            "minecraft:killed:minecraft:vindicator",
            "minecraft:killed:minecraft:ravager",
            "minecraft:killed:minecraft:evoker",
            "minecraft:killed:minecraft:witch",
        ],
        order: SortOrder::Descending,
    },
    AwardDefinition {
        id: "mob_grinder",
        name: "Mob Grinder",
        objective: "most creepers killed",
        icon: "\u{1f480}",
        stat_keys: &["minecraft:killed:minecraft:creeper"],
        order: SortOrder::Descending,
    },
];

/// Look up a definition by its stable id.
pub fn find(id: &str) -> Option<&'static AwardDefinition> {
    AWARDS.iter().find(|def| def.id == id)
}

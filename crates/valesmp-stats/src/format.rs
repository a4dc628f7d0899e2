//! Human-readable display formatting for raw backend stat keys and values.
//!
//! Stat keys look like `minecraft:custom:minecraft:play_time` or
//! `minecraft:mined:minecraft:diamond_ore`. Values are raw counters whose
//! unit depends on the stat: game ticks for time, centimetres for
//! distance, half-hearts for damage, plain counts for everything else.
//!
//! All arithmetic is integer-only; fractional renderings (km, hearts) are
//! produced from quotient and remainder.

/// Ticks per second in the game clock.
const TICKS_PER_SECOND: u64 = 20;

/// Centimetres per kilometre.
const CM_PER_KM: u64 = 100_000;

/// Display label for a raw stat key.
///
/// Custom stats use a curated label table; other categories render as
/// `<Category> <Item>` with `snake_case` converted to Title Case.
/// Malformed keys are returned unchanged.
pub fn format_stat_name(stat_key: &str) -> String {
    let parts: Vec<&str> = stat_key.split(':').collect();
    let (Some(category), Some(item)) = (parts.get(1), parts.last()) else {
        return stat_key.to_owned();
    };
    if parts.len() < 3 {
        return stat_key.to_owned();
    }

    if *category == "custom" {
        return custom_stat_label(item)
            .map_or_else(|| title_case(item), str::to_owned);
    }

    let category_label = match *category {
        "mined" => "Mined".to_owned(),
        "used" => "Used".to_owned(),
        "crafted" => "Crafted".to_owned(),
        "broken" => "Broken".to_owned(),
        "picked_up" => "Picked Up".to_owned(),
        "dropped" => "Dropped".to_owned(),
        "killed" => "Killed".to_owned(),
        "killed_by" => "Killed By".to_owned(),
        other => title_case(other),
    };
    format!("{category_label} {}", title_case(item))
}

/// Render a raw stat value in the unit its key implies.
///
/// Time stats count game ticks and render as the two most significant
/// units (`1d 2h`, `3h 4m`, `5m 6s`, `7s`). Distance stats count
/// centimetres and render as km (two decimals), metres, or centimetres.
/// Damage counts half-hearts and renders as hearts. Anything else is a
/// plain count with thousands separators from 1000 up.
pub fn format_stat_value(stat_key: &str, value: u64) -> String {
    if stat_key.contains("time") || stat_key.contains("one_minute") {
        return format_ticks(value);
    }
    if stat_key.contains("one_cm") || stat_key.contains("distance") {
        return format_distance_cm(value);
    }
    if stat_key.contains("damage") {
        return format_half_hearts(value);
    }
    group_thousands(value)
}

/// Coarse grouping of a stat key, used to pick an icon.
pub fn stat_category(stat_key: &str) -> &'static str {
    if stat_key.contains("time") {
        "time"
    } else if stat_key.contains("distance") || stat_key.contains("one_cm") {
        "movement"
    } else if stat_key.contains("mined") {
        "mining"
    } else if stat_key.contains("used") || stat_key.contains("crafted") {
        "building"
    } else if stat_key.contains("killed") || stat_key.contains("damage") {
        "combat"
    } else if stat_key.contains("fish") {
        "fishing"
    } else if stat_key.contains("food") || stat_key.contains("eaten") {
        "food"
    } else {
        "other"
    }
}

/// Emoji for a stat key's category.
pub fn stat_icon(stat_key: &str) -> &'static str {
    match stat_category(stat_key) {
        "time" => "\u{23f0}",
        "movement" => "\u{1f3c3}",
        "mining" => "\u{26cf}\u{fe0f}",
        "building" => "\u{1f528}",
        "combat" => "\u{2694}\u{fe0f}",
        "fishing" => "\u{1f3a3}",
        "food" => "\u{1f35e}",
        _ => "\u{1f4ca}",
    }
}

fn format_ticks(ticks: u64) -> String {
    let seconds = ticks / TICKS_PER_SECOND;
    let minutes = seconds / 60;
    let hours = minutes / 60;
    let days = hours / 24;

    if days > 0 {
        format!("{days}d {}h", hours % 24)
    } else if hours > 0 {
        format!("{hours}h {}m", minutes % 60)
    } else if minutes > 0 {
        format!("{minutes}m {}s", seconds % 60)
    } else {
        format!("{seconds}s")
    }
}

fn format_distance_cm(cm: u64) -> String {
    if cm >= CM_PER_KM {
        // Round to hundredths of a km without going through floats. The
        // carry matters: 199,999 cm is 2.00 km, not 1.100.
        let total_hundredths = cm.saturating_add(500) / 1000;
        let km = total_hundredths / 100;
        let hundredths = total_hundredths % 100;
        format!("{km}.{hundredths:02} km")
    } else if cm >= 100 {
        format!("{} m", cm / 100)
    } else {
        format!("{cm} cm")
    }
}

fn format_half_hearts(half_hearts: u64) -> String {
    let whole = half_hearts / 2;
    let tenth = if half_hearts % 2 == 0 { 0 } else { 5 };
    format!("{whole}.{tenth} \u{2764}")
}

/// Insert comma separators into a count, e.g. `1234567` -> `1,234,567`.
fn group_thousands(value: u64) -> String {
    if value < 1000 {
        return value.to_string();
    }
    let digits = value.to_string();
    let mut grouped = String::with_capacity(digits.len().saturating_add(digits.len() / 3));
    for (i, ch) in digits.chars().enumerate() {
        let remaining = digits.len().saturating_sub(i);
        if i > 0 && remaining % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    grouped
}

fn title_case(snake: &str) -> String {
    snake
        .split('_')
        .map(|word| {
            let mut chars = word.chars();
            chars.next().map_or_else(String::new, |first| {
                format!("{}{}", first.to_uppercase(), chars.as_str())
            })
        })
        .collect::<Vec<_>>()
        .join(" ")
}

/// Curated labels for `minecraft:custom` stats whose raw names read badly
/// when title-cased.
fn custom_stat_label(item: &str) -> Option<&'static str> {
    Some(match item {
        "play_time" => "Play Time",
        "walk_one_cm" => "Distance Walked",
        "sprint_one_cm" => "Distance Sprinted",
        "fly_one_cm" => "Distance Flown",
        "swim_one_cm" => "Distance Swum",
        "fall_one_cm" => "Distance Fallen",
        "climb_one_cm" => "Distance Climbed",
        "crouch_one_cm" => "Distance Crouched",
        "minecart_one_cm" => "Distance by Minecart",
        "boat_one_cm" => "Distance by Boat",
        "pig_one_cm" => "Distance by Pig",
        "horse_one_cm" => "Distance by Horse",
        "aviate_one_cm" => "Distance by Elytra",
        "jump" => "Jumps",
        "drop" => "Items Dropped",
        "damage_dealt" => "Damage Dealt",
        "damage_taken" => "Damage Taken",
        "deaths" => "Deaths",
        "mob_kills" => "Mob Kills",
        "player_kills" => "Player Kills",
        "fish_caught" => "Fish Caught",
        "animals_bred" => "Animals Bred",
        "leave_game" => "Times Left Game",
        "sneak_time" => "Time Sneaking",
        "time_since_death" => "Time Since Death",
        "time_since_rest" => "Time Since Rest",
        "talked_to_villager" => "Times Talked to Villager",
        "traded_with_villager" => "Times Traded with Villager",
        "cake_slices_eaten" => "Cake Slices Eaten",
        "item_enchanted" => "Items Enchanted",
        "record_played" => "Records Played",
        "furnace_interaction" => "Furnace Uses",
        "crafting_table_interaction" => "Crafting Table Uses",
        "chest_opened" => "Chests Opened",
        "sleep_in_bed" => "Times Slept in Bed",
        "shulker_box_opened" => "Shulker Boxes Opened",
        "enderchest_opened" => "Ender Chests Opened",
        _ => return None,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn custom_stats_use_curated_labels() {
        assert_eq!(
            format_stat_name("minecraft:custom:minecraft:play_time"),
            "Play Time"
        );
        assert_eq!(
            format_stat_name("minecraft:custom:minecraft:aviate_one_cm"),
            "Distance by Elytra"
        );
    }

    #[test]
    fn custom_stats_fall_back_to_title_case() {
        assert_eq!(
            format_stat_name("minecraft:custom:minecraft:open_barrel"),
            "Open Barrel"
        );
    }

    #[test]
    fn categorised_stats_prefix_the_category() {
        assert_eq!(
            format_stat_name("minecraft:mined:minecraft:diamond_ore"),
            "Mined Diamond Ore"
        );
        assert_eq!(
            format_stat_name("minecraft:killed:minecraft:ender_dragon"),
            "Killed Ender Dragon"
        );
        assert_eq!(
            format_stat_name("minecraft:picked_up:minecraft:stone"),
            "Picked Up Stone"
        );
    }

    #[test]
    fn malformed_keys_pass_through() {
        assert_eq!(format_stat_name("play_time"), "play_time");
    }

    #[test]
    fn time_values_render_two_most_significant_units() {
        let key = "minecraft:custom:minecraft:play_time";
        assert_eq!(format_stat_value(key, 100), "5s");
        // 90 seconds, 3h04m, and 1d02h worth of ticks.
        assert_eq!(format_stat_value(key, 1800), "1m 30s");
        assert_eq!(format_stat_value(key, 220_800), "3h 4m");
        assert_eq!(format_stat_value(key, 1_872_000), "1d 2h");
    }

    #[test]
    fn distance_values_scale_units() {
        let key = "minecraft:custom:minecraft:walk_one_cm";
        assert_eq!(format_stat_value(key, 42), "42 cm");
        assert_eq!(format_stat_value(key, 500), "5 m");
        assert_eq!(format_stat_value(key, 123_456), "1.23 km");
        assert_eq!(format_stat_value(key, 100_000), "1.00 km");
    }

    #[test]
    fn distance_hundredths_round_with_carry() {
        let key = "minecraft:custom:minecraft:sprint_one_cm";
        assert_eq!(format_stat_value(key, 123_789), "1.24 km");
        assert_eq!(format_stat_value(key, 199_999), "2.00 km");
    }

    #[test]
    fn damage_values_render_as_hearts() {
        let key = "minecraft:custom:minecraft:damage_dealt";
        assert_eq!(format_stat_value(key, 7), "3.5 \u{2764}");
        assert_eq!(format_stat_value(key, 10), "5.0 \u{2764}");
    }

    #[test]
    fn plain_counts_group_thousands() {
        let key = "minecraft:custom:minecraft:jump";
        assert_eq!(format_stat_value(key, 999), "999");
        assert_eq!(format_stat_value(key, 1000), "1,000");
        assert_eq!(format_stat_value(key, 1_234_567), "1,234,567");
    }

    #[test]
    fn categories_and_icons_line_up() {
        assert_eq!(stat_category("minecraft:custom:minecraft:play_time"), "time");
        assert_eq!(
            stat_category("minecraft:mined:minecraft:deepslate"),
            "mining"
        );
        assert_eq!(
            stat_category("minecraft:custom:minecraft:fish_caught"),
            "fishing"
        );
        assert_eq!(stat_icon("minecraft:custom:minecraft:jump"), "\u{1f4ca}");
    }
}

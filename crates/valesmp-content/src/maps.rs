//! The live world map catalog: one embeddable map site per world.

/// One world's live map embed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WorldMap {
    /// URL-stable id, also used as the tab value on the maps page.
    pub id: &'static str,
    /// Tab label and card heading.
    pub name: &'static str,
    /// The map site, embedded in an iframe.
    pub url: &'static str,
    /// One-line card description.
    pub description: &'static str,
}

/// All world maps, in display order. The first entry is the default tab.
pub const WORLD_MAPS: &[WorldMap] = &[
    WorldMap {
        id: "smp",
        name: "Survival World",
        url: "https://survival.valesmp.com",
        description: "Our main world where communities thrive. Build, trade, and explore with friends.",
    },
    WorldMap {
        id: "creative",
        name: "Creative World",
        url: "https://creative.valesmp.com",
        description: "Unlimited resources for your most ambitious builds. Let your creativity run wild.",
    },
    WorldMap {
        id: "resource",
        name: "Resource World",
        url: "https://resource.valesmp.com",
        description: "Fresh world that resets monthly. Gather resources without affecting the main world.",
    },
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn three_worlds_with_unique_ids() {
        assert_eq!(WORLD_MAPS.len(), 3);
        for (i, a) in WORLD_MAPS.iter().enumerate() {
            for b in WORLD_MAPS.iter().skip(i.saturating_add(1)) {
                assert_ne!(a.id, b.id);
            }
        }
    }

    #[test]
    fn map_urls_are_https() {
        for map in WORLD_MAPS {
            assert!(map.url.starts_with("https://"), "{} is not https", map.id);
        }
    }
}

//! The server guide: navigation sections, entries, and the quick command
//! reference shown at the bottom of every guide page.
//!
//! Entry bodies are written against [`crate::markdown`]. Every item
//! listed in [`SECTIONS`] must have a matching entry in [`ENTRIES`];
//! the tests enforce that.

/// One collapsible group in the guide sidebar.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GuideSection {
    /// URL-stable section id.
    pub id: &'static str,
    /// Sidebar heading.
    pub title: &'static str,
    /// Entries listed under this section.
    pub items: &'static [GuideItem],
}

/// One sidebar link to a guide entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GuideItem {
    /// Entry id, matching a [`GuideEntry`].
    pub id: &'static str,
    /// Sidebar label.
    pub title: &'static str,
    /// Optional highlight badge, e.g. "Essential".
    pub badge: Option<&'static str>,
}

/// One guide page.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GuideEntry {
    /// URL-stable entry id.
    pub id: &'static str,
    /// Page title.
    pub title: &'static str,
    /// Markdown-lite body.
    pub content: &'static str,
    /// Human-readable last-edit date shown under the title.
    pub last_updated: &'static str,
}

/// One row of the quick command reference.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct QuickCommand {
    /// The command, as typed in game.
    pub command: &'static str,
    /// One-line description.
    pub description: &'static str,
}

/// Entry shown when the guide is opened without picking an item.
pub const DEFAULT_ENTRY: &str = "rules";

/// Sidebar structure, in display order.
pub const SECTIONS: &[GuideSection] = &[
    GuideSection {
        id: "getting-started",
        title: "Getting Started",
        items: &[
            GuideItem {
                id: "rules",
                title: "Server Rules",
                badge: Some("Essential"),
            },
            GuideItem {
                id: "mods",
                title: "Allowed Mods",
                badge: None,
            },
            GuideItem {
                id: "joining",
                title: "Joining the Server",
                badge: Some("Start Here"),
            },
        ],
    },
    GuideSection {
        id: "server-features",
        title: "Server Features",
        items: &[
            GuideItem {
                id: "angel-chests",
                title: "Angel Chests",
                badge: None,
            },
            GuideItem {
                id: "land-claims",
                title: "Land Claims",
                badge: None,
            },
            GuideItem {
                id: "live-maps",
                title: "Live Maps",
                badge: None,
            },
            GuideItem {
                id: "shops",
                title: "Shops and Economy",
                badge: None,
            },
            GuideItem {
                id: "three-worlds",
                title: "Three Unique Worlds",
                badge: None,
            },
            GuideItem {
                id: "tp-system",
                title: "TP System",
                badge: None,
            },
            GuideItem {
                id: "vanilla-tweaks",
                title: "Vanilla Tweaks",
                badge: None,
            },
        ],
    },
    GuideSection {
        id: "community",
        title: "Community",
        items: &[
            GuideItem {
                id: "donating",
                title: "Donating",
                badge: Some("Support"),
            },
            GuideItem {
                id: "towns",
                title: "Towns",
                badge: None,
            },
        ],
    },
    GuideSection {
        id: "technical",
        title: "Technical Bits",
        items: &[GuideItem {
            id: "server-specs",
            title: "Server Specs",
            badge: None,
        }],
    },
];

/// Commands listed in the quick reference card.
pub const QUICK_COMMANDS: &[QuickCommand] = &[
    QuickCommand {
        command: "/spawn",
        description: "return to spawn",
    },
    QuickCommand {
        command: "/back",
        description: "go back on death or tp",
    },
    QuickCommand {
        command: "/tpa <player>",
        description: "request teleport to a player",
    },
    QuickCommand {
        command: "/tpaccept or /tpdeny",
        description: "accept or deny a teleport request",
    },
    QuickCommand {
        command: "/map",
        description: "get links to the live maps",
    },
    QuickCommand {
        command: "/guide",
        description: "get a link back here",
    },
    QuickCommand {
        command: "/lands",
        description: "use the claiming system",
    },
    QuickCommand {
        command: "/server <name>",
        description: "switch between the three worlds",
    },
];

/// Look up a guide entry by id.
pub fn entry(id: &str) -> Option<&'static GuideEntry> {
    ENTRIES.iter().find(|e| e.id == id)
}

/// All guide entries.
pub const ENTRIES: &[GuideEntry] = &[
    GuideEntry {
        id: "rules",
        title: "Rules",
        last_updated: "22nd July 2025",
        content: "\
# Server Rules
Please read and follow these rules to ensure everyone has a great time on ValeSMP :D

## Core Rules
### 1. Be Respectful
- Treat all players and staff with respect
- No harassment, discrimination, or hate speech

### 2. No Griefing
- Don't destroy or modify other players' builds without permission
- Don't steal from other players, regardless of claims
- Don't kill other players, their pets or their animals

### 3. No Cheating
- No hacked clients, x-ray, or unfair advantages
- No exploiting bugs or glitches
- Ask staff if you're unsure about something, better to be safe

### 4. Build Responsibly
- Don't build too close to other players without permission
- Don't completely ruin environments in the overworld, we have a resource server!

# Chat Rules
- **English Only**: Keep chat in English, for moderation
- **No Spam**: Don't repeat messages or use excessive caps
- **No Advertising**: Don't advertise other servers or Discord servers

# Consequences
- **First Offense**: Warning
- **Second Offense**: Temporary mute
- **Third Offense**: Temporary ban
- **Further Offenses**: Permanent ban

*Staff have discretion to adjust punishments based on severity*
",
    },
    GuideEntry {
        id: "mods",
        title: "Allowed Mods",
        last_updated: "22nd July 2025",
        content: "\
# Allowed Mods
We're pretty relaxed in regards to mods, however this page outlines the categorically *allowed* and *disallowed* ones
Please note, this is **NOT** an exhaustive list. If you're concerned, just ask :)

## Allowed
- Litematica: easy place *is* allowed, but we don't allow litematica printer
- Freecam / CameraUtils style mods
- MiniHUD and other such HUD alteration mods
- Map mods such as Xaero's, JourneyMap etc.
- Inventory sorting mods
- Pretty much all optimisation/client side cosmetic mods

##### Grey Areas
- Tweakeroo (we only allow toggles found elsewhere and allowed, such as autoclickers and hud changes)

#### Not Allowed
- Anything altering game mechanics that we don't support in our server plugins / rules
- Any movement alteration mods like flying, move speed, slowness blocking etc.
- X-ray, Baritone, and other such game hacks

# Suggested mods / modpack
Most of the people who play on Vale use [Prism Launcher](https://prismlauncher.org/) and some degree of [Fabulously Optimised](https://modrinth.com/modpack/fabulously-optimized)
",
    },
    GuideEntry {
        id: "joining",
        title: "Joining the Server",
        last_updated: "22nd July 2025",
        content: "\
# Joining ValeSMP
Welcome to ValeSMP! Here's everything you need to know to get started on our server.

## Server Information
- **Server Address:** `play.valesmp.com`
- **Version:** 1.21.7 - Purpur
- **Type:** Semi-Vanilla Survival
- **Location:** Based in EU, ran by a UK team

## First Time Joining?
- **Discord Application**: You'll need to get whitelisted to join, head over to the [discord](http://www.discord.gg/ut7KJgANkY) to get started
- **Spawn Tutorial**: Check out our quick fire guide at spawn
- **Find your forever home**: Hit /wild, and see where the game takes you
",
    },
    GuideEntry {
        id: "angel-chests",
        title: "Angel Chests",
        last_updated: "24th July 2025",
        content: "\
# Angel Chests
Our plugin for graves on ValeSMP. Instead of your stuff being splurged all over the floor when you die, it goes into a miniature unbreakable chest that resembles your player head
When you're ready to collect it, right click the head and it puts everything back where it was when you died

## Vale Specific Settings
- 10 minutes timer before the chest breaks (then the additional vanilla 5 minutes)
- Locked chests, meaning people cannot pick up your loot whilst you run back
- Limited to 5, after which the oldest will break

## Opt Out
By default, all players **will** have Angel Chests enabled. There's no in game toggle yet, but we can remove your permissions manually, so please submit a ticket if you want them off
",
    },
    GuideEntry {
        id: "land-claims",
        title: "Land Claims",
        last_updated: "24th July 2025",
        content: "\
# Land Claims
In depth guide to the Lands plugin, which we use for all claiming on ValeSMP

## Concept
The plugin lets you protect your land (and chests), highlight your base's building area, and stop people interacting with certain areas unless you specifically trust them
Claims aren't currently limited in terms of chunks, just in terms of separate lands. Be sensible and don't go claiming half the server

## Commands
- `/lands create ExampleName` - create a land and claim the chunk you're stood in
- `/lands claim radius 3` - claims a radius of 3 chunks for the land you're editing
- `/lands trust Player1` - trust Player1 in the currently selected land
- `/lands menu` - open the lands GUI with options for flags, areas and more
",
    },
    GuideEntry {
        id: "live-maps",
        title: "Live Maps",
        last_updated: "22nd July 2025",
        content: "\
# Live Maps
Explore the ValeSMP worlds with our real-time interactive maps!

## Accessing the Maps
### Web Browser
- **Survival World**: [survival.valesmp.com](https://survival.valesmp.com)
- **Creative World**: [creative.valesmp.com](https://creative.valesmp.com)
- **Resource World**: [resource.valesmp.com](https://resource.valesmp.com)
### In-Game Access
- Use `/maps` command for quick access

## Map Features
- Player locations shown in real-time
- New builds appear within minutes
- Claim boundaries and world border visible
- Night view and flower map layers
",
    },
    GuideEntry {
        id: "shops",
        title: "Shops and Economy",
        last_updated: "24th July 2025",
        content: "\
# Player Shops and ValeSMP Economy
We use a plugin to enable shop creation in our main shopping district at spawn

## Concept
Our player formed economy is based around diamonds, with a conversion of 1 diamond = $100. To turn diamonds into currency or back, head to the market stall at `/warp shop`

## Commands
- `/shop browse` - view all shops on the server
- `/shop create 100` - turn the chest you're looking at into a shop at $100, selling the held item
- `/shop remove` - turn the chest shop back into a normal chest
- `/shop buy` - changes the selected shop to buy mode *(understand the risks first)*
- `/shop price` - change the price of your shop
",
    },
    GuideEntry {
        id: "three-worlds",
        title: "Three Unique Worlds",
        last_updated: "22nd July 2025",
        content: "\
# Three Unique Worlds
ValeSMP features three servers, with the ability to switch between them using `/server [name]`

## Survival World `/server smp`
The main world where most players spend their time building communities and long-term projects
- **Purpose**: Permanent builds and towns, no resets planned
- **Protection**: Land claiming available
- **Size**: 15k world border, growing with each new update

## Resource World `/server resource`
A renewable world that resets monthly for resource gathering and exploration
- **Reset Schedule**: First weekend of each month
- **Size**: 5k world border

## Creative World `/server creative`
Unlimited resources for testing builds and creative expression
- **Plots**: Individual creative plots available, permissions management included
",
    },
    GuideEntry {
        id: "tp-system",
        title: "TP System",
        last_updated: "24th July 2025",
        content: "\
# TP System
Using EssentialsX's warp and tpa system, we are able to get people around the server nice and quick.

## Commands
- `/tpa Player1` - request to tp to Player1
- `/tpahere Player1` - request Player1 to tp to **you**
- `/tpaccept` - accept an incoming request
- `/tpadeny` - deny an incoming request
- `/warp ExampleName` - warp to the ExampleName warp

*note, warps are only set by staff. If you feel a project you've worked on should get a public warp, submit a general support ticket*
",
    },
    GuideEntry {
        id: "vanilla-tweaks",
        title: "Vanilla Tweaks",
        last_updated: "24th July 2025",
        content: "\
# Vanilla Tweaks
For anybody familiar with the [Vanilla Tweaks](https://vanillatweaks.net/) website, we employ several of their datapacks using a plugin version

## Datapacks we use
- **Anti Enderman Grief**: stops endermen picking up blocks
- **Armored Elytra**: drop an elytra and chestplate onto an anvil to link them
- **Fast Leaf Decay**: after 5 seconds, tree leaves will fast decay
- **Mini-Blocks**: put any block in a stonecutter to get 4 of its mini variant
- **More Mob Heads**: adds a chance for any mob to drop its head
- **Player Head Drops**: players drop their head when killed by another player
- **Track Raw Stats**: lets us track pretty much every stat in the game, for our Player Stats pages

## Crafting Packs we use
- **More Trapdoors**: all trapdoor recipes make 12 instead of 2
- **Universal Dyeing**: dye any dyeable block to another colour, regardless of current colour
",
    },
    GuideEntry {
        id: "donating",
        title: "Donating",
        last_updated: "22nd July 2025",
        content: "\
# Donating
If you want to consider supporting ValeSMP and help with the running costs of the server, it's greatly appreciated <3 All donated money goes directly to the server's upkeep

## What does my donation go towards?
- Server hosting costs
- Custom plugin development
- Website maintenance

## Donation Tiers
- Patron
- Patron+
- Patron*

## How to Donate
Visit our patreon: [ValeSMP Patreon](https://patreon.com/ValeSMP)

## Donation Rules
- All benefits will be non pay-to-win
- Benefits are non-transferable between accounts
- Server rules still apply to all donors, we don't treat you any different
",
    },
    GuideEntry {
        id: "towns",
        title: "Towns",
        last_updated: "22nd July 2025",
        content: "\
# Towns
Creating and managing communities

## What are Towns?
Towns are player-created communities that often offer:
- Shared resources and projects
- Protected group areas
- Shared goals and events

## Creating a Town
- We don't have any town specific plugins, but you are more than welcome to create one
- Sharing lands access is done with `/lands trust` and the lands menu
- Being in a town does *not* exempt people from general server rules

### Conflicts
- Contact staff for rule violations
- Towns cannot claim over existing player claims
- Minimum 100 block distance between towns
",
    },
    GuideEntry {
        id: "server-specs",
        title: "Server Specs",
        last_updated: "24th July 2025",
        content: "\
# Server Specs
Our main SMP server specs are as follows, but we are hoping to upgrade soon!

- **Hosting Location**: Western Europe
- **CPU**: AMD Ryzen 7 Pro 8700GE
- **RAM**: 64GB DDR5 ECC
- **Storage**: 2x 1TB NVMe SSDs running RAID 1
- **Connection**: Dedicated 1Gbps Ethernet

If you are experiencing any lag, check the #server-status channel on Discord first. If nothing is reported there, it is likely a ping issue on the client side
",
    },
];

//! Shared type definitions for the `ValeSMP` website.
//!
//! This crate is the single source of truth for the types used across the
//! `ValeSMP` workspace: award and ranking structures derived from the
//! external stats backend, the medal/crown-score model behind the Hall of
//! Fame, and the server status snapshot shown on the landing page.
//!
//! # Modules
//!
//! - [`stats`] -- awards, rankings, medals, and the stats backend wire model
//! - [`status`] -- server status snapshot and the mcsrvstat wire model

pub mod stats;
pub mod status;

// Re-export primary types for convenience.
pub use stats::{
    Award, AwardDefinition, HallOfFameEntry, Medal, MedalTally, Ranking, SortOrder, TopEntry,
    TopList, Winner,
};
pub use status::{McMotd, McPlayers, McStatusResponse, ServerStatus};

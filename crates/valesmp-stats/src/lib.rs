//! Stats backend client and award aggregation for the `ValeSMP` website.
//!
//! This crate owns every piece of logic between the external stats
//! backend and the rendered stats page:
//!
//! - [`client`] -- authenticated `reqwest` client for the backend API
//! - [`status`] -- mcsrvstat.us query for the live player count
//! - [`catalog`] -- the static award definitions the site displays
//! - [`rank`] -- combining stat keys, medal assignment, Hall of Fame
//! - [`format`] -- human display of stat names and values
//! - [`config`] -- typed site configuration loaded from YAML
//!
//! The backend already returns sorted top-N leaderboards; everything here
//! is derivation on top of those lists. There is no write path and no
//! persistence -- awards are rebuilt from scratch on every load.

pub mod catalog;
pub mod client;
pub mod config;
pub mod error;
pub mod format;
pub mod rank;
pub mod status;

// Re-export primary types for convenience.
pub use client::StatsClient;
pub use config::SiteConfig;
pub use error::{StatsError, StatsResult};

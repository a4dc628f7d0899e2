//! HTTP server for the `ValeSMP` website.
//!
//! This crate provides an Axum server that exposes:
//!
//! - **Pages** (`/`, `/guide`, `/guide/{item}`, `/maps`, `/stats`,
//!   `/privacy`, `/terms`) rendered server-side from compiled-in
//!   templates and content
//! - **Player count API** (`GET /api/player-count`) served from an
//!   in-memory status snapshot refreshed by a background poller
//! - **Stats proxy** (`GET`/`HEAD /api/stats/{*path}`) forwarding to the
//!   external stats backend with the bearer key injected server-side,
//!   plus its own health route (`GET /api/stats/health`)
//!
//! # Architecture
//!
//! Handlers never hold long-lived locks or make write-path calls: pages
//! read the status snapshot behind [`tokio::sync::RwLock`], the stats
//! page issues one concurrent batch of backend reads per request, and
//! the proxy is a stateless forward. The API key never reaches the
//! browser; all authenticated calls happen in this process.

pub mod error;
pub mod handlers;
pub mod proxy;
pub mod router;
pub mod server;
pub mod state;
pub mod status;
pub mod templates;

// Re-export primary types for convenience.
pub use router::build_router;
pub use server::{start_server, ServerError};
pub use state::AppState;

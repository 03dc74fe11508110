//! Ping pong tracker: players, recorded matches and a win-count leaderboard.
//!
//! The `web` binary serves the JSON API from [`api`] over a SQLite [`store`];
//! the `tracker` binary drives the same API through [`client`] and renders [`view`].

pub mod api;
pub mod client;
pub mod config;
pub mod logic;
pub mod models;
pub mod store;
pub mod view;

pub use client::{ClientError, HttpTrackerApi, Tracker, TrackerApi};
pub use config::Config;
pub use logic::{leaderboard, Standing};
pub use models::{Match, MatchId, Player, PlayerId};
pub use store::{Store, StoreError, RECENT_MATCH_LIMIT};
pub use view::{render_html, render_text, write_matches_csv, SelectionError, TrackerState};

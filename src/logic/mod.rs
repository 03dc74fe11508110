//! Aggregations derived from fetched players and matches.

mod leaderboard;

pub use leaderboard::{leaderboard, Standing};

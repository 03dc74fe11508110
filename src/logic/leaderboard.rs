//! Leaderboard: win counts per player, derived from already-fetched data.

use crate::models::{Match, Player};
use serde::{Deserialize, Serialize};

/// A player paired with the number of matches they won.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct Standing {
    #[serde(flatten)]
    pub player: Player,
    pub wins: usize,
}

/// Rank players by wins, most first.
///
/// Only the matches passed in are counted. Ties keep the order of `players`.
pub fn leaderboard(players: &[Player], matches: &[Match]) -> Vec<Standing> {
    let mut standings: Vec<Standing> = players
        .iter()
        .map(|player| Standing {
            player: player.clone(),
            wins: matches.iter().filter(|m| m.winner_id == player.id).count(),
        })
        .collect();
    // sort_by is stable
    standings.sort_by(|a, b| b.wins.cmp(&a.wins));
    standings
}

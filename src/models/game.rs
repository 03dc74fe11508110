//! A recorded match between two players.

use crate::models::player::{Player, PlayerId};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Unique identifier for a match. Higher ids were recorded later.
pub type MatchId = i64;

/// An immutable match result: who won, who lost, and when.
///
/// `winner` and `loser` are the resolved player records; only the ids are stored.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Match {
    pub id: MatchId,
    pub winner_id: PlayerId,
    pub loser_id: PlayerId,
    pub winner: Player,
    pub loser: Player,
    /// Set by the store when the match is recorded.
    pub played_at: DateTime<Utc>,
}

impl Match {
    /// Build a match from its resolved players; ids are taken from the records.
    pub fn new(id: MatchId, winner: Player, loser: Player, played_at: DateTime<Utc>) -> Self {
        Self {
            id,
            winner_id: winner.id,
            loser_id: loser.id,
            winner,
            loser,
            played_at,
        }
    }
}

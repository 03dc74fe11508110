//! Match accessor: record matches and read the most recent ones with both players joined.

use super::{Store, StoreError};
use crate::models::{Match, MatchId, Player, PlayerId};
use chrono::{DateTime, Utc};
use sqlx::FromRow;

/// How many matches `GET /matches` returns.
pub const RECENT_MATCH_LIMIT: i64 = 50;

const SELECT_MATCHES: &str = "SELECT m.id, m.winner_id, m.loser_id, m.played_at,
       w.name AS winner_name, l.name AS loser_name
  FROM matches m
  JOIN players w ON w.id = m.winner_id
  JOIN players l ON l.id = m.loser_id";

#[derive(FromRow)]
struct MatchRow {
    id: MatchId,
    winner_id: PlayerId,
    loser_id: PlayerId,
    played_at: DateTime<Utc>,
    winner_name: String,
    loser_name: String,
}

impl From<MatchRow> for Match {
    fn from(row: MatchRow) -> Self {
        Match::new(
            row.id,
            Player::new(row.winner_id, row.winner_name),
            Player::new(row.loser_id, row.loser_name),
            row.played_at,
        )
    }
}

impl Store {
    /// Record a match. Equal ids are accepted; ids that reference no player fail
    /// with `Constraint`.
    pub async fn create_match(
        &self,
        winner_id: PlayerId,
        loser_id: PlayerId,
    ) -> Result<Match, StoreError> {
        let mut tx = self.pool().begin().await?;
        let id = sqlx::query_scalar::<_, MatchId>(
            "INSERT INTO matches (winner_id, loser_id) VALUES (?, ?) RETURNING id",
        )
        .bind(winner_id)
        .bind(loser_id)
        .fetch_one(&mut *tx)
        .await?;
        let row = sqlx::query_as::<_, MatchRow>(&format!("{SELECT_MATCHES} WHERE m.id = ?"))
            .bind(id)
            .fetch_one(&mut *tx)
            .await?;
        tx.commit().await?;
        Ok(row.into())
    }

    /// The `limit` most recently recorded matches, newest (highest id) first.
    pub async fn list_recent_matches(&self, limit: i64) -> Result<Vec<Match>, StoreError> {
        let rows = sqlx::query_as::<_, MatchRow>(&format!(
            "{SELECT_MATCHES} ORDER BY m.id DESC LIMIT ?"
        ))
        .bind(limit)
        .fetch_all(self.pool())
        .await?;
        Ok(rows.into_iter().map(Match::from).collect())
    }
}

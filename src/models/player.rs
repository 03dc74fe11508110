//! Player data structure.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// Unique identifier for a player, assigned by the store on creation.
pub type PlayerId = i64;

/// A player that can win or lose matches.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize, FromRow)]
pub struct Player {
    pub id: PlayerId,
    pub name: String,
}

impl Player {
    pub fn new(id: PlayerId, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
        }
    }
}

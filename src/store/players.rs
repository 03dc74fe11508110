//! Player accessor: create, list and delete rows in `players`.

use super::{Store, StoreError};
use crate::models::{Player, PlayerId};

impl Store {
    /// Insert a player; the store assigns the id.
    pub async fn create_player(&self, name: &str) -> Result<Player, StoreError> {
        let player = sqlx::query_as::<_, Player>(
            "INSERT INTO players (name) VALUES (?) RETURNING id, name",
        )
        .bind(name)
        .fetch_one(self.pool())
        .await?;
        Ok(player)
    }

    /// All players in store order (ascending id).
    pub async fn list_players(&self) -> Result<Vec<Player>, StoreError> {
        let players = sqlx::query_as::<_, Player>("SELECT id, name FROM players ORDER BY id")
            .fetch_all(self.pool())
            .await?;
        Ok(players)
    }

    /// Delete a player by id. Fails with `NotFound` when no row matched and with
    /// `Constraint` when matches still reference the player.
    pub async fn delete_player(&self, id: PlayerId) -> Result<(), StoreError> {
        let result = sqlx::query("DELETE FROM players WHERE id = ?")
            .bind(id)
            .execute(self.pool())
            .await?;
        if result.rows_affected() == 0 {
            return Err(StoreError::NotFound {
                entity: "player",
                id,
            });
        }
        Ok(())
    }
}

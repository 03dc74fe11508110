//! `Tracker`: owns the view state and applies each successful action to it locally.

use super::{ClientError, TrackerApi};
use crate::models::{Match, Player, PlayerId};
use crate::view::TrackerState;

/// View state plus the API it is synchronised with.
///
/// After a successful create or delete the matching local update is applied
/// (append player, remove player, prepend match); lists are never re-fetched.
pub struct Tracker<A> {
    api: A,
    state: TrackerState,
}

impl<A: TrackerApi> Tracker<A> {
    /// Fetch players and matches concurrently and apply whichever succeed.
    /// A failed fetch is logged and leaves that list empty.
    pub async fn load(api: A) -> Self {
        let mut state = TrackerState::default();
        let (players, matches) = tokio::join!(api.list_players(), api.list_matches());
        match players {
            Ok(players) => state.set_players(players),
            Err(e) => log::error!("Error fetching players: {e}"),
        }
        match matches {
            Ok(matches) => state.set_matches(matches),
            Err(e) => log::error!("Error fetching matches: {e}"),
        }
        Self { api, state }
    }

    pub fn state(&self) -> &TrackerState {
        &self.state
    }

    /// Form fields are edited directly on the state.
    pub fn state_mut(&mut self) -> &mut TrackerState {
        &mut self.state
    }

    pub fn api(&self) -> &A {
        &self.api
    }

    /// Submit the new-player field. A blank field does nothing and returns `Ok(None)`.
    pub async fn add_player(&mut self) -> Result<Option<Player>, ClientError> {
        let Some(name) = self.state.pending_player_name() else {
            return Ok(None);
        };
        let created = self.api.create_player(name).await.map_err(log_failure)?;
        self.state.push_player(created.clone());
        Ok(Some(created))
    }

    pub async fn delete_player(&mut self, id: PlayerId) -> Result<(), ClientError> {
        self.api.delete_player(id).await.map_err(log_failure)?;
        self.state.remove_player(id);
        Ok(())
    }

    /// Record the selected winner and loser. The selection is checked before any request.
    pub async fn record_match(&mut self) -> Result<Match, ClientError> {
        let (winner_id, loser_id) = self.state.match_selection()?;
        let recorded = self
            .api
            .create_match(winner_id, loser_id)
            .await
            .map_err(log_failure)?;
        self.state.prepend_match(recorded.clone());
        Ok(recorded)
    }
}

fn log_failure(err: ClientError) -> ClientError {
    log::error!("{err}");
    err
}

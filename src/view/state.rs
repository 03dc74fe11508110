//! Client-side state: fetched lists plus the three form fields.
//!
//! Every mutation goes through a method here, so a render always sees a whole update.

use crate::logic::{leaderboard, Standing};
use crate::models::{Match, Player, PlayerId};
use thiserror::Error;

/// Recording a match needs two different players selected.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Error)]
#[error("Please select two different players.")]
pub struct SelectionError;

#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct TrackerState {
    pub players: Vec<Player>,
    /// Newest first, as returned by `GET /matches`.
    pub matches: Vec<Match>,
    pub new_player_name: String,
    pub winner_id: Option<PlayerId>,
    pub loser_id: Option<PlayerId>,
}

impl TrackerState {
    pub fn set_players(&mut self, players: Vec<Player>) {
        self.players = players;
    }

    pub fn set_matches(&mut self, matches: Vec<Match>) {
        self.matches = matches;
    }

    pub fn set_new_player_name(&mut self, name: impl Into<String>) {
        self.new_player_name = name.into();
    }

    pub fn select_winner(&mut self, id: Option<PlayerId>) {
        self.winner_id = id;
    }

    pub fn select_loser(&mut self, id: Option<PlayerId>) {
        self.loser_id = id;
    }

    /// The name to submit, exactly as typed, or `None` when the field is blank.
    pub fn pending_player_name(&self) -> Option<&str> {
        let blank = self.new_player_name.trim().is_empty();
        (!blank).then_some(self.new_player_name.as_str())
    }

    /// Append a player the server just created and clear the name field.
    pub fn push_player(&mut self, player: Player) {
        self.players.push(player);
        self.new_player_name.clear();
    }

    pub fn remove_player(&mut self, id: PlayerId) {
        self.players.retain(|p| p.id != id);
    }

    /// Put a newly recorded match at the top of the list.
    pub fn prepend_match(&mut self, recorded: Match) {
        self.matches.insert(0, recorded);
    }

    /// The selected `(winner, loser)` pair, if both are chosen and differ.
    pub fn match_selection(&self) -> Result<(PlayerId, PlayerId), SelectionError> {
        match (self.winner_id, self.loser_id) {
            (Some(winner), Some(loser)) if winner != loser => Ok((winner, loser)),
            _ => Err(SelectionError),
        }
    }

    /// Recomputed on every call; nothing is cached.
    pub fn leaderboard(&self) -> Vec<Standing> {
        leaderboard(&self.players, &self.matches)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    fn state_with(names: &[&str]) -> TrackerState {
        let mut state = TrackerState::default();
        state.set_players(
            names
                .iter()
                .enumerate()
                .map(|(i, n)| Player::new(i as PlayerId + 1, *n))
                .collect(),
        );
        state
    }

    #[test]
    fn blank_name_is_not_pending() {
        let mut state = TrackerState::default();
        assert_eq!(state.pending_player_name(), None);
        state.set_new_player_name("   ");
        assert_eq!(state.pending_player_name(), None);
        state.set_new_player_name("  Ann ");
        assert_eq!(state.pending_player_name(), Some("  Ann "));
    }

    #[test]
    fn push_player_appends_and_clears_field() {
        let mut state = state_with(&["Ann"]);
        state.set_new_player_name("Bob");
        state.push_player(Player::new(2, "Bob"));
        assert_eq!(state.players.last().unwrap().name, "Bob");
        assert!(state.new_player_name.is_empty());
    }

    #[test]
    fn remove_player_keeps_the_rest_in_order() {
        let mut state = state_with(&["Ann", "Bob", "Cid"]);
        state.remove_player(2);
        let names: Vec<_> = state.players.iter().map(|p| p.name.as_str()).collect();
        assert_eq!(names, ["Ann", "Cid"]);
    }

    #[test]
    fn prepend_match_puts_it_first() {
        let mut state = state_with(&["Ann", "Bob"]);
        let ann = state.players[0].clone();
        let bob = state.players[1].clone();
        state.prepend_match(Match::new(1, ann.clone(), bob.clone(), Utc::now()));
        state.prepend_match(Match::new(2, bob, ann, Utc::now()));
        assert_eq!(state.matches[0].id, 2);
        assert_eq!(state.matches[1].id, 1);
    }

    #[test]
    fn selection_needs_two_different_players() {
        let mut state = state_with(&["Ann", "Bob"]);
        assert_eq!(state.match_selection(), Err(SelectionError));
        state.select_winner(Some(1));
        assert_eq!(state.match_selection(), Err(SelectionError));
        state.select_loser(Some(1));
        assert_eq!(state.match_selection(), Err(SelectionError));
        state.select_loser(Some(2));
        assert_eq!(state.match_selection(), Ok((1, 2)));
    }
}

//! `Tracker` against an in-process fake API: local updates and the match guard.

use async_trait::async_trait;
use chrono::Utc;
use pingpong_tracker::{ClientError, Match, Player, PlayerId, SelectionError, Tracker, TrackerApi};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;

#[derive(Default)]
struct FakeApi {
    players: Mutex<Vec<Player>>,
    matches: Mutex<Vec<Match>>,
    next_id: Mutex<i64>,
    fail_fetches: bool,
    /// Mutating requests only (create/delete).
    writes: AtomicUsize,
}

impl FakeApi {
    fn with_players(names: &[&str]) -> Self {
        let api = FakeApi::default();
        for name in names {
            let id = api.next();
            api.players.lock().unwrap().push(Player::new(id, *name));
        }
        api
    }

    fn next(&self) -> i64 {
        let mut next = self.next_id.lock().unwrap();
        *next += 1;
        *next
    }

    fn player(&self, id: PlayerId) -> Option<Player> {
        self.players.lock().unwrap().iter().find(|p| p.id == id).cloned()
    }

    fn writes(&self) -> usize {
        self.writes.load(Ordering::SeqCst)
    }
}

fn server_error() -> ClientError {
    ClientError::Status {
        status: 500,
        body: "{\"error\":\"boom\"}".to_string(),
    }
}

#[async_trait]
impl TrackerApi for FakeApi {
    async fn list_players(&self) -> Result<Vec<Player>, ClientError> {
        if self.fail_fetches {
            return Err(server_error());
        }
        Ok(self.players.lock().unwrap().clone())
    }

    async fn list_matches(&self) -> Result<Vec<Match>, ClientError> {
        if self.fail_fetches {
            return Err(server_error());
        }
        Ok(self.matches.lock().unwrap().clone())
    }

    async fn create_player(&self, name: &str) -> Result<Player, ClientError> {
        self.writes.fetch_add(1, Ordering::SeqCst);
        let player = Player::new(self.next(), name);
        self.players.lock().unwrap().push(player.clone());
        Ok(player)
    }

    async fn delete_player(&self, id: PlayerId) -> Result<(), ClientError> {
        self.writes.fetch_add(1, Ordering::SeqCst);
        let mut players = self.players.lock().unwrap();
        let before = players.len();
        players.retain(|p| p.id != id);
        if players.len() == before {
            return Err(server_error());
        }
        Ok(())
    }

    async fn create_match(&self, winner_id: PlayerId, loser_id: PlayerId) -> Result<Match, ClientError> {
        self.writes.fetch_add(1, Ordering::SeqCst);
        let (Some(winner), Some(loser)) = (self.player(winner_id), self.player(loser_id)) else {
            return Err(server_error());
        };
        let recorded = Match::new(self.next(), winner, loser, Utc::now());
        self.matches.lock().unwrap().insert(0, recorded.clone());
        Ok(recorded)
    }
}

#[tokio::test]
async fn load_fills_state_from_both_lists() {
    let api = FakeApi::with_players(&["Ann", "Bob"]);
    let tracker = Tracker::load(api).await;
    assert_eq!(tracker.state().players.len(), 2);
    assert!(tracker.state().matches.is_empty());
}

#[tokio::test]
async fn failed_fetches_leave_state_empty() {
    let api = FakeApi {
        fail_fetches: true,
        ..FakeApi::with_players(&["Ann"])
    };
    let tracker = Tracker::load(api).await;
    assert!(tracker.state().players.is_empty());
    assert!(tracker.state().matches.is_empty());
}

#[tokio::test]
async fn add_player_appends_without_refetch() {
    let mut tracker = Tracker::load(FakeApi::with_players(&["Ann"])).await;
    tracker.state_mut().set_new_player_name("  Bob ");

    let created = tracker.add_player().await.unwrap().unwrap();
    assert_eq!(created.name, "  Bob ");
    assert_eq!(tracker.state().players.last(), Some(&created));
    assert!(tracker.state().new_player_name.is_empty());
}

#[tokio::test]
async fn blank_name_sends_nothing() {
    let mut tracker = Tracker::load(FakeApi::default()).await;
    tracker.state_mut().set_new_player_name("   ");
    assert!(tracker.add_player().await.unwrap().is_none());
    assert_eq!(tracker.api().writes(), 0);
}

#[tokio::test]
async fn delete_player_removes_locally_only_on_success() {
    let mut tracker = Tracker::load(FakeApi::with_players(&["Ann", "Bob"])).await;
    let ann = tracker.state().players[0].id;

    tracker.delete_player(ann).await.unwrap();
    assert_eq!(tracker.state().players.len(), 1);

    assert!(tracker.delete_player(ann).await.is_err());
    assert_eq!(tracker.state().players.len(), 1);
}

#[tokio::test]
async fn record_match_prepends_result() {
    let mut tracker = Tracker::load(FakeApi::with_players(&["Ann", "Bob"])).await;
    let (ann, bob) = (tracker.state().players[0].clone(), tracker.state().players[1].clone());

    for (w, l) in [(&ann, &bob), (&bob, &ann)] {
        let state = tracker.state_mut();
        state.select_winner(Some(w.id));
        state.select_loser(Some(l.id));
        tracker.record_match().await.unwrap();
    }

    let matches = &tracker.state().matches;
    assert_eq!(matches.len(), 2);
    assert_eq!(matches[0].winner, bob);
    assert_eq!(matches[1].winner, ann);
    let board = tracker.state().leaderboard();
    assert!(board.iter().all(|s| s.wins == 1));
}

#[tokio::test]
async fn same_player_is_blocked_before_any_request() {
    let mut tracker = Tracker::load(FakeApi::with_players(&["Ann", "Bob"])).await;
    let ann = tracker.state().players[0].id;
    let state = tracker.state_mut();
    state.select_winner(Some(ann));
    state.select_loser(Some(ann));

    let err = tracker.record_match().await.unwrap_err();
    assert!(matches!(err, ClientError::Selection(SelectionError)));
    assert_eq!(err.to_string(), "Please select two different players.");
    assert_eq!(tracker.api().writes(), 0);
    assert!(tracker.api().matches.lock().unwrap().is_empty());
    assert!(tracker.state().matches.is_empty());
}

#[tokio::test]
async fn missing_selection_is_blocked() {
    let mut tracker = Tracker::load(FakeApi::with_players(&["Ann", "Bob"])).await;
    tracker.state_mut().select_winner(Some(1));

    assert!(tracker.record_match().await.is_err());
    assert_eq!(tracker.api().writes(), 0);
}

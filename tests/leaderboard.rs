//! Leaderboard aggregation over fetched players and matches.

use chrono::Utc;
use pingpong_tracker::{leaderboard, Match, Player};

fn beat(id: i64, winner: &Player, loser: &Player) -> Match {
    Match::new(id, winner.clone(), loser.clone(), Utc::now())
}

fn names_and_wins(players: &[Player], matches: &[Match]) -> Vec<(String, usize)> {
    leaderboard(players, matches)
        .into_iter()
        .map(|s| (s.player.name, s.wins))
        .collect()
}

#[test]
fn counts_wins_and_sorts_descending() {
    let a = Player::new(1, "A");
    let b = Player::new(2, "B");
    let matches = vec![beat(1, &a, &b), beat(2, &a, &b), beat(3, &b, &a)];

    assert_eq!(
        names_and_wins(&[b.clone(), a.clone()], &matches),
        vec![("A".to_string(), 2), ("B".to_string(), 1)]
    );
}

#[test]
fn no_matches_keeps_input_order() {
    let players = vec![Player::new(3, "C"), Player::new(1, "A"), Player::new(2, "B")];
    let board = leaderboard(&players, &[]);
    assert!(board.iter().all(|s| s.wins == 0));
    let order: Vec<i64> = board.iter().map(|s| s.player.id).collect();
    assert_eq!(order, vec![3, 1, 2]);
}

#[test]
fn ties_keep_input_order() {
    let a = Player::new(1, "A");
    let b = Player::new(2, "B");
    let c = Player::new(3, "C");
    let matches = vec![beat(1, &c, &a), beat(2, &b, &a)];

    let board = names_and_wins(&[a.clone(), c.clone(), b.clone()], &matches);
    assert_eq!(
        board,
        vec![
            ("C".to_string(), 1),
            ("B".to_string(), 1),
            ("A".to_string(), 0)
        ]
    );
}

#[test]
fn wins_of_players_not_in_the_list_are_ignored() {
    let a = Player::new(1, "A");
    let gone = Player::new(9, "Gone");
    let matches = vec![beat(1, &gone, &a), beat(2, &gone, &a)];

    let board = leaderboard(&[a], &matches);
    assert_eq!(board.len(), 1);
    assert_eq!(board[0].wins, 0);
}

#[test]
fn standing_serializes_player_fields_with_wins() {
    let a = Player::new(1, "A");
    let board = leaderboard(&[a.clone()], &[]);
    let json = serde_json::to_value(&board[0]).unwrap();
    assert_eq!(json, serde_json::json!({ "id": 1, "name": "A", "wins": 0 }));
}

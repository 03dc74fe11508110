//! Data structures for the tracker: players and recorded matches.

mod game;
mod player;

pub use game::{Match, MatchId};
pub use player::{Player, PlayerId};

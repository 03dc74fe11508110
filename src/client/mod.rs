//! Presentation-side coordination: talk to the API and keep [`TrackerState`] in step.
//!
//! [`TrackerState`]: crate::view::TrackerState

mod http;
mod tracker;

pub use http::HttpTrackerApi;
pub use tracker::Tracker;

use crate::models::{Match, Player, PlayerId};
use crate::view::SelectionError;
use async_trait::async_trait;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ClientError {
    #[error("request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("server responded {status}: {body}")]
    Status { status: u16, body: String },

    /// Rejected locally; no request was sent.
    #[error(transparent)]
    Selection(#[from] SelectionError),
}

/// The five calls the view makes against `/players` and `/matches`.
#[async_trait]
pub trait TrackerApi: Send + Sync {
    async fn list_players(&self) -> Result<Vec<Player>, ClientError>;

    /// At most the 50 most recent matches, newest first.
    async fn list_matches(&self) -> Result<Vec<Match>, ClientError>;

    async fn create_player(&self, name: &str) -> Result<Player, ClientError>;

    async fn delete_player(&self, id: PlayerId) -> Result<(), ClientError>;

    async fn create_match(&self, winner_id: PlayerId, loser_id: PlayerId) -> Result<Match, ClientError>;
}

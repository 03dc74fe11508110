//! CSV export of match history.

use crate::models::{Match, MatchId, PlayerId};
use serde::Serialize;
use std::io::Write;

#[derive(Serialize)]
struct MatchCsvRow<'a> {
    id: MatchId,
    winner_id: PlayerId,
    winner: &'a str,
    loser_id: PlayerId,
    loser: &'a str,
    played_at: String,
}

/// Write one header row and one row per match, in the order given.
pub fn write_matches_csv<W: Write>(writer: W, matches: &[Match]) -> Result<(), csv::Error> {
    let mut wtr = csv::Writer::from_writer(writer);
    for m in matches {
        wtr.serialize(MatchCsvRow {
            id: m.id,
            winner_id: m.winner_id,
            winner: &m.winner.name,
            loser_id: m.loser_id,
            loser: &m.loser.name,
            played_at: m.played_at.to_rfc3339(),
        })?;
    }
    wtr.flush()?;
    Ok(())
}

//! Rendering: pure functions from [`TrackerState`] to HTML or plain text.

use super::TrackerState;
use crate::models::{Match, PlayerId};
use std::fmt::Write;

const PLAYED_AT_FORMAT: &str = "%Y-%m-%d %H:%M:%S UTC";

fn escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

fn played_at(m: &Match) -> String {
    m.played_at.format(PLAYED_AT_FORMAT).to_string()
}

fn wins_label(wins: usize) -> &'static str {
    if wins == 1 {
        "win"
    } else {
        "wins"
    }
}

fn player_select(
    html: &mut String,
    id: &str,
    placeholder: &str,
    state: &TrackerState,
    selected: Option<PlayerId>,
) {
    let _ = writeln!(html, "<select id=\"{id}\" name=\"{id}\">");
    let _ = writeln!(html, "<option value=\"\">-- {placeholder} --</option>");
    for p in &state.players {
        let marker = if selected == Some(p.id) { " selected" } else { "" };
        let _ = writeln!(
            html,
            "<option value=\"{}\"{}>{}</option>",
            p.id,
            marker,
            escape(&p.name)
        );
    }
    html.push_str("</select>\n");
}

/// Full HTML page. Writing into a `String` cannot fail, so `write!` results are ignored.
///
/// The forms are driven by `/tracker.js`, which re-renders the same sections client-side.
pub fn render_html(state: &TrackerState) -> String {
    let mut html = String::from(
        "<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n<meta charset=\"utf-8\">\n\
         <title>Ping Pong Tracker</title>\n\
         <link rel=\"stylesheet\" href=\"/static/style.css\">\n\
         <script src=\"/tracker.js\" defer></script>\n</head>\n<body>\n\
         <h1>Ping Pong Tracker</h1>\n",
    );

    html.push_str("<section>\n<h2>Add a New Player</h2>\n<form id=\"add-player\">\n");
    let _ = writeln!(
        html,
        "<input type=\"text\" id=\"new-player-name\" name=\"name\" placeholder=\"Player name\" value=\"{}\">",
        escape(&state.new_player_name)
    );
    html.push_str("<button type=\"submit\">Add Player</button>\n</form>\n</section>\n");

    html.push_str("<section>\n<h2>Players</h2>\n<ul id=\"players\">\n");
    for p in &state.players {
        let _ = writeln!(
            html,
            "<li data-id=\"{id}\">{} <button type=\"button\" data-delete=\"{id}\">Delete</button></li>",
            escape(&p.name),
            id = p.id
        );
    }
    html.push_str("</ul>\n</section>\n");

    html.push_str("<section>\n<h2>Record a Match</h2>\n<form id=\"record-match\">\n");
    html.push_str("<div>\n<label for=\"winner-id\">Winner: </label>\n");
    player_select(&mut html, "winner-id", "Select Winner", state, state.winner_id);
    html.push_str("</div>\n<div>\n<label for=\"loser-id\">Loser: </label>\n");
    player_select(&mut html, "loser-id", "Select Loser", state, state.loser_id);
    html.push_str("</div>\n<button type=\"submit\">Record Match</button>\n</form>\n</section>\n");

    html.push_str("<section>\n<h2>Leaderboard</h2>\n<ol id=\"leaderboard\">\n");
    for s in state.leaderboard() {
        let _ = writeln!(
            html,
            "<li>{} ({} {})</li>",
            escape(&s.player.name),
            s.wins,
            wins_label(s.wins)
        );
    }
    html.push_str("</ol>\n</section>\n");

    html.push_str(
        "<section>\n<h2>Recent Matches</h2>\n<table>\n<thead>\n\
         <tr><th>Match ID</th><th>Winner</th><th>Loser</th><th>Played At</th></tr>\n\
         </thead>\n<tbody id=\"matches\">\n",
    );
    for m in &state.matches {
        let _ = writeln!(
            html,
            "<tr><td>{}</td><td>{}</td><td>{}</td><td>{}</td></tr>",
            m.id,
            escape(&m.winner.name),
            escape(&m.loser.name),
            played_at(m)
        );
    }
    html.push_str("</tbody>\n</table>\n</section>\n</body>\n</html>\n");
    html
}

/// Terminal view used by the `tracker` client.
pub fn render_text(state: &TrackerState) -> String {
    let mut out = String::from("Players\n");
    if state.players.is_empty() {
        out.push_str("  (none)\n");
    }
    for p in &state.players {
        let _ = writeln!(out, "  [{}] {}", p.id, p.name);
    }

    out.push_str("\nLeaderboard\n");
    for (rank, s) in state.leaderboard().iter().enumerate() {
        let _ = writeln!(
            out,
            "  {}. {} ({} {})",
            rank + 1,
            s.player.name,
            s.wins,
            wins_label(s.wins)
        );
    }

    out.push_str("\nRecent Matches\n");
    if state.matches.is_empty() {
        out.push_str("  (none)\n");
    }
    for m in &state.matches {
        let _ = writeln!(
            out,
            "  #{} {} beat {} at {}",
            m.id,
            m.winner.name,
            m.loser.name,
            played_at(m)
        );
    }
    out
}

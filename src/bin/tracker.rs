//! Terminal client: loads players and matches from a running `web` server, applies one
//! action and prints the resulting view.
//! Run with: cargo run --bin tracker -- --url http://localhost:8080 show

use clap::{Parser, Subcommand};
use pingpong_tracker::{render_text, write_matches_csv, HttpTrackerApi, Tracker};
use std::error::Error;
use std::fs::File;
use std::path::PathBuf;
use std::process::ExitCode;

#[derive(Parser)]
#[command(author, version, about = "Ping pong tracker client", long_about = None)]
struct Cli {
    /// Server root URL.
    #[arg(long, env = "TRACKER_URL", default_value = "http://localhost:8080")]
    url: String,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print players, leaderboard and recent matches.
    Show,
    AddPlayer {
        name: String,
    },
    DeletePlayer {
        id: i64,
    },
    /// Record that WINNER_ID beat LOSER_ID.
    Record {
        winner_id: i64,
        loser_id: i64,
    },
    /// Write the recent match history to a CSV file.
    Export {
        #[arg(value_name = "FILE")]
        output: PathBuf,
    },
}

async fn run(cli: Cli) -> Result<(), Box<dyn Error>> {
    let mut tracker = Tracker::load(HttpTrackerApi::new(cli.url)).await;
    match cli.command {
        Commands::Show => {}
        Commands::AddPlayer { name } => {
            tracker.state_mut().set_new_player_name(name);
            if tracker.add_player().await?.is_none() {
                eprintln!("Player name must not be blank.");
            }
        }
        Commands::DeletePlayer { id } => tracker.delete_player(id).await?,
        Commands::Record {
            winner_id,
            loser_id,
        } => {
            let state = tracker.state_mut();
            state.select_winner(Some(winner_id));
            state.select_loser(Some(loser_id));
            tracker.record_match().await?;
        }
        Commands::Export { output } => {
            let file = File::create(&output)?;
            write_matches_csv(file, &tracker.state().matches)?;
            println!(
                "Wrote {} matches to {}",
                tracker.state().matches.len(),
                output.display()
            );
            return Ok(());
        }
    }
    print!("{}", render_text(tracker.state()));
    Ok(())
}

#[tokio::main]
async fn main() -> ExitCode {
    env_logger::init_from_env(env_logger::Env::new().default_filter_or("info"));

    match run(Cli::parse()).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{e}");
            ExitCode::FAILURE
        }
    }
}

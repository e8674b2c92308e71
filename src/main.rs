//! Runs batches of random self-play games against the rules engine and prints
//! win statistics.

use std::time::Instant;

use backgammon_rules::{
    Color, PlayoutConfig,
    playout::{PlayoutSummary, run_playouts},
};
use clap::Parser;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "backgammon-sim")]
#[command(about = "Plays random backgammon games to exercise the rules engine")]
struct Args {
    /// Number of games to play
    #[arg(short, long, default_value = "100")]
    games: u32,

    /// Base seed, game i uses seed + i
    #[arg(long, default_value = "0")]
    seed: u64,

    /// Abandon a game after this many turns
    #[arg(long, default_value = "5000")]
    max_turns: u32,

    /// Print one JSON line per game
    #[arg(long)]
    json: bool,

    /// Enable debug logging
    #[arg(short, long)]
    verbose: bool,
}

fn main() {
    let args = Args::parse();

    let default_level = if args.verbose { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)))
        .with_writer(std::io::stderr)
        .init();

    let config = PlayoutConfig { games: args.games, seed: args.seed, max_turns: args.max_turns };
    info!(games = config.games, seed = config.seed, max_turns = config.max_turns, "starting playouts");

    let start = Instant::now();
    let reports = match run_playouts(&config) {
        Ok(reports) => reports,
        Err(err) => {
            error!(%err, "rules engine rejected a move it listed as legal");
            std::process::exit(1);
        }
    };
    let duration = start.elapsed();

    if args.json {
        for report in &reports {
            match serde_json::to_string(report) {
                Ok(line) => println!("{line}"),
                Err(err) => error!(%err, game = report.game, "failed to serialize report"),
            }
        }
    }

    let summary = PlayoutSummary::from_reports(&reports);
    println!("============================================");
    println!("Games: {}, White Wins: {}, Black Wins: {}, Unfinished: {}",
        summary.games, summary.wins(Color::White), summary.wins(Color::Black), summary.unfinished);
    println!("White Win Rate: {:.2}%, Black Win Rate: {:.2}%",
        summary.win_rate(Color::White), summary.win_rate(Color::Black));
    println!("Average Turns: {:.1}, Moves: {}, Captures: {}",
        summary.average_turns(), summary.total_moves, summary.total_captures);
    println!("Played in {:?}", duration);
    println!("============================================");
}

//! Random self-play used to exercise the rules over whole games.
//!
//! Every move is picked uniformly from [`GameEngine::legal_moves`]; there is no
//! evaluation involved. Games run in parallel, each with its own seeded engine.

use hashbrown::HashMap;
use rand::{SeedableRng, rngs::StdRng, seq::IndexedRandom};
use rayon::iter::{IntoParallelIterator, ParallelIterator};
use serde::Serialize;
use tracing::{debug, trace};

use crate::{
    backgammon::{Color, GameEngine},
    config::{GameConfig, PlayoutConfig},
    error::Result,
};

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PlayoutReport {
    pub game: u32,
    pub seed: u64,
    /// `None` when the turn limit was hit first.
    pub winner: Option<Color>,
    pub turns: u32,
    pub moves: u32,
    /// Turns given up because no legal move existed.
    pub passes: u32,
    pub captures: u32,
    pub white_borne_off: u8,
    pub black_borne_off: u8,
}

/// Plays one game to the end (or to `max_turns`) with uniformly random moves.
pub fn play_random_game(game: u32, seed: u64, max_turns: u32) -> Result<PlayoutReport> {
    let mut engine = GameEngine::new(&GameConfig::seeded(seed));
    let mut rng = StdRng::seed_from_u64(!seed);
    let mut report = PlayoutReport {
        game,
        seed,
        winner: None,
        turns: 0,
        moves: 0,
        passes: 0,
        captures: 0,
        white_borne_off: 0,
        black_borne_off: 0,
    };

    while report.turns < max_turns && engine.get_winner().is_none() {
        report.turns += 1;
        let color = engine.current_color();
        engine.roll_dice()?;

        while engine.current_color() == color && !engine.active_dice().is_empty() {
            let moves = engine.legal_moves();
            let Some(choice) = moves.choose(&mut rng) else {
                engine.end_turn();
                report.passes += 1;
                break;
            };
            let bar_before = engine.board().bar_count(color.opposite());
            engine.apply(choice)?;
            report.moves += 1;
            if engine.board().bar_count(color.opposite()) > bar_before {
                report.captures += 1;
            }
            if engine.has_won(color) {
                break;
            }
        }
    }

    report.winner = engine.get_winner();
    report.white_borne_off = engine.board().borne_off(Color::White);
    report.black_borne_off = engine.board().borne_off(Color::Black);
    trace!(game, "final position\n{}", engine.board().to_fancy_string());
    debug!(game, winner = ?report.winner, turns = report.turns, moves = report.moves, "playout finished");
    Ok(report)
}

/// Runs `config.games` playouts in parallel; game `i` is seeded with `seed + i`.
pub fn run_playouts(config: &PlayoutConfig) -> Result<Vec<PlayoutReport>> {
    (0..config.games)
        .into_par_iter()
        .map(|game| play_random_game(game, config.seed.wrapping_add(game as u64), config.max_turns))
        .collect()
}

#[derive(Debug, Clone, Default)]
pub struct PlayoutSummary {
    pub games: u32,
    pub wins: HashMap<Color, u32>,
    pub unfinished: u32,
    pub total_turns: u64,
    pub total_moves: u64,
    pub total_captures: u64,
}

impl PlayoutSummary {
    pub fn from_reports(reports: &[PlayoutReport]) -> Self {
        let mut summary = PlayoutSummary::default();
        for report in reports {
            summary.games += 1;
            match report.winner {
                Some(color) => *summary.wins.entry(color).or_insert(0) += 1,
                None => summary.unfinished += 1,
            }
            summary.total_turns += report.turns as u64;
            summary.total_moves += report.moves as u64;
            summary.total_captures += report.captures as u64;
        }
        summary
    }

    pub fn wins(&self, color: Color) -> u32 {
        self.wins.get(&color).copied().unwrap_or(0)
    }

    pub fn win_rate(&self, color: Color) -> f32 {
        if self.games == 0 {
            return 0.0;
        }
        self.wins(color) as f32 / self.games as f32 * 100.0
    }

    pub fn average_turns(&self) -> f32 {
        if self.games == 0 {
            return 0.0;
        }
        self.total_turns as f32 / self.games as f32
    }
}

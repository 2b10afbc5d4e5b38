//! Terminal driver: plays the defense engine against the greedy engine and
//! prints the final position with the move transcript.

use quince_chess::engines::engine_defense::DefenseEngine;
use quince_chess::engines::engine_greedy::GreedyEngine;
use quince_chess::engines::engine_trait::Engine;
use quince_chess::utils::match_harness::{run_match, MatchConfig, MatchOutcome};
use quince_chess::utils::move_log::TranscriptLog;
use quince_chess::utils::render_board::render_board;

fn main() {
    let mut white = DefenseEngine::new();
    let mut black = GreedyEngine::new();
    let config = MatchConfig::default();
    let mut log = TranscriptLog::new();

    let result = match run_match(&mut white, &mut black, &config, &mut log) {
        Ok(result) => result,
        Err(err) => {
            eprintln!("match aborted: {err}");
            std::process::exit(1);
        }
    };

    println!("{} vs {}", white.name(), black.name());
    println!("{}", log.render());
    println!("{}", render_board(&result.final_board));
    match result.outcome {
        MatchOutcome::NoLegalMoves { stuck } => {
            println!("{stuck} ran out of moves after {} plies", log.entries().len());
        }
        MatchOutcome::MaxPliesReached => {
            println!("ply limit reached ({} plies)", config.max_plies);
        }
    }
}

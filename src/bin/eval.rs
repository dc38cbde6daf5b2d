use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use minichess::chess::action::Reject;
use minichess::chess::board::{Board, DEFAULT_SIZE};
use minichess::chess::piece::{Piece, PieceKind, Player};
use minichess::core::coord::Coord;
use minichess::search::config::{NodeTracker, SearchConfig, SearchLimits};
use minichess::search::explore::reachable_positions;
use minichess::search::minimax;

#[derive(Debug, Clone, Copy, Deserialize, Serialize)]
struct PlacementSpec {
    kind: PieceKind,
    player: Player,
    row: i32,
    col: i32,
}

fn default_size() -> i32 {
    DEFAULT_SIZE
}

fn default_horizon() -> u32 {
    SearchConfig::default().horizon
}

fn default_only_kings_cutoff() -> u32 {
    SearchConfig::default().only_kings_cutoff
}

#[derive(Debug, Clone, Deserialize, Serialize)]
struct ScenarioSpec {
    /// Explicit placement; omit for the standard starting position.
    #[serde(default)]
    placement: Option<Vec<PlacementSpec>>,
    #[serde(default = "default_size")]
    size: i32,
    side_to_move: Player,
    #[serde(default = "default_horizon")]
    horizon: u32,
    #[serde(default = "default_only_kings_cutoff")]
    only_kings_cutoff: u32,
    #[serde(default)]
    alpha_beta: bool,
    /// When > 0, also count distinct placements reachable in this many plies.
    #[serde(default)]
    explore_plies: u32,
    #[serde(default)]
    max_nodes: Option<u64>,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
struct InputFile {
    scenario: ScenarioSpec,
}

fn build_board(spec: &ScenarioSpec) -> Result<Board, Reject> {
    match &spec.placement {
        None => Ok(Board::initial()),
        Some(placement) => {
            let mut board = Board::empty(spec.size);
            for p in placement {
                board.place(Piece::new(p.kind, p.player, Coord::new(p.row, p.col)))?;
            }
            Ok(board)
        }
    }
}

fn main() {
    let args: Vec<String> = std::env::args().collect();
    if args.len() != 2 {
        eprintln!("Usage: eval <scenario.json>");
        std::process::exit(2);
    }

    let path = PathBuf::from(&args[1]);
    let bytes = match std::fs::read(&path) {
        Ok(b) => b,
        Err(e) => {
            eprintln!("Failed to read {}: {e}", path.display());
            std::process::exit(1);
        }
    };

    let input: InputFile = match serde_json::from_slice(&bytes) {
        Ok(v) => v,
        Err(e) => {
            eprintln!("Invalid JSON in {}: {e}", path.display());
            std::process::exit(2);
        }
    };
    let spec = &input.scenario;

    let board = match build_board(spec) {
        Ok(b) => b,
        Err(e) => {
            eprintln!("Invalid placement: {e}");
            std::process::exit(2);
        }
    };

    let cfg = SearchConfig::default()
        .with_horizon(spec.horizon)
        .with_only_kings_cutoff(spec.only_kings_cutoff)
        .with_alpha_beta(spec.alpha_beta);
    let limits = match spec.max_nodes {
        Some(max_nodes) => SearchLimits { max_nodes },
        None => SearchLimits::default(),
    };

    let mut tracker = NodeTracker::new(limits);
    let outcome = match minimax::search(&board, spec.side_to_move, &cfg, &mut tracker) {
        Ok(o) => o,
        Err(e) => {
            eprintln!("Evaluation failed: {e}");
            std::process::exit(1);
        }
    };
    let nodes = tracker.nodes();

    let reachable = if spec.explore_plies > 0 {
        let mut tracker = NodeTracker::new(limits);
        match reachable_positions(&board, spec.side_to_move, spec.explore_plies, &mut tracker) {
            Ok(set) => Some(set.len()),
            Err(e) => {
                eprintln!("Exploration failed: {e}");
                std::process::exit(1);
            }
        }
    } else {
        None
    };

    let out = serde_json::json!({
        "scenario": input.scenario,
        "outcome": outcome,
        "nodes": nodes,
        "reachable_positions": reachable,
    });
    println!("{}", serde_json::to_string_pretty(&out).unwrap());
}

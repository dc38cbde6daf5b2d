//! The two mutually recursive search procedures.
//!
//! White maximizes the payoff, black minimizes it. Each node enumerates the
//! side-to-move's actions in generation order, applies each to a fresh deep
//! copy of the board and recurses into the dual procedure. Replacement of the
//! incumbent best requires a *strict* improvement, so the first move in
//! generation order wins ties and the search is fully deterministic.

use serde::Serialize;

use crate::chess::board::Board;
use crate::chess::piece::{PieceKind, Player};
use crate::core::coord::Coord;

use super::config::{NodeTracker, SearchConfig, SearchError};

/// Strictly larger than any reachable payoff sum.
pub const SCORE_INFINITY: i32 = 1_000_000;

/// Result of a search call.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "outcome", rename_all = "snake_case")]
pub enum Outcome {
    /// The position was terminal before any move was tried.
    Terminal { score: i32 },
    /// Best move found for the side to move.
    Best {
        score: i32,
        kind: PieceKind,
        dest: Coord,
    },
    /// The side to move had no legal actions.
    NoMoves { side: Player },
}

impl Outcome {
    /// The score a parent node folds in. A side without moves scores as its
    /// own worst case, which keeps the classic sentinel semantics inside the
    /// recursion while staying a distinguishable case at the API.
    #[inline]
    pub fn score(&self) -> i32 {
        match *self {
            Outcome::Terminal { score } | Outcome::Best { score, .. } => score,
            Outcome::NoMoves { side: Player::White } => -SCORE_INFINITY,
            Outcome::NoMoves { side: Player::Black } => SCORE_INFINITY,
        }
    }
}

/// Entry point: run the search for `side` on `board`.
///
/// `board.plies()` is expected to start at zero; the horizon in `cfg` is
/// measured against it.
pub fn search(
    board: &Board,
    side: Player,
    cfg: &SearchConfig,
    tracker: &mut NodeTracker,
) -> Result<Outcome, SearchError> {
    match side {
        Player::White => maximize(board, cfg, -SCORE_INFINITY, SCORE_INFINITY, tracker),
        Player::Black => minimize(board, cfg, -SCORE_INFINITY, SCORE_INFINITY, tracker),
    }
}

/// White to move: keep the action with the strictly greatest reply score.
pub fn maximize(
    board: &Board,
    cfg: &SearchConfig,
    mut alpha: i32,
    beta: i32,
    tracker: &mut NodeTracker,
) -> Result<Outcome, SearchError> {
    tracker.bump_nodes(1)?;

    if let Some(score) = board.status(Some(cfg.horizon), cfg.only_kings_cutoff) {
        return Ok(Outcome::Terminal { score });
    }

    let actions = board.possible_actions(Player::White);
    if actions.is_empty() {
        return Ok(Outcome::NoMoves {
            side: Player::White,
        });
    }

    let mut best: Option<(i32, PieceKind, Coord)> = None;
    for act in &actions {
        let mut child = board.clone();
        child.apply(act)?;

        let reply = minimize(&child, cfg, alpha, beta, tracker)?;
        let score = reply.score();

        if best.map_or(true, |(s, _, _)| score > s) {
            best = Some((score, act.piece().kind, act.to()));
        }

        if cfg.alpha_beta {
            alpha = alpha.max(score);
            if alpha >= beta {
                break;
            }
        }
    }

    let (score, kind, dest) = best.expect("at least one action was scored");
    Ok(Outcome::Best { score, kind, dest })
}

/// Black to move: keep the action with the strictly least reply score.
pub fn minimize(
    board: &Board,
    cfg: &SearchConfig,
    alpha: i32,
    mut beta: i32,
    tracker: &mut NodeTracker,
) -> Result<Outcome, SearchError> {
    tracker.bump_nodes(1)?;

    if let Some(score) = board.status(Some(cfg.horizon), cfg.only_kings_cutoff) {
        return Ok(Outcome::Terminal { score });
    }

    let actions = board.possible_actions(Player::Black);
    if actions.is_empty() {
        return Ok(Outcome::NoMoves {
            side: Player::Black,
        });
    }

    let mut best: Option<(i32, PieceKind, Coord)> = None;
    for act in &actions {
        let mut child = board.clone();
        child.apply(act)?;

        let reply = maximize(&child, cfg, alpha, beta, tracker)?;
        let score = reply.score();

        if best.map_or(true, |(s, _, _)| score < s) {
            best = Some((score, act.piece().kind, act.to()));
        }

        if cfg.alpha_beta {
            beta = beta.min(score);
            if beta <= alpha {
                break;
            }
        }
    }

    let (score, kind, dest) = best.expect("at least one action was scored");
    Ok(Outcome::Best { score, kind, dest })
}

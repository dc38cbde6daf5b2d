//! Reachability diagnostics: how many distinct placements the game tree
//! touches within a few plies. Used by the eval CLI to report branching
//! behavior and by tests as a determinism probe.

use rustc_hash::FxHashSet;

use crate::chess::board::{Board, PackedBoard};
use crate::chess::piece::Player;

use super::config::{NodeTracker, SearchError};

/// Distinct placements reachable from `board` within `plies` alternating
/// moves, `side` moving first (the start placement included).
///
/// The frontier is deduplicated on (placement, side to move): the same
/// placement can recur with the other player to move and lead to placements
/// it cannot reach under the first parity, so it must be expanded once per
/// parity.
pub fn reachable_positions(
    board: &Board,
    side: Player,
    plies: u32,
    tracker: &mut NodeTracker,
) -> Result<FxHashSet<PackedBoard>, SearchError> {
    let mut seen: FxHashSet<PackedBoard> = FxHashSet::default();
    seen.insert(board.packed());

    let mut expanded: FxHashSet<(PackedBoard, Player)> = FxHashSet::default();
    expanded.insert((board.packed(), side));

    let mut frontier: Vec<Board> = vec![board.clone()];
    let mut turn = side;

    for _ in 0..plies {
        let mut next: Vec<Board> = Vec::new();
        for b in &frontier {
            tracker.bump_nodes(1)?;
            for act in b.possible_actions(turn) {
                let mut child = b.clone();
                child.apply(&act)?;
                seen.insert(child.packed());
                if expanded.insert((child.packed(), turn.other())) {
                    next.push(child);
                }
            }
        }
        frontier = next;
        turn = turn.other();
    }

    Ok(seen)
}

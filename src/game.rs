use crate::chess::action::{Action, Reject};
use crate::chess::board::Board;
use crate::chess::piece::{PieceKind, Player};
use crate::core::coord::Coord;
use crate::search::config::{NodeTracker, SearchConfig, SearchError, SearchLimits};
use crate::search::minimax::{self, Outcome};

/// Facade for the turn-loop collaborator: the live board plus search
/// configuration and budgets.
#[derive(Debug, Clone)]
pub struct Game {
    board: Board,
    config: SearchConfig,
    limits: SearchLimits,
}

impl Game {
    /// A fresh game with the fixed starting placement.
    pub fn new() -> Self {
        Self::from_board(Board::initial())
    }

    pub fn from_board(board: Board) -> Self {
        Self {
            board,
            config: SearchConfig::default(),
            limits: SearchLimits::default(),
        }
    }

    pub fn with_config(mut self, config: SearchConfig) -> Self {
        self.config = config;
        self
    }

    pub fn with_limits(mut self, limits: SearchLimits) -> Self {
        self.limits = limits;
        self
    }

    #[inline]
    pub fn board(&self) -> &Board {
        &self.board
    }

    #[inline]
    pub fn config(&self) -> &SearchConfig {
        &self.config
    }

    /// Run the max/min search for `side` on a copy of the live board.
    ///
    /// The copy's ply clock is zeroed first: the horizon is measured from the
    /// current position, while the live board's only-kings counter carries
    /// over into the branch.
    pub fn search(&self, side: Player) -> Result<Outcome, SearchError> {
        let mut root = self.board.clone();
        root.reset_ply_clock();
        let mut tracker = NodeTracker::new(self.limits);
        minimax::search(&root, side, &self.config, &mut tracker)
    }

    /// Validate a proposed move without applying it.
    ///
    /// Fails fast with [`Reject::NoSuchPiece`] when the piece is not on the
    /// board; otherwise the returned [`Action`] carries its own verdict.
    pub fn validate_move(
        &self,
        kind: PieceKind,
        player: Player,
        dest: Coord,
    ) -> Result<Action, Reject> {
        let piece = self
            .board
            .find_piece(kind, player)
            .copied()
            .ok_or(Reject::NoSuchPiece { kind, player })?;
        Ok(Action::new(piece, dest, &self.board))
    }

    /// Apply an accepted action to the live board.
    pub fn apply(&mut self, action: &Action) -> Result<(), Reject> {
        self.board.apply(action)
    }

    /// Final score of the live game, if it is over: positive = white,
    /// negative = black, zero = tie, `None` = game continues.
    ///
    /// The live game has no ply horizon; only a captured king or the
    /// only-kings cutoff end it.
    pub fn terminal_result(&self) -> Option<i32> {
        self.board.status(None, self.config.only_kings_cutoff)
    }
}

impl Default for Game {
    fn default() -> Self {
        Self::new()
    }
}

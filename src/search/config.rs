use std::fmt;

use crate::chess::action::Reject;

/// Tuning knobs of the search. The horizon and the only-kings cutoff are
/// explicit values rather than embedded constants so tests can run shallow
/// and deep searches deterministically.
#[derive(Debug, Clone, Copy)]
pub struct SearchConfig {
    /// Look-ahead horizon in plies, measured from the search root.
    pub horizon: u32,
    /// Terminal cutoff once this many plies have been played with only the
    /// two kings remaining.
    pub only_kings_cutoff: u32,
    /// Real alpha-beta pruning. Off by default: the reference behavior is
    /// the exhaustive search. With strict first-move-wins tie-breaks the
    /// root outcome is identical either way.
    pub alpha_beta: bool,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            horizon: 6,
            only_kings_cutoff: 3,
            alpha_beta: false,
        }
    }
}

impl SearchConfig {
    pub fn with_horizon(mut self, horizon: u32) -> Self {
        self.horizon = horizon;
        self
    }

    pub fn with_only_kings_cutoff(mut self, cutoff: u32) -> Self {
        self.only_kings_cutoff = cutoff;
        self
    }

    pub fn with_alpha_beta(mut self, enabled: bool) -> Self {
        self.alpha_beta = enabled;
        self
    }
}

/// Search budgets. The tree is branching-factor^horizon with a full board
/// copy per node, so deep horizons need a guard rather than an OOM abort.
#[derive(Debug, Clone, Copy)]
pub struct SearchLimits {
    pub max_nodes: u64,
}

impl Default for SearchLimits {
    fn default() -> Self {
        Self {
            max_nodes: 50_000_000,
        }
    }
}

/// Counts visited nodes against [`SearchLimits`].
#[derive(Debug, Clone)]
pub struct NodeTracker {
    limits: SearchLimits,
    nodes: u64,
}

impl NodeTracker {
    #[inline]
    pub fn new(limits: SearchLimits) -> Self {
        Self { limits, nodes: 0 }
    }

    #[inline]
    pub fn nodes(&self) -> u64 {
        self.nodes
    }

    #[inline]
    pub fn bump_nodes(&mut self, delta: u64) -> Result<(), SearchError> {
        self.nodes = self.nodes.saturating_add(delta);
        if self.nodes > self.limits.max_nodes {
            return Err(SearchError::LimitExceeded {
                limit: self.limits.max_nodes,
                observed: self.nodes,
            });
        }
        Ok(())
    }
}

/// Structured errors returned by search routines.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchError {
    /// The configured node budget was exceeded.
    LimitExceeded { limit: u64, observed: u64 },
    /// An action the search tried to apply was refused by the board.
    IllegalAction { reject: Reject },
}

impl fmt::Display for SearchError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SearchError::LimitExceeded { limit, observed } => {
                write!(f, "node budget exceeded (limit={limit}, observed={observed})")
            }
            SearchError::IllegalAction { reject } => {
                write!(f, "search applied an illegal action: {reject}")
            }
        }
    }
}

impl std::error::Error for SearchError {}

impl From<Reject> for SearchError {
    fn from(reject: Reject) -> Self {
        SearchError::IllegalAction { reject }
    }
}

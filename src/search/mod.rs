//! The adversarial tree search: configuration and budgets, the max/min
//! recursion, and reachability diagnostics.

pub mod config;
pub mod explore;
pub mod minimax;

use crate::logic::board::{Board, Side};
use serde::{Deserialize, Serialize};

pub mod config;
pub mod constants;
pub mod eval;
pub mod search;

/// Counters reported alongside every chosen move.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct SearchStats {
    /// Depth the search ran at, in plies.
    pub depth: u8,
    /// Recursion nodes visited; zero when the move was forced.
    pub nodes: u64,
}

pub trait Evaluator {
    /// Scores `board` for `side`; higher is better for that side.
    fn evaluate(&self, board: &Board, side: Side) -> i32;

    /// Scores a finished position, one where the side to move has no
    /// playable hole. The result always lies outside the range `evaluate`
    /// can produce, so decided games dominate any heuristic judgement.
    fn end_evaluation(&self, board: &Board, side: Side) -> i32;
}

pub trait Searcher {
    /// Picks a hole for `side`, or `None` when no hole is playable.
    fn choose_move(&mut self, board: &Board, side: Side) -> Option<(usize, SearchStats)>;
}

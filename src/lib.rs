//! Core engine for Awele, the West African sowing game of the
//! Oware/Mancala family.
//!
//! `logic` owns the board and the rules of play (relay sowing, backward
//! captures, the starvation guard); `engine` owns the weighted heuristic
//! evaluation and the depth-limited minimax search. The crate draws
//! nothing on screen: a front end drives it through [`Board`], the
//! functions in [`logic::rules`], [`GameState`] for turn bookkeeping and a
//! [`Searcher`] for the machine's replies, typically from a worker thread
//! so the interface stays responsive while the engine thinks.

pub mod engine;
pub mod logic;

pub use engine::config::EngineConfig;
pub use engine::eval::HeuristicEvaluator;
pub use engine::search::MinimaxEngine;
pub use engine::{Evaluator, SearchStats, Searcher};
pub use logic::board::{Board, Side};
pub use logic::game::{GameState, GameStatus};
pub use logic::move_list::MoveList;
pub use logic::rules::MoveError;

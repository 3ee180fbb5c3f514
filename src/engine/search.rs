use crate::engine::config::EngineConfig;
use crate::engine::constants::{MAX_SEARCH_DEPTH, SCORE_MAX, SCORE_MIN};
use crate::engine::eval::HeuristicEvaluator;
use crate::engine::{Evaluator, SearchStats, Searcher};
use crate::logic::board::{Board, Side};
use crate::logic::rules;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::sync::Arc;

/// Depth-limited minimax over a scratch board, with a bound array driving
/// the pruning: one shared threshold per ply, raised as nodes at that ply
/// complete and handed to later siblings as the value to beat.
///
/// This is not alpha-beta. The bound for a ply survives across cousins
/// visited in sequence and is reset one ply down after each node finishes,
/// so how much gets cut depends on visit order. The scheme is kept as the
/// game's long-standing engines ran it, quirks included.
pub struct MinimaxEngine {
    config: Arc<EngineConfig>,
    evaluator: HeuristicEvaluator,
    // Sized so the deepest leaf can still clear the slot below itself.
    bounds: [i32; MAX_SEARCH_DEPTH + 2],
    rng: StdRng,
    nodes: u64,
}

impl MinimaxEngine {
    #[must_use]
    pub fn new(config: Arc<EngineConfig>) -> Self {
        Self::with_rng(config, StdRng::from_entropy())
    }

    /// Engine with a fixed tie-break seed. Equal-scored moves are chosen by
    /// coin flip, so only a seeded engine picks reproducibly.
    #[must_use]
    pub fn with_seed(config: Arc<EngineConfig>, seed: u64) -> Self {
        Self::with_rng(config, StdRng::seed_from_u64(seed))
    }

    fn with_rng(config: Arc<EngineConfig>, rng: StdRng) -> Self {
        Self {
            evaluator: HeuristicEvaluator::new(config.clone()),
            config,
            bounds: [0; MAX_SEARCH_DEPTH + 2],
            rng,
            nodes: 0,
        }
    }

    pub fn update_config(&mut self, config: Arc<EngineConfig>) {
        self.evaluator = HeuristicEvaluator::new(config.clone());
        self.config = config;
    }

    fn level(&self) -> usize {
        (self.config.level as usize).min(MAX_SEARCH_DEPTH)
    }

    // Even plies maximize for the root side, odd plies minimize. A node's
    // running best starts at its own worst case; the shared bound starts at
    // the opposite extreme.
    const fn local_start(depth: usize) -> i32 {
        if depth % 2 == 0 {
            SCORE_MIN
        } else {
            SCORE_MAX
        }
    }

    const fn bound_start(depth: usize) -> i32 {
        if depth % 2 == 0 {
            SCORE_MAX
        } else {
            SCORE_MIN
        }
    }

    fn reset_bounds(&mut self) {
        for (depth, bound) in self.bounds.iter_mut().enumerate() {
            *bound = Self::bound_start(depth);
        }
    }

    /// Whether `score` replaces `best` at this ply. Strictly better by the
    /// ply's parity always does; an exact tie does half the time.
    fn improves(&mut self, depth: usize, score: i32, best: i32) -> bool {
        if score == best {
            return self.rng.gen_bool(0.5);
        }
        if depth % 2 == 0 {
            score > best
        } else {
            score < best
        }
    }

    fn past_bound(&self, depth: usize, best: i32) -> bool {
        if depth % 2 == 0 {
            best > self.bounds[depth]
        } else {
            best < self.bounds[depth]
        }
    }

    fn tightens_bound(&self, depth: usize, best: i32) -> bool {
        if depth % 2 == 0 {
            best < self.bounds[depth]
        } else {
            best > self.bounds[depth]
        }
    }

    fn minimax(&mut self, board: &mut Board, depth: usize, to_move: Side, root_side: Side) -> i32 {
        self.nodes += 1;

        if depth >= self.level() {
            let score = self.evaluator.evaluate(board, root_side);
            self.bounds[depth + 1] = Self::bound_start(depth + 1);
            return score;
        }

        let mut best = Self::local_start(depth);
        let mut any_played = false;
        let saved = *board;

        for hole in to_move.holes() {
            if rules::apply_move(board, hole, to_move).is_err() {
                continue;
            }
            any_played = true;
            let score = self.minimax(board, depth + 1, to_move.opposite(), root_side);
            *board = saved;

            if self.improves(depth, score, best) {
                best = score;
            }
            // Past the shared bound for this ply: abandon the node at once,
            // leaving the bound array untouched.
            if self.past_bound(depth, best) {
                return best;
            }
        }

        if !any_played {
            best = self.evaluator.end_evaluation(board, root_side);
        }
        if self.tightens_bound(depth, best) {
            self.bounds[depth] = best;
        }
        self.bounds[depth + 1] = Self::bound_start(depth + 1);
        best
    }
}

impl Searcher for MinimaxEngine {
    fn choose_move(&mut self, board: &Board, side: Side) -> Option<(usize, SearchStats)> {
        let moves = rules::legal_moves(board, side);
        if moves.is_empty() {
            return None;
        }

        let level = self.level();
        self.nodes = 0;

        if moves.len() == 1 {
            let hole = moves.first()?;
            log::debug!("forced move for {side:?}: hole {hole}");
            return Some((
                hole,
                SearchStats {
                    depth: level as u8,
                    nodes: 0,
                },
            ));
        }

        self.reset_bounds();
        let saved = *board;
        let mut scratch = *board;
        let mut best = Self::local_start(0);
        let mut chosen = None;

        for hole in side.holes() {
            if rules::apply_move(&mut scratch, hole, side).is_err() {
                continue;
            }
            let score = self.minimax(&mut scratch, 1, side.opposite(), side);
            scratch = saved;

            if self.improves(0, score, best) {
                best = score;
                chosen = Some(hole);
            }
        }

        let hole = chosen?;
        log::debug!(
            "chose hole {hole} for {side:?}: score {best}, {} nodes at level {level}",
            self.nodes
        );
        Some((
            hole,
            SearchStats {
                depth: level as u8,
                nodes: self.nodes,
            },
        ))
    }
}

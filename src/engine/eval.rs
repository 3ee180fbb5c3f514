use crate::engine::config::EngineConfig;
use crate::engine::constants::{
    DAM_MAX_SEEDS, END_MARGIN, LOFT_MAX_SEEDS, LOFT_MIN_SEEDS, SCORE_MAX, SCORE_MIN,
};
use crate::engine::Evaluator;
use crate::logic::board::{Board, Side, HOLES, HOLES_PER_SIDE};
use std::sync::Arc;

/// Weighted-sum evaluation. Every term is a north-minus-south difference
/// multiplied by its weight, flipped when scoring for South, so the result
/// is always "higher is better for the side asked about".
pub struct HeuristicEvaluator {
    config: Arc<EngineConfig>,
}

impl HeuristicEvaluator {
    #[must_use]
    pub const fn new(config: Arc<EngineConfig>) -> Self {
        Self { config }
    }

    const fn sign(side: Side) -> i32 {
        match side {
            Side::North => 1,
            Side::South => -1,
        }
    }

    /// Captured-seed difference.
    fn advance(&self, board: &Board, side: Side) -> i32 {
        (board.store(Side::North) - board.store(Side::South))
            * self.config.weight_advance
            * Self::sign(side)
    }

    /// Seeds still in play, north half minus south half.
    fn potential(&self, board: &Board, side: Side) -> i32 {
        let sum = board.seeds_in_half(Side::North) - board.seeds_in_half(Side::South);
        sum * self.config.weight_potential * Self::sign(side)
    }

    /// Non-empty holes, north minus south.
    fn mobility(&self, board: &Board, side: Side) -> i32 {
        let cells = board.cells();
        let mut mobility = 0;
        for i in 0..HOLES_PER_SIDE {
            if cells[i] != 0 {
                mobility += 1;
            }
        }
        for i in HOLES_PER_SIDE..HOLES {
            if cells[i] != 0 {
                mobility -= 1;
            }
        }
        mobility * self.config.weight_mobility * Self::sign(side)
    }

    /// Holes whose sow stays inside the owner's half, north minus south.
    /// The last hole of each half always crosses over, so the scans stop
    /// one short.
    #[allow(clippy::cast_possible_truncation, clippy::cast_possible_wrap)]
    fn tactical_mobility(&self, board: &Board, side: Side) -> i32 {
        let cells = board.cells();
        let mut tactical = 0;
        for i in 0..HOLES_PER_SIDE - 1 {
            if (i as i32) + cells[i] < HOLES_PER_SIDE as i32 {
                tactical += 1;
            }
        }
        for i in HOLES_PER_SIDE..HOLES - 1 {
            if (i as i32) + cells[i] < HOLES as i32 {
                tactical -= 1;
            }
        }
        tactical * self.config.weight_tactical * Self::sign(side)
    }

    /// Opponent holes some hole could land its partial lap on, north minus
    /// south.
    #[allow(clippy::cast_sign_loss)]
    fn threats(&self, board: &Board, side: Side) -> i32 {
        let cells = board.cells();
        let mut north_landings = [0; HOLES];
        let mut south_landings = [0; HOLES];
        let mut north = 0;
        let mut south = 0;
        for i in 0..HOLES_PER_SIDE {
            north_landings[(i + (cells[i] % 11) as usize) % HOLES] += 1;
        }
        for i in HOLES_PER_SIDE..HOLES {
            if north_landings[i] > 0 {
                north += 1;
            }
        }
        for i in HOLES_PER_SIDE..HOLES {
            south_landings[(i + (cells[i] % 11) as usize) % HOLES] += 1;
        }
        for i in 0..HOLES_PER_SIDE {
            if south_landings[i] > 0 {
                south += 1;
            }
        }
        (north - south) * self.config.weight_threats * Self::sign(side)
    }

    /// Hoarded holes whose partial lap reaches the opponent's half, north
    /// minus south.
    #[allow(clippy::cast_sign_loss)]
    fn lofts(&self, board: &Board, side: Side) -> i32 {
        let cells = board.cells();
        let mut north_lofts = 0;
        let mut south_lofts = 0;
        for i in 0..HOLES_PER_SIDE {
            if (LOFT_MIN_SEEDS..=LOFT_MAX_SEEDS).contains(&cells[i])
                && (i + (cells[i] % 11) as usize) % HOLES >= HOLES_PER_SIDE
            {
                north_lofts += 1;
            }
        }
        for i in HOLES_PER_SIDE..HOLES {
            if (LOFT_MIN_SEEDS..=LOFT_MAX_SEEDS).contains(&cells[i])
                && (i + (cells[i] % 11) as usize) % HOLES < HOLES_PER_SIDE
            {
                south_lofts += 1;
            }
        }
        (north_lofts - south_lofts) * self.config.weight_lofts * Self::sign(side)
    }

    /// Longest run of vulnerable holes in each half, south run minus north
    /// run: a long weak stretch of one's own holes is a liability.
    fn dams(&self, board: &Board, side: Side) -> i32 {
        let cells = board.cells();
        let north_run = Self::longest_low_run(&cells[..HOLES_PER_SIDE]);
        let south_run = Self::longest_low_run(&cells[HOLES_PER_SIDE..HOLES]);
        (south_run - north_run) * self.config.weight_dams * Self::sign(side)
    }

    fn longest_low_run(holes: &[i32]) -> i32 {
        let mut run = 0;
        let mut longest = 0;
        for &seeds in holes {
            if seeds <= DAM_MAX_SEEDS {
                run += 1;
            } else {
                longest = longest.max(run);
                run = 0;
            }
        }
        longest.max(run)
    }
}

impl Evaluator for HeuristicEvaluator {
    fn evaluate(&self, board: &Board, side: Side) -> i32 {
        self.advance(board, side)
            + self.potential(board, side)
            + self.mobility(board, side)
            + self.tactical_mobility(board, side)
            + self.threats(board, side)
            + self.lofts(board, side)
            + self.dams(board, side)
    }

    fn end_evaluation(&self, board: &Board, side: Side) -> i32 {
        let difference =
            (board.store(Side::North) - board.store(Side::South)) * Self::sign(side);
        if difference > 0 {
            SCORE_MAX - END_MARGIN + difference
        } else if difference < 0 {
            SCORE_MIN + END_MARGIN - difference
        } else {
            0
        }
    }
}

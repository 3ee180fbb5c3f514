//! Score bounds and the tuned heuristic weights.

/// Ceiling on any score the engine produces.
pub const SCORE_MAX: i32 = 200_000;
/// Floor on any score the engine produces.
pub const SCORE_MIN: i32 = -200_000;
/// Offset keeping decided-game scores inside the representable band while
/// staying far above anything the mid-game evaluation can reach.
pub const END_MARGIN: i32 = 100;

/// Hard ceiling on the search depth; the bound array is sized from it.
pub const MAX_SEARCH_DEPTH: usize = 16;

// Default heuristic weights. The values were bred by playing mutated
// weight sets against each other; see `EngineConfig` for runtime tuning.
pub const WEIGHT_ADVANCE: i32 = 100;
pub const WEIGHT_POTENTIAL: i32 = 20;
pub const WEIGHT_MOBILITY: i32 = 40;
pub const WEIGHT_TACTICAL: i32 = 0;
pub const WEIGHT_THREATS: i32 = 80;
pub const WEIGHT_LOFTS: i32 = 70;
pub const WEIGHT_DAMS: i32 = 60;

/// A hole hoarding a seed count in this window counts as a loft when its
/// partial lap would land in the opponent's half.
pub const LOFT_MIN_SEEDS: i32 = 12;
pub const LOFT_MAX_SEEDS: i32 = 33;

/// Holes holding at most this many seeds are vulnerable links in a dam.
pub const DAM_MAX_SEEDS: i32 = 2;

use serde::{Deserialize, Serialize};

/// Number of playable holes around the board.
pub const HOLES: usize = 12;
/// Holes owned by one side.
pub const HOLES_PER_SIDE: usize = 6;
/// Playable holes plus the two stores.
pub const CELLS: usize = 14;
/// Seeds in every hole at the start of a game.
pub const INITIAL_SEEDS: i32 = 4;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Side {
    North,
    South,
}

impl Side {
    #[must_use]
    pub const fn opposite(self) -> Self {
        match self {
            Self::North => Self::South,
            Self::South => Self::North,
        }
    }

    /// Index of this side's first hole.
    #[must_use]
    pub const fn first_hole(self) -> usize {
        match self {
            Self::North => 0,
            Self::South => HOLES_PER_SIDE,
        }
    }

    /// Hole indices owned by this side, in ascending order.
    pub fn holes(self) -> std::ops::Range<usize> {
        self.first_hole()..self.first_hole() + HOLES_PER_SIDE
    }

    /// Cell index of this side's captured-seed store.
    #[must_use]
    pub const fn store(self) -> usize {
        match self {
            Self::North => 12,
            Self::South => 13,
        }
    }

    #[must_use]
    pub const fn owns_hole(self, hole: usize) -> bool {
        hole >= self.first_hole() && hole < self.first_hole() + HOLES_PER_SIDE
    }
}

/// The fourteen cells of an Awele board: holes 0-5 belong to North, 6-11 to
/// South, 12 and 13 are the North and South stores. Cells never go negative
/// and legal moves only relocate seeds, so the board total is constant for
/// the whole game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Board {
    cells: [i32; CELLS],
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

impl Board {
    #[must_use]
    pub fn new() -> Self {
        let mut board = Self { cells: [0; CELLS] };
        board.reset();
        board
    }

    /// Builds a board from raw cells, for position setup. The caller
    /// supplies a layout the rules can act on (no negative counts).
    #[must_use]
    pub const fn from_cells(cells: [i32; CELLS]) -> Self {
        Self { cells }
    }

    /// Restores the starting layout: four seeds in every hole, empty stores.
    pub fn reset(&mut self) {
        for hole in 0..HOLES {
            self.cells[hole] = INITIAL_SEEDS;
        }
        self.cells[Side::North.store()] = 0;
        self.cells[Side::South.store()] = 0;
    }

    /// Seeds in `cell` (hole or store); out-of-range indices read as empty.
    #[must_use]
    pub fn seeds(&self, cell: usize) -> i32 {
        self.cells.get(cell).copied().unwrap_or(0)
    }

    /// Seeds captured so far by `side`.
    #[must_use]
    pub fn store(&self, side: Side) -> i32 {
        self.cells[side.store()]
    }

    /// Sum of the seeds left in `side`'s six holes.
    #[must_use]
    pub fn seeds_in_half(&self, side: Side) -> i32 {
        side.holes().map(|hole| self.cells[hole]).sum()
    }

    /// Every seed on the board, stores included.
    #[must_use]
    pub fn total_seeds(&self) -> i32 {
        self.cells.iter().sum()
    }

    /// Read view of all fourteen cells, for rendering.
    #[must_use]
    pub const fn cells(&self) -> &[i32; CELLS] {
        &self.cells
    }

    pub(crate) fn cells_mut(&mut self) -> &mut [i32; CELLS] {
        &mut self.cells
    }

    /// Mirrors the position: the two half-rows trade places and so do the
    /// stores, as when the human changes sides mid-game.
    pub fn swap_sides(&mut self) {
        for hole in 0..HOLES_PER_SIDE {
            self.cells.swap(hole, hole + HOLES_PER_SIDE);
        }
        self.cells.swap(Side::North.store(), Side::South.store());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_initial_layout() {
        let board = Board::new();
        for hole in 0..HOLES {
            assert_eq!(board.seeds(hole), INITIAL_SEEDS);
        }
        assert_eq!(board.store(Side::North), 0);
        assert_eq!(board.store(Side::South), 0);
        assert_eq!(board.total_seeds(), 48);
    }

    #[test]
    fn test_reset_clears_stores() {
        let mut board = Board::from_cells([0, 0, 0, 0, 0, 0, 1, 1, 1, 1, 1, 1, 30, 12]);
        board.reset();
        assert_eq!(board, Board::new());
    }

    #[test]
    fn test_side_geometry() {
        assert_eq!(Side::North.holes().collect::<Vec<_>>(), vec![0, 1, 2, 3, 4, 5]);
        assert_eq!(Side::South.holes().collect::<Vec<_>>(), vec![6, 7, 8, 9, 10, 11]);
        assert!(Side::North.owns_hole(5));
        assert!(!Side::North.owns_hole(6));
        assert!(Side::South.owns_hole(6));
        assert!(!Side::South.owns_hole(12));
        assert_eq!(Side::North.opposite(), Side::South);
    }

    #[test]
    fn test_out_of_range_reads_empty() {
        let board = Board::new();
        assert_eq!(board.seeds(CELLS), 0);
        assert_eq!(board.seeds(usize::MAX), 0);
    }

    #[test]
    fn test_swap_sides() {
        let mut board = Board::from_cells([1, 2, 3, 4, 5, 6, 7, 8, 9, 10, 11, 12, 20, 8]);
        board.swap_sides();
        assert_eq!(
            board.cells(),
            &[7, 8, 9, 10, 11, 12, 1, 2, 3, 4, 5, 6, 8, 20]
        );
        board.swap_sides();
        assert_eq!(board.seeds(0), 1);
        assert_eq!(board.store(Side::North), 20);
    }
}

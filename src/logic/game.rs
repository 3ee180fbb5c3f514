use crate::logic::board::{Board, Side};
use crate::logic::rules::{self, MoveError};
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameStatus {
    Playing,
    /// The side to move had no playable hole; the winner is whoever leads
    /// on captured seeds, `None` on an exact tie.
    Finished(Option<Side>),
}

/// One played move, with enough state to take it back. Sowing is not
/// locally invertible once a capture chain fires, so the record keeps the
/// whole pre-move board.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct MoveRecord {
    pub hole: usize,
    pub side: Side,
    /// Seeds the move banked into the mover's store.
    pub captured: i32,
    pub board_before: Board,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameState {
    pub board: Board,
    pub turn: Side,
    pub status: GameStatus,
    pub last_move: Option<usize>,
    pub history: Vec<MoveRecord>,
}

impl Default for GameState {
    fn default() -> Self {
        Self::new()
    }
}

impl GameState {
    #[must_use]
    pub fn new() -> Self {
        Self {
            board: Board::new(),
            turn: Side::North,
            status: GameStatus::Playing,
            last_move: None,
            history: Vec::new(),
        }
    }

    /// Plays `hole` for the side to move. On success the turn passes and
    /// the status is refreshed; the captured-seed count is returned.
    pub fn make_move(&mut self, hole: usize) -> Result<i32, MoveError> {
        if self.status != GameStatus::Playing {
            return Err(MoveError::GameOver);
        }
        let board_before = self.board;
        let captured = rules::apply_move(&mut self.board, hole, self.turn)?;

        self.history.push(MoveRecord {
            hole,
            side: self.turn,
            captured,
            board_before,
        });
        self.last_move = Some(hole);
        self.turn = self.turn.opposite();
        self.update_status();

        Ok(captured)
    }

    fn update_status(&mut self) {
        if rules::legal_moves(&self.board, self.turn).is_empty() {
            let north = self.board.store(Side::North);
            let south = self.board.store(Side::South);
            self.status = GameStatus::Finished(match north.cmp(&south) {
                Ordering::Greater => Some(Side::North),
                Ordering::Less => Some(Side::South),
                Ordering::Equal => None,
            });
        }
    }

    /// Takes back the last move, restoring board, turn and status. Returns
    /// `false` when there is nothing to undo.
    pub fn undo_move(&mut self) -> bool {
        if let Some(record) = self.history.pop() {
            self.board = record.board_before;
            self.turn = record.side;
            self.last_move = self.history.last().map(|r| r.hole);
            self.status = GameStatus::Playing;
            true
        } else {
            false
        }
    }

    /// Starts a fresh game.
    pub fn reset(&mut self) {
        *self = Self::new();
    }
}

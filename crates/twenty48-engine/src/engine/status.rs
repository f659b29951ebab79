use super::board::{Board, Move};
use super::resolver::can_move;

/// Tile value that wins the game unless configured otherwise.
pub const DEFAULT_TARGET: u32 = 2048;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameStatus {
    InProgress,
    Won,
    Lost,
}

/// True if any tile on `board` equals `target`.
pub fn has_won(board: &Board, target: u32) -> bool {
    board.tiles().any(|(_, t)| t.value == target)
}

/// True if no direction changes the board.
///
/// Each direction is tried on its own working copy; `board` is not mutated.
/// An empty board has nothing to move and counts as over.
pub fn is_game_over(board: &Board) -> bool {
    Move::ALL.iter().all(|&dir| !can_move(board, dir))
}

/// Directions that would change `board`.
pub fn legal_moves(board: &Board) -> Vec<Move> {
    Move::ALL
        .into_iter()
        .filter(|&dir| can_move(board, dir))
        .collect()
}

/// Win/loss checks bound to a target tile value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StatusEvaluator {
    target: u32,
}

impl Default for StatusEvaluator {
    fn default() -> Self {
        Self::new(DEFAULT_TARGET)
    }
}

impl StatusEvaluator {
    pub fn new(target: u32) -> Self {
        Self { target }
    }

    pub fn target(&self) -> u32 {
        self.target
    }

    pub fn has_won(&self, board: &Board) -> bool {
        has_won(board, self.target)
    }

    pub fn is_game_over(&self, board: &Board) -> bool {
        is_game_over(board)
    }

    /// Stateless verdict for `board`. A stuck board is lost even when it
    /// holds the target tile, since no move can follow.
    pub fn evaluate(&self, board: &Board) -> GameStatus {
        if self.is_game_over(board) {
            GameStatus::Lost
        } else if self.has_won(board) {
            GameStatus::Won
        } else {
            GameStatus::InProgress
        }
    }
}

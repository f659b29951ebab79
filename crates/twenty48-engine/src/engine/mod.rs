//! Engine module: the 4x4 board, the shift resolver, tile spawning, scoring
//! and win/loss evaluation.
//!
//! - `Board` is a copyable grid of identified tiles.
//! - `shift` relaxes a board in one direction and reports merges and points.
//! - Spawning, scoring and status checks are small free functions/structs
//!   over a `Board`; none of them keep hidden state.

pub mod board;
mod resolver;
mod spawn;
mod score;
mod status;

pub use board::{Board, Grid, Move, Position, SIZE, Tile, TileId};
pub use score::ScoreTracker;
pub use resolver::{MAX_SWEEPS, RemovedTile, ShiftOutcome, can_move, shift};
pub use spawn::{SpawnedTile, spawn_tile};
pub use status::{
    DEFAULT_TARGET, GameStatus, StatusEvaluator, has_won, is_game_over, legal_moves,
};

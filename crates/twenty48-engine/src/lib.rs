//! twenty48-engine: the game-state engine of a 4x4 sliding-tile (2048) puzzle
//!
//! This crate provides:
//! - A copyable `Board` of identified tiles with grid conversion for save files
//! - The shift resolver (`engine::shift`) reporting merges, removed tiles and points
//! - Tile spawning, score tracking and win/loss evaluation
//! - `GameSession`, a caller-owned game in progress, and `SavedGame` for persistence
//!
//! Quick start:
//! ```
//! use twenty48_engine::{GameConfig, GameSession};
//! use twenty48_engine::engine::legal_moves;
//! use rand::{rngs::StdRng, SeedableRng};
//!
//! // Deterministic game with a seeded RNG
//! let mut game = GameSession::new(&GameConfig::default(), StdRng::seed_from_u64(42));
//! let dir = legal_moves(game.board())[0];
//! let report = game.apply_move(dir).expect("a legal move is accepted");
//! assert!(report.outcome.any_moved);
//! assert_eq!(game.board().count_empty(), 13 + report.outcome.removed.len());
//! ```

pub mod config;
pub mod engine;
pub mod error;
pub mod persist;
pub mod session;

pub use config::GameConfig;
pub use error::{EngineError, Result};
pub use persist::SavedGame;
pub use session::{GameSession, TurnReport};

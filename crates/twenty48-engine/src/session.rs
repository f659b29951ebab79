//! One game in progress: the live board, the score counters and the win/loss
//! latches, owned by the caller. `apply_move` takes `&mut self`, so only one
//! shift can be in flight per session.

use log::{debug, info};
use rand::Rng;

use crate::config::GameConfig;
use crate::engine::{
    Board, GameStatus, Move, ScoreTracker, ShiftOutcome, SpawnedTile, StatusEvaluator, shift,
    spawn_tile,
};
use crate::error::Result;
use crate::persist::SavedGame;

/// What one accepted move did.
#[derive(Debug, Clone)]
pub struct TurnReport {
    pub direction: Move,
    pub outcome: ShiftOutcome,
    pub spawned: Option<SpawnedTile>,
    pub score: u64,
    /// True only on the turn the target tile first appeared.
    pub newly_won: bool,
    pub game_over: bool,
}

pub struct GameSession<R: Rng> {
    board: Board,
    scores: ScoreTracker,
    evaluator: StatusEvaluator,
    start_tiles: usize,
    won: bool,
    keep_playing: bool,
    over: bool,
    moves: u64,
    rng: R,
}

impl<R: Rng> GameSession<R> {
    /// Start a game on an empty board seeded with `config.start_tiles` tiles.
    pub fn new(config: &GameConfig, rng: R) -> Self {
        let mut session = Self {
            board: Board::EMPTY,
            scores: ScoreTracker::new(),
            evaluator: StatusEvaluator::new(config.target_tile),
            start_tiles: config.start_tiles,
            won: false,
            keep_playing: false,
            over: false,
            moves: 0,
            rng,
        };
        session.deal();
        session
    }

    /// Rehydrate a game from its saved grid and counters.
    pub fn from_saved(saved: &SavedGame, config: &GameConfig, rng: R) -> Result<Self> {
        let board = Board::from_grid(saved.grid)?;
        let evaluator = StatusEvaluator::new(config.target_tile);
        let won = saved.won || evaluator.has_won(&board);
        Ok(Self {
            over: evaluator.evaluate(&board) == GameStatus::Lost,
            board,
            scores: ScoreTracker::restore(saved.score, saved.best),
            evaluator,
            start_tiles: config.start_tiles,
            won,
            keep_playing: won && saved.keep_playing,
            moves: 0,
            rng,
        })
    }

    pub fn to_saved(&self) -> SavedGame {
        SavedGame {
            grid: self.board.to_grid(),
            score: self.scores.score(),
            best: self.scores.best(),
            won: self.won,
            keep_playing: self.keep_playing,
        }
    }

    /// Shift the board in `direction`.
    ///
    /// Returns `None` when the move is not accepted: the game is over, a win
    /// is waiting for [`keep_playing`](Self::keep_playing), or no tile would
    /// move. Otherwise the shifted board replaces the live one, a tile is
    /// spawned, points are added, and win/loss are evaluated against the
    /// post-spawn board.
    pub fn apply_move(&mut self, direction: Move) -> Option<TurnReport> {
        if self.is_terminated() {
            return None;
        }
        let outcome = shift(&self.board, direction);
        if !outcome.any_moved {
            debug!("{direction:?}: nothing moved");
            return None;
        }

        self.board = outcome.board;
        let spawned = spawn_tile(&mut self.board, &mut self.rng);
        self.scores.add_points(outcome.points_gained);
        self.moves += 1;

        let newly_won = !self.won && self.evaluator.has_won(&self.board);
        if newly_won {
            self.won = true;
            info!(
                "reached {} after {} moves (score {})",
                self.evaluator.target(),
                self.moves,
                self.scores.score()
            );
        }
        self.over = self.evaluator.evaluate(&self.board) == GameStatus::Lost;
        if self.over {
            info!(
                "game over after {} moves: score {}, highest tile {}",
                self.moves,
                self.scores.score(),
                self.board.highest_tile()
            );
        }
        debug!(
            "{direction:?}: +{} points in {} sweeps, {} merged, spawned {:?}",
            outcome.points_gained,
            outcome.sweeps,
            outcome.merged.len(),
            spawned.map(|s| (s.position, s.tile.value))
        );

        Some(TurnReport {
            direction,
            outcome,
            spawned,
            score: self.scores.score(),
            newly_won,
            game_over: self.over,
        })
    }

    /// Continue past a win. No effect before the target is reached.
    pub fn keep_playing(&mut self) {
        if self.won {
            self.keep_playing = true;
        }
    }

    /// Throw the current game away and deal a new one. The best score stays.
    pub fn restart(&mut self) {
        self.board = Board::EMPTY;
        self.scores.reset();
        self.won = false;
        self.keep_playing = false;
        self.over = false;
        self.moves = 0;
        self.deal();
        info!("new game, best score {}", self.scores.best());
    }

    fn deal(&mut self) {
        for _ in 0..self.start_tiles {
            spawn_tile(&mut self.board, &mut self.rng);
        }
        self.over = self.evaluator.evaluate(&self.board) == GameStatus::Lost;
    }

    /// Over, or won and not yet continued.
    pub fn is_terminated(&self) -> bool {
        self.over || (self.won && !self.keep_playing)
    }

    pub fn status(&self) -> GameStatus {
        if self.over {
            GameStatus::Lost
        } else if self.won && !self.keep_playing {
            GameStatus::Won
        } else {
            GameStatus::InProgress
        }
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn scores(&self) -> &ScoreTracker {
        &self.scores
    }

    pub fn has_won(&self) -> bool {
        self.won
    }

    /// Accepted moves since the game started (not persisted).
    pub fn moves(&self) -> u64 {
        self.moves
    }
}

use log::info;
use rand::SeedableRng;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use twenty48_engine::engine::{GameStatus, legal_moves};
use twenty48_engine::{GameConfig, GameSession};

/// Outcome of one unattended game.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameResult {
    pub game_id: u32,
    pub seed: u64,
    pub steps: u64,
    pub score: u64,
    pub highest_tile: u32,
    pub won: bool,
}

/// Drive a single board to completion with uniformly random legal moves.
/// Wins are acknowledged and play continues until the board locks up.
pub fn run_game(game_id: u32, seed: u64, config: &GameConfig) -> GameResult {
    let mut game = GameSession::new(config, StdRng::seed_from_u64(seed));
    let mut picker = StdRng::seed_from_u64(seed.rotate_left(32));

    loop {
        if game.status() == GameStatus::Won {
            game.keep_playing();
        }
        if game.is_terminated() {
            break;
        }
        let legal = legal_moves(game.board());
        let Some(&dir) = legal.choose(&mut picker) else {
            break;
        };
        game.apply_move(dir);
    }

    GameResult {
        game_id,
        seed,
        steps: game.moves(),
        score: game.scores().score(),
        highest_tile: game.board().highest_tile(),
        won: game.has_won(),
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Summary {
    pub games: u32,
    pub wins: u32,
    pub mean_score: f64,
    pub best_score: u64,
    pub highest_tile: u32,
}

/// Play `games` games on consecutive seeds starting at `base_seed`.
pub fn run(games: u32, base_seed: u64, config: &GameConfig) -> (Vec<GameResult>, Summary) {
    let results: Vec<GameResult> = (0..games)
        .map(|game_id| {
            let r = run_game(game_id, base_seed.wrapping_add(u64::from(game_id)), config);
            info!(
                "game {} (seed {}): {} steps, score {}, highest tile {}",
                r.game_id, r.seed, r.steps, r.score, r.highest_tile
            );
            r
        })
        .collect();
    let summary = summarize(&results);
    (results, summary)
}

pub fn summarize(results: &[GameResult]) -> Summary {
    if results.is_empty() {
        return Summary::default();
    }
    let total: u64 = results.iter().map(|r| r.score).sum();
    Summary {
        games: results.len() as u32,
        wins: results.iter().filter(|r| r.won).count() as u32,
        mean_score: total as f64 / results.len() as f64,
        best_score: results.iter().map(|r| r.score).max().unwrap_or(0),
        highest_tile: results.iter().map(|r| r.highest_tile).max().unwrap_or(0),
    }
}

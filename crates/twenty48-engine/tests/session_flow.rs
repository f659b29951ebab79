use rand::seq::SliceRandom;
use rand::{SeedableRng, rngs::StdRng};
use tempfile::tempdir;
use twenty48_engine::engine::{GameStatus, is_game_over, legal_moves};
use twenty48_engine::{GameConfig, GameSession, SavedGame};

#[test]
fn random_game_runs_to_completion() {
    let config = GameConfig::default();
    let mut game = GameSession::new(&config, StdRng::seed_from_u64(20260228));
    let mut picker = StdRng::seed_from_u64(1);
    let mut points = 0u64;

    for _ in 0..100_000 {
        if game.is_terminated() {
            if game.status() == GameStatus::Won {
                game.keep_playing();
                continue;
            }
            break;
        }
        let legal = legal_moves(game.board());
        assert!(!legal.is_empty(), "live game must have a legal move");
        let dir = *legal.choose(&mut picker).unwrap();
        let report = game.apply_move(dir).expect("legal move is accepted");
        points += report.outcome.points_gained;
        assert_eq!(report.score, points);
        assert!(report.spawned.is_some());
        assert!(game.scores().best() >= game.scores().score());
    }

    assert_eq!(game.status(), GameStatus::Lost);
    assert!(is_game_over(game.board()));
    assert_eq!(game.board().count_empty(), 0);
    assert!(game.moves() > 10);
    assert!(game.apply_move(twenty48_engine::engine::Move::Left).is_none());
}

#[test]
fn saved_game_resumes_where_it_left_off() {
    let td = tempdir().unwrap();
    let path = td.path().join("state.json");
    let config = GameConfig::default();

    let mut game = GameSession::new(&config, StdRng::seed_from_u64(8));
    let mut picker = StdRng::seed_from_u64(9);
    for _ in 0..20 {
        let legal = legal_moves(game.board());
        if legal.is_empty() {
            break;
        }
        game.apply_move(*legal.choose(&mut picker).unwrap());
    }
    game.to_saved().save(&path).unwrap();

    let saved = SavedGame::load(&path).unwrap().expect("save file exists");
    let resumed = GameSession::from_saved(&saved, &config, StdRng::seed_from_u64(10)).unwrap();
    assert_eq!(resumed.board().to_grid(), game.board().to_grid());
    assert_eq!(resumed.scores().score(), game.scores().score());
    assert_eq!(resumed.scores().best(), game.scores().best());
    assert_eq!(resumed.status(), game.status());
}

#[test]
fn best_score_survives_restart_and_reload() {
    let td = tempdir().unwrap();
    let path = td.path().join("state.json");
    let config = GameConfig::default();
    let saved = SavedGame {
        grid: [[2, 2, 0, 0], [0; 4], [0; 4], [0; 4]],
        score: 10,
        best: 10,
        won: false,
        keep_playing: false,
    };
    let mut game = GameSession::from_saved(&saved, &config, StdRng::seed_from_u64(4)).unwrap();
    game.apply_move(twenty48_engine::engine::Move::Left).unwrap();
    assert_eq!(game.scores().score(), 14);
    game.restart();
    game.to_saved().save(&path).unwrap();

    let reloaded = SavedGame::load(&path).unwrap().unwrap();
    assert_eq!(reloaded.score, 0);
    assert_eq!(reloaded.best, 14);
}

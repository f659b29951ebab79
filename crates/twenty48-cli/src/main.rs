mod autoplay;
mod input;

use std::io::{self, BufRead, Write};
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use env_logger::Env;
use log::{info, warn};
use rand::SeedableRng;
use rand::rngs::StdRng;
use twenty48_engine::engine::GameStatus;
use twenty48_engine::{GameConfig, GameSession, SavedGame};

use input::Action;

#[derive(Debug, Parser)]
#[command(author, version, about = "Play 2048 in the terminal")]
struct Cli {
    /// Path to a TOML configuration file
    #[arg(long, value_name = "FILE", value_parser = clap::value_parser!(PathBuf))]
    config: Option<PathBuf>,

    /// Save file to resume from and write after every move (overrides the config)
    #[arg(long, value_name = "FILE")]
    state: Option<PathBuf>,

    /// RNG seed; fresh entropy when omitted
    #[arg(long, value_name = "N")]
    seed: Option<u64>,

    /// Log filter, e.g. "info", "debug"
    #[arg(long, default_value = "warn")]
    log: String,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Play interactively: w/a/s/d to shift, n new game, c continue after a win, q quit
    Play,
    /// Play random legal moves unattended and report the results
    Autoplay {
        /// Number of games to play
        #[arg(long, default_value_t = 10)]
        games: u32,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    env_logger::Builder::from_env(Env::default().default_filter_or(cli.log.as_str())).init();

    let mut config = match &cli.config {
        Some(path) => GameConfig::from_toml(path)
            .with_context(|| format!("failed to load config {}", path.display()))?,
        None => GameConfig::default(),
    };
    if cli.state.is_some() {
        config.state_file = cli.state.clone();
    }

    match cli.command.unwrap_or(Command::Play) {
        Command::Play => {
            let rng = match cli.seed {
                Some(seed) => StdRng::seed_from_u64(seed),
                None => StdRng::from_entropy(),
            };
            play(&config, rng)
        }
        Command::Autoplay { games } => {
            let base_seed = cli.seed.unwrap_or_else(rand::random);
            let (_, summary) = autoplay::run(games, base_seed, &config);
            println!(
                "{} games: {} won, mean score {:.1}, best score {}, highest tile {}",
                summary.games,
                summary.wins,
                summary.mean_score,
                summary.best_score,
                summary.highest_tile
            );
            Ok(())
        }
    }
}

fn open_session(config: &GameConfig, rng: StdRng) -> Result<GameSession<StdRng>> {
    let Some(path) = &config.state_file else {
        return Ok(GameSession::new(config, rng));
    };
    match SavedGame::load(path).with_context(|| format!("failed to read {}", path.display()))? {
        Some(saved) => {
            info!("resuming game from {}", path.display());
            GameSession::from_saved(&saved, config, rng)
                .with_context(|| format!("corrupt save file {}", path.display()))
        }
        None => Ok(GameSession::new(config, rng)),
    }
}

fn save(game: &GameSession<StdRng>, path: &Path) -> Result<()> {
    game.to_saved()
        .save(path)
        .with_context(|| format!("failed to write {}", path.display()))
}

fn play(config: &GameConfig, rng: StdRng) -> Result<()> {
    let mut game = open_session(config, rng)?;
    let mut out = io::stdout().lock();
    render(&mut out, &game)?;

    for line in io::stdin().lock().lines() {
        let line = line.context("failed to read stdin")?;
        if line.trim().is_empty() {
            continue;
        }
        match input::parse(&line) {
            None => {
                writeln!(out, "unknown command {:?} (w/a/s/d, n, c, q)", line.trim())?;
                continue;
            }
            Some(Action::Quit) => break,
            Some(Action::NewGame) => game.restart(),
            Some(Action::KeepPlaying) => game.keep_playing(),
            Some(Action::Shift(dir)) => {
                if game.apply_move(dir).is_none() && !game.is_terminated() {
                    writeln!(out, "nothing moves {dir:?}")?;
                    continue;
                }
            }
        }
        if let Some(path) = &config.state_file {
            if let Err(err) = save(&game, path) {
                warn!("{err:#}");
            }
        }
        render(&mut out, &game)?;
    }
    Ok(())
}

fn render<W: Write>(out: &mut W, game: &GameSession<StdRng>) -> io::Result<()> {
    write!(out, "{}", game.board())?;
    writeln!(
        out,
        "score {}  best {}",
        game.scores().score(),
        game.scores().best()
    )?;
    match game.status() {
        GameStatus::Won => writeln!(out, "You win! c to keep playing, n for a new game")?,
        GameStatus::Lost => writeln!(out, "Game over. n for a new game")?,
        GameStatus::InProgress => {}
    }
    out.flush()
}

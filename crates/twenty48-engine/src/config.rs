use std::path::{Path, PathBuf};

use crate::engine::{DEFAULT_TARGET, SIZE};
use crate::error::{EngineError, Result};

#[derive(Clone, Debug, PartialEq, serde::Deserialize)]
pub struct GameConfig {
    /// Tile value that counts as a win.
    #[serde(default = "defaults::target_tile")]
    pub target_tile: u32,

    /// Tiles spawned on an empty board when a game starts.
    #[serde(default = "defaults::start_tiles")]
    pub start_tiles: usize,

    /// Where the driver keeps its save file. `None` disables saving.
    #[serde(default)]
    pub state_file: Option<PathBuf>,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            target_tile: defaults::target_tile(),
            start_tiles: defaults::start_tiles(),
            state_file: None,
        }
    }
}

impl GameConfig {
    pub fn from_toml<P: AsRef<Path>>(path: P) -> Result<Self> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_toml_str(&contents)
    }

    pub fn from_toml_str(contents: &str) -> Result<Self> {
        let cfg: Self = toml::from_str(contents)?;
        cfg.validate()?;
        Ok(cfg)
    }

    pub fn validate(&self) -> Result<()> {
        if self.target_tile < 4 || !self.target_tile.is_power_of_two() {
            return Err(EngineError::Config(format!(
                "target_tile must be a power of two >= 4, got {}",
                self.target_tile
            )));
        }
        if self.start_tiles == 0 || self.start_tiles > SIZE * SIZE {
            return Err(EngineError::Config(format!(
                "start_tiles must be between 1 and {}, got {}",
                SIZE * SIZE,
                self.start_tiles
            )));
        }
        Ok(())
    }
}

mod defaults {
    pub fn target_tile() -> u32 { super::DEFAULT_TARGET }
    pub fn start_tiles() -> usize { 2 }
}

//! Save/load boundary: a board as a plain value grid plus the two score
//! counters, stored as JSON.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::engine::Grid;
use crate::error::Result;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SavedGame {
    pub grid: Grid,
    pub score: u64,
    pub best: u64,
    #[serde(default)]
    pub won: bool,
    #[serde(default)]
    pub keep_playing: bool,
}

impl SavedGame {
    /// Read a save file. A missing file is `Ok(None)`.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Option<Self>> {
        match fs::read_to_string(path.as_ref()) {
            Ok(contents) => Ok(Some(serde_json::from_str(&contents)?)),
            Err(err) if err.kind() == io::ErrorKind::NotFound => Ok(None),
            Err(err) => Err(err.into()),
        }
    }

    /// Write the save file, replacing any previous one in a single rename.
    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let path = path.as_ref();
        let tmp = tmp_path(path);
        fs::write(&tmp, serde_json::to_vec_pretty(self)?)?;
        fs::rename(&tmp, path)?;
        Ok(())
    }
}

fn tmp_path(path: &Path) -> PathBuf {
    let mut name = path.file_name().unwrap_or_default().to_os_string();
    name.push(".tmp");
    path.with_file_name(name)
}

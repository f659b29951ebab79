use std::io;

#[derive(thiserror::Error, Debug)]
pub enum EngineError {
    #[error("invalid shift vector ({dy}, {dx}): expected a unit axis vector")]
    InvalidDirection { dy: i32, dx: i32 },
    #[error("invalid tile value {value} at ({row}, {col}): expected 0 or a power of two >= 2")]
    InvalidTileValue { row: usize, col: usize, value: u32 },
    #[error("invalid config: {0}")]
    Config(String),
    #[error("io error: {0}")]
    Io(#[from] io::Error),
    #[error("malformed save file: {0}")]
    Json(#[from] serde_json::Error),
    #[error("malformed config file: {0}")]
    Toml(#[from] toml::de::Error),
}

pub type Result<T> = std::result::Result<T, EngineError>;

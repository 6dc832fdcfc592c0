use std::io;
use std::path::PathBuf;

use log::SetLoggerError;
use thiserror::Error;

use crate::snake::Position;

/// Reasons a board configuration is refused at startup.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("cell size must be non-zero")]
    ZeroCellSize,
    #[error("board {dimension} {value} is not a non-zero multiple of cell size {cell_size}")]
    NotCellMultiple {
        dimension: &'static str,
        value: u32,
        cell_size: u32,
    },
    #[error("board {dimension} {value} does not fit signed 32-bit coordinates")]
    BoardTooLarge { dimension: &'static str, value: u32 },
    #[error("tick interval must be non-zero")]
    ZeroTickInterval,
    #[error("start position ({}, {}) lies outside the {width}x{height} board", .start.x, .start.y)]
    StartOutOfBounds {
        start: Position,
        width: u32,
        height: u32,
    },
    #[error("start position ({}, {}) is not aligned to cell size {cell_size}", .start.x, .start.y)]
    StartMisaligned { start: Position, cell_size: u32 },
    #[error("failed to read config file {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("failed to parse config file {}: {source}", .path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

/// Top-level failure of the game binary.
#[derive(Debug, Error)]
pub enum AppError {
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error("terminal I/O failed: {0}")]
    Io(#[from] io::Error),
    #[error("failed to install logger: {0}")]
    Logger(#[from] SetLoggerError),
}

use std::fs::{self, File};
use std::path::{Path, PathBuf};

use simplelog::{ConfigBuilder, LevelFilter, WriteLogger};

use crate::error::AppError;

const APP_DIR_NAME: &str = "grid-snake";
const LOG_FILE_NAME: &str = "grid-snake.log";

/// Returns the platform-correct default log file path.
#[must_use]
pub fn default_log_path() -> PathBuf {
    let mut base = dirs::data_local_dir().unwrap_or_else(|| PathBuf::from("."));
    base.push(APP_DIR_NAME);
    base.push(LOG_FILE_NAME);
    base
}

/// Parses a level name such as `info` or `TRACE`.
pub fn parse_level(raw: &str) -> Result<LevelFilter, String> {
    raw.parse::<LevelFilter>()
        .map_err(|_| format!("unknown log level `{raw}` (off, error, warn, info, debug, trace)"))
}

/// Routes the `log` facade into `path`; the terminal belongs to the game.
pub fn init(path: &Path, level: LevelFilter) -> Result<(), AppError> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }

    let file = File::create(path)?;
    let config = ConfigBuilder::new()
        .set_target_level(LevelFilter::Off)
        .set_thread_level(LevelFilter::Off)
        .build();

    WriteLogger::init(level, config, file)?;
    Ok(())
}

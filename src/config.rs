use std::fs;
use std::path::Path;
use std::time::Duration;

use ratatui::style::Color;
use serde::{Deserialize, Serialize};

use crate::error::ConfigError;
use crate::snake::Position;

/// Default board width in pixels.
pub const DEFAULT_BOARD_WIDTH: u32 = 400;

/// Default board height in pixels.
pub const DEFAULT_BOARD_HEIGHT: u32 = 400;

/// Default edge length of one grid cell in pixels.
pub const DEFAULT_CELL_SIZE: u32 = 20;

/// Default delay between two simulation ticks.
pub const DEFAULT_TICK_INTERVAL_MS: u64 = 150;

/// Head position of a freshly started snake.
pub const DEFAULT_START: Position = Position { x: 100, y: 100 };

/// Board geometry and timing for one game.
///
/// Coordinates are expressed in pixels; every valid position is a multiple
/// of `cell_size` on both axes.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BoardConfig {
    pub width: u32,
    pub height: u32,
    pub cell_size: u32,
    pub tick_interval_ms: u64,
    pub start: Position,
}

impl Default for BoardConfig {
    fn default() -> Self {
        Self {
            width: DEFAULT_BOARD_WIDTH,
            height: DEFAULT_BOARD_HEIGHT,
            cell_size: DEFAULT_CELL_SIZE,
            tick_interval_ms: DEFAULT_TICK_INTERVAL_MS,
            start: DEFAULT_START,
        }
    }
}

impl BoardConfig {
    /// Reads a (possibly partial) JSON config; missing fields keep their defaults.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let raw = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;

        serde_json::from_str(&raw).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Checks the geometry invariants the engine relies on.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.cell_size == 0 {
            return Err(ConfigError::ZeroCellSize);
        }

        for (dimension, value) in [("width", self.width), ("height", self.height)] {
            if value == 0 || value % self.cell_size != 0 {
                return Err(ConfigError::NotCellMultiple {
                    dimension,
                    value,
                    cell_size: self.cell_size,
                });
            }
            if i32::try_from(value).is_err() {
                return Err(ConfigError::BoardTooLarge { dimension, value });
            }
        }

        if self.tick_interval_ms == 0 {
            return Err(ConfigError::ZeroTickInterval);
        }

        if !self.start.is_within(self) {
            return Err(ConfigError::StartOutOfBounds {
                start: self.start,
                width: self.width,
                height: self.height,
            });
        }

        if !self.start.is_aligned(self.cell_size) {
            return Err(ConfigError::StartMisaligned {
                start: self.start,
                cell_size: self.cell_size,
            });
        }

        Ok(())
    }

    /// Number of cells along the x axis.
    #[must_use]
    pub fn columns(&self) -> u32 {
        self.width / self.cell_size
    }

    /// Number of cells along the y axis.
    #[must_use]
    pub fn rows(&self) -> u32 {
        self.height / self.cell_size
    }

    #[must_use]
    pub fn tick_interval(&self) -> Duration {
        Duration::from_millis(self.tick_interval_ms)
    }
}

/// Fill color for snake segments.
pub const SNAKE_COLOR: Color = Color::Green;

/// Marker color for food.
pub const FOOD_COLOR: Color = Color::Red;

/// Border color of the play area.
pub const BORDER_COLOR: Color = Color::DarkGray;

/// Terminal columns used to draw one grid cell, keeping cells roughly square.
pub const TERMINAL_COLUMNS_PER_CELL: u16 = 2;

/// Glyph pair drawn for every snake segment.
pub const GLYPH_SNAKE_SEGMENT: &str = "██";

/// Glyph pair drawn for the food cell.
pub const GLYPH_FOOD: &str = "()";

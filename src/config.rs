use crate::consts;
use crate::game::Grid;
use ratatui::style::Color;
use serde::Deserialize;
use std::path::{Path, PathBuf};
use std::time::Duration;
use thiserror::Error;

/// Program configuration read from a configuration file
#[derive(Clone, Copy, Deserialize, Debug, Default, Eq, PartialEq)]
pub(crate) struct Config {
    /// Settings for the game itself
    #[serde(default)]
    pub(crate) game: GameConfig,
}

impl Config {
    /// Return the default configuration file path
    pub(crate) fn default_path() -> Result<PathBuf, ConfigError> {
        dirs::config_local_dir()
            .map(|p| p.join("gridsnake").join("config.toml"))
            .ok_or(ConfigError::NoPath)
    }

    /// Read configuration from a file on disk.  If the file does not exist and
    /// `allow_missing` is true, a default `Config` value is returned.
    ///
    /// # Errors
    ///
    /// Returns `Err` if the file could not be read or if the file's contents
    /// could not be deserialized or failed validation.
    pub(crate) fn load(path: &Path, allow_missing: bool) -> Result<Config, ConfigError> {
        let content = match fs_err::read_to_string(path) {
            Ok(content) => content,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound && allow_missing => {
                return Ok(Config::default())
            }
            Err(e) => return Err(ConfigError::Read(e)),
        };
        toml::from_str(&content).map_err(Into::into)
    }
}

/// Validated gameplay settings
#[derive(Clone, Copy, Deserialize, Debug, Eq, PartialEq)]
#[serde(try_from = "RawGameConfig")]
pub(crate) struct GameConfig {
    pub(crate) grid: Grid,
    pub(crate) background: Color,
    pub(crate) snake_color: Color,
    pub(crate) food_color: Color,

    /// Length of the snake at the start of a game
    pub(crate) initial_length: u16,

    pub(crate) ticks_per_second: u16,

    /// Whether an accepted turn moves the snake one extra cell at once, on
    /// top of the regular move for the tick
    pub(crate) immediate_turn: bool,
}

impl GameConfig {
    /// Time between ticks: `10000 / ticks_per_second` milliseconds
    pub(crate) fn tick_period(&self) -> Duration {
        Duration::from_micros(10_000_000 / u64::from(self.ticks_per_second.max(1)))
    }
}

impl Default for GameConfig {
    fn default() -> GameConfig {
        GameConfig {
            grid: Grid {
                width: consts::GRID_WIDTH,
                height: consts::GRID_HEIGHT,
                cell_size: consts::CELL_SIZE,
            },
            background: consts::BACKGROUND_COLOR,
            snake_color: consts::SNAKE_COLOR,
            food_color: consts::FOOD_COLOR,
            initial_length: consts::INITIAL_SNAKE_LENGTH,
            ticks_per_second: consts::TICKS_PER_SECOND,
            immediate_turn: true,
        }
    }
}

#[derive(Clone, Deserialize, Debug, Eq, PartialEq)]
#[serde(default, rename_all = "kebab-case")]
struct RawGameConfig {
    grid_width: u16,
    grid_height: u16,
    cell_size: u16,
    background: Option<String>,
    snake_color: Option<String>,
    food_color: Option<String>,
    initial_length: u16,
    ticks_per_second: u16,
    immediate_turn: bool,
}

impl Default for RawGameConfig {
    fn default() -> RawGameConfig {
        RawGameConfig {
            grid_width: consts::GRID_WIDTH,
            grid_height: consts::GRID_HEIGHT,
            cell_size: consts::CELL_SIZE,
            background: None,
            snake_color: None,
            food_color: None,
            initial_length: consts::INITIAL_SNAKE_LENGTH,
            ticks_per_second: consts::TICKS_PER_SECOND,
            immediate_turn: true,
        }
    }
}

impl TryFrom<RawGameConfig> for GameConfig {
    type Error = InvalidConfig;

    fn try_from(value: RawGameConfig) -> Result<GameConfig, InvalidConfig> {
        let grid = Grid {
            width: value.grid_width,
            height: value.grid_height,
            cell_size: value.cell_size,
        };
        if grid.width == 0 || grid.height == 0 {
            return Err(InvalidConfig::EmptyGrid {
                width: grid.width,
                height: grid.height,
            });
        }
        if grid.cell_size == 0 {
            return Err(InvalidConfig::ZeroCellSize);
        }
        if grid.pixel_width() > consts::MAX_PIXEL_EXTENT
            || grid.pixel_height() > consts::MAX_PIXEL_EXTENT
        {
            return Err(InvalidConfig::TooLarge {
                width: grid.pixel_width(),
                height: grid.pixel_height(),
            });
        }
        if value.initial_length == 0 || value.initial_length > grid.width {
            return Err(InvalidConfig::InitialLength {
                length: value.initial_length,
                width: grid.width,
            });
        }
        if value.ticks_per_second == 0 || value.ticks_per_second > consts::MAX_TICKS_PER_SECOND {
            return Err(InvalidConfig::TickRate(value.ticks_per_second));
        }
        Ok(GameConfig {
            grid,
            background: parse_color("background", value.background, consts::BACKGROUND_COLOR)?,
            snake_color: parse_color("snake-color", value.snake_color, consts::SNAKE_COLOR)?,
            food_color: parse_color("food-color", value.food_color, consts::FOOD_COLOR)?,
            initial_length: value.initial_length,
            ticks_per_second: value.ticks_per_second,
            immediate_turn: value.immediate_turn,
        })
    }
}

fn parse_color(
    key: &'static str,
    value: Option<String>,
    default: Color,
) -> Result<Color, InvalidConfig> {
    match value {
        Some(s) => s
            .parse::<Color>()
            .map_err(|_| InvalidConfig::Color { key, value: s }),
        None => Ok(default),
    }
}

#[derive(Clone, Debug, Eq, Error, PartialEq)]
pub(crate) enum InvalidConfig {
    #[error("grid must be at least 1×1 cells, got {width}×{height}")]
    EmptyGrid { width: u16, height: u16 },
    #[error("cell size must be at least 1 pixel")]
    ZeroCellSize,
    #[error("grid is {width}×{height} pixels; neither side may exceed 4096 pixels")]
    TooLarge { width: u32, height: u32 },
    #[error("initial length must be between 1 and the grid width ({width}), got {length}")]
    InitialLength { length: u16, width: u16 },
    #[error("ticks per second must be between 1 and 10000, got {0}")]
    TickRate(u16),
    #[error("invalid {key} value {value:?}")]
    Color { key: &'static str, value: String },
}

#[derive(Debug, Error)]
pub(crate) enum ConfigError {
    #[error("failed to determine path to local configuration directory")]
    NoPath,
    #[error("failed to read configuration file")]
    Read(#[from] std::io::Error),
    #[error("failed to parse configuration file")]
    Parse(#[from] toml::de::Error),
}

//! Assorted constants & hard-coded configuration
use ratatui::style::{Color, Modifier, Style};

/// Default grid width in cells
pub(crate) const GRID_WIDTH: u16 = 36;

/// Default grid height in cells
pub(crate) const GRID_HEIGHT: u16 = 18;

/// Default edge length of a grid cell in pixels
pub(crate) const CELL_SIZE: u16 = 10;

/// Default color of empty space
pub(crate) const BACKGROUND_COLOR: Color = Color::Rgb(0xF1, 0xF1, 0xF1);

/// Default color of the snake
pub(crate) const SNAKE_COLOR: Color = Color::Rgb(0x00, 0x00, 0x00);

/// Default color of the food
pub(crate) const FOOD_COLOR: Color = Color::Rgb(0xFF, 0x00, 0x00);

/// Default snake length before any food has been eaten
pub(crate) const INITIAL_SNAKE_LENGTH: u16 = 2;

/// Default tick rate.  The tick period is `10000 / TICKS_PER_SECOND`
/// milliseconds.
pub(crate) const TICKS_PER_SECOND: u16 = 100;

/// Largest accepted tick rate (a 1 ms tick period)
pub(crate) const MAX_TICKS_PER_SECOND: u16 = 10_000;

/// Largest accepted grid extent along either axis, in pixels
pub(crate) const MAX_PIXEL_EXTENT: u32 = 4096;

/// Random picks tried before falling back to scanning every free cell
pub(crate) const FOOD_PLACEMENT_ATTEMPTS: usize = 64;

/// Width in pixels of the background margin drawn around each snake cell
pub(crate) const SNAKE_BORDER: u16 = 1;

/// Terminal columns used to show one grid cell, so that cells look roughly
/// square
pub(crate) const CELL_COLUMNS: u16 = 2;

/// Minimum width of the area the game screen is drawn in, so that the score
/// and game over lines always fit
pub(crate) const MIN_DISPLAY_WIDTH: u16 = 20;

/// Style for key codes shown in the interface
pub(crate) const KEY_STYLE: Style = Style::new().fg(Color::Yellow);

/// Style for the score bar at the top of the game screen
pub(crate) const SCORE_BAR_STYLE: Style = Style::new().add_modifier(Modifier::REVERSED);

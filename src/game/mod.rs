mod cell;
mod direction;
mod food;
mod grid;
mod snake;
pub(crate) use self::direction::Direction;
use self::food::Food;
pub(crate) use self::grid::{Grid, Point};
use self::snake::{Snake, Step, Turn};
use crate::config::GameConfig;
use crate::consts;
use crate::score::ScoreSink;
use crate::surface::Surface;
use log::{debug, info, warn};
use std::fmt;
use std::time::Duration;

/// A single game session, from the first tick until the snake crashes.
///
/// The game paints onto a [`Surface`] and reports score changes to a
/// [`ScoreSink`]; both are owned by the caller and lent to each call.
#[derive(Clone, Debug, Eq, PartialEq)]
pub(crate) struct Game<R = rand::rngs::ThreadRng> {
    rng: R,
    config: GameConfig,
    snake: Snake,
    food: Option<Food>,
    score: u32,
    /// Most recent direction key pressed; kept across ticks
    pending: Option<Direction>,
    state: GameState,
}

impl<R: rand::Rng> Game<R> {
    pub(crate) fn new(config: GameConfig, rng: R) -> Game<R> {
        Game {
            rng,
            snake: Snake::new(config.grid, config.initial_length, config.snake_color),
            config,
            food: None,
            score: 0,
            pending: None,
            state: GameState::Initializing,
        }
    }

    /// Clear the surface, reset the displayed score, place the first food,
    /// draw the snake, and start running.  Does nothing if the game has
    /// already been started.
    pub(crate) fn start<S: Surface, K: ScoreSink>(&mut self, surface: &mut S, scores: &mut K) {
        if self.state != GameState::Initializing {
            return;
        }
        let grid = self.config.grid;
        info!(
            "Starting game on {}×{} grid with {:?} tick period",
            grid.width,
            grid.height,
            self.tick_period()
        );
        surface.fill_region(
            0,
            0,
            grid.pixel_width(),
            grid.pixel_height(),
            self.config.background,
        );
        self.score = 0;
        scores.set_displayed_score(0);
        self.state = GameState::Running;
        self.create_food(surface);
        self.snake.draw(surface, self.config.background);
    }

    /// Run one tick: erase the snake, apply the last direction pressed, move,
    /// check for collisions, and redraw.  Does nothing unless the game is
    /// running.
    pub(crate) fn tick<S: Surface, K: ScoreSink>(&mut self, surface: &mut S, scores: &mut K) {
        if !self.is_running() {
            return;
        }
        let background = self.config.background;
        self.snake.remove(surface, background);
        if let Some(direction) = self.pending {
            let food = self.food_position();
            let turn = self
                .snake
                .change_direction(direction, food, self.config.immediate_turn);
            if let Turn::Stepped(step) = turn {
                self.after_step(step, surface, scores);
            }
        }
        // The turn step may have filled the board.
        if self.is_running() {
            let food = self.food_position();
            let step = self.snake.update(food);
            self.after_step(step, surface, scores);
        }
        debug_assert!(
            self.config.grid.is_aligned(self.snake.head()),
            "snake head should stay aligned to the grid"
        );
        self.check_collision();
        self.snake.draw(surface, background);
    }

    fn after_step<S: Surface, K: ScoreSink>(
        &mut self,
        step: Step,
        surface: &mut S,
        scores: &mut K,
    ) {
        if step == Step::Ate {
            self.score = self.score.saturating_add(1);
            scores.set_displayed_score(self.score);
            debug!("Food eaten; score is now {}", self.score);
            self.create_food(surface);
        }
    }

    /// Replace the food with a new piece on a free cell.  If no cell is free,
    /// the game stops.
    fn create_food<S: Surface>(&mut self, surface: &mut S) {
        let grid = self.config.grid;
        let pos = Food::place(
            &mut self.rng,
            grid,
            &self.snake,
            consts::FOOD_PLACEMENT_ATTEMPTS,
        )
        .or_else(|| {
            warn!(
                "No free cell found after {} random picks; scanning the grid",
                consts::FOOD_PLACEMENT_ATTEMPTS
            );
            Food::place_anywhere(&mut self.rng, grid, &self.snake)
        });
        let Some(pos) = pos else {
            self.food = None;
            self.stop(StopReason::BoardFull);
            return;
        };
        let food = Food::new(pos, grid.cell_size, self.config.food_color);
        if let Some(old) = self.food.replace(food) {
            old.erase(surface, self.config.background);
        }
        food.draw(surface, self.config.background);
    }
}

impl<R> Game<R> {
    /// Record a direction key press.  Only the latest press before a tick is
    /// acted upon.
    pub(crate) fn press(&mut self, direction: Direction) {
        self.pending = Some(direction);
    }

    /// Stop the game and return `true` if the head has left the grid or run
    /// into the rest of the body
    pub(crate) fn check_collision(&mut self) -> bool {
        let crashed =
            !self.config.grid.contains(self.snake.head()) || self.snake.bites_itself();
        if crashed {
            self.stop(StopReason::Collision);
        }
        crashed
    }

    fn stop(&mut self, reason: StopReason) {
        if self.is_running() {
            info!("Game over ({reason}) with a score of {}", self.score);
            self.state = GameState::Stopped(reason);
        }
    }

    fn food_position(&self) -> Option<Point> {
        self.food.as_ref().map(Food::position)
    }

    pub(crate) fn tick_period(&self) -> Duration {
        self.config.tick_period()
    }

    pub(crate) fn state(&self) -> GameState {
        self.state
    }

    pub(crate) fn is_running(&self) -> bool {
        self.state == GameState::Running
    }
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(crate) enum GameState {
    Initializing,
    Running,
    Stopped(StopReason),
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(crate) enum StopReason {
    /// The snake hit a wall or itself
    Collision,
    /// The snake fills the grid and there is nowhere left to put food
    BoardFull,
}

impl fmt::Display for StopReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StopReason::Collision => write!(f, "collision"),
            StopReason::BoardFull => write!(f, "board full"),
        }
    }
}

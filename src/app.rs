use crate::command::Command;
use crate::config::GameConfig;
use crate::consts;
use crate::game::{Direction, Game, GameState};
use crate::score::ScoreBoard;
use crate::surface::Framebuffer;
use crate::util::center_rect;
use crossterm::event::{poll, read, Event};
use ratatui::{
    backend::Backend,
    buffer::Buffer,
    layout::{Constraint, Layout, Rect, Size},
    text::{Line, Span},
    widgets::{Block, Widget},
    Terminal,
};
use std::io;
use std::time::{Duration, Instant};

/// The terminal front end: owns the game together with the surface it paints
/// on and the score bar, and drives the game in real time
#[derive(Clone, Debug)]
pub(crate) struct App<R = rand::rngs::ThreadRng> {
    game: Game<R>,
    canvas: Framebuffer,
    scores: ScoreBoard,
    next_tick: Option<Instant>,
    quitting: bool,
}

/// What the event loop waits for next
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
enum Wait {
    /// The tick deadline has passed
    Tick,
    /// Wait this long for a key press, then tick
    Until(Duration),
    /// The game is over; block until a key is pressed
    Input,
}

impl<R: rand::Rng> App<R> {
    pub(crate) fn new(config: GameConfig, rng: R) -> App<R> {
        let mut game = Game::new(config, rng);
        let mut canvas = Framebuffer::new(config.grid, config.background);
        let mut scores = ScoreBoard::default();
        game.start(&mut canvas, &mut scores);
        App {
            game,
            canvas,
            scores,
            next_tick: None,
            quitting: false,
        }
    }

    pub(crate) fn run<B: Backend>(mut self, mut terminal: Terminal<B>) -> io::Result<()> {
        while !self.quitting {
            terminal.draw(|frame| frame.render_widget(&self, frame.area()))?;
            self.process_input()?;
        }
        Ok(())
    }

    /// Wait for either a key press or the next tick, whichever comes first.
    /// Once the game has stopped, only key presses are waited for.
    fn process_input(&mut self) -> io::Result<()> {
        match self.schedule(Instant::now()) {
            Wait::Tick => self.tick(),
            Wait::Until(timeout) => {
                if poll(timeout)? {
                    self.handle_event(read()?);
                } else {
                    self.tick();
                }
            }
            Wait::Input => self.handle_event(read()?),
        }
        Ok(())
    }

    fn tick(&mut self) {
        self.game.tick(&mut self.canvas, &mut self.scores);
        self.next_tick = None;
    }
}

impl<R> App<R> {
    /// Decide what to wait for at time `now`, setting the next tick deadline
    /// one tick period away if there is none
    fn schedule(&mut self, now: Instant) -> Wait {
        if !self.game.is_running() {
            return Wait::Input;
        }
        let period = self.game.tick_period();
        let when = *self.next_tick.get_or_insert(now + period);
        let wait = when.saturating_duration_since(now);
        if wait.is_zero() {
            Wait::Tick
        } else {
            Wait::Until(wait)
        }
    }

    fn handle_event(&mut self, event: Event) {
        let Some(cmd) = event.as_key_press_event().and_then(Command::from_key_event) else {
            return;
        };
        match cmd {
            Command::Quit => self.quitting = true,
            Command::Up => self.game.press(Direction::Up),
            Command::Down => self.game.press(Direction::Down),
            Command::Left => self.game.press(Direction::Left),
            Command::Right => self.game.press(Direction::Right),
        }
    }
}

impl<R> Widget for &App<R> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let board = self.canvas.terminal_size();
        let block_size = Size {
            width: board.width.saturating_add(2),
            height: board.height.saturating_add(2),
        };
        let display = center_rect(
            area,
            Size {
                width: block_size.width.max(consts::MIN_DISPLAY_WIDTH),
                height: block_size.height.saturating_add(3),
            },
        );
        let [score_area, block_area, msg1_area, msg2_area] = Layout::vertical([
            Constraint::Length(1),
            Constraint::Fill(1),
            Constraint::Length(1),
            Constraint::Length(1),
        ])
        .areas(display);
        self.scores.render(score_area, buf);

        let block_area = center_rect(block_area, block_size);
        let block = Block::bordered();
        let board_area = block.inner(block_area);
        block.render(block_area, buf);
        self.canvas.render(board_area, buf);

        if matches!(self.game.state(), GameState::Stopped(_)) {
            Span::from(" — GAME OVER —").render(msg1_area, buf);
            Line::from_iter([
                Span::raw(" Quit ("),
                Span::styled("q", consts::KEY_STYLE),
                Span::raw(")"),
            ])
            .render(msg2_area, buf);
        }
    }
}

use crate::apple::{Apple, APPLE_BOUNDS};
use crate::error::GameError;
use crate::position::Position;
use crate::render::{Canvas, Render};
use crate::snake::{Snake, Direction::{self, *}};

use anyhow::Result;
use crossterm::event::KeyEvent;
use log::{debug, info, trace};
use rand::rngs::ThreadRng;
use rand::Rng;

pub const INITIAL_SNAKE_LENGTH: u32 = 5;
const SPAWN_POSITION: Position = Position::new(0, 0);
const INITIAL_DIRECTION: Direction = Right;

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum GameStatus {
    Running,
    GameOver,
}

/// One snake, one apple and the direction the next tick will take.
///
/// Key presses only ever touch `next_direction`; it is promoted to
/// `current_direction` at the start of each tick.
pub struct SnakeGame<R = ThreadRng> {
    snake: Snake,
    apple: Apple,
    current_direction: Direction,
    next_direction: Direction,
    rng: R,
}

impl SnakeGame<ThreadRng> {
    pub fn new() -> Self {
        SnakeGame::with_rng(rand::thread_rng())
    }
}

impl<R: Rng> SnakeGame<R> {
    pub fn with_rng(rng: R) -> Self {
        let snake = Snake::new(SPAWN_POSITION, INITIAL_SNAKE_LENGTH);
        SnakeGame::from_parts(snake, INITIAL_DIRECTION, rng)
    }

    pub fn from_parts(snake: Snake, direction: Direction, mut rng: R) -> Self {
        let apple = Apple::place(&mut rng, APPLE_BOUNDS);
        SnakeGame { snake, apple, current_direction: direction, next_direction: direction, rng }
    }

    /// Buffers an arrow key for the next tick. Later presses overwrite earlier
    /// ones; reversing straight into the snake's own neck is dropped.
    pub fn on_key_press(&mut self, key: &KeyEvent) {
        let dir = match Direction::from_key(key) {
            Some(dir) => dir,
            None => return,
        };

        if dir == self.current_direction.opposite() {
            trace!("ignoring reversal to {:?}", dir);
            return;
        }

        trace!("buffered {:?}", dir);
        self.next_direction = dir;
    }

    pub fn on_tick(&mut self) -> Result<(), GameError> {
        if self.is_game_over() {
            return Err(GameError::GameOver);
        }

        self.current_direction = self.next_direction;
        self.snake.move_step(self.current_direction)?;

        if self.snake.is_dead() {
            info!("snake died at {:?}, length {}", self.snake.head(), self.snake.len());
            return Ok(());
        }

        if self.snake.head() == self.apple.position() {
            self.snake.grow()?;
            self.apple = Apple::place(&mut self.rng, APPLE_BOUNDS);
            info!("apple eaten, next one at {:?}", self.apple.position());
        }

        debug!("tick: head {:?} heading {:?}", self.snake.head(), self.current_direction);
        Ok(())
    }
}

impl<R> SnakeGame<R> {
    pub fn status(&self) -> GameStatus {
        if self.snake.is_dead() {GameStatus::GameOver} else {GameStatus::Running}
    }

    pub fn is_game_over(&self) -> bool {
        self.status() == GameStatus::GameOver
    }

    pub fn snake(&self) -> &Snake {
        &self.snake
    }

    pub fn apple(&self) -> Apple {
        self.apple
    }

    pub fn current_direction(&self) -> Direction {
        self.current_direction
    }

    pub fn next_direction(&self) -> Direction {
        self.next_direction
    }
}

impl<R> Render for SnakeGame<R> {
    fn render<C: Canvas>(&self, canvas: &mut C) -> Result<()> {
        canvas.clear_screen()?;
        self.apple.render(canvas)?;
        self.snake.render(canvas)?;
        canvas.reset_cursor()
    }
}

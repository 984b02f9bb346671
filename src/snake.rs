use std::collections::VecDeque;

use crate::error::GameError;
use crate::position::Position;
use crate::render::{Canvas, Render};
use Direction::*;

use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent};
use crossterm::style::Color;
use log::debug;

const SNAKE_BODY_CHAR: char = '█';
const DEAD_SNAKE_CHAR: char = 'X';
const HEAD_COLOR: Color = Color::Yellow;
const BODY_COLOR: Color = Color::Green;

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right
}

impl Direction {
    pub fn opposite(self) -> Direction {
        match self {
            Up => Down,
            Down => Up,
            Left => Right,
            Right => Left,
        }
    }

    /// Arrow keys only; everything else maps to nothing.
    pub fn from_key(key: &KeyEvent) -> Option<Direction> {
        match key.code {
            KeyCode::Up => Some(Up),
            KeyCode::Down => Some(Down),
            KeyCode::Left => Some(Left),
            KeyCode::Right => Some(Right),
            _ => None,
        }
    }

    pub fn step(self, pos: Position) -> Position {
        match self {
            Up => pos.offset_rows(-1),
            Down => pos.offset_rows(1),
            Left => pos.offset_cols(-1),
            Right => pos.offset_cols(1),
        }
    }
}

#[derive(Debug, Clone)]
pub struct Snake {
    body: VecDeque<Position>, // head first
    dead: bool,
    pending_growth: u32,
}

impl Snake {
    /// Spawns a one-segment snake; the rest of `length` grows in as it moves.
    pub fn new(spawn: Position, length: u32) -> Self {
        let mut body = VecDeque::new();
        body.push_back(spawn);
        Snake { body, dead: false, pending_growth: length.saturating_sub(1) }
    }

    pub fn body(&self) -> &VecDeque<Position> {
        &self.body
    }

    pub fn len(&self) -> usize {
        self.body.len()
    }

    pub fn head(&self) -> Position {
        self.body[0]
    }

    pub fn is_dead(&self) -> bool {
        self.dead
    }

    pub fn pending_growth(&self) -> u32 {
        self.pending_growth
    }

    pub fn move_step(&mut self, direction: Direction) -> Result<(), GameError> {
        if self.dead {
            return Err(GameError::SnakeDead("move"));
        }

        let new_head = direction.step(self.head());

        // The tail is still part of the body here, so chasing it is a crash.
        if new_head.is_negative() || self.body.contains(&new_head) {
            debug!("snake crashed moving {:?} into {:?}", direction, new_head);
            self.dead = true;
            return Ok(());
        }

        self.body.push_front(new_head);

        if self.pending_growth > 0 {
            self.pending_growth -= 1;
        } else {
            self.body.pop_back();
        }

        Ok(())
    }

    pub fn grow(&mut self) -> Result<(), GameError> {
        if self.dead {
            return Err(GameError::SnakeDead("grow"));
        }

        self.pending_growth += 1;
        Ok(())
    }
}

impl Render for Snake {
    fn render<C: Canvas>(&self, canvas: &mut C) -> Result<()> {
        for pos in self.body.iter().skip(1) {
            canvas.draw_glyph(*pos, SNAKE_BODY_CHAR, BODY_COLOR)?;
        }

        let head_char = if self.dead {DEAD_SNAKE_CHAR} else {SNAKE_BODY_CHAR};
        canvas.draw_glyph(self.head(), head_char, HEAD_COLOR)
    }
}

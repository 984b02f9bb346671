use crate::position::Position;
use crate::render::{Canvas, Render};

use anyhow::Result;
use crossterm::style::Color;
use rand::Rng;

const APPLE_CHAR: char = 'O';
const APPLE_COLOR: Color = Color::Red;

/// Inclusive upper corner of the area apples are dropped into.
pub const APPLE_BOUNDS: Position = Position::new(20, 20);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Apple {
    position: Position,
}

impl Apple {
    pub fn new(position: Position) -> Self {
        Apple { position }
    }

    /// Drops an apple anywhere in `[0, bounds.row] x [0, bounds.col]`, both ends
    /// included. Cells under the snake are not excluded.
    pub fn place<R: Rng>(rng: &mut R, bounds: Position) -> Self {
        let row = rng.gen_range(0..=bounds.row);
        let col = rng.gen_range(0..=bounds.col);
        Apple::new(Position::new(row, col))
    }

    pub fn position(&self) -> Position {
        self.position
    }
}

impl Render for Apple {
    fn render<C: Canvas>(&self, canvas: &mut C) -> Result<()> {
        canvas.draw_glyph(self.position, APPLE_CHAR, APPLE_COLOR)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::render::testing::RecordingCanvas;
    use rand::rngs::SmallRng;
    use rand::SeedableRng;

    #[test]
    fn placement_stays_in_inclusive_range() {
        let mut rng = SmallRng::seed_from_u64(7);
        let bounds = Position::new(2, 3);
        let mut hit_upper_row = false;
        let mut hit_upper_col = false;

        for _ in 0..500 {
            let pos = Apple::place(&mut rng, bounds).position();
            assert!((0..=2).contains(&pos.row), "row out of range: {:?}", pos);
            assert!((0..=3).contains(&pos.col), "col out of range: {:?}", pos);
            hit_upper_row |= pos.row == 2;
            hit_upper_col |= pos.col == 3;
        }

        assert!(hit_upper_row && hit_upper_col);
    }

    #[test]
    fn same_seed_same_apples() {
        let mut a = SmallRng::seed_from_u64(42);
        let mut b = SmallRng::seed_from_u64(42);
        for _ in 0..10 {
            assert_eq!(Apple::place(&mut a, APPLE_BOUNDS), Apple::place(&mut b, APPLE_BOUNDS));
        }
    }

    #[test]
    fn renders_one_red_glyph() {
        let mut canvas = RecordingCanvas::default();
        Apple::new(Position::new(4, 9)).render(&mut canvas).unwrap();
        assert_eq!(canvas.glyphs(), vec![(Position::new(4, 9), APPLE_CHAR, APPLE_COLOR)]);
    }
}

use crate::position::Position;

use anyhow::Result;
use crossterm::style::Color;

/// Drawing surface the game renders onto.
pub trait Canvas {
    fn clear_screen(&mut self) -> Result<()>;
    fn draw_glyph(&mut self, pos: Position, glyph: char, color: Color) -> Result<()>;
    /// Parks the cursor out of the way and pushes pending output to the surface.
    fn reset_cursor(&mut self) -> Result<()>;
}

/// Anything that knows how to draw itself.
pub trait Render {
    fn render<C: Canvas>(&self, canvas: &mut C) -> Result<()>;
}

#[cfg(test)]
pub(crate) mod testing {
    use super::*;

    #[derive(Debug, Clone, PartialEq)]
    pub enum Op {
        Clear,
        Glyph(Position, char, Color),
        ResetCursor,
    }

    /// Canvas double that remembers every call.
    #[derive(Debug, Default)]
    pub struct RecordingCanvas {
        pub ops: Vec<Op>,
    }

    impl RecordingCanvas {
        pub fn glyphs(&self) -> Vec<(Position, char, Color)> {
            self.ops
                .iter()
                .filter_map(|op| match op {
                    Op::Glyph(pos, ch, color) => Some((*pos, *ch, *color)),
                    _ => None,
                })
                .collect()
        }

        pub fn clears(&self) -> usize {
            self.ops.iter().filter(|op| **op == Op::Clear).count()
        }
    }

    impl Canvas for RecordingCanvas {
        fn clear_screen(&mut self) -> Result<()> {
            self.ops.push(Op::Clear);
            Ok(())
        }

        fn draw_glyph(&mut self, pos: Position, glyph: char, color: Color) -> Result<()> {
            self.ops.push(Op::Glyph(pos, glyph, color));
            Ok(())
        }

        fn reset_cursor(&mut self) -> Result<()> {
            self.ops.push(Op::ResetCursor);
            Ok(())
        }
    }
}

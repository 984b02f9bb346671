/// A cell on the board, addressed as (row, col). Rows grow downwards.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Position {
    pub row: i32,
    pub col: i32,
}

impl Position {
    pub const fn new(row: i32, col: i32) -> Self {
        Position { row, col }
    }

    pub fn offset_rows(&self, n: i32) -> Self {
        Position { row: self.row + n, col: self.col }
    }

    pub fn offset_cols(&self, n: i32) -> Self {
        Position { row: self.row, col: self.col + n }
    }

    /// Either coordinate below zero puts the position outside the board.
    pub fn is_negative(&self) -> bool {
        self.row < 0 || self.col < 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn offsets_touch_one_axis() {
        let pos = Position::new(3, 7);
        assert_eq!(pos.offset_rows(-1), Position::new(2, 7));
        assert_eq!(pos.offset_rows(2), Position::new(5, 7));
        assert_eq!(pos.offset_cols(-7), Position::new(3, 0));
        assert_eq!(pos.offset_cols(1), Position::new(3, 8));
        assert_eq!(pos, Position::new(3, 7));
    }

    #[test]
    fn negative_check() {
        assert!(!Position::new(0, 0).is_negative());
        assert!(Position::new(-1, 0).is_negative());
        assert!(Position::new(0, -1).is_negative());
    }
}

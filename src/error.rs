use thiserror::Error;

/// Contract violations on the game state. These are never recovered from.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum GameError {
    #[error("cannot {0} a dead snake")]
    SnakeDead(&'static str),
    #[error("cannot tick a game that is already over")]
    GameOver,
}

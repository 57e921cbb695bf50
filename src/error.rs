use std::io;

use thiserror::Error;

/// Failures that end a game session.
#[derive(Debug, Error)]
pub enum GameError {
    /// Food placement found no free cell; only reachable once the snake fills the board.
    #[error("no free cell left for food on a {width}x{height} board")]
    BoardFull { width: u16, height: u16 },

    #[error("invalid game configuration: {0}")]
    InvalidConfig(String),

    #[error("failed to initialise logging: {0}")]
    Logger(String),

    #[error("terminal I/O failed: {0}")]
    Io(#[from] io::Error),
}

use thiserror::Error;

use crate::game::model::{MAX_BOARD_SIZE, MIN_BOARD_SIZE};

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BoardSizeError {
    #[error("board size is not a number: {0:?}")]
    NotANumber(String),
    #[error("board size {0} is outside {min}..={max}", min = MIN_BOARD_SIZE, max = MAX_BOARD_SIZE)]
    OutOfRange(usize),
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("{var}: {source}")]
    InvalidBoardSize {
        var: &'static str,
        #[source]
        source: BoardSizeError,
    },
    #[error("{var}: expected a number, got {value:?}")]
    InvalidNumber { var: &'static str, value: String },
    #[error("{var}: expected `asc` or `desc`, got {value:?}")]
    InvalidHistoryOrder { var: &'static str, value: String },
}

use std::fmt;

use crate::error::BoardSizeError;

pub const MIN_BOARD_SIZE: usize = 3;
pub const MAX_BOARD_SIZE: usize = 10;
pub const DEFAULT_BOARD_SIZE: usize = 3;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Player {
    X,
    O,
}

impl Player {
    /// `X` moves on even history indices, `O` on odd ones.
    pub fn for_turn(x_is_next: bool) -> Self {
        if x_is_next {
            Player::X
        } else {
            Player::O
        }
    }
}

impl fmt::Display for Player {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Player::X => write!(f, "X"),
            Player::O => write!(f, "O"),
        }
    }
}

/// Row-major cell values, `None` for an empty cell.
pub type Squares = Vec<Option<Player>>;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct BoardSize(usize);

impl BoardSize {
    pub fn new(size: usize) -> Result<Self, BoardSizeError> {
        if (MIN_BOARD_SIZE..=MAX_BOARD_SIZE).contains(&size) {
            Ok(Self(size))
        } else {
            Err(BoardSizeError::OutOfRange(size))
        }
    }

    pub fn clamped(size: i64) -> Self {
        let size = size.clamp(MIN_BOARD_SIZE as i64, MAX_BOARD_SIZE as i64);
        Self(size as usize)
    }

    /// Parses user input. Anything that is not an integer is rejected,
    /// integers outside the allowed range are pulled back into it.
    pub fn parse(input: &str) -> Result<Self, BoardSizeError> {
        let trimmed = input.trim();
        trimmed
            .parse::<i64>()
            .map(Self::clamped)
            .map_err(|_| BoardSizeError::NotANumber(trimmed.to_string()))
    }

    pub fn get(self) -> usize {
        self.0
    }

    pub fn cell_count(self) -> usize {
        self.0 * self.0
    }
}

impl Default for BoardSize {
    fn default() -> Self {
        Self(DEFAULT_BOARD_SIZE)
    }
}

impl fmt::Display for BoardSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A 0-indexed cell coordinate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Move {
    pub row: usize,
    pub col: usize,
}

impl Move {
    pub fn from_index(index: usize, size: BoardSize) -> Self {
        Self {
            row: index / size.get(),
            col: index % size.get(),
        }
    }

    pub fn index(self, size: BoardSize) -> usize {
        self.row * size.get() + self.col
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row + 1, self.col + 1)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HistoryEntry {
    pub squares: Squares,
    /// `None` only for the game start entry.
    pub last_move: Option<Move>,
}

impl HistoryEntry {
    pub fn start(size: BoardSize) -> Self {
        Self {
            squares: vec![None; size.cell_count()],
            last_move: None,
        }
    }
}

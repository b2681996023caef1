pub mod board;
pub mod history;
pub mod model;

pub use board::{Board, Evaluation, PlayedMove, Status, WinLines, Winner};
pub use history::{Game, HistoryItem, HistoryOrder};
pub use model::{BoardSize, HistoryEntry, Move, Player, Squares};

pub mod board;
pub mod history;
pub mod square;

pub use board::BoardView;
pub use history::{HistoryAction, HistoryPanel};
pub use square::Square;

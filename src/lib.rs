pub mod config;
pub mod error;
pub mod game;
pub mod game_app;
pub mod ui;

pub use config::Config;
pub use error::{BoardSizeError, ConfigError};
pub use game::{
    Board, BoardSize, Evaluation, Game, HistoryEntry, HistoryItem, HistoryOrder, Move, PlayedMove,
    Player, Squares, Status, Winner,
};
pub use game_app::GameApp;

//! Startup configuration read from environment variables.

use crate::error::ConfigError;
use crate::game::{BoardSize, HistoryOrder};

pub const DEFAULT_WINDOW_WIDTH: f32 = 960.0;
pub const DEFAULT_WINDOW_HEIGHT: f32 = 640.0;
pub const DEFAULT_LOG_DIRECTIVE: &str = "info";

const BOARD_SIZE_VAR: &str = "TICTACTOE_BOARD_SIZE";
const HISTORY_ORDER_VAR: &str = "TICTACTOE_HISTORY_ORDER";
const WINDOW_WIDTH_VAR: &str = "TICTACTOE_WINDOW_WIDTH";
const WINDOW_HEIGHT_VAR: &str = "TICTACTOE_WINDOW_HEIGHT";
const LOG_VAR: &str = "TICTACTOE_LOG";

#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    pub board_size: BoardSize,
    pub history_order: HistoryOrder,
    pub window_size: [f32; 2],
    pub log_directive: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            board_size: BoardSize::default(),
            history_order: HistoryOrder::default(),
            window_size: [DEFAULT_WINDOW_WIDTH, DEFAULT_WINDOW_HEIGHT],
            log_directive: DEFAULT_LOG_DIRECTIVE.to_string(),
        }
    }
}

impl Config {
    /// Build config from environment variables.
    ///
    /// Optional:
    /// - `TICTACTOE_BOARD_SIZE`: initial board size, 3 to 10 (default 3)
    /// - `TICTACTOE_HISTORY_ORDER`: `asc` (default) or `desc`
    /// - `TICTACTOE_WINDOW_WIDTH` / `TICTACTOE_WINDOW_HEIGHT`: default 960x640
    /// - `TICTACTOE_LOG`: log filter used when `RUST_LOG` is unset (default `info`)
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|var| std::env::var(var).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();

        let board_size = match lookup(BOARD_SIZE_VAR) {
            Some(value) => parse_board_size(&value)?,
            None => defaults.board_size,
        };
        let history_order = match lookup(HISTORY_ORDER_VAR) {
            Some(value) => parse_history_order(&value)?,
            None => defaults.history_order,
        };
        let window_size = [
            parse_f32(WINDOW_WIDTH_VAR, lookup(WINDOW_WIDTH_VAR), DEFAULT_WINDOW_WIDTH)?,
            parse_f32(WINDOW_HEIGHT_VAR, lookup(WINDOW_HEIGHT_VAR), DEFAULT_WINDOW_HEIGHT)?,
        ];
        let log_directive = lookup(LOG_VAR).unwrap_or(defaults.log_directive);

        Ok(Self {
            board_size,
            history_order,
            window_size,
            log_directive,
        })
    }
}

// Unlike the in-game input, a bad size here is an error rather than clamped.
fn parse_board_size(value: &str) -> Result<BoardSize, ConfigError> {
    let size = value.trim().parse::<usize>().map_err(|_| ConfigError::InvalidNumber {
        var: BOARD_SIZE_VAR,
        value: value.to_string(),
    })?;
    BoardSize::new(size).map_err(|source| ConfigError::InvalidBoardSize {
        var: BOARD_SIZE_VAR,
        source,
    })
}

fn parse_history_order(value: &str) -> Result<HistoryOrder, ConfigError> {
    match value.trim().to_ascii_lowercase().as_str() {
        "asc" | "ascending" => Ok(HistoryOrder::Ascending),
        "desc" | "descending" => Ok(HistoryOrder::Descending),
        _ => Err(ConfigError::InvalidHistoryOrder {
            var: HISTORY_ORDER_VAR,
            value: value.to_string(),
        }),
    }
}

fn parse_f32(var: &'static str, value: Option<String>, default: f32) -> Result<f32, ConfigError> {
    let Some(value) = value else {
        return Ok(default);
    };
    match value.trim().parse::<f32>() {
        Ok(parsed) if parsed.is_finite() && parsed > 0.0 => Ok(parsed),
        _ => Err(ConfigError::InvalidNumber { var, value }),
    }
}

use tracing::{debug, info, warn};

use super::board::PlayedMove;
use super::model::{BoardSize, HistoryEntry, Player};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum HistoryOrder {
    #[default]
    Ascending,
    Descending,
}

impl HistoryOrder {
    pub fn toggle(self) -> Self {
        match self {
            HistoryOrder::Ascending => HistoryOrder::Descending,
            HistoryOrder::Descending => HistoryOrder::Ascending,
        }
    }

    /// Caption for the button that switches to the other order.
    pub fn toggle_label(self) -> &'static str {
        match self {
            HistoryOrder::Ascending => "Sort Desc",
            HistoryOrder::Descending => "Sort Asc",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HistoryItem {
    pub index: usize,
    pub label: String,
    pub is_current: bool,
}

/// Move history with a pointer to the position being shown.
///
/// `history` always holds the start entry at index 0 and `current_move` is
/// always a valid index into it. Every board in `history` has
/// `board_size.cell_count()` cells.
#[derive(Debug, Clone)]
pub struct Game {
    history: Vec<HistoryEntry>,
    current_move: usize,
    board_size: BoardSize,
    order: HistoryOrder,
}

impl Game {
    pub fn new(board_size: BoardSize) -> Self {
        Self {
            history: vec![HistoryEntry::start(board_size)],
            current_move: 0,
            board_size,
            order: HistoryOrder::default(),
        }
    }

    pub fn with_order(mut self, order: HistoryOrder) -> Self {
        self.order = order;
        self
    }

    pub fn history(&self) -> &[HistoryEntry] {
        &self.history
    }

    pub fn current_move(&self) -> usize {
        self.current_move
    }

    pub fn board_size(&self) -> BoardSize {
        self.board_size
    }

    pub fn order(&self) -> HistoryOrder {
        self.order
    }

    pub fn current_entry(&self) -> &HistoryEntry {
        &self.history[self.current_move]
    }

    pub fn current_squares(&self) -> &[Option<Player>] {
        &self.current_entry().squares
    }

    pub fn x_is_next(&self) -> bool {
        self.current_move % 2 == 0
    }

    pub fn next_player(&self) -> Player {
        Player::for_turn(self.x_is_next())
    }

    /// Records a move played from the current position. Anything after the
    /// current position is discarded.
    ///
    /// The new board must be the current one with exactly one more mark: the
    /// next player's, on an empty cell at `played.position`. Anything else is
    /// dropped.
    pub fn play(&mut self, played: PlayedMove) {
        if played.squares.len() != self.board_size.cell_count() {
            warn!(
                "Dropping move at {}: board has {} cells, expected {}",
                played.position,
                played.squares.len(),
                self.board_size.cell_count()
            );
            return;
        }
        if !self.follows_from_current(&played) {
            warn!(
                "Dropping move at {}: not a single {} mark on an empty cell",
                played.position,
                self.next_player()
            );
            return;
        }

        let mover = self.next_player();

        let discarded = self.history.len() - (self.current_move + 1);
        if discarded > 0 {
            debug!("Discarding {} future history entries", discarded);
        }
        self.history.truncate(self.current_move + 1);
        self.history.push(HistoryEntry {
            squares: played.squares,
            last_move: Some(played.position),
        });
        self.current_move = self.history.len() - 1;

        info!(
            "Move #{}: {} played {}",
            self.current_move + 1,
            mover,
            played.position
        );
    }

    fn follows_from_current(&self, played: &PlayedMove) -> bool {
        let size = self.board_size;
        let position = played.position;
        if position.row >= size.get() || position.col >= size.get() {
            return false;
        }
        let target = position.index(size);
        let mark = Some(self.next_player());
        self.current_squares()
            .iter()
            .zip(&played.squares)
            .enumerate()
            .all(|(index, (before, after))| {
                if index == target {
                    before.is_none() && *after == mark
                } else {
                    before == after
                }
            })
    }

    /// Shows history entry `index` without touching the history itself.
    /// Returns `false` if there is no such entry.
    pub fn jump_to(&mut self, index: usize) -> bool {
        if index >= self.history.len() {
            debug!(
                "Jump to {} ignored: history has {} entries",
                index,
                self.history.len()
            );
            return false;
        }
        self.current_move = index;
        info!("Jumped to move #{}", index + 1);
        true
    }

    /// Starts over on an empty board of `size`, dropping all history.
    pub fn resize(&mut self, size: BoardSize) {
        self.board_size = size;
        self.history = vec![HistoryEntry::start(size)];
        self.current_move = 0;
        info!("Board resized to {}x{}", size, size);
    }

    pub fn toggle_order(&mut self) {
        self.order = self.order.toggle();
        debug!("History order: {:?}", self.order);
    }

    pub fn label(&self, index: usize) -> String {
        let is_current = index == self.current_move;
        if is_current {
            return format!("You are at move #{}", index + 1);
        }
        // The start entry has no move; it is shown as (1, 1).
        let position = self
            .history
            .get(index)
            .and_then(|entry| entry.last_move)
            .unwrap_or_default();
        if index > 0 {
            format!("Go to move #{}, {}", index + 1, position)
        } else {
            format!("Go to game start, {}", position)
        }
    }

    /// The history list in the current display order.
    pub fn moves(&self) -> Vec<HistoryItem> {
        let mut items: Vec<HistoryItem> = (0..self.history.len())
            .map(|index| HistoryItem {
                index,
                label: self.label(index),
                is_current: index == self.current_move,
            })
            .collect();
        if self.order == HistoryOrder::Descending {
            items.reverse();
        }
        items
    }
}

impl Default for Game {
    fn default() -> Self {
        Self::new(BoardSize::default())
    }
}

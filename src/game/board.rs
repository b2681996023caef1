use std::fmt;

use tracing::{debug, warn};

use super::model::{BoardSize, Move, Player, Squares};

/// Every row, column and full diagonal of an N×N board as cell indices.
///
/// Lines are ordered row 0, column 0, row 1, column 1, and so on, followed by
/// the main diagonal and the anti-diagonal.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WinLines {
    size: BoardSize,
    lines: Vec<Vec<usize>>,
}

impl WinLines {
    pub fn new(size: BoardSize) -> Self {
        let n = size.get();
        let mut lines: Vec<Vec<usize>> = Vec::with_capacity(2 * n + 2);
        for i in 0..n {
            lines.push((0..n).map(|j| i * n + j).collect());
            lines.push((0..n).map(|j| j * n + i).collect());
        }
        lines.push((0..n).map(|i| i * n + i).collect());
        lines.push((0..n).map(|i| i * n + n - 1 - i).collect());
        Self { size, lines }
    }

    pub fn size(&self) -> BoardSize {
        self.size
    }

    pub fn iter(&self) -> impl Iterator<Item = &[usize]> {
        self.lines.iter().map(Vec::as_slice)
    }

    pub fn len(&self) -> usize {
        self.lines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Winner {
    pub player: Player,
    pub line: Vec<usize>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    Winner(Player),
    Draw,
    NextPlayer(Player),
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Status::Winner(player) => write!(f, "Winner: {player}"),
            Status::Draw => write!(f, "It's a draw!"),
            Status::NextPlayer(player) => write!(f, "Next player: {player}"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Evaluation {
    pub winner: Option<Winner>,
    pub full: bool,
}

impl Evaluation {
    pub fn status(&self, next: Player) -> Status {
        match &self.winner {
            Some(winner) => Status::Winner(winner.player),
            None if self.full => Status::Draw,
            None => Status::NextPlayer(next),
        }
    }

    pub fn winning_line(&self) -> &[usize] {
        self.winner
            .as_ref()
            .map(|w| w.line.as_slice())
            .unwrap_or_default()
    }

    pub fn is_highlighted(&self, index: usize) -> bool {
        self.winning_line().contains(&index)
    }
}

/// A completed move: the board after it and where it was played.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlayedMove {
    pub squares: Squares,
    pub position: Move,
}

/// Win detection and click handling for a board of a given size.
///
/// The line set only depends on the size, so it is built once and reused
/// until a different size is asked for.
#[derive(Debug, Clone)]
pub struct Board {
    lines: WinLines,
}

impl Board {
    pub fn new(size: BoardSize) -> Self {
        Self {
            lines: WinLines::new(size),
        }
    }

    pub fn lines(&mut self, size: BoardSize) -> &WinLines {
        if self.lines.size() != size {
            debug!("Rebuilding win lines: {} -> {}", self.lines.size(), size);
            self.lines = WinLines::new(size);
        }
        &self.lines
    }

    pub fn evaluate(&mut self, size: BoardSize, squares: &[Option<Player>]) -> Evaluation {
        if squares.len() != size.cell_count() {
            warn!(
                "Board state has {} cells, expected {} for size {}",
                squares.len(),
                size.cell_count(),
                size
            );
            return Evaluation {
                winner: None,
                full: false,
            };
        }

        let winner = self.lines(size).iter().find_map(|line| {
            let first = squares[line[0]]?;
            line.iter()
                .all(|&index| squares[index] == Some(first))
                .then(|| Winner {
                    player: first,
                    line: line.to_vec(),
                })
        });

        Evaluation {
            winner,
            full: squares.iter().all(Option::is_some),
        }
    }

    pub fn status(&mut self, size: BoardSize, squares: &[Option<Player>], next: Player) -> Status {
        self.evaluate(size, squares).status(next)
    }

    /// Marks `index` for `next`. Returns `None` when the cell is taken, out
    /// of range, or the game already has a winner.
    pub fn click(
        &mut self,
        size: BoardSize,
        squares: &[Option<Player>],
        index: usize,
        next: Player,
    ) -> Option<PlayedMove> {
        let evaluation = self.evaluate(size, squares);
        if let Some(winner) = &evaluation.winner {
            debug!("Click on {} ignored: {} already won", index, winner.player);
            return None;
        }
        match squares.get(index) {
            None => {
                debug!("Click on {} ignored: outside the board", index);
                None
            }
            Some(Some(owner)) => {
                debug!("Click on {} ignored: taken by {}", index, owner);
                None
            }
            Some(None) => {
                let mut next_squares = squares.to_vec();
                next_squares[index] = Some(next);
                Some(PlayedMove {
                    squares: next_squares,
                    position: Move::from_index(index, size),
                })
            }
        }
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new(BoardSize::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn size(n: usize) -> BoardSize {
        BoardSize::new(n).unwrap()
    }

    fn board_from(cells: &str) -> Squares {
        cells
            .chars()
            .map(|c| match c {
                'X' => Some(Player::X),
                'O' => Some(Player::O),
                _ => None,
            })
            .collect()
    }

    #[test]
    fn lines_cover_rows_columns_and_diagonals() {
        let lines = WinLines::new(size(3));
        let lines: Vec<Vec<usize>> = lines.iter().map(<[usize]>::to_vec).collect();
        assert_eq!(
            lines,
            vec![
                vec![0, 1, 2],
                vec![0, 3, 6],
                vec![3, 4, 5],
                vec![1, 4, 7],
                vec![6, 7, 8],
                vec![2, 5, 8],
                vec![0, 4, 8],
                vec![2, 4, 6],
            ]
        );
    }

    #[test]
    fn lines_are_rebuilt_only_on_size_change() {
        let mut board = Board::new(size(3));
        let first = board.lines(size(3)).iter().next().unwrap().as_ptr();
        let again = board.lines(size(3)).iter().next().unwrap().as_ptr();
        assert!(std::ptr::eq(first, again));

        // Evaluating boards of the same size reuses the same lines.
        board.evaluate(size(3), &board_from("XO......."));
        board.evaluate(size(3), &board_from("XOX......"));
        let after_eval = board.lines(size(3)).iter().next().unwrap().as_ptr();
        assert!(std::ptr::eq(first, after_eval));

        assert_eq!(board.lines(size(5)).len(), 12);
        assert_eq!(board.lines(size(5)).size(), size(5));
        let resized = board.lines(size(5)).iter().next().unwrap().as_ptr();
        assert!(std::ptr::eq(
            resized,
            board.lines(size(5)).iter().next().unwrap().as_ptr()
        ));
    }

    #[test]
    fn detects_row_winner() {
        let mut board = Board::default();
        let eval = board.evaluate(size(3), &board_from("XXXOO...."));
        assert_eq!(
            eval.winner,
            Some(Winner {
                player: Player::X,
                line: vec![0, 1, 2]
            })
        );
        assert!(eval.is_highlighted(1));
        assert!(!eval.is_highlighted(3));
    }

    #[test]
    fn detects_anti_diagonal_on_large_board() {
        let mut board = Board::default();
        let mut squares = vec![None; 16];
        for i in [3, 6, 9, 12] {
            squares[i] = Some(Player::O);
        }
        let eval = board.evaluate(size(4), &squares);
        assert_eq!(eval.winning_line(), &[3, 6, 9, 12]);
        assert_eq!(eval.status(Player::X), Status::Winner(Player::O));
    }

    #[test]
    fn draw_when_full_without_line() {
        let mut board = Board::default();
        let squares = board_from("XOXXOOOXX");
        let status = board.status(size(3), &squares, Player::O);
        assert_eq!(status, Status::Draw);
        assert_eq!(status.to_string(), "It's a draw!");
    }

    #[test]
    fn winner_on_full_board_beats_draw() {
        let mut board = Board::default();
        let status = board.status(size(3), &board_from("XXXOOXOXO"), Player::O);
        assert_eq!(status.to_string(), "Winner: X");
    }

    #[test]
    fn mismatched_length_has_no_winner() {
        let mut board = Board::default();
        let eval = board.evaluate(size(4), &board_from("XXX......"));
        assert_eq!(eval.winner, None);
    }

    #[test]
    fn click_marks_empty_cell() {
        let mut board = Board::default();
        let played = board
            .click(size(3), &board_from("X........"), 5, Player::O)
            .unwrap();
        assert_eq!(played.squares, board_from("X....O..."));
        assert_eq!(played.position, Move { row: 1, col: 2 });
    }

    #[test]
    fn click_rejects_taken_cell_out_of_range_and_finished_game() {
        let mut board = Board::default();
        assert_eq!(board.click(size(3), &board_from("X........"), 0, Player::O), None);
        assert_eq!(board.click(size(3), &board_from("........."), 9, Player::X), None);
        assert_eq!(board.click(size(3), &board_from("XXXOO...."), 8, Player::O), None);
    }
}

use eframe::egui;

use crate::game::{Board, Game, PlayedMove};
use crate::ui::Square;

const GRID_EXTENT: f32 = 320.0;

/// Status line plus the N×N grid for the position the game is showing.
pub struct BoardView<'a> {
    board: &'a mut Board,
    game: &'a Game,
}

impl<'a> BoardView<'a> {
    pub fn new(board: &'a mut Board, game: &'a Game) -> Self {
        Self { board, game }
    }

    /// Draws the board and returns the move made by a click this frame, if
    /// the click was legal.
    pub fn show(self, ui: &mut egui::Ui) -> Option<PlayedMove> {
        let size = self.game.board_size();
        let squares = self.game.current_squares();
        let next = self.game.next_player();
        let evaluation = self.board.evaluate(size, squares);

        ui.label(
            egui::RichText::new(evaluation.status(next).to_string())
                .size(22.0)
                .strong(),
        );
        ui.add_space(10.0);

        let n = size.get();
        let cell = (GRID_EXTENT / n as f32).clamp(28.0, 100.0);
        let mut clicked = None;

        egui::Grid::new("board_grid")
            .spacing(egui::vec2(4.0, 4.0))
            .show(ui, |ui| {
                for row in 0..n {
                    for col in 0..n {
                        let index = row * n + col;
                        let square = Square::new(squares[index], cell)
                            .highlight(evaluation.is_highlighted(index));
                        if ui.add(square).clicked() {
                            clicked = Some(index);
                        }
                    }
                    ui.end_row();
                }
            });

        clicked.and_then(|index| self.board.click(size, squares, index, next))
    }
}

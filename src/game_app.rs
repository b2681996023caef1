use eframe::egui;
use tracing::debug;

use crate::config::Config;
use crate::game::model::{MAX_BOARD_SIZE, MIN_BOARD_SIZE};
use crate::game::{Board, BoardSize, Game};
use crate::ui::{BoardView, HistoryAction, HistoryPanel};

pub struct GameApp {
    game: Game,
    board: Board,
    input_board_size: String,
}

impl Default for GameApp {
    fn default() -> Self {
        Self::new(&Config::default())
    }
}

impl eframe::App for GameApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.show(ctx);
    }
}

impl GameApp {
    pub fn new(config: &Config) -> Self {
        Self {
            game: Game::new(config.board_size).with_order(config.history_order),
            board: Board::new(config.board_size),
            input_board_size: config.board_size.to_string(),
        }
    }

    pub fn game(&self) -> &Game {
        &self.game
    }

    pub fn input_board_size(&self) -> &str {
        &self.input_board_size
    }

    pub fn set_input_board_size(&mut self, input: impl Into<String>) {
        self.input_board_size = input.into();
    }

    /// Draws one frame: size input on the left, history on the right, board
    /// in the middle.
    pub fn show(&mut self, ctx: &egui::Context) {
        egui::SidePanel::left("settings_panel")
            .resizable(false)
            .show(ctx, |ui| {
                ui.add_space(10.0);
                self.render_board_size_input(ui);
            });

        egui::SidePanel::right("history_panel")
            .min_width(220.0)
            .show(ctx, |ui| {
                ui.add_space(10.0);
                if let Some(action) = HistoryPanel::new(&self.game).show(ui) {
                    self.handle_history_action(action);
                }
            });

        egui::CentralPanel::default().show(ctx, |ui| {
            ui.vertical_centered(|ui| {
                ui.add_space(20.0);
                if let Some(played) = BoardView::new(&mut self.board, &self.game).show(ui) {
                    self.game.play(played);
                }
            });
        });
    }

    pub fn handle_history_action(&mut self, action: HistoryAction) {
        match action {
            HistoryAction::JumpTo(index) => {
                self.game.jump_to(index);
            }
            HistoryAction::ToggleOrder => self.game.toggle_order(),
        }
    }

    /// Applies whatever is typed in the size field. Text that is not a
    /// number is thrown away; numbers are clamped into range. The game is
    /// only reset when the size actually changes.
    pub fn commit_board_size(&mut self) {
        match BoardSize::parse(&self.input_board_size) {
            Ok(size) if size != self.game.board_size() => self.resize(size),
            Ok(_) => debug!("Board size unchanged, keeping history"),
            Err(err) => debug!("Ignoring board size input: {}", err),
        }
        self.input_board_size = self.game.board_size().to_string();
    }

    fn resize(&mut self, size: BoardSize) {
        self.game.resize(size);
        self.input_board_size = size.to_string();
    }

    fn render_board_size_input(&mut self, ui: &mut egui::Ui) {
        let current = self.game.board_size().get();

        ui.horizontal(|ui| {
            ui.label("Board Size:");
            let response = ui.add(
                egui::TextEdit::singleline(&mut self.input_board_size).desired_width(32.0),
            );
            if response.lost_focus() {
                self.commit_board_size();
            }
        });

        ui.horizontal(|ui| {
            if ui
                .add_enabled(current > MIN_BOARD_SIZE, egui::Button::new("-"))
                .clicked()
            {
                self.resize(BoardSize::clamped(current as i64 - 1));
            }
            if ui
                .add_enabled(current < MAX_BOARD_SIZE, egui::Button::new("+"))
                .clicked()
            {
                self.resize(BoardSize::clamped(current as i64 + 1));
            }
        });

        ui.small(format!("{MIN_BOARD_SIZE} to {MAX_BOARD_SIZE}"));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::HistoryOrder;

    fn run_frame(app: &mut GameApp) {
        let ctx = egui::Context::default();
        let _ = ctx.run(egui::RawInput::default(), |ctx| app.show(ctx));
    }

    #[test]
    fn starts_from_config() {
        let config = Config {
            board_size: BoardSize::new(5).unwrap(),
            history_order: HistoryOrder::Descending,
            ..Config::default()
        };
        let app = GameApp::new(&config);
        assert_eq!(app.game().board_size().get(), 5);
        assert_eq!(app.game().order(), HistoryOrder::Descending);
        assert_eq!(app.input_board_size(), "5");
    }

    #[test]
    fn commit_clamps_numbers() {
        let mut app = GameApp::default();
        app.set_input_board_size("25");
        app.commit_board_size();
        assert_eq!(app.game().board_size().get(), 10);
        assert_eq!(app.input_board_size(), "10");
        assert_eq!(app.game().current_squares().len(), 100);
    }

    #[test]
    fn commit_ignores_text() {
        let mut app = GameApp::default();
        app.set_input_board_size("4");
        app.commit_board_size();
        app.set_input_board_size("four");
        app.commit_board_size();
        assert_eq!(app.game().board_size().get(), 4);
        assert_eq!(app.input_board_size(), "4");
    }

    #[test]
    fn commit_without_change_keeps_history() {
        let mut app = GameApp::default();
        for index in [4, 0, 8] {
            let size = app.game.board_size();
            let next = app.game.next_player();
            let played = app
                .board
                .click(size, app.game.current_squares(), index, next)
                .unwrap();
            app.game.play(played);
        }
        assert_eq!(app.game().history().len(), 4);

        app.commit_board_size();
        assert_eq!(app.game().history().len(), 4);

        app.set_input_board_size(" 3 ");
        app.commit_board_size();
        assert_eq!(app.game().history().len(), 4);
        assert_eq!(app.game().current_move(), 3);
        assert_eq!(app.input_board_size(), "3");
    }

    #[test]
    fn history_actions_reach_the_game() {
        let mut app = GameApp::default();
        app.handle_history_action(HistoryAction::ToggleOrder);
        assert_eq!(app.game().order(), HistoryOrder::Descending);
        app.handle_history_action(HistoryAction::JumpTo(3));
        assert_eq!(app.game().current_move(), 0);
    }

    #[test]
    fn renders_without_input() {
        let mut app = GameApp::default();
        run_frame(&mut app);
        app.set_input_board_size("10");
        app.commit_board_size();
        run_frame(&mut app);
        assert_eq!(app.game().history().len(), 1);
    }
}

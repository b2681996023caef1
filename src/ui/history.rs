use eframe::egui;

use crate::game::Game;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HistoryAction {
    JumpTo(usize),
    ToggleOrder,
}

pub struct HistoryPanel<'a> {
    game: &'a Game,
}

impl<'a> HistoryPanel<'a> {
    pub fn new(game: &'a Game) -> Self {
        Self { game }
    }

    pub fn show(self, ui: &mut egui::Ui) -> Option<HistoryAction> {
        let mut action = None;

        ui.heading("Game History");
        ui.add_space(5.0);
        if ui.button(self.game.order().toggle_label()).clicked() {
            action = Some(HistoryAction::ToggleOrder);
        }
        ui.add_space(5.0);

        egui::ScrollArea::vertical().show(ui, |ui| {
            for (position, item) in self.game.moves().into_iter().enumerate() {
                ui.horizontal(|ui| {
                    ui.label(format!("{}.", position + 1));
                    if item.is_current {
                        ui.strong(item.label);
                    } else if ui.button(item.label).clicked() {
                        action = Some(HistoryAction::JumpTo(item.index));
                    }
                });
            }
        });

        action
    }
}

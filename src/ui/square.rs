use eframe::egui;

use crate::game::Player;

const HIGHLIGHT_FILL: egui::Color32 = egui::Color32::from_rgb(254, 240, 138);
const PLAIN_FILL: egui::Color32 = egui::Color32::WHITE;

/// One board cell. Clicks are reported through the returned `Response`;
/// the board knows which index it belongs to.
pub struct Square {
    value: Option<Player>,
    highlight: bool,
    size: f32,
}

impl Square {
    pub fn new(value: Option<Player>, size: f32) -> Self {
        Self {
            value,
            highlight: false,
            size,
        }
    }

    /// Marks the cell as part of the winning line.
    pub fn highlight(mut self, highlight: bool) -> Self {
        self.highlight = highlight;
        self
    }

    fn text(&self) -> egui::RichText {
        let font_size = self.size * 0.5;
        match self.value {
            Some(Player::X) => egui::RichText::new("X")
                .size(font_size)
                .strong()
                .color(egui::Color32::from_rgb(255, 99, 71)),
            Some(Player::O) => egui::RichText::new("O")
                .size(font_size)
                .strong()
                .color(egui::Color32::from_rgb(34, 139, 34)),
            None => egui::RichText::new(" ").size(font_size),
        }
    }
}

impl egui::Widget for Square {
    fn ui(self, ui: &mut egui::Ui) -> egui::Response {
        let fill = if self.highlight {
            HIGHLIGHT_FILL
        } else {
            PLAIN_FILL
        };
        let button = egui::Button::new(self.text())
            .fill(fill)
            .stroke(egui::Stroke::new(1.0, egui::Color32::GRAY))
            .min_size(egui::vec2(self.size, self.size));
        ui.add(button)
    }
}

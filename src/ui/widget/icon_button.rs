use egui::{
    Align2, Color32, CursorIcon, FontFamily, FontId, RichText, Sense, Stroke, Vec2, Widget,
};

use crate::ui::font::PHOSPHOR_FILL;

/// Square button showing one phosphor glyph
pub struct IconButton {
    size: f32,
    bg_color: Color32,
    icon: &'static str,
    icon_color: Color32,
    tooltip_text: Option<String>,
}

impl IconButton {
    pub fn new(icon: &'static str) -> Self {
        Self {
            size: 25.,
            bg_color: Color32::from_gray(150),
            icon,
            icon_color: Color32::from_gray(30),
            tooltip_text: None,
        }
    }
    pub fn fill(mut self, bg: Color32) -> Self {
        self.bg_color = bg;
        self
    }
    pub fn tooltip(mut self, text: impl ToString) -> Self {
        self.tooltip_text = Some(text.to_string());
        self
    }
}

impl Widget for IconButton {
    fn ui(self, ui: &mut egui::Ui) -> egui::Response {
        let (mut res, painter) =
            ui.allocate_painter(Vec2::splat(self.size), Sense::click());
        let rect = res.rect;
        let fill = if !ui.is_enabled() {
            self.bg_color.gamma_multiply(0.4)
        } else if res.hovered() {
            self.bg_color.gamma_multiply(0.8)
        } else {
            self.bg_color
        };
        let stroke = if res.has_focus() {
            Stroke::new(1.0, Color32::from_white_alpha(200))
        } else {
            Stroke::NONE
        };
        painter.rect(rect, 2.0, fill, stroke, egui::StrokeKind::Inside);
        painter.text(
            rect.center(),
            Align2::CENTER_CENTER,
            self.icon,
            FontId::new(self.size * 0.6, FontFamily::Name(PHOSPHOR_FILL.into())),
            self.icon_color,
        );

        if ui.is_enabled() {
            res = res.on_hover_cursor(CursorIcon::PointingHand);
        }
        if let Some(text) = self.tooltip_text {
            res = res.on_hover_text(RichText::new(text).color(Color32::WHITE).size(10.));
        }
        res
    }
}

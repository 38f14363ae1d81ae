use egui::{Align2, Color32, FontFamily, FontId, Painter, Rect, Stroke, pos2};

use crate::{
    core::roll::{DrawCommand, NormRect},
    ui::{font::PHOSPHOR_FILL, theme::rgb_color},
};

const EXIT_COLOR: Color32 = Color32::from_gray(20);
/// Keeps hairlines visible on small thumbnails
const MIN_STROKE: f32 = 0.5;

/// Map a unit square rectangle onto the viewport
pub fn to_screen(rect: &NormRect, viewport: Rect) -> Rect {
    let min = pos2(
        viewport.left() + rect.x as f32 * viewport.width(),
        viewport.top() + rect.y as f32 * viewport.height(),
    );
    let max = pos2(
        min.x + rect.width as f32 * viewport.width(),
        min.y + rect.height as f32 * viewport.height(),
    );
    Rect::from_min_max(min, max)
}

/// Viewport position to unit square coordinates
pub fn to_normalized(pos: egui::Pos2, viewport: Rect) -> (f64, f64) {
    (
        ((pos.x - viewport.left()) / viewport.width()) as f64,
        ((pos.y - viewport.top()) / viewport.height()) as f64,
    )
}

pub fn paint_commands(painter: &Painter, viewport: Rect, commands: &[DrawCommand]) {
    for command in commands {
        match command {
            DrawCommand::Rect {
                rect,
                fill,
                opacity,
            } => {
                painter.rect_filled(to_screen(rect, viewport), 0., rgb_color(*fill, *opacity));
            }
            DrawCommand::Line { y, width, color } => {
                let y = viewport.top() + *y as f32 * viewport.height();
                // Stroke widths are in chart units, like the row heights
                let stroke = (*width as f32 * viewport.height()).max(MIN_STROKE);
                painter.line_segment(
                    [pos2(viewport.left(), y), pos2(viewport.right(), y)],
                    Stroke::new(stroke, rgb_color(*color, 1.)),
                );
            }
            DrawCommand::ExitControl { rect } => {
                let rect = to_screen(rect, viewport);
                painter.text(
                    rect.center(),
                    Align2::CENTER_CENTER,
                    egui_phosphor::fill::X_CIRCLE,
                    FontId::new(
                        rect.height().min(rect.width()).max(10.),
                        FontFamily::Name(PHOSPHOR_FILL.into()),
                    ),
                    EXIT_COLOR,
                );
            }
        }
    }
}

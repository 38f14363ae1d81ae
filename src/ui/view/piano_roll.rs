use egui::{CursorIcon, Painter, Rect, Response, Sense, Ui, Vec2};

use crate::{
    core::{roll::PianoRoll, selection::SelectionEvent},
    ui::{
        painter::{paint_commands, to_normalized},
        theme::CHART_FILL,
    },
};

/// Interactive chart for the main card. Keeps track of the press that
/// started on it so moves and releases outside the chart still count.
pub struct UIPianoRoll {
    pressing: bool,
}

impl UIPianoRoll {
    pub fn new() -> Self {
        Self { pressing: false }
    }

    /// Forget any press in progress, used when the main card changes
    pub fn reset(&mut self) {
        self.pressing = false;
    }

    pub fn ui(&mut self, ui: &mut Ui, roll: &mut PianoRoll, size: Vec2) -> Response {
        let (mut response, painter) = ui.allocate_painter(size, Sense::click_and_drag());
        let viewport = response.rect;

        self.interact(ui, &response, roll, viewport);

        paint_chart(&painter, viewport, roll);
        paint_commands(&painter, viewport, &roll.overlay_commands());

        if let Some(pos) = response.hover_pos() {
            let (x, y) = to_normalized(pos, viewport);
            let on_exit = roll
                .selection()
                .overlay()
                .is_some_and(|overlay| overlay.exit_contains(x, y));
            if on_exit {
                response = response.on_hover_cursor(CursorIcon::PointingHand);
            } else if roll.selection().edge_at(x).is_some() {
                response = response.on_hover_cursor(CursorIcon::ResizeColumn);
            }
        }
        response
    }

    fn interact(&mut self, ui: &Ui, response: &Response, roll: &mut PianoRoll, viewport: Rect) {
        let (pressed, released, delta, pos) = ui.input(|i| {
            (
                i.pointer.primary_pressed(),
                i.pointer.primary_released(),
                i.pointer.delta(),
                i.pointer.interact_pos(),
            )
        });
        let Some(pos) = pos else {
            return;
        };
        let (x, y) = to_normalized(pos, viewport);
        // Drags may leave the chart, keep the edges on it
        let x = x.clamp(0., 1.);

        let mut just_pressed = false;
        if pressed && response.hovered() && !roll.press_exit_control(x, y) {
            roll.pointer_down(x);
            self.pressing = true;
            just_pressed = true;
        }
        // Motion in the press frame happened before the press
        if self.pressing && !just_pressed && delta != Vec2::ZERO {
            roll.pointer_move(x);
        }
        if self.pressing && released {
            self.pressing = false;
            if let Some(SelectionEvent::Dismissed) = roll.pointer_up() {
                log::debug!("Selection dismissed");
            }
        }
    }
}

/// Background, key lines and notes
pub fn paint_chart(painter: &Painter, viewport: Rect, roll: &PianoRoll) {
    painter.rect_filled(viewport, 0., CHART_FILL);
    paint_commands(painter, viewport, roll.draw_commands());
}

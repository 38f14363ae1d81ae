use egui::{
    Color32, CornerRadius, CursorIcon, Frame, Margin, RichText, ScrollArea, Sense, Stroke, Ui,
    Vec2,
};

use crate::{
    core::gallery::{CardModel, CardRole, GalleryController},
    ui::{
        theme::{CARD_FILL, MAIN_CARD_STROKE},
        view::piano_roll::{UIPianoRoll, paint_chart},
    },
};

const CARD_MARGIN: i8 = 8;
const ERROR_COLOR: Color32 = Color32::from_rgb(220, 90, 90);

pub struct UIGallery {
    main_roll: UIPianoRoll,
}

impl UIGallery {
    pub fn new() -> Self {
        Self {
            main_roll: UIPianoRoll::new(),
        }
    }

    /// Promote a card, dropping any press in progress on the old main chart
    pub fn set_main_view(&mut self, gallery: &mut GalleryController, id: usize) {
        if gallery.main_id() != Some(id) && gallery.set_main_view(id) {
            self.main_roll.reset();
        }
    }

    /// Large interactive card
    pub fn main_ui(&mut self, ui: &mut Ui, gallery: &mut GalleryController) {
        let Some(card) = gallery.main_card_mut() else {
            return;
        };
        let role = CardRole::Main;
        card_frame(role).show(ui, |ui| {
            ui.label(RichText::new(&card.description).size(role.description_size()));
            let size = Vec2::new(
                ui.available_width() * role.width_fraction(),
                role.height(ui.available_height()),
            );
            match &mut card.roll {
                Ok(roll) => {
                    let range = roll.pitch_range();
                    ui.label(
                        RichText::new(format!(
                            "{} notes over {:.2}s, pitches {}..{}",
                            roll.rendered_notes().len(),
                            roll.horizon(),
                            range.min,
                            range.max
                        ))
                        .color(Color32::GRAY),
                    );
                    ui.vertical_centered(|ui| {
                        self.main_roll.ui(ui, roll, size);
                    });
                }
                Err(err) => {
                    ui.label(RichText::new(err.to_string()).color(ERROR_COLOR));
                }
            }
        });
    }

    /// Side list of every other card, returns the clicked one
    pub fn list_ui(&mut self, ui: &mut Ui, gallery: &GalleryController) -> Option<usize> {
        let mut clicked = None;
        ScrollArea::vertical()
            .id_salt("list-view")
            .auto_shrink([false, false])
            .show(ui, |ui| {
                for card in gallery.list_cards() {
                    if thumbnail_ui(ui, card).clicked() {
                        clicked = Some(card.id);
                    }
                }
            });
        clicked
    }
}

fn card_frame(role: CardRole) -> Frame {
    let stroke = match role {
        CardRole::Main => Stroke::new(1.5, MAIN_CARD_STROKE),
        CardRole::List => Stroke::NONE,
    };
    Frame::new()
        .fill(CARD_FILL)
        .stroke(stroke)
        .corner_radius(CornerRadius::same(4))
        .inner_margin(Margin::same(CARD_MARGIN))
        .outer_margin(Margin::same(CARD_MARGIN / 2))
}

/// Non interactive card, clickable as a whole
fn thumbnail_ui(ui: &mut Ui, card: &CardModel) -> egui::Response {
    let role = CardRole::List;
    let response = card_frame(role)
        .show(ui, |ui| {
            ui.set_width(ui.available_width());
            ui.label(RichText::new(&card.description).size(role.description_size()));
            match &card.roll {
                Ok(roll) => {
                    let size = Vec2::new(
                        ui.available_width() * role.width_fraction(),
                        role.height(ui.available_height()),
                    );
                    ui.vertical_centered(|ui| {
                        let (response, painter) = ui.allocate_painter(size, Sense::hover());
                        paint_chart(&painter, response.rect, roll);
                    });
                }
                Err(err) => {
                    ui.label(RichText::new(err.to_string()).color(ERROR_COLOR));
                }
            }
        })
        .response;
    response
        .interact(Sense::click())
        .on_hover_cursor(CursorIcon::PointingHand)
}

use egui::{Color32, Layout, RichText, Ui, Vec2};

use crate::ui::{theme::PRIMARY_COLOR, widget::icon_button::IconButton};

const BUTTON_COLOR: Color32 = Color32::from_gray(150);

/// What the top bar shows about the current load
pub enum LoadStatus<'a> {
    Empty,
    Loading,
    Failed(&'a str),
    Ready { cards: usize },
}

pub enum TopBarAction {
    Load,
    Cancel,
}

/// Summary of the main chart selection
pub struct SelectionSummary {
    pub start: f64,
    pub end: f64,
    pub notes: usize,
}

pub struct UITopBar;

impl UITopBar {
    pub fn new() -> Self {
        Self
    }

    pub fn ui(
        &mut self,
        ui: &mut Ui,
        status: LoadStatus,
        selection: Option<SelectionSummary>,
    ) -> Option<TopBarAction> {
        let mut action = None;
        ui.horizontal(|ui| {
            ui.spacing_mut().item_spacing = Vec2::new(6.0, 2.0);
            if matches!(status, LoadStatus::Loading) {
                if ui
                    .add(
                        IconButton::new(egui_phosphor::fill::STOP)
                            .fill(BUTTON_COLOR)
                            .tooltip("Cancel"),
                    )
                    .clicked()
                {
                    action = Some(TopBarAction::Cancel);
                }
                ui.spinner();
                ui.label("Loading piano rolls...");
            } else {
                if ui
                    .add(
                        IconButton::new(egui_phosphor::fill::DOWNLOAD_SIMPLE)
                            .fill(PRIMARY_COLOR)
                            .tooltip("Load piano rolls"),
                    )
                    .clicked()
                {
                    action = Some(TopBarAction::Load);
                }
                match status {
                    LoadStatus::Empty => {
                        ui.label("Press load to fetch piano rolls");
                    }
                    LoadStatus::Failed(err) => {
                        ui.label(RichText::new(err).color(Color32::from_rgb(220, 90, 90)));
                    }
                    LoadStatus::Ready { cards } => {
                        ui.label(format!("{cards} piano rolls"));
                    }
                    LoadStatus::Loading => {}
                }
            }

            if let Some(summary) = selection {
                ui.with_layout(Layout::right_to_left(egui::Align::Center), |ui| {
                    ui.label(format!(
                        "Selection {:.3}..{:.3}, {} notes",
                        summary.start, summary.end, summary.notes
                    ));
                });
            }
        });
        action
    }
}

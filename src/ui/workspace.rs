use egui::{Color32, Context, Frame, Margin};
use std::time::Duration;

use crate::{
    config::Config,
    core::{
        gallery::GalleryController,
        loader::{HttpSource, LoadHandle, LoaderMsg, spawn_loader},
        selection::SelectionState,
    },
    ui::{
        panels::top_bar::{LoadStatus, SelectionSummary, TopBarAction, UITopBar},
        view::gallery::UIGallery,
    },
};

/// The loader thread cannot wake the ui, poll at this rate while loading
const LOAD_POLL_INTERVAL: Duration = Duration::from_millis(100);
const LIST_WIDTH: f32 = 320.;

enum LoadState {
    Empty,
    Loading(LoadHandle),
    Failed(String),
    Ready,
}

pub struct Workspace {
    config: Config,
    load_state: LoadState,
    gallery: GalleryController,
    // Ui elements
    top_bar: UITopBar,
    gallery_view: UIGallery,
}

impl Workspace {
    pub fn new(config: Config) -> Self {
        Self {
            config,
            load_state: LoadState::Empty,
            gallery: GalleryController::new(),
            top_bar: UITopBar::new(),
            gallery_view: UIGallery::new(),
        }
    }

    pub fn show(&mut self, ctx: &Context) {
        self.handle_messages();
        if matches!(self.load_state, LoadState::Loading(_)) {
            ctx.request_repaint_after(LOAD_POLL_INTERVAL);
        }

        egui::TopBottomPanel::top("top-bar")
            .resizable(false)
            .frame(
                Frame::new()
                    .fill(Color32::from_gray(40))
                    .inner_margin(Margin::same(4)),
            )
            .show(ctx, |ui| {
                let status = match &self.load_state {
                    LoadState::Empty => LoadStatus::Empty,
                    LoadState::Loading(_) => LoadStatus::Loading,
                    LoadState::Failed(err) => LoadStatus::Failed(err),
                    LoadState::Ready => LoadStatus::Ready {
                        cards: self.gallery.len(),
                    },
                };
                let summary = self.selection_summary();
                match self.top_bar.ui(ui, status, summary) {
                    Some(TopBarAction::Load) => self.start_load(),
                    Some(TopBarAction::Cancel) => self.cancel_load(),
                    None => {}
                }
            });

        let mut clicked = None;
        if self.gallery.main_id().is_some() {
            egui::SidePanel::right("list-view")
                .resizable(true)
                .default_width(LIST_WIDTH)
                .show(ctx, |ui| {
                    clicked = self.gallery_view.list_ui(ui, &self.gallery);
                });
            egui::CentralPanel::default().show(ctx, |ui| {
                self.gallery_view.main_ui(ui, &mut self.gallery);
            });
        } else {
            egui::CentralPanel::default().show(ctx, |ui| {
                clicked = self.gallery_view.list_ui(ui, &self.gallery);
            });
        }

        if let Some(id) = clicked {
            self.gallery_view.set_main_view(&mut self.gallery, id);
        }
    }

    fn start_load(&mut self) {
        // A previous load, if any, is superseded
        self.cancel_load();
        let handle = spawn_loader(HttpSource, self.config.load_request());
        self.load_state = LoadState::Loading(handle);
    }

    fn cancel_load(&mut self) {
        if let LoadState::Loading(handle) = &self.load_state {
            handle.cancel();
            self.load_state = if self.gallery.is_empty() {
                LoadState::Empty
            } else {
                LoadState::Ready
            };
        }
    }

    fn handle_messages(&mut self) {
        let LoadState::Loading(handle) = &self.load_state else {
            return;
        };
        let Some(msg) = handle.poll() else {
            return;
        };
        match msg {
            LoaderMsg::Loaded(notes) => {
                self.gallery = GalleryController::from_notes(
                    &notes,
                    self.config.card_count,
                    self.config.notes_per_card,
                );
                self.gallery_view = UIGallery::new();
                self.load_state = LoadState::Ready;
            }
            LoaderMsg::Failed(err) => {
                // Gallery stays as it was
                self.load_state = LoadState::Failed(err.to_string());
            }
            LoaderMsg::Cancelled => {
                self.load_state = if self.gallery.is_empty() {
                    LoadState::Empty
                } else {
                    LoadState::Ready
                };
            }
        }
    }

    fn selection_summary(&self) -> Option<SelectionSummary> {
        let roll = self.gallery.main_card()?.roll.as_ref().ok()?;
        let (start, end) = match roll.selection().state() {
            SelectionState::Confirmed { start, end } | SelectionState::Resizing { start, end, .. } => {
                (start, end)
            }
            SelectionState::Idle | SelectionState::Drafting { .. } => return None,
        };
        Some(SelectionSummary {
            start: start.min(end),
            end: start.max(end),
            notes: roll.selected_notes().count(),
        })
    }
}

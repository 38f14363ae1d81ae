use crate::{config::Config, ui::workspace::Workspace};

pub struct GalleryApp {
    workspace: Workspace,
}

impl GalleryApp {
    pub fn new(config: Config, _cc: &eframe::CreationContext<'_>) -> Self {
        Self {
            workspace: Workspace::new(config),
        }
    }
}

impl eframe::App for GalleryApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.workspace.show(ctx);
    }
}

use crate::{
    config::Config,
    ui::{app::GalleryApp, font::get_fonts, theme::get_app_style, window::get_native_options},
};

use egui::Theme;
pub mod app;
pub mod font;
mod painter;
mod panels;
mod theme;
mod view;
mod widget;
mod window;
mod workspace;

pub fn spawn_ui_thread(config: Config) -> Result<(), eframe::Error> {
    eframe::run_native(
        "Piano Roll Gallery",
        get_native_options(),
        Box::new(|cc| {
            cc.egui_ctx.set_fonts(get_fonts());
            cc.egui_ctx.set_style(get_app_style());
            cc.egui_ctx.set_theme(Theme::Dark);
            Ok(Box::new(GalleryApp::new(config, cc)))
        }),
    )
}

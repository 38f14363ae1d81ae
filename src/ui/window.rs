use eframe::NativeOptions;
use egui::{Vec2, ViewportBuilder};

const INITIAL_SIZE: Vec2 = Vec2::new(1200., 800.);
const MIN_SIZE: Vec2 = Vec2::new(600., 400.);

pub fn get_native_options() -> NativeOptions {
    NativeOptions {
        viewport: ViewportBuilder::default()
            .with_title("Piano Roll Gallery")
            .with_inner_size(INITIAL_SIZE)
            .with_min_inner_size(MIN_SIZE),
        ..Default::default()
    }
}

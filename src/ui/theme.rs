use egui::{
    Color32, CornerRadius, FontId, Margin, Shadow, Spacing, Stroke, Style, TextStyle, Vec2, Visuals,
};

use crate::core::gradient::Rgb;

// PianoRoll brand #5DB5D5
pub const PRIMARY_COLOR: Color32 = Color32::from_rgb(93, 181, 213);
pub const CARD_FILL: Color32 = Color32::from_gray(48);
pub const CHART_FILL: Color32 = Color32::from_gray(235);
pub const MAIN_CARD_STROKE: Color32 = PRIMARY_COLOR;

pub fn get_app_style() -> Style {
    let mut style = Style::default();
    style.visuals = get_app_visuals();
    style.spacing = get_app_spacing();
    style
        .text_styles
        .insert(TextStyle::Body, FontId::proportional(13.0));
    style
}

fn get_app_visuals() -> Visuals {
    let mut visuals = Visuals::dark();

    visuals.panel_fill = Color32::from_gray(36);
    visuals.window_corner_radius = 1.into();
    visuals.menu_corner_radius = CornerRadius::same(2);
    visuals.popup_shadow = Shadow::NONE;
    visuals.window_stroke = Stroke::new(0.5, Color32::from_white_alpha(200));
    visuals.selection.bg_fill = PRIMARY_COLOR;
    visuals
}

fn get_app_spacing() -> Spacing {
    let mut spacing = Spacing::default();
    spacing.item_spacing = Vec2::new(4., 6.);
    spacing.window_margin = Margin::ZERO;
    spacing.menu_margin = Margin::same(4);
    spacing
}

/// Chart color with its opacity applied
pub fn rgb_color(rgb: Rgb, opacity: f32) -> Color32 {
    let alpha = (opacity.clamp(0., 1.) * 255.).round() as u8;
    Color32::from_rgba_unmultiplied(rgb.r, rgb.g, rgb.b, alpha)
}

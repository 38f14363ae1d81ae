use egui::{FontDefinitions, FontFamily, epaint::text::FontData};

pub const PHOSPHOR_REGULAR: &str = "phosphor_regular";
pub const PHOSPHOR_FILL: &str = "phosphor_fill";

/// Default fonts plus both phosphor icon variants.
/// The regular variant is also a fallback of the text families so icons can go in labels.
pub fn get_fonts() -> FontDefinitions {
    let mut fonts = FontDefinitions::default();

    for (name, variant) in [
        (PHOSPHOR_REGULAR, egui_phosphor::Variant::Regular),
        (PHOSPHOR_FILL, egui_phosphor::Variant::Fill),
    ] {
        fonts
            .font_data
            .insert(name.into(), FontData::from_static(variant.font_bytes()).into());
        fonts
            .families
            .insert(FontFamily::Name(name.into()), vec![name.into()]);
    }

    for family in [FontFamily::Proportional, FontFamily::Monospace] {
        if let Some(font_keys) = fonts.families.get_mut(&family) {
            font_keys.insert(1, PHOSPHOR_REGULAR.into());
        }
    }

    fonts
}

// SafetyBoard - ui/theme.rs
//
// Maps the core palettes onto egui visuals, plus severity colours, raised
// button styling, and layout constants.
// No dependencies on app state or business logic.

use crate::core::colour::{self, Colour};
use crate::core::model::Severity;
use crate::core::theme::{self as palette, Palette, ThemeState};
use egui::{Color32, Stroke};

/// Convert a core colour into an egui colour.
pub fn to_color32(c: Colour) -> Color32 {
    Color32::from_rgba_unmultiplied(c.r, c.g, c.b, c.a)
}

/// Colour for a severity badge.
pub fn severity_colour(severity: Severity) -> Color32 {
    to_color32(palette::severity_colour(Some(severity)))
}

/// Apply the active palette and font size to the egui context.
pub fn apply(ctx: &egui::Context, theme: &ThemeState, font_size: f32) {
    let p = theme.palette();
    let mut visuals = if theme.is_dark() {
        egui::Visuals::dark()
    } else {
        egui::Visuals::light()
    };

    // Background tones
    visuals.panel_fill = to_color32(p.content_bg);
    visuals.window_fill = to_color32(p.form_bg);
    visuals.extreme_bg_color = to_color32(p.input_bg);
    visuals.faint_bg_color = to_color32(p.form_bg);

    visuals.override_text_color = Some(to_color32(p.text));

    // Inputs
    visuals.widgets.inactive.bg_stroke = Stroke::new(1.0, to_color32(p.input_border));
    visuals.widgets.noninteractive.bg_stroke = Stroke::new(1.0, to_color32(p.section_border));

    visuals.window_stroke = Stroke::new(1.0, to_color32(p.section_border));

    ctx.set_visuals(visuals);

    ctx.style_mut(|style| {
        for (text_style, font) in style.text_styles.iter_mut() {
            font.size = match text_style {
                egui::TextStyle::Heading => font_size * 1.6,
                egui::TextStyle::Small => font_size * 0.8,
                _ => font_size,
            };
        }
    });

    tracing::debug!(dark_mode = theme.is_dark(), font_size, "Theme applied");
}

/// Frame used for the form panel and incident cards.
pub fn card_frame(p: &Palette, accent: Option<Color32>) -> egui::Frame {
    let border = accent.unwrap_or_else(|| to_color32(p.section_border));
    egui::Frame::default()
        .fill(to_color32(p.form_bg))
        .stroke(Stroke::new(1.0, border))
        .corner_radius(CARD_ROUNDING)
        .inner_margin(CARD_PADDING)
}

/// A raised push button in `base` colour.
///
/// The outline uses the derived shadow colour so the button reads as raised
/// in both palettes.
pub fn raised_button(text: &str, base: Colour, text_colour: Color32) -> egui::Button<'static> {
    let shadow = colour::shadow_colour(Some(&base.to_hex()));
    let shadow = Colour::from_hex(&shadow).unwrap_or(base);
    egui::Button::new(egui::RichText::new(text.to_owned()).strong().color(text_colour))
        .fill(to_color32(base))
        .stroke(Stroke::new(2.0, to_color32(shadow)))
        .corner_radius(BUTTON_ROUNDING)
        .min_size(egui::vec2(0.0, BUTTON_HEIGHT))
}

/// Neutral button: white on dark, black on light.
pub fn secondary_button(text: &str, dark_mode: bool) -> egui::Button<'static> {
    if dark_mode {
        raised_button(text, Colour::rgb(0xFF, 0xFF, 0xFF), Color32::BLACK)
    } else {
        raised_button(text, Colour::rgb(0x00, 0x00, 0x00), Color32::WHITE)
    }
}

/// Layout constants.
pub const CARD_ROUNDING: f32 = 8.0;
pub const CARD_PADDING: f32 = 14.0;
pub const BUTTON_ROUNDING: f32 = 8.0;
pub const BUTTON_HEIGHT: f32 = 30.0;
pub const CONTENT_MAX_WIDTH: f32 = 900.0;
pub const CARD_SPACING: f32 = 12.0;

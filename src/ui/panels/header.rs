// SafetyBoard - ui/panels/header.rs
//
// Dashboard title block and the light/dark theme switch.

use crate::app::state::AppState;
use crate::ui::theme;
use crate::util::constants;

/// Render the header row.
pub fn render(ui: &mut egui::Ui, state: &mut AppState) {
    let p = state.theme.palette();
    ui.horizontal(|ui| {
        ui.vertical(|ui| {
            ui.label(
                egui::RichText::new(constants::DASHBOARD_TITLE)
                    .heading()
                    .strong()
                    .color(theme::to_color32(p.header_text)),
            );
            ui.label(
                egui::RichText::new(constants::DASHBOARD_SUBTITLE)
                    .color(theme::to_color32(p.subtext)),
            );
        });

        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
            if theme_switch(ui, state.theme.is_dark()).clicked() {
                state.toggle_theme();
            }
        });
    });
}

/// Pill-shaped on/off switch; knob on the left in dark mode.
fn theme_switch(ui: &mut egui::Ui, dark: bool) -> egui::Response {
    let size = egui::vec2(56.0, 28.0);
    let (rect, response) = ui.allocate_exact_size(size, egui::Sense::click());
    let response = response.on_hover_text(if dark {
        "Switch to light mode"
    } else {
        "Switch to dark mode"
    });

    if ui.is_rect_visible(rect) {
        let how_on = ui.ctx().animate_bool(response.id, !dark);
        let radius = rect.height() / 2.0;
        let (track, border, knob) = if dark {
            (
                egui::Color32::from_rgb(0x1A, 0x1A, 0x1A),
                egui::Color32::from_rgb(0x88, 0x88, 0x88),
                egui::Color32::from_rgb(0xAA, 0xAA, 0xAA),
            )
        } else {
            (
                egui::Color32::from_rgb(0xE0, 0xE0, 0xE0),
                egui::Color32::from_rgb(0x33, 0x33, 0x33),
                egui::Color32::from_rgb(0x33, 0x33, 0x33),
            )
        };
        let painter = ui.painter();
        painter.rect(
            rect,
            radius,
            track,
            egui::Stroke::new(2.0, border),
            egui::StrokeKind::Inside,
        );
        let knob_x = egui::lerp((rect.left() + radius)..=(rect.right() - radius), how_on);
        painter.circle_filled(
            egui::pos2(knob_x, rect.center().y),
            radius * 0.75,
            knob,
        );
    }
    response
}

// SafetyBoard - ui/panels/dialogs.rs
//
// Modal-style windows: delete confirmation and the blocking validation
// notice. Rendered as centred, non-resizable, non-collapsible windows.

use crate::app::state::AppState;
use crate::core::theme::accent;
use crate::ui::theme;

/// Render the delete confirmation dialog (if `state.pending_delete` is set).
pub fn render_delete_confirm(ctx: &egui::Context, state: &mut AppState) {
    let Some(id) = state.pending_delete else {
        return;
    };

    let mut open = true;
    let mut confirmed = false;
    let mut cancelled = false;
    egui::Window::new("Confirm Deletion")
        .open(&mut open)
        .collapsible(false)
        .resizable(false)
        .min_width(320.0)
        .anchor(egui::Align2::CENTER_CENTER, [0.0, 0.0])
        .show(ctx, |ui| {
            ui.add_space(6.0);
            ui.label("Are you sure you want to delete this incident?");
            if let Some(incident) = state.store.get(id) {
                ui.label(egui::RichText::new(incident.title()).strong());
            }
            ui.add_space(10.0);
            ui.horizontal(|ui| {
                if ui
                    .add(theme::raised_button(
                        "Yes, Delete",
                        accent::RED,
                        egui::Color32::WHITE,
                    ))
                    .clicked()
                {
                    confirmed = true;
                }
                if ui
                    .add(theme::raised_button(
                        "Cancel",
                        crate::core::colour::Colour::rgb(0xCC, 0xCC, 0xCC),
                        egui::Color32::from_rgb(0x11, 0x11, 0x11),
                    ))
                    .clicked()
                {
                    cancelled = true;
                }
            });
            ui.add_space(4.0);
        });

    if confirmed {
        state.confirm_delete();
    } else if cancelled || !open {
        state.cancel_delete();
    }
}

/// Render the blocking validation notice (if `state.notice` is set).
pub fn render_notice(ctx: &egui::Context, state: &mut AppState) {
    let Some(message) = state.notice.clone() else {
        return;
    };

    let mut open = true;
    let mut dismissed = false;
    egui::Window::new("Missing Information")
        .open(&mut open)
        .collapsible(false)
        .resizable(false)
        .min_width(300.0)
        .anchor(egui::Align2::CENTER_CENTER, [0.0, 0.0])
        .show(ctx, |ui| {
            ui.add_space(6.0);
            ui.label(message);
            ui.add_space(10.0);
            ui.vertical_centered(|ui| {
                if ui
                    .add(theme::raised_button("OK", accent::BLUE, egui::Color32::WHITE))
                    .clicked()
                {
                    dismissed = true;
                }
            });
        });

    if dismissed || !open {
        state.dismiss_notice();
    }
}

/// Whether a dialog is open that should block the rest of the dashboard.
pub fn is_blocking(state: &AppState) -> bool {
    state.pending_delete.is_some() || state.notice.is_some()
}

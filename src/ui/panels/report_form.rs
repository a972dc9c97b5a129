// SafetyBoard - ui/panels/report_form.rs
//
// "Report New AI Safety Incident" form. Submission goes through
// AppState::submit_form, which owns validation.

use crate::app::state::AppState;
use crate::core::model::Severity;
use crate::core::theme::accent;
use crate::ui::theme;

/// Render the report form (if `state.form.visible` is true).
pub fn render(ui: &mut egui::Ui, state: &mut AppState) {
    if !state.form.visible {
        return;
    }

    let p = state.theme.palette();
    let dark = state.theme.is_dark();
    let mut submit = false;
    let mut cancel = false;

    theme::card_frame(p, None).show(ui, |ui| {
        ui.set_width(ui.available_width());
        ui.label(
            egui::RichText::new("Report New AI Safety Incident")
                .heading()
                .color(theme::to_color32(p.header_text)),
        );
        ui.add_space(8.0);

        ui.label("Title *");
        ui.add(
            egui::TextEdit::singleline(&mut state.form.title)
                .hint_text("Enter incident title")
                .desired_width(f32::INFINITY),
        );
        ui.add_space(6.0);

        ui.label("Description *");
        ui.add(
            egui::TextEdit::multiline(&mut state.form.description)
                .hint_text("Provide details about the incident")
                .desired_rows(4)
                .desired_width(f32::INFINITY),
        );
        ui.add_space(6.0);

        ui.label("Severity *");
        egui::ComboBox::from_id_salt("form_severity")
            .selected_text(state.form.severity.label())
            .show_ui(ui, |ui| {
                for severity in Severity::all() {
                    ui.selectable_value(&mut state.form.severity, *severity, severity.label());
                }
            });

        ui.add_space(10.0);
        ui.horizontal(|ui| {
            if ui.add(theme::secondary_button("Cancel", dark)).clicked() {
                cancel = true;
            }
            if ui
                .add(theme::raised_button(
                    "Submit Incident",
                    accent::EMERALD,
                    egui::Color32::WHITE,
                ))
                .clicked()
            {
                submit = true;
            }
        });
    });

    if cancel {
        state.form.visible = false;
    }
    if submit {
        state.submit_form();
    }
}

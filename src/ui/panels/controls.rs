// SafetyBoard - ui/panels/controls.rs
//
// Severity filter and sort selectors, plus the report-form toggle button.

use crate::app::state::AppState;
use crate::core::model::{SeverityFilter, SortOrder};
use crate::core::theme::accent;
use crate::ui::theme;

/// Render the controls row.
pub fn render(ui: &mut egui::Ui, state: &mut AppState) {
    let subtext = theme::to_color32(state.theme.palette().subtext);

    ui.horizontal(|ui| {
        ui.vertical(|ui| {
            ui.label(egui::RichText::new("Filter by Severity").small().color(subtext));
            let mut filter = state.selection.severity_filter;
            egui::ComboBox::from_id_salt("severity_filter")
                .selected_text(filter.label())
                .show_ui(ui, |ui| {
                    for choice in SeverityFilter::all() {
                        ui.selectable_value(&mut filter, choice, choice.label());
                    }
                });
            state.set_severity_filter(filter);
        });

        ui.add_space(16.0);

        ui.vertical(|ui| {
            ui.label(egui::RichText::new("Sort by Date").small().color(subtext));
            let mut order = state.selection.sort_order;
            egui::ComboBox::from_id_salt("sort_order")
                .selected_text(order.label())
                .show_ui(ui, |ui| {
                    for choice in SortOrder::all() {
                        ui.selectable_value(&mut order, choice, choice.label());
                    }
                });
            state.set_sort_order(order);
        });

        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
            let label = if state.form.visible {
                "Hide Form"
            } else {
                "Report New Incident"
            };
            if ui
                .add(theme::raised_button(label, accent::BLUE, egui::Color32::WHITE))
                .clicked()
            {
                state.form.toggle_visible();
            }
        });
    });
}

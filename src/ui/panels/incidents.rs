// SafetyBoard - ui/panels/incidents.rs
//
// Incident list: heading with count, one card per visible incident.
//
// Card clicks are collected while iterating the (borrowed) visible list and
// applied afterwards, so `state` is never mutably borrowed while an
// `&Incident` from the store is alive.

use crate::app::state::AppState;
use crate::core::model::Incident;
use crate::core::theme::{accent, Palette};
use crate::ui::theme;
use crate::util::constants;

/// A click on a card, applied after rendering.
enum CardAction {
    ToggleDetails(u64),
    RequestDelete(u64),
}

/// Render the incident list.
pub fn render(ui: &mut egui::Ui, state: &mut AppState) {
    let p = state.theme.palette();
    let dark = state.theme.is_dark();
    let mut actions: Vec<CardAction> = Vec::new();

    let visible = state.visible();
    ui.label(
        egui::RichText::new(format!(
            "{} ({})",
            state.selection.severity_filter.heading(),
            visible.len()
        ))
        .heading()
        .color(theme::to_color32(p.header_text)),
    );
    ui.add_space(6.0);

    if visible.is_empty() {
        ui.label(
            egui::RichText::new("No incidents match your current filter.")
                .italics()
                .color(theme::to_color32(p.subtext)),
        );
    }

    for incident in &visible {
        let expanded = state.is_expanded(incident.id());
        if let Some(action) = card(ui, incident, p, dark, expanded) {
            actions.push(action);
        }
        ui.add_space(theme::CARD_SPACING);
    }

    for action in actions {
        match action {
            CardAction::ToggleDetails(id) => state.toggle_expanded(id),
            CardAction::RequestDelete(id) => state.request_delete(id),
        }
    }
}

fn card(
    ui: &mut egui::Ui,
    incident: &Incident,
    p: &Palette,
    dark: bool,
    expanded: bool,
) -> Option<CardAction> {
    let mut action = None;
    let severity_colour = theme::severity_colour(incident.severity());

    theme::card_frame(p, Some(severity_colour.gamma_multiply(0.6))).show(ui, |ui| {
        ui.set_width(ui.available_width());

        ui.horizontal(|ui| {
            ui.label(
                egui::RichText::new(incident.title())
                    .size(17.0)
                    .strong()
                    .color(theme::to_color32(p.header_text)),
            );
            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                ui.label(
                    egui::RichText::new(format!(" {} ", incident.severity().label()))
                        .strong()
                        .color(egui::Color32::WHITE)
                        .background_color(severity_colour),
                );
            });
        });

        let reported = incident
            .reported_at()
            .with_timezone(&chrono::Local)
            .format(constants::REPORTED_AT_FORMAT)
            .to_string();
        ui.horizontal(|ui| {
            let meta = theme::to_color32(p.subtext);
            ui.label(egui::RichText::new(format!("ID: {}", incident.id())).small().color(meta));
            ui.add_space(12.0);
            ui.label(egui::RichText::new(format!("Reported: {reported}")).small().color(meta));
        });

        if expanded {
            ui.add_space(8.0);
            ui.label(egui::RichText::new(incident.description()).color(theme::to_color32(p.text)));
        }

        ui.add_space(8.0);
        ui.horizontal(|ui| {
            let label = if expanded { "Hide Details" } else { "View Details" };
            if ui.add(theme::secondary_button(label, dark)).clicked() {
                action = Some(CardAction::ToggleDetails(incident.id()));
            }
            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                if ui
                    .add(theme::raised_button(
                        "\u{1f5d1}",
                        accent::RED,
                        egui::Color32::WHITE,
                    ))
                    .on_hover_text("Delete incident")
                    .clicked()
                {
                    action = Some(CardAction::RequestDelete(incident.id()));
                }
            });
        });
    });

    action
}

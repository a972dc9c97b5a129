// SafetyBoard - gui.rs
//
// Top-level eframe::App implementation.
// Wires together all UI panels, owns the application state, and drives the
// decorative particle background.

use crate::app::state::{AppState, ExportFormat};
use crate::ui;
use crate::ui::particles::ParticleField;

/// The SafetyBoard application.
pub struct SafetyBoardApp {
    pub state: AppState,
    particles: ParticleField,
    font_size: f32,
    /// Palette last pushed into egui (None until the first frame).
    applied_dark_mode: Option<bool>,
}

impl SafetyBoardApp {
    /// Create a new application instance with the given state.
    pub fn new(state: AppState, particle_count: usize, font_size: f32) -> Self {
        let mut rng = rand::thread_rng();
        Self {
            state,
            particles: ParticleField::new(&mut rng, particle_count, 1200.0, 800.0),
            font_size,
            applied_dark_mode: None,
        }
    }

    fn copy_visible(&mut self, ctx: &egui::Context, format: ExportFormat) {
        match self.state.export_visible(format) {
            Ok(text) => {
                let n = self.state.visible().len();
                ctx.copy_text(text);
                self.state.status_message =
                    format!("Copied {n} incident(s) to clipboard as {}.", format.label());
            }
            Err(e) => {
                tracing::error!(error = %e, format = format.label(), "Clipboard export failed");
                self.state.status_message = format!("Copy failed: {e}");
            }
        }
    }
}

impl eframe::App for SafetyBoardApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // Re-apply visuals only when the palette actually changed.
        let dark = self.state.theme.is_dark();
        if self.applied_dark_mode != Some(dark) {
            ui::theme::apply(ctx, &self.state.theme, self.font_size);
            self.applied_dark_mode = Some(dark);
        }

        let blocking = ui::panels::dialogs::is_blocking(&self.state);

        // Top menu bar
        egui::TopBottomPanel::top("menu_bar").show(ctx, |ui| {
            ui.add_enabled_ui(!blocking, |ui| {
                egui::menu::bar(ui, |ui| {
                    ui.menu_button("File", |ui| {
                        if ui.button("Report New Incident\u{2026}").clicked() {
                            self.state.form.visible = true;
                            ui.close_menu();
                        }
                        ui.separator();
                        if ui.button("Exit").clicked() {
                            ctx.send_viewport_cmd(egui::ViewportCommand::Close);
                        }
                    });
                    ui.menu_button("Edit", |ui| {
                        let has_visible = !self.state.visible().is_empty();
                        ui.add_enabled_ui(has_visible, |ui| {
                            if ui.button("Copy Visible as CSV").clicked() {
                                self.copy_visible(ctx, ExportFormat::Csv);
                                ui.close_menu();
                            }
                            if ui.button("Copy Visible as JSON").clicked() {
                                self.copy_visible(ctx, ExportFormat::Json);
                                ui.close_menu();
                            }
                        });
                    });
                    ui.menu_button("View", |ui| {
                        let theme_label = if self.state.theme.is_dark() {
                            "Light Mode"
                        } else {
                            "Dark Mode"
                        };
                        if ui.button(theme_label).clicked() {
                            self.state.toggle_theme();
                            ui.close_menu();
                        }
                        if ui
                            .checkbox(&mut self.state.particles_enabled, "Particle Background")
                            .changed()
                        {
                            tracing::debug!(
                                enabled = self.state.particles_enabled,
                                "Particle background toggled"
                            );
                        }
                    });
                });
            });
        });

        // Status bar
        egui::TopBottomPanel::bottom("status_bar").show(ctx, |ui| {
            ui.horizontal(|ui| {
                ui.label(&self.state.status_message);
                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    let total = self.state.store.len();
                    let visible = self.state.visible().len();
                    ui.label(format!("{visible}/{total} incidents"));
                });
            });
        });

        // Central dashboard with the particle field painted underneath.
        let background = ui::theme::to_color32(self.state.theme.palette().background);
        egui::CentralPanel::default()
            .frame(egui::Frame::central_panel(&ctx.style()).fill(background))
            .show(ctx, |ui| {
                if self.state.particles_enabled {
                    let rect = ui.max_rect();
                    let painter = ui.painter_at(rect);
                    self.particles.paint(&painter, rect);
                    self.particles.step();
                }

                ui.add_enabled_ui(!blocking, |ui| {
                    egui::ScrollArea::vertical()
                        .auto_shrink([false; 2])
                        .show(ui, |ui| {
                            let side =
                                ((ui.available_width() - ui::theme::CONTENT_MAX_WIDTH) / 2.0)
                                    .max(0.0);
                            ui.horizontal(|ui| {
                                ui.add_space(side);
                                ui.vertical(|ui| {
                                    ui.set_max_width(ui::theme::CONTENT_MAX_WIDTH);
                                    ui::panels::header::render(ui, &mut self.state);
                                    ui.add_space(16.0);
                                    ui::panels::controls::render(ui, &mut self.state);
                                    ui.add_space(12.0);
                                    ui::panels::report_form::render(ui, &mut self.state);
                                    ui.add_space(12.0);
                                    ui::panels::incidents::render(ui, &mut self.state);
                                });
                            });
                        });
                });
            });

        // Dialogs (modal-ish)
        ui::panels::dialogs::render_delete_confirm(ctx, &mut self.state);
        ui::panels::dialogs::render_notice(ctx, &mut self.state);

        // The background animates continuously while enabled.
        if self.state.particles_enabled {
            ctx.request_repaint();
        }
    }
}

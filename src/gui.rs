// X3dPrefs - gui.rs
//
// Top-level eframe::App implementation.
// Wires together the menu bar, status bar, and dialog windows.

use crate::app::dialog::OptionsPane;
use crate::app::state::AppState;
use crate::ui;

/// The X3D-Edit preferences application.
pub struct PrefsApp {
    pub state: AppState,
    font_size: f32,
    applied_dark_mode: Option<bool>,
}

impl PrefsApp {
    /// Create a new application instance with the given state.
    pub fn new(state: AppState, font_size: f32) -> Self {
        Self {
            state,
            font_size,
            applied_dark_mode: None,
        }
    }
}

impl eframe::App for PrefsApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        if self.applied_dark_mode != Some(self.state.dark_mode) {
            ui::theme::apply(ctx, self.state.dark_mode, self.font_size);
            self.applied_dark_mode = Some(self.state.dark_mode);
        }

        // Top menu bar
        egui::TopBottomPanel::top("menu_bar").show(ctx, |ui| {
            egui::menu::bar(ui, |ui| {
                ui.menu_button("File", |ui| {
                    if ui.button("Filter CAD Scene\u{2026}").clicked() {
                        if let Some(path) = rfd::FileDialog::new()
                            .add_filter("X3D", &["x3d", "x3dv", "x3db", "wrl"])
                            .pick_file()
                        {
                            self.state.open_cad_filter(path);
                        }
                        ui.close_menu();
                    }
                    let prefs_path = self.state.prefs_path.clone();
                    ui.add_enabled_ui(prefs_path.is_some(), |ui| {
                        if ui.button("Show Preference File").clicked() {
                            if let Some(ref path) = prefs_path {
                                crate::platform::fs::reveal_in_file_manager(path);
                            }
                            ui.close_menu();
                        }
                    });
                    ui.separator();
                    if ui.button("Exit").clicked() {
                        ctx.send_viewport_cmd(egui::ViewportCommand::Close);
                    }
                });
                ui.menu_button("Edit", |ui| {
                    if ui.button("Options\u{2026}").clicked() {
                        self.state.open_options();
                        ui.close_menu();
                    }
                    ui.menu_button("Options Pane", |ui| {
                        for pane in OptionsPane::ALL {
                            if ui.button(pane.label()).clicked() {
                                self.state.preferred_pane = Some(pane);
                                self.state.open_options();
                                ui.close_menu();
                            }
                        }
                    });
                });
                ui.menu_button("View", |ui| {
                    let label = if self.state.dark_mode {
                        "Light Theme"
                    } else {
                        "Dark Theme"
                    };
                    if ui.button(label).clicked() {
                        self.state.dark_mode = !self.state.dark_mode;
                        ui.close_menu();
                    }
                });
                ui.menu_button("Help", |ui| {
                    if ui.button("About").clicked() {
                        self.state.show_about = true;
                        ui.close_menu();
                    }
                });
            });
        });

        // Status bar
        egui::TopBottomPanel::bottom("status_bar").show(ctx, |ui| {
            ui.horizontal(|ui| {
                ui.label(&self.state.status_message);
                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    ui.label(
                        egui::RichText::new(self.state.prefs.platform().to_string())
                            .color(ui::theme::STATUS_TEXT),
                    );
                });
            });
        });

        // Central panel: a short overview and any startup warnings.
        egui::CentralPanel::default().show(ctx, |ui| {
            ui.heading(crate::util::constants::APP_NAME);
            ui.add_space(6.0);
            ui.label(format!(
                "{} stored values in {}",
                self.state.prefs.stored_keys().len(),
                self.state.prefs.namespace()
            ));
            if let Some(ref target) = self.state.filter_target {
                ui.label(format!("Last CAD filter output: {}", target.display()));
            }
            ui.add_space(10.0);
            ui.horizontal(|ui| {
                if ui.button("Options\u{2026}").clicked() {
                    self.state.open_options();
                }
            });
            if !self.state.warnings.is_empty() {
                ui.add_space(10.0);
                ui.separator();
                ui.label(egui::RichText::new("Configuration warnings").strong());
                for warning in &self.state.warnings {
                    ui.label(egui::RichText::new(warning).small().weak());
                }
            }
        });

        // Dialogs
        ui::panels::options::render(ctx, &mut self.state);
        ui::panels::cad_filter::render(ctx, &mut self.state);
        ui::panels::about::render(ctx, &mut self.state);
        ui::panels::error::render(ctx, &mut self.state);
    }
}

// X3dPrefs - ui/panels/about.rs
//
// About dialog: shown from Help > About in the menu bar.
// Rendered as a centred, non-resizable, non-collapsible modal window.

use crate::app::state::AppState;
use crate::util::constants::{APP_NAME, APP_VERSION};

const PROJECT_URL: &str = "https://www.web3d.org/x3d/tools/X3dEdit";

/// Render the About dialog (if `state.show_about` is true).
pub fn render(ctx: &egui::Context, state: &mut AppState) {
    if !state.show_about {
        return;
    }

    let mut open = true;
    egui::Window::new(format!("About {APP_NAME}"))
        .open(&mut open)
        .collapsible(false)
        .resizable(false)
        .min_width(360.0)
        .anchor(egui::Align2::CENTER_CENTER, [0.0, 0.0])
        .show(ctx, |ui| {
            ui.add_space(8.0);

            ui.vertical_centered(|ui| {
                ui.label(egui::RichText::new(APP_NAME).size(26.0).strong());
                ui.add_space(4.0);
                ui.label(egui::RichText::new(format!("v{APP_VERSION}")).size(14.0).weak());
            });

            ui.add_space(12.0);
            ui.separator();
            ui.add_space(8.0);

            ui.vertical_centered(|ui| {
                ui.label("Options for the X3D-Edit authoring environment:");
                ui.label("external tools, visualization, and the CAD filter.");
            });

            ui.add_space(10.0);

            ui.vertical_centered(|ui| {
                ui.hyperlink_to(PROJECT_URL, PROJECT_URL);
            });

            ui.add_space(8.0);
            ui.separator();
            ui.add_space(6.0);

            ui.vertical_centered(|ui| {
                if let Some(ref path) = state.prefs_path {
                    ui.label(
                        egui::RichText::new(format!("Preferences: {}", path.display()))
                            .small()
                            .weak(),
                    );
                } else {
                    ui.label(egui::RichText::new("Preferences are not saved to disk").small().weak());
                }
                ui.label(
                    egui::RichText::new(format!("Defaults for: {}", state.prefs.platform()))
                        .small()
                        .weak(),
                );
                ui.label(egui::RichText::new("Built with Rust & egui").small().weak());
            });

            ui.add_space(8.0);
        });

    if !open {
        state.show_about = false;
    }
}

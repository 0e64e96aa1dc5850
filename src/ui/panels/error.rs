// X3dPrefs - ui/panels/error.rs
//
// Blocking error window for the single pending error, if any.

use crate::app::state::AppState;
use crate::ui::theme;

pub fn render(ctx: &egui::Context, state: &mut AppState) {
    let Some(pending) = state.errors.pending().cloned() else {
        return;
    };

    let mut acknowledged = false;
    egui::Window::new(egui::RichText::new(&pending.title).color(theme::ERROR_TITLE))
        .id(egui::Id::new("error_dialog"))
        .collapsible(false)
        .resizable(false)
        .anchor(egui::Align2::CENTER_CENTER, [0.0, 0.0])
        .show(ctx, |ui| {
            ui.set_max_width(420.0);
            ui.label(&pending.message);
            ui.add_space(8.0);
            ui.vertical_centered(|ui| {
                if ui.button("OK").clicked() {
                    acknowledged = true;
                }
            });
        });

    if acknowledged {
        state.errors.acknowledge();
    }
}

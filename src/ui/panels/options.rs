// X3dPrefs - ui/panels/options.rs
//
// Options dialog: the Miscellaneous, External Tools, and CAD Filter panes.
// Shown when the user opens Edit > Options... from the menu bar.
//
// "Complete" stores every pane; the dialog stays open if any numeric
// field was rejected. Closing the window with its close box stores nothing.

use crate::app::dialog::OptionsPane;
use crate::app::state::AppState;
use crate::ui::panels::{cad_filter, misc, tools};
use crate::ui::theme::{OPTIONS_MAX_HEIGHT, OPTIONS_WIDTH};

/// Render the Options dialog (if one is open).
pub fn render(ctx: &egui::Context, state: &mut AppState) {
    let AppState { options, prefs, .. } = state;
    let Some(dialog) = options.as_mut() else {
        return;
    };

    let mut open = true;
    let mut complete = false;
    egui::Window::new("Options")
        .open(&mut open)
        .collapsible(false)
        .resizable(true)
        .default_width(OPTIONS_WIDTH)
        .show(ctx, |ui| {
            ui.horizontal(|ui| {
                for pane in OptionsPane::ALL {
                    ui.selectable_value(&mut dialog.pane, pane, pane.label());
                }
            });
            ui.separator();

            egui::ScrollArea::vertical()
                .max_height(OPTIONS_MAX_HEIGHT)
                .auto_shrink([false, true])
                .show(ui, |ui| match dialog.pane {
                    OptionsPane::Miscellaneous => misc::render(ui, &mut dialog.misc, prefs),
                    OptionsPane::ExternalTools => tools::render(ui, &mut dialog.tools, prefs),
                    OptionsPane::CadFilter => cad_filter::render_form(ui, &mut dialog.cad, prefs),
                });

            ui.add_space(6.0);
            ui.separator();
            ui.label(
                egui::RichText::new(
                    "Complete stores every pane. Closing the window discards unsaved edits.",
                )
                .small()
                .italics()
                .weak(),
            );
            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                if ui.button("Complete").clicked() {
                    complete = true;
                }
            });
        });

    if complete {
        state.complete_options();
    } else if !open {
        state.close_options();
    }
}

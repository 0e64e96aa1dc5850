// X3dPrefs - ui/panels/cad_filter.rs
//
// CAD filter form, shown both as a pane of the options dialog and as its
// own dialog before filtering a scene file ("Save As" / "Cancel").

use crate::app::state::AppState;
use crate::core::cad_filter::{
    CadFilterForm, CadToggle, FilterMode, QUANTIZATION_LABEL, SCALE_FACTOR_LABEL,
};
use crate::core::form::ComboField;
use crate::core::registry::Preferences;
use crate::ui::theme::NUMBER_FIELD_WIDTH;

/// Render the CAD filter form.
pub fn render_form(ui: &mut egui::Ui, form: &mut CadFilterForm, prefs: &mut Preferences) {
    egui::Grid::new("cad_combos")
        .num_columns(2)
        .spacing([12.0, 4.0])
        .show(ui, |ui| {
            ui.label("X3D version:");
            combo(ui, "cad_version", &mut form.x3d_version);
            ui.end_row();

            ui.label("Log level:");
            combo(ui, "cad_log_level", &mut form.log_level);
            ui.end_row();

            ui.label("Binary compression:");
            combo(ui, "cad_compression", &mut form.binary_compression);
            ui.end_row();
        });

    ui.add_space(6.0);
    ui.horizontal(|ui| {
        let mut mode = form.mode();
        ui.radio_value(&mut mode, FilterMode::Identity, "Identity (no filtering)");
        ui.radio_value(&mut mode, FilterMode::CadFilters, "Apply CAD filters");
        form.set_mode(mode);
    });

    ui.add_space(4.0);
    let numeric = form.numeric_fields_enabled();
    ui.horizontal(|ui| {
        ui.add_enabled(numeric, egui::Label::new(format!("{SCALE_FACTOR_LABEL}:")));
        ui.add_enabled(
            numeric,
            egui::TextEdit::singleline(&mut form.abs_scale_factor).desired_width(NUMBER_FIELD_WIDTH),
        );
        ui.add_enabled(numeric, egui::Label::new(format!("{QUANTIZATION_LABEL}:")));
        ui.add_enabled(
            numeric,
            egui::TextEdit::singleline(&mut form.float_quantization)
                .desired_width(NUMBER_FIELD_WIDTH),
        );
    });

    ui.add_space(4.0);
    egui::Grid::new("cad_toggles")
        .num_columns(2)
        .spacing([16.0, 2.0])
        .show(ui, |ui| {
            for (i, toggle) in CadToggle::ALL.into_iter().enumerate() {
                let enabled = form.is_toggle_enabled(toggle);
                ui.add_enabled(enabled, egui::Checkbox::new(form.toggle_mut(toggle), toggle.label()));
                if i % 2 == 1 {
                    ui.end_row();
                }
            }
        });

    ui.add_space(6.0);
    if ui
        .small_button("Reset")
        .on_hover_text("Restore every CAD filter option to its default")
        .clicked()
    {
        form.reset_all(prefs);
    }
}

fn combo(ui: &mut egui::Ui, id: &str, field: &mut ComboField) {
    let options = field.options();
    let mut index = field.selected_index();
    egui::ComboBox::from_id_salt(id)
        .selected_text(field.value())
        .show_index(ui, &mut index, options.len(), |i| options[i]);
    field.set_selected_index(index);
}

/// Render the standalone CAD filter dialog (if one is open).
pub fn render(ctx: &egui::Context, state: &mut AppState) {
    let AppState {
        cad_dialog, prefs, ..
    } = state;
    let Some(dialog) = cad_dialog.as_mut() else {
        return;
    };

    let mut open = true;
    let mut save = false;
    let mut cancel = false;
    let title = format!(
        "CAD Filter: {}",
        dialog
            .source()
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default()
    );
    egui::Window::new(title)
        .open(&mut open)
        .collapsible(false)
        .resizable(false)
        .anchor(egui::Align2::CENTER_CENTER, [0.0, 0.0])
        .show(ctx, |ui| {
            render_form(ui, &mut dialog.form, prefs);
            ui.add_space(8.0);
            ui.separator();
            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                if ui.button("Cancel").clicked() {
                    cancel = true;
                }
                if ui.button("Save As\u{2026}").clicked() {
                    save = true;
                }
            });
        });

    if save {
        if let Some(suggested) = state.save_cad_filter() {
            let mut picker = rfd::FileDialog::new().add_filter("X3D", &["x3d", "x3dv", "x3db"]);
            if let Some(dir) = suggested.parent() {
                picker = picker.set_directory(dir);
            }
            if let Some(name) = suggested.file_name() {
                picker = picker.set_file_name(name.to_string_lossy());
            }
            state.finish_cad_filter(picker.save_file());
        }
    } else if cancel || !open {
        state.cancel_cad_filter();
    }
}

// X3dPrefs - ui/panels/misc.rs
//
// Miscellaneous pane of the options dialog: newline handling,
// auto-validation, and visualization colours.

use crate::core::misc_options::{ColorFields, MiscOptionsForm};
use crate::core::registry::Preferences;
use crate::ui::theme::NUMBER_FIELD_WIDTH;

/// Render the miscellaneous form. Reset buttons act on `prefs` immediately.
pub fn render(ui: &mut egui::Ui, form: &mut MiscOptionsForm, prefs: &mut Preferences) {
    // =========================================================
    // Section 1: Editing
    // =========================================================
    ui.heading("Editing");
    ui.add_space(4.0);
    ui.checkbox(&mut form.newline.show_option, "Show newline option when inserting elements");
    ui.add_enabled_ui(form.newline.show_option, |ui| {
        ui.indent("newline_options", |ui| {
            ui.checkbox(&mut form.newline.prepend, "Prepend newline");
            ui.checkbox(&mut form.newline.append, "Append newline");
        });
    });
    ui.horizontal(|ui| {
        ui.checkbox(&mut form.auto_validate, "Validate scenes automatically on open");
        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
            if ui
                .small_button("Reset")
                .on_hover_text("Restore the newline options to their defaults")
                .clicked()
            {
                form.reset_newline(prefs);
            }
        });
    });

    ui.add_space(10.0);
    ui.separator();
    ui.add_space(6.0);

    // =========================================================
    // Section 2: Visualization
    // =========================================================
    ui.heading("Visualization");
    ui.add_space(4.0);
    ui.checkbox(&mut form.visualize.coordinate_axes, "Show coordinate axes");
    ui.checkbox(&mut form.visualize.center_line, "Show center line");
    egui::Grid::new("visualize_grid")
        .num_columns(2)
        .spacing([12.0, 4.0])
        .show(ui, |ui| {
            ui.label("Cone lines:");
            ui.add(egui::TextEdit::singleline(&mut form.visualize.cone_lines).desired_width(NUMBER_FIELD_WIDTH));
            ui.end_row();

            ui.label("Line color (RGB):");
            color_row(ui, &mut form.visualize.line_color);
            ui.end_row();

            ui.label("Shape color (RGB):");
            color_row(ui, &mut form.visualize.shape_color);
            ui.end_row();

            ui.label("Transparency:");
            ui.add(egui::TextEdit::singleline(&mut form.visualize.transparency).desired_width(NUMBER_FIELD_WIDTH));
            ui.end_row();
        });
    ui.horizontal(|ui| {
        ui.label(egui::RichText::new("Colour components range from 0 to 1.").small().weak());
        if ui
            .small_button("Reset")
            .on_hover_text("Restore line colour, shape colour, and transparency")
            .clicked()
        {
            form.reset_visualize(prefs);
        }
    });

    ui.add_space(10.0);
    ui.separator();
    ui.add_space(6.0);

    // =========================================================
    // Section 3: HAnim
    // =========================================================
    ui.heading("HAnim Visualization");
    ui.add_space(4.0);
    ui.checkbox(&mut form.hanim.coordinate_axes, "Show joint coordinate axes");
    egui::Grid::new("hanim_grid")
        .num_columns(2)
        .spacing([12.0, 4.0])
        .show(ui, |ui| {
            ui.label("Joint color (RGB):");
            color_row(ui, &mut form.hanim.joint_color);
            ui.end_row();

            ui.label("Segment color (RGB):");
            color_row(ui, &mut form.hanim.segment_color);
            ui.end_row();

            ui.label("Site color (RGB):");
            color_row(ui, &mut form.hanim.site_color);
            ui.end_row();
        });
    if ui
        .small_button("Reset")
        .on_hover_text("Restore the HAnim colours")
        .clicked()
    {
        form.reset_hanim(prefs);
    }
}

fn color_row(ui: &mut egui::Ui, color: &mut ColorFields) {
    ui.horizontal(|ui| {
        for channel in color.rgb.iter_mut() {
            ui.add(egui::TextEdit::singleline(channel).desired_width(NUMBER_FIELD_WIDTH));
        }
    });
}

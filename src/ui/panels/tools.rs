// X3dPrefs - ui/panels/tools.rs
//
// External Tools pane of the options dialog. One collapsible section per
// tool category; each row shows the path, its status on this machine, and
// the auto-launch switch.

use crate::core::defaults::ToolCategory;
use crate::core::external_tools::{ExternalToolsForm, ToolRow};
use crate::core::registry::Preferences;
use crate::platform::fs::tool_path_status;
use crate::ui::theme::{self, NUMBER_FIELD_WIDTH, PATH_FIELD_WIDTH};

/// Render the external tools form.
pub fn render(ui: &mut egui::Ui, form: &mut ExternalToolsForm, prefs: &Preferences) {
    ui.horizontal(|ui| {
        ui.label("Delay between launches:");
        ui.add(egui::TextEdit::singleline(&mut form.launch_interval).desired_width(NUMBER_FIELD_WIDTH));
        ui.label("seconds");
    });
    ui.label(
        egui::RichText::new(format!("Defaults shown for {}.", prefs.platform()))
            .small()
            .weak(),
    );
    ui.add_space(6.0);

    let mut restore = None;
    for category in ToolCategory::ALL {
        egui::CollapsingHeader::new(category.label())
            .default_open(category == ToolCategory::X3dPlayer)
            .show(ui, |ui| {
                for row in form.rows.iter_mut().filter(|r| r.tool.category() == category) {
                    if render_row(ui, row) {
                        restore = Some(row.tool);
                    }
                    ui.add_space(4.0);
                }
            });
    }
    if let Some(tool) = restore {
        form.restore_default(tool, prefs);
    }

    ui.add_space(10.0);
    ui.separator();
    ui.add_space(6.0);

    ui.heading("Security");
    ui.add_space(4.0);
    ui.horizontal(|ui| {
        ui.label("Keystore:");
        ui.add(egui::TextEdit::singleline(&mut form.keystore_path).desired_width(PATH_FIELD_WIDTH));
        if ui.small_button("Browse\u{2026}").clicked() {
            let start = crate::platform::host::security_dir();
            if let Some(path) = rfd::FileDialog::new().set_directory(start).pick_file() {
                form.keystore_path = path.display().to_string();
            }
        }
    });
}

/// One tool row. Returns true when the user asked for the default path.
fn render_row(ui: &mut egui::Ui, row: &mut ToolRow) -> bool {
    let mut wants_default = false;
    let status = tool_path_status(&row.path);

    ui.horizontal(|ui| {
        ui.label(egui::RichText::new(row.label().to_string()).strong());
        ui.label(
            egui::RichText::new(status.label())
                .small()
                .color(theme::path_status_colour(status)),
        );
        if let Some(url) = row.tool.help_site() {
            ui.hyperlink_to("help", url);
        }
        ui.hyperlink_to("download", row.tool.download_site());
    });
    ui.horizontal(|ui| {
        ui.add(egui::TextEdit::singleline(&mut row.path).desired_width(PATH_FIELD_WIDTH));
        if ui.small_button("Browse\u{2026}").clicked() {
            if let Some(path) = rfd::FileDialog::new().pick_file() {
                row.path = path.display().to_string();
            }
        }
        if ui
            .small_button("Default")
            .on_hover_text("Restore the default location for this platform")
            .clicked()
        {
            wants_default = true;
        }
        if let Some(ref mut auto) = row.auto_launch {
            ui.checkbox(auto, "Auto-launch");
        }
    });
    if let Some(ref mut name) = row.name {
        ui.horizontal(|ui| {
            ui.label("Name:");
            ui.text_edit_singleline(name);
        });
    }
    if let Some(ref mut switch) = row.switch {
        ui.horizontal(|ui| {
            ui.label("Switches:");
            ui.text_edit_singleline(switch);
        });
    }
    wants_default
}

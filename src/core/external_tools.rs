// X3dPrefs - core/external_tools.rs
//
// View-model of the external tools form.
//
// One row per known tool, grouped by category for display. Paths and
// names are free text and always saved; the launch interval is the only
// numeric field and follows the shared partial-commit policy.

use super::defaults::{Tool, ToolCategory};
use super::form::{DialogHost, NumberRule, SaveReport};
use super::keys::PrefKey;
use super::registry::Preferences;

pub const LAUNCH_INTERVAL_LABEL: &str = "Launch interval (seconds)";

/// Editable settings of one tool.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ToolRow {
    pub tool: Tool,
    pub path: String,
    /// `None` when the tool has no auto-launch option.
    pub auto_launch: Option<bool>,
    /// Display name, only for user-defined tools.
    pub name: Option<String>,
    /// Extra command-line switches, only for user-defined tools.
    pub switch: Option<String>,
}

impl ToolRow {
    fn load(prefs: &Preferences, tool: Tool) -> Self {
        Self {
            tool,
            path: prefs.tool_path(tool),
            auto_launch: tool.autolaunch_key().map(|key| prefs.get(key)),
            name: prefs.tool_name(tool),
            switch: prefs.tool_switch(tool),
        }
    }

    fn commit(&self, prefs: &mut Preferences) {
        prefs.set_tool_path(self.tool, &self.path);
        if let Some(enabled) = self.auto_launch {
            prefs.set_auto_launch(self.tool, enabled);
        }
        if let (Some(key), Some(name)) = (self.tool.name_key(), &self.name) {
            prefs.set(key, name.clone());
        }
        if let (Some(key), Some(switch)) = (self.tool.switch_key(), &self.switch) {
            prefs.set(key, switch.clone());
        }
    }

    /// Label shown in the form: the user's name for "other" tools.
    pub fn label(&self) -> &str {
        self.name
            .as_deref()
            .filter(|n| !n.trim().is_empty())
            .unwrap_or(self.tool.display_name())
    }
}

/// Editable state of the external tools form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExternalToolsForm {
    pub rows: Vec<ToolRow>,
    pub launch_interval: String,
    pub keystore_path: String,
}

impl ExternalToolsForm {
    pub fn load(prefs: &Preferences) -> Self {
        Self {
            rows: Tool::ALL.iter().map(|&t| ToolRow::load(prefs, t)).collect(),
            launch_interval: prefs.get(PrefKey::LaunchInterval),
            keystore_path: prefs.get(PrefKey::KeystorePath),
        }
    }

    pub fn save(&self, prefs: &mut Preferences, host: &mut dyn DialogHost) -> SaveReport {
        let report = self.commit(prefs);
        report.notify(host);
        report
    }

    pub(crate) fn commit(&self, prefs: &mut Preferences) -> SaveReport {
        let mut report = SaveReport::new();
        report.commit_number(
            prefs,
            PrefKey::LaunchInterval,
            LAUNCH_INTERVAL_LABEL,
            &self.launch_interval,
            NumberRule::Count,
        );
        for row in &self.rows {
            row.commit(prefs);
        }
        prefs.set(PrefKey::KeystorePath, self.keystore_path.clone());

        tracing::info!(
            tools = self.rows.len(),
            rejected = report.rejected_labels().len(),
            "External tool settings saved"
        );
        report
    }

    pub fn row(&self, tool: Tool) -> Option<&ToolRow> {
        self.rows.iter().find(|r| r.tool == tool)
    }

    pub fn row_mut(&mut self, tool: Tool) -> Option<&mut ToolRow> {
        self.rows.iter_mut().find(|r| r.tool == tool)
    }

    /// Rows of one category, in catalogue order.
    pub fn rows_in(&self, category: ToolCategory) -> impl Iterator<Item = &ToolRow> {
        self.rows.iter().filter(move |r| r.tool.category() == category)
    }

    /// Put the platform default back into a row's path field.
    ///
    /// Only the form changes; the stored value is replaced on save.
    pub fn restore_default(&mut self, tool: Tool, prefs: &Preferences) {
        let default = prefs.platform_defaults().path(tool).to_string();
        if let Some(row) = self.row_mut(tool) {
            tracing::debug!(tool = %tool, path = %default, "Tool path restored to default");
            row.path = default;
        }
    }
}

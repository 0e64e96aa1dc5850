// X3dPrefs - app/dialog.rs
//
// Modal dialog flows around the preference forms.
//
// A dialog loads its forms when opened and touches the registry only when
// the user commits. Closing a dialog any other way simply drops the form
// state. Errors raised while committing go through `ErrorQueue`, which the
// GUI renders as a blocking error window.

use crate::core::cad_filter::CadFilterForm;
use crate::core::external_tools::ExternalToolsForm;
use crate::core::form::{DialogHost, SaveReport};
use crate::core::misc_options::MiscOptionsForm;
use crate::core::registry::Preferences;
use crate::util::constants::CAD_FILTERED_SUFFIX;
use std::path::{Path, PathBuf};

// =============================================================================
// Options dialog
// =============================================================================

/// Tabs of the options dialog.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OptionsPane {
    Miscellaneous,
    ExternalTools,
    CadFilter,
}

impl OptionsPane {
    pub const ALL: [OptionsPane; 3] = [Self::Miscellaneous, Self::ExternalTools, Self::CadFilter];

    pub fn label(self) -> &'static str {
        match self {
            Self::Miscellaneous => "Miscellaneous",
            Self::ExternalTools => "External Tools",
            Self::CadFilter => "CAD Filter",
        }
    }

    /// Pane for a numeric tab index; negative or out of range means none.
    pub fn from_index(index: i32) -> Option<Self> {
        usize::try_from(index)
            .ok()
            .and_then(|i| Self::ALL.get(i).copied())
    }
}

/// Open options dialog with an editable copy of every form.
#[derive(Debug, Clone)]
pub struct OptionsDialog {
    pub pane: OptionsPane,
    pub misc: MiscOptionsForm,
    pub tools: ExternalToolsForm,
    pub cad: CadFilterForm,
}

impl OptionsDialog {
    /// Load every form. `preferred` selects the first pane shown.
    pub fn open(prefs: &Preferences, preferred: Option<OptionsPane>) -> Self {
        let pane = preferred.unwrap_or(OptionsPane::Miscellaneous);
        tracing::debug!(pane = ?pane, "Options dialog opened");
        Self {
            pane,
            misc: MiscOptionsForm::load(prefs),
            tools: ExternalToolsForm::load(prefs),
            cad: CadFilterForm::load(prefs),
        }
    }

    /// Store every form. Rejected numeric fields from all panes are
    /// reported together in one error.
    pub fn complete(&self, prefs: &mut Preferences, host: &mut dyn DialogHost) -> SaveReport {
        let mut report = self.misc.commit(prefs);
        report.merge(self.tools.commit(prefs));
        report.merge(self.cad.commit(prefs));
        report.notify(host);
        report
    }
}

// =============================================================================
// CAD filter dialog
// =============================================================================

/// CAD filter options shown before filtering one scene file.
#[derive(Debug, Clone)]
pub struct CadFilterDialog {
    source: PathBuf,
    pub form: CadFilterForm,
}

impl CadFilterDialog {
    pub fn open(prefs: &Preferences, source: impl Into<PathBuf>) -> Self {
        let source = source.into();
        tracing::debug!(source = %source.display(), "CAD filter dialog opened");
        Self {
            source,
            form: CadFilterForm::load(prefs),
        }
    }

    pub fn source(&self) -> &Path {
        &self.source
    }

    /// Proposed output file: `<stem>Filtered.<ext>` beside the source.
    pub fn suggested_output(&self) -> PathBuf {
        filtered_output_path(&self.source)
    }

    /// Store the form ahead of choosing an output file.
    pub fn save(&self, prefs: &mut Preferences, host: &mut dyn DialogHost) -> SaveReport {
        self.form.save(prefs, host)
    }
}

/// `<dir>/<stem>Filtered.<ext>` for `source`.
pub fn filtered_output_path(source: &Path) -> PathBuf {
    let stem = source
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_default();
    let name = match source.extension() {
        Some(ext) => format!("{stem}{CAD_FILTERED_SUFFIX}.{}", ext.to_string_lossy()),
        None => format!("{stem}{CAD_FILTERED_SUFFIX}"),
    };
    source.with_file_name(name)
}

// =============================================================================
// Error queue
// =============================================================================

/// One error waiting for the user to acknowledge it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PendingError {
    pub title: String,
    pub message: String,
}

/// Holds at most one unacknowledged error; a newer one replaces it.
#[derive(Debug, Default)]
pub struct ErrorQueue {
    pending: Option<PendingError>,
}

impl ErrorQueue {
    pub fn pending(&self) -> Option<&PendingError> {
        self.pending.as_ref()
    }

    pub fn acknowledge(&mut self) -> Option<PendingError> {
        self.pending.take()
    }
}

impl DialogHost for ErrorQueue {
    fn show_error(&mut self, title: &str, message: &str) {
        if let Some(old) = &self.pending {
            tracing::debug!(replaced = %old.title, "Unacknowledged error replaced");
        }
        tracing::warn!(title, message, "Error shown to user");
        self.pending = Some(PendingError {
            title: title.to_string(),
            message: message.to_string(),
        });
    }
}

// X3dPrefs - app/state.rs
//
// Application state management. Holds the preference registry, the open
// dialogs, and the status line.
// Owned by the eframe::App implementation.

use super::dialog::{CadFilterDialog, ErrorQueue, OptionsDialog, OptionsPane};
use crate::core::form::SaveReport;
use crate::core::registry::Preferences;
use std::path::PathBuf;

/// Top-level application state.
#[derive(Debug)]
pub struct AppState {
    /// The preference registry, shared by every form.
    pub prefs: Preferences,

    /// Where preferences are persisted (None for a volatile session).
    pub prefs_path: Option<PathBuf>,

    /// Open options dialog, if any.
    pub options: Option<OptionsDialog>,

    /// Open CAD filter dialog, if any.
    pub cad_dialog: Option<CadFilterDialog>,

    /// Pane the next options dialog opens on. Consumed by one open.
    pub preferred_pane: Option<OptionsPane>,

    /// Error awaiting acknowledgement.
    pub errors: ErrorQueue,

    /// Status message for the status bar.
    pub status_message: String,

    /// Non-fatal startup warnings (config problems).
    pub warnings: Vec<String>,

    /// Output file most recently chosen in the CAD filter dialog.
    pub filter_target: Option<PathBuf>,

    /// Whether to show the About dialog.
    pub show_about: bool,

    /// Dark (true) or light (false) theme.
    pub dark_mode: bool,

    /// Whether debug mode is enabled.
    pub debug_mode: bool,
}

impl AppState {
    pub fn new(prefs: Preferences, debug_mode: bool) -> Self {
        Self {
            prefs,
            prefs_path: None,
            options: None,
            cad_dialog: None,
            preferred_pane: None,
            errors: ErrorQueue::default(),
            status_message: "Ready.".to_string(),
            warnings: Vec::new(),
            filter_target: None,
            show_about: false,
            dark_mode: true,
            debug_mode,
        }
    }

    /// Open the options dialog on the preferred pane, clearing the preference.
    pub fn open_options(&mut self) {
        let preferred = self.preferred_pane.take();
        self.options = Some(OptionsDialog::open(&self.prefs, preferred));
    }

    /// Store all option forms. The dialog closes only if nothing was rejected.
    pub fn complete_options(&mut self) -> Option<SaveReport> {
        let dialog = self.options.as_ref()?;
        let report = dialog.complete(&mut self.prefs, &mut self.errors);
        if report.is_clean() {
            self.options = None;
            self.status_message = "Options saved.".to_string();
        } else {
            self.status_message = "Options saved; some fields need correction.".to_string();
        }
        Some(report)
    }

    /// Close the options dialog without storing anything.
    pub fn close_options(&mut self) {
        if self.options.take().is_some() {
            tracing::debug!("Options dialog closed without saving");
        }
    }

    pub fn open_cad_filter(&mut self, source: PathBuf) {
        self.cad_dialog = Some(CadFilterDialog::open(&self.prefs, source));
    }

    /// Store the CAD filter form. Returns the proposed output path when
    /// every field was accepted and an output file should be chosen next.
    pub fn save_cad_filter(&mut self) -> Option<PathBuf> {
        let dialog = self.cad_dialog.as_ref()?;
        let report = dialog.save(&mut self.prefs, &mut self.errors);
        report.is_clean().then(|| dialog.suggested_output())
    }

    /// Record the output file chosen after a successful save and close.
    pub fn finish_cad_filter(&mut self, target: Option<PathBuf>) {
        self.cad_dialog = None;
        match target {
            Some(path) => {
                tracing::info!(target = %path.display(), "CAD filter output chosen");
                self.status_message = format!("CAD filter output: {}", path.display());
                self.filter_target = Some(path);
            }
            None => {
                self.status_message = "CAD filter options saved.".to_string();
            }
        }
    }

    /// Close the CAD filter dialog without storing anything.
    pub fn cancel_cad_filter(&mut self) {
        if self.cad_dialog.take().is_some() {
            tracing::debug!("CAD filter dialog cancelled");
        }
    }

    /// Whether any modal window currently blocks the main view.
    pub fn modal_open(&self) -> bool {
        self.options.is_some() || self.cad_dialog.is_some() || self.errors.pending().is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::cad_filter::CadToggle;
    use crate::core::defaults::{HostProfile, PlatformDefaults};
    use crate::core::keys::PrefKey;
    use crate::core::store::MemoryStore;

    fn state() -> AppState {
        let prefs = Preferences::new(
            Box::new(MemoryStore::new()),
            PlatformDefaults::resolve(&HostProfile::default()),
        );
        AppState::new(prefs, false)
    }

    #[test]
    fn test_preferred_pane_is_used_once() {
        let mut s = state();
        s.preferred_pane = Some(OptionsPane::CadFilter);
        s.open_options();
        assert_eq!(s.options.as_ref().map(|d| d.pane), Some(OptionsPane::CadFilter));
        assert_eq!(s.preferred_pane, None);

        s.close_options();
        s.open_options();
        assert_eq!(
            s.options.as_ref().map(|d| d.pane),
            Some(OptionsPane::Miscellaneous)
        );
    }

    #[test]
    fn test_close_stores_nothing() {
        let mut s = state();
        s.open_options();
        if let Some(d) = s.options.as_mut() {
            d.misc.auto_validate = false;
        }
        s.close_options();
        assert!(s.prefs.stored_keys().is_empty());
        assert!(s.complete_options().is_none());
    }

    #[test]
    fn test_complete_keeps_dialog_open_on_rejection() {
        let mut s = state();
        s.open_options();
        if let Some(d) = s.options.as_mut() {
            d.cad.abs_scale_factor = "abc".to_string();
            d.misc.auto_validate = false;
        }
        let report = s.complete_options().unwrap();
        assert!(!report.is_clean());
        assert!(s.options.is_some());
        assert!(s.errors.pending().is_some());
        assert!(!s.prefs.get::<bool>(PrefKey::AutoValidate));

        if let Some(d) = s.options.as_mut() {
            d.cad.abs_scale_factor = "2".to_string();
        }
        s.errors.acknowledge();
        assert!(s.complete_options().unwrap().is_clean());
        assert!(s.options.is_none());
        assert_eq!(s.prefs.get::<String>(PrefKey::CadAbsScaleFactor), "2");
    }

    #[test]
    fn test_cad_filter_cancel_and_save() {
        let mut s = state();
        s.open_cad_filter(PathBuf::from("/scenes/Box.x3d"));
        if let Some(d) = s.cad_dialog.as_mut() {
            d.form.set_toggle(CadToggle::Debug, true);
        }
        s.cancel_cad_filter();
        assert!(!s.prefs.is_set(PrefKey::CadDebug));

        s.open_cad_filter(PathBuf::from("/scenes/Box.x3d"));
        if let Some(d) = s.cad_dialog.as_mut() {
            d.form.set_toggle(CadToggle::Debug, true);
        }
        let suggested = s.save_cad_filter();
        assert_eq!(suggested, Some(PathBuf::from("/scenes/BoxFiltered.x3d")));
        assert!(s.prefs.get::<bool>(PrefKey::CadDebug));

        s.finish_cad_filter(suggested);
        assert!(s.cad_dialog.is_none());
        assert_eq!(s.filter_target, Some(PathBuf::from("/scenes/BoxFiltered.x3d")));
    }
}

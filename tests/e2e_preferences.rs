// X3dPrefs - tests/e2e_preferences.rs
//
// End-to-end tests for the preference registry and its forms.
//
// These tests exercise the real JSON file store in a temporary directory,
// the real platform default table, real config.toml parsing, and the real
// dialog flows. The only stand-in is a DialogHost that records errors
// instead of drawing them.

use std::path::{Path, PathBuf};
use tempfile::TempDir;
use x3dprefs::app::dialog::OptionsPane;
use x3dprefs::app::prefs_file::{bad_path, FileStore};
use x3dprefs::app::state::AppState;
use x3dprefs::core::cad_filter::{CadFilterForm, CadToggle, FilterMode, SCALE_FACTOR_LABEL};
use x3dprefs::core::defaults::{HostProfile, Platform, PlatformDefaults, Tool};
use x3dprefs::core::form::DialogHost;
use x3dprefs::core::keys::{PrefKey, CAD_FILTER_KEYS};
use x3dprefs::core::registry::Preferences;
use x3dprefs::platform::config::load_config;

// =============================================================================
// Helpers
// =============================================================================

#[derive(Default)]
struct RecordingHost {
    shown: Vec<(String, String)>,
}

impl DialogHost for RecordingHost {
    fn show_error(&mut self, title: &str, message: &str) {
        self.shown.push((title.to_string(), message.to_string()));
    }
}

fn host(os_name: &str) -> HostProfile {
    HostProfile {
        os_name: os_name.to_string(),
        library_path: String::new(),
        user_name: "e2e".to_string(),
        working_dir: "/opt/x3d-edit".to_string(),
    }
}

fn prefs_file(dir: &TempDir) -> PathBuf {
    dir.path().join("preferences.json")
}

/// Registry over a file store at `path`, legacy aliases off so every key
/// reads what it writes.
fn open_prefs(path: &Path) -> Preferences {
    Preferences::new(
        Box::new(FileStore::open(path)),
        PlatformDefaults::resolve(&host("Linux")),
    )
    .with_legacy_read_aliases(false)
    .with_certificate_serial_default(1_234_560)
}

// =============================================================================
// Registry semantics
// =============================================================================

/// Before any write, every key reads its caller-supplied default.
#[test]
fn e2e_unset_keys_read_caller_default() {
    let dir = TempDir::new().unwrap();
    let prefs = open_prefs(&prefs_file(&dir));

    for &key in PrefKey::ALL {
        assert_eq!(
            prefs.get_or(key, "caller-default".to_string()),
            "caller-default",
            "{key}"
        );
        assert_eq!(prefs.get::<String>(key), prefs.default_text(key), "{key}");
    }
}

/// Writes win over defaults until reset, for every key, and survive reopen.
#[test]
fn e2e_set_then_reset_every_key() {
    let dir = TempDir::new().unwrap();
    let path = prefs_file(&dir);

    {
        let mut prefs = open_prefs(&path);
        for (i, &key) in PrefKey::ALL.iter().enumerate() {
            prefs.set(key, format!("value-{i}"));
        }
    }

    let mut prefs = open_prefs(&path);
    for (i, &key) in PrefKey::ALL.iter().enumerate() {
        assert_eq!(prefs.get_or(key, "unused".to_string()), format!("value-{i}"), "{key}");
    }

    for &key in PrefKey::ALL {
        prefs.reset(key);
        assert_eq!(prefs.get_or(key, "fallback".to_string()), "fallback", "{key}");
    }
    assert!(prefs.stored_keys().is_empty());
}

/// Resetting the CAD filter group restores all 29 documented defaults at once.
#[test]
fn e2e_cad_reset_all_restores_documented_defaults() {
    let dir = TempDir::new().unwrap();
    let mut prefs = open_prefs(&prefs_file(&dir));

    let mut form = CadFilterForm::load(&prefs);
    form.set_mode(FilterMode::CadFilters);
    for toggle in CadToggle::ALL {
        form.set_toggle(toggle, true);
    }
    form.x3d_version.select_value("4.0");
    form.abs_scale_factor = "12.5".to_string();
    form.float_quantization = "0.1".to_string();
    form.save(&mut prefs, &mut RecordingHost::default());
    assert_eq!(
        CAD_FILTER_KEYS.iter().filter(|&&k| prefs.is_set(k)).count(),
        29
    );

    form.reset_all(&mut prefs);

    assert!(CAD_FILTER_KEYS.iter().all(|&k| !prefs.is_set(k)));
    assert_eq!(prefs.get::<String>(PrefKey::CadX3dVersion), "3.2");
    assert_eq!(prefs.get::<String>(PrefKey::CadLogLevel), "ALL");
    assert_eq!(prefs.get::<String>(PrefKey::CadBinaryCompression), "SMALLEST");
    assert_eq!(prefs.get::<String>(PrefKey::CadAbsScaleFactor), "1.0");
    assert_eq!(prefs.get::<String>(PrefKey::CadFloatQuantization), "0.001");
    assert!(prefs.get::<bool>(PrefKey::CadIdentityFilter));
    assert!(!prefs.get::<bool>(PrefKey::CadFiltersEnabled));
    assert!(!prefs.get::<bool>(PrefKey::CadTriangulation));
    assert_eq!(form.mode(), FilterMode::Identity);
}

/// One bad numeric field: the rest is saved, the bad field keeps its old
/// value, and exactly one error names it.
#[test]
fn e2e_invalid_scale_factor_is_skipped_and_reported_once() {
    let dir = TempDir::new().unwrap();
    let path = prefs_file(&dir);
    let mut prefs = open_prefs(&path);
    prefs.set(PrefKey::CadAbsScaleFactor, "3.0".to_string());

    let mut form = CadFilterForm::load(&prefs);
    form.abs_scale_factor = "abc".to_string();
    form.float_quantization = "0.05".to_string();
    form.set_toggle(CadToggle::GenerateNormals, true);
    form.log_level.select_value("WARNINGS");

    let mut host = RecordingHost::default();
    form.save(&mut prefs, &mut host);
    drop(prefs);

    let prefs = open_prefs(&path);
    assert_eq!(prefs.get::<String>(PrefKey::CadAbsScaleFactor), "3.0");
    assert_eq!(prefs.get::<String>(PrefKey::CadFloatQuantization), "0.05");
    assert!(prefs.get::<bool>(PrefKey::CadGenerateNormals));
    assert_eq!(prefs.get::<String>(PrefKey::CadLogLevel), "WARNINGS");

    assert_eq!(host.shown.len(), 1);
    assert!(host.shown[0].1.contains(SCALE_FACTOR_LABEL));
}

/// The legacy getters keep reading their sibling keys when enabled.
#[test]
fn e2e_legacy_aliases_are_preserved_by_default() {
    let dir = TempDir::new().unwrap();
    let mut prefs = Preferences::new(
        Box::new(FileStore::open(prefs_file(&dir))),
        PlatformDefaults::resolve(&host("Linux")),
    );
    assert!(prefs.legacy_read_aliases());

    prefs.set(PrefKey::CadModifyViewpoint, true);
    assert!(prefs.get::<bool>(PrefKey::CadMaterial));
    prefs.set(PrefKey::CadCombineShapes, true);
    assert!(prefs.get::<bool>(PrefKey::CadCombineAppearances));
}

// =============================================================================
// Platform defaults
// =============================================================================

/// A macOS host takes every tool default from the macOS column.
#[test]
fn e2e_mac_host_uses_only_mac_defaults() {
    let mac = PlatformDefaults::resolve(&host("Mac OS X"));
    let win = PlatformDefaults::resolve(&HostProfile {
        library_path: r"C:\Program Files (x86)".to_string(),
        ..host("Windows 10")
    });
    assert_eq!(mac.platform(), Platform::MacOs);
    assert_eq!(win.platform(), Platform::Windows64);

    for tool in Tool::ALL {
        let path = mac.path(tool);
        assert!(!path.contains(r"C:\"), "{tool}: {path}");
        assert!(!path.contains("__USER-NAME__"), "{tool}: {path}");
    }
    assert_eq!(mac.path(Tool::Xj3d), "/Applications/Xj3D/Xj3DBrowser.app");
    assert_eq!(mac.path(Tool::Contact), "/Applications/BS Contact.app");
    assert_ne!(mac.path(Tool::Contact), win.path(Tool::Contact));
    assert_eq!(
        mac.path(Tool::SvgEdit),
        "/opt/x3d-edit/externals/svg-edit-2.7/svg-editor.html"
    );
}

// =============================================================================
// File persistence
// =============================================================================

/// A corrupt file starts an empty store and is kept aside, not overwritten.
#[test]
fn e2e_corrupt_file_starts_empty_and_is_kept() {
    let dir = TempDir::new().unwrap();
    let path = prefs_file(&dir);
    std::fs::write(&path, b"\x00\x01 garbage").unwrap();

    let mut prefs = open_prefs(&path);
    assert!(prefs.stored_keys().is_empty());
    assert!(prefs.get::<bool>(PrefKey::AutoValidate));

    prefs.set(PrefKey::AutoValidate, false);
    assert!(bad_path(&path).exists());
    assert!(!open_prefs(&path).get::<bool>(PrefKey::AutoValidate));
}

// =============================================================================
// Configuration
// =============================================================================

/// Bad config values produce warnings and leave defaults in place.
#[test]
fn e2e_bad_config_values_warn() {
    let dir = TempDir::new().unwrap();
    let config_dir = dir.path().join("config");
    std::fs::create_dir_all(&config_dir).unwrap();
    std::fs::write(
        dir.path().join("config.toml"),
        "[ui]\ntheme = \"neon\"\n[logging]\nlevel = \"chatty\"\n[cad_filter]\nlegacy_read_aliases = false\n",
    )
    .unwrap();

    let (config, warnings) = load_config(&config_dir);
    assert_eq!(warnings.len(), 2, "{warnings:?}");
    assert!(config.dark_mode);
    assert_eq!(config.log_level, None);
    assert!(!config.legacy_read_aliases);
}

// =============================================================================
// Dialog flows
// =============================================================================

/// Closing leaves the file untouched, "Complete" commits, and the preferred
/// pane is honoured only once.
#[test]
fn e2e_options_dialog_flow() {
    let dir = TempDir::new().unwrap();
    let path = prefs_file(&dir);
    let mut state = AppState::new(open_prefs(&path), false);

    state.preferred_pane = Some(OptionsPane::ExternalTools);
    state.open_options();
    if let Some(dialog) = state.options.as_mut() {
        assert_eq!(dialog.pane, OptionsPane::ExternalTools);
        dialog.misc.newline.append = true;
    }
    state.close_options();
    assert!(!path.exists(), "nothing was written");
    assert!(!state.prefs.get::<bool>(PrefKey::AppendNewline));

    state.open_options();
    if let Some(dialog) = state.options.as_mut() {
        assert_eq!(dialog.pane, OptionsPane::Miscellaneous);
        dialog.misc.newline.append = true;
        if let Some(row) = dialog.tools.row_mut(Tool::Gimp) {
            row.path = "/usr/bin/gimp".to_string();
        }
    }
    let report = state.complete_options().unwrap();
    assert!(report.is_clean());
    assert!(state.options.is_none());
    assert!(state.errors.pending().is_none());

    let reopened = open_prefs(&path);
    assert!(reopened.get::<bool>(PrefKey::AppendNewline));
    assert_eq!(reopened.tool_path(Tool::Gimp), "/usr/bin/gimp");
}

/// Cancelling the CAD filter dialog commits nothing; saving proposes the
/// filtered file name next to the source.
#[test]
fn e2e_cad_filter_dialog_flow() {
    let dir = TempDir::new().unwrap();
    let path = prefs_file(&dir);
    let mut state = AppState::new(open_prefs(&path), false);
    let source = dir.path().join("Teapot.x3d");

    state.open_cad_filter(source.clone());
    if let Some(dialog) = state.cad_dialog.as_mut() {
        dialog.form.set_mode(FilterMode::CadFilters);
    }
    state.cancel_cad_filter();
    assert!(!state.prefs.is_set(PrefKey::CadFiltersEnabled));

    state.open_cad_filter(source);
    if let Some(dialog) = state.cad_dialog.as_mut() {
        dialog.form.set_mode(FilterMode::CadFilters);
    }
    let suggested = state.save_cad_filter();
    assert_eq!(suggested, Some(dir.path().join("TeapotFiltered.x3d")));
    assert!(open_prefs(&path).get::<bool>(PrefKey::CadFiltersEnabled));
}

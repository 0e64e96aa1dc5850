// X3dPrefs - main.rs
//
// Application entry point. Handles:
// 1. CLI argument parsing
// 2. config.toml loading and logging initialisation
// 3. Host detection and preference store setup
// 4. eframe GUI launch

#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")]

mod gui;

// Re-export modules from the library crate so that `gui.rs` and other
// binary-side code can still use `crate::app::...`, `crate::core::...` etc.
pub use x3dprefs::app;

pub use x3dprefs::core;
pub use x3dprefs::platform;
pub use x3dprefs::ui;
pub use x3dprefs::util;

use clap::{Parser, ValueEnum};
use std::path::PathBuf;

/// Configure fonts for the egui context.
///
/// On Windows, loads Segoe UI and Segoe UI Symbol from the system font
/// directory ahead of the egui built-ins, which are kept as final fallbacks.
///
/// On non-Windows platforms the egui defaults are used unchanged.
fn configure_fonts(ctx: &egui::Context) {
    #[cfg(target_os = "windows")]
    {
        let mut fonts = egui::FontDefinitions::default();

        let candidates: &[(&str, &str)] = &[
            ("Segoe UI", r"C:\Windows\Fonts\segoeui.ttf"),
            ("Segoe UI Symbol", r"C:\Windows\Fonts\seguisym.ttf"),
        ];

        let mut loaded_names: Vec<&str> = Vec::new();
        for (name, path) in candidates {
            match std::fs::read(path) {
                Ok(data) => {
                    fonts
                        .font_data
                        .insert((*name).to_owned(), egui::FontData::from_owned(data).into());
                    loaded_names.push(name);
                    tracing::debug!(font = name, "Loaded Windows system font");
                }
                Err(e) => {
                    tracing::warn!(
                        font = name,
                        error = %e,
                        "Failed to load Windows system font; some symbols may render as squares"
                    );
                }
            }
        }

        if !loaded_names.is_empty() {
            if let Some(proportional) = fonts.families.get_mut(&egui::FontFamily::Proportional) {
                for (i, name) in loaded_names.iter().enumerate() {
                    proportional.insert(i, (*name).to_owned());
                }
            }
            if let Some(monospace) = fonts.families.get_mut(&egui::FontFamily::Monospace) {
                for name in &loaded_names {
                    monospace.push((*name).to_owned());
                }
            }

            ctx.set_fonts(fonts);
            tracing::info!(fonts = ?loaded_names, "Windows system fonts configured");
        }
    }

    #[cfg(not(target_os = "windows"))]
    let _ = ctx;
}

/// Options pane selectable from the command line.
#[derive(Debug, Clone, Copy, ValueEnum)]
enum PaneArg {
    Misc,
    Tools,
    Cad,
}

impl From<PaneArg> for app::dialog::OptionsPane {
    fn from(p: PaneArg) -> Self {
        match p {
            PaneArg::Misc => Self::Miscellaneous,
            PaneArg::Tools => Self::ExternalTools,
            PaneArg::Cad => Self::CadFilter,
        }
    }
}

/// X3D-Edit Preferences - options for the X3D-Edit authoring environment.
///
/// Edits external tool locations, visualization colours, and CAD filter
/// settings, stored per user.
#[derive(Parser, Debug)]
#[command(name = "x3dprefs", version, about)]
struct Cli {
    /// Enable debug logging (equivalent to RUST_LOG=debug).
    #[arg(short = 'd', long = "debug")]
    debug: bool,

    /// Directory holding preferences.json (overrides config.toml).
    #[arg(long = "prefs-dir")]
    prefs_dir: Option<PathBuf>,

    /// Pretend to run on this OS, e.g. "Mac OS X" or "Windows 10".
    #[arg(long = "os-name")]
    os_name: Option<String>,

    /// Open the options dialog on this pane at startup.
    #[arg(long = "pane", value_enum)]
    pane: Option<PaneArg>,

    /// Open the CAD filter dialog for this scene file at startup.
    #[arg(long = "cad-filter")]
    cad_filter: Option<PathBuf>,
}

fn main() {
    let cli = Cli::parse();

    // Config is read before logging so its level can take part in the filter.
    let platform_paths = platform::config::PlatformPaths::resolve();
    let (config, config_warnings) = platform::config::load_config(&platform_paths.config_dir);

    util::logging::init(
        cli.debug,
        config.log_level.as_deref(),
        config.log_file.as_deref(),
    );

    tracing::info!(
        version = util::constants::APP_VERSION,
        debug = cli.debug,
        "X3D-Edit Preferences starting"
    );
    for warning in &config_warnings {
        tracing::warn!(warning = %warning, "Config warning");
    }

    // Host facts: detected, then config.toml, then CLI.
    let mut overrides = config.host.clone();
    if cli.os_name.is_some() {
        overrides.os_name = cli.os_name.clone();
    }
    let host = platform::host::detect_with(&overrides);
    let defaults = core::defaults::PlatformDefaults::resolve(&host);

    // Preference store: CLI directory > config directory > platform default.
    let override_dir = cli.prefs_dir.clone().or_else(|| config.prefs_dir.clone());
    let prefs_path = platform_paths.prefs_file(override_dir.as_deref());
    let store = app::prefs_file::FileStore::open(&prefs_path);
    let store_problem = store.last_error().map(str::to_string);

    let prefs = core::registry::Preferences::new(Box::new(store), defaults)
        .with_legacy_read_aliases(config.legacy_read_aliases);

    tracing::info!(
        platform = %prefs.platform(),
        prefs = %prefs_path.display(),
        "Ready to launch GUI"
    );

    let mut state = app::state::AppState::new(prefs, cli.debug);
    state.prefs_path = Some(prefs_path);
    state.dark_mode = config.dark_mode;
    state.warnings = config_warnings;
    if let Some(problem) = store_problem {
        state.warnings.push(problem);
    }

    if let Some(pane) = cli.pane {
        state.preferred_pane = Some(pane.into());
        state.open_options();
    }
    if let Some(source) = cli.cad_filter {
        state.open_cad_filter(source);
    }

    let native_options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title(format!(
                "{} v{}",
                util::constants::APP_NAME,
                util::constants::APP_VERSION
            ))
            .with_inner_size([820.0, 640.0])
            .with_min_inner_size([560.0, 400.0]),
        ..Default::default()
    };

    let font_size = config.font_size;
    let result = eframe::run_native(
        util::constants::APP_NAME,
        native_options,
        Box::new(move |cc| {
            configure_fonts(&cc.egui_ctx);
            Ok(Box::new(gui::PrefsApp::new(state, font_size)))
        }),
    );

    if let Err(e) = result {
        tracing::error!(error = %e, "Failed to launch GUI");
        eprintln!("Error: Failed to launch X3D-Edit Preferences: {e}");
        std::process::exit(1);
    }
}

// X3dPrefs - platform/config.rs
//
// Platform-specific configuration, directory resolution, and config.toml
// loading with startup validation.
//
// Uses the `directories` crate for XDG (Linux), AppData (Windows),
// Library (macOS) compliance.

use crate::util::constants;
use crate::util::error::ConfigError;
use directories::ProjectDirs;
use std::path::{Path, PathBuf};

/// Resolved platform paths for X3D-Edit preferences and configuration.
#[derive(Debug, Clone)]
pub struct PlatformPaths {
    /// Configuration directory (e.g. ~/.config/x3d-edit/ or %APPDATA%\X3D-Edit\config\)
    pub config_dir: PathBuf,

    /// Data directory for logs and set-aside preference files.
    pub data_dir: PathBuf,
}

impl PlatformPaths {
    /// Resolve platform-appropriate paths.
    ///
    /// Falls back to current directory if platform dirs cannot be determined.
    pub fn resolve() -> Self {
        if let Some(proj_dirs) = ProjectDirs::from("org", "web3d", constants::APP_ID) {
            let config_dir = proj_dirs.config_dir().to_path_buf();
            let data_dir = proj_dirs.data_dir().to_path_buf();

            tracing::debug!(
                config = %config_dir.display(),
                data = %data_dir.display(),
                "Platform paths resolved"
            );

            Self {
                config_dir,
                data_dir,
            }
        } else {
            tracing::warn!("Could not determine platform directories, using current directory");
            let fallback = PathBuf::from(".");
            Self {
                config_dir: fallback.clone(),
                data_dir: fallback,
            }
        }
    }

    /// Preference file location, honouring an override directory.
    pub fn prefs_file(&self, override_dir: Option<&Path>) -> PathBuf {
        override_dir
            .unwrap_or(&self.config_dir)
            .join(constants::PREFS_FILE_NAME)
    }
}

// =============================================================================
// config.toml loading and validation
// =============================================================================

/// Raw deserialisable shape of config.toml.
///
/// Unknown keys are silently ignored for forward compatibility -- a newer
/// config file can be used with an older binary without crashing.
#[derive(Debug, Default, serde::Deserialize)]
#[serde(default)]
pub struct RawConfig {
    /// `[logging]` section.
    pub logging: LoggingSection,
    /// `[store]` section.
    pub store: StoreSection,
    /// `[platform]` section.
    pub platform: PlatformSection,
    /// `[ui]` section.
    pub ui: UiSection,
    /// `[cad_filter]` section.
    pub cad_filter: CadFilterSection,
}

/// `[logging]` config section.
#[derive(Debug, Default, serde::Deserialize)]
#[serde(default)]
pub struct LoggingSection {
    /// Log level: "error", "warn", "info", "debug", "trace".
    pub level: Option<String>,
    /// Log file path (empty = stderr only).
    pub file: Option<String>,
}

/// `[store]` config section.
#[derive(Debug, Default, serde::Deserialize)]
#[serde(default)]
pub struct StoreSection {
    /// Directory holding preferences.json instead of the platform config dir.
    pub directory: Option<String>,
}

/// `[platform]` config section. Each value replaces what host detection found.
#[derive(Debug, Default, serde::Deserialize)]
#[serde(default)]
pub struct PlatformSection {
    pub os_name: Option<String>,
    pub library_path: Option<String>,
    pub user_name: Option<String>,
    pub working_dir: Option<String>,
}

/// `[ui]` config section.
#[derive(Debug, Default, serde::Deserialize)]
#[serde(default)]
pub struct UiSection {
    /// Theme: "dark" or "light".
    pub theme: Option<String>,
    /// Body font size in points.
    pub font_size: Option<f32>,
}

/// `[cad_filter]` config section.
#[derive(Debug, Default, serde::Deserialize)]
#[serde(default)]
pub struct CadFilterSection {
    /// Keep the three historical getters that read a sibling key.
    pub legacy_read_aliases: Option<bool>,
}

/// Host facts forced by configuration rather than detected.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HostOverrides {
    pub os_name: Option<String>,
    pub library_path: Option<String>,
    pub user_name: Option<String>,
    pub working_dir: Option<String>,
}

/// Validated application configuration derived from `config.toml`.
///
/// Invalid values produce actionable warnings and fall back to defaults.
#[derive(Debug, Clone)]
pub struct AppConfig {
    // -- UI --
    /// Dark mode (true) or light mode (false).
    pub dark_mode: bool,
    /// Body font size in points.
    pub font_size: f32,

    // -- Logging --
    /// Logging level string (for init before tracing is available).
    pub log_level: Option<String>,
    /// Log file path.
    pub log_file: Option<String>,

    // -- Store --
    /// Directory for preferences.json, if not the platform default.
    pub prefs_dir: Option<PathBuf>,

    // -- Platform --
    pub host: HostOverrides,

    // -- CAD filter --
    pub legacy_read_aliases: bool,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            dark_mode: true,
            font_size: constants::DEFAULT_FONT_SIZE,
            log_level: None,
            log_file: None,
            prefs_dir: None,
            host: HostOverrides::default(),
            legacy_read_aliases: true,
        }
    }
}

/// Load and validate `config.toml` from the given config directory.
///
/// Returns `AppConfig` with validated values and a list of non-fatal warnings.
/// If the file does not exist, returns defaults with no warnings (first-run).
/// If the file is unparseable, returns defaults with an error warning; the
/// application still starts but the user is informed.
pub fn load_config(config_dir: &Path) -> (AppConfig, Vec<String>) {
    let config_path = config_dir
        .parent()
        .unwrap_or(config_dir)
        .join(constants::CONFIG_FILE_NAME);

    let mut warnings: Vec<String> = Vec::new();

    if !config_path.exists() {
        tracing::debug!(path = %config_path.display(), "No config.toml found; using defaults");
        return (AppConfig::default(), warnings);
    }

    let content = match std::fs::read_to_string(&config_path) {
        Ok(c) => c,
        Err(source) => {
            let err = ConfigError::Io {
                path: config_path.clone(),
                source,
            };
            let msg = format!("{err}. Using defaults.");
            tracing::warn!("{}", msg);
            warnings.push(msg);
            return (AppConfig::default(), warnings);
        }
    };

    let raw: RawConfig = match toml::from_str(&content) {
        Ok(r) => r,
        Err(source) => {
            let err = ConfigError::TomlParse {
                path: config_path.clone(),
                source,
            };
            let msg = format!("{err}. Using defaults.");
            tracing::warn!("{}", msg);
            warnings.push(msg);
            return (AppConfig::default(), warnings);
        }
    };

    tracing::info!(path = %config_path.display(), "Loaded config.toml");

    let config = validate(raw, &mut warnings);

    if !warnings.is_empty() {
        tracing::warn!(
            count = warnings.len(),
            "Config validation produced warnings"
        );
    }

    (config, warnings)
}

/// Turn a parsed file into `AppConfig`, accumulating every problem.
fn validate(raw: RawConfig, warnings: &mut Vec<String>) -> AppConfig {
    let mut config = AppConfig::default();

    // -- UI: theme --
    if let Some(ref theme) = raw.ui.theme {
        match theme.to_lowercase().as_str() {
            "dark" => config.dark_mode = true,
            "light" => config.dark_mode = false,
            other => {
                warnings.push(format!(
                    "[ui] theme = \"{other}\" is not recognised. Expected \"dark\" or \"light\". Using default (dark).",
                ));
            }
        }
    }

    // -- UI: font_size --
    if let Some(size) = raw.ui.font_size {
        if (constants::MIN_FONT_SIZE..=constants::MAX_FONT_SIZE).contains(&size) {
            config.font_size = size;
        } else {
            let err = ConfigError::ValueOutOfRange {
                field: "ui.font_size".to_string(),
                value: size.to_string(),
                expected: format!("{}-{}", constants::MIN_FONT_SIZE, constants::MAX_FONT_SIZE),
            };
            warnings.push(format!(
                "{err}. Using default ({}).",
                constants::DEFAULT_FONT_SIZE
            ));
        }
    }

    // -- Logging: level --
    if let Some(ref level) = raw.logging.level {
        if constants::VALID_LOG_LEVELS.contains(&level.to_lowercase().as_str()) {
            config.log_level = Some(level.clone());
        } else {
            warnings.push(format!(
                "[logging] level = \"{level}\" is not recognised. \
                 Valid values: {}. Using default ({}).",
                constants::VALID_LOG_LEVELS.join(", "),
                constants::DEFAULT_LOG_LEVEL,
            ));
        }
    }

    // -- Logging: file --
    if let Some(ref file) = raw.logging.file {
        if !file.is_empty() {
            config.log_file = Some(file.clone());
        }
    }

    // -- Store: directory --
    if let Some(dir) = raw.store.directory {
        if dir.trim().is_empty() {
            warnings.push(
                "[store] directory is empty. Using the platform config directory.".to_string(),
            );
        } else {
            config.prefs_dir = Some(PathBuf::from(dir));
        }
    }

    // -- Platform overrides --
    let non_empty = |v: Option<String>| v.filter(|s| !s.is_empty());
    config.host = HostOverrides {
        os_name: non_empty(raw.platform.os_name),
        library_path: raw.platform.library_path,
        user_name: non_empty(raw.platform.user_name),
        working_dir: non_empty(raw.platform.working_dir),
    };

    // -- CAD filter --
    if let Some(aliases) = raw.cad_filter.legacy_read_aliases {
        config.legacy_read_aliases = aliases;
    }

    config
}

// X3dPrefs - util/constants.rs
//
// Single source of truth for named constants, limits, and defaults.
// Preference key strings live in core::keys, not here.

// =============================================================================
// Application metadata
// =============================================================================

/// Application display name.
pub const APP_NAME: &str = "X3D-Edit Preferences";

/// Application identifier used for config/data directories.
pub const APP_ID: &str = "X3D-Edit";

/// Current application version (updated by release script).
pub const APP_VERSION: &str = env!("CARGO_PKG_VERSION");

// =============================================================================
// Preference store
// =============================================================================

/// Logical namespace that scopes every X3D-Edit option in the store.
pub const PREFS_NAMESPACE: &str = "org/web3d/x3d/options";

/// File name of the persisted preference document inside the config dir.
pub const PREFS_FILE_NAME: &str = "preferences.json";

/// Suffix appended to a preference file that failed to parse, so the next
/// save does not overwrite the user's only copy.
pub const PREFS_BAD_SUFFIX: &str = "bad";

/// Schema version of the on-disk preference document.
pub const PREFS_FILE_VERSION: u32 = 1;

// =============================================================================
// Platform defaults
// =============================================================================

/// Token in platform default paths replaced by the host user name.
pub const USER_NAME_TOKEN: &str = "__USER-NAME__";

/// svg-edit page shipped alongside the editor, relative to the working dir.
pub const SVG_EDIT_RELATIVE_PATH: &str = "externals/svg-edit-2.7/svg-editor.html";

/// Directory below the user home that holds keystores and certificates.
pub const SECURITY_DIR: &str = "X3D-Edit/security";

/// Host OS names recognised by the platform classifier.
pub const OS_NAME_MAC: &str = "Mac OS X";
pub const OS_NAME_WINDOWS_XP: &str = "Windows XP";
pub const OS_NAME_WINDOWS: &str = "Windows";

/// Marker in the host library path that identifies a 64-bit Windows install.
pub const WIN64_LIBRARY_MARKER: &str = "(x86)";

// =============================================================================
// Derived preference values
// =============================================================================

/// Launch interval preferences are stored in whole seconds.
pub const MILLIS_PER_SECOND: u64 = 1_000;

/// Milliseconds per hour, used when deriving the default certificate serial.
pub const MILLIS_PER_HOUR: i64 = 3_600_000;

/// The default certificate serial is the hour stamp with one trailing zero.
pub const CERTIFICATE_SERIAL_SCALE: i64 = 10;

// =============================================================================
// CAD filter choices
// =============================================================================

/// X3D versions offered for the filtered output.
pub const CAD_VERSION_CHOICES: &[&str] = &["3.0", "3.1", "3.2", "3.3", "4.0"];

/// Log levels understood by the external CAD filter tool.
pub const CAD_LOG_LEVEL_CHOICES: &[&str] = &["ALL", "WARNINGS", "ERRORS", "FATAL", "NONE"];

/// Binary compression strategies understood by the external CAD filter tool.
pub const CAD_COMPRESSION_CHOICES: &[&str] = &["FASTEST", "SMALLEST", "LOSSY", "STRINGS"];

/// Suffix inserted before the extension of a CAD-filtered output file.
pub const CAD_FILTERED_SUFFIX: &str = "Filtered";

// =============================================================================
// UI
// =============================================================================

/// Default body font size in points.
pub const DEFAULT_FONT_SIZE: f32 = 14.5;

/// Minimum font size the options dialog allows.
pub const MIN_FONT_SIZE: f32 = 10.0;

/// Maximum font size the options dialog allows.
pub const MAX_FONT_SIZE: f32 = 24.0;

/// Title of the aggregated number-format error dialog.
pub const NUMBER_FORMAT_ERROR_TITLE: &str = "Number Format Error";

// =============================================================================
// Logging
// =============================================================================

/// Default log level when no RUST_LOG, --debug, or config override is set.
pub const DEFAULT_LOG_LEVEL: &str = "info";

/// Log levels accepted in `[logging] level`.
pub const VALID_LOG_LEVELS: &[&str] = &["error", "warn", "info", "debug", "trace"];

// =============================================================================
// File names
// =============================================================================

/// Configuration file name.
pub const CONFIG_FILE_NAME: &str = "config.toml";

// X3dPrefs - platform/fs.rs
//
// Filesystem helpers: tool path status for the external tools form, and
// revealing files in the system file manager.

use std::path::Path;

/// What a configured tool path points at.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PathStatus {
    /// Nothing configured.
    Empty,
    /// An existing file, directory, or application bundle.
    Found,
    /// A bare program name, resolved through PATH at launch.
    Command,
    /// A path that does not exist on this machine.
    Missing,
}

impl PathStatus {
    pub fn label(self) -> &'static str {
        match self {
            Self::Empty => "not set",
            Self::Found => "found",
            Self::Command => "on PATH",
            Self::Missing => "not found",
        }
    }
}

/// Classify a tool path without launching anything.
///
/// Web addresses count as found; the browser resolves them.
pub fn tool_path_status(path: &str) -> PathStatus {
    let trimmed = path.trim();
    if trimmed.is_empty() {
        return PathStatus::Empty;
    }
    if trimmed.starts_with("http://") || trimmed.starts_with("https://") {
        return PathStatus::Found;
    }
    if Path::new(trimmed).exists() {
        return PathStatus::Found;
    }
    let has_separator = trimmed.contains('/') || trimmed.contains('\\');
    if has_separator {
        PathStatus::Missing
    } else {
        PathStatus::Command
    }
}

/// Open the system file manager and highlight `path` within it.
///
/// Platform behaviour:
/// - **Windows**: `explorer.exe /select,"<path>"`
/// - **macOS**: `open -R "<path>"`
/// - **Linux**: `xdg-open "<parent>"`, since most Linux file managers
///   have no standard per-file selection argument.
///
/// The subprocess is spawned detached; any launch failure is logged at WARN
/// level but never propagated so the UI never blocks.
pub fn reveal_in_file_manager(path: &Path) {
    #[cfg(target_os = "windows")]
    {
        // `/select,<path>` must be a single argument, no space after the comma.
        let arg = format!("/select,{}", path.display());
        if let Err(e) = std::process::Command::new("explorer").arg(arg).spawn() {
            tracing::warn!(
                path = %path.display(),
                error = %e,
                "Failed to reveal file in Explorer"
            );
        }
    }
    #[cfg(target_os = "macos")]
    {
        if let Err(e) = std::process::Command::new("open")
            .arg("-R")
            .arg(path)
            .spawn()
        {
            tracing::warn!(
                path = %path.display(),
                error = %e,
                "Failed to reveal file in Finder"
            );
        }
    }
    #[cfg(target_os = "linux")]
    {
        let parent = path.parent().unwrap_or(path);
        if let Err(e) = std::process::Command::new("xdg-open").arg(parent).spawn() {
            tracing::warn!(
                path = %path.display(),
                error = %e,
                "Failed to open parent directory in file manager"
            );
        }
    }
}

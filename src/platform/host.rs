// X3dPrefs - platform/host.rs
//
// Detection of the host facts that drive tool path defaults: OS name,
// native library search path, login name, and working directory.
//
// OS names are reported in the traditional "Mac OS X" / "Windows 10" /
// "Linux" form so classification in core::defaults stays host-independent.

use crate::core::defaults::HostProfile;
use crate::platform::config::HostOverrides;
use crate::util::constants;
use std::path::PathBuf;

/// Probe the running process.
pub fn detect() -> HostProfile {
    let profile = HostProfile {
        os_name: os_name().to_string(),
        library_path: env_var(library_path_var()),
        user_name: user_name(),
        working_dir: std::env::current_dir()
            .map(|p| p.display().to_string())
            .unwrap_or_default(),
    };
    tracing::debug!(
        os_name = %profile.os_name,
        user = %profile.user_name,
        working_dir = %profile.working_dir,
        "Host detected"
    );
    profile
}

/// Probe the host, then apply config or CLI overrides on top.
pub fn detect_with(overrides: &HostOverrides) -> HostProfile {
    apply_overrides(detect(), overrides)
}

/// Replace detected facts with any values set in `overrides`.
pub fn apply_overrides(mut profile: HostProfile, overrides: &HostOverrides) -> HostProfile {
    if let Some(ref v) = overrides.os_name {
        profile.os_name = v.clone();
    }
    if let Some(ref v) = overrides.library_path {
        profile.library_path = v.clone();
    }
    if let Some(ref v) = overrides.user_name {
        profile.user_name = v.clone();
    }
    if let Some(ref v) = overrides.working_dir {
        profile.working_dir = v.clone();
    }
    profile
}

/// Directory where X3D-Edit keeps keystores and certificates.
pub fn security_dir() -> PathBuf {
    directories::UserDirs::new()
        .map(|dirs| dirs.home_dir().to_path_buf())
        .unwrap_or_else(|| PathBuf::from("."))
        .join(constants::SECURITY_DIR)
}

fn os_name() -> &'static str {
    match std::env::consts::OS {
        "macos" => constants::OS_NAME_MAC,
        "windows" => "Windows 10",
        "linux" => "Linux",
        "freebsd" => "FreeBSD",
        other => other,
    }
}

fn library_path_var() -> &'static str {
    match std::env::consts::OS {
        "windows" => "PATH",
        "macos" => "DYLD_LIBRARY_PATH",
        _ => "LD_LIBRARY_PATH",
    }
}

fn user_name() -> String {
    let from_env = env_var("USER");
    if from_env.is_empty() {
        env_var("USERNAME")
    } else {
        from_env
    }
}

fn env_var(name: &str) -> String {
    std::env::var(name).unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::defaults::Platform;

    #[test]
    fn test_detected_os_classifies_like_the_build_target() {
        let profile = detect();
        let platform = Platform::classify(&profile.os_name, &profile.library_path);
        if cfg!(target_os = "macos") {
            assert_eq!(platform, Platform::MacOs);
        } else if cfg!(target_os = "linux") {
            assert_eq!(platform, Platform::Other);
        }
    }

    #[test]
    fn test_overrides_replace_only_what_is_set() {
        let detected = HostProfile {
            os_name: "Linux".to_string(),
            library_path: "/usr/lib".to_string(),
            user_name: "pat".to_string(),
            working_dir: "/work".to_string(),
        };
        let overrides = HostOverrides {
            os_name: Some("Windows 7".to_string()),
            library_path: Some(r"C:\Program Files (x86)".to_string()),
            ..Default::default()
        };
        let merged = apply_overrides(detected, &overrides);
        assert_eq!(merged.os_name, "Windows 7");
        assert_eq!(merged.library_path, r"C:\Program Files (x86)");
        assert_eq!(merged.user_name, "pat");
        assert_eq!(merged.working_dir, "/work");
    }

    #[test]
    fn test_security_dir_ends_with_app_folder() {
        assert!(security_dir().ends_with("X3D-Edit/security"));
    }
}

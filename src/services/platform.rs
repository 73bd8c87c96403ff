//! Host platform queries: color-scheme preference and document opener.

use crate::config::SystemThemeSource;
use crate::domain::Theme;
#[cfg(any(target_os = "linux", target_os = "macos"))]
use std::process::Command;

/// Resolve the system color-scheme preference.
///
/// Only consulted when no theme has been stored yet.
pub fn system_theme(source: SystemThemeSource) -> Theme {
    match source {
        SystemThemeSource::Light => Theme::Light,
        SystemThemeSource::Dark => Theme::Dark,
        SystemThemeSource::Auto => {
            if detect_system_dark_mode() {
                Theme::Dark
            } else {
                Theme::Light
            }
        }
    }
}

/// Ask the desktop environment whether a dark scheme is preferred.
/// Defaults to light when nothing can be detected.
pub fn detect_system_dark_mode() -> bool {
    #[cfg(target_os = "linux")]
    {
        if let Ok(output) = Command::new("gsettings")
            .args(["get", "org.gnome.desktop.interface", "color-scheme"])
            .output()
        {
            if String::from_utf8_lossy(&output.stdout).contains("prefer-dark") {
                return true;
            }
        }

        if let Ok(output) = Command::new("gsettings")
            .args(["get", "org.gnome.desktop.interface", "gtk-theme"])
            .output()
        {
            let theme = String::from_utf8_lossy(&output.stdout).to_lowercase();
            if theme.contains("dark") {
                return true;
            }
        }
    }

    #[cfg(target_os = "macos")]
    {
        if let Ok(output) = Command::new("defaults")
            .args(["read", "-g", "AppleInterfaceStyle"])
            .output()
        {
            if output.status.success()
                && String::from_utf8_lossy(&output.stdout)
                    .to_lowercase()
                    .contains("dark")
            {
                return true;
            }
        }
    }

    false
}

/// Program that opens a document with the user's default handler
pub fn default_opener() -> &'static str {
    if cfg!(target_os = "macos") {
        "open"
    } else if cfg!(target_os = "windows") {
        "explorer"
    } else {
        "xdg-open"
    }
}

//! Best-effort probe of the desktop's dark-mode preference, used when the
//! theme mode is SystemDefault. Defaults to light when nothing answers.

pub fn detect_system_dark_mode() -> bool {
    #[cfg(target_os = "windows")]
    {
        if let Some(dark) = windows_prefers_dark() {
            return dark;
        }
    }

    #[cfg(target_os = "linux")]
    {
        if linux_prefers_dark() {
            return true;
        }
    }

    #[cfg(target_os = "macos")]
    {
        if macos_prefers_dark() {
            return true;
        }
    }

    false
}

/// Windows: registry preference. AppsUseLightTheme: 0 = dark, 1 = light.
#[cfg(target_os = "windows")]
fn windows_prefers_dark() -> Option<bool> {
    use winreg::RegKey;
    use winreg::enums::HKEY_CURRENT_USER;

    let hkcu = RegKey::predef(HKEY_CURRENT_USER)
        .open_subkey("Software\\Microsoft\\Windows\\CurrentVersion\\Themes\\Personalize")
        .ok()?;
    let value: u32 = hkcu.get_value("AppsUseLightTheme").ok()?;
    Some(value == 0)
}

/// Linux: ask gsettings, covering both the GNOME gtk-theme name and the
/// freedesktop color-scheme key.
#[cfg(target_os = "linux")]
fn linux_prefers_dark() -> bool {
    use std::process::Command;

    let gsettings_value = |schema_key: &str| -> Option<String> {
        let output = Command::new("gsettings")
            .args(["get", "org.gnome.desktop.interface", schema_key])
            .output()
            .ok()?;
        Some(String::from_utf8_lossy(&output.stdout).to_lowercase())
    };

    if let Some(theme) = gsettings_value("gtk-theme") {
        if theme.contains("dark") {
            return true;
        }
    }

    if let Some(scheme) = gsettings_value("color-scheme") {
        if scheme.contains("prefer-dark") {
            return true;
        }
    }

    false
}

/// macOS: AppleInterfaceStyle is only set when dark mode is active.
#[cfg(target_os = "macos")]
fn macos_prefers_dark() -> bool {
    use std::process::Command;

    match Command::new("defaults")
        .args(["read", "-g", "AppleInterfaceStyle"])
        .output()
    {
        Ok(output) if output.status.success() => String::from_utf8_lossy(&output.stdout)
            .to_lowercase()
            .contains("dark"),
        _ => false,
    }
}

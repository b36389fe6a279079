//! OS color-scheme preference lookup.

use tracing::debug;

/// Returns true when the desktop reports a dark color-scheme preference.
///
/// Every probe is best effort: a missing tool, key or setting counts as
/// "no preference", which resolves to light.
pub fn detect_system_dark_mode() -> bool {
    let prefers_dark = os_prefers_dark().unwrap_or(false);
    debug!(prefers_dark, "probed OS color-scheme preference");
    prefers_dark
}

#[cfg(target_os = "windows")]
fn os_prefers_dark() -> Option<bool> {
    use winreg::RegKey;
    use winreg::enums::HKEY_CURRENT_USER;

    let personalize = RegKey::predef(HKEY_CURRENT_USER)
        .open_subkey("Software\\Microsoft\\Windows\\CurrentVersion\\Themes\\Personalize")
        .ok()?;
    // AppsUseLightTheme: 0 = dark, 1 = light
    let apps_use_light: u32 = personalize.get_value("AppsUseLightTheme").ok()?;
    Some(apps_use_light == 0)
}

#[cfg(target_os = "linux")]
fn os_prefers_dark() -> Option<bool> {
    let gtk_theme = gsettings_interface_key("gtk-theme");
    if gtk_theme.as_deref().is_some_and(|t| t.to_lowercase().contains("dark")) {
        return Some(true);
    }

    let scheme = gsettings_interface_key("color-scheme");
    if scheme.as_deref().is_some_and(|s| s.contains("prefer-dark")) {
        return Some(true);
    }

    match (gtk_theme, scheme) {
        (None, None) => None,
        _ => Some(false),
    }
}

#[cfg(target_os = "linux")]
fn gsettings_interface_key(key: &str) -> Option<String> {
    let output = std::process::Command::new("gsettings")
        .args(["get", "org.gnome.desktop.interface", key])
        .output()
        .ok()?;
    output
        .status
        .success()
        .then(|| String::from_utf8_lossy(&output.stdout).trim().to_string())
}

#[cfg(target_os = "macos")]
fn os_prefers_dark() -> Option<bool> {
    // `defaults` exits non-zero when the key is unset, which means light mode.
    let output = std::process::Command::new("defaults")
        .args(["read", "-g", "AppleInterfaceStyle"])
        .output()
        .ok()?;
    if !output.status.success() {
        return Some(false);
    }
    let style = String::from_utf8_lossy(&output.stdout).to_lowercase();
    Some(style.contains("dark"))
}

#[cfg(not(any(target_os = "windows", target_os = "linux", target_os = "macos")))]
fn os_prefers_dark() -> Option<bool> {
    None
}

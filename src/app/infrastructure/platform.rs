/// Best-effort check of the desktop's dark mode preference.
/// Falls back to light mode when nothing can be detected.
pub fn detect_system_dark_mode() -> bool {
    let detected = os_prefers_dark();
    log::debug!("System dark mode preference: {:?}", detected);
    detected.unwrap_or(false)
}

#[cfg(target_os = "windows")]
fn os_prefers_dark() -> Option<bool> {
    use winreg::RegKey;
    use winreg::enums::HKEY_CURRENT_USER;

    let key = RegKey::predef(HKEY_CURRENT_USER)
        .open_subkey("Software\\Microsoft\\Windows\\CurrentVersion\\Themes\\Personalize")
        .ok()?;
    // AppsUseLightTheme: 0 = dark mode, 1 = light mode
    let value = key.get_value::<u32, _>("AppsUseLightTheme").ok()?;
    Some(value == 0)
}

#[cfg(target_os = "linux")]
fn os_prefers_dark() -> Option<bool> {
    let scheme = command_output("gsettings", &["get", "org.gnome.desktop.interface", "color-scheme"]);
    if scheme.as_deref().is_some_and(|s| s.contains("prefer-dark")) {
        return Some(true);
    }
    let theme = command_output("gsettings", &["get", "org.gnome.desktop.interface", "gtk-theme"])?;
    Some(theme.to_lowercase().contains("dark"))
}

#[cfg(target_os = "macos")]
fn os_prefers_dark() -> Option<bool> {
    // `defaults` exits non-zero when the key is absent, i.e. light mode
    let style = command_output("defaults", &["read", "-g", "AppleInterfaceStyle"])?;
    Some(style.to_lowercase().contains("dark"))
}

#[cfg(not(any(target_os = "windows", target_os = "linux", target_os = "macos")))]
fn os_prefers_dark() -> Option<bool> {
    None
}

#[cfg(any(target_os = "linux", target_os = "macos"))]
fn command_output(program: &str, args: &[&str]) -> Option<String> {
    let output = std::process::Command::new(program).args(args).output().ok()?;
    if !output.status.success() {
        return None;
    }
    Some(String::from_utf8_lossy(&output.stdout).into_owned())
}

use serde::{Deserialize, Serialize};
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use crate::app::infrastructure::error::{AppError, Result};
use crate::app::infrastructure::platform::detect_system_dark_mode;

const MIN_FONT_SIZE: i32 = 8;
const MAX_FONT_SIZE: i32 = 72;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum ThemeMode {
    Light,
    Dark,
    SystemDefault,
}

impl ThemeMode {
    /// Resolve to a concrete dark/light answer.
    pub fn is_dark(&self) -> bool {
        match self {
            Self::Light => false,
            Self::Dark => true,
            Self::SystemDefault => detect_system_dark_mode(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum FontChoice {
    ScreenBold,
    Courier,
    HelveticaMono,
}

/// Startup configuration. Read once at launch and never written back.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AppSettings {
    #[serde(default = "default_theme_mode")]
    pub theme_mode: ThemeMode,

    #[serde(default = "default_font")]
    pub font: FontChoice,

    #[serde(default = "default_font_size")]
    pub font_size: u32,

    /// Ask before writing the PDF export
    #[serde(default = "default_confirm_export")]
    pub confirm_export: bool,

    /// Where `code.pdf` is written. Falls back to the download directory.
    #[serde(default)]
    pub export_dir: Option<PathBuf>,

    #[serde(default = "default_starter_markup")]
    pub starter_markup: String,

    #[serde(default)]
    pub starter_style: String,

    #[serde(default = "default_starter_script")]
    pub starter_script: String,
}

fn default_theme_mode() -> ThemeMode {
    ThemeMode::Light
}

fn default_font() -> FontChoice {
    FontChoice::Courier
}

fn default_font_size() -> u32 {
    14
}

fn default_confirm_export() -> bool {
    true
}

fn default_starter_markup() -> String {
    "<h1>Hello World...!</h1>".to_string()
}

fn default_starter_script() -> String {
    "console.log('Hello from JS');".to_string()
}

impl Default for AppSettings {
    fn default() -> Self {
        Self {
            theme_mode: default_theme_mode(),
            font: default_font(),
            font_size: default_font_size(),
            confirm_export: default_confirm_export(),
            export_dir: None,
            starter_markup: default_starter_markup(),
            starter_style: String::new(),
            starter_script: default_starter_script(),
        }
    }
}

impl AppSettings {
    /// Load settings from the config directory, or defaults if absent
    pub fn load() -> Self {
        Self::load_from(&Self::get_config_path())
    }

    /// Like `read_from`, but any failure yields defaults. A missing file is
    /// the normal first-run case and is not reported.
    pub fn load_from(path: &Path) -> Self {
        match Self::read_from(path) {
            Ok(settings) => settings,
            Err(AppError::Io(e)) if e.kind() == io::ErrorKind::NotFound => Self::default(),
            Err(e) => {
                log::warn!("Failed to load settings {}: {}. Using defaults.", path.display(), e);
                Self::default()
            }
        }
    }

    pub fn read_from(path: &Path) -> Result<Self> {
        let contents = fs::read_to_string(path)?;
        Ok(serde_json::from_str(&contents)?)
    }

    /// Editor font size in FLTK units, kept within a usable range.
    pub fn editor_font_size(&self) -> i32 {
        i32::try_from(self.font_size)
            .unwrap_or(MAX_FONT_SIZE)
            .clamp(MIN_FONT_SIZE, MAX_FONT_SIZE)
    }

    /// Get config file path (cross-platform)
    pub fn get_config_path() -> PathBuf {
        let mut path = dirs::config_dir().unwrap_or_else(|| PathBuf::from("."));
        path.push("quickcode");
        path.push("settings.json");
        path
    }

    /// Directory the PDF export is written to.
    pub fn resolved_export_dir(&self) -> PathBuf {
        self.export_dir
            .clone()
            .or_else(dirs::download_dir)
            .unwrap_or_else(|| PathBuf::from("."))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_settings() {
        let settings = AppSettings::default();
        assert_eq!(settings.theme_mode, ThemeMode::Light);
        assert_eq!(settings.font, FontChoice::Courier);
        assert_eq!(settings.font_size, 14);
        assert!(settings.confirm_export);
        assert!(settings.export_dir.is_none());
        assert_eq!(settings.starter_markup, "<h1>Hello World...!</h1>");
        assert!(settings.starter_style.is_empty());
    }

    #[test]
    fn test_partial_config() {
        let json = r#"{"theme_mode": "Dark", "confirm_export": false}"#;
        let settings: AppSettings = serde_json::from_str(json).unwrap();
        assert_eq!(settings.theme_mode, ThemeMode::Dark);
        assert!(!settings.confirm_export);
        assert_eq!(settings.font_size, 14);
        assert_eq!(settings.starter_script, "console.log('Hello from JS');");
    }

    #[test]
    fn test_load_missing_file_uses_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let settings = AppSettings::load_from(&dir.path().join("settings.json"));
        assert_eq!(settings, AppSettings::default());
    }

    #[test]
    fn test_load_corrupt_file_uses_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("settings.json");
        fs::write(&path, "{ not json").unwrap();
        assert_eq!(AppSettings::load_from(&path), AppSettings::default());
    }

    #[test]
    fn test_read_reports_parse_errors() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("settings.json");
        fs::write(&path, "[1, 2").unwrap();
        assert!(matches!(AppSettings::read_from(&path), Err(AppError::Json(_))));
    }

    #[test]
    fn test_unreadable_path_uses_defaults() {
        // A directory exists but cannot be read as a file
        let dir = tempfile::tempdir().unwrap();
        match AppSettings::read_from(dir.path()) {
            Err(AppError::Io(e)) => assert_ne!(e.kind(), io::ErrorKind::NotFound),
            other => panic!("expected an IO error, got {:?}", other),
        }
        assert_eq!(AppSettings::load_from(dir.path()), AppSettings::default());
    }

    #[test]
    fn test_editor_font_size_is_clamped() {
        let mut settings = AppSettings::default();
        assert_eq!(settings.editor_font_size(), 14);
        settings.font_size = u32::MAX;
        assert_eq!(settings.editor_font_size(), 72);
        settings.font_size = 3_000_000_000;
        assert_eq!(settings.editor_font_size(), 72);
        settings.font_size = 0;
        assert_eq!(settings.editor_font_size(), 8);
    }

    #[test]
    fn test_load_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("settings.json");
        fs::write(&path, r#"{"export_dir": "/tmp/exports", "font_size": 18}"#).unwrap();
        let settings = AppSettings::load_from(&path);
        assert_eq!(settings.font_size, 18);
        assert_eq!(settings.resolved_export_dir(), PathBuf::from("/tmp/exports"));
    }

    #[test]
    fn test_explicit_theme_modes() {
        assert!(!ThemeMode::Light.is_dark());
        assert!(ThemeMode::Dark.is_dark());
    }
}

//! Everything visual that depends on light/dark mode.
//!
//! `ThemeFlag` is the only stored value. Palette, icons and the editor theme
//! are derived from it on demand so they can never disagree.

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ThemeFlag {
    pub is_dark: bool,
}

impl ThemeFlag {
    pub fn new(is_dark: bool) -> Self {
        Self { is_dark }
    }

    /// Flip light <-> dark. Returns the new state.
    pub fn toggle(&mut self) -> bool {
        self.is_dark = !self.is_dark;
        self.is_dark
    }

    pub fn palette(&self) -> Palette {
        Palette::for_theme(self.is_dark)
    }

    pub fn icons(&self) -> IconSet {
        IconSet::for_theme(self.is_dark)
    }

    pub fn editor_theme(&self) -> EditorTheme {
        if self.is_dark {
            EditorTheme::Dark
        } else {
            EditorTheme::Light
        }
    }
}

/// A color known both by its CSS spelling and its RGB value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CssColor {
    pub css: &'static str,
    pub rgb: (u8, u8, u8),
}

pub const WHITE: CssColor = CssColor { css: "white", rgb: (255, 255, 255) };
pub const BLACK: CssColor = CssColor { css: "black", rgb: (0, 0, 0) };
pub const DARK_BACKGROUND: CssColor = CssColor { css: "#1e1e1e", rgb: (30, 30, 30) };

/// Page text and background colors, shared by the host chrome and the preview.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    pub foreground: CssColor,
    pub background: CssColor,
}

impl Palette {
    pub fn for_theme(is_dark: bool) -> Self {
        if is_dark {
            Self { foreground: WHITE, background: DARK_BACKGROUND }
        } else {
            Self { foreground: BLACK, background: WHITE }
        }
    }
}

/// Toolbar icon slots.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Icon {
    ThemeToggle,
    Pdf,
    About,
}

/// Image sources for the three toolbar icons. The theme toggle shows the
/// mode you would switch *to*.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IconSet {
    pub theme_toggle: &'static str,
    pub pdf: &'static str,
    pub about: &'static str,
}

impl IconSet {
    pub fn for_theme(is_dark: bool) -> Self {
        if is_dark {
            Self {
                theme_toggle: "images/lightmode.svg",
                pdf: "images/lightmodepdf.svg",
                about: "images/lightabout.svg",
            }
        } else {
            Self {
                theme_toggle: "images/darkmode.svg",
                pdf: "images/pdf.svg",
                about: "images/about.svg",
            }
        }
    }

    pub fn source(&self, icon: Icon) -> &'static str {
        match icon {
            Icon::ThemeToggle => self.theme_toggle,
            Icon::Pdf => self.pdf,
            Icon::About => self.about,
        }
    }
}

/// Cosmetic theme of the editing widgets.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EditorTheme {
    Light,
    Dark,
}

impl EditorTheme {
    /// Get the syntect theme key for this theme
    pub fn theme_key(&self) -> &'static str {
        match self {
            Self::Light => "InspiredGitHub",
            Self::Dark => "base16-eighties.dark",
        }
    }
}

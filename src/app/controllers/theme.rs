use crate::app::controllers::editor::Editors;
use crate::app::domain::{IconSet, Palette, ThemeFlag};

/// Host window decoration that follows the theme.
pub trait Chrome {
    fn set_icons(&mut self, icons: &IconSet);
    fn set_colors(&mut self, palette: Palette);
}

/// Owner of the one theme flag.
pub struct ThemeController {
    flag: ThemeFlag,
}

impl ThemeController {
    pub fn new(is_dark: bool) -> Self {
        Self { flag: ThemeFlag::new(is_dark) }
    }

    pub fn flag(&self) -> ThemeFlag {
        self.flag
    }

    pub fn is_dark(&self) -> bool {
        self.flag.is_dark
    }

    /// Flip light <-> dark. Callers follow up with `apply` and a recompose.
    pub fn toggle(&mut self) -> ThemeFlag {
        self.flag.toggle();
        log::debug!("Theme toggled, dark: {}", self.flag.is_dark);
        self.flag
    }

    /// Push the current flag to every themed surface: editor themes, then
    /// toolbar icons, then page colors.
    pub fn apply(&self, editors: &mut Editors, chrome: &mut dyn Chrome) {
        let editor_theme = self.flag.editor_theme();
        for editor in editors.iter_mut() {
            editor.set_theme(editor_theme);
        }
        chrome.set_icons(&self.flag.icons());
        chrome.set_colors(self.flag.palette());
    }
}

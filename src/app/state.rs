use crate::app::controllers::about::{AboutDialog, AboutOverlay};
use crate::app::controllers::actions::{copy_to_clipboard, Clipboard, Prompter};
use crate::app::controllers::editor::Editors;
use crate::app::controllers::export::{save_export, EXPORT_FILE_NAME};
use crate::app::controllers::preview::PreviewComposer;
use crate::app::controllers::theme::{Chrome, ThemeController};
use crate::app::domain::{AppSettings, Language, Message, ThemeFlag};

/// Host capabilities the playground drives.
pub struct Host {
    pub chrome: Box<dyn Chrome>,
    pub about: Box<dyn AboutOverlay>,
    pub clipboard: Box<dyn Clipboard>,
    pub prompter: Box<dyn Prompter>,
}

/// Application state: the three editors, the theme flag, the preview and
/// the about overlay. All UI events come in through `handle`.
pub struct Playground {
    editors: Editors,
    theme: ThemeController,
    preview: PreviewComposer,
    about: AboutDialog,
    host: Host,
    settings: AppSettings,
}

impl Playground {
    pub fn new(editors: Editors, preview: PreviewComposer, host: Host, settings: AppSettings) -> Self {
        let theme = ThemeController::new(settings.theme_mode.is_dark());
        Self {
            editors,
            theme,
            preview,
            about: AboutDialog::default(),
            host,
            settings,
        }
    }

    /// Bring every surface in line with the initial theme and render once.
    pub fn start(&mut self) {
        log::info!("Starting playground, dark: {}", self.theme.is_dark());
        self.apply_theme();
        self.recompose();
    }

    pub fn editors(&self) -> &Editors {
        &self.editors
    }

    pub fn theme(&self) -> ThemeFlag {
        self.theme.flag()
    }

    pub fn about_visible(&self) -> bool {
        self.about.is_visible()
    }

    /// Handle one message. Returns `true` if the app should exit.
    pub fn handle(&mut self, msg: Message) -> bool {
        match msg {
            Message::EditorChanged(language) => {
                log::trace!("{} editor changed", language.title());
                self.recompose();
            }
            Message::Copy(language) => self.copy(language),
            Message::Clear(language) => self.clear(language),
            Message::ToggleTheme => self.toggle_theme(),
            Message::ExportPdf => self.export_pdf(),
            Message::OpenInBrowser => self.open_in_browser(),
            Message::ShowAbout => self.about.open(self.host.about.as_mut()),
            Message::HideAbout => self.about.close(self.host.about.as_mut()),
            Message::AboutBackdropClick { x, y } => {
                self.about.backdrop_click(self.host.about.as_mut(), x, y);
            }
            Message::Quit => {
                if let Some(mirror) = self.preview.mirror() {
                    mirror.cleanup();
                }
                return true;
            }
        }
        false
    }

    /// Compose the three sources with the current theme and push the result
    /// to the preview.
    pub fn recompose(&mut self) {
        let sources = self.editors.sources();
        self.preview.recompose(&sources, self.theme.flag());
    }

    /// Derive editor themes, icons and page colors from the theme flag.
    pub fn apply_theme(&mut self) {
        self.theme.apply(&mut self.editors, self.host.chrome.as_mut());
    }

    pub fn toggle_theme(&mut self) {
        self.theme.toggle();
        self.apply_theme();
        self.recompose();
    }

    pub fn copy(&mut self, language: Language) {
        copy_to_clipboard(
            self.editors.get(language),
            self.host.clipboard.as_mut(),
            self.host.prompter.as_ref(),
        );
    }

    /// Empty one editor. The widget's change notification triggers the
    /// recompose.
    pub fn clear(&mut self, language: Language) {
        self.editors.get_mut(language).clear();
    }

    pub fn export_pdf(&mut self) {
        if self.settings.confirm_export {
            let question = format!("Download code as {}?", EXPORT_FILE_NAME);
            if !self.host.prompter.confirm(&question) {
                log::info!("PDF export cancelled");
                return;
            }
        }

        let dir = self.settings.resolved_export_dir();
        match save_export(&self.editors.sources(), &dir) {
            Ok(path) => self.host.prompter.notify(&format!("Saved {}", path.display())),
            Err(e) => {
                log::error!("PDF export failed: {}", e);
                self.host.prompter.notify(&format!("Export failed: {}", e));
            }
        }
    }

    pub fn open_in_browser(&mut self) {
        let Some(mirror) = self.preview.mirror() else {
            log::warn!("No preview file to open");
            return;
        };
        if let Err(e) = mirror.open_in_browser() {
            log::error!("Failed to open {}: {}", mirror.entry_path().display(), e);
            self.host.prompter.notify(&format!("Could not open browser: {}", e));
        }
    }
}

use crate::app::controllers::editor::EditorAdapter;
use crate::app::infrastructure::error::Result;

pub trait Clipboard {
    fn write(&mut self, text: &str) -> Result<()>;
}

/// User-facing notices and yes/no questions.
pub trait Prompter {
    fn notify(&self, message: &str);
    /// Blocks until answered.
    fn confirm(&self, question: &str) -> bool;
}

/// Copy an editor's text and confirm it. A failed clipboard write is only
/// logged.
pub fn copy_to_clipboard(editor: &EditorAdapter, clipboard: &mut dyn Clipboard, prompter: &dyn Prompter) {
    let language = editor.language();
    if let Err(e) = clipboard.write(&editor.text()) {
        log::warn!("Copying {} code failed: {}", language.title(), e);
        return;
    }
    prompter.notify(language.copied_notice());
}

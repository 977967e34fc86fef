use fltk::{app, dialog};

use crate::app::controllers::actions::{Clipboard, Prompter};
use crate::app::infrastructure::error::Result;

/// System clipboard through FLTK.
pub struct FltkClipboard;

impl Clipboard for FltkClipboard {
    fn write(&mut self, text: &str) -> Result<()> {
        app::copy(text);
        Ok(())
    }
}

/// Native message boxes.
pub struct DialogPrompter;

impl Prompter for DialogPrompter {
    fn notify(&self, message: &str) {
        dialog::message_default(message);
    }

    fn confirm(&self, question: &str) -> bool {
        matches!(dialog::choice2_default(question, "Download", "Cancel", ""), Some(0))
    }
}

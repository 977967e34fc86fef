//! In-memory stand-ins for the FLTK widgets, used by unit tests.

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use crate::app::controllers::about::{AboutOverlay, Rect};
use crate::app::controllers::actions::{Clipboard, Prompter};
use crate::app::controllers::editor::{ChangeListener, EditorWidget};
use crate::app::controllers::preview::{ComposedDocument, PreviewSurface};
use crate::app::controllers::theme::Chrome;
use crate::app::domain::{EditorTheme, IconSet, Language, Message, Palette};
use crate::app::infrastructure::error::Result;

/// Collects messages the way the FLTK channel would.
#[derive(Clone, Default)]
pub struct MessageQueue {
    messages: Rc<RefCell<Vec<Message>>>,
}

impl MessageQueue {
    pub fn sink(&self) -> impl Fn(Message) + Clone + 'static {
        let messages = self.messages.clone();
        move |msg| messages.borrow_mut().push(msg)
    }

    pub fn drain(&self) -> Vec<Message> {
        self.messages.borrow_mut().drain(..).collect()
    }
}

#[derive(Debug, Default)]
pub struct FakeEditorState {
    pub text: String,
    pub theme: Option<EditorTheme>,
    pub mode: Option<Language>,
}

pub struct FakeEditor {
    state: Rc<RefCell<FakeEditorState>>,
    listeners: Vec<ChangeListener>,
}

impl FakeEditor {
    pub fn new(text: &str) -> (Self, Rc<RefCell<FakeEditorState>>) {
        let state = Rc::new(RefCell::new(FakeEditorState {
            text: text.to_string(),
            ..Default::default()
        }));
        (Self { state: state.clone(), listeners: Vec::new() }, state)
    }
}

impl EditorWidget for FakeEditor {
    fn text(&self) -> String {
        self.state.borrow().text.clone()
    }

    fn set_text(&mut self, text: &str) {
        self.state.borrow_mut().text = text.to_string();
        for listener in &mut self.listeners {
            listener();
        }
    }

    fn set_theme(&mut self, theme: EditorTheme) {
        self.state.borrow_mut().theme = Some(theme);
    }

    fn set_mode(&mut self, language: Language) {
        self.state.borrow_mut().mode = Some(language);
    }

    fn subscribe(&mut self, listener: ChangeListener) {
        self.listeners.push(listener);
    }
}

pub struct FakeSurface {
    loads: Rc<RefCell<Vec<ComposedDocument>>>,
}

impl FakeSurface {
    pub fn new() -> (Self, Rc<RefCell<Vec<ComposedDocument>>>) {
        let loads = Rc::new(RefCell::new(Vec::new()));
        (Self { loads: loads.clone() }, loads)
    }
}

impl PreviewSurface for FakeSurface {
    fn load(&mut self, document: &ComposedDocument) -> Result<()> {
        self.loads.borrow_mut().push(document.clone());
        Ok(())
    }
}

#[derive(Debug, Default)]
pub struct ChromeState {
    pub icons: Option<IconSet>,
    pub colors: Option<Palette>,
}

pub struct FakeChrome {
    state: Rc<RefCell<ChromeState>>,
}

impl FakeChrome {
    pub fn new() -> (Self, Rc<RefCell<ChromeState>>) {
        let state = Rc::new(RefCell::new(ChromeState::default()));
        (Self { state: state.clone() }, state)
    }
}

impl Chrome for FakeChrome {
    fn set_icons(&mut self, icons: &IconSet) {
        self.state.borrow_mut().icons = Some(*icons);
    }

    fn set_colors(&mut self, palette: Palette) {
        self.state.borrow_mut().colors = Some(palette);
    }
}

pub struct FakeOverlay {
    bounds: Rect,
    shown: Rc<Cell<bool>>,
}

impl FakeOverlay {
    pub fn new(bounds: Rect) -> (Self, Rc<Cell<bool>>) {
        let shown = Rc::new(Cell::new(false));
        (Self { bounds, shown: shown.clone() }, shown)
    }
}

impl AboutOverlay for FakeOverlay {
    fn set_visible(&mut self, visible: bool) {
        self.shown.set(visible);
    }

    fn modal_bounds(&self) -> Rect {
        self.bounds
    }
}

pub struct FakeClipboard {
    contents: Rc<RefCell<Option<String>>>,
}

impl FakeClipboard {
    pub fn new() -> (Self, Rc<RefCell<Option<String>>>) {
        let contents = Rc::new(RefCell::new(None));
        (Self { contents: contents.clone() }, contents)
    }
}

impl Clipboard for FakeClipboard {
    fn write(&mut self, text: &str) -> Result<()> {
        *self.contents.borrow_mut() = Some(text.to_string());
        Ok(())
    }
}

/// Answers every confirmation with a fixed choice and records notices.
pub struct FakePrompter {
    answer: bool,
    notices: Rc<RefCell<Vec<String>>>,
}

impl FakePrompter {
    pub fn new(answer: bool) -> (Self, Rc<RefCell<Vec<String>>>) {
        let notices = Rc::new(RefCell::new(Vec::new()));
        (Self { answer, notices: notices.clone() }, notices)
    }
}

impl Prompter for FakePrompter {
    fn notify(&self, message: &str) {
        self.notices.borrow_mut().push(message.to_string());
    }

    fn confirm(&self, _question: &str) -> bool {
        self.answer
    }
}

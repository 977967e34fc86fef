use std::cell::{Cell, RefCell};
use std::rc::Rc;

use fltk::{
    app::Sender,
    button::Button,
    enums::{Color, Font},
    frame::Frame,
    group::{Flex, FlexType},
    prelude::*,
    text::{TextBuffer, TextEditor},
};

use crate::app::controllers::editor::{ChangeListener, EditorWidget};
use crate::app::domain::{EditorTheme, FontChoice, Language, Message};
use crate::app::services::syntax::{SyntaxAssets, SyntaxHighlighter};

pub const HEADER_HEIGHT: i32 = 28;

pub fn fltk_font(choice: FontChoice) -> Font {
    match choice {
        FontChoice::ScreenBold => Font::ScreenBold,
        FontChoice::Courier => Font::Courier,
        FontChoice::HelveticaMono => Font::Screen,
    }
}

/// One editor column: a title bar with Copy/Clear buttons above the
/// text editor.
pub struct EditorPanel {
    pub flex: Flex,
    pub title: Frame,
    pub copy_btn: Button,
    pub clear_btn: Button,
    pub editor: TextEditor,
}

impl EditorPanel {
    pub fn new(language: Language, sender: &Sender<Message>) -> Self {
        let mut flex = Flex::default();
        flex.set_type(FlexType::Column);

        let mut header = Flex::default();
        header.set_type(FlexType::Row);
        header.set_margin(2);
        let mut title = Frame::default().with_label(language.title());
        title.set_label_font(Font::HelveticaBold);
        title.set_label_size(13);
        let mut copy_btn = Button::default().with_label("Copy");
        copy_btn.set_tooltip(&format!("Copy {} code", language.title()));
        header.fixed(&copy_btn, 55);
        let mut clear_btn = Button::default().with_label("Clear");
        clear_btn.set_tooltip(&format!("Clear {} code", language.title()));
        header.fixed(&clear_btn, 55);
        header.end();
        flex.fixed(&header, HEADER_HEIGHT);

        let editor = TextEditor::new(0, 0, 0, 0, "");
        flex.end();

        copy_btn.set_callback({ let s = *sender; move |_| s.send(Message::Copy(language)) });
        clear_btn.set_callback({ let s = *sender; move |_| s.send(Message::Clear(language)) });

        Self { flex, title, copy_btn, clear_btn, editor }
    }
}

/// `EditorWidget` over an FLTK text editor, with syntect highlighting kept
/// in a parallel style buffer.
pub struct FltkEditor {
    editor: TextEditor,
    buffer: TextBuffer,
    style_buffer: TextBuffer,
    highlighter: Rc<RefCell<SyntaxHighlighter>>,
    applied_styles: Rc<Cell<usize>>,
}

impl FltkEditor {
    pub fn new(
        mut editor: TextEditor,
        text: &str,
        assets: Rc<SyntaxAssets>,
        font: FontChoice,
        font_size: i32,
    ) -> Self {
        let font = fltk_font(font);
        let highlighter = Rc::new(RefCell::new(SyntaxHighlighter::new(
            assets,
            EditorTheme::Light,
            font,
            font_size,
        )));
        let mut buffer = TextBuffer::default();
        let style_buffer = TextBuffer::default();
        let applied_styles = Rc::new(Cell::new(0));

        editor.set_buffer(buffer.clone());
        editor.set_text_font(font);
        editor.set_text_size(font_size);
        editor.set_linenumber_width(32);

        // Restyle on every edit. Registered before any text is loaded so
        // the style buffer never lags behind.
        {
            let text_buf = buffer.clone();
            let mut style_buf = style_buffer.clone();
            let mut ed = editor.clone();
            let hl = highlighter.clone();
            let applied = applied_styles.clone();
            buffer.add_modify_callback(move |_pos, inserted, deleted, _restyled, _deleted_text| {
                if inserted > 0 || deleted > 0 {
                    restyle(&text_buf, &mut style_buf, &mut ed, &hl, &applied);
                }
            });
        }

        buffer.set_text(text);

        Self {
            editor,
            buffer,
            style_buffer,
            highlighter,
            applied_styles,
        }
    }

    fn restyle(&mut self) {
        restyle(
            &self.buffer,
            &mut self.style_buffer,
            &mut self.editor,
            &self.highlighter,
            &self.applied_styles,
        );
    }
}

fn restyle(
    buffer: &TextBuffer,
    style_buffer: &mut TextBuffer,
    editor: &mut TextEditor,
    highlighter: &RefCell<SyntaxHighlighter>,
    applied: &Cell<usize>,
) {
    let mut hl = highlighter.borrow_mut();
    let styles = hl.highlight(&buffer.text());
    style_buffer.set_text(&styles);

    // Re-register the table only when new colors appeared
    if hl.style_count() != applied.get() {
        editor.set_highlight_data(style_buffer.clone(), hl.style_table());
        applied.set(hl.style_count());
    }
    editor.redraw();
}

impl EditorWidget for FltkEditor {
    fn text(&self) -> String {
        self.buffer.text()
    }

    fn set_text(&mut self, text: &str) {
        self.buffer.set_text(text);
    }

    fn set_theme(&mut self, theme: EditorTheme) {
        let (background, foreground) = {
            let mut hl = self.highlighter.borrow_mut();
            hl.set_theme(theme);
            (hl.background(), hl.foreground())
        };

        self.editor.set_color(background);
        self.editor.set_text_color(foreground);
        self.editor.set_cursor_color(foreground);
        match theme {
            EditorTheme::Dark => {
                self.editor.set_selection_color(Color::from_rgb(70, 70, 100));
                self.editor.set_linenumber_bgcolor(Color::from_rgb(40, 40, 40));
                self.editor.set_linenumber_fgcolor(Color::from_rgb(150, 150, 150));
            }
            EditorTheme::Light => {
                self.editor.set_selection_color(Color::from_rgb(173, 216, 230));
                self.editor.set_linenumber_bgcolor(Color::from_rgb(240, 240, 240));
                self.editor.set_linenumber_fgcolor(Color::from_rgb(100, 100, 100));
            }
        }

        self.applied_styles.set(0);
        self.restyle();
    }

    fn set_mode(&mut self, language: Language) {
        self.highlighter.borrow_mut().set_mode(language);
        self.applied_styles.set(0);
        self.restyle();
    }

    fn subscribe(&mut self, mut listener: ChangeListener) {
        self.buffer
            .add_modify_callback(move |_pos, inserted, deleted, _restyled, _deleted_text| {
                if inserted > 0 || deleted > 0 {
                    listener();
                }
            });
    }
}

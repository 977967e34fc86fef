use crate::app::domain::{EditorTheme, Language, Message, Sources};

/// Called after every text change of a widget.
pub type ChangeListener = Box<dyn FnMut()>;

/// The text-editing widget behind one editor slot.
pub trait EditorWidget {
    fn text(&self) -> String;
    /// Replace the whole text. Fires the change listeners.
    fn set_text(&mut self, text: &str);
    fn set_theme(&mut self, theme: EditorTheme);
    /// Select the syntax-highlighting mode.
    fn set_mode(&mut self, language: Language);
    fn subscribe(&mut self, listener: ChangeListener);
}

/// One editor slot: a widget bound to its language, reporting changes as
/// `Message::EditorChanged`.
pub struct EditorAdapter {
    language: Language,
    widget: Box<dyn EditorWidget>,
}

impl EditorAdapter {
    pub fn new<F>(language: Language, mut widget: Box<dyn EditorWidget>, notify: F) -> Self
    where
        F: Fn(Message) + 'static,
    {
        widget.set_mode(language);
        widget.subscribe(Box::new(move || notify(Message::EditorChanged(language))));
        Self { language, widget }
    }

    pub fn language(&self) -> Language {
        self.language
    }

    pub fn text(&self) -> String {
        self.widget.text()
    }

    pub fn set_text(&mut self, text: &str) {
        self.widget.set_text(text);
    }

    /// Empty the editor through the widget so the usual change
    /// notification fires.
    pub fn clear(&mut self) {
        self.widget.set_text("");
    }

    pub fn set_theme(&mut self, theme: EditorTheme) {
        self.widget.set_theme(theme);
    }
}

/// The three editor slots, indexed by `Language`.
pub struct Editors {
    slots: [EditorAdapter; 3],
}

impl Editors {
    /// Bind widgets given in `Language::ALL` order.
    pub fn new<F>(widgets: [Box<dyn EditorWidget>; 3], notify: F) -> Self
    where
        F: Fn(Message) + Clone + 'static,
    {
        let [markup, style, script] = widgets;
        Self {
            slots: [
                EditorAdapter::new(Language::Markup, markup, notify.clone()),
                EditorAdapter::new(Language::Style, style, notify.clone()),
                EditorAdapter::new(Language::Script, script, notify),
            ],
        }
    }

    pub fn get(&self, language: Language) -> &EditorAdapter {
        &self.slots[language.index()]
    }

    pub fn get_mut(&mut self, language: Language) -> &mut EditorAdapter {
        &mut self.slots[language.index()]
    }

    pub fn iter_mut(&mut self) -> impl Iterator<Item = &mut EditorAdapter> {
        self.slots.iter_mut()
    }

    pub fn sources(&self) -> Sources {
        Sources::new(
            self.get(Language::Markup).text(),
            self.get(Language::Style).text(),
            self.get(Language::Script).text(),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::testing::{FakeEditor, MessageQueue};

    #[test]
    fn test_adapter_sets_mode_and_forwards_changes() {
        let (widget, state) = FakeEditor::new("");
        let queue = MessageQueue::default();
        let mut adapter = EditorAdapter::new(Language::Style, Box::new(widget), queue.sink());

        assert_eq!(state.borrow().mode, Some(Language::Style));
        adapter.set_text("body {}");
        assert_eq!(queue.drain(), vec![Message::EditorChanged(Language::Style)]);
        assert_eq!(adapter.text(), "body {}");
    }

    #[test]
    fn test_clear_empties_and_notifies_once() {
        let (widget, state) = FakeEditor::new("<p>x</p>");
        let queue = MessageQueue::default();
        let mut adapter = EditorAdapter::new(Language::Markup, Box::new(widget), queue.sink());

        adapter.clear();
        assert_eq!(state.borrow().text, "");
        assert_eq!(queue.drain().len(), 1);
    }

    #[test]
    fn test_editors_snapshot_in_slot_order() {
        let (markup, _) = FakeEditor::new("<p>hi</p>");
        let (style, _) = FakeEditor::new("p { }");
        let (script, _) = FakeEditor::new("run()");
        let queue = MessageQueue::default();
        let editors = Editors::new([Box::new(markup), Box::new(style), Box::new(script)], queue.sink());

        assert_eq!(editors.sources(), Sources::new("<p>hi</p>", "p { }", "run()"));
        assert_eq!(editors.get(Language::Script).language(), Language::Script);
    }
}

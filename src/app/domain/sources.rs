use super::language::Language;

/// Snapshot of the three editor texts.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Sources {
    pub markup: String,
    pub style: String,
    pub script: String,
}

impl Sources {
    pub fn new(markup: impl Into<String>, style: impl Into<String>, script: impl Into<String>) -> Self {
        Self {
            markup: markup.into(),
            style: style.into(),
            script: script.into(),
        }
    }

    pub fn get(&self, language: Language) -> &str {
        match language {
            Language::Markup => &self.markup,
            Language::Style => &self.style,
            Language::Script => &self.script,
        }
    }
}

/// One of the three editor slots of the playground.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Language {
    Markup,
    Style,
    Script,
}

impl Language {
    /// All slots in composition and export order.
    pub const ALL: [Language; 3] = [Language::Markup, Language::Style, Language::Script];

    /// Short title shown above the editor.
    pub fn title(&self) -> &'static str {
        match self {
            Self::Markup => "HTML",
            Self::Style => "CSS",
            Self::Script => "JS",
        }
    }

    /// Section heading used in the PDF export.
    pub fn export_heading(&self) -> &'static str {
        match self {
            Self::Markup => "HTML Code:",
            Self::Style => "CSS Code:",
            Self::Script => "JavaScript Code:",
        }
    }

    /// Name of the syntect syntax used for highlighting.
    pub fn syntax_name(&self) -> &'static str {
        match self {
            Self::Markup => "HTML",
            Self::Style => "CSS",
            Self::Script => "JavaScript",
        }
    }

    pub fn copied_notice(&self) -> &'static str {
        match self {
            Self::Markup => "HTML code copied!",
            Self::Style => "CSS code copied!",
            Self::Script => "JS code copied!",
        }
    }

    pub fn index(&self) -> usize {
        match self {
            Self::Markup => 0,
            Self::Style => 1,
            Self::Script => 2,
        }
    }
}

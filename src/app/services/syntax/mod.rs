mod highlighter;
mod style_map;

use std::rc::Rc;

use fltk::enums::{Color, Font};
use fltk::text::StyleTableEntry;
use syntect::highlighting::{Theme, ThemeSet};
use syntect::parsing::SyntaxSet;

use style_map::StyleMap;

use crate::app::domain::{EditorTheme, Language};

/// Syntax definitions and themes, loaded once and shared by all editors.
pub struct SyntaxAssets {
    syntax_set: SyntaxSet,
    theme_set: ThemeSet,
}

impl SyntaxAssets {
    pub fn load() -> Rc<Self> {
        Rc::new(Self {
            syntax_set: SyntaxSet::load_defaults_newlines(),
            theme_set: ThemeSet::load_defaults(),
        })
    }

    fn theme(&self, theme: EditorTheme) -> &Theme {
        &self.theme_set.themes[theme.theme_key()]
    }
}

/// Per-editor highlighting state: current syntax, theme and style table.
pub struct SyntaxHighlighter {
    assets: Rc<SyntaxAssets>,
    syntax_name: Option<String>,
    theme: EditorTheme,
    style_map: StyleMap,
}

impl SyntaxHighlighter {
    pub fn new(assets: Rc<SyntaxAssets>, theme: EditorTheme, font: Font, font_size: i32) -> Self {
        let plain = theme_foreground(assets.theme(theme));
        Self {
            assets,
            syntax_name: None,
            theme,
            style_map: StyleMap::new(font, font_size, plain),
        }
    }

    /// Select the syntax for a language slot. Unknown syntaxes fall back
    /// to plain text.
    pub fn set_mode(&mut self, language: Language) {
        let name = language.syntax_name();
        self.syntax_name = self
            .assets
            .syntax_set
            .find_syntax_by_name(name)
            .map(|s| s.name.clone());
        if self.syntax_name.is_none() {
            log::warn!("No syntax definition for {}", name);
        }
    }

    pub fn set_theme(&mut self, theme: EditorTheme) {
        self.theme = theme;
        let plain = theme_foreground(self.assets.theme(theme));
        self.style_map.reset(plain);
    }

    pub fn highlight(&mut self, text: &str) -> String {
        let syntax = self
            .syntax_name
            .as_deref()
            .and_then(|name| self.assets.syntax_set.find_syntax_by_name(name));
        match syntax {
            Some(syntax) => highlighter::highlight_full(
                text,
                syntax,
                &self.assets.syntax_set,
                self.assets.theme(self.theme),
                &mut self.style_map,
            ),
            None => highlighter::plain_style(text),
        }
    }

    /// Get the style table for FLTK's set_highlight_data.
    pub fn style_table(&self) -> Vec<StyleTableEntry> {
        self.style_map.entries().to_vec()
    }

    pub fn style_count(&self) -> usize {
        self.style_map.entries().len()
    }

    /// Editor background of the current theme.
    pub fn background(&self) -> Color {
        self.assets
            .theme(self.theme)
            .settings
            .background
            .map(|c| Color::from_rgb(c.r, c.g, c.b))
            .unwrap_or(match self.theme {
                EditorTheme::Light => Color::White,
                EditorTheme::Dark => Color::from_rgb(30, 30, 30),
            })
    }

    pub fn foreground(&self) -> Color {
        theme_foreground(self.assets.theme(self.theme))
    }
}

fn theme_foreground(theme: &Theme) -> Color {
    theme
        .settings
        .foreground
        .map(|c| Color::from_rgb(c.r, c.g, c.b))
        .unwrap_or(Color::Foreground)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn highlighter() -> SyntaxHighlighter {
        SyntaxHighlighter::new(SyntaxAssets::load(), EditorTheme::Light, Font::Courier, 14)
    }

    #[test]
    fn test_style_string_has_one_char_per_byte() {
        let mut hl = highlighter();
        hl.set_mode(Language::Script);
        let text = "const s = 'héllo';\nconsole.log(s);\n";
        assert_eq!(hl.highlight(text).len(), text.len());
    }

    #[test]
    fn test_markup_uses_several_styles() {
        let mut hl = highlighter();
        hl.set_mode(Language::Markup);
        hl.highlight("<h1 class=\"title\">Hello</h1>\n");
        assert!(hl.style_table().len() > 1);
    }

    #[test]
    fn test_without_mode_text_is_plain() {
        let mut hl = highlighter();
        assert_eq!(hl.highlight("body {}"), "AAAAAAA");
    }

    #[test]
    fn test_theme_switch_resets_table() {
        let mut hl = highlighter();
        hl.set_mode(Language::Style);
        hl.highlight("body { color: red; }\n");
        hl.set_theme(EditorTheme::Dark);
        assert_eq!(hl.style_table().len(), 1);
    }
}

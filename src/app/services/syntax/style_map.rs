use std::collections::HashMap;

use fltk::enums::{Color, Font};
use fltk::text::StyleTableEntry;
use syntect::highlighting::Color as SyntectColor;

/// Highest style character FLTK will see; later colors reuse it.
const LAST_STYLE: u8 = b'Z';

/// Maps syntect RGB colors to FLTK style characters ('A', 'B', 'C', ...).
/// 'A' is always the plain text color of the current theme.
pub struct StyleMap {
    color_to_char: HashMap<(u8, u8, u8), char>,
    entries: Vec<StyleTableEntry>,
    font: Font,
    font_size: i32,
}

impl StyleMap {
    pub fn new(font: Font, font_size: i32, plain: Color) -> Self {
        let mut map = Self {
            color_to_char: HashMap::new(),
            entries: Vec::new(),
            font,
            font_size,
        };
        map.reset(plain);
        map
    }

    /// Style character for a syntect color, inserting a new entry if needed.
    pub fn get_or_insert(&mut self, color: SyntectColor) -> char {
        let key = (color.r, color.g, color.b);
        if let Some(&ch) = self.color_to_char.get(&key) {
            return ch;
        }

        let ch = (b'A' + self.entries.len() as u8) as char;
        if ch as u8 > LAST_STYLE {
            return LAST_STYLE as char;
        }
        self.entries.push(StyleTableEntry {
            color: Color::from_rgb(color.r, color.g, color.b),
            font: self.font,
            size: self.font_size,
        });
        self.color_to_char.insert(key, ch);
        ch
    }

    pub fn entries(&self) -> &[StyleTableEntry] {
        &self.entries
    }

    /// Drop all mappings (theme change) and reseed 'A' with `plain`.
    pub fn reset(&mut self, plain: Color) {
        self.color_to_char.clear();
        self.entries.clear();
        self.entries.push(StyleTableEntry {
            color: plain,
            font: self.font,
            size: self.font_size,
        });
    }
}

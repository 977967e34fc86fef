use syntect::highlighting::{HighlightIterator, HighlightState, Highlighter, Theme};
use syntect::parsing::{ParseState, ScopeStack, SyntaxReference, SyntaxSet};
use syntect::util::LinesWithEndings;

use super::style_map::StyleMap;

/// Full highlight of `text`. Returns one style char per byte, the layout
/// FLTK's style buffer expects.
pub fn highlight_full(
    text: &str,
    syntax: &SyntaxReference,
    syntax_set: &SyntaxSet,
    theme: &Theme,
    style_map: &mut StyleMap,
) -> String {
    let highlighter = Highlighter::new(theme);
    let mut parse_state = ParseState::new(syntax);
    let mut highlight_state = HighlightState::new(&highlighter, ScopeStack::new());
    let mut style_string = String::with_capacity(text.len());

    for line in LinesWithEndings::from(text) {
        let ops = parse_state.parse_line(line, syntax_set).unwrap_or_default();
        let iter = HighlightIterator::new(&mut highlight_state, &ops, line, &highlighter);
        for (style, piece) in iter {
            let ch = style_map.get_or_insert(style.foreground);
            style_string.extend(std::iter::repeat_n(ch, piece.len()));
        }
    }

    style_string
}

/// Style string for text with no known syntax.
pub fn plain_style(text: &str) -> String {
    "A".repeat(text.len())
}

//! PDF export of the three sources.
//!
//! Layout coordinates are millimetres on an A4 page with the origin at the
//! top-left corner.

use std::fs;
use std::path::{Path, PathBuf};

use crate::app::domain::{Language, Sources};
use crate::app::infrastructure::error::Result;
use crate::app::infrastructure::pdf::PdfGenerator;

pub const EXPORT_FILE_NAME: &str = "code.pdf";
pub const EXPORT_TITLE: &str = "QuickCode Project Export";

const MARGIN_X: f32 = 10.0;
const TITLE_Y: f32 = 10.0;
const TOP_MARGIN: f32 = 20.0;
const PAGE_BOTTOM: f32 = 280.0;
const WRAP_WIDTH: f32 = 180.0;
const SEPARATOR_END_X: f32 = 200.0;

const TITLE_SIZE: f32 = 14.0;
const HEADING_SIZE: f32 = 12.0;
const BODY_SIZE: f32 = 10.0;

const HEADING_ADVANCE: f32 = 8.0;
const LINE_HEIGHT: f32 = 6.0;
const SEPARATOR_GAP: f32 = 2.0;
const AFTER_SEPARATOR: f32 = 10.0;

/// Fonts the export asks for. Everything is set in Courier.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExportFont {
    Courier,
}

/// Page-layout primitives of a paginated document backend.
pub trait DocumentGenerator {
    fn set_font(&mut self, font: ExportFont);
    fn set_font_size(&mut self, size: f32);
    /// Wrap `text` so no line is wider than `width` at the current font.
    fn split_text_to_size(&self, text: &str, width: f32) -> Vec<String>;
    fn text(&mut self, text: &str, x: f32, y: f32);
    fn line(&mut self, x1: f32, y1: f32, x2: f32, y2: f32);
    fn add_page(&mut self);
    fn finish(self) -> Result<Vec<u8>>
    where
        Self: Sized;
}

/// Vertical write position plus whether anything has been drawn on the
/// current page yet.
struct Cursor {
    y: f32,
    page_used: bool,
}

impl Cursor {
    fn new_page<G: DocumentGenerator>(&mut self, generator: &mut G) {
        generator.add_page();
        self.y = TOP_MARGIN;
        self.page_used = false;
    }

    /// Sections after the first begin on a page of their own. A page that
    /// is still untouched is reused instead of leaving a blank one behind.
    fn start_section<G: DocumentGenerator>(&mut self, generator: &mut G) {
        if self.page_used {
            self.new_page(generator);
        } else {
            self.y = TOP_MARGIN;
        }
    }
}

/// Lay out the title and one section per language.
pub fn layout_export<G: DocumentGenerator>(generator: &mut G, sources: &Sources) {
    generator.set_font(ExportFont::Courier);
    generator.set_font_size(TITLE_SIZE);
    generator.text(EXPORT_TITLE, MARGIN_X, TITLE_Y);

    let mut cursor = Cursor { y: TOP_MARGIN, page_used: true };
    for (i, language) in Language::ALL.iter().enumerate() {
        if i > 0 {
            cursor.start_section(generator);
        }
        add_code_block(generator, &mut cursor, language.export_heading(), sources.get(*language));
    }
}

fn add_code_block<G: DocumentGenerator>(generator: &mut G, cursor: &mut Cursor, heading: &str, code: &str) {
    generator.set_font(ExportFont::Courier);
    generator.set_font_size(HEADING_SIZE);
    generator.text(heading, MARGIN_X, cursor.y);
    cursor.page_used = true;
    cursor.y += HEADING_ADVANCE;

    generator.set_font(ExportFont::Courier);
    generator.set_font_size(BODY_SIZE);
    for line in generator.split_text_to_size(code, WRAP_WIDTH) {
        if cursor.y > PAGE_BOTTOM {
            cursor.new_page(generator);
        }
        generator.text(&line, MARGIN_X, cursor.y);
        cursor.page_used = true;
        cursor.y += LINE_HEIGHT;
    }

    // No separator when it would fall off the page; the next write breaks
    cursor.y += SEPARATOR_GAP;
    if cursor.y < PAGE_BOTTOM {
        generator.line(MARGIN_X, cursor.y, SEPARATOR_END_X, cursor.y);
        cursor.y += AFTER_SEPARATOR;
    }
}

/// Render the export into document bytes.
pub fn export_document<G: DocumentGenerator>(mut generator: G, sources: &Sources) -> Result<Vec<u8>> {
    layout_export(&mut generator, sources);
    generator.finish()
}

/// Render with printpdf and write `code.pdf` into `dir`.
pub fn save_export(sources: &Sources, dir: &Path) -> Result<PathBuf> {
    let bytes = export_document(PdfGenerator::new(EXPORT_TITLE)?, sources)?;
    let path = dir.join(EXPORT_FILE_NAME);
    fs::write(&path, &bytes)?;
    log::info!("Exported {} bytes to {}", bytes.len(), path.display());
    Ok(path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::services::text_wrap::wrap_columns;

    #[derive(Debug, Clone, PartialEq)]
    enum Op {
        Text { text: String, y: f32, page: usize },
        Line { y: f32 },
        AddPage,
    }

    /// Records layout calls. Wraps at two millimetres per character.
    #[derive(Default)]
    struct RecordingGenerator {
        ops: Vec<Op>,
        page: usize,
        fonts: Vec<ExportFont>,
        sizes: Vec<f32>,
    }

    impl RecordingGenerator {
        fn pages(&self) -> usize {
            self.page + 1
        }

        fn heading_pages(&self) -> Vec<usize> {
            self.ops
                .iter()
                .filter_map(|op| match op {
                    Op::Text { text, page, .. } if text.ends_with("Code:") => Some(*page),
                    _ => None,
                })
                .collect()
        }
    }

    impl DocumentGenerator for RecordingGenerator {
        fn set_font(&mut self, font: ExportFont) {
            self.fonts.push(font);
        }

        fn set_font_size(&mut self, size: f32) {
            self.sizes.push(size);
        }

        fn split_text_to_size(&self, text: &str, width: f32) -> Vec<String> {
            wrap_columns(text, (width / 2.0) as usize)
        }

        fn text(&mut self, text: &str, _x: f32, y: f32) {
            self.ops.push(Op::Text { text: text.to_string(), y, page: self.page });
        }

        fn line(&mut self, _x1: f32, y1: f32, _x2: f32, _y2: f32) {
            self.ops.push(Op::Line { y: y1 });
        }

        fn add_page(&mut self) {
            self.page += 1;
            self.ops.push(Op::AddPage);
        }

        fn finish(self) -> Result<Vec<u8>> {
            Ok(Vec::new())
        }
    }

    fn lines(n: usize) -> String {
        (0..n).map(|i| format!("line {}", i)).collect::<Vec<_>>().join("\n")
    }

    #[test]
    fn test_short_export_one_section_per_page() {
        let mut generator = RecordingGenerator::default();
        layout_export(&mut generator, &Sources::new("<p>hi</p>", "p {}", "go()"));

        assert_eq!(generator.pages(), 3);
        assert_eq!(generator.heading_pages(), vec![0, 1, 2]);
        assert_eq!(
            generator.ops[0],
            Op::Text { text: EXPORT_TITLE.to_string(), y: TITLE_Y, page: 0 }
        );
    }

    #[test]
    fn test_long_section_spills_onto_more_pages() {
        let mut generator = RecordingGenerator::default();
        layout_export(&mut generator, &Sources::new(lines(120), "", ""));

        let headings = generator.heading_pages();
        assert!(headings[1] > 1, "style section should start after the markup pages");
        assert!(generator.pages() > 3);
        for op in &generator.ops {
            if let Op::Text { y, .. } = op {
                assert!(*y <= PAGE_BOTTOM);
            }
        }
    }

    #[test]
    fn test_new_page_resets_cursor_to_top_margin() {
        let mut generator = RecordingGenerator::default();
        layout_export(&mut generator, &Sources::new(lines(60), "", ""));

        let after_break = generator
            .ops
            .iter()
            .skip_while(|op| **op != Op::AddPage)
            .nth(1)
            .cloned();
        assert_eq!(
            after_break,
            Some(Op::Text { text: "line 43".to_string(), y: TOP_MARGIN, page: 1 })
        );
    }

    #[test]
    fn test_no_blank_page_when_separator_overflows() {
        // 42 lines end at y = 280; the separator would land past the bottom
        let mut generator = RecordingGenerator::default();
        layout_export(&mut generator, &Sources::new(lines(42), "", ""));

        assert_eq!(generator.pages(), 3);
        assert_eq!(generator.heading_pages(), vec![0, 1, 2]);
        let doubled = generator
            .ops
            .windows(2)
            .any(|w| w[0] == Op::AddPage && w[1] == Op::AddPage);
        assert!(!doubled);
    }

    #[test]
    fn test_no_trailing_blank_page() {
        let mut generator = RecordingGenerator::default();
        layout_export(&mut generator, &Sources::new("", "", lines(42)));

        assert_eq!(generator.pages(), 3);
        assert_ne!(generator.ops.last(), Some(&Op::AddPage));
    }

    #[test]
    fn test_everything_set_in_plain_courier() {
        let mut generator = RecordingGenerator::default();
        layout_export(&mut generator, &Sources::new("a", "b", "c"));

        assert!(!generator.fonts.is_empty());
        assert!(generator.fonts.iter().all(|f| *f == ExportFont::Courier));
        assert_eq!(generator.sizes[..3], [TITLE_SIZE, HEADING_SIZE, BODY_SIZE]);
    }

    #[test]
    fn test_separator_after_each_short_section() {
        let mut generator = RecordingGenerator::default();
        layout_export(&mut generator, &Sources::new("a", "b", "c"));
        let separators: Vec<_> = generator.ops.iter().filter(|op| matches!(op, Op::Line { .. })).collect();
        // heading at 20, one line at 28, separator at 36
        assert_eq!(separators, vec![&Op::Line { y: 36.0 }; 3]);
    }

    #[test]
    fn test_save_export_writes_pdf() {
        let dir = tempfile::tempdir().unwrap();
        let path = save_export(&Sources::new("<p>hi</p>", "", ""), dir.path()).unwrap();
        assert_eq!(path, dir.path().join("code.pdf"));
        let bytes = fs::read(path).unwrap();
        assert!(bytes.starts_with(b"%PDF"));
    }
}

//! `DocumentGenerator` backed by printpdf.
//!
//! Callers lay out in millimetres from the top-left corner of an A4 page,
//! PDF space starts at the bottom-left, so y is flipped here.

use printpdf::{
    BuiltinFont, Color, Greyscale, IndirectFontRef, Line, Mm, PdfDocument, PdfDocumentReference,
    PdfLayerReference, Point,
};

use crate::app::controllers::export::{DocumentGenerator, ExportFont};
use crate::app::infrastructure::error::Result;
use crate::app::services::text_wrap::wrap_columns;

pub const PAGE_WIDTH_MM: f32 = 210.0;
pub const PAGE_HEIGHT_MM: f32 = 297.0;

const LAYER_NAME: &str = "Layer 1";
const PT_TO_MM: f32 = 25.4 / 72.0;
/// Courier glyphs are all 600/1000 em wide.
const COURIER_ADVANCE_EM: f32 = 0.6;
const DEFAULT_FONT_SIZE: f32 = 16.0;

/// Characters the Windows-1252 code page places in 0x80..=0x9F.
const WIN_ANSI_EXTRAS: [char; 27] = [
    '\u{20ac}', '\u{201a}', '\u{0192}', '\u{201e}', '\u{2026}', '\u{2020}', '\u{2021}',
    '\u{02c6}', '\u{2030}', '\u{0160}', '\u{2039}', '\u{0152}', '\u{017d}', '\u{2018}',
    '\u{2019}', '\u{201c}', '\u{201d}', '\u{2022}', '\u{2013}', '\u{2014}', '\u{02dc}',
    '\u{2122}', '\u{0161}', '\u{203a}', '\u{0153}', '\u{017e}', '\u{0178}',
];

/// Whether a built-in PDF font can draw `c`. Built-in fonts use WinAnsi
/// encoding; anything else is left out of the content stream.
fn is_win_ansi(c: char) -> bool {
    matches!(c, ' '..='~' | '\u{a0}'..='\u{ff}') || WIN_ANSI_EXTRAS.contains(&c)
}

pub struct PdfGenerator {
    doc: PdfDocumentReference,
    layer: PdfLayerReference,
    courier: IndirectFontRef,
    font: ExportFont,
    font_size: f32,
    page_count: usize,
    dropped_chars: usize,
}

impl PdfGenerator {
    pub fn new(title: &str) -> Result<Self> {
        let (doc, page, layer) =
            PdfDocument::new(title, Mm(PAGE_WIDTH_MM), Mm(PAGE_HEIGHT_MM), LAYER_NAME);
        let courier = doc.add_builtin_font(BuiltinFont::Courier)?;
        let layer = doc.get_page(page).get_layer(layer);
        layer.set_outline_color(Color::Greyscale(Greyscale::new(0.0, None)));
        layer.set_outline_thickness(0.5);

        Ok(Self {
            doc,
            layer,
            courier,
            font: ExportFont::Courier,
            font_size: DEFAULT_FONT_SIZE,
            page_count: 1,
            dropped_chars: 0,
        })
    }

    pub fn page_count(&self) -> usize {
        self.page_count
    }

    /// Characters drawn so far that the built-in fonts cannot encode.
    pub fn dropped_chars(&self) -> usize {
        self.dropped_chars
    }

    /// Width of one character at the current size, in mm.
    fn char_width(&self) -> f32 {
        COURIER_ADVANCE_EM * self.font_size * PT_TO_MM
    }

    fn current_font(&self) -> &IndirectFontRef {
        match self.font {
            ExportFont::Courier => &self.courier,
        }
    }
}

impl DocumentGenerator for PdfGenerator {
    fn set_font(&mut self, font: ExportFont) {
        self.font = font;
    }

    fn set_font_size(&mut self, size: f32) {
        self.font_size = size;
    }

    fn split_text_to_size(&self, text: &str, width: f32) -> Vec<String> {
        let columns = (width / self.char_width()).floor() as usize;
        wrap_columns(text, columns)
    }

    fn text(&mut self, text: &str, x: f32, y: f32) {
        let dropped = text.chars().filter(|c| !is_win_ansi(*c)).count();
        if dropped > 0 {
            log::debug!("{} unencodable characters in {:?}", dropped, text);
            self.dropped_chars += dropped;
        }
        let font = self.current_font().clone();
        self.layer
            .use_text(text, self.font_size, Mm(x), Mm(PAGE_HEIGHT_MM - y), &font);
    }

    fn line(&mut self, x1: f32, y1: f32, x2: f32, y2: f32) {
        let line = Line {
            points: vec![
                (Point::new(Mm(x1), Mm(PAGE_HEIGHT_MM - y1)), false),
                (Point::new(Mm(x2), Mm(PAGE_HEIGHT_MM - y2)), false),
            ],
            is_closed: false,
        };
        self.layer.add_line(line);
    }

    fn add_page(&mut self) {
        let (page, layer) = self
            .doc
            .add_page(Mm(PAGE_WIDTH_MM), Mm(PAGE_HEIGHT_MM), LAYER_NAME);
        self.layer = self.doc.get_page(page).get_layer(layer);
        self.layer
            .set_outline_color(Color::Greyscale(Greyscale::new(0.0, None)));
        self.layer.set_outline_thickness(0.5);
        self.page_count += 1;
    }

    fn finish(self) -> Result<Vec<u8>> {
        if self.dropped_chars > 0 {
            log::warn!(
                "{} characters outside the WinAnsi range were left out of the PDF",
                self.dropped_chars
            );
        }
        Ok(self.doc.save_to_bytes()?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wrap_width_uses_courier_metrics() {
        let mut pdf = PdfGenerator::new("test").unwrap();
        pdf.set_font_size(10.0);
        // 180mm at 10pt Courier holds 85 characters
        let lines = pdf.split_text_to_size(&"x".repeat(170), 180.0);
        assert_eq!(lines.len(), 2);
        assert_eq!(lines[0].len(), 85);
    }

    #[test]
    fn test_finish_produces_pdf_bytes() {
        let mut pdf = PdfGenerator::new("test").unwrap();
        pdf.set_font_size(12.0);
        pdf.text("hello", 10.0, 20.0);
        pdf.line(10.0, 30.0, 200.0, 30.0);
        pdf.add_page();
        pdf.text("second page", 10.0, 20.0);
        assert_eq!(pdf.page_count(), 2);

        let bytes = pdf.finish().unwrap();
        assert!(bytes.starts_with(b"%PDF"));
    }

    #[test]
    fn test_counts_characters_the_font_cannot_draw() {
        let mut pdf = PdfGenerator::new("test").unwrap();
        pdf.text("plain ascii {}", 10.0, 20.0);
        pdf.text("caf\u{e9} \u{20ac}5 \u{201c}q\u{201d}", 10.0, 26.0);
        assert_eq!(pdf.dropped_chars(), 0);

        pdf.text("\u{e9}\u{2192}\u{4e2d}\u{1f389}", 10.0, 32.0);
        assert_eq!(pdf.dropped_chars(), 3);
        assert!(pdf.finish().unwrap().starts_with(b"%PDF"));
    }

    #[test]
    fn test_win_ansi_ranges() {
        assert!(is_win_ansi('a'));
        assert!(is_win_ansi('\u{ff}'));
        assert!(is_win_ansi('\u{2014}'));
        assert!(!is_win_ansi('\u{80}'));
        assert!(!is_win_ansi('\t'));
        assert!(!is_win_ansi('\u{3b1}'));
    }
}

//! Live preview composition.
//!
//! The composed document is a pure function of the three sources and the
//! theme flag. It is rebuilt from scratch on every change and handed to the
//! preview surface, which replaces whatever it showed before.

use crate::app::domain::{Palette, Sources, ThemeFlag};
use crate::app::infrastructure::error::Result;
use crate::app::services::preview_file::PreviewFile;

/// A rendering target for composed documents.
pub trait PreviewSurface {
    fn load(&mut self, document: &ComposedDocument) -> Result<()>;
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ComposedDocument {
    html: String,
    markup: String,
    palette: Palette,
}

impl ComposedDocument {
    /// The full page: markup, theme style, user style, user script.
    pub fn html(&self) -> &str {
        &self.html
    }

    pub fn markup(&self) -> &str {
        &self.markup
    }

    pub fn palette(&self) -> Palette {
        self.palette
    }
}

/// The injected rule giving the preview body the theme's colors.
pub fn theme_body_rule(palette: Palette) -> String {
    format!(
        "body {{\n    color: {};\n    background-color: {};\n  }}",
        palette.foreground.css, palette.background.css
    )
}

/// Build the preview page. The theme rule comes before the user's style so
/// user rules win.
pub fn compose(markup: &str, style: &str, script: &str, is_dark: bool) -> ComposedDocument {
    let palette = Palette::for_theme(is_dark);
    let mut html = String::with_capacity(markup.len() + style.len() + script.len() + 128);
    html.push_str(markup);
    html.push_str("<style>\n  ");
    html.push_str(&theme_body_rule(palette));
    html.push_str("\n</style>");
    html.push_str("<style>");
    html.push_str(style);
    html.push_str("</style>");
    html.push_str("<script>");
    html.push_str(script);
    html.push_str("</script>");

    ComposedDocument {
        html,
        markup: markup.to_string(),
        palette,
    }
}

/// Reduced rendition for surfaces that cannot apply CSS or run scripts:
/// the markup on a body carrying the palette.
pub fn helpview_html(document: &ComposedDocument) -> String {
    let palette = document.palette();
    format!(
        "<body bgcolor=\"{}\" text=\"{}\">{}</body>",
        hex(palette.background.rgb),
        hex(palette.foreground.rgb),
        document.markup()
    )
}

fn hex((r, g, b): (u8, u8, u8)) -> String {
    format!("#{:02x}{:02x}{:02x}", r, g, b)
}

/// Owns the preview surface and the browser mirror file.
pub struct PreviewComposer {
    surface: Box<dyn PreviewSurface>,
    mirror: Option<PreviewFile>,
}

impl PreviewComposer {
    pub fn new(surface: Box<dyn PreviewSurface>, mirror: Option<PreviewFile>) -> Self {
        Self { surface, mirror }
    }

    /// Compose and push to the surface. Surface and mirror failures are
    /// logged here and never reach the caller.
    pub fn recompose(&mut self, sources: &Sources, theme: ThemeFlag) {
        let document = compose(&sources.markup, &sources.style, &sources.script, theme.is_dark);
        log::debug!("Recomposed preview ({} bytes, dark: {})", document.html().len(), theme.is_dark);

        if let Err(e) = self.surface.load(&document) {
            log::warn!("Preview surface rejected document: {}", e);
        }
        if let Some(mirror) = &self.mirror {
            if let Err(e) = mirror.write(document.html()) {
                log::warn!("Failed to update preview file {}: {}", mirror.path().display(), e);
            }
        }
    }

    pub fn mirror(&self) -> Option<&PreviewFile> {
        self.mirror.as_ref()
    }
}

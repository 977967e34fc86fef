use fltk::{enums::Color, misc::HelpView, prelude::*};

use crate::app::controllers::preview::{helpview_html, ComposedDocument, PreviewSurface};
use crate::app::infrastructure::error::{AppError, Result};

/// In-window preview. `HelpView` renders basic HTML only, so it gets the
/// markup on a themed body. Styles and scripts run in the live browser
/// page kept by `PreviewFile`.
pub struct HelpPreview {
    view: HelpView,
}

impl HelpPreview {
    pub fn new(view: HelpView) -> Self {
        Self { view }
    }
}

impl PreviewSurface for HelpPreview {
    fn load(&mut self, document: &ComposedDocument) -> Result<()> {
        if self.view.was_deleted() {
            return Err(AppError::Preview("preview widget no longer exists".to_string()));
        }
        let (r, g, b) = document.palette().background.rgb;
        self.view.set_color(Color::from_rgb(r, g, b));
        self.view.set_value(&helpview_html(document));
        self.view.redraw();
        Ok(())
    }
}

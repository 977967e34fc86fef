use fltk::{
    enums::{Color, FrameType},
    frame::Frame,
    menu::MenuBar,
    prelude::*,
    window::Window,
};

use crate::app::controllers::theme::Chrome;
use crate::app::domain::{CssColor, IconSet, Palette};
use super::toolbar::Toolbar;

fn fltk_color(color: CssColor) -> Color {
    let (r, g, b) = color.rgb;
    Color::from_rgb(r, g, b)
}

/// Everything around the editors and preview that follows the theme.
pub struct FltkChrome {
    window: Window,
    menu: MenuBar,
    toolbar: Toolbar,
    labels: Vec<Frame>,
}

impl FltkChrome {
    pub fn new(window: Window, menu: MenuBar, toolbar: Toolbar, labels: Vec<Frame>) -> Self {
        Self { window, menu, toolbar, labels }
    }
}

impl Chrome for FltkChrome {
    fn set_icons(&mut self, icons: &IconSet) {
        self.toolbar.set_icons(icons);
    }

    fn set_colors(&mut self, palette: Palette) {
        let background = fltk_color(palette.background);
        let foreground = fltk_color(palette.foreground);
        let is_dark = palette == Palette::for_theme(true);

        self.window.set_color(background);
        self.window.set_label_color(foreground);
        if is_dark {
            self.menu.set_color(Color::from_rgb(35, 35, 35));
            self.menu.set_selection_color(Color::from_rgb(60, 60, 60)); // Hover color
        } else {
            self.menu.set_color(Color::from_rgb(240, 240, 240));
            self.menu.set_selection_color(Color::from_rgb(200, 200, 200));
        }
        self.menu.set_text_color(foreground);

        self.toolbar.flex.set_frame(FrameType::FlatBox);
        self.toolbar.flex.set_color(background);
        for btn in [&mut self.toolbar.theme_btn, &mut self.toolbar.pdf_btn, &mut self.toolbar.about_btn] {
            btn.set_color(background);
        }
        for label in &mut self.labels {
            label.set_label_color(foreground);
        }

        self.window.redraw();
    }
}

use fltk::{
    app::Sender,
    button::Button,
    enums::FrameType,
    frame::Frame,
    group::{Flex, FlexType},
    image::SvgImage,
    prelude::*,
};

use crate::app::domain::{Icon, IconSet, Message};

pub const TOOLBAR_HEIGHT: i32 = 36;
const ICON_SIZE: i32 = 24;

pub struct Toolbar {
    pub flex: Flex,
    pub theme_btn: Button,
    pub pdf_btn: Button,
    pub about_btn: Button,
    pub browser_btn: Button,
}

impl Toolbar {
    pub fn new(sender: &Sender<Message>) -> Self {
        let mut flex = Flex::default();
        flex.set_type(FlexType::Row);
        flex.set_margin(4);
        flex.set_spacing(4);

        let mut title = Frame::default().with_label("QuickCode");
        title.set_label_size(16);
        flex.fixed(&title, 110);

        let _spacer = Frame::default();

        let mut browser_btn = Button::default().with_label("Open in Browser");
        browser_btn.set_tooltip("Full preview with styles and scripts; follows your edits");
        flex.fixed(&browser_btn, 130);
        let mut theme_btn = icon_button("Toggle dark mode");
        flex.fixed(&theme_btn, TOOLBAR_HEIGHT);
        let mut pdf_btn = icon_button("Download code as PDF");
        flex.fixed(&pdf_btn, TOOLBAR_HEIGHT);
        let mut about_btn = icon_button("About QuickCode");
        flex.fixed(&about_btn, TOOLBAR_HEIGHT);

        flex.end();

        browser_btn.set_callback({ let s = *sender; move |_| s.send(Message::OpenInBrowser) });
        theme_btn.set_callback({ let s = *sender; move |_| s.send(Message::ToggleTheme) });
        pdf_btn.set_callback({ let s = *sender; move |_| s.send(Message::ExportPdf) });
        about_btn.set_callback({ let s = *sender; move |_| s.send(Message::ShowAbout) });

        Self { flex, theme_btn, pdf_btn, about_btn, browser_btn }
    }

    pub fn set_icons(&mut self, icons: &IconSet) {
        set_icon(&mut self.theme_btn, icons.source(Icon::ThemeToggle));
        set_icon(&mut self.pdf_btn, icons.source(Icon::Pdf));
        set_icon(&mut self.about_btn, icons.source(Icon::About));
    }
}

fn icon_button(tooltip: &str) -> Button {
    let mut btn = Button::default();
    btn.set_frame(FrameType::FlatBox);
    btn.set_tooltip(tooltip);
    btn
}

fn set_icon(btn: &mut Button, source: &str) {
    let Some(data) = embedded_svg(source) else {
        log::warn!("Unknown icon {}", source);
        return;
    };
    match SvgImage::from_data(data) {
        Ok(mut image) => {
            image.scale(ICON_SIZE, ICON_SIZE, true, true);
            btn.set_image(Some(image));
            btn.redraw();
        }
        Err(e) => log::warn!("Failed to load icon {}: {}", source, e),
    }
}

/// Icon sources are relative paths into the bundled `assets/` tree.
fn embedded_svg(source: &str) -> Option<&'static str> {
    let data = match source {
        "images/darkmode.svg" => include_str!("../../assets/images/darkmode.svg"),
        "images/lightmode.svg" => include_str!("../../assets/images/lightmode.svg"),
        "images/pdf.svg" => include_str!("../../assets/images/pdf.svg"),
        "images/lightmodepdf.svg" => include_str!("../../assets/images/lightmodepdf.svg"),
        "images/about.svg" => include_str!("../../assets/images/about.svg"),
        "images/lightabout.svg" => include_str!("../../assets/images/lightabout.svg"),
        _ => return None,
    };
    Some(data)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_icon_is_bundled() {
        for is_dark in [false, true] {
            let icons = IconSet::for_theme(is_dark);
            for icon in [Icon::ThemeToggle, Icon::Pdf, Icon::About] {
                let svg = embedded_svg(icons.source(icon)).unwrap();
                assert!(svg.contains("<svg"));
            }
        }
    }
}

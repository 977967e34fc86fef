use fltk::{
    app::{self, Sender},
    enums::Event,
    group::{Flex, FlexType},
    menu::MenuBar,
    misc::HelpView,
    prelude::*,
    window::Window,
};

use crate::app::domain::{Language, Message};
use super::dialogs::about::AboutPanel;
use super::editor_panel::EditorPanel;
use super::toolbar::{Toolbar, TOOLBAR_HEIGHT};

const WIDTH: i32 = 1100;
const HEIGHT: i32 = 760;

pub struct MainWidgets {
    pub wind: Window,
    pub menu: MenuBar,
    pub toolbar: Toolbar,
    pub panels: [EditorPanel; 3],
    pub preview: HelpView,
    pub about: AboutPanel,
}

/// Layout, top to bottom: menu, toolbar, the three editors side by side,
/// then the preview filling the rest.
pub fn build_main_window(sender: &Sender<Message>) -> MainWidgets {
    let mut wind = Window::new(100, 100, WIDTH, HEIGHT, "QuickCode");
    wind.set_xclass("QuickCode");

    let mut flex = Flex::new(0, 0, WIDTH, HEIGHT, None);
    flex.set_type(FlexType::Column);

    let menu = MenuBar::new(0, 0, 0, 30, "");
    flex.fixed(&menu, 30);

    let toolbar = Toolbar::new(sender);
    flex.fixed(&toolbar.flex, TOOLBAR_HEIGHT);

    let mut editors_row = Flex::default();
    editors_row.set_type(FlexType::Row);
    editors_row.set_spacing(4);
    let panels = Language::ALL.map(|language| EditorPanel::new(language, sender));
    editors_row.end();
    flex.fixed(&editors_row, HEIGHT * 2 / 5);

    let mut preview = HelpView::default();
    preview.set_text_size(14);

    flex.end();

    // Added last so it stacks above everything else
    let about = AboutPanel::new(WIDTH, HEIGHT, sender);

    wind.end();
    wind.resizable(&flex);

    // The window callback fires on close and on Escape
    wind.set_callback({
        let s = *sender;
        move |_| {
            if app::event() == Event::Close {
                s.send(Message::Quit);
            } else {
                s.send(Message::HideAbout);
            }
        }
    });

    MainWidgets {
        wind,
        menu,
        toolbar,
        panels,
        preview,
        about,
    }
}

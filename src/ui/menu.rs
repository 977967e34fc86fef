use fltk::{
    app::Sender,
    enums::{Key, Shortcut},
    menu::{MenuBar, MenuFlag},
    prelude::*,
};

use crate::app::domain::{Language, Message};

pub fn build_menu(menu: &mut MenuBar, sender: &Sender<Message>) {
    let s = sender;

    // File
    menu.add("File/Download as PDF...", Shortcut::Ctrl | 'p', MenuFlag::Normal, { let s = *s; move |_| s.send(Message::ExportPdf) });
    menu.add("File/Open in Browser", Shortcut::Ctrl | 'b', MenuFlag::MenuDivider, { let s = *s; move |_| s.send(Message::OpenInBrowser) });
    menu.add("File/Quit", Shortcut::Ctrl | 'q', MenuFlag::Normal, { let s = *s; move |_| s.send(Message::Quit) });

    // Edit
    for language in Language::ALL {
        let title = language.title();
        menu.add(&format!("Edit/Copy {}", title), Shortcut::None, MenuFlag::Normal, { let s = *s; move |_| s.send(Message::Copy(language)) });
    }
    for language in Language::ALL {
        let title = language.title();
        menu.add(&format!("Edit/Clear {}", title), Shortcut::None, MenuFlag::Normal, { let s = *s; move |_| s.send(Message::Clear(language)) });
    }

    // View
    menu.add("View/Toggle Dark Mode", Shortcut::Ctrl | 't', MenuFlag::Normal, { let s = *s; move |_| s.send(Message::ToggleTheme) });

    // Help
    menu.add("Help/About QuickCode", Shortcut::None | Key::F1, MenuFlag::Normal, { let s = *s; move |_| s.send(Message::ShowAbout) });
}

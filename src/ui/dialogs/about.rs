use fltk::{
    app::{self, Sender},
    button::Button,
    enums::{Align, Color, Event, Font, FrameType, Key},
    frame::Frame,
    group::{Flex, FlexType, Group},
    prelude::*,
};

use crate::app::controllers::about::{AboutOverlay, Rect};
use crate::app::domain::Message;

const PANEL_W: i32 = 420;
const PANEL_H: i32 = 280;

/// About box drawn inside the main window: a backdrop covering everything
/// with a panel in the middle. Must be the last child of the window so it
/// stacks on top.
pub struct AboutPanel {
    backdrop: Group,
    panel: Flex,
    close_btn: Button,
}

/// Whether the backdrop keeps `event` away from the widgets underneath.
/// Mouse input outside the panel and every shortcut except Escape stop
/// here; Escape still reaches the window callback, which hides the box.
fn backdrop_consumes(event: Event, key: Key, panel: Rect, x: i32, y: i32) -> bool {
    match event {
        Event::Push | Event::Released | Event::Drag | Event::MouseWheel => !panel.contains(x, y),
        Event::Shortcut => key != Key::Escape,
        _ => false,
    }
}

fn bounds_of<W: WidgetExt>(w: &W) -> Rect {
    Rect { x: w.x(), y: w.y(), w: w.w(), h: w.h() }
}

impl AboutPanel {
    pub fn new(w: i32, h: i32, sender: &Sender<Message>) -> Self {
        let mut backdrop = Group::new(0, 0, w, h, None);
        backdrop.set_frame(FrameType::FlatBox);
        backdrop.set_color(Color::from_rgb(60, 60, 60));

        let mut panel = Flex::new((w - PANEL_W) / 2, (h - PANEL_H) / 2, PANEL_W, PANEL_H, None);
        panel.set_type(FlexType::Column);
        panel.set_frame(FrameType::BorderBox);
        panel.set_color(Color::White);
        panel.set_margin(16);
        panel.set_spacing(8);

        let mut title = Frame::default().with_label("QuickCode");
        title.set_label_size(24);
        title.set_label_font(Font::HelveticaBold);
        panel.fixed(&title, 40);

        let mut version = Frame::default().with_label(&format!("Version {}", env!("CARGO_PKG_VERSION")));
        version.set_label_size(14);
        panel.fixed(&version, 22);

        let mut info = Frame::default().with_label(
            "Write HTML, CSS and JavaScript side by side\n\
             and watch the page update as you type.\n\n\
             Export your code as a PDF, switch between\n\
             light and dark mode, or open the full page\n\
             in your browser.",
        );
        info.set_label_size(12);
        info.set_label_color(Color::from_rgb(80, 80, 80));
        info.set_align(Align::Center | Align::Inside);

        let mut close_btn = Button::default().with_label("Close");
        panel.fixed(&close_btn, 32);
        panel.end();
        backdrop.end();
        backdrop.hide();

        close_btn.set_callback({ let s = *sender; move |_| s.send(Message::HideAbout) });

        // Presses are reported so the dialog can close on a backdrop click.
        // Presses on the panel are passed on so the Close button works.
        backdrop.handle({
            let s = *sender;
            let panel = panel.clone();
            move |_, ev| {
                let (x, y) = (app::event_x(), app::event_y());
                if ev == Event::Push {
                    s.send(Message::AboutBackdropClick { x, y });
                }
                backdrop_consumes(ev, app::event_key(), bounds_of(&panel), x, y)
            }
        });

        Self { backdrop, panel, close_btn }
    }
}

impl AboutOverlay for AboutPanel {
    fn set_visible(&mut self, visible: bool) {
        if visible {
            self.backdrop.show();
            // Pull keyboard focus off the editors underneath
            let _ = self.close_btn.take_focus();
        } else {
            self.backdrop.hide();
        }
        if let Some(mut parent) = self.backdrop.parent() {
            parent.redraw();
        }
    }

    fn modal_bounds(&self) -> Rect {
        bounds_of(&self.panel)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rect {
    pub x: i32,
    pub y: i32,
    pub w: i32,
    pub h: i32,
}

impl Rect {
    pub fn contains(&self, x: i32, y: i32) -> bool {
        x >= self.x && x < self.x + self.w && y >= self.y && y < self.y + self.h
    }
}

/// The about overlay widget: a backdrop covering the window with a modal
/// panel in the middle.
pub trait AboutOverlay {
    fn set_visible(&mut self, visible: bool);
    fn modal_bounds(&self) -> Rect;
}

#[derive(Debug, Default)]
pub struct AboutDialog {
    visible: bool,
}

impl AboutDialog {
    pub fn is_visible(&self) -> bool {
        self.visible
    }

    pub fn open(&mut self, overlay: &mut dyn AboutOverlay) {
        self.set(overlay, true);
    }

    pub fn close(&mut self, overlay: &mut dyn AboutOverlay) {
        self.set(overlay, false);
    }

    /// A click on the backdrop closes the dialog unless it landed on the
    /// modal panel itself. Returns whether the dialog closed.
    pub fn backdrop_click(&mut self, overlay: &mut dyn AboutOverlay, x: i32, y: i32) -> bool {
        if !self.visible || overlay.modal_bounds().contains(x, y) {
            return false;
        }
        self.close(overlay);
        true
    }

    fn set(&mut self, overlay: &mut dyn AboutOverlay, visible: bool) {
        self.visible = visible;
        overlay.set_visible(visible);
    }
}

pub mod dialogs;
pub mod editor_panel;
pub mod host;
pub mod main_window;
pub mod menu;
pub mod preview_pane;
pub mod theme;
pub mod toolbar;

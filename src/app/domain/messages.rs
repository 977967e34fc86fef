use super::language::Language;

/// All messages that can be sent through the FLTK channel.
/// Widget callbacks send one of these; the dispatch loop in main hands them
/// to `Playground::handle`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Message {
    // Editors
    EditorChanged(Language),
    Copy(Language),
    Clear(Language),

    // Toolbar
    ToggleTheme,
    ExportPdf,
    OpenInBrowser,

    // About overlay
    ShowAbout,
    HideAbout,
    AboutBackdropClick { x: i32, y: i32 },

    Quit,
}

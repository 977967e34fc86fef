use fltk::{app, prelude::*};

use quick_code::app::controllers::editor::{EditorWidget, Editors};
use quick_code::app::controllers::preview::PreviewComposer;
use quick_code::app::services::preview_file::PreviewFile;
use quick_code::app::services::syntax::SyntaxAssets;
use quick_code::app::{AppSettings, Host, Language, Message, Playground};
use quick_code::ui::editor_panel::FltkEditor;
use quick_code::ui::host::{DialogPrompter, FltkClipboard};
use quick_code::ui::main_window::build_main_window;
use quick_code::ui::menu::build_menu;
use quick_code::ui::preview_pane::HelpPreview;
use quick_code::ui::theme::FltkChrome;

/// Initialize the logging system
fn init_logging() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info,quick_code=debug"))
        .format_timestamp_millis()
        .init();
}

fn main() {
    init_logging();

    let settings = AppSettings::load();
    log::debug!("Loaded settings: {:?}", settings);

    let app = app::App::default().with_scheme(app::Scheme::Gtk);
    let (sender, receiver) = app::channel::<Message>();

    let mut w = build_main_window(&sender);
    build_menu(&mut w.menu, &sender);

    let assets = SyntaxAssets::load();
    let font_size = settings.editor_font_size();
    let widgets: [Box<dyn EditorWidget>; 3] = Language::ALL.map(|language| {
        let starter = match language {
            Language::Markup => &settings.starter_markup,
            Language::Style => &settings.starter_style,
            Language::Script => &settings.starter_script,
        };
        let editor = w.panels[language.index()].editor.clone();
        Box::new(FltkEditor::new(editor, starter, assets.clone(), settings.font, font_size)) as Box<dyn EditorWidget>
    });
    let editors = Editors::new(widgets, move |msg| sender.send(msg));

    let preview = PreviewComposer::new(
        Box::new(HelpPreview::new(w.preview.clone())),
        Some(PreviewFile::in_temp_dir()),
    );

    let labels = w.panels.iter().map(|p| p.title.clone()).collect();
    let host = Host {
        chrome: Box::new(FltkChrome::new(w.wind.clone(), w.menu.clone(), w.toolbar, labels)),
        about: Box::new(w.about),
        clipboard: Box::new(FltkClipboard),
        prompter: Box::new(DialogPrompter),
    };

    let mut playground = Playground::new(editors, preview, host, settings);
    playground.start();

    w.wind.show();

    while app.wait() {
        if let Some(msg) = receiver.recv() {
            if playground.handle(msg) {
                log::info!("Exiting");
                app.quit();
            }
        }
    }
}

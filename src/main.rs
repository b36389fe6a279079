use fltk::app;

use news_digest::app::domain::{AppSettings, Message};
use news_digest::app::infrastructure::logging;
use news_digest::app::infrastructure::platform::detect_system_dark_mode;
use news_digest::app::infrastructure::preferences::FilePreferenceStore;
use news_digest::app::state::AppState;
use news_digest::app::ThemeController;
use news_digest::ui::main_window::build_main_window;
use news_digest::ui::menu::build_menu;

fn main() {
    logging::init();

    let app = app::App::default();
    let (sender, receiver) = app::channel::<Message>();

    let settings = AppSettings::load();
    tracing::info!(endpoint = %settings.endpoint, "starting NewsDigest");

    let store = FilePreferenceStore::open_default();
    let theme = ThemeController::initialize(store, detect_system_dark_mode);

    let mut widgets = build_main_window(&sender);
    build_menu(&mut widgets.menu, &sender, theme.is_dark());

    let mut state = AppState::new(widgets, sender, &settings, theme);
    state.show();
    state.start_activation();

    while app.wait() {
        if let Some(msg) = receiver.recv() {
            match msg {
                Message::FileQuit | Message::WindowClose => {
                    state.shutdown();
                    app.quit();
                }
                Message::ToggleDarkMode => state.toggle_dark_mode(),
                Message::Refresh => state.refresh(),
                Message::DigestClicked => state.digest_clicked(),
                Message::DigestResolved(id, outcome) => state.digest_resolved(id, outcome),
            }
        }
    }
}

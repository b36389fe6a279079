use std::path::PathBuf;

use fltk::{app::Sender, dialog, menu::MenuBar, prelude::*};

use super::controllers::digest::DigestController;
use super::controllers::theme::ThemeController;
use super::domain::{ActivationId, AppSettings, FetchOutcome, Message, Palette};
use super::infrastructure::preferences::PreferenceStore;
use super::services::digest_fetcher::DigestFetcher;
use super::services::presenter::{followed_link, link_targets, render_digest};
use crate::ui::main_window::MainWidgets;
use crate::ui::menu::DARK_MODE_ITEM;
use crate::ui::theme::with_body_colors;

pub struct AppState<S: PreferenceStore> {
    pub widgets: MainWidgets,
    pub sender: Sender<Message>,
    pub theme: ThemeController<S>,
    pub digest: DigestController,
    fetcher: DigestFetcher,
    palette: Palette,
    icons_dir: PathBuf,
    /// Markup last handed to the digest view.
    rendered: String,
}

impl<S: PreferenceStore> AppState<S> {
    pub fn new(
        widgets: MainWidgets,
        sender: Sender<Message>,
        settings: &AppSettings,
        theme: ThemeController<S>,
    ) -> Self {
        let mut state = Self {
            widgets,
            sender,
            theme,
            digest: DigestController::new(),
            fetcher: DigestFetcher::from_settings(settings),
            palette: settings.palette(),
            icons_dir: settings.icons_dir(),
            rendered: String::new(),
        };
        state.theme.apply(&mut state.widgets);
        state
    }

    /// Show the window, then re-apply the theme now that native handles exist.
    pub fn show(&mut self) {
        self.widgets.wind.show();
        self.theme.apply(&mut self.widgets);
    }

    // --- Digest ---

    /// Begin a new activation and fetch on a worker thread.
    pub fn start_activation(&mut self) {
        let id = self.digest.activate();
        self.render_digest();

        let fetcher = self.fetcher.clone();
        let sender = self.sender;
        std::thread::spawn(move || {
            let outcome = fetcher.fetch_sections();
            sender.send(Message::DigestResolved(id, outcome));
        });
    }

    pub fn refresh(&mut self) {
        self.digest.deactivate();
        self.start_activation();
    }

    pub fn digest_resolved(&mut self, id: ActivationId, outcome: FetchOutcome) {
        if self.digest.resolve(id, outcome) {
            self.render_digest();
        }
    }

    pub fn render_digest(&mut self) {
        let html = render_digest(self.digest.outcome(), &self.palette, &self.icons_dir);
        self.rendered = with_body_colors(&html, self.widgets.dark);
        self.widgets.digest_view.set_value(&self.rendered);
        self.widgets.digest_view.redraw();
    }

    /// After a click, restore the digest if `HelpView` replaced it with a
    /// followed page, opening the link in the browser when it was external.
    pub fn digest_clicked(&mut self) {
        let page = self.widgets.digest_view.value().unwrap_or_default();
        if page == self.rendered {
            return;
        }

        let targets = link_targets(self.digest.outcome());
        if let Some(url) = followed_link(&page, &targets) {
            tracing::info!(url, "opening digest link in browser");
            if let Err(e) = open::that(url) {
                tracing::warn!(url, error = %e, "failed to open browser");
                dialog::alert_default(&format!("Failed to open browser: {}", e));
            }
        }
        self.render_digest();
    }

    // --- View ---

    pub fn toggle_dark_mode(&mut self) {
        if let Err(e) = self.theme.toggle(&mut self.widgets) {
            tracing::warn!(error = %e, "failed to persist theme preference");
            dialog::alert_default(&format!("Failed to save theme preference: {}", e));
        }
        let dark = self.theme.is_dark();
        update_menu_checkbox(&self.widgets.menu, DARK_MODE_ITEM, dark);
        self.render_digest();
    }

    // --- Lifecycle ---

    /// Drop the current activation; any fetch still running is ignored.
    pub fn shutdown(&mut self) {
        self.digest.deactivate();
        self.widgets.wind.hide();
    }
}

fn update_menu_checkbox(menu: &MenuBar, path: &str, checked: bool) {
    let idx = menu.find_index(path);
    if idx >= 0 {
        if let Some(mut item) = menu.at(idx) {
            if checked {
                item.set();
            } else {
                item.clear();
            }
        }
    }
}

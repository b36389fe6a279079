use fltk::{
    app::Sender,
    enums::{Key, Shortcut},
    menu::{MenuBar, MenuFlag},
    prelude::*,
};

use crate::app::domain::Message;

pub const DARK_MODE_ITEM: &str = "View/Toggle Dark Mode";

pub fn build_menu(menu: &mut MenuBar, sender: &Sender<Message>, initial_dark_mode: bool) {
    let s = sender;

    // File
    menu.add("File/Quit", Shortcut::Ctrl | 'q', MenuFlag::Normal, { let s = *s; move |_| s.send(Message::FileQuit) });

    // View
    let dm_flag = if initial_dark_mode { MenuFlag::Toggle | MenuFlag::Value } else { MenuFlag::Toggle };
    menu.add(DARK_MODE_ITEM, Shortcut::Ctrl | 'd', dm_flag, { let s = *s; move |_| s.send(Message::ToggleDarkMode) });

    // Digest
    menu.add("Digest/Refresh", Shortcut::None | Key::F5, MenuFlag::Normal, { let s = *s; move |_| s.send(Message::Refresh) });
}

use fltk::{
    app::Sender,
    enums::{Color, Event, FrameType},
    group::{Flex, FlexType},
    menu::MenuBar,
    misc::HelpView,
    prelude::*,
    window::Window,
};

use crate::app::controllers::theme::ThemeTarget;
use crate::app::domain::Message;

pub const WINDOW_TITLE: &str = "NewsDigest";
const MENU_HEIGHT: i32 = 30;

pub struct MainWidgets {
    pub wind: Window,
    pub flex: Flex,
    pub menu: MenuBar,
    pub digest_view: HelpView,
    /// Root light/dark marker; styling is derived from it.
    pub dark: bool,
}

pub fn build_main_window(sender: &Sender<Message>) -> MainWidgets {
    let mut wind = Window::new(100, 100, 960, 720, WINDOW_TITLE);
    wind.set_xclass("NewsDigest");

    let mut flex = Flex::new(0, 0, 960, 720, None);
    flex.set_type(FlexType::Column);

    let menu = MenuBar::new(0, 0, 0, MENU_HEIGHT, "");
    flex.fixed(&menu, MENU_HEIGHT);

    let mut digest_view = HelpView::new(0, 0, 0, 0, "");
    digest_view.set_frame(FrameType::FlatBox);
    digest_view.set_color(Color::White);
    // HelpView follows links on release; the dispatch loop checks what it did.
    digest_view.handle({
        let s = *sender;
        move |_, ev| {
            if ev == Event::Released {
                s.send(Message::DigestClicked);
            }
            false
        }
    });

    flex.end();
    wind.resizable(&flex);
    wind.end();

    // Closing the window goes through the dispatch loop so in-flight fetches are torn down.
    wind.set_callback({
        let s = *sender;
        move |_| s.send(Message::WindowClose)
    });

    MainWidgets {
        wind,
        flex,
        menu,
        digest_view,
        dark: false,
    }
}

impl ThemeTarget for MainWidgets {
    fn set_dark(&mut self, dark: bool) {
        self.dark = dark;
        super::theme::apply_theme(self);
    }
}

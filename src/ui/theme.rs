use fltk::{enums::Color, prelude::*};

use super::main_window::MainWidgets;

struct Colors {
    window: (u8, u8, u8),
    menu: (u8, u8, u8),
    menu_text: (u8, u8, u8),
    menu_hover: (u8, u8, u8),
    page: (u8, u8, u8),
    text: (u8, u8, u8),
}

const LIGHT: Colors = Colors {
    window: (240, 240, 240),
    menu: (240, 240, 240),
    menu_text: (0, 0, 0),
    menu_hover: (200, 200, 200),
    page: (255, 255, 255),
    text: (30, 58, 138),
};

const DARK: Colors = Colors {
    window: (0, 0, 0),
    menu: (17, 17, 17),
    menu_text: (209, 213, 219),
    menu_hover: (55, 65, 81),
    page: (10, 10, 10),
    text: (229, 231, 235),
};

fn colors(is_dark: bool) -> &'static Colors {
    if is_dark { &DARK } else { &LIGHT }
}

fn rgb((r, g, b): (u8, u8, u8)) -> Color {
    Color::from_rgb(r, g, b)
}

fn hex((r, g, b): (u8, u8, u8)) -> String {
    format!("#{:02x}{:02x}{:02x}", r, g, b)
}

/// Restyle every widget from the root `dark` marker.
pub fn apply_theme(widgets: &mut MainWidgets) {
    let c = colors(widgets.dark);

    widgets.wind.set_color(rgb(c.window));
    widgets.wind.set_label_color(rgb(c.menu_text));
    widgets.menu.set_color(rgb(c.menu));
    widgets.menu.set_text_color(rgb(c.menu_text));
    widgets.menu.set_selection_color(rgb(c.menu_hover));
    widgets.digest_view.set_color(rgb(c.page));

    #[cfg(target_os = "windows")]
    set_windows_titlebar_theme(&widgets.wind, widgets.dark);

    widgets.menu.redraw();
    widgets.digest_view.redraw();
    widgets.wind.redraw();
}

/// Give rendered digest markup the page and text colors of the current theme.
pub fn with_body_colors(html: &str, is_dark: bool) -> String {
    let c = colors(is_dark);
    format!(
        "<body bgcolor=\"{}\" text=\"{}\">{}</body>",
        hex(c.page),
        hex(c.text),
        html
    )
}

/// Set Windows title bar theme (Windows 10 build 1809+)
/// Must be called AFTER window.show() to have a valid HWND
#[cfg(target_os = "windows")]
fn set_windows_titlebar_theme(window: &fltk::window::Window, is_dark: bool) {
    use std::mem::size_of;
    use std::ptr::from_ref;
    use windows::Win32::Foundation::HWND;
    use windows::Win32::Graphics::Dwm::{DWMWINDOWATTRIBUTE, DwmSetWindowAttribute};

    if !window.shown() {
        return;
    }

    unsafe {
        let hwnd = HWND(window.raw_handle() as *mut std::ffi::c_void);
        let on: i32 = if is_dark { 1 } else { 0 };

        // 20 on Windows 11 / Windows 10 2004+, 19 on Windows 10 1809-1903
        for attribute in [20, 19] {
            let _ = DwmSetWindowAttribute(
                hwnd,
                DWMWINDOWATTRIBUTE(attribute),
                from_ref(&on).cast(),
                size_of::<i32>() as u32,
            );
        }
    }
}

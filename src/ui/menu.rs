use fltk::{
    app::Sender,
    enums::Shortcut,
    menu::{MenuBar, MenuFlag},
    prelude::*,
};

use crate::app::messages::Message;
use crate::app::settings::{AppSettings, ThemeMode};

pub fn build_menu(menu: &mut MenuBar, sender: &Sender<Message>, settings: &AppSettings) {
    let s = sender;

    // File
    menu.add("File/Reset All Data...", Shortcut::None, MenuFlag::Normal, { let s = *s; move |_| s.send(Message::ResetAll) });
    menu.add("File/Quit", Shortcut::Ctrl | 'q', MenuFlag::Normal, { let s = *s; move |_| s.send(Message::Quit) });

    // View
    let radio = |mode: ThemeMode| {
        if settings.theme_mode == mode {
            MenuFlag::Radio | MenuFlag::Value
        } else {
            MenuFlag::Radio
        }
    };
    menu.add("View/Theme/Light", Shortcut::None, radio(ThemeMode::Light), { let s = *s; move |_| s.send(Message::SetTheme(ThemeMode::Light)) });
    menu.add("View/Theme/Dark", Shortcut::None, radio(ThemeMode::Dark), { let s = *s; move |_| s.send(Message::SetTheme(ThemeMode::Dark)) });
    menu.add("View/Theme/System Default", Shortcut::None, radio(ThemeMode::SystemDefault), { let s = *s; move |_| s.send(Message::SetTheme(ThemeMode::SystemDefault)) });
    menu.add("View/Privacy Mode", Shortcut::Ctrl | 'p', MenuFlag::Toggle, { let s = *s; move |_| s.send(Message::TogglePrivacy) });

    // History
    menu.add("History/Clear History...", Shortcut::None, MenuFlag::Normal, { let s = *s; move |_| s.send(Message::HistoryClearAll) });

    // Help
    menu.add("Help/About CalcPad", Shortcut::None, MenuFlag::Normal, { let s = *s; move |_| s.send(Message::ShowAbout) });
}

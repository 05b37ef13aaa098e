use std::cell::RefCell;
use std::rc::Rc;

use fltk::app;

use calc_pad::app::history::HistoryStore;
use calc_pad::app::messages::Message;
use calc_pad::app::settings::AppSettings;
use calc_pad::app::state::AppState;
use calc_pad::ui::dialogs::show_about_dialog;
use calc_pad::ui::main_window::build_main_window;
use calc_pad::ui::menu::build_menu;

fn main() {
    let fltk_app = app::App::default();
    let settings = Rc::new(RefCell::new(AppSettings::load()));
    let (sender, receiver) = app::channel::<Message>();

    let mut widgets = build_main_window(&sender);
    build_menu(&mut widgets.menu, &sender, &settings.borrow());

    let mut state = AppState::new(widgets, sender, settings, HistoryStore::open());
    state.apply_theme();
    state.restore_draft();
    state.render_history();
    state.show();

    while fltk_app.wait() {
        let Some(message) = receiver.recv() else {
            continue;
        };
        match message {
            Message::Digit(digit) => state.handle_digit(digit),
            Message::Decimal => state.handle_decimal(),
            Message::Operator(op) => state.handle_operator(op),
            Message::Equals => state.handle_equals(),
            Message::Clear => state.handle_clear(),
            Message::ClearEntry => state.handle_clear_entry(),
            Message::Backspace => state.handle_backspace(),

            Message::FormulaEdited => state.handle_formula_edited(),
            Message::ClearErrorFlash => state.update_preview(),

            Message::HistoryRecall => state.handle_history_recall(),
            Message::HistoryCopy => state.handle_history_copy(),
            Message::HistoryDelete => state.handle_history_delete(),
            Message::HistoryClearAll => state.handle_history_clear_all(),

            Message::SetTheme(mode) => state.handle_set_theme(mode),
            Message::TogglePrivacy => state.handle_toggle_privacy(),

            Message::ResetAll => state.handle_reset_all(),
            Message::ShowAbout => show_about_dialog(),
            Message::Quit => app::quit(),
        }
    }
}

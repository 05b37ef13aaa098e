use fltk::{
    app::{self, Sender},
    enums::{Align, CallbackTrigger, Event, Key},
    frame::Frame,
    group::Flex,
    input::Input,
    menu::MenuBar,
    prelude::*,
    window::Window,
};

use super::history_panel::HistoryPanel;
use super::keypad::build_keypad;
use crate::app::calc::Operator;
use crate::app::messages::Message;

pub struct MainWidgets {
    pub wind: Window,
    pub flex: Flex,
    pub menu: MenuBar,
    pub formula_input: Input,
    pub result_frame: Frame,
    pub keypad: Flex,
    pub history: HistoryPanel,
}

pub fn build_main_window(sender: &Sender<Message>) -> MainWidgets {
    let mut wind = Window::new(100, 100, 360, 620, "CalcPad");
    wind.set_xclass("CalcPad");

    let mut flex = Flex::new(0, 0, 360, 620, None);
    flex.set_type(fltk::group::FlexType::Column);

    let menu = MenuBar::new(0, 0, 0, 30, "");
    flex.fixed(&menu, 30);

    // The formula line is a real text input: direct typing and cursor
    // placement both work, with the keypad as an alternative
    let mut formula_input = Input::default();
    formula_input.set_text_size(20);
    formula_input.set_value("0");
    formula_input.set_trigger(CallbackTrigger::Changed);
    formula_input.set_callback({
        let s = *sender;
        move |_| s.send(Message::FormulaEdited)
    });
    formula_input.handle({
        let s = *sender;
        move |_, ev| {
            if ev != Event::KeyDown {
                return false;
            }
            match app::event_key() {
                Key::Enter | Key::KPEnter => {
                    s.send(Message::Equals);
                    true
                }
                Key::Escape => {
                    s.send(Message::Clear);
                    true
                }
                _ => false,
            }
        }
    });
    flex.fixed(&formula_input, 44);

    let mut result_frame = Frame::default().with_label("0");
    result_frame.set_label_size(26);
    result_frame.set_align(Align::Inside | Align::Right);
    flex.fixed(&result_frame, 40);

    let keypad = build_keypad(sender);

    let history = HistoryPanel::new(sender);
    flex.fixed(&history.group, 210);

    flex.end();
    wind.resizable(&flex);

    // Keyboard fallback for when the formula field does not have focus,
    // so bare keystrokes still drive the calculator
    wind.handle({
        let s = *sender;
        move |_, ev| handle_window_key(ev, &s)
    });

    MainWidgets {
        wind,
        flex,
        menu,
        formula_input,
        result_frame,
        keypad,
        history,
    }
}

fn handle_window_key(ev: Event, s: &Sender<Message>) -> bool {
    if ev != Event::KeyDown {
        return false;
    }

    match app::event_key() {
        Key::BackSpace => {
            s.send(Message::Backspace);
            return true;
        }
        Key::Enter | Key::KPEnter => {
            s.send(Message::Equals);
            return true;
        }
        Key::Escape => {
            s.send(Message::Clear);
            return true;
        }
        _ => {}
    }

    match app::event_text().chars().next() {
        Some(c @ '0'..='9') => {
            s.send(Message::Digit(c));
            true
        }
        Some('.') => {
            s.send(Message::Decimal);
            true
        }
        Some('+') => {
            s.send(Message::Operator(Operator::Add));
            true
        }
        Some('-') => {
            s.send(Message::Operator(Operator::Subtract));
            true
        }
        Some('*') => {
            s.send(Message::Operator(Operator::Multiply));
            true
        }
        Some('/') => {
            s.send(Message::Operator(Operator::Divide));
            true
        }
        Some('=') => {
            s.send(Message::Equals);
            true
        }
        _ => false,
    }
}

use fltk::{app::Sender, button::Button, group::Flex, prelude::*};

use crate::app::calc::Operator;
use crate::app::messages::Message;

const KEY_ROWS: [&[(&str, Message)]; 5] = [
    &[
        ("C", Message::Clear),
        ("CE", Message::ClearEntry),
        ("\u{232b}", Message::Backspace),
        ("\u{00f7}", Message::Operator(Operator::Divide)),
    ],
    &[
        ("7", Message::Digit('7')),
        ("8", Message::Digit('8')),
        ("9", Message::Digit('9')),
        ("\u{00d7}", Message::Operator(Operator::Multiply)),
    ],
    &[
        ("4", Message::Digit('4')),
        ("5", Message::Digit('5')),
        ("6", Message::Digit('6')),
        ("\u{2212}", Message::Operator(Operator::Subtract)),
    ],
    &[
        ("1", Message::Digit('1')),
        ("2", Message::Digit('2')),
        ("3", Message::Digit('3')),
        ("+", Message::Operator(Operator::Add)),
    ],
    &[
        ("0", Message::Digit('0')),
        (".", Message::Decimal),
        ("=", Message::Equals),
    ],
];

/// Build the keypad grid. Every button just sends its message; the
/// dispatch loop owns the behavior.
pub fn build_keypad(sender: &Sender<Message>) -> Flex {
    let mut grid = Flex::default().column();
    grid.set_pad(6);
    grid.set_margin(8);

    for keys in KEY_ROWS {
        let mut row = Flex::default().row();
        row.set_pad(6);
        for &(label, message) in keys {
            let mut button = Button::default().with_label(label);
            button.set_label_size(18);
            button.clear_visible_focus();
            button.set_callback({
                let s = *sender;
                move |_| s.send(message)
            });
        }
        row.end();
    }

    grid.end();
    grid
}

use fltk::{
    enums::Color, frame::Frame, group::Flex, input::Input, menu::MenuBar, prelude::*,
    widget::Widget, window::Window,
};

use super::history_panel::HistoryPanel;

pub fn apply_theme(
    window: &mut Window,
    menu: &mut MenuBar,
    formula: &mut Input,
    result: &mut Frame,
    keypad: &mut Flex,
    history: &mut HistoryPanel,
    is_dark: bool,
) {
    if is_dark {
        // Dark mode colors
        window.set_color(Color::from_rgb(25, 25, 25));
        window.set_label_color(Color::from_rgb(220, 220, 220));
        menu.set_color(Color::from_rgb(35, 35, 35));
        menu.set_text_color(Color::from_rgb(220, 220, 220));
        menu.set_selection_color(Color::from_rgb(60, 60, 60)); // Hover color
        formula.set_color(Color::from_rgb(30, 30, 30));
        formula.set_text_color(Color::from_rgb(220, 220, 220));
        formula.set_cursor_color(Color::from_rgb(255, 255, 255));
        formula.set_selection_color(Color::from_rgb(70, 70, 100));
        result.set_label_color(Color::from_rgb(240, 240, 240));
        restyle_buttons(
            keypad,
            Color::from_rgb(45, 45, 45),
            Color::from_rgb(220, 220, 220),
        );
    } else {
        // Light mode colors
        window.set_color(Color::from_rgb(240, 240, 240));
        window.set_label_color(Color::Black);
        menu.set_color(Color::from_rgb(240, 240, 240));
        menu.set_text_color(Color::Black);
        menu.set_selection_color(Color::from_rgb(200, 200, 200)); // Hover color
        formula.set_color(Color::White);
        formula.set_text_color(Color::Black);
        formula.set_cursor_color(Color::Black);
        formula.set_selection_color(Color::from_rgb(173, 216, 230));
        result.set_label_color(Color::Black);
        restyle_buttons(keypad, Color::from_rgb(250, 250, 250), Color::Black);
    }

    history.apply_palette(is_dark);

    window.redraw();
    menu.redraw();
    formula.redraw();
    result.redraw();
    keypad.redraw();
}

/// Walk the keypad tree and recolor every button leaf.
fn restyle_buttons(group: &Flex, bg: Color, fg: Color) {
    for i in 0..group.children() {
        if let Some(mut child) = group.child(i) {
            restyle_widget(&mut child, bg, fg);
        }
    }
}

fn restyle_widget(widget: &mut Widget, bg: Color, fg: Color) {
    if let Some(inner) = widget.as_group() {
        for i in 0..inner.children() {
            if let Some(mut child) = inner.child(i) {
                restyle_widget(&mut child, bg, fg);
            }
        }
    } else {
        widget.set_color(bg);
        widget.set_label_color(fg);
    }
}

use fltk::{
    app::Sender,
    browser::HoldBrowser,
    button::Button,
    enums::Color,
    frame::Frame,
    group::Flex,
    prelude::*,
};

use crate::app::history::HistoryEntry;
use crate::app::messages::Message;

/// The history side of the window: a browser of past calculations plus the
/// copy/delete/clear actions. Rebuilt from the store after every mutation.
pub struct HistoryPanel {
    pub group: Flex,
    title: Frame,
    pub browser: HoldBrowser,
    copy_button: Button,
    delete_button: Button,
    clear_button: Button,
    dark_mode: bool,
}

impl HistoryPanel {
    pub fn new(sender: &Sender<Message>) -> Self {
        let mut group = Flex::default().column();
        group.set_pad(4);
        group.set_margin(8);

        let title = Frame::default().with_label("History");
        group.fixed(&title, 20);

        let mut browser = HoldBrowser::default();
        browser.set_text_size(13);
        // Selecting an entry recalls its expression into the formula field
        browser.set_callback({
            let s = *sender;
            move |_| s.send(Message::HistoryRecall)
        });

        let mut actions = Flex::default().row();
        actions.set_pad(4);
        let mut copy_button = Button::default().with_label("Copy");
        copy_button.set_callback({
            let s = *sender;
            move |_| s.send(Message::HistoryCopy)
        });
        let mut delete_button = Button::default().with_label("Delete");
        delete_button.set_callback({
            let s = *sender;
            move |_| s.send(Message::HistoryDelete)
        });
        let mut clear_button = Button::default().with_label("Clear All");
        clear_button.set_callback({
            let s = *sender;
            move |_| s.send(Message::HistoryClearAll)
        });
        actions.end();
        group.fixed(&actions, 28);

        group.end();

        Self {
            group,
            title,
            browser,
            copy_button,
            delete_button,
            clear_button,
            dark_mode: false,
        }
    }

    /// Rebuild the browser lines from the log. Privacy mode masks both
    /// columns without touching the underlying entries.
    pub fn render(&mut self, entries: &[HistoryEntry], privacy: bool) {
        self.browser.clear();

        let ink = if self.dark_mode {
            Color::White.bits()
        } else {
            Color::Black.bits()
        };

        if entries.is_empty() {
            self.browser.add(&format!("@C{}@i@.No calculations yet", ink));
            return;
        }

        for entry in entries {
            let line = if privacy {
                format!("@C{}@.*** = ***", ink)
            } else {
                format!("@C{}@.{} = {}", ink, entry.expression, entry.result)
            };
            self.browser.add(&line);
        }
    }

    /// Zero-based index of the selected line, if any.
    pub fn selected_index(&self) -> Option<usize> {
        let line = self.browser.value();
        if line <= 0 { None } else { Some(line as usize - 1) }
    }

    pub fn apply_palette(&mut self, is_dark: bool) {
        self.dark_mode = is_dark;
        if is_dark {
            self.browser.set_color(Color::from_rgb(30, 30, 30));
            self.browser.set_selection_color(Color::from_rgb(70, 70, 100));
            self.title.set_label_color(Color::from_rgb(220, 220, 220));
            for button in [
                &mut self.copy_button,
                &mut self.delete_button,
                &mut self.clear_button,
            ] {
                button.set_color(Color::from_rgb(45, 45, 45));
                button.set_label_color(Color::from_rgb(220, 220, 220));
            }
        } else {
            self.browser.set_color(Color::White);
            self.browser.set_selection_color(Color::from_rgb(173, 216, 230));
            self.title.set_label_color(Color::Black);
            for button in [
                &mut self.copy_button,
                &mut self.delete_button,
                &mut self.clear_button,
            ] {
                button.set_color(Color::from_rgb(250, 250, 250));
                button.set_label_color(Color::Black);
            }
        }
        self.group.redraw();
    }
}

use std::cell::RefCell;
use std::rc::Rc;

use fltk::{
    app::{self, Sender},
    dialog,
    frame::Frame,
    group::Flex,
    input::Input,
    menu::MenuBar,
    prelude::*,
    window::Window,
};

use super::calc::{self, Evaluation, Operator};
use super::history::{HistoryEntry, HistoryStore};
use super::messages::Message;
use super::platform::detect_system_dark_mode;
use super::session;
use super::settings::{AppSettings, ThemeMode};
use crate::ui::history_panel::HistoryPanel;
use crate::ui::main_window::MainWidgets;
use crate::ui::theme;

/// How long an explicit-evaluate error stays on the result line.
const ERROR_FLASH_SECONDS: f64 = 1.0;

pub struct AppState {
    pub window: Window,
    pub flex: Flex,
    pub menu: MenuBar,
    pub formula_input: Input,
    pub result_frame: Frame,
    pub keypad: Flex,
    pub history_panel: HistoryPanel,
    pub sender: Sender<Message>,
    pub settings: Rc<RefCell<AppSettings>>,
    pub history: HistoryStore,
    pub dark_mode: bool,
    pub privacy_mode: bool,
}

impl AppState {
    pub fn new(
        widgets: MainWidgets,
        sender: Sender<Message>,
        settings: Rc<RefCell<AppSettings>>,
        history: HistoryStore,
    ) -> Self {
        Self {
            window: widgets.wind,
            flex: widgets.flex,
            menu: widgets.menu,
            formula_input: widgets.formula_input,
            result_frame: widgets.result_frame,
            keypad: widgets.keypad,
            history_panel: widgets.history,
            sender,
            settings,
            history,
            dark_mode: false,
            privacy_mode: false,
        }
    }

    pub fn show(&mut self) {
        self.window.show();
    }

    pub fn formula(&self) -> String {
        self.formula_input.value()
    }

    fn set_formula(&mut self, text: &str) {
        self.formula_input.set_value(text);
    }

    fn formula_has_focus(&self) -> bool {
        app::focus().map(|w| w.as_widget_ptr() as usize)
            == Some(self.formula_input.as_widget_ptr() as usize)
    }

    /// Splice text into the formula at the input's cursor, FLTK positions
    /// are byte offsets so clamp back to a char boundary first.
    fn insert_at_cursor(&mut self, text: &str) {
        let value = self.formula();
        let mut pos = (self.formula_input.position().max(0) as usize).min(value.len());
        while pos > 0 && !value.is_char_boundary(pos) {
            pos -= 1;
        }
        let updated = format!("{}{}{}", &value[..pos], text, &value[pos..]);
        self.formula_input.set_value(&updated);
        let _ = self.formula_input.set_position((pos + text.len()) as i32);
    }

    // --- Keypad input ---

    pub fn handle_digit(&mut self, digit: char) {
        if self.privacy_mode {
            return;
        }
        if self.formula_has_focus() {
            self.insert_at_cursor(&digit.to_string());
        } else {
            let value = self.formula();
            if value.is_empty() || value == "0" {
                self.set_formula(&digit.to_string());
            } else {
                self.set_formula(&format!("{}{}", value, digit));
            }
        }
        self.after_keypad_edit();
    }

    pub fn handle_decimal(&mut self) {
        if self.privacy_mode {
            return;
        }
        if self.formula_has_focus() {
            self.insert_at_cursor(".");
        } else {
            let value = self.formula();
            match calc::last_number(&value) {
                Some(n) if !n.contains('.') => self.set_formula(&format!("{}.", value)),
                None => self.set_formula(&format!("{}0.", value)),
                _ => {} // current number already has its point
            }
        }
        self.after_keypad_edit();
    }

    pub fn handle_operator(&mut self, op: Operator) {
        if self.privacy_mode {
            return;
        }
        let text = format!(" {} ", op.glyph());
        if self.formula_has_focus() {
            self.insert_at_cursor(&text);
        } else {
            // A trailing operator is replaced, not stacked
            let value = calc::strip_trailing_operator(&self.formula());
            self.set_formula(&format!("{}{}", value, text));
        }
        self.after_keypad_edit();
    }

    pub fn handle_backspace(&mut self) {
        if self.privacy_mode {
            return;
        }
        self.delete_last_char();
        self.after_keypad_edit();
    }

    /// CE behaves like backspace unless the user is editing inline.
    pub fn handle_clear_entry(&mut self) {
        if self.privacy_mode || self.formula_has_focus() {
            return;
        }
        self.delete_last_char();
        self.after_keypad_edit();
    }

    fn delete_last_char(&mut self) {
        let value = self.formula();
        let mut chars: Vec<char> = value.trim().chars().collect();
        chars.pop();
        let next: String = chars.into_iter().collect();
        let next = next.trim_end();
        if next.is_empty() {
            self.set_formula("0");
        } else {
            self.set_formula(next);
        }
    }

    pub fn handle_clear(&mut self) {
        if self.privacy_mode {
            return;
        }
        self.set_formula("0");
        self.after_keypad_edit();
    }

    // --- Evaluation ---

    pub fn handle_equals(&mut self) {
        if self.privacy_mode {
            return;
        }
        let formula = self.formula().trim().to_string();
        if formula.is_empty() || formula == "0" {
            return;
        }

        let expression = calc::strip_trailing_operator(&formula);
        match calc::evaluate_formula(&expression) {
            Evaluation::Value(value) => {
                let formatted = calc::format_number(value);
                self.history.append(&expression, &formatted);
                self.set_formula(&formatted);
                self.update_preview();
                self.render_history();
            }
            Evaluation::Invalid => {
                self.result_frame.set_label("Error");
                let s = self.sender;
                app::add_timeout3(ERROR_FLASH_SECONDS, move |_| {
                    s.send(Message::ClearErrorFlash);
                });
            }
        }
    }

    /// Recompute the result line from the current formula.
    pub fn update_preview(&mut self) {
        if self.privacy_mode {
            self.result_frame.set_label("***");
            return;
        }
        let formula = self.formula();
        let trimmed = formula.trim();
        if trimmed.is_empty() || trimmed == "0" {
            self.result_frame.set_label("0");
            return;
        }
        self.result_frame.set_label(&calc::preview(trimmed));
    }

    /// The user typed directly into the formula field.
    pub fn handle_formula_edited(&mut self) {
        if self.privacy_mode {
            return;
        }
        self.update_preview();
        self.autosave_draft();
    }

    fn after_keypad_edit(&mut self) {
        if self.settings.borrow().reclaim_focus {
            let _ = self.formula_input.take_focus();
        }
        self.update_preview();
        self.autosave_draft();
    }

    // --- Draft autosave ---

    fn autosave_draft(&mut self) {
        if self.privacy_mode {
            return;
        }
        if let Err(e) = session::save_draft(&self.formula()) {
            eprintln!("Failed to save draft: {}", e);
        }
    }

    pub fn restore_draft(&mut self) {
        if let Some(formula) = session::load_draft() {
            self.set_formula(&formula);
        }
        self.update_preview();
    }

    // --- History ---

    pub fn render_history(&mut self) {
        let entries = self.history.list().to_vec();
        self.history_panel.render(&entries, self.privacy_mode);
    }

    fn selected_entry(&mut self) -> Option<HistoryEntry> {
        let index = self.history_panel.selected_index()?;
        self.history.list().get(index).cloned()
    }

    pub fn handle_history_recall(&mut self) {
        if self.privacy_mode {
            return;
        }
        if let Some(entry) = self.selected_entry() {
            self.set_formula(&entry.expression);
            self.update_preview();
        }
    }

    pub fn handle_history_copy(&mut self) {
        if self.privacy_mode {
            return;
        }
        if let Some(entry) = self.selected_entry() {
            app::copy(&entry.result);
        }
    }

    pub fn handle_history_delete(&mut self) {
        if self.privacy_mode {
            return;
        }
        if let Some(entry) = self.selected_entry() {
            self.history.remove(&entry.id);
            self.render_history();
        }
    }

    pub fn handle_history_clear_all(&mut self) {
        if self.history.is_empty() {
            return;
        }
        let choice =
            dialog::choice2_default("Clear all calculation history?", "Clear", "Cancel", "");
        if choice == Some(0) {
            self.history.clear();
            self.render_history();
        }
    }

    pub fn handle_reset_all(&mut self) {
        let choice = dialog::choice2_default(
            "Discard all saved data?\nThis clears the calculation history and the saved draft.",
            "Discard",
            "Cancel",
            "",
        );
        if choice == Some(0) {
            self.history.clear();
            session::clear_draft();
            self.set_formula("0");
            self.update_preview();
            self.render_history();
        }
    }

    // --- View toggles ---

    pub fn handle_toggle_privacy(&mut self) {
        self.privacy_mode = !self.privacy_mode;
        if self.privacy_mode {
            self.formula_input.set_value("***");
            self.result_frame.set_label("***");
        } else {
            self.formula_input.set_value("0");
            self.update_preview();
        }
        self.render_history();
    }

    pub fn handle_set_theme(&mut self, mode: ThemeMode) {
        {
            let mut s = self.settings.borrow_mut();
            s.theme_mode = mode;
            if let Err(e) = s.save() {
                eprintln!("Failed to save settings: {}", e);
            }
        }
        self.apply_theme();
    }

    pub fn apply_theme(&mut self) {
        let mode = self.settings.borrow().theme_mode;
        self.dark_mode = match mode {
            ThemeMode::Light => false,
            ThemeMode::Dark => true,
            ThemeMode::SystemDefault => detect_system_dark_mode(),
        };
        theme::apply_theme(
            &mut self.window,
            &mut self.menu,
            &mut self.formula_input,
            &mut self.result_frame,
            &mut self.keypad,
            &mut self.history_panel,
            self.dark_mode,
        );
        // Browser lines embed their ink color, so redraw them too
        self.render_history();
    }
}

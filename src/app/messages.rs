use super::calc::Operator;
use super::settings::ThemeMode;

/// All messages that can be sent through the FLTK channel.
/// Each keypad, menu, and input callback sends one of these; the dispatch
/// loop in main handles them.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Message {
    // Keypad
    Digit(char),
    Decimal,
    Operator(Operator),
    Equals,
    Clear,
    ClearEntry,
    Backspace,

    // Formula field
    FormulaEdited,
    ClearErrorFlash,

    // History panel
    HistoryRecall,
    HistoryCopy,
    HistoryDelete,
    HistoryClearAll,

    // View
    SetTheme(ThemeMode),
    TogglePrivacy,

    // App
    ResetAll,
    ShowAbout,
    Quit,
}

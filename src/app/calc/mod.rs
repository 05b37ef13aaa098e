//! The expression evaluation pipeline: sanitize, evaluate, format.
//!
//! Raw formula text flows through [`sanitizer`], then [`evaluator`], then
//! [`formatter`]; [`evaluate_formula`] runs the whole pipe and [`preview`]
//! applies the live-typing fallback policy on top of it.

pub mod evaluator;
pub mod formatter;
pub mod sanitizer;

use std::sync::OnceLock;

use regex_lite::Regex;

pub use evaluator::evaluate;
pub use formatter::format_number;
pub use sanitizer::{Sanitized, sanitize};

/// Outcome of evaluating a formula. Never partially valid.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Evaluation {
    Value(f64),
    Invalid,
}

impl Evaluation {
    pub fn is_valid(self) -> bool {
        matches!(self, Evaluation::Value(_))
    }

    pub fn value(self) -> Option<f64> {
        match self {
            Evaluation::Value(v) => Some(v),
            Evaluation::Invalid => None,
        }
    }
}

/// One of the four binary operators a keypad can produce.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operator {
    Add,
    Subtract,
    Multiply,
    Divide,
}

impl Operator {
    /// ASCII form used in sanitized expressions.
    pub fn ascii(self) -> char {
        match self {
            Operator::Add => '+',
            Operator::Subtract => '-',
            Operator::Multiply => '*',
            Operator::Divide => '/',
        }
    }

    /// Display glyph shown in the formula field.
    pub fn glyph(self) -> char {
        match self {
            Operator::Add => '+',
            Operator::Subtract => '\u{2212}', // −
            Operator::Multiply => '\u{00d7}', // ×
            Operator::Divide => '\u{00f7}',   // ÷
        }
    }
}

/// True for any character that renders as a binary operator in the formula
/// field, ASCII or display glyph.
pub fn is_operator_char(c: char) -> bool {
    matches!(
        c,
        '+' | '-' | '*' | '/' | '\u{00d7}' | '\u{00f7}' | '\u{2212}'
    )
}

/// Drop a single trailing operator (and surrounding whitespace) from
/// display-form formula text, e.g. `"3 × "` becomes `"3"`.
pub fn strip_trailing_operator(text: &str) -> String {
    let trimmed = text.trim();
    match trimmed.chars().last() {
        Some(c) if is_operator_char(c) => trimmed[..trimmed.len() - c.len_utf8()]
            .trim_end()
            .to_string(),
        _ => trimmed.to_string(),
    }
}

/// Run the full pipeline on raw formula text.
pub fn evaluate_formula(raw: &str) -> Evaluation {
    match sanitize(raw) {
        Ok(Sanitized::Zero) => Evaluation::Value(0.0),
        Ok(Sanitized::Expr(expr)) => match evaluate(&expr) {
            Ok(value) => Evaluation::Value(value),
            Err(_) => Evaluation::Invalid,
        },
        Err(_) => Evaluation::Invalid,
    }
}

/// The last complete numeric token in a formula (trailing `digits[.digits]`).
pub fn last_number(formula: &str) -> Option<String> {
    static LAST_NUMBER: OnceLock<Regex> = OnceLock::new();
    let re = LAST_NUMBER.get_or_init(|| Regex::new(r"(\d+\.?\d*)$").expect("valid pattern"));
    re.captures(formula)
        .map(|caps| caps[1].to_string())
}

/// Live preview text for a formula mid-entry.
///
/// A valid formula previews its formatted result. An invalid one falls back
/// to the last complete numeric token, then to `"0"` — never an error,
/// which only an explicit evaluate action may surface.
pub fn preview(raw: &str) -> String {
    match evaluate_formula(raw) {
        Evaluation::Value(value) => format_number(value),
        Evaluation::Invalid => last_number(raw.trim_end()).unwrap_or_else(|| "0".to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pipeline_round_trip() {
        let result = evaluate_formula("2*(3+4)").value().unwrap();
        assert_eq!(format_number(result), "14");
    }

    #[test]
    fn test_pipeline_with_display_glyphs() {
        let result = evaluate_formula("7 × 3 ÷ 2").value().unwrap();
        assert_eq!(format_number(result), "10.5");
    }

    #[test]
    fn test_empty_and_zero_short_circuit() {
        assert_eq!(evaluate_formula(""), Evaluation::Value(0.0));
        assert_eq!(evaluate_formula("0"), Evaluation::Value(0.0));
    }

    #[test]
    fn test_invalid_outcomes() {
        assert_eq!(evaluate_formula("5/0"), Evaluation::Invalid);
        assert_eq!(evaluate_formula("1+x"), Evaluation::Invalid);
        assert_eq!(evaluate_formula("(1+2"), Evaluation::Invalid);
    }

    #[test]
    fn test_preview_of_valid_formula() {
        assert_eq!(preview("1+2"), "3");
        // A trailing operator is dropped by the sanitizer, so this is
        // still a complete formula
        assert_eq!(preview("1+2+"), "3");
        assert_eq!(preview("1 + 2 × "), "3");
    }

    #[test]
    fn test_preview_falls_back_to_last_number() {
        assert_eq!(preview("(1+2"), "2");
        assert_eq!(preview("(1+2.5"), "2.5");
    }

    #[test]
    fn test_preview_falls_back_to_zero() {
        assert_eq!(preview("(("), "0");
        assert_eq!(preview("(1+2)("), "0");
    }

    #[test]
    fn test_preview_never_errors_mid_entry() {
        for raw in ["((", "1+", "(", "9)(", "..."] {
            let shown = preview(raw);
            assert!(!shown.is_empty());
            assert!(!shown.to_lowercase().contains("error"));
        }
    }

    #[test]
    fn test_last_number() {
        assert_eq!(last_number("1+23"), Some("23".to_string()));
        assert_eq!(last_number("1+23.5"), Some("23.5".to_string()));
        assert_eq!(last_number("1+"), None);
        assert_eq!(last_number(""), None);
    }

    #[test]
    fn test_strip_trailing_operator() {
        assert_eq!(strip_trailing_operator("3 × "), "3");
        assert_eq!(strip_trailing_operator("3+"), "3");
        assert_eq!(strip_trailing_operator("1 + 2"), "1 + 2");
        assert_eq!(strip_trailing_operator("  7  "), "7");
    }

    #[test]
    fn test_operator_glyphs() {
        assert_eq!(Operator::Multiply.glyph(), '×');
        assert_eq!(Operator::Divide.glyph(), '÷');
        assert_eq!(Operator::Subtract.glyph(), '−');
        assert_eq!(Operator::Add.glyph(), '+');
        assert_eq!(Operator::Multiply.ascii(), '*');
    }
}

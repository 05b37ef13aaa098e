//! Formula normalization and validation.
//!
//! This is the security boundary between free-form user text and the
//! evaluator: nothing but digits, the four operators, parentheses and
//! decimal points may pass through.

use crate::app::error::AppError;

/// Outcome of sanitizing raw formula text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Sanitized {
    /// Empty-equivalent input ("" or "0") short-circuits to zero
    /// without touching the evaluator.
    Zero,
    /// A normalized ASCII arithmetic expression, safe to hand to the parser.
    Expr(String),
}

/// Normalize raw formula text into a safe arithmetic expression.
///
/// Display glyphs (`×`, `÷`, `−`) become their ASCII operators, whitespace
/// is stripped, and a single trailing binary operator is dropped so that
/// mid-entry formulas like `"3+"` still evaluate. Anything outside
/// `[0-9+-*/().]` or with unbalanced parentheses is rejected.
pub fn sanitize(raw: &str) -> Result<Sanitized, AppError> {
    let mut expr: String = raw
        .chars()
        .map(|c| match c {
            '\u{00d7}' => '*', // ×
            '\u{00f7}' => '/', // ÷
            '\u{2212}' => '-', // −
            other => other,
        })
        .filter(|c| !c.is_whitespace())
        .collect();

    if matches!(expr.chars().last(), Some('+' | '-' | '*' | '/')) {
        expr.pop();
    }

    if expr.is_empty() || expr == "0" {
        return Ok(Sanitized::Zero);
    }

    if let Some(bad) = expr.chars().find(|&c| !is_allowed(c)) {
        return Err(AppError::InvalidExpression(format!(
            "character '{}' is not allowed",
            bad
        )));
    }

    // Parentheses must balance: the running open-count never goes negative
    // and ends at exactly zero.
    let mut open = 0i32;
    for c in expr.chars() {
        match c {
            '(' => open += 1,
            ')' => {
                open -= 1;
                if open < 0 {
                    return Err(AppError::InvalidExpression("unmatched ')'".to_string()));
                }
            }
            _ => {}
        }
    }
    if open != 0 {
        return Err(AppError::InvalidExpression("unclosed '('".to_string()));
    }

    Ok(Sanitized::Expr(expr))
}

fn is_allowed(c: char) -> bool {
    c.is_ascii_digit() || matches!(c, '+' | '-' | '*' | '/' | '(' | ')' | '.')
}

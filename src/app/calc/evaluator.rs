//! Arithmetic evaluation over sanitized expressions.
//!
//! A hand-rolled tokenizer and recursive-descent parser restricted to
//! `+ - * / ( )` and decimal literals. There is deliberately no
//! code-execution primitive anywhere near this path; the grammar is the
//! whole attack surface.

use std::iter::Peekable;
use std::vec::IntoIter;

use crate::app::error::AppError;

#[derive(Debug, Clone, Copy, PartialEq)]
enum Token {
    Num(f64),
    Plus,
    Minus,
    Star,
    Slash,
    LParen,
    RParen,
}

fn tokenize(expr: &str) -> Result<Vec<Token>, AppError> {
    let mut tokens = Vec::new();
    let mut chars = expr.char_indices().peekable();

    while let Some(&(start, c)) = chars.peek() {
        match c {
            '+' => {
                tokens.push(Token::Plus);
                chars.next();
            }
            '-' => {
                tokens.push(Token::Minus);
                chars.next();
            }
            '*' => {
                tokens.push(Token::Star);
                chars.next();
            }
            '/' => {
                tokens.push(Token::Slash);
                chars.next();
            }
            '(' => {
                tokens.push(Token::LParen);
                chars.next();
            }
            ')' => {
                tokens.push(Token::RParen);
                chars.next();
            }
            '0'..='9' | '.' => {
                let mut end = start;
                while let Some(&(i, d)) = chars.peek() {
                    if d.is_ascii_digit() || d == '.' {
                        end = i + d.len_utf8();
                        chars.next();
                    } else {
                        break;
                    }
                }
                let literal = &expr[start..end];
                // Rejects malformed runs like "1.2.3" or a bare "."
                let num: f64 = literal.parse().map_err(|_| {
                    AppError::InvalidExpression(format!("malformed number '{}'", literal))
                })?;
                tokens.push(Token::Num(num));
            }
            other => {
                // Unreachable behind the sanitizer, but fail closed anyway
                return Err(AppError::InvalidExpression(format!(
                    "unexpected character '{}'",
                    other
                )));
            }
        }
    }

    Ok(tokens)
}

struct Parser {
    tokens: Peekable<IntoIter<Token>>,
}

impl Parser {
    /// expression := term (('+' | '-') term)*
    fn expression(&mut self) -> Result<f64, AppError> {
        let mut acc = self.term()?;
        while let Some(&op) = self.tokens.peek() {
            match op {
                Token::Plus => {
                    self.tokens.next();
                    acc += self.term()?;
                }
                Token::Minus => {
                    self.tokens.next();
                    acc -= self.term()?;
                }
                _ => break,
            }
        }
        Ok(acc)
    }

    /// term := factor (('*' | '/') factor)*
    fn term(&mut self) -> Result<f64, AppError> {
        let mut acc = self.factor()?;
        while let Some(&op) = self.tokens.peek() {
            match op {
                Token::Star => {
                    self.tokens.next();
                    acc *= self.factor()?;
                }
                Token::Slash => {
                    self.tokens.next();
                    // Division by zero surfaces as a non-finite value and is
                    // caught by the finiteness gate in evaluate()
                    acc /= self.factor()?;
                }
                _ => break,
            }
        }
        Ok(acc)
    }

    /// factor := ('+' | '-') factor | NUMBER | '(' expression ')'
    fn factor(&mut self) -> Result<f64, AppError> {
        match self.tokens.next() {
            Some(Token::Num(n)) => Ok(n),
            Some(Token::Plus) => self.factor(),
            Some(Token::Minus) => Ok(-self.factor()?),
            Some(Token::LParen) => {
                let inner = self.expression()?;
                match self.tokens.next() {
                    Some(Token::RParen) => Ok(inner),
                    _ => Err(AppError::InvalidExpression("expected ')'".to_string())),
                }
            }
            _ => Err(AppError::InvalidExpression("expected a value".to_string())),
        }
    }
}

/// Evaluate a sanitized expression string to a finite number.
///
/// Standard precedence (`*`/`/` over `+`/`-`), left-to-right associativity,
/// parentheses, and unary sign. Division by zero and any other non-finite
/// outcome is an error, as is any syntactic residue the sanitizer's charset
/// gate cannot see (adjacent operators, dangling tokens).
pub fn evaluate(expr: &str) -> Result<f64, AppError> {
    let tokens = tokenize(expr)?;
    let mut parser = Parser {
        tokens: tokens.into_iter().peekable(),
    };
    let value = parser.expression()?;
    if parser.tokens.next().is_some() {
        return Err(AppError::InvalidExpression(
            "trailing tokens after expression".to_string(),
        ));
    }
    if !value.is_finite() {
        return Err(AppError::InvalidExpression(
            "result is not a finite number".to_string(),
        ));
    }
    Ok(value)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn eval(expr: &str) -> f64 {
        evaluate(expr).unwrap()
    }

    #[test]
    fn test_basic_arithmetic() {
        assert_eq!(eval("2+2"), 4.0);
        assert_eq!(eval("10-4"), 6.0);
        assert_eq!(eval("6*7"), 42.0);
        assert_eq!(eval("15/4"), 3.75);
    }

    #[test]
    fn test_operator_precedence() {
        assert_eq!(eval("2+3*4"), 14.0);
        assert_eq!(eval("20-6/2"), 17.0);
    }

    #[test]
    fn test_left_associativity() {
        assert_eq!(eval("8-3-2"), 3.0);
        assert_eq!(eval("100/5/2"), 10.0);
    }

    #[test]
    fn test_parentheses_override_precedence() {
        assert_eq!(eval("(2+3)*4"), 20.0);
        assert_eq!(eval("2*(3+4)"), 14.0);
        assert_eq!(eval("((1+1))*3"), 6.0);
    }

    #[test]
    fn test_unary_sign() {
        assert_eq!(eval("-3+5"), 2.0);
        assert_eq!(eval("2*-3"), -6.0);
        assert_eq!(eval("-(1+2)"), -3.0);
        assert_eq!(eval("+4"), 4.0);
    }

    #[test]
    fn test_decimals() {
        assert_eq!(eval("0.1+0.2"), 0.1 + 0.2);
        assert_eq!(eval(".5*2"), 1.0);
        assert_eq!(eval("5."), 5.0);
    }

    #[test]
    fn test_division_by_zero_is_invalid() {
        assert!(evaluate("5/0").is_err());
        assert!(evaluate("0/0").is_err());
        assert!(evaluate("1/(2-2)").is_err());
    }

    #[test]
    fn test_malformed_residue_is_invalid() {
        assert!(evaluate("2+*3").is_err());
        assert!(evaluate("()").is_err());
        assert!(evaluate("1..2").is_err());
        // Whitespace never reaches the evaluator; fail closed if it does
        assert!(evaluate("1 2").is_err());
        assert!(evaluate("3+").is_err());
        assert!(evaluate("(").is_err());
    }

    #[test]
    fn test_number_juxtaposition_is_invalid() {
        // "(1)(2)" tokenizes fine but is not a single expression
        assert!(evaluate("(1)(2)").is_err());
        assert!(evaluate("(1)2").is_err());
    }
}

use std::num::IntErrorKind;

use logos::Logos;

use crate::error::ParseError;

/// Represents an operator symbol selecting which computation to perform.
///
/// The token set is closed: exactly twelve symbols are recognized, and
/// matching is exact and case-sensitive. Three-character tokens (`<<<`,
/// `>>>`) are distinguished from their two-character prefixes (`<<`, `>>`)
/// by maximal munch, so `<<<` can never lex as `<<` followed by a stray `<`.
#[derive(Logos, Debug, PartialEq, Eq, Clone, Copy)]
pub enum Operator {
    /// `+`
    #[token("+")]
    Add,
    /// `-`
    #[token("-")]
    Sub,
    /// `*`
    #[token("*")]
    Mul,
    /// `/`
    #[token("/")]
    Div,
    /// `%`
    #[token("%")]
    Mod,
    /// `<<`
    #[token("<<")]
    ShiftLeft,
    /// `>>`
    #[token(">>")]
    ShiftRight,
    /// `&`
    #[token("&")]
    And,
    /// `|`
    #[token("|")]
    Or,
    /// `^`
    #[token("^")]
    Xor,
    /// `<<<`
    #[token("<<<")]
    RotateLeft,
    /// `>>>`
    #[token(">>>")]
    RotateRight,
}

impl std::fmt::Display for Operator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        use Operator::{
            Add, And, Div, Mod, Mul, Or, RotateLeft, RotateRight, ShiftLeft, ShiftRight, Sub, Xor,
        };
        let symbol = match self {
            Add => "+",
            Sub => "-",
            Mul => "*",
            Div => "/",
            Mod => "%",
            ShiftLeft => "<<",
            ShiftRight => ">>",
            And => "&",
            Or => "|",
            Xor => "^",
            RotateLeft => "<<<",
            RotateRight => ">>>",
        };
        write!(f, "{symbol}")
    }
}

/// Parses an operator token string into an [`Operator`].
///
/// The whole string must lex as exactly one operator token. Leading or
/// trailing characters (including whitespace) and empty input are rejected;
/// there is no partial match.
///
/// # Errors
/// Returns `ParseError::UnsupportedOperator` if the string is not exactly
/// one recognized operator symbol.
///
/// # Example
/// ```
/// use bitcalc::lexer::{Operator, parse_operator};
///
/// assert_eq!(parse_operator("+").unwrap(), Operator::Add);
/// assert_eq!(parse_operator("<<<").unwrap(), Operator::RotateLeft);
/// assert!(parse_operator("**").is_err());
/// assert!(parse_operator("<<x").is_err());
/// ```
pub fn parse_operator(token: &str) -> Result<Operator, ParseError> {
    let mut lexer = Operator::lexer(token);

    let operator = match lexer.next() {
        Some(Ok(op)) => op,
        _ => {
            return Err(ParseError::UnsupportedOperator { token: token.to_string(), });
        },
    };

    if lexer.next().is_some() {
        return Err(ParseError::UnsupportedOperator { token: token.to_string(), });
    }

    Ok(operator)
}

/// Parses an operand string as a base-10 32-bit integer.
///
/// The canonical operand representation is `i32`; the evaluator
/// reinterprets it as unsigned where the operator demands it. Strings with
/// trailing non-numeric characters are malformed, and in-syntax values
/// outside the `i32` range are reported as out of range rather than
/// malformed.
///
/// # Errors
/// - `ParseError::OperandOutOfRange` if the value does not fit in an `i32`.
/// - `ParseError::InvalidOperand` for any other malformed input.
///
/// # Example
/// ```
/// use bitcalc::lexer::parse_operand;
///
/// assert_eq!(parse_operand("42").unwrap(), 42);
/// assert_eq!(parse_operand("-2147483648").unwrap(), i32::MIN);
/// assert!(parse_operand("12abc").is_err());
/// assert!(parse_operand("2147483648").is_err());
/// ```
pub fn parse_operand(text: &str) -> Result<i32, ParseError> {
    match text.parse::<i32>() {
        Ok(value) => Ok(value),
        Err(e) => match e.kind() {
            IntErrorKind::PosOverflow | IntErrorKind::NegOverflow => {
                Err(ParseError::OperandOutOfRange { text: text.to_string(), })
            },
            _ => Err(ParseError::InvalidOperand { text: text.to_string(), }),
        },
    }
}

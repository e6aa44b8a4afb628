//! # bitcalc
//!
//! bitcalc is a command-line calculator for 32-bit integers. It evaluates a
//! single operation between two operands, covering checked arithmetic
//! (`+`, `-`, `*`, `/`, `%`) and unsigned bitwise operations including
//! logical shifts and circular rotations (`<<`, `>>`, `&`, `|`, `^`,
//! `<<<`, `>>>`).

#![warn(
    clippy::redundant_clone,
    clippy::needless_pass_by_value,
    clippy::similar_names,
    clippy::large_enum_variant,
    clippy::string_lit_as_bytes,
    clippy::match_same_arms,
    clippy::cargo,
    clippy::nursery,
    clippy::perf,
    clippy::style,
    clippy::suspicious,
    clippy::correctness,
    clippy::complexity,
    clippy::pedantic,
    //missing_docs,
)]
#![allow(clippy::missing_errors_doc)]

use crate::{
    evaluator::core::evaluate,
    lexer::{parse_operand, parse_operator},
    value::Value,
};

/// Provides unified error types for parsing and evaluation.
///
/// This module defines all errors that can be raised while parsing the
/// operand and operator strings or while evaluating the operation. It
/// standardizes error reporting and carries enough detail for the CLI
/// shell to print a specific, actionable one-line message.
///
/// # Responsibilities
/// - Defines error enums for all failure modes (parser, evaluator).
/// - Attaches the offending text or operator for context.
/// - Supports integration with standard error handling traits.
pub mod error;
/// Computes results from parsed operators and operands.
///
/// This module holds the whole evaluation core: dispatch from operator to
/// handler, overflow-checked arithmetic over a widened accumulator, and
/// bitwise operations over unsigned 32-bit quantities. The evaluator is a
/// pure function with no state between calls and no I/O.
///
/// # Responsibilities
/// - Routes each operator to exactly one result type.
/// - Validates and reinterprets operands as unsigned for bitwise operators.
/// - Detects division by zero and arithmetic overflow before they occur.
pub mod evaluator;
/// Turns raw argument strings into typed operators and operands.
///
/// This module defines the closed operator token set and the base-10
/// operand syntax. Operator tokens are matched exactly and completely;
/// operands are parsed into the canonical signed 32-bit representation.
///
/// # Responsibilities
/// - Defines the `Operator` token enum and its parsing rules.
/// - Parses operand strings, distinguishing malformed from out-of-range.
pub mod lexer;
/// General utilities for safe numeric conversion.
///
/// # Responsibilities
/// - Safely narrow wider accumulators back to 32-bit values.
/// - Reinterpret signed values as unsigned without silent wraparound.
pub mod util;
/// Defines the result value model.
///
/// # Responsibilities
/// - Declares the `Value` union of signed, unsigned and real results.
/// - Formats each variant the way the CLI prints it.
pub mod value;

/// Returns the result of a single calculation over raw argument strings.
///
/// This function ties the crate together: it parses the operator token and
/// both operands, then evaluates the operation. It never prints and never
/// exits; reporting the error line and choosing the exit status belong to
/// the caller.
///
/// # Errors
/// Returns an error if an operand or the operator fails to parse, or if
/// evaluation fails (division by zero, overflow, negative operand to a
/// bitwise operator).
///
/// # Examples
/// ```
/// use bitcalc::{calculate, value::Value};
///
/// let result = calculate("10", "+", "5").unwrap();
/// assert_eq!(result, Value::Integer(15));
///
/// // Division always yields a real result.
/// let result = calculate("10", "/", "3").unwrap();
/// assert_eq!(result.to_string(), "3.33");
///
/// // Bitwise operators reject negative operands.
/// assert!(calculate("-1", "&", "1").is_err());
/// ```
pub fn calculate(operand1: &str,
                 operator: &str,
                 operand2: &str)
                 -> Result<Value, Box<dyn std::error::Error>> {
    let operator = parse_operator(operator)?;
    let left = parse_operand(operand1)?;
    let right = parse_operand(operand2)?;

    Ok(evaluate(operator, left, right)?)
}

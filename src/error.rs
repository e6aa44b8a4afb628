/// Parsing errors.
///
/// Defines all error types that can occur while turning the raw operand and
/// operator strings into their typed forms, before any evaluation happens.
pub mod parse_error;
/// Evaluation errors.
///
/// Contains all error types that can be raised while computing a result:
/// division by zero, integer overflow, and operands that are invalid for
/// the chosen operator.
pub mod eval_error;

pub use eval_error::EvalError;
pub use parse_error::ParseError;

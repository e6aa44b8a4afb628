use crate::{
    error::EvalError,
    evaluator::{
        arithmetic::{eval_arithmetic, eval_division, eval_modulo},
        bitwise::eval_bitwise,
    },
    lexer::Operator,
    util::num::i32_to_u32_checked,
    value::Value,
};

/// Result type used by the evaluator.
///
/// All evaluation functions return either a value of type `T` or an
/// `EvalError` describing the failure.
pub type EvalResult<T> = Result<T, EvalError>;

/// Evaluates a single operation and returns the resulting value.
///
/// This is the main entry point of the evaluator: a pure function of
/// `(operator, left, right)` with no state between calls. Operands arrive
/// in the canonical signed representation; for bitwise and rotation
/// operators they are validated as non-negative and reinterpreted as
/// `u32` here, at dispatch time, never through an implicit cast.
///
/// # Parameters
/// - `operator`: The operator to apply.
/// - `left`: First operand.
/// - `right`: Second operand.
///
/// # Errors
/// Returns an `EvalError` for division or modulo by zero, arithmetic
/// overflow, or a negative operand given to a bitwise operator.
///
/// # Example
/// ```
/// use bitcalc::{evaluator::core::evaluate, lexer::Operator, value::Value};
///
/// assert_eq!(evaluate(Operator::Add, 10, 5).unwrap(), Value::Integer(15));
/// assert_eq!(evaluate(Operator::Div, 7, 2).unwrap(), Value::Real(3.5));
/// assert!(evaluate(Operator::And, -1, 1).is_err());
/// ```
pub fn evaluate(operator: Operator, left: i32, right: i32) -> EvalResult<Value> {
    use Operator::{
        Add, And, Div, Mod, Mul, Or, RotateLeft, RotateRight, ShiftLeft, ShiftRight, Sub, Xor,
    };

    match operator {
        Add | Sub | Mul => eval_arithmetic(operator, left, right),
        Div => eval_division(left, right),
        Mod => eval_modulo(left, right),

        ShiftLeft | ShiftRight | And | Or | Xor | RotateLeft | RotateRight => {
            let a = i32_to_u32_checked(left, EvalError::NegativeOperand { operator })?;
            let b = i32_to_u32_checked(right, EvalError::NegativeOperand { operator })?;
            Ok(Value::Unsigned(eval_bitwise(operator, a, b)))
        },
    }
}

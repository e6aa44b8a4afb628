use crate::{
    error::EvalError,
    evaluator::core::EvalResult,
    lexer::Operator,
    util::num::i64_to_i32_checked,
    value::Value,
};

/// Evaluates an overflow-checked arithmetic operation.
///
/// The operands are widened to `i64`, which holds the exact sum, difference
/// or product of any two 32-bit values, and the result is narrowed back
/// with a range check. The operator must be one of `Add`, `Sub` or `Mul`;
/// other operators are not processed here.
///
/// # Parameters
/// - `operator`: The arithmetic operator.
/// - `left`: First operand.
/// - `right`: Second operand.
///
/// # Errors
/// Returns `EvalError::Overflow` if the exact result is outside the `i32`
/// range.
///
/// # Example
/// ```
/// use bitcalc::{evaluator::arithmetic::eval_arithmetic, lexer::Operator, value::Value};
///
/// let result = eval_arithmetic(Operator::Mul, 6, 7).unwrap();
/// assert_eq!(result, Value::Integer(42));
///
/// assert!(eval_arithmetic(Operator::Add, i32::MAX, 1).is_err());
/// ```
pub fn eval_arithmetic(operator: Operator, left: i32, right: i32) -> EvalResult<Value> {
    use Operator::{Add, Mul, Sub};

    let (a, b) = (i64::from(left), i64::from(right));

    let wide = match operator {
        Add => a + b,
        Sub => a - b,
        Mul => a * b,
        _ => unreachable!(),
    };

    let value = i64_to_i32_checked(wide, EvalError::Overflow { operator })?;
    Ok(Value::Integer(value))
}

/// Evaluates a real-valued division.
///
/// Division is the one operator whose result is always `Real`, regardless
/// of whether the operands divide evenly.
///
/// # Errors
/// Returns `EvalError::DivisionByZero` if the divisor is zero.
///
/// # Example
/// ```
/// use bitcalc::{evaluator::arithmetic::eval_division, value::Value};
///
/// assert_eq!(eval_division(7, 2).unwrap(), Value::Real(3.5));
/// assert!(eval_division(7, 0).is_err());
/// ```
pub fn eval_division(left: i32, right: i32) -> EvalResult<Value> {
    if right == 0 {
        return Err(EvalError::DivisionByZero);
    }
    Ok(Value::Real(f64::from(left) / f64::from(right)))
}

/// Evaluates a truncating remainder.
///
/// The sign of the result follows the dividend. The remainder is computed
/// in `i64` because `i32::MIN % -1` traps in 32 bits even though its
/// mathematical result, zero, is representable.
///
/// # Errors
/// Returns `EvalError::DivisionByZero` if the divisor is zero.
///
/// # Example
/// ```
/// use bitcalc::{evaluator::arithmetic::eval_modulo, value::Value};
///
/// assert_eq!(eval_modulo(7, 2).unwrap(), Value::Integer(1));
/// assert_eq!(eval_modulo(-7, 2).unwrap(), Value::Integer(-1));
/// assert!(eval_modulo(7, 0).is_err());
/// ```
pub fn eval_modulo(left: i32, right: i32) -> EvalResult<Value> {
    if right == 0 {
        return Err(EvalError::DivisionByZero);
    }

    let value = i64::from(left) % i64::from(right);
    let value = i64_to_i32_checked(value, EvalError::Overflow { operator: Operator::Mod, })?;
    Ok(Value::Integer(value))
}

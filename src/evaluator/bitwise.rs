use crate::lexer::Operator;

/// Evaluates a bitwise or rotation operation over unsigned 32-bit values.
///
/// Shift and rotation counts are reduced modulo 32, so no count can invoke
/// an out-of-width shift: `x << 32` is `x << 0`, and a rotation by any
/// multiple of 32 is the identity. Shifts are logical (zero-filled);
/// rotations are circular, with bits leaving one end re-entering at the
/// other. None of these operations can fail, so the return is a plain
/// `u32`. The operator must be one of the bitwise set; arithmetic
/// operators are not processed here.
///
/// # Parameters
/// - `operator`: The bitwise operator.
/// - `left`: First operand, the bit pattern being operated on.
/// - `right`: Second operand; the shift or rotation count where relevant.
///
/// # Example
/// ```
/// use bitcalc::{evaluator::bitwise::eval_bitwise, lexer::Operator};
///
/// assert_eq!(eval_bitwise(Operator::ShiftLeft, 1, 4), 16);
/// assert_eq!(eval_bitwise(Operator::RotateLeft, 0x8000_0000, 1), 1);
/// assert_eq!(eval_bitwise(Operator::Xor, 0b1100, 0b1010), 0b0110);
/// ```
#[must_use]
pub fn eval_bitwise(operator: Operator, left: u32, right: u32) -> u32 {
    use Operator::{And, Or, RotateLeft, RotateRight, ShiftLeft, ShiftRight, Xor};

    match operator {
        // wrapping_shl/shr mask the count to the type width, which is
        // exactly the "count mod 32" semantics wanted here.
        ShiftLeft => left.wrapping_shl(right),
        ShiftRight => left.wrapping_shr(right),
        And => left & right,
        Or => left | right,
        Xor => left ^ right,
        RotateLeft => left.rotate_left(right % 32),
        RotateRight => left.rotate_right(right % 32),
        _ => unreachable!(),
    }
}

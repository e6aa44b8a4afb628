/// Operator dispatch.
///
/// Declares the `EvalResult` alias and the `evaluate` entry point that
/// routes a parsed operator and its two canonical `i32` operands to the
/// specialized handlers, reinterpreting operands as unsigned where the
/// operator demands it.
pub mod core;
/// Arithmetic operations: addition, subtraction, multiplication, division
/// and modulo, with widened overflow checking.
pub mod arithmetic;
/// Bitwise operations: logical shifts, `&`, `|`, `^`, and circular
/// rotations over unsigned 32-bit quantities.
pub mod bitwise;

use crate::lexer::Operator;

#[derive(Debug)]
/// Represents all errors that can occur during evaluation.
pub enum EvalError {
    /// Division or modulo with a zero divisor.
    DivisionByZero,
    /// Arithmetic result outside the 32-bit signed range.
    Overflow {
        /// The operator whose result overflowed.
        operator: Operator,
    },
    /// A negative operand was given to a bitwise or rotation operator.
    NegativeOperand {
        /// The operator that rejected the operand.
        operator: Operator,
    },
}

impl std::fmt::Display for EvalError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::DivisionByZero => write!(f, "Error: Division by zero."),

            Self::Overflow { operator } => write!(f,
                                                  "Error: Integer overflow while computing '{operator}' result."),

            Self::NegativeOperand { operator } => write!(f,
                                                         "Error: Negative operands are not accepted for bitwise operator '{operator}'."),
        }
    }
}

impl std::error::Error for EvalError {}

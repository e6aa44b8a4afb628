#[derive(Debug)]
/// Represents all errors that can occur while parsing operands and the
/// operator token.
pub enum ParseError {
    /// An operand string was not a well-formed base-10 integer.
    InvalidOperand {
        /// The operand text as supplied.
        text: String,
    },
    /// An operand was syntactically valid but outside the 32-bit range.
    OperandOutOfRange {
        /// The operand text as supplied.
        text: String,
    },
    /// The operator token is not one of the supported symbols.
    UnsupportedOperator {
        /// The token encountered.
        token: String,
    },
}

impl std::fmt::Display for ParseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidOperand { text } => write!(f,
                                                    "Error: Invalid operand '{text}'. Operands must be base-10 integers."),

            Self::OperandOutOfRange { text } => write!(f,
                                                       "Error: Operand '{text}' is out of range for a 32-bit integer."),

            Self::UnsupportedOperator { token } => {
                write!(f, "Error: Unsupported operator '{token}'.")
            },
        }
    }
}

impl std::error::Error for ParseError {}

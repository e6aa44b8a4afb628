/// Represents the result of a calculation.
///
/// The variant is decided entirely by which operator produced the value:
/// division always yields `Real`, the remaining arithmetic operators yield
/// `Integer`, and the bitwise and rotation operators yield `Unsigned`. No
/// operator can produce more than one variant.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Value {
    /// A signed 32-bit integer, produced by `+`, `-`, `*` and `%`.
    Integer(i32),
    /// An unsigned 32-bit integer, produced by the bitwise and rotation
    /// operators (`<<`, `>>`, `&`, `|`, `^`, `<<<`, `>>>`).
    Unsigned(u32),
    /// A double precision floating-point number, produced by `/`.
    Real(f64),
}

impl From<i32> for Value {
    fn from(v: i32) -> Self {
        Self::Integer(v)
    }
}

impl From<u32> for Value {
    fn from(v: u32) -> Self {
        Self::Unsigned(v)
    }
}

impl From<f64> for Value {
    fn from(v: f64) -> Self {
        Self::Real(v)
    }
}

impl std::fmt::Display for Value {
    /// Formats the value the way the CLI prints it: integers as plain
    /// decimal, reals with exactly two fraction digits.
    ///
    /// # Example
    /// ```
    /// use bitcalc::value::Value;
    ///
    /// assert_eq!(Value::Integer(-15).to_string(), "-15");
    /// assert_eq!(Value::Unsigned(2_147_483_648).to_string(), "2147483648");
    /// assert_eq!(Value::Real(3.5).to_string(), "3.50");
    /// ```
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Integer(v) => write!(f, "{v}"),
            Self::Unsigned(v) => write!(f, "{v}"),
            Self::Real(v) => write!(f, "{v:.2}"),
        }
    }
}

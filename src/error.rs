//! Error types for calculator operations and history queries.

use std::fmt;

/// Errors that can occur during calculator operations.
///
/// This is a closed taxonomy: every failure mode of the library maps to
/// exactly one of these variants, and each carries a fixed message. All
/// errors are returned synchronously to the caller; no error path mutates
/// the history.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CalcError {
    /// An operand was not a usable number.
    ///
    /// For the typed API this means a non-finite value (NaN or infinity);
    /// for the dynamic-value boundary it covers strings, nulls, booleans,
    /// and any other non-numeric JSON value.
    InvalidOperand,

    /// The divisor of a division was exactly zero.
    ///
    /// Raised after operand validation and before the division is
    /// attempted.
    DivisionByZero,

    /// A query asked for the last calculation of an empty history.
    EmptyHistory,
}

impl fmt::Display for CalcError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CalcError::InvalidOperand => write!(f, "Operands must be numeric."),
            CalcError::DivisionByZero => write!(f, "Division by zero."),
            CalcError::EmptyHistory => write!(f, "No calculations in history."),
        }
    }
}

impl std::error::Error for CalcError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        assert_eq!(
            CalcError::InvalidOperand.to_string(),
            "Operands must be numeric."
        );
        assert_eq!(CalcError::DivisionByZero.to_string(), "Division by zero.");
        assert_eq!(
            CalcError::EmptyHistory.to_string(),
            "No calculations in history."
        );
    }

    #[test]
    fn test_error_is_std_error() {
        use std::error::Error;

        let err: Box<dyn Error> = Box::new(CalcError::DivisionByZero);
        assert!(err.source().is_none());
    }
}

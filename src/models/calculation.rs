//! The immutable record of one performed calculation.

use super::operation::Operation;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

/// A single entry in the calculation history.
///
/// Represents one performed operation: which operation ran, the two
/// operands in call order, and the computed result. A `Calculation` is
/// immutable once constructed; fields are private and no mutators exist.
///
/// The constructor stores its arguments verbatim without recomputation or
/// revalidation, so a `Calculation` can also record hypothetical results
/// in tests.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Calculation {
    /// The operation that was performed.
    operation: Operation,

    /// The two operands, in call order.
    operands: [f64; 2],

    /// The computed result.
    result: f64,

    /// When this calculation was performed, in UTC.
    timestamp: DateTime<Utc>,
}

impl Calculation {
    /// Creates a new calculation record.
    ///
    /// # Arguments
    ///
    /// * `operation` - The operation that was performed
    /// * `operands` - The two operands, in call order
    /// * `result` - The computed result
    ///
    /// # Returns
    ///
    /// A new `Calculation` stamped with the current UTC time. The
    /// arguments are stored as given; nothing is recomputed or validated.
    pub fn new(operation: Operation, operands: [f64; 2], result: f64) -> Self {
        Self {
            operation,
            operands,
            result,
            timestamp: Utc::now(),
        }
    }

    /// Returns the operation that was performed.
    pub fn operation(&self) -> Operation {
        self.operation
    }

    /// Returns the stored operands, in call order.
    pub fn operands(&self) -> [f64; 2] {
        self.operands
    }

    /// Returns the stored result.
    pub fn result(&self) -> f64 {
        self.result
    }

    /// Returns the UTC timestamp recorded at construction.
    pub fn timestamp(&self) -> DateTime<Utc> {
        self.timestamp
    }
}

impl fmt::Display for Calculation {
    /// Formats the calculation as `"<Label>: [op1, op2] = result"`.
    ///
    /// Numbers use `f64`'s shortest rendering, so integer-valued results
    /// print without a decimal point: `"Add: [1, 2] = 3"`,
    /// `"Divide: [5, 2] = 2.5"`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}: [{}, {}] = {}",
            self.operation.label(),
            self.operands[0],
            self.operands[1],
            self.result
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_stores_fields_verbatim() {
        let calc = Calculation::new(Operation::Subtract, [5.0, 3.0], 2.0);
        assert_eq!(calc.operation(), Operation::Subtract);
        assert_eq!(calc.operands(), [5.0, 3.0]);
        assert_eq!(calc.result(), 2.0);
    }

    #[test]
    fn test_new_does_not_recompute() {
        // The constructor is a pure data carrier; a wrong result is kept.
        let calc = Calculation::new(Operation::Add, [1.0, 1.0], 5.0);
        assert_eq!(calc.result(), 5.0);
    }

    #[test]
    fn test_display_integer_values() {
        let calc = Calculation::new(Operation::Add, [1.0, 2.0], 3.0);
        assert_eq!(calc.to_string(), "Add: [1, 2] = 3");
    }

    #[test]
    fn test_display_fractional_result() {
        let calc = Calculation::new(Operation::Divide, [5.0, 2.0], 2.5);
        assert_eq!(calc.to_string(), "Divide: [5, 2] = 2.5");
    }

    #[test]
    fn test_display_negative_values() {
        let calc = Calculation::new(Operation::Multiply, [-1.0, 5.0], -5.0);
        assert_eq!(calc.to_string(), "Multiply: [-1, 5] = -5");
    }

    #[test]
    fn test_timestamp_is_recent() {
        let before = Utc::now();
        let calc = Calculation::new(Operation::Add, [0.0, 0.0], 0.0);
        let after = Utc::now();
        assert!(calc.timestamp() >= before);
        assert!(calc.timestamp() <= after);
    }

    #[test]
    fn test_serialization_round_trip() {
        let calc = Calculation::new(Operation::Divide, [6.0, 3.0], 2.0);
        let json = serde_json::to_string(&calc).unwrap();
        assert!(json.contains("\"divide\""));
        assert!(json.contains("timestamp"));

        let deserialized: Calculation = serde_json::from_str(&json).unwrap();
        assert_eq!(deserialized, calc);
    }
}

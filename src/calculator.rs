//! The calculator facade.
//!
//! This module ties the arithmetic operations to the history store. Each
//! operation validates its operands, computes the result, records a
//! [`Calculation`], and returns the result. Failed calls leave the
//! history untouched.

use crate::error::CalcError;
use crate::history::History;
use crate::models::{Calculation, Operation};
use serde_json::Value;

/// Extracts a numeric operand from a JSON value.
///
/// Accepts any JSON number (integer or floating point). Strings, nulls,
/// booleans, arrays, and objects are rejected.
///
/// # Errors
///
/// Returns `CalcError::InvalidOperand` for non-numeric values.
pub fn numeric_operand(value: &Value) -> Result<f64, CalcError> {
    value.as_f64().ok_or(CalcError::InvalidOperand)
}

/// Arithmetic calculator with operation history.
///
/// `Calculator` exposes the four elementary binary operations and records
/// every successful call in its owned [`History`]. The history can be
/// injected at construction and recovered afterwards, so callers decide
/// its lifetime; two calculators never share state implicitly.
///
/// # Example
///
/// ```
/// use calc_history::{Calculator, Operation};
///
/// let mut calc = Calculator::new();
/// assert_eq!(calc.add(1.0, 2.0).unwrap(), 3.0);
/// assert_eq!(calc.divide(5.0, 2.0).unwrap(), 2.5);
///
/// assert_eq!(calc.history().len(), 2);
/// let last = calc.last_calculation().unwrap();
/// assert_eq!(last.operation(), Operation::Divide);
/// ```
#[derive(Debug, Clone, Default)]
pub struct Calculator {
    history: History,
}

impl Calculator {
    /// Creates a calculator with an empty history.
    pub fn new() -> Self {
        Self {
            history: History::new(),
        }
    }

    /// Creates a calculator that records into the given history.
    ///
    /// # Arguments
    ///
    /// * `history` - An existing history to continue appending to
    pub fn with_history(history: History) -> Self {
        Self { history }
    }

    /// Returns the history of recorded calculations.
    pub fn history(&self) -> &History {
        &self.history
    }

    /// Consumes the calculator and returns its history.
    pub fn into_history(self) -> History {
        self.history
    }

    /// Adds two numbers.
    ///
    /// # Errors
    ///
    /// Returns `CalcError::InvalidOperand` if either operand is not a
    /// finite number.
    pub fn add(&mut self, a: f64, b: f64) -> Result<f64, CalcError> {
        self.apply(Operation::Add, a, b)
    }

    /// Subtracts `b` from `a`.
    ///
    /// # Errors
    ///
    /// Returns `CalcError::InvalidOperand` if either operand is not a
    /// finite number.
    pub fn subtract(&mut self, a: f64, b: f64) -> Result<f64, CalcError> {
        self.apply(Operation::Subtract, a, b)
    }

    /// Multiplies two numbers.
    ///
    /// # Errors
    ///
    /// Returns `CalcError::InvalidOperand` if either operand is not a
    /// finite number.
    pub fn multiply(&mut self, a: f64, b: f64) -> Result<f64, CalcError> {
        self.apply(Operation::Multiply, a, b)
    }

    /// Divides `a` by `b`.
    ///
    /// # Errors
    ///
    /// Returns `CalcError::InvalidOperand` if either operand is not a
    /// finite number, or `CalcError::DivisionByZero` if `b` is zero. The
    /// operand check runs first; neither failure touches the history.
    pub fn divide(&mut self, a: f64, b: f64) -> Result<f64, CalcError> {
        self.apply(Operation::Divide, a, b)
    }

    /// Performs an operation selected at runtime.
    ///
    /// Validates the operands, checks the divisor for division, computes
    /// the result, and records the calculation.
    ///
    /// # Arguments
    ///
    /// * `operation` - Which operation to perform
    /// * `a` - First operand
    /// * `b` - Second operand
    ///
    /// # Errors
    ///
    /// Same conditions as the named operation methods.
    pub fn apply(&mut self, operation: Operation, a: f64, b: f64) -> Result<f64, CalcError> {
        validate_operands(a, b)?;

        let result = match operation {
            Operation::Add => a + b,
            Operation::Subtract => a - b,
            Operation::Multiply => a * b,
            Operation::Divide => {
                if b == 0.0 {
                    return Err(CalcError::DivisionByZero);
                }
                a / b
            }
        };

        self.history
            .record(Calculation::new(operation, [a, b], result));
        Ok(result)
    }

    /// Performs an operation on dynamically typed JSON operands.
    ///
    /// This is the boundary for callers holding untyped input: both
    /// values must be JSON numbers, and non-numeric values (strings,
    /// nulls, booleans, ...) fail before any computation or history
    /// mutation.
    ///
    /// # Arguments
    ///
    /// * `operation` - Which operation to perform
    /// * `a` - First operand as a JSON value
    /// * `b` - Second operand as a JSON value
    ///
    /// # Errors
    ///
    /// Returns `CalcError::InvalidOperand` for non-numeric values, plus
    /// the same conditions as the typed operation methods.
    ///
    /// # Example
    ///
    /// ```
    /// use calc_history::{CalcError, Calculator, Operation};
    /// use serde_json::json;
    ///
    /// let mut calc = Calculator::new();
    /// assert_eq!(
    ///     calc.eval(Operation::Add, &json!(1), &json!(2)).unwrap(),
    ///     3.0
    /// );
    /// assert_eq!(
    ///     calc.eval(Operation::Add, &json!("string"), &json!(2)),
    ///     Err(CalcError::InvalidOperand)
    /// );
    /// ```
    pub fn eval(&mut self, operation: Operation, a: &Value, b: &Value) -> Result<f64, CalcError> {
        let a = numeric_operand(a)?;
        let b = numeric_operand(b)?;
        self.apply(operation, a, b)
    }

    /// Removes all recorded calculations.
    ///
    /// Clearing an already-empty history is a no-op.
    pub fn clear_history(&mut self) {
        self.history.clear();
    }

    /// Returns the most recently recorded calculation.
    ///
    /// # Errors
    ///
    /// Returns `CalcError::EmptyHistory` if nothing has been recorded.
    pub fn last_calculation(&self) -> Result<&Calculation, CalcError> {
        self.history.last()
    }

    /// Returns the recorded calculations for one operation.
    ///
    /// # Arguments
    ///
    /// * `operation` - The operation to filter by
    ///
    /// # Returns
    ///
    /// Matching calculations in chronological order; empty if none match.
    pub fn calculations_by_operation(&self, operation: Operation) -> Vec<Calculation> {
        self.history.by_operation(operation)
    }
}

/// Checks that both operands are finite numbers.
fn validate_operands(a: f64, b: f64) -> Result<(), CalcError> {
    if a.is_finite() && b.is_finite() {
        Ok(())
    } else {
        Err(CalcError::InvalidOperand)
    }
}

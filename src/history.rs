//! Calculation history tracking.
//!
//! This module provides the ordered, in-memory store of performed
//! calculations. The store is an explicit container owned by whoever
//! constructs it (normally a [`Calculator`](crate::Calculator)); there is
//! no process-wide shared state, so tests and embedders get a fresh,
//! independent history per instance.
//!
//! # Example
//!
//! ```
//! use calc_history::{Calculation, History, Operation};
//!
//! let mut history = History::new();
//! history.record(Calculation::new(Operation::Add, [1.0, 2.0], 3.0));
//!
//! assert_eq!(history.len(), 1);
//! assert_eq!(history.last().unwrap().result(), 3.0);
//! ```

use crate::error::CalcError;
use crate::models::{Calculation, Operation};

/// Ordered store of performed calculations.
///
/// Entries are kept in insertion order, which is the chronological order
/// of the calls that produced them. The store only grows through
/// [`record`](History::record) and only empties through
/// [`clear`](History::clear).
#[derive(Debug, Clone, Default, PartialEq)]
pub struct History {
    entries: Vec<Calculation>,
}

impl History {
    /// Creates an empty history.
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// Appends a calculation to the history.
    ///
    /// # Arguments
    ///
    /// * `calculation` - The record to append
    pub fn record(&mut self, calculation: Calculation) {
        self.entries.push(calculation);
    }

    /// Returns all recorded calculations in chronological order.
    pub fn entries(&self) -> &[Calculation] {
        &self.entries
    }

    /// Returns the number of recorded calculations.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` if no calculations have been recorded.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Removes all recorded calculations.
    ///
    /// Clearing an already-empty history is a no-op.
    pub fn clear(&mut self) {
        self.entries.clear();
    }

    /// Returns the most recently recorded calculation.
    ///
    /// # Errors
    ///
    /// Returns `CalcError::EmptyHistory` if nothing has been recorded.
    pub fn last(&self) -> Result<&Calculation, CalcError> {
        self.entries.last().ok_or(CalcError::EmptyHistory)
    }

    /// Returns the calculations performed with the given operation.
    ///
    /// # Arguments
    ///
    /// * `operation` - The operation to filter by
    ///
    /// # Returns
    ///
    /// A vector of matching calculations in their original chronological
    /// order; empty if none match.
    pub fn by_operation(&self, operation: Operation) -> Vec<Calculation> {
        self.entries
            .iter()
            .filter(|calc| calc.operation() == operation)
            .cloned()
            .collect()
    }
}

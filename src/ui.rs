//! Display formatting utilities for calculation history.
//!
//! This module provides functions for formatting recorded calculations
//! into human-readable strings suitable for list views and summaries.

use crate::models::{Calculation, Operation};

/// Formats a list of calculations for display, one line per entry.
///
/// Each line uses the calculation's display form, e.g. `"Add: [1, 2] = 3"`.
///
/// # Arguments
///
/// * `entries` - The calculations to format
///
/// # Returns
///
/// A vector of formatted strings in the same order as the input.
pub fn format_history_list(entries: &[Calculation]) -> Vec<String> {
    entries.iter().map(|calc| calc.to_string()).collect()
}

/// Formats summary statistics for a set of calculations.
///
/// Produces a total count followed by a per-operation breakdown in a
/// fixed operation order.
///
/// # Arguments
///
/// * `entries` - The calculations to summarize
///
/// # Returns
///
/// A multi-line summary string.
pub fn format_history_stats(entries: &[Calculation]) -> String {
    let mut output = format!("Total calculations: {}\n", entries.len());

    for op in Operation::ALL {
        let count = entries.iter().filter(|c| c.operation() == op).count();
        output.push_str(&format!("  {}: {}\n", op.label(), count));
    }

    output
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_history_list() {
        let entries = vec![
            Calculation::new(Operation::Add, [1.0, 2.0], 3.0),
            Calculation::new(Operation::Divide, [5.0, 2.0], 2.5),
        ];

        let formatted = format_history_list(&entries);
        assert_eq!(formatted, vec!["Add: [1, 2] = 3", "Divide: [5, 2] = 2.5"]);
    }

    #[test]
    fn test_format_history_list_empty() {
        assert!(format_history_list(&[]).is_empty());
    }

    #[test]
    fn test_format_history_stats() {
        let entries = vec![
            Calculation::new(Operation::Add, [1.0, 1.0], 2.0),
            Calculation::new(Operation::Add, [2.0, 2.0], 4.0),
            Calculation::new(Operation::Subtract, [2.0, 1.0], 1.0),
        ];

        let stats = format_history_stats(&entries);
        assert!(stats.contains("Total calculations: 3"));
        assert!(stats.contains("Add: 2"));
        assert!(stats.contains("Subtract: 1"));
        assert!(stats.contains("Multiply: 0"));
        assert!(stats.contains("Divide: 0"));
    }
}

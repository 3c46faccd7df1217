//! The arithmetic operation tag.

use serde::{Deserialize, Serialize};

/// Arithmetic operation.
///
/// Represents the four elementary binary operations the calculator
/// supports. The lowercase string tags (`"add"`, `"subtract"`,
/// `"multiply"`, `"divide"`) are the canonical wire form, used both for
/// serialization and for parsing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Operation {
    /// Addition - result = a + b
    Add,
    /// Subtraction - result = a - b
    Subtract,
    /// Multiplication - result = a * b
    Multiply,
    /// Division - result = a / b, fails on a zero divisor
    Divide,
}

impl Operation {
    /// All operations in a fixed, stable order.
    pub const ALL: [Operation; 4] = [
        Operation::Add,
        Operation::Subtract,
        Operation::Multiply,
        Operation::Divide,
    ];

    /// Returns the lowercase string tag for this operation.
    pub fn as_str(&self) -> &'static str {
        match self {
            Operation::Add => "add",
            Operation::Subtract => "subtract",
            Operation::Multiply => "multiply",
            Operation::Divide => "divide",
        }
    }

    /// Returns the capitalized label used in display output.
    ///
    /// Only the first letter of the tag is capitalized, e.g. `"Add"`.
    pub fn label(&self) -> &'static str {
        match self {
            Operation::Add => "Add",
            Operation::Subtract => "Subtract",
            Operation::Multiply => "Multiply",
            Operation::Divide => "Divide",
        }
    }

    /// Parses a lowercase operation tag into an `Operation`.
    ///
    /// # Arguments
    ///
    /// * `s` - A string slice holding the operation tag
    ///
    /// # Returns
    ///
    /// `Some(Operation)` if the tag is one of the four known operations,
    /// `None` otherwise.
    pub fn from_tag(s: &str) -> Option<Self> {
        match s {
            "add" => Some(Operation::Add),
            "subtract" => Some(Operation::Subtract),
            "multiply" => Some(Operation::Multiply),
            "divide" => Some(Operation::Divide),
            _ => None,
        }
    }
}

impl std::fmt::Display for Operation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for Operation {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Operation::from_tag(s).ok_or_else(|| format!("Unknown operation: {}", s))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_as_str() {
        assert_eq!(Operation::Add.as_str(), "add");
        assert_eq!(Operation::Subtract.as_str(), "subtract");
        assert_eq!(Operation::Multiply.as_str(), "multiply");
        assert_eq!(Operation::Divide.as_str(), "divide");
    }

    #[test]
    fn test_label_capitalizes_first_letter_only() {
        assert_eq!(Operation::Add.label(), "Add");
        assert_eq!(Operation::Divide.label(), "Divide");
    }

    #[test]
    fn test_from_tag_round_trip() {
        for op in Operation::ALL {
            assert_eq!(Operation::from_tag(op.as_str()), Some(op));
        }
    }

    #[test]
    fn test_from_tag_rejects_unknown() {
        assert_eq!(Operation::from_tag("modulo"), None);
        assert_eq!(Operation::from_tag("Add"), None);
        assert_eq!(Operation::from_tag(""), None);
    }

    #[test]
    fn test_from_str_trait() {
        let op: Operation = "multiply".parse().unwrap();
        assert_eq!(op, Operation::Multiply);
        assert!("power".parse::<Operation>().is_err());
    }

    #[test]
    fn test_serde_lowercase_tags() {
        let json = serde_json::to_string(&Operation::Subtract).unwrap();
        assert_eq!(json, "\"subtract\"");

        let op: Operation = serde_json::from_str("\"divide\"").unwrap();
        assert_eq!(op, Operation::Divide);
    }
}

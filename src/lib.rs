//! Arithmetic calculator with operation history.
//!
//! This crate provides a basic calculator that performs the four
//! elementary binary operations (add, subtract, multiply, divide) on
//! pairs of numbers, validates operands at the boundary, and records
//! every successful operation in an ordered, queryable history.
//!
//! # Architecture
//!
//! The crate is organized into a few small modules:
//!
//! - **models**: Core data structures - the [`Operation`] tag and the
//!   immutable [`Calculation`] record
//! - **history**: The ordered [`History`] store of recorded calculations
//! - **calculator**: The [`Calculator`] facade tying operations to the
//!   history, including a dynamic-value boundary for JSON operands
//! - **ui**: Display formatting for history listings and summaries
//! - **error**: The closed [`CalcError`] taxonomy
//!
//! Each `Calculator` owns its history; there is no process-wide shared
//! state. The history can be injected at construction and recovered
//! afterwards, so callers control its lifetime.
//!
//! # Example
//!
//! ```
//! use calc_history::{Calculator, Operation};
//!
//! let mut calc = Calculator::new();
//! calc.add(1.0, 2.0)?;
//! calc.divide(5.0, 2.0)?;
//!
//! assert_eq!(calc.history().len(), 2);
//! assert_eq!(
//!     calc.last_calculation()?.to_string(),
//!     "Divide: [5, 2] = 2.5"
//! );
//!
//! let additions = calc.calculations_by_operation(Operation::Add);
//! assert_eq!(additions.len(), 1);
//! # Ok::<(), calc_history::CalcError>(())
//! ```

pub mod calculator;
pub mod error;
pub mod history;
pub mod models;
pub mod ui;

pub use calculator::{numeric_operand, Calculator};
pub use error::CalcError;
pub use history::History;
pub use models::{Calculation, Operation};

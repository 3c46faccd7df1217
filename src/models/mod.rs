//! Data models for calculations.
//!
//! This module contains the core data structures used throughout the
//! calculator for representing operations and their recorded results.

pub mod calculation;
pub mod operation;

pub use calculation::Calculation;
pub use operation::Operation;

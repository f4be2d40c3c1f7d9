//! Core domain types: confusion-matrix counts, labelled detection outcomes
//! and catalog periods.

pub mod confusion;
pub mod macros;
pub mod period;

pub use confusion::*;
pub use period::*;

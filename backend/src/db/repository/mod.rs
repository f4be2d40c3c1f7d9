//! Repository trait definitions for catalog access.
//!
//! - [`error`]: Error types for repository operations
//! - [`period`]: Read access to the evaluation period catalog

pub mod error;
pub mod period;

pub use error::{ErrorContext, RepositoryError, RepositoryResult};
pub use period::PeriodRepository;

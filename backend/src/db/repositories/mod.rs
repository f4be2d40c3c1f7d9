//! Repository implementations module.
//!
//! - `local`: In-memory catalog, built-in or loaded from a TOML file
pub mod local;

pub use local::LocalRepository;

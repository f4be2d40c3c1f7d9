//! # Fraud Evaluation Backend
//!
//! Evaluation metrics for a fraud-detection dashboard.
//!
//! Given the confusion-matrix counts of a reporting period (true/false
//! positives and negatives), this crate derives precision, recall, F1 and
//! accuracy, classifies them into qualitative bands, and serves the result to
//! the dashboard front-end over a small REST API.
//!
//! ## Architecture
//!
//! - [`models`]: Confusion counts, detection outcomes and catalog periods
//! - [`services`]: Metrics calculator, outcome tally and presentation model
//! - [`db`]: Period catalog behind the repository pattern
//! - [`routes`]: Response types and route names
//! - [`api`]: Consolidated public types
//! - [`http`]: Axum-based HTTP server and request handlers
//!
//! ## Example
//!
//! ```
//! use fraud_eval::api::{ConfusionCounts, RecallBand};
//! use fraud_eval::services::{derive_metrics, summarize};
//!
//! let metrics = derive_metrics(&ConfusionCounts::new(120, 30, 850, 25));
//! assert_eq!(metrics.precision, 0.8);
//! assert_eq!(summarize(&metrics).recall_band, RecallBand::Good);
//! ```

pub mod api;

pub mod db;
pub mod models;

pub mod routes;

pub mod services;

#[cfg(feature = "http-server")]
pub mod http;

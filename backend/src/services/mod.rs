//! Service layer for evaluation logic.
//!
//! This module contains the pure computations behind the evaluation panel:
//! metric derivation and classification, outcome tallies, and the
//! display-ready presentation model. Nothing here touches the repository.

pub mod evaluation;
pub mod presentation;
pub mod tally;


pub use evaluation::{
    build_report, classify_precision, classify_recall, compute_accuracy, compute_f1,
    compute_precision, compute_recall, derive_metrics, evaluate_counts, summarize,
};
pub use presentation::{bar_width, confusion_cells, format_percentage, metric_rows};
pub use tally::tally_outcomes;

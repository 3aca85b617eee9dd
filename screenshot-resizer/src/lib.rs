//! Batch resizer for App Store screenshots.
//!
//! Scans a fixed directory for image files and resizes each one in place to
//! a fixed resolution, reporting one status line per file and a final tally.

pub mod batch;
pub mod config;
pub mod scan;

pub use batch::{BatchResizer, BatchRun, BatchSummary, ResizeOutcome};
pub use config::ResizerConfig;
pub use scan::{Candidate, find_candidates};

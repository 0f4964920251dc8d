//! Scoring engine for rubric, checklist and auto-evaluation methodologies.
//!
//! The [`engine`] module is the pure core; the remaining modules load
//! documents, configuration and render reports for the `evalscore` binary.

pub mod config;
pub mod documents;
pub mod engine;
pub mod error;
pub mod fingerprint;
pub mod logging;
pub mod report;
pub mod types;

pub use engine::{Completion, Progress};
pub use error::{EvalError, Result};
pub use types::methodology::Methodology;
